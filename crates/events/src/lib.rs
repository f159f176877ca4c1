//! In-process platform event plumbing for the FactoryOS theme service.

pub mod bus;

pub use bus::{EventBus, PlatformEvent};
