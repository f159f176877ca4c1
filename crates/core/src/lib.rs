//! FactoryOS theme engine core.
//!
//! Pure, synchronous, in-memory implementation of the layered theme
//! resolution system: the token model, the composition engine, the theme
//! registry (with system-theme immutability), and the resolver that turns a
//! [`resolver::ThemeResolutionContext`] into a fully composed token set.
//!
//! The core performs no I/O and defines no wire format of its own; the HTTP
//! adapter in `factoryos-api` is the only external surface.

pub mod compose;
pub mod defaults;
pub mod definition;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod roles;
pub mod tenant;
pub mod tokens;
pub mod types;
