//! Design-token model: the fully-populated [`ThemeTokens`] value and its
//! deep-partial overlay counterpart [`ThemeLayer`].
//!
//! `ThemeTokens` is the always-complete composed result — every field is
//! present and typed, which the compiler enforces. `ThemeLayer` mirrors the
//! same tree with every leaf wrapped in `Option` and every nested group
//! wrapped in an `Option<...Overlay>`: `None` means "inherit from the
//! next-lower layer". Serde ignores unknown JSON keys on deserialization, so
//! sloppy payloads degrade to the fields they do spell correctly; values of
//! the wrong type are rejected at the boundary instead of being trusted at
//! lookup time.
//!
//! Merging is hand-written per nesting level (`apply` on each overlay type):
//! nested overlay structs recurse, leaves replace the accumulator value
//! outright. Nothing ever deletes a key, so a composed result is complete by
//! construction.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Complete token set
// ---------------------------------------------------------------------------

/// The complete, always-fully-populated theme configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub radius: RadiusTokens,
    pub shadows: ShadowTokens,
    pub layout: LayoutTokens,
    pub behavior: BehaviorTokens,
    pub branding: BrandingTokens,
    /// Whether this is a dark-mode token set.
    pub dark: bool,
}

/// A ten-step color scale, 50 (lightest) through 900 (darkest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(rename = "50")]
    pub s50: String,
    #[serde(rename = "100")]
    pub s100: String,
    #[serde(rename = "200")]
    pub s200: String,
    #[serde(rename = "300")]
    pub s300: String,
    #[serde(rename = "400")]
    pub s400: String,
    #[serde(rename = "500")]
    pub s500: String,
    #[serde(rename = "600")]
    pub s600: String,
    #[serde(rename = "700")]
    pub s700: String,
    #[serde(rename = "800")]
    pub s800: String,
    #[serde(rename = "900")]
    pub s900: String,
}

/// Scaled palettes plus semantic surface/brand colors (CSS color strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: Palette,
    pub neutral: Palette,
    pub background: String,
    pub surface: String,
    pub surface_raised: String,
    pub border: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_inverse: String,
    pub brand: String,
    pub brand_contrast: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub info: String,
}

/// Font stacks, the fixed size scale, weights, line heights, and the global
/// scale multiplier applied by accessibility-oriented layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyTokens {
    pub font_family: String,
    pub font_family_mono: String,
    pub sizes: FontSizes,
    pub weights: FontWeights,
    pub line_heights: LineHeights,
    /// Global multiplier applied on top of the fixed size scale.
    pub font_scale: f64,
}

/// Fixed font size scale in px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    pub xxl: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontWeights {
    pub regular: u16,
    pub medium: u16,
    pub bold: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    pub tight: f64,
    pub normal: f64,
    pub relaxed: f64,
}

/// Spacing scale in px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    pub xxl: f64,
}

/// Corner radius scale in px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub none: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub full: f64,
}

/// Box-shadow presets as CSS shadow strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
}

/// Chrome metrics in px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTokens {
    pub sidebar_width: f64,
    pub header_height: f64,
    pub content_padding: f64,
    pub card_radius: f64,
    pub control_radius: f64,
}

/// Behavior flags applied by role, environment, and compliance layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorTokens {
    pub animations_enabled: bool,
    pub reduced_motion: bool,
    pub high_contrast: bool,
    /// Render the compliance watermark over content areas.
    pub compliance_watermark: bool,
    pub show_audit_trail: bool,
    pub read_only_mode: bool,
    /// Idle minutes before the session locks. `0` disables auto-lock.
    pub auto_lock_minutes: u32,
    /// Minimum interactive target size in px.
    pub min_touch_target: f64,
}

/// Tenant-facing branding values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingTokens {
    pub name: String,
    pub logo_url: Option<String>,
    pub logo_compact_url: Option<String>,
    pub favicon_url: Option<String>,
    pub login_background_url: Option<String>,
    pub powered_by: String,
    /// Prefix for generated CSS custom properties.
    pub css_prefix: String,
}

// ---------------------------------------------------------------------------
// Deep-partial overlay
// ---------------------------------------------------------------------------

/// A deep-partial overlay of [`ThemeTokens`].
///
/// Any subset of fields, at any nesting depth, may be specified; absent
/// fields inherit from the next-lower layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<RadiusOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<ShadowOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior: Option<BehaviorOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<BrandingOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<bool>,
}

impl ThemeLayer {
    /// Merge this overlay onto `tokens`, highest precedence wins.
    pub fn apply(&self, tokens: &mut ThemeTokens) {
        if let Some(colors) = &self.colors {
            colors.apply(&mut tokens.colors);
        }
        if let Some(typography) = &self.typography {
            typography.apply(&mut tokens.typography);
        }
        if let Some(spacing) = &self.spacing {
            spacing.apply(&mut tokens.spacing);
        }
        if let Some(radius) = &self.radius {
            radius.apply(&mut tokens.radius);
        }
        if let Some(shadows) = &self.shadows {
            shadows.apply(&mut tokens.shadows);
        }
        if let Some(layout) = &self.layout {
            layout.apply(&mut tokens.layout);
        }
        if let Some(behavior) = &self.behavior {
            behavior.apply(&mut tokens.behavior);
        }
        if let Some(branding) = &self.branding {
            branding.apply(&mut tokens.branding);
        }
        if let Some(dark) = self.dark {
            tokens.dark = dark;
        }
    }

    /// True when no section of the overlay is present.
    pub fn is_empty(&self) -> bool {
        self.colors.is_none()
            && self.typography.is_none()
            && self.spacing.is_none()
            && self.radius.is_none()
            && self.shadows.is_none()
            && self.layout.is_none()
            && self.behavior.is_none()
            && self.branding.is_none()
            && self.dark.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOverlay {
    #[serde(rename = "50", skip_serializing_if = "Option::is_none")]
    pub s50: Option<String>,
    #[serde(rename = "100", skip_serializing_if = "Option::is_none")]
    pub s100: Option<String>,
    #[serde(rename = "200", skip_serializing_if = "Option::is_none")]
    pub s200: Option<String>,
    #[serde(rename = "300", skip_serializing_if = "Option::is_none")]
    pub s300: Option<String>,
    #[serde(rename = "400", skip_serializing_if = "Option::is_none")]
    pub s400: Option<String>,
    #[serde(rename = "500", skip_serializing_if = "Option::is_none")]
    pub s500: Option<String>,
    #[serde(rename = "600", skip_serializing_if = "Option::is_none")]
    pub s600: Option<String>,
    #[serde(rename = "700", skip_serializing_if = "Option::is_none")]
    pub s700: Option<String>,
    #[serde(rename = "800", skip_serializing_if = "Option::is_none")]
    pub s800: Option<String>,
    #[serde(rename = "900", skip_serializing_if = "Option::is_none")]
    pub s900: Option<String>,
}

impl PaletteOverlay {
    fn apply(&self, palette: &mut Palette) {
        if let Some(v) = &self.s50 {
            palette.s50 = v.clone();
        }
        if let Some(v) = &self.s100 {
            palette.s100 = v.clone();
        }
        if let Some(v) = &self.s200 {
            palette.s200 = v.clone();
        }
        if let Some(v) = &self.s300 {
            palette.s300 = v.clone();
        }
        if let Some(v) = &self.s400 {
            palette.s400 = v.clone();
        }
        if let Some(v) = &self.s500 {
            palette.s500 = v.clone();
        }
        if let Some(v) = &self.s600 {
            palette.s600 = v.clone();
        }
        if let Some(v) = &self.s700 {
            palette.s700 = v.clone();
        }
        if let Some(v) = &self.s800 {
            palette.s800 = v.clone();
        }
        if let Some(v) = &self.s900 {
            palette.s900 = v.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<PaletteOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral: Option<PaletteOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_raised: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_inverse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_contrast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl ColorOverlay {
    fn apply(&self, colors: &mut ColorTokens) {
        if let Some(primary) = &self.primary {
            primary.apply(&mut colors.primary);
        }
        if let Some(neutral) = &self.neutral {
            neutral.apply(&mut colors.neutral);
        }
        if let Some(v) = &self.background {
            colors.background = v.clone();
        }
        if let Some(v) = &self.surface {
            colors.surface = v.clone();
        }
        if let Some(v) = &self.surface_raised {
            colors.surface_raised = v.clone();
        }
        if let Some(v) = &self.border {
            colors.border = v.clone();
        }
        if let Some(v) = &self.text_primary {
            colors.text_primary = v.clone();
        }
        if let Some(v) = &self.text_secondary {
            colors.text_secondary = v.clone();
        }
        if let Some(v) = &self.text_inverse {
            colors.text_inverse = v.clone();
        }
        if let Some(v) = &self.brand {
            colors.brand = v.clone();
        }
        if let Some(v) = &self.brand_contrast {
            colors.brand_contrast = v.clone();
        }
        if let Some(v) = &self.success {
            colors.success = v.clone();
        }
        if let Some(v) = &self.warning {
            colors.warning = v.clone();
        }
        if let Some(v) = &self.danger {
            colors.danger = v.clone();
        }
        if let Some(v) = &self.info {
            colors.info = v.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family_mono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<FontSizesOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<FontWeightsOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_heights: Option<LineHeightsOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_scale: Option<f64>,
}

impl TypographyOverlay {
    fn apply(&self, typography: &mut TypographyTokens) {
        if let Some(v) = &self.font_family {
            typography.font_family = v.clone();
        }
        if let Some(v) = &self.font_family_mono {
            typography.font_family_mono = v.clone();
        }
        if let Some(sizes) = &self.sizes {
            sizes.apply(&mut typography.sizes);
        }
        if let Some(weights) = &self.weights {
            weights.apply(&mut typography.weights);
        }
        if let Some(line_heights) = &self.line_heights {
            line_heights.apply(&mut typography.line_heights);
        }
        if let Some(v) = self.font_scale {
            typography.font_scale = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizesOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xxl: Option<f64>,
}

impl FontSizesOverlay {
    fn apply(&self, sizes: &mut FontSizes) {
        if let Some(v) = self.xs {
            sizes.xs = v;
        }
        if let Some(v) = self.sm {
            sizes.sm = v;
        }
        if let Some(v) = self.md {
            sizes.md = v;
        }
        if let Some(v) = self.lg {
            sizes.lg = v;
        }
        if let Some(v) = self.xl {
            sizes.xl = v;
        }
        if let Some(v) = self.xxl {
            sizes.xxl = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontWeightsOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<u16>,
}

impl FontWeightsOverlay {
    fn apply(&self, weights: &mut FontWeights) {
        if let Some(v) = self.regular {
            weights.regular = v;
        }
        if let Some(v) = self.medium {
            weights.medium = v;
        }
        if let Some(v) = self.bold {
            weights.bold = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineHeightsOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relaxed: Option<f64>,
}

impl LineHeightsOverlay {
    fn apply(&self, line_heights: &mut LineHeights) {
        if let Some(v) = self.tight {
            line_heights.tight = v;
        }
        if let Some(v) = self.normal {
            line_heights.normal = v;
        }
        if let Some(v) = self.relaxed {
            line_heights.relaxed = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xxl: Option<f64>,
}

impl SpacingOverlay {
    fn apply(&self, spacing: &mut SpacingTokens) {
        if let Some(v) = self.xs {
            spacing.xs = v;
        }
        if let Some(v) = self.sm {
            spacing.sm = v;
        }
        if let Some(v) = self.md {
            spacing.md = v;
        }
        if let Some(v) = self.lg {
            spacing.lg = v;
        }
        if let Some(v) = self.xl {
            spacing.xl = v;
        }
        if let Some(v) = self.xxl {
            spacing.xxl = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub none: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<f64>,
}

impl RadiusOverlay {
    fn apply(&self, radius: &mut RadiusTokens) {
        if let Some(v) = self.none {
            radius.none = v;
        }
        if let Some(v) = self.sm {
            radius.sm = v;
        }
        if let Some(v) = self.md {
            radius.md = v;
        }
        if let Some(v) = self.lg {
            radius.lg = v;
        }
        if let Some(v) = self.full {
            radius.full = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub none: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<String>,
}

impl ShadowOverlay {
    fn apply(&self, shadows: &mut ShadowTokens) {
        if let Some(v) = &self.none {
            shadows.none = v.clone();
        }
        if let Some(v) = &self.sm {
            shadows.sm = v.clone();
        }
        if let Some(v) = &self.md {
            shadows.md = v.clone();
        }
        if let Some(v) = &self.lg {
            shadows.lg = v.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_radius: Option<f64>,
}

impl LayoutOverlay {
    fn apply(&self, layout: &mut LayoutTokens) {
        if let Some(v) = self.sidebar_width {
            layout.sidebar_width = v;
        }
        if let Some(v) = self.header_height {
            layout.header_height = v;
        }
        if let Some(v) = self.content_padding {
            layout.content_padding = v;
        }
        if let Some(v) = self.card_radius {
            layout.card_radius = v;
        }
        if let Some(v) = self.control_radius {
            layout.control_radius = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_watermark: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_audit_trail: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_lock_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_touch_target: Option<f64>,
}

impl BehaviorOverlay {
    fn apply(&self, behavior: &mut BehaviorTokens) {
        if let Some(v) = self.animations_enabled {
            behavior.animations_enabled = v;
        }
        if let Some(v) = self.reduced_motion {
            behavior.reduced_motion = v;
        }
        if let Some(v) = self.high_contrast {
            behavior.high_contrast = v;
        }
        if let Some(v) = self.compliance_watermark {
            behavior.compliance_watermark = v;
        }
        if let Some(v) = self.show_audit_trail {
            behavior.show_audit_trail = v;
        }
        if let Some(v) = self.read_only_mode {
            behavior.read_only_mode = v;
        }
        if let Some(v) = self.auto_lock_minutes {
            behavior.auto_lock_minutes = v;
        }
        if let Some(v) = self.min_touch_target {
            behavior.min_touch_target = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_compact_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_background_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powered_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_prefix: Option<String>,
}

impl BrandingOverlay {
    fn apply(&self, branding: &mut BrandingTokens) {
        if let Some(v) = &self.name {
            branding.name = v.clone();
        }
        if let Some(v) = &self.logo_url {
            branding.logo_url = Some(v.clone());
        }
        if let Some(v) = &self.logo_compact_url {
            branding.logo_compact_url = Some(v.clone());
        }
        if let Some(v) = &self.favicon_url {
            branding.favicon_url = Some(v.clone());
        }
        if let Some(v) = &self.login_background_url {
            branding.login_background_url = Some(v.clone());
        }
        if let Some(v) = &self.powered_by {
            branding.powered_by = v.clone();
        }
        if let Some(v) = &self.css_prefix {
            branding.css_prefix = v.clone();
        }
    }

    /// True when no branding field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.logo_url.is_none()
            && self.logo_compact_url.is_none()
            && self.favicon_url.is_none()
            && self.login_background_url.is_none()
            && self.powered_by.is_none()
            && self.css_prefix.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
