//! Hard-coded default token set (the implicit "zero" layer) and the four
//! system bundles seeded at registry construction.
//!
//! The defaults ARE the light theme: `base:light` carries an empty overlay
//! and exists so the base layer is addressable and listable like any other.

use crate::definition::{ThemeDefinition, ThemeLayerKind};
use crate::tokens::{
    BehaviorOverlay, BehaviorTokens, BrandingTokens, ColorOverlay, ColorTokens, FontSizes,
    FontWeights, LayoutOverlay, LayoutTokens, LineHeights, Palette, RadiusTokens, ShadowOverlay,
    ShadowTokens, SpacingTokens, ThemeLayer, ThemeTokens, TypographyOverlay, TypographyTokens,
};

// ---------------------------------------------------------------------------
// Default token values
// ---------------------------------------------------------------------------

fn primary_palette() -> Palette {
    Palette {
        s50: "#eef2ff".into(),
        s100: "#e0e7ff".into(),
        s200: "#c7d2fe".into(),
        s300: "#a5b4fc".into(),
        s400: "#818cf8".into(),
        s500: "#6366f1".into(),
        s600: "#4f46e5".into(),
        s700: "#4338ca".into(),
        s800: "#3730a3".into(),
        s900: "#312e81".into(),
    }
}

fn neutral_palette() -> Palette {
    Palette {
        s50: "#f8fafc".into(),
        s100: "#f1f5f9".into(),
        s200: "#e2e8f0".into(),
        s300: "#cbd5e1".into(),
        s400: "#94a3b8".into(),
        s500: "#64748b".into(),
        s600: "#475569".into(),
        s700: "#334155".into(),
        s800: "#1e293b".into(),
        s900: "#0f172a".into(),
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: primary_palette(),
            neutral: neutral_palette(),
            background: "#f8fafc".into(),
            surface: "#ffffff".into(),
            surface_raised: "#ffffff".into(),
            border: "#e2e8f0".into(),
            text_primary: "#0f172a".into(),
            text_secondary: "#475569".into(),
            text_inverse: "#f8fafc".into(),
            brand: "#4f46e5".into(),
            brand_contrast: "#ffffff".into(),
            success: "#16a34a".into(),
            warning: "#d97706".into(),
            danger: "#dc2626".into(),
            info: "#0284c7".into(),
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: "Inter, system-ui, sans-serif".into(),
            font_family_mono: "JetBrains Mono, ui-monospace, monospace".into(),
            sizes: FontSizes {
                xs: 12.0,
                sm: 14.0,
                md: 16.0,
                lg: 18.0,
                xl: 24.0,
                xxl: 32.0,
            },
            weights: FontWeights {
                regular: 400,
                medium: 500,
                bold: 700,
            },
            line_heights: LineHeights {
                tight: 1.25,
                normal: 1.5,
                relaxed: 1.75,
            },
            font_scale: 1.0,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
            xxl: 32.0,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            none: 0.0,
            sm: 4.0,
            md: 8.0,
            lg: 12.0,
            full: 9999.0,
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            none: "none".into(),
            sm: "0 1px 2px rgba(15, 23, 42, 0.08)".into(),
            md: "0 4px 8px rgba(15, 23, 42, 0.10)".into(),
            lg: "0 12px 24px rgba(15, 23, 42, 0.12)".into(),
        }
    }
}

impl Default for LayoutTokens {
    fn default() -> Self {
        Self {
            sidebar_width: 240.0,
            header_height: 56.0,
            content_padding: 24.0,
            card_radius: 12.0,
            control_radius: 8.0,
        }
    }
}

impl Default for BehaviorTokens {
    fn default() -> Self {
        Self {
            animations_enabled: true,
            reduced_motion: false,
            high_contrast: false,
            compliance_watermark: false,
            show_audit_trail: false,
            read_only_mode: false,
            auto_lock_minutes: 0,
            min_touch_target: 40.0,
        }
    }
}

impl Default for BrandingTokens {
    fn default() -> Self {
        Self {
            name: "FactoryOS".into(),
            logo_url: None,
            logo_compact_url: None,
            favicon_url: None,
            login_background_url: None,
            powered_by: "Powered by FactoryOS".into(),
            css_prefix: "fos".into(),
        }
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            colors: ColorTokens::default(),
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radius: RadiusTokens::default(),
            shadows: ShadowTokens::default(),
            layout: LayoutTokens::default(),
            behavior: BehaviorTokens::default(),
            branding: BrandingTokens::default(),
            dark: false,
        }
    }
}

// ---------------------------------------------------------------------------
// System bundles
// ---------------------------------------------------------------------------

/// All system definitions, in seed order: base, role, environment,
/// compliance.
pub fn system_definitions() -> Vec<ThemeDefinition> {
    let mut definitions = base_bundle();
    definitions.extend(role_bundle());
    definitions.extend(environment_bundle());
    definitions.extend(compliance_bundle());
    definitions
}

fn base_bundle() -> Vec<ThemeDefinition> {
    vec![
        ThemeDefinition::system(
            "base:light",
            "Light",
            "Default light theme; matches the built-in token defaults",
            ThemeLayerKind::Base,
            ThemeLayer::default(),
        ),
        ThemeDefinition::system(
            "base:dark",
            "Dark",
            "Dark surfaces with inverted text colors",
            ThemeLayerKind::Base,
            ThemeLayer {
                dark: Some(true),
                colors: Some(ColorOverlay {
                    background: Some("#0f172a".into()),
                    surface: Some("#1e293b".into()),
                    surface_raised: Some("#334155".into()),
                    border: Some("#334155".into()),
                    text_primary: Some("#f8fafc".into()),
                    text_secondary: Some("#cbd5e1".into()),
                    text_inverse: Some("#0f172a".into()),
                    brand: Some("#818cf8".into()),
                    brand_contrast: Some("#0f172a".into()),
                    ..Default::default()
                }),
                shadows: Some(ShadowOverlay {
                    sm: Some("0 1px 2px rgba(0, 0, 0, 0.4)".into()),
                    md: Some("0 4px 8px rgba(0, 0, 0, 0.45)".into()),
                    lg: Some("0 12px 24px rgba(0, 0, 0, 0.5)".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ),
    ]
}

fn role_bundle() -> Vec<ThemeDefinition> {
    vec![
        ThemeDefinition::system(
            "role:operator",
            "Operator",
            "Larger type and touch targets, simplified chrome",
            ThemeLayerKind::Role,
            ThemeLayer {
                typography: Some(TypographyOverlay {
                    font_scale: Some(1.15),
                    ..Default::default()
                }),
                behavior: Some(BehaviorOverlay {
                    min_touch_target: Some(48.0),
                    ..Default::default()
                }),
                layout: Some(LayoutOverlay {
                    sidebar_width: Some(200.0),
                    content_padding: Some(16.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ),
        ThemeDefinition::system(
            "role:supervisor",
            "Supervisor",
            "Audit trail visible by default",
            ThemeLayerKind::Role,
            ThemeLayer {
                behavior: Some(BehaviorOverlay {
                    show_audit_trail: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ),
        ThemeDefinition::system(
            "role:admin",
            "Administrator",
            "Denser layout for configuration-heavy screens",
            ThemeLayerKind::Role,
            ThemeLayer {
                layout: Some(LayoutOverlay {
                    sidebar_width: Some(280.0),
                    content_padding: Some(16.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ),
    ]
}

fn environment_bundle() -> Vec<ThemeDefinition> {
    vec![
        ThemeDefinition::system(
            "env:factory-floor",
            "Factory Floor",
            "High contrast, large type, no animations; for shared shop-floor terminals",
            ThemeLayerKind::Environment,
            ThemeLayer {
                typography: Some(TypographyOverlay {
                    font_scale: Some(1.3),
                    ..Default::default()
                }),
                behavior: Some(BehaviorOverlay {
                    high_contrast: Some(true),
                    reduced_motion: Some(true),
                    animations_enabled: Some(false),
                    min_touch_target: Some(56.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ),
        ThemeDefinition::system(
            "env:office",
            "Office",
            "Roomier padding for desktop monitors",
            ThemeLayerKind::Environment,
            ThemeLayer {
                layout: Some(LayoutOverlay {
                    content_padding: Some(32.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ),
        ThemeDefinition::system(
            "env:clean-room",
            "Clean Room",
            "Muted palette and reduced motion for controlled environments",
            ThemeLayerKind::Environment,
            ThemeLayer {
                colors: Some(ColorOverlay {
                    brand: Some("#475569".into()),
                    brand_contrast: Some("#ffffff".into()),
                    ..Default::default()
                }),
                behavior: Some(BehaviorOverlay {
                    reduced_motion: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ),
    ]
}

fn compliance_bundle() -> Vec<ThemeDefinition> {
    vec![
        ThemeDefinition::system(
            "compliance:standard",
            "Standard",
            "No-op compliance state; listed as available but never applied",
            ThemeLayerKind::Compliance,
            ThemeLayer::default(),
        ),
        ThemeDefinition::system(
            "compliance:audit-mode",
            "Audit Mode",
            "Watermarked UI with the audit trail pinned open",
            ThemeLayerKind::Compliance,
            ThemeLayer {
                behavior: Some(BehaviorOverlay {
                    compliance_watermark: Some(true),
                    show_audit_trail: Some(true),
                    auto_lock_minutes: Some(10),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ),
        ThemeDefinition::system(
            "compliance:validation-mode",
            "Validation Mode",
            "Read-only, watermarked UI for validation runs",
            ThemeLayerKind::Compliance,
            ThemeLayer {
                behavior: Some(BehaviorOverlay {
                    read_only_mode: Some(true),
                    compliance_watermark: Some(true),
                    auto_lock_minutes: Some(5),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ),
    ]
}
