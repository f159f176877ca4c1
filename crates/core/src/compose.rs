//! Composition engine: deep-merge an ordered layer list into one complete
//! token set, and derive the cache key for the applied-layer trail.

use sha2::{Digest, Sha256};

use crate::tokens::{ThemeLayer, ThemeTokens};

/// Compose an ordered list of overlays, lowest precedence first.
///
/// Composition always starts from the fully-populated
/// [`ThemeTokens::default`] value (the implicit layer 0), so the result
/// satisfies every required field no matter how sparse the input layers are.
/// Merging never deletes a key; a leaf set by a later layer replaces the
/// accumulator value outright.
pub fn compose_theme(layers: &[ThemeLayer]) -> ThemeTokens {
    let mut tokens = ThemeTokens::default();
    for layer in layers {
        layer.apply(&mut tokens);
    }
    tokens
}

/// Derive the cache key for an ordered list of applied layer ids.
///
/// The key is the SHA-256 hex digest of the ids joined with a `0x1f`
/// separator: deterministic, order-sensitive, and collision-safe against id
/// concatenation ambiguity. It hashes the id trail only, NOT token content —
/// editing a custom definition in place does not invalidate keys that
/// reference its id. That limitation is part of the contract.
pub fn generate_cache_key(applied_layers: &[String]) -> String {
    let mut hasher = Sha256::new();
    for (i, id) in applied_layers.iter().enumerate() {
        if i > 0 {
            hasher.update([0x1f]);
        }
        hasher.update(id.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{BehaviorOverlay, ColorOverlay, TypographyOverlay};

    #[test]
    fn empty_input_yields_the_default_token_set() {
        assert_eq!(compose_theme(&[]), ThemeTokens::default());
    }

    #[test]
    fn later_layer_wins_on_the_same_leaf() {
        let earlier = ThemeLayer {
            typography: Some(TypographyOverlay {
                font_scale: Some(1.15),
                ..Default::default()
            }),
            ..Default::default()
        };
        let later = ThemeLayer {
            typography: Some(TypographyOverlay {
                font_scale: Some(1.3),
                ..Default::default()
            }),
            ..Default::default()
        };

        let tokens = compose_theme(&[earlier, later]);
        assert_eq!(tokens.typography.font_scale, 1.3);
    }

    #[test]
    fn partial_overlay_preserves_unmentioned_defaults() {
        let defaults = ThemeTokens::default();
        let layer = ThemeLayer {
            colors: Some(ColorOverlay {
                brand: Some("#ff0000".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let tokens = compose_theme(&[layer]);
        assert_eq!(tokens.colors.brand, "#ff0000");
        assert_eq!(tokens.colors.background, defaults.colors.background);
        assert_eq!(tokens.typography, defaults.typography);
        assert_eq!(tokens.spacing, defaults.spacing);
        assert_eq!(tokens.behavior, defaults.behavior);
    }

    #[test]
    fn sibling_fields_from_different_layers_both_survive() {
        let first = ThemeLayer {
            behavior: Some(BehaviorOverlay {
                high_contrast: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let second = ThemeLayer {
            behavior: Some(BehaviorOverlay {
                reduced_motion: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };

        let tokens = compose_theme(&[first, second]);
        assert!(tokens.behavior.high_contrast);
        assert!(tokens.behavior.reduced_motion);
    }

    #[test]
    fn cache_key_is_deterministic() {
        let layers = vec!["base:light".to_string(), "role:operator".to_string()];
        assert_eq!(generate_cache_key(&layers), generate_cache_key(&layers));
    }

    #[test]
    fn cache_key_is_order_sensitive() {
        let forward = vec!["base:light".to_string(), "role:operator".to_string()];
        let reversed = vec!["role:operator".to_string(), "base:light".to_string()];
        assert_ne!(generate_cache_key(&forward), generate_cache_key(&reversed));
    }

    #[test]
    fn cache_key_changes_when_the_set_changes() {
        let short = vec!["base:light".to_string()];
        let long = vec!["base:light".to_string(), "env:factory-floor".to_string()];
        assert_ne!(generate_cache_key(&short), generate_cache_key(&long));
    }

    #[test]
    fn cache_key_distinguishes_id_boundaries() {
        let a = vec!["ab".to_string(), "c".to_string()];
        let b = vec!["a".to_string(), "bc".to_string()];
        assert_ne!(generate_cache_key(&a), generate_cache_key(&b));
    }
}
