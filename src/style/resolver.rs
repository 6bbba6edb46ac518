use smallvec::SmallVec;

use super::{ComponentStyle, Style, ThemingDimension, ThemingProps};

/// Resolves a component's variant styles for one theming context.
///
/// Each chosen dimension contributes the style under its key, in the order
/// variant, variant color, variant size, shallow-merged so later layers
/// win. A key with no entry contributes nothing.
pub fn resolve_style(config: &ComponentStyle, ctx: &ThemingProps) -> Style {
    let mut layers: SmallVec<[Style; 3]> = SmallVec::new();

    for dimension in ThemingDimension::ORDER {
        let Some(key) = ctx.get(dimension) else {
            continue;
        };

        match config.get(dimension, key) {
            Some(entry) => layers.push(entry.resolve(ctx)),
            None if config.map(dimension).is_empty() => {}
            None => tracing::warn!(%dimension, key, "no style declared for theming key, ignoring it"),
        }
    }

    let mut style = Style::new();
    for layer in layers {
        style.extend(layer);
    }
    style
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::{
        style,
        theme::{ColorMode, DEFAULT_THEME},
    };

    fn ctx() -> ThemingProps {
        ThemingProps::new(Arc::new(DEFAULT_THEME.clone()), ColorMode::Light)
    }

    fn config() -> ComponentStyle {
        ComponentStyle::new()
            .variant("solid", style! { "background" => "blue", "color" => "white" })
            .variant_size("lg", style! { "background" => "red", "height" => "3rem" })
            .variant_color_with("teal", |ctx| {
                style! { "color" => if ctx.color_mode.is_dark() { "white" } else { "teal" } }
            })
    }

    #[test]
    fn test_size_overrides_variant() {
        let resolved = resolve_style(&config(), &ctx().variant("solid").variant_size("lg"));

        assert_eq!(resolved.get("background"), Some(&json!("red")));
        assert_eq!(resolved.get("color"), Some(&json!("white")));
        assert_eq!(resolved.get("height"), Some(&json!("3rem")));
    }

    #[test]
    fn test_color_overrides_variant() {
        let resolved = resolve_style(&config(), &ctx().variant("solid").variant_color("teal"));
        assert_eq!(resolved.get("color"), Some(&json!("teal")));
    }

    #[test]
    fn test_computed_entry_reads_color_mode() {
        let dark = ctx().variant_color("teal").color_mode(ColorMode::Dark);
        assert_eq!(resolve_style(&config(), &dark).get("color"), Some(&json!("white")));

        let light = ctx().variant_color("teal");
        assert_eq!(resolve_style(&config(), &light).get("color"), Some(&json!("teal")));
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let with_unknown = resolve_style(&config(), &ctx().variant("nonexistent").variant_size("lg"));
        let without = resolve_style(&config(), &ctx().variant_size("lg"));
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn test_empty_map_is_the_same_as_no_dimension() {
        let config = ComponentStyle::new().variant("solid", style! { "background" => "blue" });

        let with_color = resolve_style(&config, &ctx().variant("solid").variant_color("teal"));
        let without = resolve_style(&config, &ctx().variant("solid"));
        assert_eq!(with_color, without);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let ctx = ctx().variant("solid").variant_color("teal").variant_size("lg");
        assert_eq!(resolve_style(&config(), &ctx), resolve_style(&config(), &ctx));
    }

    #[test]
    fn test_nothing_chosen_resolves_to_empty() {
        assert!(resolve_style(&config(), &ctx()).is_empty());
    }
}
