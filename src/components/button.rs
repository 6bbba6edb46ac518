use serde_json::json;

use crate::{
    ConfigurationError, attrs,
    component::{Component, CreateOptions, create_component},
    props::{PropBag, PropKind, PropShape, Props},
    style,
    style::{ComponentStyle, Style, ThemingProps},
    utils::ThemingColorsExt,
};

pub const BUTTON_THEME_KEY: &str = "Button";

/// Props consumed by [`use_button`].
pub fn button_hook_shape() -> PropShape {
    PropShape::new()
        .with("isDisabled", PropKind::Bool)
        .with("isLoading", PropKind::Bool)
        .with("isFullWidth", PropKind::Bool)
}

/// A loading button is disabled too.
pub fn use_button(props: &Props) -> PropBag {
    let is_loading = props.flag("isLoading");
    let mut attrs = attrs! { "disabled" => props.flag("isDisabled") || is_loading };

    if is_loading {
        attrs.insert("data-loading".into(), true.into());
    }

    if props.flag("isFullWidth") {
        attrs.insert("width".into(), "100%".into());
    }

    attrs
}

pub fn button() -> Result<Component, ConfigurationError> {
    create_component(
        "button",
        CreateOptions::new()
            .theme_key(BUTTON_THEME_KEY)
            .hook(button_hook_shape(), use_button)
            .base_style(style! {
                "display" => "inline-flex",
                "alignItems" => "center",
                "justifyContent" => "center",
                "fontWeight" => "semibold",
                "borderRadius" => "md",
            }),
    )
}

pub fn button_style() -> ComponentStyle {
    let mut style = ComponentStyle::new()
        .variant_with("solid", |ctx| {
            style! {
                "bg" => ctx.shade("500", "200"),
                "color" => ctx.by_mode("white", "gray.800"),
            }
        })
        .variant_with("outline", |ctx| {
            style! {
                "bg" => "transparent",
                "border" => "1px solid",
                "borderColor" => ctx.shade("500", "200"),
                "color" => ctx.shade("500", "200"),
            }
        })
        .variant_with("ghost", |ctx| {
            style! {
                "bg" => "transparent",
                "color" => ctx.shade("500", "200"),
            }
        })
        .variant_with("link", |ctx| {
            style! {
                "p" => 0,
                "height" => "auto",
                "lineHeight" => "normal",
                "color" => ctx.shade("500", "200"),
            }
        })
        .variant_size_with("xs", sized("xs", "0.75rem", "2"))
        .variant_size_with("sm", sized("sm", "0.875rem", "3"))
        .variant_size_with("md", sized("md", "1rem", "4"))
        .variant_size_with("lg", sized("lg", "1.125rem", "6"));

    for color in ["gray", "teal", "blue", "red"] {
        style = style.variant_color_with(color, |ctx| {
            style! { "_hover" => json!({ "bg": ctx.shade("600", "100") }) }
        });
    }

    style
}

fn sized(
    size: &'static str,
    font_size: &'static str,
    padding: &'static str,
) -> impl Fn(&ThemingProps) -> Style + Send + Sync + 'static {
    move |ctx| {
        let height = ctx.theme.size(size).unwrap_or(size);
        style! {
            "height" => height,
            "minW" => height,
            "fontSize" => font_size,
            "px" => ctx.theme.space(padding).unwrap_or(padding),
        }
    }
}
