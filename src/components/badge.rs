use crate::{
    ConfigurationError, attrs,
    component::{Component, CreateOptions, create_component},
    style,
    style::ComponentStyle,
    utils::ThemingColorsExt,
};

pub const BADGE_THEME_KEY: &str = "Badge";

pub fn badge() -> Result<Component, ConfigurationError> {
    create_component(
        "span",
        CreateOptions::new()
            .theme_key(BADGE_THEME_KEY)
            .attrs(attrs! { "data-badge" => true })
            .base_style(style! {
                "display" => "inline-block",
                "px" => "0.25rem",
                "textTransform" => "uppercase",
                "fontSize" => "xs",
                "borderRadius" => "sm",
                "fontWeight" => "bold",
                "whiteSpace" => "nowrap",
            }),
    )
}

pub fn badge_style() -> ComponentStyle {
    ComponentStyle::new()
        .variant_with("solid", |ctx| {
            style! {
                "bg" => ctx.shade("500", "200"),
                "color" => ctx.by_mode("white", "gray.800"),
            }
        })
        .variant_with("subtle", |ctx| {
            style! {
                "bg" => ctx.shade("100", "200"),
                "color" => ctx.shade("600", "500"),
            }
        })
        .variant_with("outline", |ctx| {
            style! {
                "boxShadow" => "inset 0 0 0px 1px",
                "color" => ctx.shade("500", "200"),
            }
        })
}
