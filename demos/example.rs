use chakra_system::{
    components::{badge, button, default_styles},
    element::{Element, Node},
    props::Props,
    theme::{ColorMode, DEFAULT_THEME, ThemeContext},
};

fn describe(element: Element) -> String {
    let props = element
        .props()
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(" ");

    let children = element
        .children()
        .iter()
        .map(|child| match child {
            Node::Text(text) => text.clone(),
            Node::Element(element) => describe(element.clone()),
        })
        .collect::<String>();

    format!("<{tag} {props}>{children}</{tag}>", tag = element.tag())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let button = button()?;
    let badge = badge()?;

    for color_mode in [ColorMode::Light, ColorMode::Dark] {
        let cx = ThemeContext::new(&*DEFAULT_THEME)
            .with_color_mode(color_mode)
            .with_styles(default_styles());

        println!("-- {color_mode}");
        println!(
            "{}",
            button.render_with(
                &describe,
                Props::new()
                    .variant("solid")
                    .variant_color("teal")
                    .variant_size("md")
                    .child("Save"),
                &cx,
            )
        );
        println!(
            "{}",
            badge.render_with(
                &describe,
                Props::new().variant("subtle").variant_color("red").child("New"),
                &cx,
            )
        );
    }

    Ok(())
}
