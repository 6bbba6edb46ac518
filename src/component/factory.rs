use crate::{
    ConfigurationError,
    element::{Element, IntoTarget, Renderer, TargetDescriptor},
    props::{PropBag, PropContract, PropShape, Props, SystemProps, merge_props_of},
    style::{Computed, Style, resolve_style},
    theme::ThemeContext,
};

use super::{Attrs, BaseStyle, CreateOptions, Hook};

/// A themable component produced by [`create_component`].
///
/// Holds its configuration for its whole lifetime and never mutates it, so a
/// component can be rendered from any number of places at once.
#[derive(Debug, Clone)]
pub struct Component {
    target: TargetDescriptor,
    hook: Hook,
    theme_key: Option<String>,
    attrs: Attrs,
    base_style: BaseStyle,
    display_name: String,
    default_props: PropBag,
}

/// Wraps `target` in a component configured by `options`.
///
/// Fails if the target has no resolvable native prop shape. A theme key is not
/// checked here: if nothing is registered under it at render time the
/// component renders unthemed.
pub fn create_component(
    target: impl IntoTarget,
    options: CreateOptions,
) -> Result<Component, ConfigurationError> {
    let target = target.into_target()?;

    let CreateOptions {
        hook,
        theme_key,
        attrs,
        base_style,
    } = options;

    let display_name = theme_key
        .clone()
        .unwrap_or_else(|| format!("chakra.{}", target.name()));

    let mut default_props = target.defaults().clone();
    if let Some(style) = base_style.as_ref().and_then(Computed::as_static) {
        default_props.extend(style.clone());
    }
    if let Some(attrs) = attrs.as_ref().and_then(Computed::as_static) {
        default_props.extend(attrs.clone());
    }

    tracing::debug!(%display_name, target = target.name(), "created component");

    Ok(Component {
        target,
        hook: hook.unwrap_or_default(),
        theme_key,
        attrs: attrs.unwrap_or_default(),
        base_style: base_style.unwrap_or_default(),
        display_name,
        default_props,
    })
}

impl Component {
    /// The theme key if there is one, otherwise `chakra.<target>`.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Target defaults with the static base style and attrs merged over them.
    pub fn default_props(&self) -> &PropBag {
        &self.default_props
    }

    pub fn target(&self) -> &TargetDescriptor {
        &self.target
    }

    pub fn theme_key(&self) -> Option<&str> {
        self.theme_key.as_deref()
    }

    pub fn hook_shape(&self) -> &PropShape {
        self.hook.shape()
    }

    /// Hook props merged over the target's native props.
    pub fn native_shape(&self) -> PropShape {
        merge_props_of(self.hook.shape(), self.target.shape())
    }

    /// The props this component accepts when invoked with `generic` props,
    /// using the standard system style props.
    ///
    /// Theming props are declared from the style registered under the
    /// component's theme key; declaring them against a registry that lacks
    /// that key is an error.
    pub fn contract(
        &self,
        generic: PropShape,
        cx: &ThemeContext,
    ) -> Result<PropContract, ConfigurationError> {
        self.contract_with_system(generic, SystemProps::standard(), cx)
    }

    pub fn contract_with_system(
        &self,
        generic: PropShape,
        system: SystemProps,
        cx: &ThemeContext,
    ) -> Result<PropContract, ConfigurationError> {
        let mut builder = PropContract::builder()
            .generic(generic)
            .hook(self.hook.shape().clone())
            .native(self.target.shape().clone())
            .system(system);

        if let Some(theme_key) = &self.theme_key {
            for (dimension, keys) in cx.styles().try_get(theme_key)?.declared() {
                builder = builder.theming(dimension, keys);
            }
        }

        Ok(builder.build())
    }

    /// The style layers for one render: base style, then variant style, then
    /// truncation.
    pub fn style(&self, props: &Props, cx: &ThemeContext) -> Style {
        let mut style = self.base_style.resolve(props);
        style.extend(self.variant_style(props, cx));

        if props.is_truncated() {
            style.extend(truncation_style());
        }

        style
    }

    fn variant_style(&self, props: &Props, cx: &ThemeContext) -> Style {
        let Some(theme_key) = &self.theme_key else {
            return Style::new();
        };

        match cx.styles().get(theme_key) {
            Some(config) => resolve_style(config, &cx.theming(props.theming())),
            None => {
                tracing::debug!(%theme_key, "no style registered, rendering unthemed");
                Style::new()
            }
        }
    }

    /// Renders the component.
    ///
    /// Later layers win on key collisions: target defaults, style (see
    /// [`Component::style`]), attrs, hook output, then the caller's props.
    /// An `as` override replaces the element rendered.
    ///
    /// When the target is another component the merged props, theming
    /// selection and children are handed to it, so its defaults, hook and
    /// variant styles apply and its element is the one produced.
    pub fn render(&self, props: Props, cx: &ThemeContext) -> Element {
        let _span = tracing::debug_span!("render", component = %self.display_name).entered();

        let mut merged = match self.target.component() {
            Some(_) => PropBag::new(),
            None => self.target.defaults().clone(),
        };
        merged.extend(self.style(&props, cx));
        merged.extend(self.attrs.resolve(&props));
        merged.extend(self.hook.run(&props));

        let parts = props.into_parts();
        merged.extend(parts.values);

        let target = parts.as_element.unwrap_or_else(|| self.target.clone());

        if let Some(inner) = target.component() {
            tracing::debug!(inner = inner.display_name(), "delegating to wrapped component");
            let props = Props::from_parts(merged, parts.theming, parts.is_truncated, parts.children);
            return inner.render(props, cx);
        }

        tracing::debug!(tag = target.name(), props = merged.len(), "rendered");

        Element::new(target, merged, parts.children)
    }

    pub fn render_with<R: Renderer>(
        &self,
        renderer: &R,
        props: Props,
        cx: &ThemeContext,
    ) -> R::Output {
        renderer.render(self.render(props, cx))
    }

    /// A descriptor for using this component as another component's target.
    pub fn as_target(&self) -> TargetDescriptor {
        TargetDescriptor::from_component(self.clone())
    }
}

impl IntoTarget for &Component {
    fn into_target(self) -> Result<TargetDescriptor, ConfigurationError> {
        Ok(self.as_target())
    }
}

fn truncation_style() -> Style {
    crate::style! {
        "overflow" => "hidden",
        "textOverflow" => "ellipsis",
        "whiteSpace" => "nowrap",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        attrs,
        element::Node,
        props::{PropKind, PropSource},
        style,
        style::{ComponentStyle, ThemingDimension},
        theme::{ColorMode, StyleRegistry},
    };

    fn tab_index_hook() -> CreateOptions {
        CreateOptions::new().hook(PropShape::new(), |_| attrs! { "tabIndex" => 0 })
    }

    fn registry() -> StyleRegistry {
        StyleRegistry::new().with(
            "Button",
            ComponentStyle::new()
                .variant("solid", style! { "background" => "blue", "color" => "white" })
                .variant_size("lg", style! { "background" => "red" })
                .variant_color_with("teal", |ctx| {
                    style! { "color" => if ctx.color_mode.is_dark() { "white" } else { "teal" } }
                }),
        )
    }

    fn cx() -> ThemeContext {
        ThemeContext::default().with_styles(registry())
    }

    #[test]
    fn test_unknown_target_fails() {
        let result = create_component("blink", CreateOptions::new());
        assert_eq!(
            result.err(),
            Some(ConfigurationError::UnresolvableTarget("blink".into()))
        );
    }

    #[test]
    fn test_metadata() {
        let plain = create_component("div", CreateOptions::new()).unwrap();
        assert_eq!(plain.display_name(), "chakra.div");
        assert!(plain.default_props().is_empty());

        let button = create_component(
            "button",
            CreateOptions::new()
                .theme_key("Button")
                .base_style(style! { "display" => "inline-flex" })
                .attrs(attrs! { "type" => "submit" }),
        )
        .unwrap();
        assert_eq!(button.display_name(), "Button");
        assert_eq!(button.theme_key(), Some("Button"));
        assert_eq!(button.default_props().get("type"), Some(&json!("submit")));
        assert_eq!(button.default_props().get("display"), Some(&json!("inline-flex")));
    }

    #[test]
    fn test_computed_options_are_not_default_props() {
        let component = create_component(
            "div",
            CreateOptions::new().attrs_with(|_| attrs! { "role" => "group" }),
        )
        .unwrap();
        assert!(component.default_props().is_empty());
    }

    #[test]
    fn test_hook_output_is_a_default_the_caller_can_override() {
        let component = create_component("button", tab_index_hook()).unwrap();
        let cx = ThemeContext::default();

        let element = component.render(Props::new(), &cx);
        assert_eq!(element.get("tabIndex"), Some(&json!(0)));

        let element = component.render(Props::new().prop("tabIndex", 5), &cx);
        assert_eq!(element.get("tabIndex"), Some(&json!(5)));
    }

    #[test]
    fn test_merge_order() {
        let component = create_component(
            "button",
            CreateOptions::new()
                .theme_key("Button")
                .base_style(style! { "background" => "base", "color" => "base", "margin" => "base" })
                .attrs(attrs! { "color" => "attrs", "title" => "attrs" })
                .hook(PropShape::new(), |_| attrs! { "title" => "hook", "id" => "hook" }),
        )
        .unwrap();

        let element = component.render(Props::new().variant("solid").prop("id", "caller"), &cx());

        assert_eq!(element.get("type"), Some(&json!("button")), "target default");
        assert_eq!(element.get("margin"), Some(&json!("base")));
        assert_eq!(element.get("background"), Some(&json!("blue")), "variant over base");
        assert_eq!(element.get("color"), Some(&json!("attrs")), "attrs over variant");
        assert_eq!(element.get("title"), Some(&json!("hook")), "hook over attrs");
        assert_eq!(element.get("id"), Some(&json!("caller")), "caller over hook");
    }

    #[test]
    fn test_variant_style_resolution_in_render() {
        let component =
            create_component("button", CreateOptions::new().theme_key("Button")).unwrap();

        let element = component.render(Props::new().variant("solid").variant_size("lg"), &cx());
        assert_eq!(element.get("background"), Some(&json!("red")));

        let dark = cx().with_color_mode(ColorMode::Dark);
        let element = component.render(Props::new().variant_color("teal"), &dark);
        assert_eq!(element.get("color"), Some(&json!("white")));
    }

    #[test]
    fn test_theming_props_are_not_forwarded() {
        let component =
            create_component("button", CreateOptions::new().theme_key("Button")).unwrap();
        let element = component.render(
            Props::new().variant("solid").variant_color("teal").truncated(true),
            &cx(),
        );

        for key in ["variant", "variantColor", "variantSize", "isTruncated", "as"] {
            assert!(element.get(key).is_none(), "{key} should not reach the element");
        }
    }

    #[test]
    fn test_unregistered_theme_key_renders_unthemed() {
        let component = create_component(
            "span",
            CreateOptions::new()
                .theme_key("Missing")
                .base_style(style! { "display" => "inline" }),
        )
        .unwrap();

        let element = component.render(Props::new().variant("solid"), &cx());
        assert_eq!(element.get("display"), Some(&json!("inline")));
        assert!(element.get("background").is_none());
    }

    #[test]
    fn test_unknown_variant_degrades_to_unstyled() {
        let component =
            create_component("button", CreateOptions::new().theme_key("Button")).unwrap();

        let unknown = component.render(Props::new().variant("nonexistent"), &cx());
        let none = component.render(Props::new(), &cx());
        assert_eq!(unknown, none);
    }

    #[test]
    fn test_truncation() {
        let component = create_component("p", CreateOptions::new()).unwrap();

        let element = component.render(Props::new().truncated(true), &ThemeContext::default());
        assert_eq!(element.get("textOverflow"), Some(&json!("ellipsis")));
        assert_eq!(element.get("whiteSpace"), Some(&json!("nowrap")));

        let element = component.render(
            Props::new().truncated(true).prop("whiteSpace", "pre"),
            &ThemeContext::default(),
        );
        assert_eq!(element.get("whiteSpace"), Some(&json!("pre")), "caller wins");
    }

    #[test]
    fn test_as_override_changes_element_but_keeps_props() {
        let component = create_component("button", tab_index_hook()).unwrap();
        let anchor = TargetDescriptor::intrinsic("a").unwrap();

        let element = component.render(
            Props::new().as_element(anchor).prop("href", "/docs").child("Docs"),
            &ThemeContext::default(),
        );

        assert_eq!(element.tag(), "a");
        assert_eq!(element.get("href"), Some(&json!("/docs")));
        assert_eq!(element.get("tabIndex"), Some(&json!(0)));
        assert_eq!(element.children(), &[Node::from("Docs")]);
    }

    #[test]
    fn test_contract_declares_registered_theming_props() {
        let component = create_component(
            "button",
            CreateOptions::new()
                .theme_key("Button")
                .hook(PropShape::new().with("isLoading", PropKind::Bool), |_| PropBag::new()),
        )
        .unwrap();

        let contract = component.contract(PropShape::new(), &cx()).unwrap();

        assert_eq!(contract.source_of("isLoading"), Some(PropSource::Hook));
        assert_eq!(contract.source_of("disabled"), Some(PropSource::Native));
        assert_eq!(
            contract.get(ThemingDimension::Variant.prop_name()),
            Some(&PropKind::OneOf(vec!["solid".into()]))
        );
        assert!(contract.contains("variantColor"));
        assert!(contract.contains("variantSize"));
    }

    #[test]
    fn test_contract_against_missing_theme_key() {
        let component =
            create_component("button", CreateOptions::new().theme_key("Badge")).unwrap();

        assert_eq!(
            component.contract(PropShape::new(), &cx()).err(),
            Some(ConfigurationError::UnknownThemeKey("Badge".into()))
        );
    }

    #[test]
    fn test_unthemed_contract_has_no_theming_props() {
        let component = create_component("div", CreateOptions::new()).unwrap();
        let contract = component.contract(PropShape::new(), &cx()).unwrap();

        assert!(!contract.contains("variant"));
        assert!(contract.contains("as"));
        assert_eq!(contract.source_of("bg"), Some(PropSource::System));
    }

    #[test]
    fn test_component_as_target() {
        let inner = create_component(
            "button",
            CreateOptions::new()
                .theme_key("Button")
                .hook(PropShape::new().with("isLoading", PropKind::Bool), |_| PropBag::new())
                .attrs(attrs! { "data-inner" => true }),
        )
        .unwrap();
        let outer = create_component(&inner, CreateOptions::new()).unwrap();

        assert_eq!(outer.display_name(), "chakra.Button");
        assert!(outer.target().shape().contains("isLoading"));
        assert!(outer.target().shape().contains("disabled"));
        assert_eq!(outer.default_props().get("data-inner"), Some(&json!(true)));
        assert!(outer.target().component().is_some());
    }

    #[test]
    fn test_nested_component_renders_through_inner() {
        let inner = create_component(
            "button",
            CreateOptions::new()
                .theme_key("Button")
                .hook(PropShape::new().with("isLoading", PropKind::Bool), |props| {
                    attrs! { "disabled" => props.flag("isLoading") }
                }),
        )
        .unwrap();
        let outer = create_component(
            &inner,
            CreateOptions::new().attrs(attrs! { "data-outer" => true }),
        )
        .unwrap();

        let props = || Props::new().prop("isLoading", true).variant("solid").variant_size("lg");
        let direct = inner.render(props(), &cx());
        let nested = outer.render(props(), &cx());

        assert_eq!(nested.tag(), "button");
        assert_eq!(nested.get("type"), Some(&json!("button")));
        assert_eq!(nested.get("disabled"), Some(&json!(true)));
        assert_eq!(nested.get("background"), direct.get("background"));
        assert_eq!(nested.get("background"), Some(&json!("red")));
        assert_eq!(nested.get("data-outer"), Some(&json!(true)));
    }

    #[test]
    fn test_reserved_props_set_by_name_theme_and_truncate() {
        let component =
            create_component("button", CreateOptions::new().theme_key("Button")).unwrap();
        let props = Props::new().prop("variant", "solid").prop("isTruncated", true);

        let contract = component.contract(PropShape::new(), &cx()).unwrap();
        assert_eq!(contract.check(&props), Ok(()));

        let element = component.render(props, &cx());
        assert_eq!(element.get("background"), Some(&json!("blue")));
        assert_eq!(element.get("textOverflow"), Some(&json!("ellipsis")));
        assert!(element.get("variant").is_none());
        assert!(element.get("isTruncated").is_none());
    }

    #[test]
    fn test_render_with_renderer() {
        let component = create_component("span", CreateOptions::new()).unwrap();
        let tag = component.render_with(
            &|element: Element| element.tag().to_uppercase(),
            Props::new(),
            &ThemeContext::default(),
        );
        assert_eq!(tag, "SPAN");
    }
}
