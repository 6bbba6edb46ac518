use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Fields, GenericArgument, LitStr, PathArguments, Type,
    ext::IdentExt, parse_macro_input,
};

/// Derives `chakra_system::element::Target` from a struct describing an
/// element's native props.
///
/// ```ignore
/// #[derive(Target)]
/// #[target(name = "button")]
/// struct ButtonElement {
///     r#type: String,
///     disabled: bool,
///     tab_index: i32,
///     #[prop(rename = "aria-label")]
///     aria_label: Option<String>,
///     #[prop(skip)]
///     internal: (),
/// }
/// ```
///
/// Field names are camel-cased unless renamed. The prop kind follows the
/// field type: strings, booleans, numbers, `Node`s, anything else.
#[proc_macro_derive(Target, attributes(target, prop))]
pub fn target_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_target(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_target(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let name = get_target_name(&input)?;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "#[derive(Target)] can only be used on structs",
            ));
        }
    };

    if let Fields::Unnamed(fields) = fields {
        return Err(syn::Error::new_spanned(
            fields,
            "#[derive(Target)] needs named fields",
        ));
    }

    let mut props = Vec::new();
    for field in fields {
        let attr = get_prop_attr(&field.attrs)?;
        if attr.skip {
            continue;
        }

        let key = match (attr.rename, &field.ident) {
            (Some(rename), _) => rename,
            (None, Some(field_ident)) => camel_case(&field_ident.unraw().to_string()),
            (None, None) => unreachable!("unnamed fields are rejected above"),
        };
        let kind = get_prop_kind(&field.ty);

        props.push(quote! { (#key, ::chakra_system::props::PropKind::#kind) });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::chakra_system::element::Target for #ident #ty_generics #where_clause {
            fn descriptor() -> ::chakra_system::element::TargetDescriptor {
                ::chakra_system::element::TargetDescriptor::__derived(#name, &[#(#props),*])
            }
        }
    })
}

fn get_target_name(input: &DeriveInput) -> syn::Result<String> {
    let mut name = None;

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("target")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                name = Some(value);
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"`"))
            }
        })?;
    }

    match name {
        Some(name) if name.value().trim().is_empty() => {
            Err(syn::Error::new_spanned(name, "target name can't be empty"))
        }
        Some(name) => Ok(name.value()),
        None => Ok(input.ident.to_string()),
    }
}

#[derive(Default)]
struct PropAttr {
    rename: Option<String>,
    skip: bool,
}

fn get_prop_attr(attrs: &[Attribute]) -> syn::Result<PropAttr> {
    let mut prop = PropAttr::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("prop")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                prop.rename = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                prop.skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `rename = \"...\"` or `skip`"))
            }
        })?;
    }

    Ok(prop)
}

fn get_prop_kind(ty: &Type) -> TokenStream2 {
    match ty {
        Type::Reference(reference) => get_prop_kind(&reference.elem),
        Type::Path(path) => {
            let Some(segment) = path.path.segments.last() else {
                return quote!(Any);
            };

            match segment.ident.to_string().as_str() {
                "Option" => match first_type_argument(&segment.arguments) {
                    Some(inner) => get_prop_kind(inner),
                    None => quote!(Any),
                },
                "Vec" => match first_type_argument(&segment.arguments) {
                    Some(inner) if get_prop_kind(inner).to_string() == "Node" => quote!(Node),
                    _ => quote!(Any),
                },
                "String" | "str" | "Cow" | "SharedString" => quote!(String),
                "bool" => quote!(Bool),
                "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize"
                | "f32" | "f64" => quote!(Number),
                "Node" => quote!(Node),
                _ => quote!(Any),
            }
        }
        _ => quote!(Any),
    }
}

fn first_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(arguments) = arguments else {
        return None;
    };

    arguments.args.iter().find_map(|argument| match argument {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;

    for ch in name.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}
