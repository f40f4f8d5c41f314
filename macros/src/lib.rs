use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;

/// Details taken from the `#[component(...)]` attribute on a model field.
struct ComponentAttr {
    key: syn::LitStr,
    min: f64,
    max: f64,
}

fn parse_number(input: syn::parse::ParseStream<'_>) -> syn::Result<f64> {
    match input.parse::<syn::Lit>()? {
        syn::Lit::Int(lit) => lit.base10_parse::<f64>(),
        syn::Lit::Float(lit) => lit.base10_parse::<f64>(),
        other => Err(syn::Error::new_spanned(other, "expected a number")),
    }
}

fn parse_component_attr(field: &syn::Field) -> syn::Result<ComponentAttr> {
    let attr = field
        .attrs
        .iter()
        .find(|a| a.path().is_ident("component"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                field,
                "model fields need a #[component(key = \"..\", max = ..)] attribute",
            )
        })?;

    let mut key = None;
    let mut min = 0.0;
    let mut max = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("key") {
            key = Some(meta.value()?.parse::<syn::LitStr>()?);
        } else if meta.path.is_ident("min") {
            min = parse_number(meta.value()?)?;
        } else if meta.path.is_ident("max") {
            max = Some(parse_number(meta.value()?)?);
        } else {
            return Err(meta.error("expected `key`, `min` or `max`"));
        }
        Ok(())
    })?;

    let key = key.ok_or_else(|| syn::Error::new_spanned(attr, "missing `key`"))?;
    let max = max.ok_or_else(|| syn::Error::new_spanned(attr, "missing `max`"))?;

    Ok(ComponentAttr { key, min, max })
}

/// Generate a color model from a struct with 3 or 4 named `Component`
/// fields. Each field carries `#[component(key = "h", max = 360)]` (and
/// optionally `min`, which defaults to 0).
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields.len(), 3 | 4) {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each component of the color.");
        }
        .into();
    }

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Model components must be named fields.");
        }
        .into();
    };

    let mut fields = vec![];
    let mut keys = vec![];
    let mut labels = vec![];
    let mut mins = vec![];
    let mut maxs = vec![];

    for field in named.named.iter_mut() {
        let attr = match parse_component_attr(field) {
            Ok(attr) => attr,
            Err(err) => return err.to_compile_error().into(),
        };
        field.attrs.retain(|a| !a.path().is_ident("component"));
        // All components are public.
        field.vis = syn::Visibility::Public(Default::default());

        let Some(ident) = field.ident.clone() else {
            continue;
        };
        labels.push(ident.to_string().to_case(Case::Title));
        fields.push(ident);
        keys.push(attr.key);
        mins.push(attr.min);
        maxs.push(attr.max);
    }

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, Default, PartialEq)]));

    let struct_name = &input.ident;
    let count = fields.len();

    quote! {
        #input

        impl #struct_name {
            /// Create a new color in this notation.
            pub fn new(#(#fields: crate::color::Component),*) -> Self {
                Self { #(#fields),* }
            }

            /// Return the components in declaration order.
            pub fn to_array(&self) -> [crate::color::Component; #count] {
                [#(self.#fields),*]
            }
        }

        impl From<[crate::color::Component; #count]> for #struct_name {
            fn from(array: [crate::color::Component; #count]) -> Self {
                let [#(#fields),*] = array;
                Self { #(#fields),* }
            }
        }

        impl crate::models::Model for #struct_name {
            const KEYS: &'static [&'static str] = &[#(#keys),*];
            const LABELS: &'static [&'static str] = &[#(#labels),*];
            const RANGES: &'static [(crate::color::Component, crate::color::Component)] = &[
                #((#mins as crate::color::Component, #maxs as crate::color::Component)),*
            ];

            fn components(&self) -> Vec<crate::color::Component> {
                vec![#(self.#fields),*]
            }

            fn from_components(values: &[crate::color::Component]) -> Self {
                let mut values = values.iter().copied();
                Self {
                    #(#fields: values.next().unwrap_or(0.0)),*
                }
            }
        }
    }
    .into()
}
