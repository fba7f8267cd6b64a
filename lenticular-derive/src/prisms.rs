//! Implementation of `#[derive(Prisms)]`.
//!
//! Every variant shape reduces to the same three pieces: the focus type, a
//! focus pattern binding the payload, and a variant pattern that doubles as
//! the constructor expression.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Variant, parse_macro_input};

pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => generate_enum_prisms(name, generics, data_enum.variants.iter()),
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_enum_prisms<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let prism_methods = variants.map(generate_variant_prism);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// The payload of one variant, seen as a single focus value.
struct Payload {
    focus_type: TokenStream2,
    focus_pattern: TokenStream2,
    variant_pattern: TokenStream2,
}

impl Payload {
    fn of(variant: &Variant) -> Self {
        let variant_name = &variant.ident;
        let (bindings, types): (Vec<Ident>, Vec<&syn::Type>) = match &variant.fields {
            Fields::Unit => (Vec::new(), Vec::new()),
            Fields::Unnamed(fields) => fields
                .unnamed
                .iter()
                .enumerate()
                .map(|(index, field)| (format_ident!("v{}", index), &field.ty))
                .unzip(),
            Fields::Named(fields) => fields
                .named
                .iter()
                .filter_map(|field| field.ident.clone().map(|ident| (ident, &field.ty)))
                .unzip(),
        };

        let variant_pattern = match &variant.fields {
            Fields::Unit => quote! { Self::#variant_name },
            Fields::Unnamed(_) => quote! { Self::#variant_name(#(#bindings),*) },
            Fields::Named(_) => quote! { Self::#variant_name { #(#bindings),* } },
        };

        let (focus_type, focus_pattern) = match (bindings.as_slice(), types.as_slice()) {
            ([], _) => (quote! { () }, quote! { () }),
            ([binding], [field_type]) => (quote! { #field_type }, quote! { #binding }),
            _ => (quote! { (#(#types),*) }, quote! { (#(#bindings),*) }),
        };

        Self {
            focus_type,
            focus_pattern,
            variant_pattern,
        }
    }
}

fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let documentation = format!("Returns the prism onto the `{variant_name}` variant.");
    let Payload {
        focus_type,
        focus_pattern,
        variant_pattern,
    } = Payload::of(variant);

    quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> ::lenticular::optics::PrismFn<
            fn(#focus_type) -> Self,
            fn(Self) -> ::lenticular::control::Either<Self, #focus_type>,
        > {
            ::lenticular::optics::PrismFn::new(
                |#focus_pattern: #focus_type| #variant_pattern,
                |source: Self| match source {
                    #variant_pattern => ::lenticular::control::Either::Right(#focus_pattern),
                    #[allow(unreachable_patterns)]
                    other => ::lenticular::control::Either::Left(other),
                },
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let characters: Vec<char> = input.chars().collect();

    for (index, &character) in characters.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous = characters[index - 1];
                let next_is_lowercase = characters
                    .get(index + 1)
                    .is_some_and(|next| next.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase) {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Circle", "circle")]
    #[case("KeyPress", "key_press")]
    #[case("none", "none")]
    #[case("HTTPRequest", "http_request")]
    #[case("XMLParser", "xml_parser")]
    #[case("X", "x")]
    fn snake_case_conversion(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    fn payload(source: &str) -> (String, String, String) {
        let variant: Variant = syn::parse_str(source).unwrap();
        let payload = Payload::of(&variant);
        (
            payload.focus_type.to_string(),
            payload.focus_pattern.to_string(),
            payload.variant_pattern.to_string(),
        )
    }

    #[rstest]
    fn unit_variant_focuses_unit() {
        assert_eq!(payload("Quit"), ("()".into(), "()".into(), "Self :: Quit".into()));
    }

    #[rstest]
    fn single_field_variants_focus_the_field() {
        let (focus_type, focus_pattern, _) = payload("Circle(f64)");
        assert_eq!((focus_type.as_str(), focus_pattern.as_str()), ("f64", "v0"));

        let (focus_type, focus_pattern, _) = payload("Circle { radius: f64 }");
        assert_eq!((focus_type.as_str(), focus_pattern.as_str()), ("f64", "radius"));
    }

    #[rstest]
    fn multi_field_variants_focus_a_tuple() {
        let (focus_type, focus_pattern, variant_pattern) = payload("Click { x: i32, y: u8 }");
        assert_eq!(focus_type, "(i32 , u8)");
        assert_eq!(focus_pattern, "(x , y)");
        assert_eq!(variant_pattern, "Self :: Click { x , y }");
    }
}
