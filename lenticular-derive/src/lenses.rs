//! Implementation of `#[derive(Lenses)]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_lenses(name, generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs, not enums. Use #[derive(Prisms)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Lenses cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let lens_methods = named_fields.named.iter().filter_map(generate_field_lens);
            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#lens_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Lenses cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

fn generate_field_lens(field: &Field) -> Option<TokenStream2> {
    let field_name = field.ident.as_ref()?;
    let field_type = &field.ty;
    let method_name = format_ident!("{}_lens", field_name);
    let documentation = format!("Returns the lens onto the `{field_name}` field.");

    Some(quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> ::lenticular::optics::LensFn<
            fn(&Self) -> #field_type,
            fn(Self, #field_type) -> Self,
        >
        where
            for<'__lens> #field_type: ::core::clone::Clone,
        {
            ::lenticular::optics::LensFn::new(
                |source: &Self| ::core::clone::Clone::clone(&source.#field_name),
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn expand(source: &str) -> String {
        let input: DeriveInput = syn::parse_str(source).unwrap();
        match &input.data {
            Data::Struct(data) => generate_struct_lenses(&input.ident, &input.generics, &data.fields),
            _ => unreachable!(),
        }
        .to_string()
    }

    #[rstest]
    fn one_method_per_field() {
        let expanded = expand("struct Point { x: i32, y: i32 }");
        assert!(expanded.contains("fn x_lens"));
        assert!(expanded.contains("fn y_lens"));
    }

    #[rstest]
    #[case("struct Pair(i32, i32);", "tuple structs")]
    #[case("struct Marker;", "unit structs")]
    fn rejects_structs_without_named_fields(#[case] source: &str, #[case] message: &str) {
        assert!(expand(source).contains(message));
    }

    #[rstest]
    fn clone_bound_is_higher_ranked() {
        let expanded = expand("struct Handle { file: std::sync::Mutex<u8> }");
        assert!(expanded.contains("for < '__lens > std :: sync :: Mutex < u8 >"));
    }

    #[rstest]
    fn keeps_generics_on_impl() {
        let expanded = expand("struct Container<T: Clone> { value: T }");
        assert!(expanded.contains("impl < T : Clone > Container < T >"));
    }
}
