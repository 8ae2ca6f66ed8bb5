//! Implementation of the `#[derive(Tagged)]` macro.

use std::collections::HashMap;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, Variant, parse_macro_input};

/// Main implementation of the Tagged derive macro.
pub fn derive_tagged_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            let variants: Vec<&Variant> = data_enum.variants.iter().collect();
            generate_tagged(&input, &variants).unwrap_or_else(syn::Error::into_compile_error)
        }
        Data::Struct(_) => {
            syn::Error::new_spanned(&input.ident, "Tagged can only be derived for enums, not structs.")
                .to_compile_error()
        }
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Tagged cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_tagged(input: &DeriveInput, variants: &[&Variant]) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let type_name = name.to_string();
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let mut seen: HashMap<String, &Variant> = HashMap::new();
    let mut tags = Vec::with_capacity(variants.len());
    let mut arms = Vec::with_capacity(variants.len());

    for variant in variants {
        let tag = variant_tag(variant)?;
        if let Some(previous) = seen.insert(tag.clone(), variant) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!(
                    "tag `{tag}` is already used by variant `{}`",
                    previous.ident
                ),
            ));
        }

        let variant_name = &variant.ident;
        let pattern = match &variant.fields {
            Fields::Unit => quote! { Self::#variant_name },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
            Fields::Named(_) => quote! { Self::#variant_name { .. } },
        };
        arms.push(quote! { #pattern => #tag, });
        tags.push(tag);
    }

    // An uninhabited enum has no value to inspect.
    let body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms)*
            }
        }
    };

    Ok(quote! {
        impl #impl_generics ::adtkit::matching::Tagged for #name #type_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const TAGS: &'static [&'static str] = &[#(#tags),*];

            #[inline]
            fn tag(&self) -> &'static str {
                #body
            }
        }
    })
}

/// The tag of a variant: its `#[tagged(rename = "...")]` value, or its name
/// in snake_case.
fn variant_tag(variant: &Variant) -> syn::Result<String> {
    let mut renamed = None;
    for attribute in variant.attrs.iter().filter(|attribute| attribute.path().is_ident("tagged")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(meta.error("tag must not be empty"));
                }
                renamed = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported tagged attribute, expected `rename`"))
            }
        })?;
    }
    Ok(renamed.unwrap_or_else(|| to_snake_case(&variant.ident.to_string())))
}

/// Converts a `PascalCase` identifier to `snake_case`.
///
/// Acronyms stay together: `HTTPRequest` becomes `http_request`.
fn to_snake_case(input: &str) -> String {
    let characters: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for (index, &character) in characters.iter().enumerate() {
        if !character.is_uppercase() {
            result.push(character);
            continue;
        }
        if let Some(&previous) = index.checked_sub(1).and_then(|i| characters.get(i)) {
            let next_is_lowercase = characters
                .get(index + 1)
                .is_some_and(|next| next.is_lowercase());
            let word_boundary = previous.is_lowercase()
                || previous.is_ascii_digit()
                || (previous.is_uppercase() && next_is_lowercase);
            if word_boundary {
                result.push('_');
            }
        }
        result.extend(character.to_lowercase());
    }

    result
}
