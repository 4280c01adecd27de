//! Struct-specific `Maskable` derivation.
//!
//! This module generates the field-description body for structs and collects
//! generic parameters that require `MaskRender` bounds.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    crate_root,
    generics::{add_render_bounds, collect_generics_from_type},
    strategy::{parse_field_mask, ParsedMask},
};

pub(crate) fn derive_struct(
    name: &Ident,
    data: DataStruct,
    generics: &syn::Generics,
) -> Result<TokenStream> {
    let root = crate_root();
    let mut used_generics = Vec::new();
    let mut field_tokens = Vec::new();

    match data.fields {
        Fields::Named(fields) => {
            for field in fields.named {
                let span = field.span();
                let parsed = parse_field_mask(&field.attrs)?;
                let ident = field.ident.expect("named field should have an identifier");
                let field_name = ident.to_string();
                collect_generics_from_type(&field.ty, generics, &mut used_generics);
                field_tokens.push(describe_field(
                    &root,
                    &field_name,
                    &quote! { self.#ident },
                    parsed.as_ref(),
                    span,
                ));
            }
        }
        Fields::Unnamed(fields) => {
            for (index, field) in fields.unnamed.into_iter().enumerate() {
                let span = field.span();
                let parsed = parse_field_mask(&field.attrs)?;
                let field_name = index.to_string();
                let index = syn::Index::from(index);
                collect_generics_from_type(&field.ty, generics, &mut used_generics);
                field_tokens.push(describe_field(
                    &root,
                    &field_name,
                    &quote! { self.#index },
                    parsed.as_ref(),
                    span,
                ));
            }
        }
        Fields::Unit => {}
    }

    let body = if field_tokens.is_empty() {
        quote! { ::std::vec::Vec::new() }
    } else {
        quote! { ::std::vec![ #(#field_tokens),* ] }
    };

    let bounded = add_render_bounds(generics.clone(), &used_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();
    let type_name = name.to_string();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #root::Maskable for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn fields(&self) -> ::std::vec::Vec<#root::MaskableField<'_>> {
                #body
            }
        }
    })
}

/// Emits one `MaskableField` literal for a struct field.
///
/// The render call is spanned to the field so missing `MaskRender`
/// implementations point at the offending declaration.
fn describe_field(
    root: &TokenStream,
    name: &str,
    access: &TokenStream,
    parsed: Option<&ParsedMask>,
    span: proc_macro2::Span,
) -> TokenStream {
    let directive = match parsed {
        None => quote! { ::core::option::Option::None },
        Some(ParsedMask::Builtin(kind)) => {
            let variant = format_ident!("{}", kind.variant());
            quote! {
                ::core::option::Option::Some(#root::MaskDirective {
                    strategy: #root::MaskingStrategy::#variant,
                    custom: ::core::option::Option::None,
                })
            }
        }
        Some(ParsedMask::Custom(id)) => {
            let custom = match id {
                Some(id) => quote! { ::core::option::Option::Some(#id) },
                None => quote! { ::core::option::Option::None },
            };
            quote! {
                ::core::option::Option::Some(#root::MaskDirective {
                    strategy: #root::MaskingStrategy::Custom,
                    custom: #custom,
                })
            }
        }
    };

    quote_spanned! { span =>
        #root::MaskableField {
            name: #name,
            value: #root::MaskRender::render(&#access),
            directive: #directive,
        }
    }
}
