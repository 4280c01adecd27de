//! Derive macro for `datamask`.
//!
//! This crate generates the field-description code behind
//! `#[derive(Maskable)]`. It:
//! - reads `#[mask(...)]` field attributes
//! - emits a `Maskable` implementation returning fields in declaration order
//!
//! It does **not** implement masking rules or custom-strategy resolution.
//! Those live in the main `datamask` crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod derive_struct;
mod generics;
mod strategy;
use derive_struct::derive_struct;

/// Derives `datamask::Maskable` for structs.
///
/// The generated implementation returns the struct's fields in declaration
/// order, so the engine's output is deterministic for a given type.
///
/// # Field Attributes
///
/// - **No annotation**: the field renders with its default string
///   conversion and is never masked.
///
/// - `#[mask]`: shorthand for `#[mask(full)]`.
///
/// - `#[mask(full)]`, `#[mask(keep_last_4)]`, `#[mask(keep_first_4)]`,
///   `#[mask(cpf_cnpj)]`, `#[mask(email)]`: apply the named built-in
///   strategy to string-like values. Non-string values render unmasked.
///
/// - `#[mask(none)]`: explicitly opt out of masking.
///
/// - `#[mask(custom = "id")]`: resolve a custom strategy registered under
///   `id` in the engine's `StrategyRegistry`. A bare `#[mask(custom)]`
///   compiles, but masking fails at runtime with a configuration error
///   until an identifier is supplied.
///
/// Every field type must implement `datamask::MaskRender`; implementations
/// exist for string-like types, scalars, and `Option` of those.
///
/// Enums and unions are rejected at compile time: the engine's contract
/// covers flat, record-like values only.
#[proc_macro_derive(Maskable, attributes(mask))]
pub fn derive_maskable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the datamask crate root.
///
/// Handles crate renaming (e.g., `my_mask = { package = "datamask", ... }`)
/// and internal usage (when the derive is used inside datamask itself).
fn crate_root() -> proc_macro2::TokenStream {
    match crate_name("datamask") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::datamask },
    }
}

fn expand(input: DeriveInput) -> Result<proc_macro2::TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    match &data {
        Data::Struct(data) => derive_struct(&ident, data.clone(), &generics),
        Data::Enum(data) => Err(syn::Error::new(
            data.enum_token.span(),
            "`Maskable` cannot be derived for enums; it describes flat, record-like values",
        )),
        Data::Union(data) => Err(syn::Error::new(
            data.union_token.span(),
            "`Maskable` cannot be derived for unions",
        )),
    }
}
