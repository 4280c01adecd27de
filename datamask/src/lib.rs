//! Policy-driven field masking for structured log data, plus authenticated
//! encryption for values that must stay recoverable.
//!
//! This crate separates:
//! - **Description**: what a value's fields are ([`Maskable`], usually derived).
//! - **Policy**: how each field is redacted ([`MaskingStrategy`] per field).
//!
//! The derive macro records per-field `#[mask(...)]` attributes and the
//! engine applies them at the boundary when you call
//! [`MaskingEngine::mask`].
//!
//! Key rules:
//! - Only string-like field values are transformed; everything else renders
//!   with its default string conversion.
//! - `Option::None` fields render as the literal `null`, as does a `None`
//!   passed to [`MaskingEngine::mask_optional`].
//! - A `custom = "id"` strategy resolves through a [`StrategyRegistry`]
//!   built at startup; one instance per identifier is constructed lazily and
//!   shared for the life of the process.
//! - Masking failures propagate: a field that cannot be masked aborts the
//!   call rather than leaking or silently dropping data.
//!
//! What this crate does:
//! - defines the field-description capability and the `#[derive(Maskable)]` macro
//! - implements the built-in masking rules and custom-strategy dispatch
//! - provides AES-256-GCM encryption of string payloads (`crypto` feature)
//! - resolves the encryption key from override/environment/file (`crypto` feature)
//! - integrates with `slog` behind the `slog` feature
//!
//! What it does not do:
//! - act as a logging framework or key-management service
//! - walk nested collections or polymorphic containers
//!
//! The `Maskable` derive macro lives in `datamask-derive` and is re-exported
//! here.

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
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use datamask_derive::Maskable;

// Module declarations
#[cfg(feature = "crypto")]
pub mod config;
#[cfg(feature = "crypto")]
pub mod crypto;
mod masking;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
#[cfg(feature = "crypto")]
pub use config::{load_key, KeyLoader, DEFAULT_KEY_FILE, KEY_ENV_VAR};
#[cfg(feature = "crypto")]
pub use crypto::{CryptoError, SymmetricKey};
pub use masking::{
    mask, BoxError, CustomMaskingStrategy, FieldValue, MaskDirective, MaskError, MaskRender,
    Maskable, MaskableField, Masked, MaskingEngine, MaskingStrategy, StrategyRegistry,
    MASKING_ERROR_PLACEHOLDER,
};
