//! Parsing of `#[mask(...)]` field attributes.
//!
//! This module maps attribute syntax to masking directives and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Meta, Result};

/// A built-in strategy named in a `#[mask(...)]` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StrategyKind {
    Full,
    KeepLast4,
    KeepFirst4,
    CpfCnpj,
    Email,
    None,
}

impl StrategyKind {
    /// The runtime `MaskingStrategy` variant name for this kind.
    pub(crate) fn variant(self) -> &'static str {
        match self {
            StrategyKind::Full => "Full",
            StrategyKind::KeepLast4 => "KeepLast4",
            StrategyKind::KeepFirst4 => "KeepFirst4",
            StrategyKind::CpfCnpj => "CpfCnpj",
            StrategyKind::Email => "Email",
            StrategyKind::None => "None",
        }
    }

    fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "full" => Some(StrategyKind::Full),
            "keep_last_4" => Some(StrategyKind::KeepLast4),
            "keep_first_4" => Some(StrategyKind::KeepFirst4),
            "cpf_cnpj" => Some(StrategyKind::CpfCnpj),
            "email" => Some(StrategyKind::Email),
            "none" => Some(StrategyKind::None),
            _ => None,
        }
    }
}

/// Parsed masking metadata for one field.
///
/// | Attribute | Result |
/// |-----------|--------|
/// | None | no directive; render with default string conversion |
/// | `#[mask]` | `Builtin(Full)` |
/// | `#[mask(keep_last_4)]` etc. | `Builtin(...)` for the named strategy |
/// | `#[mask(custom = "id")]` | `Custom` with the identifier |
/// | `#[mask(custom)]` | `Custom` without an identifier (runtime error) |
#[derive(Clone, Debug)]
pub(crate) enum ParsedMask {
    /// One of the built-in strategies, including the explicit `none` opt-out.
    Builtin(StrategyKind),
    /// A custom strategy; `None` means the identifier was left unset.
    Custom(Option<String>),
}

fn set_mask(target: &mut Option<ParsedMask>, next: ParsedMask, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple masking strategies specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

/// Parses the `#[mask(...)]` attributes on a field.
pub(crate) fn parse_field_mask(attrs: &[Attribute]) -> Result<Option<ParsedMask>> {
    let mut parsed: Option<ParsedMask> = None;
    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                // Bare #[mask] defaults to the full strategy
                set_mask(&mut parsed, ParsedMask::Builtin(StrategyKind::Full), attr.span())?;
            }
            Meta::List(_) => {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("custom") {
                        let id = if meta.input.peek(syn::Token![=]) {
                            let lit: syn::LitStr = meta.value()?.parse()?;
                            // An empty identifier is as unset as a missing one
                            Some(lit.value()).filter(|id| !id.is_empty())
                        } else {
                            None
                        };
                        set_mask(&mut parsed, ParsedMask::Custom(id), meta.path.span())?;
                        return Ok(());
                    }
                    let Some(kind) = meta
                        .path
                        .get_ident()
                        .and_then(|ident| StrategyKind::from_ident(&ident.to_string()))
                    else {
                        return Err(meta.error(
                            "unknown masking strategy; expected one of `full`, `keep_last_4`, \
                             `keep_first_4`, `cpf_cnpj`, `email`, `none`, or `custom = \"id\"`",
                        ));
                    };
                    set_mask(&mut parsed, ParsedMask::Builtin(kind), meta.path.span())
                })?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[mask]",
                ));
            }
        }
    }
    Ok(parsed)
}
