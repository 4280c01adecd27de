//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for type parameters that actually appear in field
//! types, so unused parameters stay unconstrained.

use syn::{parse_quote, Ident};

use crate::crate_root;

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    if let syn::Type::Path(path) = ty {
        if let Some(segment) = path.path.segments.last() {
            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                for arg in &args.args {
                    if let syn::GenericArgument::Type(inner_ty) = arg {
                        collect_generics_from_type(inner_ty, generics, result);
                    }
                }
            }

            // Check if this type identifier matches a generic parameter
            for param in generics.type_params() {
                if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                    result.push(param.ident.clone());
                }
            }
        }
    }
}

/// Adds `MaskRender` bounds to generic parameters used in field types.
pub(crate) fn add_render_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    let root = crate_root();
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(#root::MaskRender));
        }
    }
    generics
}
