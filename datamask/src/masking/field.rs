//! Domain layer: describing a value's fields for masking.
//!
//! This module defines the capability the engine consumes instead of runtime
//! reflection:
//!
//! - [`Maskable`]: types that can describe their fields in declaration order
//! - [`MaskableField`] / [`FieldValue`]: one described field
//! - [`MaskDirective`]: the per-field masking metadata
//! - [`MaskRender`]: conversion from ordinary field types to [`FieldValue`]
//!
//! ## Field handling
//!
//! The derive macro generates a [`Maskable`] implementation from
//! `#[mask(...)]` attributes:
//!
//! | Annotation | Directive | Engine behavior |
//! |------------|-----------|-----------------|
//! | None | `None` | render with default string conversion |
//! | `#[mask(keep_last_4)]` etc. | built-in strategy | masked via rules |
//! | `#[mask(custom = "id")]` | `Custom` + identifier | resolved via registry |
//!
//! ## External field types
//!
//! Every field must implement [`MaskRender`]. Implementations are provided
//! for string-like types, scalars, and `Option` of those. For a foreign type,
//! implement `MaskRender` on a local newtype (Rust's orphan rules prevent a
//! direct impl).

use std::borrow::Cow;

use super::strategy::MaskingStrategy;

/// A value whose fields can be enumerated for masking.
///
/// Implementations must return fields in declaration order, and the order
/// must be stable across calls for a given type. Deriving `Maskable`
/// guarantees both.
///
/// The trait is object-safe so that a log-interception shim can pass
/// arbitrary records through a single `&dyn Maskable` entry point.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not `Maskable`",
    label = "this value cannot be masked",
    note = "use `#[derive(Maskable)]` on the type definition"
)]
pub trait Maskable {
    /// The simple (unqualified) type name used in the masked output.
    fn type_name(&self) -> &'static str;

    /// The value's fields in declaration order.
    fn fields(&self) -> Vec<MaskableField<'_>>;
}

/// One described field: name, rendered value, and optional masking metadata.
#[derive(Debug)]
pub struct MaskableField<'a> {
    /// Field name as declared.
    pub name: &'static str,
    /// The field's value, pre-classified for the engine.
    pub value: FieldValue<'a>,
    /// Masking metadata, absent for unannotated fields.
    pub directive: Option<MaskDirective>,
}

/// A field value as seen by the engine.
#[derive(Debug)]
pub enum FieldValue<'a> {
    /// An absent value (`Option::None`); rendered as the literal `null`.
    Null,
    /// A string-like value, eligible for masking.
    Text(Cow<'a, str>),
    /// Any other value, already converted to its default string form.
    Display(String),
}

/// Per-field masking metadata.
///
/// This is the stable coupling point between caller-declared data shapes and
/// the engine: a strategy plus, for [`MaskingStrategy::Custom`], the
/// identifier of a registered custom strategy.
#[derive(Clone, Copy, Debug)]
pub struct MaskDirective {
    /// Which rule applies.
    pub strategy: MaskingStrategy,
    /// Custom strategy identifier; required iff `strategy` is `Custom`.
    pub custom: Option<&'static str>,
}

/// Converts a field's value into a [`FieldValue`].
///
/// String-like types become [`FieldValue::Text`] and can be masked; scalars
/// become [`FieldValue::Display`] and always render unmasked, matching the
/// engine contract that only string values are transformed.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be rendered as a maskable field",
    label = "no `MaskRender` implementation for this field type",
    note = "implement `MaskRender` for `{Self}`, or wrap it in a local newtype that does"
)]
pub trait MaskRender {
    /// Classifies and renders this value for the engine.
    fn render(&self) -> FieldValue<'_>;
}

impl MaskRender for String {
    fn render(&self) -> FieldValue<'_> {
        FieldValue::Text(Cow::Borrowed(self))
    }
}

impl MaskRender for &str {
    fn render(&self) -> FieldValue<'_> {
        FieldValue::Text(Cow::Borrowed(self))
    }
}

impl MaskRender for Cow<'_, str> {
    fn render(&self) -> FieldValue<'_> {
        FieldValue::Text(Cow::Borrowed(self.as_ref()))
    }
}

macro_rules! impl_mask_render_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MaskRender for $ty {
                fn render(&self) -> FieldValue<'_> {
                    FieldValue::Display(self.to_string())
                }
            }
        )*
    };
}

impl_mask_render_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T> MaskRender for Option<T>
where
    T: MaskRender,
{
    fn render(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.render(),
            None => FieldValue::Null,
        }
    }
}
