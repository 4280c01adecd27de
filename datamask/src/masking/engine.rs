//! The masking engine: field enumeration, strategy dispatch, assembly.
//!
//! The engine consumes the [`Maskable`] field description, applies each
//! field's declared strategy, and assembles a single-line redacted
//! representation of the whole value:
//!
//! ```text
//! TypeName{field1=value1, field2=value2}
//! ```
//!
//! Only string-like field values are ever transformed; everything else
//! renders with its default string conversion. Failures propagate: silently
//! dropping a field could hide structural bugs rather than protect data.

use std::{fmt, sync::Arc};

use super::{
    error::MaskError,
    field::{FieldValue, MaskDirective, Maskable, MaskableField},
    registry::StrategyRegistry,
    strategy::{self, MaskingStrategy},
};

/// Placeholder emitted by [`Masked`]'s `Display` when masking fails.
///
/// Logging adapters cannot surface errors through `fmt`, and falling back to
/// the raw value would defeat the whole point, so the error case renders as
/// this fixed marker instead.
pub const MASKING_ERROR_PLACEHOLDER: &str = "[MASKING ERROR]";

/// Applies per-field masking strategies and formats the result.
///
/// The registry handle is explicit: build a [`StrategyRegistry`] at
/// application start, register custom strategies, and pass it in. An engine
/// without custom strategies can be built with [`MaskingEngine::new`].
#[derive(Clone, Debug, Default)]
pub struct MaskingEngine {
    registry: Arc<StrategyRegistry>,
}

impl MaskingEngine {
    /// Creates an engine with no custom strategies registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine backed by a shared strategy registry.
    #[must_use]
    pub fn with_registry(registry: Arc<StrategyRegistry>) -> Self {
        Self { registry }
    }

    /// Masks a value into its single-line redacted representation.
    pub fn mask(&self, value: &dyn Maskable) -> Result<String, MaskError> {
        let fields = value.fields();
        let mut parts = Vec::with_capacity(fields.len());
        for field in &fields {
            parts.push(self.format_field(field)?);
        }
        Ok(format!("{}{{{}}}", value.type_name(), parts.join(", ")))
    }

    /// Masks an optional value, rendering `None` as the literal `"null"`.
    pub fn mask_optional(&self, value: Option<&dyn Maskable>) -> Result<String, MaskError> {
        match value {
            Some(value) => self.mask(value),
            None => Ok("null".to_owned()),
        }
    }

    /// Wraps a value for infallible `Display` (and `slog::Value`) rendering.
    ///
    /// The wrapper masks lazily at format time; if masking fails, it renders
    /// [`MASKING_ERROR_PLACEHOLDER`] rather than leaking the raw value.
    #[must_use]
    pub fn display<'a>(&'a self, value: &'a dyn Maskable) -> Masked<'a> {
        Masked {
            engine: self,
            value,
        }
    }

    fn format_field(&self, field: &MaskableField<'_>) -> Result<String, MaskError> {
        match &field.value {
            FieldValue::Null => Ok(format!("{}=null", field.name)),
            FieldValue::Text(text) => match &field.directive {
                Some(directive) if directive.strategy != MaskingStrategy::None => {
                    let masked = self.apply(directive, text)?;
                    Ok(format!("{}={masked}", field.name))
                }
                _ => Ok(format!("{}={text}", field.name)),
            },
            FieldValue::Display(repr) => Ok(format!("{}={repr}", field.name)),
        }
    }

    fn apply(&self, directive: &MaskDirective, value: &str) -> Result<String, MaskError> {
        let masked = match directive.strategy {
            MaskingStrategy::Full => strategy::full(value),
            MaskingStrategy::KeepLast4 => strategy::keep_last4(value),
            MaskingStrategy::KeepFirst4 => strategy::keep_first4(value),
            MaskingStrategy::CpfCnpj => strategy::cpf_cnpj(value),
            MaskingStrategy::Email => strategy::email(value),
            MaskingStrategy::Custom => {
                let id = directive.custom.ok_or(MaskError::MissingCustomStrategy)?;
                self.registry.resolve(id)?.mask(value)
            }
            // Callers filter None before dispatch; kept total anyway.
            MaskingStrategy::None => value.to_owned(),
        };
        Ok(masked)
    }
}

/// Convenience entry point using an engine with no custom strategies.
pub fn mask(value: &dyn Maskable) -> Result<String, MaskError> {
    MaskingEngine::new().mask(value)
}

/// A value paired with an engine for infallible display-time masking.
///
/// Created by [`MaskingEngine::display`]. The `Display` implementation is the
/// integration surface for format-string loggers; the `slog` feature adds a
/// `slog::Value` implementation on top of it.
#[derive(Clone, Copy)]
pub struct Masked<'a> {
    engine: &'a MaskingEngine,
    value: &'a dyn Maskable,
}

impl fmt::Display for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.engine.mask(self.value) {
            Ok(masked) => f.write_str(&masked),
            Err(error) => {
                tracing::debug!(%error, "masking failed during display");
                f.write_str(MASKING_ERROR_PLACEHOLDER)
            }
        }
    }
}

impl fmt::Debug for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use std::{borrow::Cow, sync::Arc};

    use super::{mask, MaskingEngine, MASKING_ERROR_PLACEHOLDER};
    use crate::masking::{
        error::MaskError,
        field::{FieldValue, MaskDirective, Maskable, MaskableField},
        registry::{CustomMaskingStrategy, StrategyRegistry},
        strategy::MaskingStrategy,
    };

    struct Customer {
        name: String,
        document: String,
        email: Option<String>,
        active: bool,
    }

    impl Maskable for Customer {
        fn type_name(&self) -> &'static str {
            "Customer"
        }

        fn fields(&self) -> Vec<MaskableField<'_>> {
            vec![
                MaskableField {
                    name: "name",
                    value: FieldValue::Text(Cow::Borrowed(&self.name)),
                    directive: None,
                },
                MaskableField {
                    name: "document",
                    value: FieldValue::Text(Cow::Borrowed(&self.document)),
                    directive: Some(MaskDirective {
                        strategy: MaskingStrategy::CpfCnpj,
                        custom: None,
                    }),
                },
                MaskableField {
                    name: "email",
                    value: self
                        .email
                        .as_deref()
                        .map_or(FieldValue::Null, |email| {
                            FieldValue::Text(Cow::Borrowed(email))
                        }),
                    directive: Some(MaskDirective {
                        strategy: MaskingStrategy::Email,
                        custom: None,
                    }),
                },
                MaskableField {
                    name: "active",
                    value: FieldValue::Display(self.active.to_string()),
                    directive: None,
                },
            ]
        }
    }

    fn sample() -> Customer {
        Customer {
            name: "John Doe".to_owned(),
            document: "12345678901".to_owned(),
            email: Some("john.doe@example.com".to_owned()),
            active: true,
        }
    }

    #[test]
    fn masks_fields_in_declaration_order() {
        let masked = mask(&sample()).unwrap();
        assert_eq!(
            masked,
            "Customer{name=John Doe, document=***.456.789-**, email=j******e@example.com, active=true}"
        );
    }

    #[test]
    fn output_is_stable_across_calls() {
        let customer = sample();
        assert_eq!(mask(&customer).unwrap(), mask(&customer).unwrap());
    }

    #[test]
    fn null_field_renders_as_null() {
        let mut customer = sample();
        customer.email = None;
        let masked = mask(&customer).unwrap();
        assert!(masked.contains("email=null"));
    }

    #[test]
    fn absent_value_renders_as_null_literal() {
        let engine = MaskingEngine::new();
        assert_eq!(engine.mask_optional(None).unwrap(), "null");
    }

    struct NoFields;

    impl Maskable for NoFields {
        fn type_name(&self) -> &'static str {
            "NoFields"
        }

        fn fields(&self) -> Vec<MaskableField<'_>> {
            Vec::new()
        }
    }

    #[test]
    fn value_without_fields_renders_empty_braces() {
        assert_eq!(mask(&NoFields).unwrap(), "NoFields{}");
    }

    struct Tokenised {
        code: String,
        custom: Option<&'static str>,
    }

    impl Maskable for Tokenised {
        fn type_name(&self) -> &'static str {
            "Tokenised"
        }

        fn fields(&self) -> Vec<MaskableField<'_>> {
            vec![MaskableField {
                name: "code",
                value: FieldValue::Text(Cow::Borrowed(&self.code)),
                directive: Some(MaskDirective {
                    strategy: MaskingStrategy::Custom,
                    custom: self.custom,
                }),
            }]
        }
    }

    #[derive(Default)]
    struct Reversing;

    impl CustomMaskingStrategy for Reversing {
        fn mask(&self, value: &str) -> String {
            value.chars().rev().collect()
        }
    }

    #[test]
    fn custom_strategy_is_applied_via_registry() {
        let mut registry = StrategyRegistry::new();
        registry.register::<Reversing>("reverse");
        let engine = MaskingEngine::with_registry(Arc::new(registry));

        let masked = engine
            .mask(&Tokenised {
                code: "ABC-123".to_owned(),
                custom: Some("reverse"),
            })
            .unwrap();
        assert_eq!(masked, "Tokenised{code=321-CBA}");
    }

    #[test]
    fn missing_custom_identifier_is_a_configuration_error() {
        let engine = MaskingEngine::new();
        let err = engine
            .mask(&Tokenised {
                code: "ABC-123".to_owned(),
                custom: None,
            })
            .unwrap_err();
        assert!(matches!(err, MaskError::MissingCustomStrategy));
    }

    #[test]
    fn display_wrapper_falls_back_to_placeholder_on_error() {
        let engine = MaskingEngine::new();
        let value = Tokenised {
            code: "ABC-123".to_owned(),
            custom: Some("unregistered"),
        };
        let rendered = engine.display(&value).to_string();
        assert_eq!(rendered, MASKING_ERROR_PLACEHOLDER);
    }

    #[test]
    fn display_wrapper_renders_masked_value() {
        let engine = MaskingEngine::new();
        let customer = sample();
        let rendered = format!("customer: {}", engine.display(&customer));
        assert!(rendered.contains("document=***.456.789-**"));
        assert!(!rendered.contains("12345678901"));
    }
}
