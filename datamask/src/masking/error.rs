//! Error taxonomy for the masking path.
//!
//! The engine never skips a failing field: producing malformed redaction
//! output would be worse than failing loudly, so every variant aborts the
//! whole `mask` call for the offending value.

use thiserror::Error;

/// Boxed error used to carry custom-strategy construction causes.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures raised while masking a value.
#[derive(Debug, Error)]
pub enum MaskError {
    /// A field declared the custom strategy without naming an implementation.
    ///
    /// This is a configuration error on the data type itself; it is reported
    /// before any registry lookup or construction is attempted.
    #[error("custom masking strategy requires a strategy identifier")]
    MissingCustomStrategy,

    /// No factory is registered for the requested custom strategy identifier.
    #[error("no custom masking strategy registered for `{id}`")]
    UnknownStrategy {
        /// The identifier the field's directive referenced.
        id: String,
    },

    /// A registered factory failed while constructing its strategy instance.
    ///
    /// The original cause is preserved. The registry retains nothing for the
    /// identifier, so no partially built instance can ever be observed.
    #[error("failed to construct custom masking strategy `{id}`")]
    StrategyConstruction {
        /// The identifier whose factory failed.
        id: String,
        /// The factory's failure.
        #[source]
        source: BoxError,
    },
}
