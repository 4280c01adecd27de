//! Adapter for emitting masked values through `slog`.
//!
//! This module connects [`MaskingEngine`](crate::MaskingEngine) with `slog`:
//! a [`Masked`] wrapper logs the engine's single-line redacted string in
//! place of the original value, so raw field contents never reach a drain.
//!
//! It is responsible for:
//! - Ensuring the logged representation comes from `MaskingEngine::mask`,
//!   never from the original value.
//! - Avoiding fallible logging APIs: masking failures render as the fixed
//!   [`MASKING_ERROR_PLACEHOLDER`](crate::MASKING_ERROR_PLACEHOLDER) string
//!   rather than propagating as errors.
//!
//! It does not configure `slog`, define masking policy, or validate that a
//! `Maskable` implementation describes every sensitive field.
//!
//! ## Example
//! ```ignore
//! let engine = MaskingEngine::with_registry(registry);
//! info!(logger, "customer updated"; "customer" => engine.display(&customer));
//! ```

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::masking::Masked;

impl SlogValue for Masked<'_> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.to_string())
    }
}
