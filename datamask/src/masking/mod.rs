//! Field masking: description, rules, custom strategies, and the engine.
//!
//! This module ties the pieces together:
//!
//! - **`field`**: domain layer — what a value looks like (`Maskable`,
//!   `MaskableField`, `MaskDirective`)
//! - **`strategy`**: rule layer — the built-in string transformations
//! - **`registry`**: extension layer — user-supplied strategies by identifier
//! - **`engine`**: application layer — dispatch and output assembly

mod engine;
mod error;
mod field;
mod registry;
mod strategy;

pub use engine::{mask, Masked, MaskingEngine, MASKING_ERROR_PLACEHOLDER};
pub use error::{BoxError, MaskError};
pub use field::{FieldValue, MaskDirective, Maskable, MaskableField, MaskRender};
pub use registry::{CustomMaskingStrategy, StrategyRegistry};
pub use strategy::MaskingStrategy;
