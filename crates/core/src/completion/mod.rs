//! Completion tracker module.
//!
//! Classifies every field of a listing as satisfied or pending against a
//! declarative rule table, split into mandatory (publish-blocking) and
//! nice-to-have (quality-scoring) buckets. Rule applicability is
//! conditioned on the property type.
//!
//! # Architecture
//!
//! ```text
//! ListingFields → [Rule Table] → generic evaluator loop
//!                                        ↓
//!                                CompletionResult
//! ```
//!
//! - **Models** (`model.rs`) - FieldRule, buckets, CompletionResult
//! - **Rules** (`rules.rs`) - the static rule table and its validators
//! - **Evaluator** (`evaluator.rs`) - the single interpreter loop
//!
//! The evaluator is a pure function: no I/O, never errors, absent input
//! degrades to a zero result.

mod evaluator;
mod model;
mod rules;

pub use evaluator::calculate_completion;
pub use model::{
    CompletionBucket, CompletionField, CompletionResult, FieldRule, RuleCategory, RuleImportance,
};
pub use rules::{field_rules, min_images};
