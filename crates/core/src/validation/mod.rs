//! Field-level validation for incoming documents.
//!
//! Each entity declares a static table of [`FieldRule`]s; the evaluator
//! checks a JSON object against that table and reports every violation.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate_rules, validate_document};
pub use rules::{FieldRule, FieldViolation, RuleKind, ValidationResult};
