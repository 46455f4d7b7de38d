//! Rule evaluator: pure logic, no storage access.

use serde_json::{Map, Value};

use super::rules::{FieldRule, FieldViolation, RuleKind, ValidationResult};
use crate::error::CoreError;

/// Evaluate all rules against a single document.
pub fn evaluate_rules(rules: &[FieldRule], data: &Map<String, Value>) -> ValidationResult {
    let errors: Vec<FieldViolation> = rules
        .iter()
        .filter_map(|rule| evaluate_single_rule(rule, data.get(rule.field)))
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Check `doc` against `rules`, failing with [`CoreError::InvalidData`]
/// naming `entity` when the document is not an object or breaks any rule.
pub fn validate_document(
    entity: &'static str,
    rules: &[FieldRule],
    doc: &Value,
) -> Result<(), CoreError> {
    let Some(data) = doc.as_object() else {
        return Err(CoreError::invalid_data(
            entity,
            "document must be a JSON object",
        ));
    };

    let result = evaluate_rules(rules, data);
    if result.is_valid {
        Ok(())
    } else {
        Err(CoreError::invalid_data(entity, result.reason()))
    }
}

fn evaluate_single_rule(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    match rule.kind {
        RuleKind::Required => evaluate_required(rule, value),
        RuleKind::Text => evaluate_text(rule, value),
    }
}

fn violation(rule: &FieldRule, message: String) -> FieldViolation {
    FieldViolation {
        field: rule.field,
        rule: rule.kind,
        message,
    }
}

fn evaluate_required(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    match value {
        None | Some(Value::Null) => Some(violation(rule, format!("{} is required", rule.field))),
        Some(Value::String(s)) if s.is_empty() => {
            Some(violation(rule, format!("{} must not be empty", rule.field)))
        }
        _ => None,
    }
}

fn evaluate_text(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    match value {
        None | Some(Value::Null) | Some(Value::String(_)) => None,
        Some(_) => Some(violation(rule, format!("{} must be a string", rule.field))),
    }
}
