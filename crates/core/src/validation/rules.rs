//! Validation rule and result types.

/// The check a rule applies to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Present, not `null`, and not an empty string.
    Required,
    /// When present and non-null, must be a JSON string.
    Text,
}

/// One row of an entity's validation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: RuleKind,
}

impl FieldRule {
    pub const fn required(field: &'static str) -> Self {
        Self {
            field,
            kind: RuleKind::Required,
        }
    }

    pub const fn text(field: &'static str) -> Self {
        Self {
            field,
            kind: RuleKind::Text,
        }
    }
}

/// Aggregated result of evaluating all rules against one document.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    /// Join all violation messages into a single human-readable reason.
    pub fn reason(&self) -> String {
        self.errors
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: RuleKind,
    pub message: String,
}
