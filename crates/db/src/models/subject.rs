use scoala_core::types::DocId;
use scoala_core::validation::FieldRule;
use serde::{Deserialize, Serialize};

use super::Document;

/// A school subject (e.g. "Mathematics").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: DocId,
    pub name: String,
    pub description: Option<String>,
}

impl Document for Subject {
    const ENTITY: &'static str = "Subject";
    const COLLECTION: &'static str = "subjects";
    const RULES: &'static [FieldRule] = &[
        FieldRule::required("name"),
        FieldRule::text("name"),
        FieldRule::text("description"),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}
