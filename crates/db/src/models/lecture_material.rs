//! Lecture material model.

use scoala_core::types::DocId;
use scoala_core::validation::FieldRule;
use serde::{Deserialize, Serialize};

use super::Document;

/// A downloadable document attached to a lecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureMaterial {
    pub id: DocId,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "documentURL")]
    pub document_url: String,
}

impl Document for LectureMaterial {
    const ENTITY: &'static str = "LectureMaterial";
    const COLLECTION: &'static str = "lecture_materials";
    const RULES: &'static [FieldRule] = &[
        FieldRule::required("title"),
        FieldRule::required("documentURL"),
        FieldRule::text("title"),
        FieldRule::text("description"),
        FieldRule::text("documentURL"),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}
