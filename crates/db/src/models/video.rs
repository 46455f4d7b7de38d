//! Video lesson model.

use scoala_core::types::DocId;
use scoala_core::validation::FieldRule;
use serde::{Deserialize, Serialize};

use super::Document;

/// A recorded lesson. `summary` and `teacher_image_url` are mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: DocId,
    pub title: Option<String>,
    pub summary: String,
    #[serde(rename = "teacherImageURL")]
    pub teacher_image_url: String,
    #[serde(rename = "videoURL")]
    pub video_url: Option<String>,
}

impl Document for Video {
    const ENTITY: &'static str = "Video";
    const COLLECTION: &'static str = "videos";
    const RULES: &'static [FieldRule] = &[
        FieldRule::required("summary"),
        FieldRule::required("teacherImageURL"),
        FieldRule::text("title"),
        FieldRule::text("summary"),
        FieldRule::text("teacherImageURL"),
        FieldRule::text("videoURL"),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_field_names() {
        let video = Video {
            id: "v1".into(),
            title: None,
            summary: "Fractions".into(),
            teacher_image_url: "https://cdn.example/t.png".into(),
            video_url: Some("https://cdn.example/v.mp4".into()),
        };
        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "v1",
                "title": null,
                "summary": "Fractions",
                "teacherImageURL": "https://cdn.example/t.png",
                "videoURL": "https://cdn.example/v.mp4",
            })
        );
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let video: Video = serde_json::from_value(json!({
            "id": "v1",
            "summary": "s",
            "teacherImageURL": "t",
        }))
        .unwrap();
        assert_eq!(video.title, None);
        assert_eq!(video.video_url, None);
    }
}
