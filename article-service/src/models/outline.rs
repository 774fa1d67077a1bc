use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a section as the wizard works through the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    #[default]
    Pending,
    Generated,
}

/// A titled sub-unit of the article.
///
/// The short serde names (`h`, `desc`, `words`) are the JSON schema the
/// outline prompt instructs the model to emit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Assigned server-side after parsing; the model does not emit ids.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "h")]
    pub heading: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(default)]
    pub words: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: SectionStatus,
}

/// Proposed article structure, produced once per topic request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outline {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub internal_links: Vec<String>,
}

impl Outline {
    /// Assign ids and reset status on a freshly parsed outline.
    pub fn finalize(mut self) -> Self {
        for section in &mut self.sections {
            section.id = Some(Uuid::new_v4().to_string());
            section.status = SectionStatus::Pending;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_model_emitted_outline() {
        let raw = r#"{
            "title": "عنوان مقاله",
            "sections": [
                {"h": "مقدمه", "desc": "توضیح کوتاه", "words": 150},
                {"h": "بدنه", "desc": "توضیح", "words": 600}
            ],
            "internal_links": ["/post-1", "/post-2"]
        }"#;

        let outline: Outline = serde_json::from_str(raw).expect("valid outline JSON");
        let outline = outline.finalize();

        assert_eq!(outline.sections.len(), 2);
        assert_eq!(outline.internal_links.len(), 2);
        assert!(outline.sections.iter().all(|s| s.id.is_some()));
        assert!(outline
            .sections
            .iter()
            .all(|s| s.status == SectionStatus::Pending));
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&SectionStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let json = serde_json::to_string(&SectionStatus::Generated).unwrap();
        assert_eq!(json, "\"generated\"");
    }
}
