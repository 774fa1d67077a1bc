use serde::{Deserialize, Serialize};

/// Keyword suggestions bucketed by search intent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeywordBuckets {
    #[serde(default)]
    pub main: Vec<String>,
    #[serde(default)]
    pub secondary: Vec<String>,
    #[serde(default)]
    pub long_tail: Vec<String>,
}

/// One heading-structure proposal inside the SEO info payload.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeoOutlineEntry {
    #[serde(default)]
    pub h1: String,
    #[serde(default)]
    pub h2: Vec<String>,
    #[serde(default)]
    pub h3: Vec<String>,
}

/// SEO metadata the model is asked to produce for a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoInfo {
    pub title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub keywords: KeywordBuckets,
    #[serde(default)]
    pub outline: Vec<SeoOutlineEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_model_emitted_seo_info() {
        let raw = r#"{
            "title": "راهنمای کامل",
            "meta_description": "توضیح متا",
            "snippet": "چکیده",
            "keywords": {"main": ["a"], "secondary": ["b"], "long_tail": ["c d e"]},
            "outline": [{"h1": "تیتر", "h2": ["بخش ۱"], "h3": []}]
        }"#;

        let info: SeoInfo = serde_json::from_str(raw).expect("valid SEO JSON");

        assert_eq!(info.keywords.main, vec!["a"]);
        assert_eq!(info.outline.len(), 1);
    }
}
