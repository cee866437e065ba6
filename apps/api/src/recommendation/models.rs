use serde::{Deserialize, Serialize};

/// A learning resource as returned by the model: either a bare name or a titled link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LearningResource {
    Link { title: String, url: String },
    Name(String),
}

/// A normalized career recommendation. Every field is populated: normalization
/// substitutes placeholders for anything the model omitted or malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    /// 0 – 100
    pub match_score: u8,
    pub required_skills: Vec<String>,
    pub required_education: Vec<String>,
    pub salary_range: String,
    pub growth_potential: String,
    pub industries: Vec<String>,
    pub learning_resources: Vec<LearningResource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_resource_accepts_both_shapes() {
        let json = r#"["NPTEL", {"title": "Kaggle Learn", "url": "https://www.kaggle.com/learn"}]"#;
        let resources: Vec<LearningResource> = serde_json::from_str(json).unwrap();
        assert_eq!(resources[0], LearningResource::Name("NPTEL".to_string()));
        assert_eq!(
            resources[1],
            LearningResource::Link {
                title: "Kaggle Learn".to_string(),
                url: "https://www.kaggle.com/learn".to_string()
            }
        );
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = RecommendationRecord {
            id: "ux-designer".to_string(),
            title: "UX Designer".to_string(),
            description: "Designs usable products".to_string(),
            match_score: 81,
            required_skills: vec!["Figma".to_string()],
            required_education: vec!["B.Des".to_string()],
            salary_range: "₹4-20 LPA".to_string(),
            growth_potential: "Strong".to_string(),
            industries: vec![],
            learning_resources: vec![],
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["matchScore"], 81);
        assert_eq!(value["requiredEducation"][0], "B.Des");
        assert!(value.get("salaryRange").is_some());
    }
}
