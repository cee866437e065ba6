//! Normalization: turns loosely-shaped model objects into `RecommendationRecord`s.
//!
//! Defaults here are per-field and only apply once extraction succeeded. They are
//! presentation placeholders, not claims about the career.

use std::collections::HashSet;

use rand::Rng;
use serde_json::{Map, Value};

use crate::recommendation::models::{LearningResource, RecommendationRecord};

pub const DEFAULT_TITLE: &str = "Career Path";
pub const DEFAULT_DESCRIPTION: &str = "No description available";
pub const DEFAULT_SALARY: &str = "Varies based on experience";
pub const DEFAULT_GROWTH: &str = "Career growth opportunities available";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const EDUCATION_ENTRY_PLACEHOLDER: &str = "Education requirement";
pub const EDUCATION_UNKNOWN_PLACEHOLDER: &str = "Education requirements available";

/// Inclusive band for the cosmetic match-score default.
pub const DEFAULT_SCORE_MIN: u8 = 70;
pub const DEFAULT_SCORE_MAX: u8 = 94;

/// Normalizes a batch and sorts it by match score, highest first.
///
/// `batch_stamp` (milliseconds) is folded into synthesized ids so they stay
/// unique across batches as well as within one. A model-supplied id that
/// repeats an earlier one in the batch is replaced by a synthesized id.
pub fn normalize_batch<R: Rng>(
    items: &[Value],
    batch_stamp: i64,
    rng: &mut R,
) -> Vec<RecommendationRecord> {
    let mut seen_ids = HashSet::new();
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let mut record = normalize_record(item, index, batch_stamp, rng);
        if seen_ids.contains(&record.id) {
            record.id = synthesized_id(batch_stamp, index);
            let mut attempt = 1;
            while seen_ids.contains(&record.id) {
                attempt += 1;
                record.id = format!("{}-{attempt}", synthesized_id(batch_stamp, index));
            }
        }
        seen_ids.insert(record.id.clone());
        records.push(record);
    }
    records.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    records
}

pub fn normalize_record<R: Rng>(
    item: &Value,
    index: usize,
    batch_stamp: i64,
    rng: &mut R,
) -> RecommendationRecord {
    let empty = Map::new();
    let object = item.as_object().unwrap_or(&empty);

    let id = non_empty_str(object.get("id")).unwrap_or_else(|| synthesized_id(batch_stamp, index));

    let match_score = object
        .get("matchScore")
        .and_then(score_value)
        .unwrap_or_else(|| rng.gen_range(DEFAULT_SCORE_MIN..=DEFAULT_SCORE_MAX));

    let mut required_skills = string_list(object.get("requiredSkills"));
    if required_skills.is_empty() {
        required_skills.push(NOT_SPECIFIED.to_string());
    }

    let salary_range = non_empty_str(object.get("salaryRange"))
        .or_else(|| non_empty_str(object.get("averageSalary")))
        .unwrap_or_else(|| DEFAULT_SALARY.to_string());

    let learning_resources = match object.get("learningResources") {
        Some(v) if !v.is_null() => resource_list(v),
        _ => object.get("resources").map(resource_list).unwrap_or_default(),
    };

    RecommendationRecord {
        id,
        title: non_empty_str(object.get("title")).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: non_empty_str(object.get("description"))
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        match_score,
        required_skills,
        required_education: normalize_education(object.get("requiredEducation")),
        salary_range,
        growth_potential: non_empty_str(object.get("growthPotential"))
            .unwrap_or_else(|| DEFAULT_GROWTH.to_string()),
        industries: string_list(object.get("industries")),
        learning_resources,
    }
}

/// String → single-element list; list → stringified elements; absent → placeholder.
fn synthesized_id(batch_stamp: i64, index: usize) -> String {
    format!("career-{batch_stamp}-{}", index + 1)
}

pub fn normalize_education(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => vec![NOT_SPECIFIED.to_string()],
        Some(Value::String(s)) if s.trim().is_empty() => vec![NOT_SPECIFIED.to_string()],
        Some(Value::String(s)) => vec![s.trim().to_string()],
        Some(Value::Array(items)) if items.is_empty() => vec![NOT_SPECIFIED.to_string()],
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item.as_str().map(str::trim) {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => EDUCATION_ENTRY_PLACEHOLDER.to_string(),
            })
            .collect(),
        Some(_) => vec![EDUCATION_UNKNOWN_PLACEHOLDER.to_string()],
    }
}

/// Accepts integers, floats, and numeric strings such as `"87"` or `"87%"`.
fn score_value(value: &Value) -> Option<u8> {
    let score = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if score.is_finite() && (0.0..=100.0).contains(&score) {
        Some(score.round() as u8)
    } else {
        None
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Collects the non-empty strings of a list; a lone string becomes one element.
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| non_empty_str(Some(item)))
            .collect(),
        Some(Value::String(_)) => non_empty_str(value).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn resource_list(value: &Value) -> Vec<LearningResource> {
    let items = match value {
        Value::Array(items) => items.as_slice(),
        _ => return Vec::new(),
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) if !s.trim().is_empty() => {
                Some(LearningResource::Name(s.trim().to_string()))
            }
            Value::Object(obj) => {
                let title = non_empty_str(obj.get("title"))?;
                match non_empty_str(obj.get("url")) {
                    Some(url) => Some(LearningResource::Link { title, url }),
                    None => Some(LearningResource::Name(title)),
                }
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    use super::*;

    const STAMP: i64 = 1_700_000_000_000;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_missing_education_is_single_placeholder() {
        let record = normalize_record(&json!({"title": "Nurse"}), 0, STAMP, &mut rng());
        assert_eq!(record.required_education, vec!["Not specified"]);
    }

    #[test]
    fn test_string_education_is_wrapped() {
        let record = normalize_record(
            &json!({"title": "Engineer", "requiredEducation": "B.Tech"}),
            0,
            STAMP,
            &mut rng(),
        );
        assert_eq!(record.required_education, vec!["B.Tech"]);
    }

    #[test]
    fn test_education_list_coerces_non_strings() {
        let education = normalize_education(Some(&json!(["MBBS", 42, {"degree": "MD"}])));
        assert_eq!(
            education,
            vec!["MBBS", "Education requirement", "Education requirement"]
        );
    }

    #[test]
    fn test_education_of_unexpected_type() {
        assert_eq!(
            normalize_education(Some(&json!(true))),
            vec!["Education requirements available"]
        );
        assert_eq!(normalize_education(Some(&json!([]))), vec!["Not specified"]);
    }

    #[test]
    fn test_missing_id_is_synthesized_from_index_and_stamp() {
        let items = vec![json!({"title": "A", "matchScore": 90}), json!({"title": "B", "matchScore": 80})];
        let records = normalize_batch(&items, STAMP, &mut rng());
        assert_eq!(records[0].id, "career-1700000000000-1");
        assert_eq!(records[1].id, "career-1700000000000-2");
    }

    #[test]
    fn test_repeated_ids_are_made_unique() {
        let items = vec![
            json!({"id": "data-analyst", "title": "Data Analyst", "matchScore": 90}),
            json!({"id": "data-analyst", "title": "Business Analyst", "matchScore": 85}),
            json!({"id": "career-1700000000000-4", "title": "Actuary", "matchScore": 80}),
            json!({"id": "data-analyst", "title": "BI Developer", "matchScore": 75}),
        ];
        let records = normalize_batch(&items, STAMP, &mut rng());
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "data-analyst",
                "career-1700000000000-2",
                "career-1700000000000-4",
                "career-1700000000000-4-2",
            ]
        );
    }

    #[test]
    fn test_provided_id_is_kept() {
        let record = normalize_record(
            &json!({"id": "civil-engineer", "title": "Civil Engineer"}),
            3,
            STAMP,
            &mut rng(),
        );
        assert_eq!(record.id, "civil-engineer");
    }

    #[test]
    fn test_valid_score_is_kept_and_rounded() {
        let a = normalize_record(&json!({"title": "A", "matchScore": 0}), 0, STAMP, &mut rng());
        let b = normalize_record(&json!({"title": "B", "matchScore": 87.6}), 0, STAMP, &mut rng());
        let c = normalize_record(&json!({"title": "C", "matchScore": "91%"}), 0, STAMP, &mut rng());
        assert_eq!(a.match_score, 0);
        assert_eq!(b.match_score, 88);
        assert_eq!(c.match_score, 91);
    }

    #[test]
    fn test_invalid_score_defaults_into_band() {
        let mut r = rng();
        for raw in [json!(null), json!(150), json!(-3), json!("high"), json!([90])] {
            let record = normalize_record(&json!({"title": "X", "matchScore": raw}), 0, STAMP, &mut r);
            assert!(
                (DEFAULT_SCORE_MIN..=DEFAULT_SCORE_MAX).contains(&record.match_score),
                "score {} out of band",
                record.match_score
            );
        }
    }

    #[test]
    fn test_scalar_defaults() {
        let record = normalize_record(
            &json!({"title": "  ", "description": "", "growthPotential": null}),
            0,
            STAMP,
            &mut rng(),
        );
        assert_eq!(record.title, DEFAULT_TITLE);
        assert_eq!(record.description, DEFAULT_DESCRIPTION);
        assert_eq!(record.salary_range, DEFAULT_SALARY);
        assert_eq!(record.growth_potential, DEFAULT_GROWTH);
        assert_eq!(record.required_skills, vec!["Not specified"]);
        assert!(record.industries.is_empty());
        assert!(record.learning_resources.is_empty());
    }

    #[test]
    fn test_legacy_salary_and_resources_keys() {
        let record = normalize_record(
            &json!({
                "title": "Lawyer",
                "averageSalary": "₹6-20 LPA",
                "resources": [{"title": "Bar Council of India", "url": "https://www.barcouncilofindia.org"}]
            }),
            0,
            STAMP,
            &mut rng(),
        );
        assert_eq!(record.salary_range, "₹6-20 LPA");
        assert_eq!(
            record.learning_resources,
            vec![LearningResource::Link {
                title: "Bar Council of India".to_string(),
                url: "https://www.barcouncilofindia.org".to_string()
            }]
        );
    }

    #[test]
    fn test_mixed_resources_keep_usable_entries() {
        let record = normalize_record(
            &json!({
                "title": "Analyst",
                "learningResources": ["Coursera", 7, {"title": "NPTEL"}, {"url": "https://x.test"}]
            }),
            0,
            STAMP,
            &mut rng(),
        );
        assert_eq!(
            record.learning_resources,
            vec![
                LearningResource::Name("Coursera".to_string()),
                LearningResource::Name("NPTEL".to_string())
            ]
        );
    }

    #[test]
    fn test_batch_sorted_by_score_descending() {
        let items = vec![
            json!({"title": "Low", "matchScore": 61}),
            json!({"title": "High", "matchScore": 97}),
            json!({"title": "Mid", "matchScore": 80}),
        ];
        let records = normalize_batch(&items, STAMP, &mut rng());
        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["High", "Mid", "Low"]);
    }
}
