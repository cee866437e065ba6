//! Career browsing over a list of recommendations: text search, industry facets,
//! lookup, and similar careers.

use std::collections::HashSet;

use serde::Deserialize;

use crate::recommendation::models::RecommendationRecord;

pub const MAX_SIMILAR: usize = 3;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareerFilter {
    /// Case-insensitive substring over title or description.
    pub q: Option<String>,
    /// Comma-separated; a career matches if it lists any of them.
    pub industry: Option<String>,
}

impl CareerFilter {
    fn industries(&self) -> Vec<&str> {
        self.industry
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

pub fn search_careers<'a>(
    careers: &'a [RecommendationRecord],
    filter: &CareerFilter,
) -> Vec<&'a RecommendationRecord> {
    let term = filter
        .q
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .unwrap_or_default();
    let industries = filter.industries();

    careers
        .iter()
        .filter(|c| {
            term.is_empty()
                || c.title.to_lowercase().contains(&term)
                || c.description.to_lowercase().contains(&term)
        })
        .filter(|c| {
            industries.is_empty()
                || industries
                    .iter()
                    .any(|i| c.industries.iter().any(|ci| ci.as_str() == *i))
        })
        .collect()
}

/// Unique industries across the list, in first-seen order.
pub fn all_industries(careers: &[RecommendationRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut industries = Vec::new();
    for industry in careers.iter().flat_map(|c| &c.industries) {
        if seen.insert(industry.as_str()) {
            industries.push(industry.clone());
        }
    }
    industries
}

pub fn find_career<'a>(
    careers: &'a [RecommendationRecord],
    career_id: &str,
) -> Option<&'a RecommendationRecord> {
    careers.iter().find(|c| c.id == career_id)
}

/// Other careers sharing at least one industry or required skill, at most `MAX_SIMILAR`.
pub fn similar_careers<'a>(
    careers: &'a [RecommendationRecord],
    career: &RecommendationRecord,
) -> Vec<&'a RecommendationRecord> {
    careers
        .iter()
        .filter(|c| c.id != career.id)
        .filter(|c| {
            c.industries.iter().any(|i| career.industries.contains(i))
                || c.required_skills
                    .iter()
                    .any(|s| career.required_skills.contains(s))
        })
        .take(MAX_SIMILAR)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::fallback::mock_recommendations;

    fn titles(careers: &[&RecommendationRecord]) -> Vec<String> {
        careers.iter().map(|c| c.title.clone()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let careers = mock_recommendations();
        assert_eq!(search_careers(&careers, &CareerFilter::default()).len(), 5);
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let careers = mock_recommendations();
        let by_title = CareerFilter {
            q: Some("DATA".to_string()),
            industry: None,
        };
        assert_eq!(titles(&search_careers(&careers, &by_title)), vec!["Data Scientist"]);

        let by_description = CareerFilter {
            q: Some("competitive exams".to_string()),
            industry: None,
        };
        assert_eq!(
            titles(&search_careers(&careers, &by_description)),
            vec!["Government Services"]
        );
    }

    #[test]
    fn test_industry_filter_is_any_of() {
        let careers = mock_recommendations();
        let filter = CareerFilter {
            q: None,
            industry: Some("Startups, Healthcare".to_string()),
        };
        assert_eq!(
            titles(&search_careers(&careers, &filter)),
            vec!["Software Developer", "Data Scientist", "Digital Marketing Specialist"]
        );
    }

    #[test]
    fn test_all_industries_unique_in_order() {
        let industries = all_industries(&mock_recommendations());
        assert_eq!(&industries[..4], &["IT Services", "Product Companies", "Startups", "E-commerce"]);
        let unique: HashSet<_> = industries.iter().collect();
        assert_eq!(unique.len(), industries.len());
    }

    #[test]
    fn test_find_career() {
        let careers = mock_recommendations();
        assert_eq!(
            find_career(&careers, "data-scientist").map(|c| c.title.as_str()),
            Some("Data Scientist")
        );
        assert!(find_career(&careers, "astronaut").is_none());
    }

    #[test]
    fn test_similar_careers_share_industry_or_skill() {
        let careers = mock_recommendations();
        let accountant = find_career(&careers, "chartered-accountant").unwrap();
        let similar = similar_careers(&careers, accountant);
        // Banking is shared with Data Scientist and Government Services.
        assert_eq!(titles(&similar), vec!["Data Scientist", "Government Services"]);
        assert!(similar.iter().all(|c| c.id != accountant.id));
    }

    #[test]
    fn test_similar_careers_capped() {
        let careers = mock_recommendations();
        let developer = find_career(&careers, "software-engineer").unwrap();
        assert!(similar_careers(&careers, developer).len() <= MAX_SIMILAR);
    }
}
