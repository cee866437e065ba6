//! Profile Formatter: renders a `UserProfile` as the text block embedded in generation prompts.
//!
//! Every field is always rendered. Empty values are spelled out with a placeholder
//! so the model sees the complete profile shape.

use std::fmt::Write;

use crate::profile::models::UserProfile;

pub const NOT_PROVIDED: &str = "Not provided";
pub const NONE_PROVIDED: &str = "None provided";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NONE_SPECIFIED: &str = "None specified";
/// Stand-ins for a mark whose subject or exam name was left blank.
pub const UNNAMED_SUBJECT: &str = "Unnamed subject";
pub const UNNAMED_EXAM: &str = "Unnamed exam";

/// Section headings, in output order.
pub const SECTION_TITLES: [&str; 6] = [
    "Basic Details",
    "Academic Performance",
    "Interests & Skills",
    "Career Preferences",
    "Financial Condition",
    "Future Plans",
];

/// Formats the profile as six labelled sections. Pure and deterministic.
pub fn format_profile(profile: &UserProfile) -> String {
    let basic = &profile.basic_details;
    let academics = &profile.academic_performance;
    let interests = &profile.interests_and_skills;
    let prefs = &profile.career_preferences;
    let finances = &profile.financial_condition;
    let plans = &profile.future_plans;

    let subject_marks: Vec<String> = academics
        .subject_marks
        .iter()
        .map(|s| format!("{}: {}%", text_or(&s.subject, UNNAMED_SUBJECT), s.mark))
        .collect();
    let exam_scores: Vec<String> = academics
        .exam_scores
        .iter()
        .map(|e| format!("{}: {}%", text_or(&e.exam, UNNAMED_EXAM), e.score))
        .collect();

    let sections: [Vec<(&str, String)>; 6] = [
        vec![
            ("Name", text_or(&basic.name, NOT_PROVIDED)),
            ("Age", number_or(basic.age, NOT_PROVIDED)),
            ("Education Level", text_or(&basic.education_level, NOT_PROVIDED)),
            ("Field of Study", text_or(&basic.field_of_study, NOT_PROVIDED)),
            (
                "Year of Completion",
                number_or(basic.year_of_completion, NOT_PROVIDED),
            ),
        ],
        vec![
            ("Subject Marks", list_or(&subject_marks, NONE_PROVIDED)),
            ("Exam Scores", list_or(&exam_scores, NONE_PROVIDED)),
            (
                "Favorite Subjects",
                list_or(&academics.favorite_subjects, NONE_PROVIDED),
            ),
        ],
        vec![
            ("Hobbies", list_or(&interests.hobbies, NONE_PROVIDED)),
            ("Key Skills", list_or(&interests.key_skills, NONE_PROVIDED)),
            (
                "Extracurricular Activities",
                list_or(&interests.extracurriculars, NONE_PROVIDED),
            ),
        ],
        vec![
            (
                "Preferred Career Path",
                text_or(&prefs.preferred_career_path, NOT_SPECIFIED),
            ),
            (
                "Preferred Industries",
                list_or(&prefs.preferred_industries, NONE_SPECIFIED),
            ),
            (
                "Interest in Government Jobs",
                yes_no(prefs.government_job_interest),
            ),
            (
                "Interest in Entrepreneurship",
                yes_no(prefs.entrepreneurship_interest),
            ),
        ],
        vec![
            ("Family Income", text_or(&finances.family_income, NOT_PROVIDED)),
            (
                "Scholarship Eligibility",
                yes_no(finances.scholarship_eligibility),
            ),
            (
                "Willingness to Take Educational Loans",
                yes_no(finances.loan_willingness),
            ),
        ],
        vec![
            (
                "Plans for Higher Education",
                yes_no(plans.higher_education_plans),
            ),
            (
                "Salary Expectations",
                text_or(&plans.salary_expectations, NOT_SPECIFIED),
            ),
            (
                "Location Preferences",
                list_or(&plans.location_preferences, NONE_SPECIFIED),
            ),
        ],
    ];

    let mut out = String::from("User profile:\n");
    for (title, fields) in SECTION_TITLES.iter().zip(sections.iter()) {
        // Writing to a String cannot fail.
        let _ = write!(out, "\n### {title}\n");
        for (label, value) in fields {
            let _ = writeln!(out, "- {label}: {value}");
        }
    }
    out
}

fn text_or(value: &str, placeholder: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn number_or(value: Option<u32>, placeholder: &str) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

fn list_or(values: &[String], placeholder: &str) -> String {
    let items: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join(", ")
    }
}

fn yes_no(flag: bool) -> String {
    let answer = if flag { "Yes" } else { "No" };
    answer.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::{ExamScore, SubjectMark, UserProfile};

    fn filled_profile() -> UserProfile {
        let mut p = UserProfile::default();
        p.basic_details.name = "Priya Sharma".to_string();
        p.basic_details.age = Some(21);
        p.basic_details.education_level = "B.Tech".to_string();
        p.basic_details.field_of_study = "Computer Science".to_string();
        p.basic_details.year_of_completion = Some(2025);
        p.academic_performance.subject_marks = vec![
            SubjectMark {
                subject: "Mathematics".to_string(),
                mark: 92.0,
            },
            SubjectMark {
                subject: "Physics".to_string(),
                mark: 85.5,
            },
        ];
        p.interests_and_skills.key_skills = vec!["Python".to_string(), "SQL".to_string()];
        p.career_preferences.preferred_industries = vec!["IT".to_string()];
        p.career_preferences.government_job_interest = true;
        p.financial_condition.family_income = "₹5-10 Lakhs".to_string();
        p.future_plans.location_preferences = vec!["Bengaluru".to_string()];
        p
    }

    fn headings(text: &str) -> Vec<&str> {
        text.lines()
            .filter_map(|l| l.strip_prefix("### "))
            .collect()
    }

    #[test]
    fn test_six_sections_in_fixed_order() {
        let text = format_profile(&filled_profile());
        assert_eq!(headings(&text), SECTION_TITLES.to_vec());

        let empty = format_profile(&UserProfile::default());
        assert_eq!(headings(&empty), SECTION_TITLES.to_vec());
    }

    #[test]
    fn test_empty_profile_renders_placeholders_never_blank() {
        let text = format_profile(&UserProfile::default());
        for line in text.lines().filter(|l| l.starts_with("- ")) {
            let (_, value) = line.split_once(": ").expect("label separator");
            assert!(!value.trim().is_empty(), "blank value in line {line:?}");
        }
        assert!(text.contains("- Name: Not provided"));
        assert!(text.contains("- Age: Not provided"));
        assert!(text.contains("- Subject Marks: None provided"));
        assert!(text.contains("- Preferred Career Path: Not specified"));
        assert!(text.contains("- Preferred Industries: None specified"));
        assert!(text.contains("- Location Preferences: None specified"));
        assert!(text.contains("- Interest in Government Jobs: No"));
    }

    #[test]
    fn test_filled_values_rendered() {
        let text = format_profile(&filled_profile());
        assert!(text.contains("- Name: Priya Sharma"));
        assert!(text.contains("- Age: 21"));
        assert!(text.contains("- Subject Marks: Mathematics: 92%, Physics: 85.5%"));
        assert!(text.contains("- Key Skills: Python, SQL"));
        assert!(text.contains("- Interest in Government Jobs: Yes"));
        assert!(text.contains("- Family Income: ₹5-10 Lakhs"));
    }

    #[test]
    fn test_every_field_label_present() {
        let text = format_profile(&UserProfile::default());
        let field_lines = text.lines().filter(|l| l.starts_with("- ")).count();
        assert_eq!(field_lines, 21);
    }

    #[test]
    fn test_whitespace_only_values_use_placeholder() {
        let mut p = UserProfile::default();
        p.basic_details.name = "   ".to_string();
        p.interests_and_skills.hobbies = vec![" ".to_string(), String::new()];
        let text = format_profile(&p);
        assert!(text.contains("- Name: Not provided"));
        assert!(text.contains("- Hobbies: None provided"));
    }

    #[test]
    fn test_marks_with_blank_names_keep_their_value() {
        let mut p = UserProfile::default();
        p.academic_performance.subject_marks = vec![
            SubjectMark {
                subject: "  ".to_string(),
                mark: 77.0,
            },
            SubjectMark {
                subject: "Chemistry".to_string(),
                mark: 81.0,
            },
        ];
        p.academic_performance.exam_scores = vec![ExamScore {
            exam: String::new(),
            score: 64.0,
        }];
        let text = format_profile(&p);
        assert!(text.contains("- Subject Marks: Unnamed subject: 77%, Chemistry: 81%"));
        assert!(text.contains("- Exam Scores: Unnamed exam: 64%"));
    }

    #[test]
    fn test_formatter_is_idempotent() {
        let profile = filled_profile();
        assert_eq!(format_profile(&profile), format_profile(&profile));
    }
}
