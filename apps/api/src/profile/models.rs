use serde::{Deserialize, Serialize};

/// Identity and education.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicDetails {
    pub name: String,
    pub age: Option<u32>,
    pub education_level: String,
    pub field_of_study: String,
    pub year_of_completion: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectMark {
    pub subject: String,
    pub mark: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamScore {
    pub exam: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AcademicPerformance {
    pub subject_marks: Vec<SubjectMark>,
    pub exam_scores: Vec<ExamScore>,
    pub favorite_subjects: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterestsAndSkills {
    pub hobbies: Vec<String>,
    pub key_skills: Vec<String>,
    pub extracurriculars: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CareerPreferences {
    pub preferred_career_path: String,
    pub preferred_industries: Vec<String>,
    pub government_job_interest: bool,
    pub entrepreneurship_interest: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialCondition {
    pub family_income: String,
    pub scholarship_eligibility: bool,
    pub loan_willingness: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FuturePlans {
    pub higher_education_plans: bool,
    pub salary_expectations: String,
    pub location_preferences: Vec<String>,
}

/// The full assessment answered by a user. Every group defaults when absent
/// so partially filled forms still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub basic_details: BasicDetails,
    pub academic_performance: AcademicPerformance,
    pub interests_and_skills: InterestsAndSkills,
    pub career_preferences: CareerPreferences,
    pub financial_condition: FinancialCondition,
    pub future_plans: FuturePlans,
}

/// A partial profile update: only the groups present are replaced.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub basic_details: Option<BasicDetails>,
    pub academic_performance: Option<AcademicPerformance>,
    pub interests_and_skills: Option<InterestsAndSkills>,
    pub career_preferences: Option<CareerPreferences>,
    pub financial_condition: Option<FinancialCondition>,
    pub future_plans: Option<FuturePlans>,
}

impl UserProfile {
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(v) = update.basic_details {
            self.basic_details = v;
        }
        if let Some(v) = update.academic_performance {
            self.academic_performance = v;
        }
        if let Some(v) = update.interests_and_skills {
            self.interests_and_skills = v;
        }
        if let Some(v) = update.career_preferences {
            self.career_preferences = v;
        }
        if let Some(v) = update.financial_condition {
            self.financial_condition = v;
        }
        if let Some(v) = update.future_plans {
            self.future_plans = v;
        }
    }
}
