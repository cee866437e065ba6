// All LLM prompt constants for the Recommendation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Number of recommendations requested per call.
pub const RECOMMENDATION_COUNT: usize = 5;

/// Recommendation prompt template.
/// Replace: {persona}, {india_context}, {count}, {profile}, {json_only}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"{persona}

Based on the following user profile, provide {count} personalized career recommendations that are relevant and viable in the Indian job market.

{profile}

For each career recommendation, include:
1. Career title - job roles that exist in India
2. Brief description - explain why this matches the user's profile
3. Required skills - skills valued in the Indian market
4. Required education/qualifications - Indian degrees, exams, and certifications
5. Salary range - realistic figures in Indian Rupees (₹)
6. Growth potential - specific to the Indian job market
7. Industries - sectors that hire for this role
8. Learning resources - Indian platforms, universities, and courses
9. Match score - an integer between 60 and 100 for how well this career matches the profile

{india_context}

Consider opportunities in government sectors, PSUs, private companies, and entrepreneurship.
Consider the user's location preferences, family income, and willingness to take loans.

Return a JSON ARRAY with this EXACT schema:
[
  {
    "id": "unique-kebab-case-id",
    "title": "Career Title",
    "description": "Why this career fits the user's profile",
    "matchScore": 87,
    "requiredSkills": ["skill1", "skill2"],
    "requiredEducation": ["education1", "education2"],
    "salaryRange": "₹X-Y LPA",
    "growthPotential": "Growth description",
    "industries": ["industry1", "industry2"],
    "learningResources": ["resource1", "resource2"]
  }
]

{json_only}"#;
