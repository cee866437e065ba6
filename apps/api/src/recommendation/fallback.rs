//! Static fallback recommendations, served whenever live generation cannot produce
//! a usable result and as placeholder content before any request is made.

use crate::recommendation::models::{LearningResource, RecommendationRecord};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn resources(items: &[&str]) -> Vec<LearningResource> {
    items
        .iter()
        .map(|s| LearningResource::Name(s.to_string()))
        .collect()
}

/// The fixed list of five example recommendations, highest match first.
pub fn mock_recommendations() -> Vec<RecommendationRecord> {
    vec![
        RecommendationRecord {
            id: "software-engineer".to_string(),
            title: "Software Developer".to_string(),
            description: "Software development is a high-growth field in India with excellent \
                salary potential and diverse opportunities across startups, tech giants, and \
                IT service companies."
                .to_string(),
            match_score: 92,
            required_skills: strings(&[
                "Coding",
                "Problem Solving",
                "Data Structures",
                "Algorithms",
                "Software Design",
            ]),
            required_education: strings(&[
                "B.Tech/B.E in Computer Science",
                "MCA",
                "Other technical degree with coding skills",
            ]),
            salary_range: "₹5-40 LPA".to_string(),
            growth_potential: "Excellent growth with paths to tech lead, architect, or management \
                roles. Remote work opportunities."
                .to_string(),
            industries: strings(&["IT Services", "Product Companies", "Startups", "E-commerce"]),
            learning_resources: resources(&[
                "FreeCodeCamp",
                "Coursera Programming Courses",
                "GeeksForGeeks",
                "DSA practice on LeetCode",
            ]),
        },
        RecommendationRecord {
            id: "data-scientist".to_string(),
            title: "Data Scientist".to_string(),
            description: "Data Science combines statistics, programming, and domain knowledge to \
                extract insights from data, a rapidly growing field in India with applications \
                across industries."
                .to_string(),
            match_score: 88,
            required_skills: strings(&[
                "Statistics",
                "Python/R Programming",
                "Machine Learning",
                "Data Analysis",
                "SQL",
            ]),
            required_education: strings(&[
                "Degree in Statistics/Math/CS/Engineering",
                "Certifications in Data Science",
            ]),
            salary_range: "₹6-30 LPA".to_string(),
            growth_potential: "High demand across sectors with paths to specialization in ML \
                engineering, AI research, or analytics leadership."
                .to_string(),
            industries: strings(&["IT", "Banking", "E-commerce", "Healthcare", "Consulting"]),
            learning_resources: resources(&[
                "Andrew Ng's Machine Learning Course",
                "Kaggle Competitions",
                "IIT-M Data Science Program",
            ]),
        },
        RecommendationRecord {
            id: "government-services".to_string(),
            title: "Government Services".to_string(),
            description: "Government jobs in India offer stability, good benefits, and the \
                opportunity to make a social impact, with various entry points through \
                competitive exams."
                .to_string(),
            match_score: 85,
            required_skills: strings(&[
                "Analytical Skills",
                "General Knowledge",
                "Time Management",
                "Communication",
            ]),
            required_education: strings(&[
                "Bachelor's Degree (Minimum)",
                "Specific requirements vary by service",
            ]),
            salary_range: "₹5-15 LPA (plus benefits)".to_string(),
            growth_potential: "Structured promotion path based on seniority and performance. \
                Long-term job security."
                .to_string(),
            industries: strings(&[
                "Civil Services",
                "Banking",
                "Defense",
                "Public Sector Undertakings",
            ]),
            learning_resources: resources(&[
                "UPSC preparation resources",
                "Previous year question papers",
                "Online coaching platforms",
            ]),
        },
        RecommendationRecord {
            id: "chartered-accountant".to_string(),
            title: "Chartered Accountant".to_string(),
            description: "Chartered Accountancy is a respected profession in India with strong \
                demand in all business sectors, offering financial expertise and consulting \
                opportunities."
                .to_string(),
            match_score: 79,
            required_skills: strings(&[
                "Accounting",
                "Taxation Knowledge",
                "Financial Analysis",
                "Attention to Detail",
            ]),
            required_education: strings(&[
                "Commerce Background",
                "CA Certification from ICAI (3 levels)",
            ]),
            salary_range: "₹7-25 LPA".to_string(),
            growth_potential: "Opportunities in corporate finance, independent practice, \
                consulting, or financial leadership roles."
                .to_string(),
            industries: strings(&[
                "Accounting Firms",
                "Banking",
                "Corporate Finance",
                "Consulting",
            ]),
            learning_resources: resources(&[
                "ICAI Study Materials",
                "CA Coaching Institutes",
                "Online CA Forums",
            ]),
        },
        RecommendationRecord {
            id: "digital-marketing".to_string(),
            title: "Digital Marketing Specialist".to_string(),
            description: "Digital marketing is booming in India with the digital transformation \
                of businesses, offering creative opportunities with technical aspects."
                .to_string(),
            match_score: 76,
            required_skills: strings(&[
                "SEO/SEM",
                "Social Media Marketing",
                "Content Creation",
                "Analytics",
                "Creative Thinking",
            ]),
            required_education: strings(&[
                "Any Bachelor's Degree",
                "Digital Marketing Certifications",
            ]),
            salary_range: "₹3-18 LPA".to_string(),
            growth_potential: "Growth into specialized roles (SEO, content, social) or marketing \
                management. Good for entrepreneurial individuals."
                .to_string(),
            industries: strings(&[
                "Marketing Agencies",
                "E-commerce",
                "Startups",
                "Media Companies",
            ]),
            learning_resources: resources(&[
                "Google Digital Garage",
                "HubSpot Academy",
                "Digital Marketing Courses on Udemy/Coursera",
            ]),
        },
    ]
}
