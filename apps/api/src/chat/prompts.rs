// All LLM prompt constants for the Chat module.

/// Question-answering prompt template.
/// Replace: {persona}, {india_context}, {question}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"{persona}
Answer the following career-related question concisely (within 150 words) but helpfully:

"{question}"

{india_context}
Include specific details about Indian educational pathways, job opportunities, or career growth when applicable.
If the question is not related to careers or education, politely redirect the conversation to career topics.
Keep the response conversational in tone."#;

pub const ENGINEERING_ANSWER: &str = "Engineering, especially in IT/Computer Science, remains one of India's strongest career paths. Top institutions like IITs and NITs offer excellent programs. The average starting salary ranges from ₹4-12 LPA, with experienced professionals earning ₹20-50+ LPA. Consider specializing in emerging areas like AI, data science, or cloud computing for better prospects.";

pub const MEDICINE_ANSWER: &str = "Medicine is a prestigious career in India requiring NEET for MBBS admission (5.5 years), followed by optional specialization. Government college fees are affordable (₹25,000-1L/year) while private colleges charge ₹5-25L/year. Doctors earn ₹8-15L initially, increasing significantly with specialization and experience. The profession offers job security but demands commitment to continuous learning.";

pub const MBA_ANSWER: &str = "MBA remains popular in India, with top institutes like IIMs offering excellent ROI. Admission requires CAT/XAT/GMAT scores. Fees range from ₹10-25L for 2 years at premier institutes. Graduates earn ₹10-30L initially, with specializations in Finance, Marketing, and Operations being traditional strongholds, while Product Management, Data Analytics, and Digital Marketing are emerging areas with strong growth potential.";

pub const GENERIC_APOLOGY: &str = "I'm sorry, I couldn't process your request at the moment. Please try asking about popular career paths in India like Engineering, Medicine, MBA, Law, Civil Services, or Data Science. Or you can ask about specific qualifications, salary expectations, or growth opportunities in various fields.";

/// Keyword groups checked in order; the first group with a substring hit wins.
pub const CANNED_ANSWERS: &[(&[&str], &str)] = &[
    (&["engineering", "computer", "software"], ENGINEERING_ANSWER),
    (&["medicine", "doctor", "medical"], MEDICINE_ANSWER),
    (&["mba", "business", "management"], MBA_ANSWER),
];
