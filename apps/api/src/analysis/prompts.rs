// Analysis prompt templates.
// The score table here must stay identical to `ScoreLabel::from_score`.

use crate::analysis::keywords::JobRole;

pub const ANALYSIS_SYSTEM: &str = "\
You are an expert resume analyst and career advisor specializing in helping job seekers \
optimize their resumes for ATS (Applicant Tracking Systems) and improve their chances of \
getting interviews.";

pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Please analyze the following resume text and provide detailed feedback in JSON format.
{role_instruction}

Resume Text:
"""
{resume_text}
"""

Evaluate the resume for ATS compatibility, strengths, and areas for improvement. Then provide a detailed analysis in the following JSON format with these exact fields:

{
  "score": <integer between 0-100 representing ATS compatibility>,
  "scoreLabel": <string describing the score: "Poor", "Fair", "Good", "Very Good", or "Excellent">,
  "strengths": [<array of strings highlighting the resume's strengths>],
  "contentImprovements": [<array of strings with content improvement suggestions>],
  "formatImprovements": [<array of strings with formatting improvement suggestions>],
  "keywordsFound": [<array of job-relevant keywords found in the resume>],
  "keywordsMissing": [<array of job-relevant keywords that should be considered for inclusion>],
  "summary": <optional brief overall assessment>
}

For the score, use these ranges:
- 0-40: "Poor"
- 41-60: "Fair"
- 61-80: "Good"
- 81-90: "Very Good"
- 91-100: "Excellent"

For strengths, find 3-5 positive aspects of the resume.
For improvements, suggest 3-5 specific content changes and 3-5 formatting changes.
For keywords, list relevant industry terms found in the resume and suggest 5-10 additional relevant terms.

Only return a single valid JSON object with these exact fields. Do not include explanations outside of the JSON object."#;

const GENERAL_INSTRUCTION: &str = "Please provide a general analysis of this resume.";

/// Renders the analysis prompt. `General` (or no role) asks for a general evaluation.
pub fn build_analysis_prompt(resume_text: &str, role: Option<JobRole>) -> String {
    let role_instruction = match role {
        Some(role) if role != JobRole::General => format!(
            "The candidate is applying for {} positions. Please tailor your analysis to this role.",
            role.display_name()
        ),
        _ => GENERAL_INSTRUCTION.to_string(),
    };

    // Resume text goes in last so placeholders inside it are left alone.
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{role_instruction}", &role_instruction)
        .replace("{resume_text}", resume_text)
}
