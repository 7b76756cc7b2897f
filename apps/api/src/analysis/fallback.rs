//! Heuristic fallback scorer, used whenever a model-produced analysis
//! cannot be obtained or parsed.
//!
//! Deterministic, never fails, and never claims "Excellent".

use crate::analysis::keywords::JobRole;
use crate::models::analysis::{ResumeAnalysis, ScoreLabel};

pub const FALLBACK_SUMMARY: &str = "This resume has a good foundation but could benefit from more specific achievements and tailored content for the target role.";

const BASE_SCORE: i32 = 65;
const MAX_FALLBACK_SCORE: i32 = 90;

const STRENGTHS: &[&str] = &[
    "Resume is well-structured with clear sections",
    "Experience is presented in a chronological format",
    "Skills are clearly highlighted",
    "Education section is properly formatted",
    "Contact information is complete and easy to find",
];

const CONTENT_IMPROVEMENTS: &[&str] = &[
    "Add more measurable achievements with specific metrics",
    "Tailor your skills section more specifically to the job role",
    "Include relevant certifications or professional development",
    "Add a brief professional summary at the beginning",
    "Enhance descriptions of your most relevant experience",
];

const FORMAT_IMPROVEMENTS: &[&str] = &[
    "Use bullet points consistently for better readability",
    "Ensure consistent formatting of dates and locations",
    "Consider using a cleaner template with more white space",
    "Make sure all sections have clear headings",
    "Keep the resume to 1-2 pages maximum",
];

/// Surface statistics the heuristic score is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub word_count: usize,
    pub has_bullets: bool,
    pub has_digits: bool,
    pub paragraph_count: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        Self {
            word_count: text.split_whitespace().count(),
            has_bullets: text.contains('•') || text.contains('-'),
            has_digits: text.chars().any(|c| c.is_ascii_digit()),
            paragraph_count: count_paragraphs(text),
        }
    }
}

/// Counts non-empty blocks separated by one or more blank lines.
fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_block = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            in_block = false;
        } else if !in_block {
            count += 1;
            in_block = true;
        }
    }
    count
}

pub fn heuristic_score(stats: &TextStats) -> u8 {
    let mut score = BASE_SCORE;
    if stats.word_count > 300 {
        score += 5;
    }
    if stats.has_bullets {
        score += 5;
    }
    if stats.has_digits {
        score += 5;
    }
    if stats.paragraph_count > 5 {
        score += 5;
    }
    if stats.word_count > 600 {
        score -= 5;
    }
    score.clamp(0, MAX_FALLBACK_SCORE) as u8
}

/// Builds the complete fallback analysis for `resume_text`.
pub fn fallback_analysis(resume_text: &str, role: JobRole) -> ResumeAnalysis {
    let stats = TextStats::from_text(resume_text);
    let score = heuristic_score(&stats);
    let keywords = role.keywords();

    ResumeAnalysis {
        score,
        score_label: ScoreLabel::from_score(score),
        strengths: to_owned(STRENGTHS),
        content_improvements: to_owned(CONTENT_IMPROVEMENTS),
        format_improvements: to_owned(FORMAT_IMPROVEMENTS),
        keywords_found: keywords.found_owned(),
        keywords_missing: keywords.missing_owned(),
        summary: Some(FALLBACK_SUMMARY.to_string()),
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    /// Six paragraphs of `total_words` words, with a bullet and a digit.
    fn long_resume(total_words: usize) -> String {
        let per_block = total_words / 6;
        let mut blocks: Vec<String> = (0..6).map(|_| words(per_block)).collect();
        // Replace one word in each of two blocks so the word count is unchanged.
        blocks[0] = format!("• {}", words(per_block - 1));
        blocks[1] = format!("2024 {}", words(per_block - 1));
        blocks.join("\n\n")
    }

    #[test]
    fn test_stats_on_plain_text() {
        let stats = TextStats::from_text("Jane Doe\nSoftware Engineer");
        assert_eq!(stats.word_count, 4);
        assert!(!stats.has_bullets);
        assert!(!stats.has_digits);
        assert_eq!(stats.paragraph_count, 1);
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        assert_eq!(count_paragraphs("a\n\nb\n \nc"), 3);
        assert_eq!(count_paragraphs("a\n\n\n\nb"), 2);
        assert_eq!(count_paragraphs("\n\na\nb\n\n"), 1);
        assert_eq!(count_paragraphs(""), 0);
    }

    #[test]
    fn test_hyphen_counts_as_bullet() {
        assert!(TextStats::from_text("- Built things").has_bullets);
        assert!(TextStats::from_text("full-stack").has_bullets);
    }

    #[test]
    fn test_base_score_for_minimal_text() {
        let analysis = fallback_analysis("Jane Doe", JobRole::General);
        assert_eq!(analysis.score, 65);
        assert_eq!(analysis.score_label, ScoreLabel::Good);
    }

    #[test]
    fn test_long_resume_with_all_signals() {
        let text = long_resume(702);
        let stats = TextStats::from_text(&text);
        assert_eq!(stats.word_count, 702);
        assert!(stats.has_bullets);
        assert!(stats.has_digits);
        assert_eq!(stats.paragraph_count, 6);

        // 65 + 5 (>300) + 5 (bullets) + 5 (digits) + 5 (paragraphs) - 5 (>600)
        assert_eq!(heuristic_score(&stats), 80);
        assert_eq!(
            fallback_analysis(&text, JobRole::General).score_label,
            ScoreLabel::Good
        );
    }

    #[test]
    fn test_best_case_reaches_very_good_but_not_excellent() {
        let stats = TextStats {
            word_count: 450,
            has_bullets: true,
            has_digits: true,
            paragraph_count: 8,
        };
        assert_eq!(heuristic_score(&stats), 85);
        assert_eq!(ScoreLabel::from_score(85), ScoreLabel::VeryGood);
    }

    #[test]
    fn test_score_always_within_fallback_range() {
        for word_count in [0, 150, 301, 599, 601, 5_000] {
            for has_bullets in [false, true] {
                for has_digits in [false, true] {
                    for paragraph_count in [0, 5, 6, 40] {
                        let score = heuristic_score(&TextStats {
                            word_count,
                            has_bullets,
                            has_digits,
                            paragraph_count,
                        });
                        assert!(score <= 90, "score {score} exceeds the fallback cap");
                    }
                }
            }
        }
    }

    #[test]
    fn test_lists_are_fixed_and_non_empty() {
        let analysis = fallback_analysis("anything", JobRole::Design);
        assert_eq!(analysis.strengths.len(), 5);
        assert_eq!(analysis.content_improvements.len(), 5);
        assert_eq!(analysis.format_improvements.len(), 5);
        assert!(!analysis.keywords_found.is_empty());
        assert!(!analysis.keywords_missing.is_empty());
        assert_eq!(analysis.summary.as_deref(), Some(FALLBACK_SUMMARY));
    }

    #[test]
    fn test_frontend_role_keywords() {
        let analysis = fallback_analysis("anything", JobRole::Frontend);
        assert!(analysis.keywords_found.contains(&"React".to_string()));
        assert!(analysis.keywords_missing.contains(&"TypeScript".to_string()));
    }

    #[test]
    fn test_unrecognized_role_matches_general() {
        let general = fallback_analysis("text", JobRole::General);
        let unknown = fallback_analysis("text", JobRole::parse("zookeeper"));
        assert_eq!(unknown.keywords_found, general.keywords_found);
        assert_eq!(unknown.keywords_missing, general.keywords_missing);
    }

    #[test]
    fn test_advice_is_independent_of_score() {
        let short = fallback_analysis("a", JobRole::General);
        let long = fallback_analysis(&long_resume(400), JobRole::General);
        assert_ne!(short.score, long.score);
        assert_eq!(short.strengths, long.strengths);
        assert_eq!(short.format_improvements, long.format_improvements);
    }
}
