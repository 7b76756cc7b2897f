use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Human-readable band for an ATS score.
///
/// | score  | label     |
/// |--------|-----------|
/// | 0–40   | Poor      |
/// | 41–60  | Fair      |
/// | 61–80  | Good      |
/// | 81–90  | Very Good |
/// | 91–100 | Excellent |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    Poor,
    Fair,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Excellent,
}

/// Every label, lowest band first.
pub const SCORE_BANDS: &[(u8, u8, ScoreLabel)] = &[
    (0, 40, ScoreLabel::Poor),
    (41, 60, ScoreLabel::Fair),
    (61, 80, ScoreLabel::Good),
    (81, 90, ScoreLabel::VeryGood),
    (91, 100, ScoreLabel::Excellent),
];

impl ScoreLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=40 => ScoreLabel::Poor,
            41..=60 => ScoreLabel::Fair,
            61..=80 => ScoreLabel::Good,
            81..=90 => ScoreLabel::VeryGood,
            _ => ScoreLabel::Excellent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Poor => "Poor",
            ScoreLabel::Fair => "Fair",
            ScoreLabel::Good => "Good",
            ScoreLabel::VeryGood => "Very Good",
            ScoreLabel::Excellent => "Excellent",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        SCORE_BANDS
            .iter()
            .map(|(_, _, l)| *l)
            .find(|l| l.as_str() == label)
    }
}

/// The validated analysis contract. Field names serialize in camelCase
/// because the browser client and the persisted `analysis` column use them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub score: u8,
    pub score_label: ScoreLabel,
    pub strengths: Vec<String>,
    pub content_improvements: Vec<String>,
    pub format_improvements: Vec<String>,
    pub keywords_found: Vec<String>,
    pub keywords_missing: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Body returned by `POST /api/resume/analyze`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub analysis: ResumeAnalysis,
    pub using_fallback: bool,
    pub resume_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_boundaries() {
        assert_eq!(ScoreLabel::from_score(0), ScoreLabel::Poor);
        assert_eq!(ScoreLabel::from_score(40), ScoreLabel::Poor);
        assert_eq!(ScoreLabel::from_score(41), ScoreLabel::Fair);
        assert_eq!(ScoreLabel::from_score(60), ScoreLabel::Fair);
        assert_eq!(ScoreLabel::from_score(61), ScoreLabel::Good);
        assert_eq!(ScoreLabel::from_score(80), ScoreLabel::Good);
        assert_eq!(ScoreLabel::from_score(81), ScoreLabel::VeryGood);
        assert_eq!(ScoreLabel::from_score(90), ScoreLabel::VeryGood);
        assert_eq!(ScoreLabel::from_score(91), ScoreLabel::Excellent);
        assert_eq!(ScoreLabel::from_score(100), ScoreLabel::Excellent);
    }

    #[test]
    fn test_every_score_matches_exactly_one_band() {
        for score in 0..=100u8 {
            let matching: Vec<_> = SCORE_BANDS
                .iter()
                .filter(|(lo, hi, _)| (*lo..=*hi).contains(&score))
                .collect();
            assert_eq!(matching.len(), 1, "score {score} matched {matching:?}");
            assert_eq!(matching[0].2, ScoreLabel::from_score(score));
        }
    }

    #[test]
    fn test_very_good_serializes_with_space() {
        let json = serde_json::to_string(&ScoreLabel::VeryGood).unwrap();
        assert_eq!(json, r#""Very Good""#);
        assert_eq!(ScoreLabel::parse("Very Good"), Some(ScoreLabel::VeryGood));
        assert_eq!(ScoreLabel::parse("very good"), None);
    }

    #[test]
    fn test_response_flattens_analysis() {
        let response = AnalysisResponse {
            analysis: ResumeAnalysis {
                score: 72,
                score_label: ScoreLabel::Good,
                strengths: vec!["Clear layout".to_string()],
                content_improvements: vec![],
                format_improvements: vec![],
                keywords_found: vec![],
                keywords_missing: vec![],
                summary: None,
            },
            using_fallback: false,
            resume_id: Uuid::nil(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["score"], 72);
        assert_eq!(value["scoreLabel"], "Good");
        assert_eq!(value["usingFallback"], false);
        assert!(value.get("summary").is_none());
        assert!(value.get("analysis").is_none());
    }
}
