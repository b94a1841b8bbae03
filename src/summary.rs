//! Productivity score and KPI figures shown in the sidebar and on the dashboard.

use serde::{Deserialize, Serialize};

/// Scores at or above this get the celebration indicator.
pub const CELEBRATION_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    /// Seconds.
    pub total_focus_time: u64,
    pub sessions_completed: u32,
    /// 0 to 5.
    pub avg_mood: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub productivity_score: u8,
    #[serde(default)]
    pub kpis: Option<KpiSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreIndicator {
    Celebrate,
    Encourage,
}

impl ScoreIndicator {
    pub fn for_score(score: u8) -> Self {
        if score >= CELEBRATION_THRESHOLD {
            ScoreIndicator::Celebrate
        } else {
            ScoreIndicator::Encourage
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ScoreIndicator::Celebrate => "\u{1F389}",
            ScoreIndicator::Encourage => "\u{1F4AA}",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreIndicator::Celebrate => "Great work",
            ScoreIndicator::Encourage => "Keep going",
        }
    }
}

pub fn format_score(score: u8) -> String {
    format!("{}%", score)
}

/// Shown until the score has loaded, instead of a made-up number.
pub const PENDING_SCORE: &str = "\u{2013}%";

pub fn format_score_or_pending(score: Option<u8>) -> String {
    score.map(format_score).unwrap_or_else(|| PENDING_SCORE.to_string())
}

/// Whole hours and leftover whole minutes; seconds are dropped, never rounded.
pub fn format_focus_time(seconds: u64) -> String {
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

pub fn format_mood(avg_mood: f64) -> String {
    format!("{}/5", avg_mood)
}

impl KpiSummary {
    /// Label and formatted value for each figure, in display order.
    pub fn rows(&self) -> [(&'static str, String); 3] {
        [
            ("Focus Time", format_focus_time(self.total_focus_time)),
            ("Sessions", self.sessions_completed.to_string()),
            ("Avg. Mood", format_mood(self.avg_mood)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_threshold_over_full_range() {
        for score in 0..=100u8 {
            let expected = if score >= 80 {
                ScoreIndicator::Celebrate
            } else {
                ScoreIndicator::Encourage
            };
            assert_eq!(ScoreIndicator::for_score(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_indicator_emoji_differs() {
        assert_ne!(
            ScoreIndicator::Celebrate.emoji(),
            ScoreIndicator::Encourage.emoji()
        );
    }

    #[test]
    fn test_format_score_appends_percent() {
        assert_eq!(format_score(0), "0%");
        assert_eq!(format_score(87), "87%");
        assert_eq!(format_score(100), "100%");
    }

    #[test]
    fn test_missing_score_shows_placeholder() {
        assert_eq!(format_score_or_pending(None), "\u{2013}%");
        assert_eq!(format_score_or_pending(Some(0)), "0%");
        assert_eq!(format_score_or_pending(Some(80)), "80%");
    }

    #[test]
    fn test_focus_time_truncates() {
        assert_eq!(format_focus_time(3725), "1h 2m");
        assert_eq!(format_focus_time(0), "0h 0m");
        assert_eq!(format_focus_time(3599), "0h 59m");
        assert_eq!(format_focus_time(59), "0h 0m");
        assert_eq!(format_focus_time(3600), "1h 0m");
        assert_eq!(format_focus_time(90_061), "25h 1m");
    }

    #[test]
    fn test_mood_formatting() {
        assert_eq!(format_mood(4.0), "4/5");
        assert_eq!(format_mood(3.5), "3.5/5");
    }

    #[test]
    fn test_rows_cover_all_three_figures() {
        let kpis = KpiSummary {
            total_focus_time: 7320,
            sessions_completed: 12,
            avg_mood: 4.2,
        };
        let rows = kpis.rows();
        assert_eq!(rows[0], ("Focus Time", "2h 2m".to_string()));
        assert_eq!(rows[1], ("Sessions", "12".to_string()));
        assert_eq!(rows[2], ("Avg. Mood", "4.2/5".to_string()));
    }

    #[test]
    fn test_summary_without_kpis_parses() {
        let summary: DashboardSummary =
            serde_json::from_str(r#"{"productivityScore": 64}"#).expect("should parse");
        assert_eq!(summary.productivity_score, 64);
        assert!(summary.kpis.is_none());
    }

    #[test]
    fn test_summary_with_kpis_parses() {
        let json = r#"{
            "productivityScore": 91,
            "kpis": {"totalFocusTime": 3725, "sessionsCompleted": 3, "avgMood": 4}
        }"#;
        let summary: DashboardSummary = serde_json::from_str(json).expect("should parse");
        let kpis = summary.kpis.expect("kpis present");
        assert_eq!(kpis.total_focus_time, 3725);
        assert_eq!(kpis.sessions_completed, 3);
        assert_eq!(kpis.avg_mood, 4.0);
    }
}
