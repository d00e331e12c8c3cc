use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Self-reported mood score, 1 (lowest) to 5 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            5 => "Excellent",
            4 => "Good",
            3 => "Okay",
            2 => "Not Great",
            _ => "Difficult",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self.0 {
            5 => "😊",
            4 => "🙂",
            3 => "😐",
            2 => "🙁",
            _ => "😢",
        }
    }

    /// All levels, highest first, the order the picker shows them in.
    pub fn all() -> impl Iterator<Item = MoodLevel> {
        (Self::MIN..=Self::MAX).rev().map(MoodLevel)
    }
}

impl Default for MoodLevel {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<i64> for MoodLevel {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MoodLevel::new(value).ok_or_else(|| format!("mood level {value} is outside 1..=5"))
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub level: MoodLevel,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mindfulness,
    Exercise,
    Social,
    Selfcare,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mindfulness => "mindfulness",
            Category::Exercise => "exercise",
            Category::Social => "social",
            Category::Selfcare => "selfcare",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Transient toast shown after a check-in attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckInRequest {
    pub level: Option<i64>,
    pub note: Option<String>,
}

/// Urlencoded body of the HTML check-in form. An unselected mood posts an
/// empty `level`.
#[derive(Debug, Default, Deserialize)]
pub struct CheckInForm {
    pub level: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub notice: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    pub level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoodOption {
    pub level: MoodLevel,
    pub label: &'static str,
    pub emoji: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub entry: MoodEntry,
    pub current_level: MoodLevel,
    pub checked_in_today: bool,
    pub notification: Notification,
}

#[derive(Debug, Serialize)]
pub struct RejectionResponse {
    pub notification: Notification,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub checked_in_today: bool,
    pub current_level: MoodLevel,
    pub headline: &'static str,
    pub subline: &'static str,
    pub entries_recorded: usize,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub level: MoodLevel,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<MoodEntry>,
}

#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub display_date: String,
    pub level: MoodLevel,
    pub label: String,
    pub tooltip: String,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub sample: bool,
    pub average: f64,
    pub trend: f64,
    pub average_display: String,
    pub trend_display: String,
    pub direction: &'static str,
    pub caption: String,
    pub points: Vec<ChartPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_level_rejects_out_of_range() {
        assert!(MoodLevel::new(0).is_none());
        assert!(MoodLevel::new(6).is_none());
        assert!(MoodLevel::new(-3).is_none());
        assert_eq!(MoodLevel::new(5).map(MoodLevel::value), Some(5));
    }

    #[test]
    fn mood_options_are_highest_first() {
        let labels: Vec<_> = MoodLevel::all().map(MoodLevel::label).collect();
        assert_eq!(labels, ["Excellent", "Good", "Okay", "Not Great", "Difficult"]);
    }

    #[test]
    fn mood_level_serializes_as_number() {
        let level = MoodLevel::new(4).unwrap();
        assert_eq!(serde_json::to_string(&level).unwrap(), "4");
        let parsed: MoodLevel = serde_json::from_str("2").unwrap();
        assert_eq!(parsed.value(), 2);
        assert!(serde_json::from_str::<MoodLevel>("9").is_err());
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Selfcare).unwrap(),
            "\"selfcare\""
        );
    }
}
