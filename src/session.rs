use crate::models::{MoodEntry, MoodLevel, Notification, NotificationVariant};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

/// One submission from the check-in form.
#[derive(Debug, Clone)]
pub struct CheckIn {
    pub level: Option<i64>,
    pub note: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckInError {
    #[error("no mood level selected")]
    MissingLevel,
    #[error("mood level {0} is outside 1..=5")]
    OutOfRange(i64),
}

impl CheckInError {
    pub fn notification(&self) -> Notification {
        let description = match self {
            CheckInError::MissingLevel => "Choose how you're feeling today".to_string(),
            CheckInError::OutOfRange(level) => {
                format!("{level} is not a mood level; choose one from 1 to 5")
            }
        };
        Notification {
            title: "Please select a mood".to_string(),
            description,
            variant: NotificationVariant::Destructive,
        }
    }
}

/// In-memory state behind the dashboard.
///
/// `checked_in_today` only switches what the page shows. It is never reset
/// when the calendar day changes.
#[derive(Debug, Default)]
pub struct Dashboard {
    history: Vec<MoodEntry>,
    current_level: MoodLevel,
    checked_in_today: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[MoodEntry] {
        &self.history
    }

    pub fn current_level(&self) -> MoodLevel {
        self.current_level
    }

    pub fn checked_in_today(&self) -> bool {
        self.checked_in_today
    }

    pub fn submit(&mut self, check_in: CheckIn) -> Result<MoodEntry, CheckInError> {
        let raw = match check_in.level {
            Some(raw) => raw,
            None => {
                warn!("check-in rejected: no mood selected");
                return Err(CheckInError::MissingLevel);
            }
        };
        let Some(level) = MoodLevel::new(raw) else {
            warn!(level = raw, "check-in rejected: level out of range");
            return Err(CheckInError::OutOfRange(raw));
        };

        let note_len = check_in
            .note
            .as_deref()
            .map(str::trim)
            .map_or(0, str::len);
        info!(level = level.value(), note_len, "mood recorded");

        let entry = MoodEntry {
            date: check_in.timestamp.date_naive(),
            level,
            label: level.label().to_string(),
        };
        self.history.push(entry.clone());
        self.current_level = level;
        self.checked_in_today = true;

        Ok(entry)
    }

    pub fn headline(&self) -> &'static str {
        if self.checked_in_today {
            "You've checked in today 🎉"
        } else {
            "Ready for your daily check-in?"
        }
    }

    pub fn subline(&self) -> &'static str {
        if self.checked_in_today {
            "Great job staying consistent with your wellness journey!"
        } else {
            "Take a moment to reflect on how you're feeling today."
        }
    }
}

pub fn recorded_notification() -> Notification {
    Notification {
        title: "Mood recorded!".to_string(),
        description: "Thank you for checking in today".to_string(),
        variant: NotificationVariant::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::{select, select_level};
    use chrono::TimeZone;

    fn check_in(level: Option<i64>, day: u32) -> CheckIn {
        CheckIn {
            level,
            note: None,
            timestamp: Utc.with_ymd_and_hms(2026, 4, day, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn new_dashboard_starts_at_okay() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.current_level().value(), 3);
        assert!(!dashboard.checked_in_today());
        assert!(dashboard.history().is_empty());
        assert_eq!(dashboard.headline(), "Ready for your daily check-in?");
    }

    #[test]
    fn missing_level_is_rejected_without_recording() {
        let mut dashboard = Dashboard::new();
        let err = dashboard.submit(check_in(None, 1)).unwrap_err();
        assert_eq!(err, CheckInError::MissingLevel);
        assert_eq!(err.notification().title, "Please select a mood");
        assert_eq!(err.notification().variant, NotificationVariant::Destructive);
        assert!(dashboard.history().is_empty());
        assert!(!dashboard.checked_in_today());
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        let mut dashboard = Dashboard::new();
        assert_eq!(
            dashboard.submit(check_in(Some(7), 1)).unwrap_err(),
            CheckInError::OutOfRange(7)
        );
        assert!(dashboard.history().is_empty());
    }

    #[test]
    fn accepted_check_in_updates_level_and_flag() {
        let mut dashboard = Dashboard::new();
        let entry = dashboard.submit(check_in(Some(5), 2)).expect("accepted");
        assert_eq!(entry.level.value(), 5);
        assert_eq!(entry.label, "Excellent");
        assert_eq!(entry.date.to_string(), "2026-04-02");
        assert_eq!(dashboard.history().len(), 1);
        assert_eq!(dashboard.history().last(), Some(&entry));
        assert_eq!(dashboard.current_level().value(), 5);
        assert!(dashboard.checked_in_today());
        assert_eq!(select_level(dashboard.current_level()), select(5));
        assert_eq!(dashboard.headline(), "You've checked in today 🎉");
    }

    #[test]
    fn rejection_after_acceptance_keeps_state() {
        let mut dashboard = Dashboard::new();
        dashboard.submit(check_in(Some(2), 1)).expect("accepted");
        assert!(dashboard.submit(check_in(None, 2)).is_err());
        assert_eq!(dashboard.history().len(), 1);
        assert_eq!(dashboard.current_level().value(), 2);
    }

    #[test]
    fn history_keeps_submission_order() {
        let mut dashboard = Dashboard::new();
        for (day, level) in [(1, 3), (2, 1), (3, 4), (4, 2)] {
            dashboard.submit(check_in(Some(level), day)).expect("accepted");
        }
        let levels: Vec<_> = dashboard.history().iter().map(|e| e.level.value()).collect();
        assert_eq!(levels, [3, 1, 4, 2]);
        assert_eq!(dashboard.current_level().value(), 2);
    }
}
