use crate::models::{ChartPoint, MoodEntry, MoodLevel, TrendsResponse};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSummary {
    pub average: f64,
    pub trend: f64,
}

/// Mean level and last-minus-first delta. `None` for an empty history.
pub fn summarize(entries: &[MoodEntry]) -> Option<TrendSummary> {
    let first = entries.first()?;
    let last = entries.last()?;

    let total: u32 = entries.iter().map(|entry| u32::from(entry.level.value())).sum();
    let average = f64::from(total) / entries.len() as f64;
    let trend = f64::from(last.level.value()) - f64::from(first.level.value());

    Some(TrendSummary { average, trend })
}

/// Trend card and chart data. An empty history is shown as the sample series.
pub fn build_trends(history: &[MoodEntry]) -> TrendsResponse {
    let sample;
    let (data, is_sample) = if history.is_empty() {
        sample = sample_history();
        (sample.as_slice(), true)
    } else {
        (history, false)
    };

    let summary = summarize(data).unwrap_or(TrendSummary {
        average: 0.0,
        trend: 0.0,
    });

    TrendsResponse {
        sample: is_sample,
        average: summary.average,
        trend: summary.trend,
        average_display: format!("{:.1}", summary.average),
        trend_display: format_trend(summary.trend),
        direction: if summary.trend >= 0.0 { "up" } else { "down" },
        caption: tracking_caption(data.len()),
        points: data.iter().map(chart_point).collect(),
    }
}

pub fn sample_history() -> Vec<MoodEntry> {
    const SAMPLE: [(u32, i64); 7] = [(1, 4), (2, 3), (3, 5), (4, 4), (5, 2), (6, 3), (7, 4)];

    SAMPLE
        .iter()
        .filter_map(|&(day, level)| {
            let date = NaiveDate::from_ymd_opt(2024, 1, day)?;
            let level = MoodLevel::new(level)?;
            Some(MoodEntry {
                date,
                level,
                label: level.label().to_string(),
            })
        })
        .collect()
}

pub fn format_trend(trend: f64) -> String {
    if trend > 0.0 {
        format!("+{trend:.1}")
    } else {
        format!("{trend:.1}")
    }
}

fn tracking_caption(days: usize) -> String {
    if days == 1 {
        "Tracking 1 day".to_string()
    } else {
        format!("Tracking {days} days")
    }
}

fn chart_point(entry: &MoodEntry) -> ChartPoint {
    ChartPoint {
        date: entry.date,
        display_date: entry.date.format("%b %-d").to_string(),
        level: entry.level,
        label: entry.label.clone(),
        tooltip: format!("Mood: {} ({}/5)", entry.label, entry.level.value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u32, level: i64) -> MoodEntry {
        let level = MoodLevel::new(level).unwrap();
        MoodEntry {
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            level,
            label: level.label().to_string(),
        }
    }

    #[test]
    fn summarize_empty_is_guarded() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn summarize_single_entry_has_flat_trend() {
        let summary = summarize(&[entry(1, 4)]).expect("summary");
        assert_eq!(summary.average, 4.0);
        assert_eq!(summary.trend, 0.0);
    }

    #[test]
    fn summarize_uses_first_and_last_entries() {
        let entries = [entry(1, 4), entry(2, 2), entry(3, 5)];
        let summary = summarize(&entries).expect("summary");
        assert!((summary.average - 3.67).abs() < 0.01);
        assert_eq!(summary.trend, 1.0);
    }

    #[test]
    fn summarize_reports_downward_trend() {
        let summary = summarize(&[entry(1, 5), entry(2, 1)]).expect("summary");
        assert_eq!(summary.trend, -4.0);
        assert_eq!(format_trend(summary.trend), "-4.0");
    }

    #[test]
    fn trends_fall_back_to_sample_series() {
        let trends = build_trends(&[]);
        assert!(trends.sample);
        assert_eq!(trends.points.len(), 7);
        assert_eq!(trends.caption, "Tracking 7 days");
        assert_eq!(trends.trend_display, "0.0");
        assert_eq!(trends.average_display, "3.6");
        assert_eq!(trends.points[0].display_date, "Jan 1");
    }

    #[test]
    fn trends_format_recorded_history() {
        let trends = build_trends(&[entry(5, 2), entry(6, 4)]);
        assert!(!trends.sample);
        assert_eq!(trends.average_display, "3.0");
        assert_eq!(trends.trend_display, "+2.0");
        assert_eq!(trends.direction, "up");
        assert_eq!(trends.points[1].tooltip, "Mood: Good (4/5)");
        assert_eq!(trends.points[0].display_date, "Mar 5");
    }

    #[test]
    fn caption_is_singular_for_one_day() {
        let trends = build_trends(&[entry(1, 3)]);
        assert_eq!(trends.caption, "Tracking 1 day");
    }
}
