use crate::models::{Category, MoodLevel, Recommendation};

const FALLBACK_LEVEL: u8 = 3;

const EXCELLENT: [Recommendation; 2] = [
    Recommendation {
        id: "1",
        title: "Gratitude Journaling",
        description: "Write down three things you're grateful for today",
        category: Category::Mindfulness,
        duration: "5 mins",
    },
    Recommendation {
        id: "2",
        title: "Share Your Joy",
        description: "Connect with a friend and share something positive",
        category: Category::Social,
        duration: "10 mins",
    },
];

const GOOD: [Recommendation; 2] = [
    Recommendation {
        id: "3",
        title: "Mindful Breathing",
        description: "Take 10 deep breaths and focus on the present moment",
        category: Category::Mindfulness,
        duration: "5 mins",
    },
    Recommendation {
        id: "4",
        title: "Light Exercise",
        description: "Take a short walk or do some gentle stretching",
        category: Category::Exercise,
        duration: "15 mins",
    },
];

const OKAY: [Recommendation; 2] = [
    Recommendation {
        id: "5",
        title: "Progressive Relaxation",
        description: "Practice muscle relaxation techniques",
        category: Category::Mindfulness,
        duration: "10 mins",
    },
    Recommendation {
        id: "6",
        title: "Self-Care Activity",
        description: "Do something nurturing for yourself",
        category: Category::Selfcare,
        duration: "20 mins",
    },
];

const NOT_GREAT: [Recommendation; 2] = [
    Recommendation {
        id: "7",
        title: "Guided Meditation",
        description: "Follow a calming meditation session",
        category: Category::Mindfulness,
        duration: "15 mins",
    },
    Recommendation {
        id: "8",
        title: "Reach Out",
        description: "Connect with someone you trust",
        category: Category::Social,
        duration: "30 mins",
    },
];

const DIFFICULT: [Recommendation; 2] = [
    Recommendation {
        id: "9",
        title: "Professional Support",
        description: "Consider speaking with a counselor or therapist",
        category: Category::Selfcare,
        duration: "As needed",
    },
    Recommendation {
        id: "10",
        title: "Crisis Resources",
        description: "Access immediate support if needed",
        category: Category::Selfcare,
        duration: "Immediate",
    },
];

/// Recommendations for `level`. Anything outside 1..=5 gets the level 3 pair.
pub fn select(level: i64) -> &'static [Recommendation] {
    match level {
        5 => &EXCELLENT,
        4 => &GOOD,
        3 => &OKAY,
        2 => &NOT_GREAT,
        1 => &DIFFICULT,
        _ => &OKAY,
    }
}

/// Like [`select`], for untyped input such as a query string value.
pub fn select_raw(raw: &str) -> &'static [Recommendation] {
    select(resolve_raw(raw).value().into())
}

pub fn select_level(level: MoodLevel) -> &'static [Recommendation] {
    select(level.value().into())
}

/// The level whose pair `select_raw` returns.
pub fn resolve_raw(raw: &str) -> MoodLevel {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(MoodLevel::new)
        .unwrap_or_else(fallback_level)
}

fn fallback_level() -> MoodLevel {
    MoodLevel::new(FALLBACK_LEVEL.into()).unwrap_or_default()
}
