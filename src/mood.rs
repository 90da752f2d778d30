use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const FALLBACK_QUOTE: &str = "Stay mindful and take care.";
pub const FALLBACK_CHART_COLOR: &str = "#ccc";

/// The closed set of moods a day can be tagged with.
///
/// `Mood::ALL` is the canonical order used for the chart and for breaking
/// ties between equally frequent moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Calm,
    Excited,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Anxious,
        Mood::Calm,
        Mood::Excited,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
            Mood::Calm => "calm",
            Mood::Excited => "excited",
        }
    }

    pub fn score(self) -> u32 {
        match self {
            Mood::Happy | Mood::Excited => 5,
            Mood::Calm => 4,
            Mood::Anxious => 2,
            Mood::Sad => 1,
            Mood::Angry => 0,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Mood::Happy => "mood-happy",
            Mood::Sad => "mood-sad",
            Mood::Angry => "mood-angry",
            Mood::Anxious => "mood-anxious",
            Mood::Calm => "mood-calm",
            Mood::Excited => "mood-excited",
        }
    }

    pub fn chart_color(self) -> &'static str {
        match self {
            Mood::Happy => "#FFD700",
            Mood::Sad => "#87CEEB",
            Mood::Angry => "#FF6347",
            Mood::Anxious => "#9370DB",
            Mood::Calm => "#90EE90",
            Mood::Excited => "#FFA500",
        }
    }

    pub fn quote(self) -> &'static str {
        match self {
            Mood::Happy => "Keep smiling, it's contagious!",
            Mood::Sad => "It's okay to feel down. Better days are coming.",
            Mood::Angry => "Take a deep breath. You're stronger than your anger.",
            Mood::Anxious => "This too shall pass.",
            Mood::Calm => "Peace begins with a smile.",
            Mood::Excited => "Stay pumped! The world is yours.",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Anxious => "😰",
            Mood::Calm => "😌",
            Mood::Excited => "🤩",
        }
    }

    /// Display label, e.g. `Happy`.
    pub fn label(self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMood(pub String);

impl fmt::Display for UnknownMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mood '{}'", self.0)
    }
}

impl std::error::Error for UnknownMood {}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == value)
            .ok_or_else(|| UnknownMood(value.to_string()))
    }
}

/// Score for a raw stored tag; unrecognized tags score 0.
pub fn score_for(tag: &str) -> u32 {
    tag.parse::<Mood>().map(Mood::score).unwrap_or(0)
}

pub fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
