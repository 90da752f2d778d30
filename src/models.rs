use crate::mood::Mood;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MoodEntry {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub note: String,
}

impl MoodEntry {
    pub fn new(mood: Mood, note: impl Into<String>) -> Self {
        Self {
            mood: mood.as_str().to_string(),
            note: note.into(),
        }
    }

    /// The recognized mood, if the stored tag is one of the fixed set.
    pub fn known_mood(&self) -> Option<Mood> {
        self.mood.parse().ok()
    }
}

/// Date (`yyyy-mm-dd`) to entry. Serialized as the bare JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct MoodLog {
    pub days: BTreeMap<String, MoodEntry>,
}

impl MoodLog {
    pub fn get(&self, date: &str) -> Option<&MoodEntry> {
        self.days.get(date)
    }

    pub fn insert(&mut self, date: impl Into<String>, entry: MoodEntry) {
        self.days.insert(date.into(), entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MoodEntry)> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub mood: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct NoteForm {
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub nav: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayView {
    pub date: String,
    pub entry: Option<MoodEntry>,
    pub note_text: String,
    pub quote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: u32,
    pub in_month: bool,
    pub date: Option<String>,
    pub today: bool,
    pub mood: Option<Mood>,
    pub css_class: Option<String>,
    pub tooltip: Option<String>,
}

impl DayCell {
    pub fn outside(day: u32) -> Self {
        Self {
            day,
            in_month: false,
            date: None,
            today: false,
            mood: None,
            css_class: None,
            tooltip: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarView {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub weekdays: Vec<String>,
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub common_mood: String,
    pub average_score: String,
    pub entry_count: usize,
    pub best_streak: usize,
    pub most_positive_day: String,
}

impl Summary {
    pub fn empty() -> Self {
        Self {
            common_mood: "-".to_string(),
            average_score: "-".to_string(),
            entry_count: 0,
            best_streak: 0,
            most_positive_day: "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub count: u64,
    pub color: String,
}

/// Everything the page re-derives after a mood is saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub today: TodayView,
    pub summary: Summary,
    pub chart: Vec<ChartBar>,
}
