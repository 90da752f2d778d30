use crate::models::{MoodLog, TodayView};
use crate::mood::{Mood, FALLBACK_QUOTE};
use chrono::NaiveDate;

pub const NO_NOTE_TODAY: &str = "No note added for today.";

pub fn quote_for(tag: &str) -> &'static str {
    tag.parse::<Mood>().map(Mood::quote).unwrap_or(FALLBACK_QUOTE)
}

pub fn note_for_today(log: &MoodLog, today: NaiveDate) -> String {
    match log.get(&date_key(today)) {
        Some(entry) if !entry.note.is_empty() => format!("Note: {}", entry.note),
        _ => NO_NOTE_TODAY.to_string(),
    }
}

pub fn today_view(log: &MoodLog, today: NaiveDate) -> TodayView {
    let date = date_key(today);
    let entry = log.get(&date).cloned();
    let quote = entry
        .as_ref()
        .filter(|entry| !entry.mood.is_empty())
        .map(|entry| quote_for(&entry.mood).to_string());

    TodayView {
        note_text: note_for_today(log, today),
        date,
        entry,
        quote,
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
