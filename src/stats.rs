use crate::models::{ChartBar, MoodLog, Summary};
use crate::mood::{capitalize, score_for, Mood};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

pub fn build_summary(log: &MoodLog) -> Summary {
    let moods: Vec<&str> = log
        .iter()
        .map(|(_, entry)| entry.mood.as_str())
        .filter(|mood| !mood.is_empty())
        .collect();

    if moods.is_empty() {
        return Summary::empty();
    }

    let total: u32 = moods.iter().map(|mood| score_for(mood)).sum();

    Summary {
        common_mood: most_common_mood(&moods).map(capitalize).unwrap_or_else(|| "-".to_string()),
        average_score: format_average(total, moods.len()),
        entry_count: moods.len(),
        best_streak: best_streak(log),
        most_positive_day: most_positive_day(log).unwrap_or_else(|| "-".to_string()),
    }
}

/// One bar per mood, in canonical order. Unrecognized tags are not counted.
pub fn chart_series(log: &MoodLog) -> Vec<ChartBar> {
    let mut counts = [0u64; Mood::ALL.len()];
    for (_, entry) in log.iter() {
        if let Some(mood) = entry.known_mood() {
            counts[rank(mood.as_str())] += 1;
        }
    }

    Mood::ALL
        .iter()
        .zip(counts)
        .map(|(mood, count)| ChartBar {
            label: mood.as_str().to_string(),
            count,
            color: mood.chart_color().to_string(),
        })
        .collect()
}

/// Highest count wins; ties go to the earliest mood in `Mood::ALL`, with
/// unrecognized tags ranked after every known mood and among themselves by text.
fn most_common_mood<'a>(moods: &[&'a str]) -> Option<&'a str> {
    let mut counts: BTreeMap<(usize, &'a str), u64> = BTreeMap::new();
    for mood in moods {
        *counts.entry((rank(mood), mood)).or_default() += 1;
    }

    let mut best: Option<(&'a str, u64)> = None;
    for ((_, mood), count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((mood, count));
        }
    }
    best.map(|(mood, _)| mood)
}

fn rank(tag: &str) -> usize {
    Mood::ALL
        .iter()
        .position(|mood| mood.as_str() == tag)
        .unwrap_or(Mood::ALL.len())
}

fn format_average(total: u32, count: usize) -> String {
    format!("{:.2}", f64::from(total) / count as f64)
}

/// Longest run of day-after-day entries sharing the same tag.
fn best_streak(log: &MoodLog) -> usize {
    let mut best = 1;
    let mut current = 1;
    let mut prev: Option<(Option<NaiveDate>, &str)> = None;

    for (date, entry) in log.iter() {
        let date = parse_date(date);
        if let Some((prev_date, prev_mood)) = prev {
            let consecutive = matches!(
                (prev_date, date),
                (Some(a), Some(b)) if b - a == Duration::days(1)
            );
            if consecutive && prev_mood == entry.mood {
                current += 1;
            } else {
                current = 1;
            }
            best = best.max(current);
        }
        prev = Some((date, entry.mood.as_str()));
    }

    best
}

fn most_positive_day(log: &MoodLog) -> Option<String> {
    let mut max_score = -1i64;
    let mut max_date = None;
    for (date, entry) in log.iter() {
        let score = i64::from(score_for(&entry.mood));
        if score > max_score {
            max_score = score;
            max_date = Some(date.clone());
        }
    }
    max_date
}

fn parse_date(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}
