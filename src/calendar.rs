use crate::cursor::CalendarCursor;
use crate::models::{CalendarView, DayCell, MoodLog};
use chrono::{Datelike, NaiveDate};

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Builds the Sunday-first grid for `cursor`, padded with outside-month days
/// to whole weeks. Returns `None` when the month is not a real calendar month.
pub fn build_calendar(cursor: CalendarCursor, log: &MoodLog, today: NaiveDate) -> Option<CalendarView> {
    let first = cursor.first_day()?;
    let next_first = cursor.next()?.first_day()?;
    let num_days = (next_first - first).num_days() as u32;
    let prev_last_day = first.pred_opt()?.day();
    let start = first.weekday().num_days_from_sunday();

    let mut cells = Vec::with_capacity(42);
    for offset in (0..start).rev() {
        cells.push(DayCell::outside(prev_last_day - offset));
    }

    for day in 1..=num_days {
        let date = date_key(cursor.year, cursor.month + 1, day);
        cells.push(day_cell(day, date, log, today));
    }

    let trailing = (7 - cells.len() % 7) % 7;
    for day in 1..=trailing as u32 {
        cells.push(DayCell::outside(day));
    }

    Some(CalendarView {
        year: cursor.year,
        month: cursor.month,
        label: month_label(cursor)?,
        weekdays: WEEKDAYS.iter().map(|day| day.to_string()).collect(),
        cells,
    })
}

pub fn month_label(cursor: CalendarCursor) -> Option<String> {
    let name = MONTH_NAMES.get(cursor.month as usize)?;
    Some(format!("{name} {}", cursor.year))
}

pub fn tooltip(label: &str, note: &str) -> String {
    let note = if note.is_empty() { "No note" } else { note };
    format!("{label} - Note: {note}")
}

fn day_cell(day: u32, date: String, log: &MoodLog, today: NaiveDate) -> DayCell {
    let is_today = date == today.format("%Y-%m-%d").to_string();
    let mut cell = DayCell {
        day,
        in_month: true,
        date: None,
        today: is_today,
        mood: None,
        css_class: None,
        tooltip: None,
    };

    if let Some(entry) = log.get(&date) {
        if let Some(mood) = entry.known_mood() {
            cell.mood = Some(mood);
            cell.css_class = Some(mood.css_class().to_string());
            cell.tooltip = Some(tooltip(&mood.label(), &entry.note));
        }
    }

    cell.date = Some(date);
    cell
}

fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}
