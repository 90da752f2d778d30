use crate::calendar::build_calendar;
use crate::cursor::CalendarCursor;
use crate::errors::AppError;
use crate::models::{
    CalendarQuery, CalendarView, ChartBar, MoodRequest, NoteForm, Snapshot, Summary, TodayView,
};
use crate::mood::Mood;
use crate::presenter::today_view;
use crate::state::AppState;
use crate::stats::{build_summary, chart_series};
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{Local, NaiveDate};

pub async fn index() -> Html<String> {
    Html(render_index(&today().to_string()))
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodayView> {
    let log = state.log().await;
    Json(today_view(&log, today()))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarView>, AppError> {
    let cursor = resolve_cursor(&query)?;
    let log = state.log().await;
    build_calendar(cursor, &log, today())
        .map(Json)
        .ok_or_else(|| AppError::unsupported_month(cursor))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<Summary> {
    let log = state.log().await;
    Json(build_summary(&log))
}

pub async fn get_chart(State(state): State<AppState>) -> Json<Vec<ChartBar>> {
    let log = state.log().await;
    Json(chart_series(&log))
}

pub async fn save(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<Snapshot>, AppError> {
    let mood: Mood = payload.mood.trim().parse()?;
    let snapshot = state.record(today(), mood, &payload.note).await?;
    Ok(Json(snapshot))
}

pub async fn save_form(
    State(state): State<AppState>,
    Path(mood): Path<String>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, AppError> {
    let mood: Mood = mood.parse()?;
    state.record(today(), mood, &form.note).await?;
    Ok(Redirect::to("/"))
}

fn resolve_cursor(query: &CalendarQuery) -> Result<CalendarCursor, AppError> {
    let current = CalendarCursor::current();
    let month = query.month.unwrap_or(current.month);
    if month > 11 {
        return Err(AppError::bad_request("month must be between 0 and 11"));
    }
    let cursor = CalendarCursor::new(query.year.unwrap_or(current.year), month);

    let moved = match query.nav.as_deref().map(str::trim) {
        None | Some("") => Some(cursor),
        Some("prev") => cursor.prev(),
        Some("next") => cursor.next(),
        Some(_) => return Err(AppError::bad_request("nav must be 'prev' or 'next'")),
    };
    moved.ok_or_else(|| AppError::unsupported_month(cursor))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
