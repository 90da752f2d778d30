use crate::config::Config;
use crate::errors::AppError;
use crate::models::{MoodLog, Snapshot};
use crate::mood::Mood;
use crate::presenter::today_view;
use crate::stats::{build_summary, chart_series};
use crate::storage::save_mood;
use chrono::NaiveDate;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::{Mutex, MutexGuard};

/// Shared handler state. The log is the in-memory image of the file at
/// `data_path` and is only replaced after a successful write.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    log: Arc<Mutex<MoodLog>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, log: MoodLog) -> Self {
        Self {
            data_path,
            log: Arc::new(Mutex::new(log)),
        }
    }

    pub fn from_config(config: &Config, log: MoodLog) -> Self {
        Self::new(config.data_path.clone(), log)
    }

    pub async fn log(&self) -> MutexGuard<'_, MoodLog> {
        self.log.lock().await
    }

    /// Saves `mood` for `date` and re-derives the views from the updated log.
    pub async fn record(&self, date: NaiveDate, mood: Mood, note: &str) -> Result<Snapshot, AppError> {
        let mut log = self.log.lock().await;
        save_mood(&self.data_path, &mut log, &date.to_string(), mood, note).await?;
        Ok(snapshot(&log, date))
    }
}

pub fn snapshot(log: &MoodLog, today: NaiveDate) -> Snapshot {
    Snapshot {
        today: today_view(log, today),
        summary: build_summary(log),
        chart: chart_series(log),
    }
}
