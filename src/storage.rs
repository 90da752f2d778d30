use crate::errors::AppError;
use crate::models::{MoodEntry, MoodLog};
use crate::mood::Mood;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// Reads the whole log. A missing, unreadable or malformed file yields an
/// empty log.
pub async fn load_log(path: &Path) -> MoodLog {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(log) => log,
            Err(err) => {
                error!("failed to parse mood log {}: {err}", path.display());
                MoodLog::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => MoodLog::default(),
        Err(err) => {
            error!("failed to read mood log {}: {err}", path.display());
            MoodLog::default()
        }
    }
}

pub async fn persist_log(path: &Path, log: &MoodLog) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(log)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// Inserts or overwrites the entry for `date` and rewrites the whole file.
/// `log` only changes once the file has been written.
pub async fn save_mood(
    path: &Path,
    log: &mut MoodLog,
    date: &str,
    mood: Mood,
    note: &str,
) -> Result<MoodEntry, AppError> {
    let entry = MoodEntry::new(mood, note.trim());
    let mut updated = log.clone();
    updated.insert(date, entry.clone());
    persist_log(path, &updated).await?;
    *log = updated;
    info!(date, mood = mood.as_str(), entries = log.len(), "saved mood");
    Ok(entry)
}
