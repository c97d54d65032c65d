use crate::models::StayRecord;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_dataset_path() -> PathBuf {
    if let Ok(path) = env::var("DATASET_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/hospital.json")
}

pub async fn load_dataset(path: &Path) -> Vec<StayRecord> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                error!("failed to parse dataset file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read dataset file: {err}");
            Vec::new()
        }
    }
}
