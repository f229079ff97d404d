//! History of served predictions.
//!
//! Alerts live in memory. When a file path is configured the log is loaded
//! from it on startup and rewritten after every recorded prediction, so the
//! history survives restarts.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use outbreak_risk_models::PredictionResult;
use outbreak_risk_server_models::ApiAlert;

/// Errors reading or writing the alert log file.
#[derive(Debug, thiserror::Error)]
pub enum AlertLogError {
    /// The file could not be read or written.
    #[error("Alert log I/O error at {}: {source}", path.display())]
    Io {
        /// Path of the alert log file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The file is not a JSON array of alerts.
    #[error("Alert log at {} is not valid JSON: {source}", path.display())]
    Json {
        /// Path of the alert log file.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
}

struct AlertLogInner {
    next_id: u64,
    alerts: VecDeque<ApiAlert>,
}

/// Bounded, newest-first log of predictions, shared across workers.
pub struct AlertLog {
    limit: usize,
    path: Option<PathBuf>,
    inner: Mutex<AlertLogInner>,
}

impl AlertLog {
    /// Creates an empty in-memory log that keeps at most `limit` alerts.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self::from_alerts(limit, None, Vec::new())
    }

    /// Creates a log backed by the JSON file at `path`.
    ///
    /// A missing file starts an empty history. A file that cannot be read
    /// or parsed is logged and also starts an empty history; it is
    /// overwritten by the next recorded prediction.
    #[must_use]
    pub fn with_file(limit: usize, path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let alerts = match load(&path) {
            Ok(alerts) => {
                log::info!("Loaded {} alert(s) from {}", alerts.len(), path.display());
                alerts
            }
            Err(e) => {
                log::warn!("{e}, starting with an empty alert history");
                Vec::new()
            }
        };

        Self::from_alerts(limit, Some(path), alerts)
    }

    fn from_alerts(limit: usize, path: Option<PathBuf>, mut alerts: Vec<ApiAlert>) -> Self {
        alerts.sort_by(|a, b| b.id.cmp(&a.id));
        alerts.truncate(limit);
        let next_id = alerts.first().map_or(1, |a| a.id + 1);

        Self {
            limit,
            path,
            inner: Mutex::new(AlertLogInner {
                next_id,
                alerts: alerts.into(),
            }),
        }
    }

    // Every update leaves the deque consistent, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, AlertLogInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records `result`, evicting the oldest alert if the log is full.
    ///
    /// With a backing file the whole history is rewritten while the lock is
    /// held. A failed write is logged and the alert is still kept in memory.
    pub fn record(&self, result: &PredictionResult) -> ApiAlert {
        let mut inner = self.lock();

        let alert = ApiAlert::from_result(inner.next_id, result);
        inner.next_id += 1;

        inner.alerts.push_front(alert.clone());
        inner.alerts.truncate(self.limit);

        if let Some(path) = &self.path
            && let Err(e) = save(path, &inner.alerts)
        {
            log::warn!("{e}");
        }

        alert
    }

    /// Returns retained alerts, newest first.
    #[must_use]
    pub fn recent(&self) -> Vec<ApiAlert> {
        self.lock().alerts.iter().cloned().collect()
    }

    /// Number of retained alerts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().alerts.len()
    }

    /// Whether no alerts have been retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().alerts.is_empty()
    }

    /// The backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn load(path: &Path) -> Result<Vec<ApiAlert>, AlertLogError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(AlertLogError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| AlertLogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn save(path: &Path, alerts: &VecDeque<ApiAlert>) -> Result<(), AlertLogError> {
    let json = serde_json::to_vec_pretty(alerts).map_err(|source| AlertLogError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    // Write a sibling file first so a crash never leaves a truncated log.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json)
        .and_then(|()| std::fs::rename(&tmp, path))
        .map_err(|source| AlertLogError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use outbreak_risk_models::PredictionInput;

    use super::*;

    fn result(district: &str) -> PredictionResult {
        outbreak_risk::predict_outbreak(&PredictionInput {
            district: district.to_string(),
            rainfall_dev: 10.0,
            temperature: 30.0,
            case_growth: 12.0,
            baseline: 40.0,
        })
    }

    #[test]
    fn alerts_are_newest_first_with_sequential_ids() {
        let log = AlertLog::new(10);
        log.record(&result("Pune"));
        log.record(&result("Thane"));
        log.record(&result("Solapur"));

        let alerts = log.recent();
        assert_eq!(
            alerts.iter().map(|a| a.district.as_str()).collect::<Vec<_>>(),
            vec!["Solapur", "Thane", "Pune"]
        );
        assert_eq!(
            alerts.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn oldest_alerts_are_evicted_past_the_limit() {
        let log = AlertLog::new(2);
        assert!(log.is_empty());

        for district in ["Pune", "Mumbai", "Nagpur"] {
            log.record(&result(district));
        }

        assert_eq!(log.len(), 2);
        let alerts = log.recent();
        assert_eq!(alerts[0].district, "Nagpur");
        assert_eq!(alerts[1].district, "Mumbai");
        assert_eq!(alerts[0].id, 3, "IDs keep counting after eviction");
    }

    #[test]
    fn alert_mirrors_prediction() {
        let log = AlertLog::new(5);
        let prediction = result("Kolhapur");
        let alert = log.record(&prediction);

        assert_eq!(alert.score, prediction.calibrated_score);
        assert_eq!(alert.category, prediction.category);
        assert_eq!(alert.confidence, prediction.confidence);
        assert_eq!(alert.timestamp, prediction.timestamp);
    }

    fn temp_log_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "outbreak_risk_alerts_{}_{name}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn file_backed_log_survives_a_restart() {
        let path = temp_log_path("restart");

        let log = AlertLog::with_file(10, &path);
        assert!(log.is_empty(), "missing file starts empty");
        log.record(&result("Pune"));
        log.record(&result("Thane"));
        assert_eq!(log.path(), Some(path.as_path()));
        drop(log);

        let reopened = AlertLog::with_file(10, &path);
        let alerts = reopened.recent();
        assert_eq!(
            alerts.iter().map(|a| a.district.as_str()).collect::<Vec<_>>(),
            vec!["Thane", "Pune"]
        );

        let next = reopened.record(&result("Solapur"));
        assert_eq!(next.id, 3, "IDs continue after the stored history");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn reloaded_history_is_trimmed_to_the_limit() {
        let path = temp_log_path("trim");

        let log = AlertLog::with_file(10, &path);
        for district in ["Pune", "Mumbai", "Nagpur", "Nashik"] {
            log.record(&result(district));
        }
        drop(log);

        let smaller = AlertLog::with_file(2, &path);
        let alerts = smaller.recent();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].district, "Nashik");
        assert_eq!(alerts[1].district, "Nagpur");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn corrupt_file_starts_empty_and_is_replaced() {
        let path = temp_log_path("corrupt");
        std::fs::write(&path, "not json").unwrap();

        let log = AlertLog::with_file(5, &path);
        assert!(log.is_empty());
        log.record(&result("Kolhapur"));

        let stored: Vec<ApiAlert> =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].district, "Kolhapur");
        assert_eq!(stored[0].id, 1);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn in_memory_log_has_no_path() {
        assert!(AlertLog::new(3).path().is_none());
    }
}
