use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::{debug, warn};

use super::fallback;
use super::protocol::{ForecastSource, PredictorResponse, SolarForecast};
use crate::cache::{cache_key, TtlCache};
use crate::config::PredictorConfig;
use crate::error::PredictorError;

/// Anything that can produce a solar-generation forecast for a date range:
/// the subprocess model runner below, an in-process model, or a remote
/// service. Implementations never fail hard; they degrade to the synthetic
/// fallback and tag the result accordingly.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SolarPredictor: Send + Sync {
    async fn forecast(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
        use_cache: bool,
    ) -> SolarForecast;
}

/// Runs the trained model in an external, independently-versioned process.
/// The model itself is unsuitable for inline reimplementation; this side
/// only owns discovery, the timeout race, protocol parsing and caching.
pub struct SubprocessPredictor {
    script: PathBuf,
    runtime_candidates: Vec<String>,
    timeout: Duration,
    cache_ttl: Duration,
    cache: TtlCache<SolarForecast>,
}

impl SubprocessPredictor {
    pub fn new(cfg: &PredictorConfig) -> Self {
        Self {
            script: cfg.script.clone(),
            runtime_candidates: cfg.runtime_candidates.clone(),
            timeout: Duration::from_secs(cfg.timeout_seconds),
            cache_ttl: Duration::from_secs(cfg.cache_ttl_seconds),
            cache: TtlCache::new(),
        }
    }

    /// Probes candidate runtimes in order, then falls back to the
    /// interpreter inside a venv next to the script.
    async fn resolve_runtime(&self) -> Result<String, PredictorError> {
        for candidate in &self.runtime_candidates {
            let probe = Command::new(candidate)
                .arg("--version")
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await;
            if matches!(probe, Ok(status) if status.success()) {
                debug!(runtime = %candidate, "resolved external prediction runtime");
                return Ok(candidate.clone());
            }
        }

        let venv = self
            .script
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("venv/bin/python3");
        if venv.exists() {
            debug!(runtime = %venv.display(), "using venv-relative runtime");
            return Ok(venv.to_string_lossy().into_owned());
        }

        Err(PredictorError::Unavailable {
            tried: self.runtime_candidates.join(", "),
        })
    }

    async fn run_model(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<SolarForecast, PredictorError> {
        let runtime = self.resolve_runtime().await?;
        let mut child = Command::new(&runtime)
            .arg(&self.script)
            .arg(date_from.format("%Y-%m-%d").to_string())
            .arg(date_to.format("%Y-%m-%d").to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let mut stdout_pipe = child
            .stdout
            .take()
            .ok_or_else(|| PredictorError::Protocol("child stdout not captured".into()))?;
        let mut stderr_pipe = child
            .stderr
            .take()
            .ok_or_else(|| PredictorError::Protocol("child stderr not captured".into()))?;

        let stdout_task = tokio::spawn(async move {
            let mut buf = String::new();
            let _ = stdout_pipe.read_to_string(&mut buf).await;
            buf
        });
        let stderr_task = tokio::spawn(async move {
            let mut buf = String::new();
            let _ = stderr_pipe.read_to_string(&mut buf).await;
            buf
        });

        // Race completion against the deadline. The losing branch must not
        // leave an orphaned child behind, so the timeout arm kills and then
        // reaps before reporting.
        let status = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(status) => status?,
            Err(_) => {
                let _ = child.start_kill();
                let _ = child.wait().await;
                stdout_task.abort();
                stderr_task.abort();
                return Err(PredictorError::Timeout(self.timeout));
            }
        };

        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();

        // The predictor chats on stderr (model loading, sklearn version
        // warnings); none of it is fatal.
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            if line.contains("Warning") {
                warn!(target: "predictor", "{line}");
            } else {
                debug!(target: "predictor", "{line}");
            }
        }

        if !status.success() {
            return Err(PredictorError::Failed {
                status,
                stderr: stderr.trim().to_string(),
            });
        }

        // stdout must be exactly one JSON document
        let response: PredictorResponse = serde_json::from_str(stdout.trim())
            .map_err(|e| PredictorError::Protocol(format!("stdout is not a single JSON document: {e}")))?;
        if !response.success {
            return Err(PredictorError::Protocol(
                response
                    .error
                    .unwrap_or_else(|| "predictor reported failure".to_string()),
            ));
        }
        let summary = response
            .summary
            .ok_or_else(|| PredictorError::Protocol("response missing summary".into()))?;
        let model_info = response
            .model_info
            .ok_or_else(|| PredictorError::Protocol("response missing model_info".into()))?;

        Ok(SolarForecast {
            source: ForecastSource::Model,
            data: response.data,
            summary,
            model_info,
        })
    }
}

#[async_trait]
impl SolarPredictor for SubprocessPredictor {
    async fn forecast(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
        use_cache: bool,
    ) -> SolarForecast {
        let from = date_from.format("%Y-%m-%d").to_string();
        let to = date_to.format("%Y-%m-%d").to_string();
        let key = cache_key(&["solar", &from, &to]);

        if use_cache {
            if let Some(hit) = self.cache.get(&key) {
                debug!(%key, "external forecast cache hit");
                return hit;
            }
        }

        match self.run_model(date_from, date_to).await {
            Ok(forecast) => {
                self.cache.set(key, forecast.clone(), Some(self.cache_ttl));
                forecast
            }
            // Never a hard error from this path: the caller always gets a
            // usable forecast, tagged as fallback. Fallback results are not
            // cached so a recovering predictor is retried next request.
            Err(err) => {
                warn!(%err, %from, %to, "external predictor failed, serving synthetic fallback");
                fallback::generate(date_from, date_to)
            }
        }
    }
}
