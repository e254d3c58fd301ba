use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::{availability, moving_average, seasonal, strategy, trend};
use crate::cache::{cache_key, TtlCache};
use crate::config::Config;
use crate::domain::{
    ForecastDomain, ForecastMetadata, ForecastResult, HistoricalPoint, Month, StrategyId,
};
use crate::error::ForecastError;
use crate::external::{SolarForecast, SolarPredictor, SubprocessPredictor};

/// Single entry point for both forecast surfaces: the statistical tier
/// ladder for meter histories, and the external model path for solar
/// generation. Owns the result caches; everything below it is stateless.
pub struct ForecastEngine {
    cache: TtlCache<ForecastResult>,
    live_ttl: Duration,
    predictor: Arc<dyn SolarPredictor>,
}

impl ForecastEngine {
    pub fn new(cfg: &Config) -> Self {
        Self::with_predictor(cfg, Arc::new(SubprocessPredictor::new(&cfg.predictor)))
    }

    /// Injectable predictor seam for tests and alternative backends.
    pub fn with_predictor(cfg: &Config, predictor: Arc<dyn SolarPredictor>) -> Self {
        Self {
            cache: TtlCache::new(),
            live_ttl: Duration::from_secs(cfg.cache.live_ttl_seconds),
            predictor,
        }
    }

    /// Statistical path: assess the history, pick a tier, compute.
    ///
    /// Fails only with `InsufficientData` (under 3 points), which carries
    /// the computed availability so callers can explain why. There is no
    /// automatic fallback between tiers; selection already encodes the
    /// ladder.
    pub fn compute_forecast(
        &self,
        domain: ForecastDomain,
        points: &[HistoricalPoint],
        target: Month,
        horizon: usize,
    ) -> Result<ForecastResult, ForecastError> {
        let domain_s = domain.to_string();
        let target_s = target.to_string();
        let horizon_s = horizon.to_string();
        let len_s = points.len().to_string();
        let key = cache_key(&[&domain_s, &target_s, &horizon_s, &len_s]);

        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "forecast cache hit");
            return Ok(hit);
        }

        let availability = availability::assess(points, target);
        let strategy = strategy::select(&availability);
        if strategy.id == StrategyId::InsufficientData {
            return Err(ForecastError::InsufficientData { availability });
        }

        let predictions = match strategy.id {
            StrategyId::SeasonalWeighted => seasonal::predict(points, horizon, target),
            StrategyId::TrendBased => trend::predict(points, horizon, target),
            StrategyId::MovingAverage => moving_average::predict(points, horizon, target),
            StrategyId::InsufficientData => unreachable!("rejected above"),
        };

        info!(
            %domain, %target, horizon,
            strategy = %strategy.id,
            confidence = strategy.confidence,
            points = availability.total_points,
            "computed forecast"
        );

        let result = ForecastResult {
            predictions,
            metadata: ForecastMetadata {
                strategy,
                data_availability: availability,
            },
        };

        // The past does not change; "now"-anchored requests re-anchor as
        // the clock moves, so they get the short TTL.
        let ttl = if target < Month::current() {
            None
        } else {
            Some(self.live_ttl)
        };
        self.cache.set(key, result.clone(), ttl);
        Ok(result)
    }

    /// External model path. Never fails: every failure inside the predictor
    /// degrades to the tagged synthetic fallback.
    pub async fn get_external_forecast(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
        use_cache: bool,
    ) -> SolarForecast {
        self.predictor.forecast(date_from, date_to, use_cache).await
    }
}
