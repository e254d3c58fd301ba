pub mod fallback;
pub mod predictor;
pub mod protocol;

pub use predictor::{SolarPredictor, SubprocessPredictor};
pub use protocol::{ForecastSource, SolarForecast};

#[cfg(test)]
pub use predictor::MockSolarPredictor;
