use anyhow::{Context, Result};
use chrono::NaiveDate;
use ecosphere_forecast::{config::Config, forecast::ForecastEngine, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let cfg = Config::load()?;

    let mut args = std::env::args().skip(1);
    let (date_from, date_to) = match (args.next(), args.next()) {
        (Some(from), Some(to)) => (
            NaiveDate::parse_from_str(&from, "%Y-%m-%d")
                .context("date_from must be YYYY-MM-DD")?,
            NaiveDate::parse_from_str(&to, "%Y-%m-%d").context("date_to must be YYYY-MM-DD")?,
        ),
        _ => anyhow::bail!("usage: ecosphere-forecast <date_from> <date_to>"),
    };
    if date_to < date_from {
        anyhow::bail!("date_to must not precede date_from");
    }

    info!(%date_from, %date_to, "requesting solar generation forecast");

    let engine = ForecastEngine::new(&cfg);
    let forecast = engine.get_external_forecast(date_from, date_to, true).await;

    info!(
        source = %forecast.source,
        total_kwh = forecast.summary.total_kwh,
        peak_kw = forecast.summary.peak_kw,
        "forecast complete"
    );
    println!("{}", serde_json::to_string_pretty(&forecast)?);
    Ok(())
}
