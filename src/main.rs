mod config;
mod db;
mod error;
mod history;
mod sample;
mod utils;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::{error, info};

use config::Config;
use db::{Db, Store};
use history::Metric;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let db = Db::connect(&config)?;

    info!(
        "starting simulation, logging every {}s to {}",
        config.log_interval.as_secs(),
        config.database_url
    );
    info!("press Ctrl+C to stop");

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
        })?;
    }

    while running.load(Ordering::SeqCst) {
        let pause = match cycle(&db, &config) {
            Ok(()) => config.log_interval,
            Err(e) => {
                error!(
                    "unexpected error: {e}, restarting loop in {}s",
                    config.error_cooldown.as_secs()
                );
                config.error_cooldown
            }
        };
        sleep_while_running(pause, &running);
    }

    info!("simulation stopped");
    Ok(())
}

/// One logging cycle: generate a sample, overwrite the current record,
/// then update the three history lists. Remote-call failures are logged
/// per call and never abort the cycle.
fn cycle<S: Store>(db: &S, config: &Config) -> error::Result<()> {
    let sample = sample::generate();

    match db.put_current(&sample) {
        Ok(()) => info!(
            "logged temp={} humidity={} moisture={} at {} ms",
            sample.temp, sample.humidity, sample.moisture, sample.timestamp
        ),
        Err(e) => error!("writing current record: {e}"),
    }

    info!("updating history...");
    for metric in Metric::ALL {
        if let Err(e) = history::update_history(
            db,
            metric,
            sample.value(metric),
            sample.timestamp,
            config.max_history_points,
        ) {
            error!("updating history for {metric}: {e}");
        }
    }
    info!("history update complete");

    Ok(())
}

/// Sleep in short ticks so an interrupt between cycles is picked up
/// without waiting out the full interval. Never interrupts a request.
fn sleep_while_running(total: Duration, running: &AtomicBool) {
    let tick = Duration::from_millis(250);
    let mut remaining = total;
    while !remaining.is_zero() && running.load(Ordering::SeqCst) {
        let step = remaining.min(tick);
        std::thread::sleep(step);
        remaining -= step;
    }
}
