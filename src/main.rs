/// Development runner for the monitoring service.
///
/// Wires the ambient pieces together without a live feed: loads the service
/// configuration, initializes logging, replays a synthetic reading history,
/// and runs one full evaluation cycle over it. Real deployments embed the
/// library behind their own transport; this binary exists for smoke runs
/// and demos.

use chrono::Utc;

use aquamon_service::alert::generate::{generate, recommendation};
use aquamon_service::config::MonitorConfig;
use aquamon_service::dev_mode::DevMode;
use aquamon_service::logging::{self, LogLevel, Subsystem};
use aquamon_service::readings::ReadingWindow;
use aquamon_service::scoring::{band, score};

const CONFIG_PATH: &str = "aquamon.toml";

fn main() {
    let config = match MonitorConfig::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} (using defaults)", err);
            MonitorConfig::default()
        }
    };

    logging::init_logger(LogLevel::Info, config.log_file.as_deref());
    logging::info(
        Subsystem::Config,
        config.device_id.as_deref(),
        &format!("Starting in {:?} mode", config.mode),
    );

    let store = match config.initial_store() {
        Ok(store) => store,
        Err(err) => {
            logging::error(Subsystem::Config, None, &err.to_string());
            std::process::exit(1);
        }
    };
    let snapshot = store.snapshot();

    // No live feed here, replay a synthetic history.
    let mut window = ReadingWindow::new();
    window.replace_all(DevMode::new().simulated_readings(50, Utc::now(), &snapshot));
    logging::info(
        Subsystem::Feed,
        None,
        &format!("Replayed {} synthetic reading(s)", window.len()),
    );

    let device_id = window.latest().map(|r| r.device_id.clone());
    let alerts = generate(window.latest(), &snapshot);
    for alert in &alerts {
        logging::warn(
            Subsystem::Alert,
            device_id.as_deref(),
            &format!("{}. {}", alert.message, recommendation(alert.parameter, alert.severity)),
        );
    }

    let health = score(window.latest(), &alerts, &snapshot);
    logging::log_cycle_summary(None, alerts.len(), health.total);
    println!("System health: {}/100 ({})", health.total, band(health.total));
}
