pub mod board;
pub mod config;
pub mod error;
pub mod pins;
pub mod validate;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::A4988Config;
pub use error::{Mismatch, PinError};
pub use pins::{
    P_DIR, P_MS1, P_MS2, P_MS3, P_N_EN, P_N_RST, P_N_SLP, P_STEP, PIN_TABLE, PinAssignment,
    PinRole,
};

/// Filter from a `RUST_LOG` value, falling back to `info` when unset or unparsable.
/// The flag reports whether the fallback was used.
fn env_filter_or_default(rust_log: Option<&str>) -> (EnvFilter, bool) {
    match rust_log.map(EnvFilter::try_new) {
        Some(Ok(filter)) => (filter, false),
        _ => (EnvFilter::new("info"), true),
    }
}

pub fn configure_logging() {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (env_filter, defaulted) = env_filter_or_default(rust_log.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_thread_ids(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr) // stdout carries the rendered table
        .init();

    if defaulted {
        info!("RUST_LOG not set or invalid, using default log level 'info'");
    }
}

/// Renders the compiled table as a human readable listing with board labels.
pub fn describe_pin_table() -> String {
    PIN_TABLE
        .iter()
        .map(|assignment| {
            let label = board::silkscreen_label(assignment.pin).unwrap_or("-");
            format!("{} ({}) {}", assignment, label, assignment.role.role_name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
