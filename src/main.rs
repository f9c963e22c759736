use a4988_pins::config::{self, A4988Config};
use a4988_pins::{board, configure_logging, describe_pin_table, validate};
use anyhow::Context;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    configure_logging();

    info!("A4988 pin table for {}", board::BOARD_NAME);
    for line in describe_pin_table().lines() {
        debug!("{}", line);
    }

    let compiled = A4988Config::default();
    validate::validate_assignments(&compiled.assignments())
        .context("Compiled pin table is invalid")?;
    print!("{}", compiled.to_yaml()?);

    if let Some(path) = config::pin_table_path_from_env() {
        info!("Checking wiring file {}", path);
        let wired = config::load_a4988_config(&path)?;
        validate::verify_wiring(&wired)
            .with_context(|| format!("Wiring file {} does not match", path))?;
    }

    Ok(())
}
