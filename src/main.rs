use clap::Parser;
use fracterm::{AppConfig, AppError, Cli, CrosstermTerminal, InteractiveController, load_ramp};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from(Cli::parse());
    run(&config)?;

    Ok(())
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    fracterm::logging::init(config.log_file.as_deref())?;

    let ramp = config.ramp_file.as_deref().map(load_ramp).transpose()?;
    if let (Some(path), Some(ramp)) = (&config.ramp_file, &ramp) {
        info!(path = %path.display(), stops = ramp.len(), "ramp loaded");
    }

    let mut controller = InteractiveController::new(CrosstermTerminal::new(), config.controller_options(ramp))?;
    controller.run()?;

    Ok(())
}
