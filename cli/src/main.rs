use std::io;

use anyhow::Result;
use medicine_cli::{shell, CommandLineArgs, Terminal};
use medicine_core::{ClientConfig, MedicineApi, MedicineController, UreqTransport};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = CommandLineArgs::parse();
    let config = ClientConfig::from_env().with_override(args.base_url().cloned());
    tracing::info!(base_url = %config.base_url, "starting");

    let api = MedicineApi::new(&config.base_url, UreqTransport::new());
    let terminal = Terminal::new(io::stdin().lock(), io::stdout().lock());
    let mut controller = MedicineController::new(api, terminal);

    controller
        .prompt_mut()
        .println("Medicine Management (type `help` for commands)")?;
    shell::run(&mut controller)
}
