use anyhow::Result;
use clap::Parser;
use core::{App, RenderOutput, Settings};
use kubrow_config::{APP_NAME, APP_VERSION, Config};
use kubrow_table::TextTable;
use tokio::runtime::Builder;
use tracing::{error, info, warn};

pub mod cli;
pub mod core;
pub mod kube;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let _logging_guard = kubrow_common::logging::initialize(APP_NAME)?;
    info!("{} v{} started", APP_NAME, APP_VERSION);

    if let Err(error) = run_application(&args) {
        error!("{} v{} terminated with an error: {}", APP_NAME, APP_VERSION, error);
        Err(error)
    } else {
        info!("{} v{} stopped", APP_NAME, APP_VERSION);
        Ok(())
    }
}

fn run_application(args: &cli::Args) -> Result<()> {
    let rt = Builder::new_multi_thread().enable_all().build()?;

    let config = rt.block_on(Config::load_or_create()).unwrap_or_else(|error| {
        warn!("Cannot load configuration, using defaults: {}", error);
        Config::default()
    });

    let settings = Settings::new(&config, args);
    let objects = rt.block_on(core::read_manifests(&args.files))?;

    let mut app = App::new(rt.handle().clone(), settings);
    if let Err(error) = rt.block_on(app.start_scanner()) {
        warn!("Vulnerability scanner is disabled: {}", error);
        eprintln!("warning: vulnerability scanner is disabled: {error:#}");
    }

    if app.is_scanner_active() {
        rt.block_on(app.prefetch(&objects));
    }

    let output = app.render(&objects);
    print_output(&output, app.settings().wide);
    app.stop();

    Ok(())
}

fn print_output(output: &RenderOutput, show_wide: bool) {
    for (i, table) in output.tables.iter().enumerate() {
        if i > 0 {
            println!();
        }

        print!("{}", TextTable::new(&table.header, &table.rows, show_wide));
    }

    for error in &output.errors {
        eprintln!("error: {error}");
    }
}
