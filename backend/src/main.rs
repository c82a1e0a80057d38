//! `social` entry-point: loads settings, installs logging, and runs a command.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod cli;

use std::ffi::OsString;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use social_backend::AppSettings;
use social_backend::outbound::NOTIFICATION_TARGET;
use tokio::runtime::Builder;
use tracing_subscriber::{EnvFilter, fmt};

use cli::{App, Cli};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    let settings = AppSettings::load_from_iter([OsString::from("social")])
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    init_tracing(args.json_logs || settings.json_logs);

    let storage_dir = args
        .storage_dir
        .clone()
        .unwrap_or_else(|| settings.storage_dir());
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build Tokio runtime")?;
    runtime.block_on(async move {
        let app = App::open(&storage_dir)?;
        app.run(args.command).await
    })
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(error) = result {
        eprintln!("tracing init failed: {error}");
    }
}

/// Warnings everywhere, plus every user-facing notification.
fn default_filter() -> String {
    format!("warn,{NOTIFICATION_TARGET}=info")
}
