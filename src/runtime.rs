//! Application lifecycle for the `greeter` binary
//!
//! Startup order:
//! 1. Load and validate configuration, start diagnostics logging
//! 2. Platform setup (tear-down is deferred to scope exit)
//! 3. Route library log output to the configured sink
//! 4. Greet and report the CPU count

use crate::cli::Cli;
use crate::config::{AppConfig, SinkKind};
use crate::errors::{GreeterError, Result};
use crate::greeting::hello;
use crate::logger::{
    self,
    sinks::{FileSink, StdoutSink, TracingSink, install_sink},
};
use crate::system::logging::init_tracing;
use crate::{defer, platform};
use std::sync::Arc;
use tracing::{debug, info};

/// Run the binary with parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(path) = cli.generate_config.as_deref() {
        AppConfig::default().save_to_file(path)?;
        println!("Sample configuration written to {}", path);
        return Ok(());
    }

    let name = cli
        .name
        .clone()
        .ok_or_else(|| GreeterError::usage(Cli::usage()))?;

    let mut config = AppConfig::load(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);

    let _log_guard = init_tracing(&config.logging)?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    platform::init();
    defer! { platform::deinit(); }

    install_log_sink(&config)?;
    defer! { logger::clear_handler(); }

    if let Some(count) = config.platform.cpu_count {
        platform::set_fixed_cpu_count(count);
    }

    println!("{}", hello(&name));
    println!("We are running on {} CPUs.", platform::cpu_count());

    Ok(())
}

/// Command-line flags win over file and environment settings.
pub fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(ref file) = cli.log_file {
        config.logging.sink = SinkKind::File;
        config.logging.file = file.clone();
    }
    if cli.log_stdout {
        config.logging.sink = SinkKind::Stdout;
    }
}

/// Point the library log slot at the sink named in `config`.
pub fn install_log_sink(config: &AppConfig) -> Result<()> {
    match config.logging.sink {
        SinkKind::File => {
            let sink = FileSink::create(&config.logging.file)?;
            info!("Library log output goes to {}", sink.path().display());
            install_sink(Arc::new(sink));
        }
        SinkKind::Stdout => install_sink(Arc::new(StdoutSink)),
        SinkKind::Tracing => install_sink(Arc::new(TracingSink)),
        SinkKind::Off => logger::clear_handler(),
    }
    Ok(())
}
