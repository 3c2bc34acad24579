use clap::Parser;
use regapp_validate::AppError;
use regapp_validate::cli::dispatcher::{CommandOutcome, Dispatcher};
use regapp_validate::cli::main_types::Cli;
use regapp_validate::storage::config::Config;
use regapp_validate::utils::logging::{log_error, log_hint, print_verbose};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli.config.as_ref().map(PathBuf::from);

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            log_error(&format!(
                "[{}] Error loading config: {}",
                err.severity().label(),
                err
            ));
            if let Some(hint) = err.troubleshooting_hint() {
                log_hint(&hint);
            }
            return ExitCode::from(2);
        }
    };

    if let Some(path) = &config_path {
        print_verbose(cli.verbose, &format!("Using config file: {}", path.display()));
    }
    print_verbose(
        cli.verbose,
        &format!(
            "Loaded {} address template(s), {} attribute type(s)",
            config.address_templates.len(),
            config.attribute_types.len()
        ),
    );

    let dispatcher = Dispatcher::new(config, config_path, cli.verbose);

    match dispatcher.dispatch(cli.command) {
        Ok(CommandOutcome::Passed) => ExitCode::SUCCESS,
        Ok(CommandOutcome::Failed) => ExitCode::FAILURE,
        Err(e) => {
            log_error(&format!("[{}] {}", e.severity().label(), e));
            if let Some(hint) = e.troubleshooting_hint() {
                log_hint(&hint);
            }
            ExitCode::from(2)
        }
    }
}
