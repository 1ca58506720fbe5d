//! The `cbsld` entry point: pick a network, verify its parameters, report.

pub mod config;
pub mod report;

use cbsl_chainparams::{select_params, try_profiles};
use cbsl_log as logging;

pub use config::{parse_args_from, usage, CliAction, Config, Report};

pub fn run_entry() -> Result<(), String> {
    match config::parse_args()? {
        CliAction::PrintHelp => println!("{}", usage()),
        CliAction::PrintVersion => println!("cbsld {}", env!("CARGO_PKG_VERSION")),
        CliAction::Run(config) => {
            let output = run_with_config(&config)?;
            println!("{output}");
        }
    }
    Ok(())
}

/// Initializes logging, verifies every network, selects the configured one
/// and renders the requested report.
pub fn run_with_config(config: &Config) -> Result<String, String> {
    logging::init(logging::LogConfig {
        level: config.log_level,
        format: config.log_format,
        timestamps: config.log_timestamps,
    });
    if let Some(path) = &config.conf_path {
        cbsl_log::log_debug!("using config file {}", path.display());
    }

    let profiles = try_profiles().map_err(|err| {
        cbsl_log::log_error!("{err}");
        format!("chain parameters failed integrity check: {err}")
    })?;
    cbsl_log::log_debug!("verified {} network profiles", profiles.iter().count());

    let profile = select_params(config.network).map_err(|err| err.to_string())?;
    cbsl_log::log_info!(
        "Startup: network={} port={} genesis={}",
        profile.network_id(),
        profile.default_port(),
        cbsl_consensus::hash256_to_hex(profile.genesis_hash())
    );
    Ok(report::render(profile, config.report, config.json))
}
