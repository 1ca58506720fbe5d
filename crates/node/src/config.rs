//! Command line and conf file handling for `cbsld`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use cbsl_chainparams::Network;
use cbsl_log as logging;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Report {
    Summary,
    Checkpoints,
    Seeds,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub network: Network,
    pub conf_path: Option<PathBuf>,
    pub report: Report,
    pub json: bool,
    pub log_level: logging::Level,
    pub log_format: logging::Format,
    pub log_timestamps: bool,
}

#[derive(Debug, Eq, PartialEq)]
pub enum CliAction {
    Run(Config),
    PrintHelp,
    PrintVersion,
}

pub fn parse_args() -> Result<CliAction, String> {
    parse_args_from(std::env::args().skip(1))
}

pub fn parse_args_from<I>(raw_args: I) -> Result<CliAction, String>
where
    I: IntoIterator<Item = String>,
{
    let mut network: Option<Network> = None;
    let mut testnet_flag = false;
    let mut regtest_flag = false;
    let mut conf_path: Option<PathBuf> = None;
    let mut report = Report::Summary;
    let mut json = false;
    let mut log_level = logging::Level::Info;
    let mut log_format = logging::Format::Text;
    let mut log_timestamps = true;
    let mut args = raw_args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => return Ok(CliAction::PrintHelp),
            "--version" | "-V" | "version" => return Ok(CliAction::PrintVersion),
            "--network" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --network\n{}", usage()))?;
                network = Some(parse_network(&value)?);
            }
            "-testnet" | "--testnet" => testnet_flag = true,
            "-regtest" | "--regtest" => regtest_flag = true,
            "--conf" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --conf\n{}", usage()))?;
                conf_path = Some(PathBuf::from(value));
            }
            "--log-level" | "--loglevel" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --log-level\n{}", usage()))?;
                log_level = logging::Level::parse(&value)
                    .ok_or_else(|| format!("invalid log level '{value}'\n{}", usage()))?;
            }
            "--log-format" | "--logformat" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --log-format\n{}", usage()))?;
                log_format = logging::Format::parse(&value)
                    .ok_or_else(|| format!("invalid log format '{value}'\n{}", usage()))?;
            }
            "--log-timestamps" | "--logtimestamps" => log_timestamps = true,
            "--no-log-timestamps" | "--no-logtimestamps" => log_timestamps = false,
            "--print-checkpoints" => report = Report::Checkpoints,
            "--print-seeds" => report = Report::Seeds,
            "--json" => json = true,
            other => return Err(format!("unknown argument '{other}'\n{}", usage())),
        }
    }

    let shorthand = shorthand_network(testnet_flag, regtest_flag)
        .map_err(|err| format!("{err}\n{}", usage()))?;
    if let (Some(explicit), Some(short)) = (network, shorthand) {
        if explicit != short {
            let flag = match short {
                Network::Regtest => "-regtest",
                _ => "-testnet",
            };
            return Err(format!(
                "--network {explicit} conflicts with {flag}\n{}",
                usage()
            ));
        }
    }
    let mut network = network.or(shorthand);

    if let Some(path) = conf_path.as_deref() {
        if let Some(conf) = load_conf(path)? {
            if network.is_none() {
                let testnet = conf_flag(&conf, "testnet", path)?;
                let regtest = conf_flag(&conf, "regtest", path)?;
                network = shorthand_network(testnet, regtest)
                    .map_err(|err| format!("{err} in {}", path.display()))?;
            }
        } else {
            return Err(format!("config file {} not found", path.display()));
        }
    }

    Ok(CliAction::Run(Config {
        network: network.unwrap_or(Network::Mainnet),
        conf_path,
        report,
        json,
        log_level,
        log_format,
        log_timestamps,
    }))
}

fn parse_network(value: &str) -> Result<Network, String> {
    match value.parse::<Network>() {
        Ok(Network::Unittest) => Err(format!(
            "network 'unittest' is only available to tests\n{}",
            usage()
        )),
        Ok(network) => Ok(network),
        Err(err) => Err(format!("{err}\n{}", usage())),
    }
}

fn shorthand_network(testnet: bool, regtest: bool) -> Result<Option<Network>, String> {
    match (testnet, regtest) {
        (true, true) => Err("-testnet and -regtest cannot be combined".to_string()),
        (true, false) => Ok(Some(Network::Testnet)),
        (false, true) => Ok(Some(Network::Regtest)),
        (false, false) => Ok(None),
    }
}

fn conf_flag(conf: &HashMap<String, Vec<String>>, key: &str, path: &Path) -> Result<bool, String> {
    match conf.get(key).and_then(|values| values.last()) {
        Some(raw) => parse_conf_bool(raw)
            .ok_or_else(|| format!("invalid {key} value '{raw}' in {}", path.display())),
        None => Ok(false),
    }
}

/// Reads a `key=value` conf file. Returns `Ok(None)` when it does not exist.
pub fn load_conf(path: &Path) -> Result<Option<HashMap<String, Vec<String>>>, String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(format!("failed to read {}: {err}", path.display())),
    };

    let mut out: HashMap<String, Vec<String>> = HashMap::new();
    for raw_line in contents.lines() {
        let mut line = raw_line.trim();
        if let Some(idx) = line.find(['#', ';']) {
            line = &line[..idx];
        }
        line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (line, "1"),
        };
        if key.is_empty() {
            continue;
        }
        out.entry(key.to_ascii_lowercase())
            .or_default()
            .push(value.to_string());
    }
    Ok(Some(out))
}

fn parse_conf_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.is_empty() {
        return Some(true);
    }
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

pub fn usage() -> String {
    [
        "Usage:",
        "  cbsld [options]",
        "",
        "Options:",
        "  --help, -h  Print this help and exit",
        "  --version, -V  Print version and exit",
        "  --network  Network to use (main|test|regtest) (default: main)",
        "  -testnet  Shorthand for --network test",
        "  -regtest  Shorthand for --network regtest",
        "  --conf  Config file path; may set testnet=1 or regtest=1",
        "  --log-level  Log verbosity (error|warn|info|debug|trace) (default: info)",
        "  --log-format  Log output format (text|json) (default: text)",
        "  --log-timestamps  Enable timestamps in text logs (default: on)",
        "  --no-log-timestamps  Disable timestamps in text logs",
        "  --print-checkpoints  Print the selected network's checkpoints and exit",
        "  --print-seeds  Print the selected network's seed addresses and exit",
        "  --json  Print reports as JSON",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|value| value.to_string()).collect()
    }

    fn run_config(raw: &[&str]) -> Config {
        match parse_args_from(args(raw)).expect("parse") {
            CliAction::Run(config) => config,
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn defaults_to_mainnet_summary() {
        let config = run_config(&[]);
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.report, Report::Summary);
        assert!(!config.json);
        assert_eq!(config.log_level, logging::Level::Info);
        assert!(config.log_timestamps);
    }

    #[test]
    fn network_flags() {
        assert_eq!(run_config(&["--network", "test"]).network, Network::Testnet);
        assert_eq!(run_config(&["--network", "mainnet"]).network, Network::Mainnet);
        assert_eq!(run_config(&["-testnet"]).network, Network::Testnet);
        assert_eq!(run_config(&["-regtest"]).network, Network::Regtest);
        assert_eq!(
            run_config(&["--network", "regtest", "-regtest"]).network,
            Network::Regtest
        );
    }

    #[test]
    fn rejects_conflicting_networks() {
        let err = parse_args_from(args(&["-testnet", "-regtest"])).unwrap_err();
        assert!(err.starts_with("-testnet and -regtest cannot be combined"));
        let err = parse_args_from(args(&["--network", "main", "-testnet"])).unwrap_err();
        assert!(err.starts_with("--network main conflicts with -testnet"), "{err}");
    }

    #[test]
    fn rejects_unknown_and_unittest_networks() {
        let err = parse_args_from(args(&["--network", "signet"])).unwrap_err();
        assert!(err.contains("signet"));
        let err = parse_args_from(args(&["--network", "unittest"])).unwrap_err();
        assert!(err.contains("only available to tests"));
        let err = parse_args_from(args(&["--network"])).unwrap_err();
        assert!(err.starts_with("missing value for --network"));
    }

    #[test]
    fn logging_and_report_flags() {
        let config = run_config(&[
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--no-log-timestamps",
            "--print-seeds",
            "--json",
        ]);
        assert_eq!(config.log_level, logging::Level::Debug);
        assert_eq!(config.log_format, logging::Format::Json);
        assert!(!config.log_timestamps);
        assert_eq!(config.report, Report::Seeds);
        assert!(config.json);
        assert!(parse_args_from(args(&["--log-level", "loud"])).is_err());
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(
            parse_args_from(args(&["--help", "--bogus"])).expect("help"),
            CliAction::PrintHelp
        );
        assert_eq!(
            parse_args_from(args(&["-V"])).expect("version"),
            CliAction::PrintVersion
        );
        assert!(parse_args_from(args(&["--bogus"])).is_err());
    }

    #[test]
    fn conf_bools() {
        assert_eq!(parse_conf_bool(""), Some(true));
        assert_eq!(parse_conf_bool("YES"), Some(true));
        assert_eq!(parse_conf_bool("0"), Some(false));
        assert_eq!(parse_conf_bool("maybe"), None);
    }
}
