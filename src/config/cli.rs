use crate::config::ClientConfig;
use crate::domain::state::parse_state_code;
use crate::domain::time::IntoCivilTime;
use crate::utils::error::Result;
use crate::utils::output::OutputFormat;
use crate::utils::validation::parse_year;
use chrono::{DateTime, FixedOffset, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ferien")]
#[command(about = "Query German school vacations from ferien-api.de")]
pub struct CliConfig {
    /// TOML file with a [client] section
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides client.base_url
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Use the blocking client instead of the async one
    #[arg(long, global = true)]
    pub blocking: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the valid state codes
    States,
    /// All vacations of all states
    All,
    /// Vacations of one state
    State {
        #[arg(value_parser = parse_state_arg)]
        state_code: &'static str,
        #[arg(long, value_parser = parse_year_arg)]
        year: Option<i32>,
    },
    /// The vacation in progress
    Current(LookupArgs),
    /// The next vacation to start
    Next(LookupArgs),
    /// Fetch several states concurrently
    Gather {
        #[arg(value_delimiter = ',', required = true, value_parser = parse_state_arg)]
        state_codes: Vec<&'static str>,
        #[arg(long, value_parser = parse_year_arg)]
        year: Option<i32>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    #[arg(value_parser = parse_state_arg)]
    pub state_code: &'static str,

    /// Reference day (YYYY-MM-DD), defaults to now
    #[arg(long)]
    pub at: Option<NaiveDate>,
}

impl LookupArgs {
    pub fn reference_time(&self) -> Option<DateTime<FixedOffset>> {
        self.at.map(IntoCivilTime::into_civil_time)
    }
}

fn parse_state_arg(value: &str) -> std::result::Result<&'static str, String> {
    parse_state_code(value).map_err(|e| e.to_string())
}

fn parse_year_arg(value: &str) -> std::result::Result<i32, String> {
    parse_year(value).map_err(|e| e.to_string())
}

impl CliConfig {
    /// Config file (if any) with the command-line overrides applied.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_command() {
        let cli = CliConfig::try_parse_from(["ferien", "state", "HH", "--year", "2019"]).unwrap();
        match cli.command {
            Command::State { state_code, year } => {
                assert_eq!(state_code, "HH");
                assert_eq!(year, Some(2019));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_bad_year_is_rejected_by_parser() {
        let err = CliConfig::try_parse_from(["ferien", "state", "HH", "--year", "abc"]).unwrap_err();
        assert!(err.to_string().contains("Argument year is expected to be an int"));
    }

    #[test]
    fn test_unknown_state_is_rejected_by_parser() {
        assert!(CliConfig::try_parse_from(["ferien", "current", "UKW"]).is_err());
    }

    #[test]
    fn test_gather_splits_codes() {
        let cli =
            CliConfig::try_parse_from(["ferien", "gather", "HH,SH,BE", "--format", "csv"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Csv);
        match cli.command {
            Command::Gather { state_codes, year } => {
                assert_eq!(state_codes, vec!["HH", "SH", "BE"]);
                assert_eq!(year, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_lookup_reference_time() {
        let cli = CliConfig::try_parse_from(["ferien", "next", "HB", "--at", "2017-02-01"]).unwrap();
        let Command::Next(args) = cli.command else {
            panic!("expected next command");
        };
        let at = args.reference_time().unwrap();
        assert_eq!(at.format("%Y-%m-%dT%H:%M").to_string(), "2017-02-01T00:00");
    }

    #[test]
    fn test_base_url_override() {
        let cli = CliConfig::try_parse_from(["ferien", "all", "--base-url", "http://localhost:1"])
            .unwrap();
        assert_eq!(cli.client_config().unwrap().base_url, "http://localhost:1");
    }
}
