use anyhow::Context;
use clap::Parser;
use ferien_api::config::cli::{CliConfig, Command};
use ferien_api::config::ClientConfig;
use ferien_api::utils::logger;
use ferien_api::utils::output::{render_state_codes, render_vacations, OutputFormat};
use ferien_api::utils::validation::Validate;
use ferien_api::{AsyncVacationClient, FerienError, Vacation, VacationClient};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    match run(cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            let exit_code = e
                .downcast_ref::<FerienError>()
                .map(FerienError::exit_code)
                .unwrap_or(1);
            tracing::error!("❌ ferien failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: CliConfig) -> anyhow::Result<String> {
    let config = cli
        .client_config()
        .context("Failed to load client configuration")?;
    config.validate()?;
    tracing::info!("Using API at {}", config.base_url);

    if cli.blocking {
        return tokio::task::spawn_blocking(move || run_blocking(&cli, config)).await?;
    }

    let client = Arc::new(AsyncVacationClient::from_config(config)?);
    let format = cli.format;
    let output = match cli.command {
        Command::States => render_state_codes(client.state_codes(), format)?,
        Command::All => render_vacations(&client.all_vacations().await?, format)?,
        Command::State { state_code, year } => {
            render_vacations(&client.state_vacations(state_code, year).await?, format)?
        }
        Command::Current(args) => {
            let found = client
                .current_vacation(args.state_code, args.reference_time())
                .await?;
            render_lookup("current", args.state_code, found, format)?
        }
        Command::Next(args) => {
            let found = client
                .next_vacation(args.state_code, args.reference_time())
                .await?;
            render_lookup("next", args.state_code, found, format)?
        }
        Command::Gather { state_codes, year } => {
            let mut tasks = tokio::task::JoinSet::new();
            for (index, code) in state_codes.iter().copied().enumerate() {
                let client = Arc::clone(&client);
                tasks.spawn(async move {
                    tracing::info!("Fetching {}", code);
                    let result = client.state_vacations(code, year).await;
                    tracing::info!("Fetched {}", code);
                    (index, result)
                });
            }

            let mut results: Vec<Vec<Vacation>> = vec![Vec::new(); state_codes.len()];
            while let Some(joined) = tasks.join_next().await {
                let (index, result) = joined?;
                results[index] = result?;
            }
            render_vacations(&results.concat(), format)?
        }
    };
    Ok(output)
}

fn run_blocking(cli: &CliConfig, config: ClientConfig) -> anyhow::Result<String> {
    let client = VacationClient::from_config(config)?;
    let format = cli.format;
    let output = match &cli.command {
        Command::States => render_state_codes(client.state_codes(), format)?,
        Command::All => render_vacations(&client.all_vacations()?, format)?,
        Command::State { state_code, year } => {
            render_vacations(&client.state_vacations(*state_code, *year)?, format)?
        }
        Command::Current(args) => {
            let found = client.current_vacation(args.state_code, args.reference_time())?;
            render_lookup("current", args.state_code, found, format)?
        }
        Command::Next(args) => {
            let found = client.next_vacation(args.state_code, args.reference_time())?;
            render_lookup("next", args.state_code, found, format)?
        }
        Command::Gather { state_codes, year } => {
            let mut vacations = Vec::new();
            for code in state_codes {
                vacations.extend(client.state_vacations(*code, *year)?);
            }
            render_vacations(&vacations, format)?
        }
    };
    Ok(output)
}

fn render_lookup(
    kind: &str,
    state_code: &str,
    found: Option<Vacation>,
    format: OutputFormat,
) -> ferien_api::Result<String> {
    match found {
        Some(vacation) => render_vacations(&[vacation], format),
        None => Ok(format!("No {} vacation for {}", kind, state_code)),
    }
}
