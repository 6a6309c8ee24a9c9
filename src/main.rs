use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

use token_intel::api::{DexScreenerClient, DexScreenerMethod, DexScreenerQuery, GmgnClient, TrendingQuery};
use token_intel::api::gmgn::token_report;
use token_intel::cli::{Cli, Command, DexCommand, GmgnCommand};
use token_intel::config::Config;
use token_intel::{logging, metrics};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn dex_request(command: DexCommand) -> (DexScreenerMethod, DexScreenerQuery) {
    match command {
        DexCommand::Profiles => (DexScreenerMethod::GetTokenProfiles, DexScreenerQuery::default()),
        DexCommand::Boosts => (DexScreenerMethod::GetBoostedTokens, DexScreenerQuery::default()),
        DexCommand::TopBoosts => (DexScreenerMethod::GetTopBoostedTokens, DexScreenerQuery::default()),
        DexCommand::Orders { chain_id, token_address } => (
            DexScreenerMethod::GetTokenOrders,
            DexScreenerQuery {
                chain_id: Some(chain_id),
                token_addresses: Some(token_address),
                ..Default::default()
            },
        ),
        DexCommand::Pairs { chain_id, pair_id } => (
            DexScreenerMethod::GetPairs,
            DexScreenerQuery {
                chain_id: Some(chain_id),
                pair_id: Some(pair_id),
                ..Default::default()
            },
        ),
        DexCommand::Tokens { token_addresses } => (
            DexScreenerMethod::GetPairsByToken,
            DexScreenerQuery {
                token_addresses: Some(token_addresses),
                ..Default::default()
            },
        ),
        DexCommand::Search { query } => (
            DexScreenerMethod::SearchPairs,
            DexScreenerQuery {
                search_query: Some(query),
                ..Default::default()
            },
        ),
        DexCommand::Auto(args) => {
            let query = DexScreenerQuery {
                chain_id: args.chain_id,
                pair_id: args.pair_id,
                token_addresses: args.token_addresses,
                search_query: args.search_query,
            };
            (DexScreenerClient::select_method(&query), query)
        }
    }
}

async fn run_dex(config: &Config, command: DexCommand) -> Result<()> {
    let client = DexScreenerClient::new(&config.dexscreener)?;
    let (method, query) = dex_request(command);
    let data = client.execute(method, &query).await?;
    print_json(&data.to_records()?)
}

async fn run_gmgn(config: &Config, command: GmgnCommand) -> Result<()> {
    let client = GmgnClient::new(&config.gmgn)?;
    match command {
        GmgnCommand::Trending { time_frame, limit, no_proxy } => {
            let query = TrendingQuery {
                time_frame,
                limit,
                no_proxy,
                ..Default::default()
            };
            print_json(&client.trending(&query).await?)
        }
        GmgnCommand::Info { token_address } => {
            let (info, security, links) = tokio::join!(
                client.token_info(&token_address),
                client.token_security_info(&token_address),
                client.token_link(&token_address),
            );
            let (info, security, links) = (info?, security?, links?);
            print_json(&json!({
                "info": info,
                "security": security,
                "links": links,
            }))
        }
        GmgnCommand::Kline { token_address, resolution, from, to } => {
            let kline = client.kline(&token_address, &resolution, from, to).await?;
            print_json(&kline.candles())
        }
        GmgnCommand::Report { token_address } => {
            let report = token_report(&client, &token_address, &config.report).await?;
            println!("{}", report);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(|| PathBuf::from("config/config.toml"));
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;

    logging::init(&config.logging, cli.debug)?;
    metrics::init()?;
    info!("Configuration loaded from {:?}", config_path);

    match cli.command {
        Command::Dex(command) => run_dex(&config, command).await?,
        Command::Gmgn(command) => run_gmgn(&config, command).await?,
    }

    if cli.print_metrics {
        print!("{}", metrics::render()?);
    }
    Ok(())
}
