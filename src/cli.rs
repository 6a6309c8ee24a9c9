use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Print collected metrics after the command finishes
    #[arg(long)]
    pub print_metrics: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// DexScreener queries
    #[command(subcommand)]
    Dex(DexCommand),
    /// GMGN queries and reports
    #[command(subcommand)]
    Gmgn(GmgnCommand),
}

#[derive(Subcommand, Debug)]
pub enum DexCommand {
    /// Latest token profiles
    Profiles,
    /// Latest boosted tokens
    Boosts,
    /// Tokens with the most active boosts
    TopBoosts,
    /// Paid orders for a token
    Orders {
        chain_id: String,
        token_address: String,
    },
    /// Pairs by chain and pair address
    Pairs {
        chain_id: String,
        pair_id: String,
    },
    /// Pairs for up to 30 comma-separated token addresses
    Tokens { token_addresses: String },
    /// Search pairs matching a query
    Search { query: String },
    /// Pick the most specific query from whatever inputs are given
    Auto(AutoArgs),
}

#[derive(Args, Debug, Default)]
pub struct AutoArgs {
    #[arg(long)]
    pub chain_id: Option<String>,
    #[arg(long)]
    pub pair_id: Option<String>,
    #[arg(long)]
    pub token_addresses: Option<String>,
    #[arg(long)]
    pub search_query: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum GmgnCommand {
    /// Trending tokens ranked by swaps
    Trending {
        #[arg(long, default_value = "1h")]
        time_frame: String,
        #[arg(long, default_value_t = 15)]
        limit: u32,
        /// Fail instead of falling back to the proxy
        #[arg(long)]
        no_proxy: bool,
    },
    /// Token info, security and links
    Info { token_address: String },
    /// Candles for a token
    Kline {
        token_address: String,
        #[arg(long, default_value = "5m")]
        resolution: String,
        /// Unix seconds
        #[arg(long)]
        from: Option<i64>,
        /// Unix seconds
        #[arg(long)]
        to: Option<i64>,
    },
    /// Full markdown analysis report
    Report { token_address: String },
}
