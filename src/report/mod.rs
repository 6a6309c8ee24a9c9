//! Markdown token report. Rendering is a pure function of [`ReportInputs`].

pub mod format;
mod price;
mod sections;

use crate::models::gmgn::{
    KlineData, RugHistory, TagWalletCount, TokenDevInfo, TokenInfo, TokenLaunchpadInfo, TokenLink,
    TokenPoolInfo, TokenSecurityInfo, TokenStats, TopBuyers, TradeHistoryPage,
};
use chrono::{DateTime, Utc};

pub use price::kline_analysis;

/// Everything a report can show. Each source is optional; an absent one
/// renders as a "No ... available" placeholder.
#[derive(Debug, Clone)]
pub struct ReportInputs {
    pub token_info: Option<TokenInfo>,
    pub pool_info: Option<TokenPoolInfo>,
    pub stats: Option<TokenStats>,
    pub dev_info: Option<TokenDevInfo>,
    pub security_info: Option<TokenSecurityInfo>,
    pub launchpad_info: Option<TokenLaunchpadInfo>,
    pub links: Option<TokenLink>,
    pub wallet_count: Option<TagWalletCount>,
    pub top_buyers: Option<TopBuyers>,
    pub rug_history: Option<RugHistory>,
    pub trade_history: Option<TradeHistoryPage>,
    pub short_kline: Option<KlineData>,
    pub long_kline: Option<KlineData>,
    pub short_resolution: String,
    pub long_resolution: String,
    /// Reference point for relative times.
    pub generated_at: DateTime<Utc>,
}

impl ReportInputs {
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self {
            token_info: None,
            pool_info: None,
            stats: None,
            dev_info: None,
            security_info: None,
            launchpad_info: None,
            links: None,
            wallet_count: None,
            top_buyers: None,
            rug_history: None,
            trade_history: None,
            short_kline: None,
            long_kline: None,
            short_resolution: "5m".to_string(),
            long_resolution: "4h".to_string(),
            generated_at,
        }
    }

    pub fn symbol(&self) -> &str {
        self.token_info
            .as_ref()
            .and_then(|info| info.symbol.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown Token")
    }
}

pub fn render(inputs: &ReportInputs) -> String {
    let now = inputs.generated_at;
    let parts = [
        format!("# Token Analysis Report for {}", inputs.symbol()),
        sections::token_info(inputs.token_info.as_ref()),
        sections::pool_info(inputs.pool_info.as_ref()),
        sections::security_info(inputs.security_info.as_ref()),
        sections::dev_info(inputs.dev_info.as_ref()),
        sections::stats(inputs.stats.as_ref()),
        sections::wallet_analysis(inputs.wallet_count.as_ref()),
        sections::launchpad_info(inputs.launchpad_info.as_ref()),
        sections::links(inputs.links.as_ref()),
        format!("## Short-term Analysis ({})", inputs.short_resolution),
        price::kline_analysis(inputs.short_kline.as_ref(), &inputs.short_resolution, now),
        format!("## Long-term Analysis ({})", inputs.long_resolution),
        price::kline_analysis(inputs.long_kline.as_ref(), &inputs.long_resolution, now),
        sections::recent_trades(inputs.trade_history.as_ref().map(|page| page.history.as_slice()), now),
        sections::rug_analysis(inputs.rug_history.as_ref()),
        sections::top_buyers(inputs.top_buyers.as_ref()),
    ];
    parts.join("\n\n")
}
