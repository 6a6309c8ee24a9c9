use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use super::de::{opt_bool, opt_f64, opt_i64, opt_string, null_as_empty};
use crate::error::{Error, Result};

/// Every GMGN endpoint answers `{"code": 0, "msg": "success", "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T: DeserializeOwned> Envelope<T> {
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Unwraps `data`, failing on a non-zero `code` or a missing payload.
    pub fn into_data(self) -> Result<T> {
        if self.code != 0 {
            return Err(Error::ApiError(format!("GMGN returned code {}: {}", self.code, self.msg)));
        }
        self.data
            .ok_or_else(|| Error::ApiInvalidFormat("GMGN response has no data".to_string()))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenRank {
    #[serde(default, deserialize_with = "opt_i64")]
    pub id: Option<i64>,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub price_change_percent: Option<f64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub swaps: Option<i64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub liquidity: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub hot_level: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub pool_creation_timestamp: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub holder_count: Option<i64>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub open_timestamp: Option<i64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub price_change_percent1m: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub price_change_percent5m: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub price_change_percent1h: Option<f64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub buys: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub sells: Option<i64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub initial_liquidity: Option<f64>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub is_show_alert: Option<bool>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub top_10_holder_rate: Option<f64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub renounced_mint: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub renounced_freeze_account: Option<i64>,
    #[serde(default, deserialize_with = "opt_string")]
    pub burn_ratio: Option<String>,
    #[serde(default)]
    pub burn_status: Option<String>,
    #[serde(default)]
    pub launchpad: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub dev_token_burn_amount: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub dev_token_burn_ratio: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendingData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rank: Vec<TokenRank>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenPoolInfo {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub pool_address: Option<String>,
    #[serde(default)]
    pub quote_address: Option<String>,
    #[serde(default)]
    pub quote_symbol: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub liquidity: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub base_reserve: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub quote_reserve: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub initial_liquidity: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub initial_base_reserve: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub initial_quote_reserve: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub creation_timestamp: Option<i64>,
    #[serde(default, deserialize_with = "opt_string")]
    pub base_reserve_value: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub quote_reserve_value: Option<String>,
    #[serde(default)]
    pub quote_vault_address: Option<String>,
    #[serde(default)]
    pub base_vault_address: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenStats {
    #[serde(default, deserialize_with = "opt_i64")]
    pub signal_count: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub degen_call_count: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub top_rat_trader_count: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub top_smart_degen_count: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub top_fresh_wallet_count: Option<i64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub top_rat_trader_amount_percentage: Option<f64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub top_trader_smart_degen_count: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub top_trader_fresh_wallet_count: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub bluechip_owner_count: Option<i64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub bluechip_owner_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub decimals: Option<i64>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub biggest_pool_address: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub open_timestamp: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub holder_count: Option<i64>,
    #[serde(default, deserialize_with = "opt_string")]
    pub circulating_supply: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub total_supply: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub max_supply: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub liquidity: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub creation_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenDevInfo {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub creator_address: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub creator_token_balance: Option<String>,
    #[serde(default)]
    pub creator_token_status: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub twitter_name_change_history: Vec<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub top_10_holder_rate: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub dexscr_ad: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub dexscr_update_link: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub cto_flag: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenSecurityInfo {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub is_show_alert: Option<bool>,
    #[serde(default, deserialize_with = "opt_string")]
    pub top_10_holder_rate: Option<String>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub renounced_mint: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub renounced_freeze_account: Option<bool>,
    #[serde(default, deserialize_with = "opt_string")]
    pub burn_ratio: Option<String>,
    #[serde(default)]
    pub burn_status: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub dev_token_burn_amount: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub dev_token_burn_ratio: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenLaunchpadInfo {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub launchpad: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub launchpad_status: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub launchpad_progress: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeHistory {
    #[serde(default)]
    pub maker: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub base_amount: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub quote_amount: Option<f64>,
    #[serde(default)]
    pub quote_symbol: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub amount_usd: Option<f64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub price_usd: Option<f64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub total_trade: Option<i64>,
    #[serde(default, deserialize_with = "opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub is_following: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub is_open_or_close: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub maker_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub maker_token_tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeHistoryPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub history: Vec<TradeHistory>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenLink {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gmgn: Option<String>,
    #[serde(default)]
    pub geckoterminal: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
    #[serde(default)]
    pub discord: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub reddit: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub bitbucket: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub verify_status: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagWalletCount {
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub smart_wallets: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub fresh_wallets: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub renowned_wallets: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub creator_wallets: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub sniper_wallets: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub rat_trader_wallets: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub following_wallets: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub whale_wallets: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub top_wallets: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolderStatus {
    #[serde(default, deserialize_with = "opt_i64")]
    pub hold: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub bought_more: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub sold_part: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub sold: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub transfered: Option<i64>,
    #[serde(default, deserialize_with = "opt_string")]
    pub bought_rate: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub holding_rate: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub top_10_holder_rate: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopBuyerHolders {
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub holder_count: Option<i64>,
    #[serde(rename = "statusNow", default)]
    pub status_now: Option<HolderStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopBuyers {
    #[serde(default)]
    pub holders: Option<TopBuyerHolders>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RugHistory {
    #[serde(default, deserialize_with = "opt_string")]
    pub rug_ratio: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub holder_rugged_num: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub holder_token_num: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Candle as sent by the kline endpoint: millisecond `time`, string prices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCandle {
    #[serde(default, deserialize_with = "opt_string")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub open: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub high: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub low: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub close: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub volume: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KlineData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list: Vec<RawCandle>,
}
