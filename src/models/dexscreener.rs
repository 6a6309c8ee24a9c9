use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use super::de::{opt_f64, opt_i64, opt_string, null_as_empty};

/// Free-form link object (`{"type": "twitter", "url": "..."}`, `{"label": ..}`).
pub type Link = HashMap<String, String>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenProfile {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub chain_id: String,
    #[serde(default)]
    pub token_address: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub links: Option<Vec<Link>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostedToken {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub chain_id: String,
    #[serde(default)]
    pub token_address: String,
    #[serde(default, deserialize_with = "opt_f64")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub links: Option<Vec<Link>>,
}

/// Paid order for a token. `order_type` is one of `tokenProfile`,
/// `communityTakeover`, `tokenAd`, `trendingBarAd`; `status` one of
/// `processing`, `cancelled`, `on-hold`, `approved`, `rejected`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOrder {
    #[serde(rename = "type", default)]
    pub order_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "opt_i64")]
    pub payment_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairToken {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairLiquidity {
    #[serde(default, deserialize_with = "opt_f64")]
    pub usd: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub base: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub quote: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairInfo {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub websites: Option<Vec<Link>>,
    #[serde(default)]
    pub socials: Option<Vec<Link>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairBoosts {
    #[serde(default, deserialize_with = "opt_i64")]
    pub active: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    #[serde(default)]
    pub chain_id: String,
    #[serde(default)]
    pub dex_id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub pair_address: String,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub base_token: PairToken,
    #[serde(default)]
    pub quote_token: PairToken,
    #[serde(default, deserialize_with = "opt_string")]
    pub price_native: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub volume: Option<HashMap<String, f64>>,
    #[serde(default)]
    pub price_change: Option<HashMap<String, f64>>,
    #[serde(default)]
    pub liquidity: Option<PairLiquidity>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub fdv: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub pair_created_at: Option<i64>,
    #[serde(default)]
    pub info: Option<PairInfo>,
    #[serde(default)]
    pub boosts: Option<PairBoosts>,
}

/// Wrapper used by the pair, token and search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PairsResponse {
    #[serde(rename = "schemaVersion", default)]
    pub schema_version: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pairs: Vec<Pair>,
}
