use crate::api::transport::{HttpRequest, HttpTransport, ReqwestTransport};
use crate::config::DexScreenerConfig;
use crate::error::{Error, Result};
use crate::metrics;
use crate::models::dexscreener::{BoostedToken, Pair, PairsResponse, TokenOrder, TokenProfile};
use crate::utils::RateLimiter;
use log::{debug, info};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const API_BASE_URL: &str = "https://api.dexscreener.com";
pub const MAX_TOKEN_ADDRESSES: usize = 30;
const RATE_WINDOW: Duration = Duration::from_secs(60);

/// DexScreener publishes two request budgets per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RateGroup {
    /// Profiles, boosts, orders: 60 requests/minute.
    Listings,
    /// Pairs, tokens, search: 300 requests/minute.
    Pairs,
}

impl RateGroup {
    fn key(self) -> &'static str {
        match self {
            RateGroup::Listings => "dexscreener:listings",
            RateGroup::Pairs => "dexscreener:pairs",
        }
    }

    fn max_requests(self) -> usize {
        match self {
            RateGroup::Listings => 60,
            RateGroup::Pairs => 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DexScreenerMethod {
    GetTokenProfiles,
    GetBoostedTokens,
    GetTopBoostedTokens,
    GetTokenOrders,
    GetPairs,
    GetPairsByToken,
    SearchPairs,
}

impl DexScreenerMethod {
    pub const ALL: [DexScreenerMethod; 7] = [
        DexScreenerMethod::GetTokenProfiles,
        DexScreenerMethod::GetBoostedTokens,
        DexScreenerMethod::GetTopBoostedTokens,
        DexScreenerMethod::GetTokenOrders,
        DexScreenerMethod::GetPairs,
        DexScreenerMethod::GetPairsByToken,
        DexScreenerMethod::SearchPairs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DexScreenerMethod::GetTokenProfiles => "get_token_profiles",
            DexScreenerMethod::GetBoostedTokens => "get_boosted_tokens",
            DexScreenerMethod::GetTopBoostedTokens => "get_top_boosted_tokens",
            DexScreenerMethod::GetTokenOrders => "get_token_orders",
            DexScreenerMethod::GetPairs => "get_pairs",
            DexScreenerMethod::GetPairsByToken => "get_pairs_by_token",
            DexScreenerMethod::SearchPairs => "search_pairs",
        }
    }
}

impl fmt::Display for DexScreenerMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DexScreenerMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DexScreenerMethod::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| Error::InvalidInput(format!("Unknown method: {}", s)))
    }
}

/// Loose inputs as a tool caller provides them; blank strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct DexScreenerQuery {
    pub chain_id: Option<String>,
    pub pair_id: Option<String>,
    pub token_addresses: Option<String>,
    pub search_query: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn require<'a>(value: &'a Option<String>, what: &str) -> Result<&'a str> {
    present(value).ok_or_else(|| Error::InvalidInput(format!("{} is required", what)))
}

fn require_arg<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::InvalidInput(format!("{} is required", what)));
    }
    Ok(value)
}

/// Splits a comma-separated address list, dropping blanks.
pub fn parse_token_addresses(raw: &str) -> Result<Vec<String>> {
    let addresses: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect();

    if addresses.is_empty() {
        return Err(Error::InvalidInput("Token addresses are required".to_string()));
    }
    if addresses.len() > MAX_TOKEN_ADDRESSES {
        return Err(Error::InvalidInput(format!(
            "Maximum of {} token addresses allowed",
            MAX_TOKEN_ADDRESSES
        )));
    }
    Ok(addresses)
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DexScreenerData {
    Profiles(Vec<TokenProfile>),
    Boosts(Vec<BoostedToken>),
    Orders(Vec<TokenOrder>),
    Pairs(Vec<Pair>),
}

impl DexScreenerData {
    pub fn len(&self) -> usize {
        match self {
            DexScreenerData::Profiles(v) => v.len(),
            DexScreenerData::Boosts(v) => v.len(),
            DexScreenerData::Orders(v) => v.len(),
            DexScreenerData::Pairs(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One JSON object per record.
    pub fn to_records(&self) -> Result<Vec<serde_json::Value>> {
        match serde_json::to_value(self)? {
            serde_json::Value::Array(items) => Ok(items),
            other => Ok(vec![other]),
        }
    }
}

pub struct DexScreenerClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl DexScreenerClient {
    pub fn new(config: &DexScreenerConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs), None)?;
        Ok(Self::with_transport(&config.base_url, Arc::new(transport)))
    }

    pub fn with_transport(base_url: &str, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limiter: RateLimiter::new(),
        }
    }

    fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let url = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        url.map_err(|e| Error::InvalidInput(format!("Invalid URL {}: {}", raw, e)))
    }

    async fn get<T: DeserializeOwned>(&self, url: Url, group: RateGroup) -> Result<T> {
        self.rate_limiter
            .acquire(group.key(), group.max_requests(), RATE_WINDOW)
            .await;

        metrics::DEXSCREENER_REQUESTS.inc();
        let started = Instant::now();
        let response = self.transport.send(HttpRequest::get(url.as_str())).await;
        metrics::API_LATENCY.observe(started.elapsed().as_secs_f64());

        let response = response.map_err(|e| {
            metrics::API_ERRORS.inc();
            e
        })?;
        if !response.is_success() {
            metrics::API_ERRORS.inc();
            return Err(Error::HttpStatus {
                status: response.status,
                url: url.to_string(),
            });
        }
        response.json()
    }

    pub async fn latest_token_profiles(&self) -> Result<Vec<TokenProfile>> {
        let url = self.url("/token-profiles/latest/v1", &[])?;
        self.get(url, RateGroup::Listings).await
    }

    pub async fn latest_boosted_tokens(&self) -> Result<Vec<BoostedToken>> {
        let url = self.url("/token-boosts/latest/v1", &[])?;
        self.get(url, RateGroup::Listings).await
    }

    pub async fn top_boosted_tokens(&self) -> Result<Vec<BoostedToken>> {
        let url = self.url("/token-boosts/top/v1", &[])?;
        self.get(url, RateGroup::Listings).await
    }

    pub async fn token_orders(&self, chain_id: &str, token_address: &str) -> Result<Vec<TokenOrder>> {
        let chain_id = require_arg(chain_id, "chain_id")?;
        let token_address = require_arg(token_address, "token_address")?;
        let url = self.url(&format!("/orders/v1/{}/{}", chain_id, token_address), &[])?;
        self.get(url, RateGroup::Listings).await
    }

    pub async fn pairs(&self, chain_id: &str, pair_id: &str) -> Result<Vec<Pair>> {
        let chain_id = require_arg(chain_id, "chain_id")?;
        let pair_id = require_arg(pair_id, "pair_id")?;
        let url = self.url(&format!("/latest/dex/pairs/{}/{}", chain_id, pair_id), &[])?;
        let response: PairsResponse = self.get(url, RateGroup::Pairs).await?;
        Ok(response.pairs)
    }

    /// Up to [`MAX_TOKEN_ADDRESSES`] comma-separated addresses.
    pub async fn pairs_by_tokens(&self, token_addresses: &str) -> Result<Vec<Pair>> {
        let addresses = parse_token_addresses(token_addresses)?;
        let url = self.url(&format!("/latest/dex/tokens/{}", addresses.join(",")), &[])?;
        let response: PairsResponse = self.get(url, RateGroup::Pairs).await?;
        Ok(response.pairs)
    }

    pub async fn search_pairs(&self, query: &str) -> Result<Vec<Pair>> {
        let query = require_arg(query, "search_query")?;
        let url = self.url("/latest/dex/search", &[("q", query)])?;
        let response: PairsResponse = self.get(url, RateGroup::Pairs).await?;
        Ok(response.pairs)
    }

    /// Runs `method`, checking its required inputs before any request.
    /// Failures come back wrapped in [`Error::DexScreenerError`].
    pub async fn execute(&self, method: DexScreenerMethod, query: &DexScreenerQuery) -> Result<DexScreenerData> {
        match self.dispatch(method, query).await {
            Ok(data) => {
                info!("DexScreener {} returned {} records", method, data.len());
                Ok(data)
            }
            Err(e) => {
                let err = Error::DexScreenerError(Box::new(e));
                debug!("{}", err);
                Err(err)
            }
        }
    }

    async fn dispatch(&self, method: DexScreenerMethod, query: &DexScreenerQuery) -> Result<DexScreenerData> {
        let data = match method {
            DexScreenerMethod::GetTokenProfiles => {
                DexScreenerData::Profiles(self.latest_token_profiles().await?)
            }
            DexScreenerMethod::GetBoostedTokens => {
                DexScreenerData::Boosts(self.latest_boosted_tokens().await?)
            }
            DexScreenerMethod::GetTopBoostedTokens => {
                DexScreenerData::Boosts(self.top_boosted_tokens().await?)
            }
            DexScreenerMethod::GetTokenOrders => {
                let chain_id = require(&query.chain_id, "chain_id")?;
                let token_address = require(&query.token_addresses, "token_addresses")?;
                DexScreenerData::Orders(self.token_orders(chain_id, token_address).await?)
            }
            DexScreenerMethod::GetPairs => {
                let chain_id = require(&query.chain_id, "chain_id")?;
                let pair_id = require(&query.pair_id, "pair_id")?;
                DexScreenerData::Pairs(self.pairs(chain_id, pair_id).await?)
            }
            DexScreenerMethod::GetPairsByToken => {
                let addresses = require(&query.token_addresses, "token_addresses")?;
                DexScreenerData::Pairs(self.pairs_by_tokens(addresses).await?)
            }
            DexScreenerMethod::SearchPairs => {
                let q = require(&query.search_query, "search_query")?;
                DexScreenerData::Pairs(self.search_pairs(q).await?)
            }
        };
        Ok(data)
    }

    /// Picks the most specific method the query allows: chain+pair, then
    /// token addresses, then search, falling back to the latest profiles.
    pub fn select_method(query: &DexScreenerQuery) -> DexScreenerMethod {
        if present(&query.chain_id).is_some() && present(&query.pair_id).is_some() {
            DexScreenerMethod::GetPairs
        } else if present(&query.token_addresses).is_some() {
            DexScreenerMethod::GetPairsByToken
        } else if present(&query.search_query).is_some() {
            DexScreenerMethod::SearchPairs
        } else {
            DexScreenerMethod::GetTokenProfiles
        }
    }

    pub async fn auto_select(&self, query: &DexScreenerQuery) -> Result<DexScreenerData> {
        self.execute(Self::select_method(query), query).await
    }
}
