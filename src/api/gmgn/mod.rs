pub mod clearance;
pub mod report;
pub mod session;

use crate::api::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, Route};
use crate::config::GmgnConfig;
use crate::error::{Error, Result};
use crate::metrics;
use crate::models::gmgn::{
    Envelope, KlineData, RugHistory, TagWalletCount, TokenDevInfo, TokenInfo, TokenLaunchpadInfo,
    TokenLink, TokenPoolInfo, TokenSecurityInfo, TokenStats, TopBuyers, TradeHistoryPage,
    TrendingData,
};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use session::Session;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

pub use report::{gather_report_inputs, token_report};

pub const GMGN_BASE_URL: &str = "https://gmgn.ai";
const CHAIN: &str = "sol";
const WARM_UP_PATH: &str = "/defi/quotation/v1/tokens/sol";

pub type Params = Vec<(String, String)>;

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// Fail instead of falling back to the proxy.
    pub no_proxy: bool,
}

#[derive(Debug, Clone)]
pub struct TrendingQuery {
    pub time_frame: String,
    pub limit: u32,
    /// Appended after the fixed ranking parameters.
    pub extra: Params,
    pub no_proxy: bool,
}

impl Default for TrendingQuery {
    fn default() -> Self {
        Self {
            time_frame: "1h".to_string(),
            limit: 15,
            extra: Vec::new(),
            no_proxy: false,
        }
    }
}

pub struct GmgnClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    cookie_domain: String,
    clearance_url: String,
    proxy_enabled: bool,
    session: Mutex<Session>,
}

impl GmgnClient {
    pub fn new(config: &GmgnConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(
            Duration::from_secs(config.timeout_secs),
            config.proxy_url.as_deref(),
        )?;
        if !transport.has_proxy() {
            info!("No GMGN proxy configured, requests will not fall back");
        }
        Self::with_transport(config, Arc::new(transport))
    }

    pub fn with_transport(config: &GmgnConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let host = Url::parse(&base_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .ok_or_else(|| Error::ConfigError(format!("Invalid GMGN base URL: {}", base_url)))?;

        Ok(Self {
            transport,
            cookie_domain: format!(".{}", host.trim_start_matches("www.")),
            base_url,
            clearance_url: config.clearance_url.clone(),
            proxy_enabled: config.proxy_url.is_some(),
            session: Mutex::new(Session::new(&config.user_agent)),
        })
    }

    /// Snapshot of the current session.
    pub async fn session(&self) -> Session {
        self.session.lock().await.clone()
    }

    fn url(&self, path: &str, params: &Params) -> Result<String> {
        let raw = format!("{}{}", self.base_url, path);
        let url = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        };
        url.map(String::from)
            .map_err(|e| Error::InvalidInput(format!("Invalid URL {}: {}", raw, e)))
    }

    /// Unconditionally refreshes clearance using the warm-up page.
    pub async fn prepare_clearance(&self) -> Result<()> {
        let target = format!("{}{}", self.base_url, WARM_UP_PATH);
        let mut session = self.session.lock().await;
        let clearance =
            clearance::request_clearance(self.transport.as_ref(), &self.clearance_url, &target).await?;
        clearance.apply(&mut session);
        Ok(())
    }

    async fn ensure_clearance(&self, target: &str) -> Result<()> {
        let mut session = self.session.lock().await;
        if session.is_cleared() {
            return Ok(());
        }
        let clearance = clearance::request_clearance(self.transport.as_ref(), &self.clearance_url, target)
            .await
            .map_err(|e| Error::ClearanceError(format!("Failed to get initial clearance: {}", e)))?;
        clearance.apply(&mut session);
        Ok(())
    }

    /// Refreshes clearance unless another request already did so since
    /// `seen_generation`. Returns whether the session is fresh.
    async fn refresh_clearance(&self, target: &str, seen_generation: u64) -> bool {
        let mut session = self.session.lock().await;
        if session.generation() != seen_generation {
            debug!("Clearance already refreshed by a concurrent request");
            return true;
        }
        match clearance::request_clearance(self.transport.as_ref(), &self.clearance_url, target).await {
            Ok(clearance) => {
                clearance.apply(&mut session);
                true
            }
            Err(e) => {
                warn!("Clearance refresh failed: {}", e);
                false
            }
        }
    }

    /// Direct GET with the session cookies and user agent. Returns the
    /// response and the session generation it was sent with.
    async fn send_direct(&self, url: &str) -> (Result<HttpResponse>, u64) {
        let (cookie, user_agent, generation) = {
            let session = self.session.lock().await;
            (session.cookie_header(), session.user_agent().to_string(), session.generation())
        };

        let mut request = HttpRequest::get(url).header("user-agent", user_agent);
        if let Some(cookie) = cookie {
            request = request.header("cookie", cookie);
        }
        metrics::GMGN_DIRECT_REQUESTS.inc();
        (self.transport.send(request).await, generation)
    }

    /// Resilient GET: clearance, direct request, one clearance refresh on
    /// 401/403, then the proxy.
    pub async fn fetch(&self, path: &str, params: &Params, options: FetchOptions) -> Result<Value> {
        let started = Instant::now();
        let result = self.fetch_inner(path, params, options).await;
        metrics::API_LATENCY.observe(started.elapsed().as_secs_f64());
        if result.is_err() {
            metrics::API_ERRORS.inc();
        }
        result
    }

    async fn fetch_inner(&self, path: &str, params: &Params, options: FetchOptions) -> Result<Value> {
        let url = self.url(path, params)?;
        self.ensure_clearance(&url).await?;

        let mut direct_status = None;
        let (response, generation) = self.send_direct(&url).await;
        match response {
            Ok(resp) if resp.status == 200 => return resp.json(),
            Ok(resp) if resp.status == 401 || resp.status == 403 => {
                warn!("Challenge or unauthorized ({}) for {}", resp.status, url);
                direct_status = Some(resp.status);
                if self.refresh_clearance(&url, generation).await {
                    match self.send_direct(&url).await.0 {
                        Ok(retry) if retry.status == 200 => return retry.json(),
                        Ok(retry) => direct_status = Some(retry.status),
                        Err(e) => warn!("Direct retry failed for {}: {}", url, e),
                    }
                }
            }
            Ok(resp) => {
                warn!("Direct request to {} returned {}", url, resp.status);
                direct_status = Some(resp.status);
            }
            Err(e) => warn!("Direct request to {} failed: {}", url, e),
        }

        if options.no_proxy || !self.proxy_enabled {
            return Err(Error::DirectRequestFailed { status: direct_status });
        }

        debug!("Falling back to proxy for {}", url);
        metrics::GMGN_PROXY_REQUESTS.inc();
        let response = self
            .transport
            .send(HttpRequest::get(url.as_str()).via(Route::Proxy))
            .await
            .map_err(|e| Error::RequestFailed {
                status: None,
                direct_status,
                reason: format!("Failed to fetch data: {}", e),
            })?;

        if response.status != 200 {
            return Err(Error::RequestFailed {
                status: Some(response.status),
                direct_status,
                reason: "proxy request rejected".to_string(),
            });
        }

        if let Some(header) = response.header("zr-set-cookie") {
            let mut session = self.session.lock().await;
            session.merge_zr_set_cookie(header, &self.cookie_domain);
        }
        response.json()
    }

    /// [`fetch`](Self::fetch) then unwrap the `{code, msg, data}` envelope.
    pub async fn fetch_data<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
        options: FetchOptions,
    ) -> Result<T> {
        let value = self.fetch(path, params, options).await?;
        Envelope::<T>::from_value(value)?.into_data()
    }

    async fn token_endpoint<T: DeserializeOwned>(&self, prefix: &str, token_address: &str) -> Result<T> {
        let address = require_address(token_address)?;
        self.fetch_data(&format!("{}/{}", prefix, address), &Vec::new(), FetchOptions::default())
            .await
    }

    pub async fn trending(&self, query: &TrendingQuery) -> Result<TrendingData> {
        let time_frame = query.time_frame.trim();
        if time_frame.is_empty() {
            return Err(Error::InvalidInput("time_frame is required".to_string()));
        }
        let mut params: Params = vec![
            ("orderby".to_string(), "swaps".to_string()),
            ("direction".to_string(), "desc".to_string()),
            ("limit".to_string(), query.limit.to_string()),
            ("filters[]".to_string(), "not_risk".to_string()),
        ];
        params.extend(query.extra.iter().cloned());

        self.fetch_data(
            &format!("/defi/quotation/v1/rank/{}/swaps/{}", CHAIN, time_frame),
            &params,
            FetchOptions { no_proxy: query.no_proxy },
        )
        .await
    }

    pub async fn token_info(&self, token_address: &str) -> Result<TokenInfo> {
        self.token_endpoint("/api/v1/token_info/sol", token_address).await
    }

    pub async fn token_pool_info(&self, token_address: &str) -> Result<TokenPoolInfo> {
        self.token_endpoint("/api/v1/token_pool_info_sol/sol", token_address).await
    }

    pub async fn token_stats(&self, token_address: &str) -> Result<TokenStats> {
        self.token_endpoint("/defi/quotation/v1/tokens/stats/sol", token_address).await
    }

    pub async fn token_dev_info(&self, token_address: &str) -> Result<TokenDevInfo> {
        self.token_endpoint("/api/v1/token_dev_info/sol", token_address).await
    }

    pub async fn token_security_info(&self, token_address: &str) -> Result<TokenSecurityInfo> {
        self.token_endpoint("/api/v1/token_security_sol/sol", token_address).await
    }

    pub async fn token_launchpad_info(&self, token_address: &str) -> Result<TokenLaunchpadInfo> {
        self.token_endpoint("/api/v1/token_launchpad_info/sol", token_address).await
    }

    /// `maker` filters by wallet; an empty string means all makers.
    pub async fn token_trade_history(
        &self,
        token_address: &str,
        limit: u32,
        maker: &str,
    ) -> Result<TradeHistoryPage> {
        let address = require_address(token_address)?;
        let params: Params = vec![
            ("limit".to_string(), limit.to_string()),
            ("maker".to_string(), maker.trim().to_string()),
        ];
        self.fetch_data(
            &format!("/api/v1/token_trades/sol/{}", address),
            &params,
            FetchOptions::default(),
        )
        .await
    }

    pub async fn token_link(&self, token_address: &str) -> Result<TokenLink> {
        self.token_endpoint("/api/v1/token_link/sol", token_address).await
    }

    /// Candles at `resolution` between unix-second bounds; absent bounds are
    /// left to the upstream default.
    pub async fn kline(
        &self,
        token_address: &str,
        resolution: &str,
        from: Option<i64>,
        to: Option<i64>,
    ) -> Result<KlineData> {
        let address = require_address(token_address)?;
        let resolution = resolution.trim();
        if resolution.is_empty() {
            return Err(Error::InvalidInput("resolution is required".to_string()));
        }

        let mut params: Params = vec![("resolution".to_string(), resolution.to_string())];
        if let Some(from) = from {
            params.push(("from".to_string(), from.to_string()));
        }
        if let Some(to) = to {
            params.push(("to".to_string(), to.to_string()));
        }
        self.fetch_data(
            &format!("/api/v1/token_kline/sol/{}", address),
            &params,
            FetchOptions::default(),
        )
        .await
    }

    pub async fn kline_between(
        &self,
        token_address: &str,
        resolution: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<KlineData> {
        self.kline(token_address, resolution, Some(from.timestamp()), Some(to.timestamp()))
            .await
    }

    pub async fn top_buyers(&self, token_address: &str) -> Result<TopBuyers> {
        self.token_endpoint("/defi/quotation/v1/tokens/top_buyers/sol", token_address).await
    }

    pub async fn rug_history(&self, token_address: &str) -> Result<RugHistory> {
        self.token_endpoint("/defi/quotation/v1/tokens/rug_history/sol", token_address).await
    }

    pub async fn tag_wallet_count(&self, token_address: &str) -> Result<TagWalletCount> {
        self.token_endpoint("/defi/quotation/v1/tokens/tag_wallet_count/sol", token_address).await
    }
}

fn require_address(token_address: &str) -> Result<&str> {
    let address = token_address.trim();
    if address.is_empty() {
        return Err(Error::InvalidInput("token_address is required".to_string()));
    }
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::{Method, MockHttpTransport};
    use crate::tests::common::{clearance_ok, envelope, test_gmgn_config};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn is_clearance(req: &HttpRequest) -> bool {
        req.method == Method::Post
    }

    fn is_direct(req: &HttpRequest) -> bool {
        req.method == Method::Get && req.route == Route::Direct
    }

    fn is_proxy(req: &HttpRequest) -> bool {
        req.method == Method::Get && req.route == Route::Proxy
    }

    fn client(mock: MockHttpTransport, with_proxy: bool) -> GmgnClient {
        let mut config = test_gmgn_config();
        if !with_proxy {
            config.proxy_url = None;
        }
        GmgnClient::with_transport(&config, Arc::new(mock)).unwrap()
    }

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    /// Yields before answering so concurrent fetches interleave. The first
    /// `challenged` direct GETs get a 403.
    struct YieldingTransport {
        challenged: usize,
        posts: AtomicUsize,
        directs: AtomicUsize,
        proxies: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl HttpTransport for YieldingTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            tokio::task::yield_now().await;
            if is_clearance(&request) {
                self.posts.fetch_add(1, Ordering::SeqCst);
                Ok(clearance_ok())
            } else if is_direct(&request) {
                if self.directs.fetch_add(1, Ordering::SeqCst) < self.challenged {
                    Ok(HttpResponse::new(403, "challenge"))
                } else {
                    Ok(envelope(json!({"symbol": "BONK"})))
                }
            } else {
                self.proxies.fetch_add(1, Ordering::SeqCst);
                Ok(HttpResponse::new(502, "bad gateway"))
            }
        }
    }

    #[tokio::test]
    async fn test_direct_success_never_uses_proxy() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(is_clearance)
            .times(1)
            .returning(|_| Ok(clearance_ok()));
        mock.expect_send()
            .withf(|req| {
                is_direct(req)
                    && req.header_value("cookie") == Some("cf_clearance=tok")
                    && req.header_value("user-agent") == Some("Solver/1.0")
            })
            .times(1)
            .returning(|_| Ok(envelope(json!({"symbol": "BONK", "decimals": 5}))));
        mock.expect_send().withf(is_proxy).times(0);

        let client = client(mock, true);
        let info = client.token_info("mint1").await.unwrap();
        assert_eq!(info.symbol.as_deref(), Some("BONK"));
        assert!(client.session().await.is_cleared());
    }

    #[tokio::test]
    async fn test_forbidden_refreshes_clearance_once_then_retries() {
        let clearances = counter();
        let directs = counter();
        let mut mock = MockHttpTransport::new();

        let seen = clearances.clone();
        mock.expect_send()
            .withf(is_clearance)
            .times(2)
            .returning(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(clearance_ok())
            });
        let seen = directs.clone();
        mock.expect_send()
            .withf(is_direct)
            .times(2)
            .returning(move |_| {
                if seen.fetch_add(1, Ordering::SeqCst) == 0 {
                    Ok(HttpResponse::new(403, "challenge"))
                } else {
                    Ok(envelope(json!({"signal_count": 3})))
                }
            });
        mock.expect_send().withf(is_proxy).times(0);

        let client = client(mock, true);
        let stats = client.token_stats("mint1").await.unwrap();
        assert_eq!(stats.signal_count, Some(3));
        // initial clearance plus exactly one refresh
        assert_eq!(clearances.load(Ordering::SeqCst), 2);
        assert_eq!(directs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_challenges_share_one_refresh() {
        let transport = Arc::new(YieldingTransport {
            challenged: 3,
            posts: AtomicUsize::new(0),
            directs: AtomicUsize::new(0),
            proxies: AtomicUsize::new(0),
        });
        let client = GmgnClient::with_transport(&test_gmgn_config(), transport.clone()).unwrap();

        let (a, b, c) = tokio::join!(
            client.token_info("mint1"),
            client.token_info("mint2"),
            client.token_info("mint3"),
        );
        for info in [a, b, c] {
            assert_eq!(info.unwrap().symbol.as_deref(), Some("BONK"));
        }

        // initial clearance plus a single refresh for all three challenges
        assert_eq!(transport.posts.load(Ordering::SeqCst), 2);
        assert_eq!(transport.directs.load(Ordering::SeqCst), 6);
        assert_eq!(transport.proxies.load(Ordering::SeqCst), 0);
        assert_eq!(client.session().await.generation(), 2);
    }

    #[tokio::test]
    async fn test_proxy_fallback_merges_zr_set_cookie() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(is_clearance)
            .times(2)
            .returning(|_| Ok(clearance_ok()));
        mock.expect_send()
            .withf(is_direct)
            .times(2)
            .returning(|_| Ok(HttpResponse::new(403, "challenge")));
        mock.expect_send()
            .withf(is_proxy)
            .times(1)
            .returning(|_| {
                Ok(envelope(json!({"rug_ratio": "0.1"}))
                    .with_header("Zr-Set-Cookie", "__cf_bm=fresh; Path=/; HttpOnly"))
            });

        let client = client(mock, true);
        let rug = client.rug_history("mint1").await.unwrap();
        assert_eq!(rug.rug_ratio.as_deref(), Some("0.1"));

        let session = client.session().await;
        let cookie = session.cookie("__cf_bm").unwrap();
        assert_eq!(cookie.value, "fresh");
        assert_eq!(cookie.domain, ".gmgn.ai");
        assert_eq!(cookie.path, "/");
    }

    #[tokio::test]
    async fn test_no_proxy_fails_with_direct_status() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(is_clearance)
            .times(1)
            .returning(|_| Ok(clearance_ok()));
        mock.expect_send()
            .withf(is_direct)
            .times(1)
            .returning(|_| Ok(HttpResponse::new(500, "oops")));
        mock.expect_send().withf(is_proxy).times(0);

        let client = client(mock, true);
        let query = TrendingQuery { no_proxy: true, ..Default::default() };
        let err = client.trending(&query).await.unwrap_err();
        assert!(matches!(err, Error::DirectRequestFailed { status: Some(500) }));
    }

    #[tokio::test]
    async fn test_missing_proxy_config_fails_without_fallback() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(is_clearance)
            .times(1)
            .returning(|_| Ok(clearance_ok()));
        mock.expect_send()
            .withf(is_direct)
            .times(1)
            .returning(|_| Err(Error::NetworkError("connection reset".to_string())));
        mock.expect_send().withf(is_proxy).times(0);

        let client = client(mock, false);
        let err = client.token_link("mint1").await.unwrap_err();
        assert!(matches!(err, Error::DirectRequestFailed { status: None }));
    }

    #[tokio::test]
    async fn test_proxy_failure_keeps_both_statuses() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(is_clearance)
            .times(1)
            .returning(|_| Ok(clearance_ok()));
        mock.expect_send()
            .withf(is_direct)
            .times(1)
            .returning(|_| Ok(HttpResponse::new(429, "slow down")));
        mock.expect_send()
            .withf(is_proxy)
            .times(1)
            .returning(|_| Ok(HttpResponse::new(502, "bad gateway")));

        let client = client(mock, true);
        match client.top_buyers("mint1").await.unwrap_err() {
            Error::RequestFailed { status, direct_status, .. } => {
                assert_eq!(status, Some(502));
                assert_eq!(direct_status, Some(429));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_initial_clearance_failure() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(is_clearance)
            .times(1)
            .returning(|_| Ok(HttpResponse::new(503, "solver busy")));
        mock.expect_send().withf(|req| req.method == Method::Get).times(0);

        let client = client(mock, true);
        let err = client.token_security_info("mint1").await.unwrap_err();
        assert!(matches!(err, Error::ClearanceError(_)));
    }

    #[tokio::test]
    async fn test_non_json_success_does_not_fall_back() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(is_clearance)
            .times(1)
            .returning(|_| Ok(clearance_ok()));
        mock.expect_send()
            .withf(is_direct)
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, "<html>just a moment</html>")));
        mock.expect_send().withf(is_proxy).times(0);

        let client = client(mock, true);
        let err = client.token_dev_info("mint1").await.unwrap_err();
        assert!(matches!(err, Error::ApiInvalidFormat(_)));
    }

    #[tokio::test]
    async fn test_envelope_error_code() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(is_clearance)
            .times(1)
            .returning(|_| Ok(clearance_ok()));
        mock.expect_send()
            .withf(is_direct)
            .times(1)
            .returning(|_| {
                Ok(HttpResponse::new(200, json!({"code": 40001, "msg": "token not found"}).to_string()))
            });

        let client = client(mock, true);
        let err = client.token_pool_info("mint1").await.unwrap_err();
        assert!(matches!(err, Error::ApiError(_)));
    }

    #[tokio::test]
    async fn test_blank_address_makes_no_request() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send().times(0);

        let client = client(mock, true);
        tokio_test::assert_err!(client.token_info("  ").await);
        tokio_test::assert_err!(client.token_trade_history("", 10, "").await);
        tokio_test::assert_err!(client.kline("mint1", " ", None, None).await);
        let query = TrendingQuery { time_frame: String::new(), ..Default::default() };
        tokio_test::assert_err!(client.trending(&query).await);
    }

    #[tokio::test]
    async fn test_query_parameters() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(is_clearance)
            .times(1)
            .returning(|_| Ok(clearance_ok()));
        mock.expect_send()
            .withf(|req| {
                is_direct(req)
                    && req.url
                        == "https://gmgn.ai/api/v1/token_kline/sol/mint1?resolution=5m&from=1700000000&to=1700014400"
            })
            .times(1)
            .returning(|_| Ok(envelope(json!({"list": []}))));
        mock.expect_send()
            .withf(|req| {
                is_direct(req)
                    && req.url == "https://gmgn.ai/api/v1/token_trades/sol/mint1?limit=20&maker="
            })
            .times(1)
            .returning(|_| Ok(envelope(json!({"history": []}))));

        let client = client(mock, true);
        let from = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let to = DateTime::<Utc>::from_timestamp(1_700_014_400, 0).unwrap();
        let kline = client.kline_between("mint1", "5m", from, to).await.unwrap();
        assert!(kline.list.is_empty());

        let trades = client.token_trade_history("mint1", 20, "").await.unwrap();
        assert!(trades.history.is_empty());
    }

    #[tokio::test]
    async fn test_trending_parameters() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(is_clearance)
            .times(1)
            .returning(|_| Ok(clearance_ok()));
        mock.expect_send()
            .withf(|req| {
                is_direct(req)
                    && req.url.starts_with("https://gmgn.ai/defi/quotation/v1/rank/sol/swaps/6h?")
                    && req.url.contains("orderby=swaps")
                    && req.url.contains("direction=desc")
                    && req.url.contains("limit=5")
                    && req.url.contains("not_risk")
                    && req.url.ends_with("min_liquidity=1000")
            })
            .times(1)
            .returning(|_| Ok(envelope(json!({"rank": [{"symbol": "WIF", "swaps": 1200}]}))));

        let client = client(mock, true);
        let query = TrendingQuery {
            time_frame: "6h".to_string(),
            limit: 5,
            extra: vec![("min_liquidity".to_string(), "1000".to_string())],
            no_proxy: false,
        };
        let trending = client.trending(&query).await.unwrap();
        assert_eq!(trending.rank.len(), 1);
        assert_eq!(trending.rank[0].swaps, Some(1200));
    }

    #[tokio::test]
    async fn test_prepare_clearance_targets_warm_up_page() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(|req| {
                is_clearance(req)
                    && req.body.as_ref().map(|b| b["url"] == "https://gmgn.ai/defi/quotation/v1/tokens/sol")
                        == Some(true)
            })
            .times(1)
            .returning(|_| Ok(clearance_ok()));

        let client = client(mock, true);
        client.prepare_clearance().await.unwrap();
        assert_eq!(client.session().await.generation(), 1);
    }
}
