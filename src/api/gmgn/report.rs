use super::GmgnClient;
use crate::config::ReportConfig;
use crate::error::{Error, Result};
use crate::report::{self, ReportInputs};
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::fmt::Display;

fn settle<T, E: Display>(source: &str, result: std::result::Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{} unavailable for report: {}", source, e);
            None
        }
    }
}

/// Fetches every report source concurrently. Individual failures leave the
/// matching field empty; only a blank address fails the whole call.
pub async fn gather_report_inputs(
    client: &GmgnClient,
    token_address: &str,
    config: &ReportConfig,
    now: DateTime<Utc>,
) -> Result<ReportInputs> {
    let address = token_address.trim();
    if address.is_empty() {
        return Err(Error::InvalidInput("token_address is required".to_string()));
    }

    if let Err(e) = client.prepare_clearance().await {
        warn!("Clearance warm-up failed: {}", e);
    }

    let to = now.timestamp();
    let short_from = to - config.short_window_secs;
    let long_from = to - config.long_window_secs;

    let (
        token_info,
        pool_info,
        stats,
        dev_info,
        security_info,
        launchpad_info,
        links,
        wallet_count,
        top_buyers,
        rug_history,
        trade_history,
        short_kline,
        long_kline,
    ) = tokio::join!(
        client.token_info(address),
        client.token_pool_info(address),
        client.token_stats(address),
        client.token_dev_info(address),
        client.token_security_info(address),
        client.token_launchpad_info(address),
        client.token_link(address),
        client.tag_wallet_count(address),
        client.top_buyers(address),
        client.rug_history(address),
        client.token_trade_history(address, config.trade_limit, ""),
        client.kline(address, &config.short_resolution, Some(short_from), Some(to)),
        client.kline(address, &config.long_resolution, Some(long_from), Some(to)),
    );

    let inputs = ReportInputs {
        token_info: settle("token info", token_info),
        pool_info: settle("pool info", pool_info),
        stats: settle("token stats", stats),
        dev_info: settle("dev info", dev_info),
        security_info: settle("security info", security_info),
        launchpad_info: settle("launchpad info", launchpad_info),
        links: settle("token links", links),
        wallet_count: settle("tag wallet count", wallet_count),
        top_buyers: settle("top buyers", top_buyers),
        rug_history: settle("rug history", rug_history),
        trade_history: settle("trade history", trade_history),
        short_kline: settle("short-term kline", short_kline),
        long_kline: settle("long-term kline", long_kline),
        short_resolution: config.short_resolution.clone(),
        long_resolution: config.long_resolution.clone(),
        generated_at: now,
    };
    Ok(inputs)
}

/// Gathers and renders the full markdown report for `token_address`.
pub async fn token_report(client: &GmgnClient, token_address: &str, config: &ReportConfig) -> Result<String> {
    let now = Utc::now();
    let inputs = gather_report_inputs(client, token_address, config, now).await?;
    info!("Rendering report for {}", inputs.symbol());
    Ok(report::render(&inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::{HttpRequest, HttpResponse, Method, MockHttpTransport, Route};
    use crate::tests::common::{clearance_ok, envelope, test_gmgn_config};
    use chrono::TimeZone;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_partial_failures_become_absent_sections() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(|req: &HttpRequest| req.method == Method::Post)
            .returning(|_| Ok(clearance_ok()));
        mock.expect_send()
            .withf(|req: &HttpRequest| req.route == Route::Direct && req.method == Method::Get)
            .returning(|req| {
                if req.url.contains("/api/v1/token_info/") {
                    Ok(envelope(json!({"symbol": "WIF", "name": "dogwifhat"})))
                } else if req.url.contains("/token_kline/") && req.url.contains("resolution=5m") {
                    assert!(req.url.contains("from=1699985600"));
                    assert!(req.url.contains("to=1700000000"));
                    Ok(envelope(json!({"list": []})))
                } else {
                    Ok(HttpResponse::new(404, "not found"))
                }
            });

        let mut config = test_gmgn_config();
        config.proxy_url = None;
        let client = GmgnClient::with_transport(&config, Arc::new(mock)).unwrap();
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        let inputs = gather_report_inputs(&client, "mint1", &ReportConfig::default(), now)
            .await
            .unwrap();
        assert_eq!(inputs.symbol(), "WIF");
        assert!(inputs.short_kline.is_some());
        assert!(inputs.long_kline.is_none());
        assert!(inputs.pool_info.is_none());
        assert!(inputs.trade_history.is_none());

        let md = report::render(&inputs);
        assert!(md.starts_with("# Token Analysis Report for WIF"));
        assert!(md.contains("No candlestick data available."));
        assert!(md.contains("### Pool Information\nNo pool data available."));
    }

    #[tokio::test]
    async fn test_blank_address_rejected() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send().times(0);
        let client = GmgnClient::with_transport(&test_gmgn_config(), Arc::new(mock)).unwrap();

        let err = gather_report_inputs(&client, " ", &ReportConfig::default(), Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
