mod common;

use chrono::{TimeZone, Utc};
use common::{clearance_response, create_test_gmgn_config, envelope, kline_list, ScriptedTransport};
use serde_json::json;
use std::sync::Arc;
use token_intel::api::gmgn::gather_report_inputs;
use token_intel::api::transport::{HttpRequest, HttpResponse, Method, Route};
use token_intel::api::GmgnClient;
use token_intel::config::ReportConfig;
use token_intel::models::gmgn::{KlineData, TokenInfo};
use token_intel::report::{render, ReportInputs};

const NOW: i64 = 1_700_000_000;

#[test]
fn test_all_absent_report_is_placeholders_only() {
    let now = Utc.timestamp_opt(NOW, 0).unwrap();
    let md = render(&ReportInputs::new(now));

    assert!(md.starts_with("# Token Analysis Report for Unknown Token"));
    assert!(!md.contains("N/A"));
    assert!(!md.contains("$"));

    // every section body is a single "No ..." line
    for block in md.split("\n\n").filter(|b| b.starts_with("### ")) {
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 2, "unexpected section body: {}", block);
        assert!(lines[1].starts_with("No "), "not a placeholder: {}", block);
    }
    assert_eq!(md.matches("### ").count(), 13);
}

#[test]
fn test_report_with_kline_data() {
    let now = Utc.timestamp_opt(NOW, 0).unwrap();
    let mut inputs = ReportInputs::new(now);
    inputs.token_info = Some(TokenInfo {
        symbol: Some("BONK".to_string()),
        name: Some("Bonk".to_string()),
        holder_count: Some(1200),
        ..Default::default()
    });

    let falling = kline_list(NOW - 30 * 14400, 14400, 30, |i| 2.0 - i as f64 * 0.05);
    inputs.long_kline = Some(serde_json::from_value::<KlineData>(falling).unwrap());

    let md = render(&inputs);
    assert!(md.starts_with("# Token Analysis Report for BONK"));
    assert!(md.contains("- **Holder Count**: 1200"));
    assert!(md.contains("### Price Chart Analysis (5m)\nNo price data available."));

    let long = md
        .split("## Long-term Analysis (4h)")
        .nth(1)
        .unwrap();
    assert!(long.contains("- **Trend Direction**: Downtrend 📉"));
    assert!(long.contains("- **RSI (14)**: 0.00 (Oversold)"));
    assert!(long.contains("- **Number of Candles**: 30"));
    assert!(long.contains("Time | Open | High | Low | Close | Volume | Type"));
}

#[tokio::test]
async fn test_gather_through_proxy_fallback() {
    let transport = Arc::new(ScriptedTransport::new(|req: &HttpRequest| {
        if req.method == Method::Post {
            return Ok(clearance_response());
        }
        if req.route == Route::Direct {
            return Ok(HttpResponse::new(403, "challenge"));
        }
        let data = if req.url.contains("/api/v1/token_info/") {
            json!({"symbol": "POPCAT", "name": "Popcat"})
        } else if req.url.contains("/token_kline/") {
            kline_list(NOW - 48 * 300, 300, 48, |i| 1.0 + (i % 7) as f64 * 0.01)
        } else if req.url.contains("/token_trades/") {
            json!({"history": [{"maker": "Maker1111111", "event": "sell", "timestamp": NOW - 60,
                                "amount_usd": "42.5", "base_amount": 10, "quote_amount": 0.25,
                                "price_usd": 4.25, "maker_tags": [], "maker_token_tags": []}]})
        } else {
            return Ok(HttpResponse::new(500, "upstream error"));
        };
        Ok(envelope(data).with_header("Zr-Set-Cookie", "__cf_bm=proxy; Path=/"))
    }));

    let client = GmgnClient::with_transport(&create_test_gmgn_config(), transport.clone()).unwrap();
    let now = Utc.timestamp_opt(NOW, 0).unwrap();
    let inputs = gather_report_inputs(&client, "mint1", &ReportConfig::default(), now)
        .await
        .unwrap();

    assert_eq!(inputs.symbol(), "POPCAT");
    assert!(inputs.short_kline.is_some());
    assert!(inputs.long_kline.is_some());
    assert!(inputs.stats.is_none());
    assert_eq!(transport.count(Route::Proxy, Method::Get), 13);
    assert_eq!(transport.count(Route::Direct, Method::Get), 26);

    let session = client.session().await;
    assert_eq!(session.cookie("__cf_bm").map(|c| c.value.as_str()), Some("proxy"));

    let md = render(&inputs);
    assert!(md.contains("- **SELL** by `Maker111...`"));
    assert!(md.contains("  - Time: 1 minutes ago"));
    assert!(md.contains("### Trading Statistics\nNo trading statistics available."));
}
