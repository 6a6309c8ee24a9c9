use prometheus::core::Collector;
use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref DEXSCREENER_REQUESTS: IntCounter = IntCounter::new(
        "dexscreener_requests_total",
        "Total number of DexScreener API calls"
    ).expect("valid metric");

    pub static ref GMGN_DIRECT_REQUESTS: IntCounter = IntCounter::new(
        "gmgn_direct_requests_total",
        "Total number of direct GMGN requests"
    ).expect("valid metric");

    pub static ref GMGN_PROXY_REQUESTS: IntCounter = IntCounter::new(
        "gmgn_proxy_requests_total",
        "Total number of GMGN requests sent through the proxy"
    ).expect("valid metric");

    pub static ref CLEARANCE_REFRESHES: IntCounter = IntCounter::new(
        "gmgn_clearance_refreshes_total",
        "Total number of clearance cookie refresh attempts"
    ).expect("valid metric");

    pub static ref API_ERRORS: IntCounter = IntCounter::new(
        "api_errors_total",
        "Total number of failed API calls"
    ).expect("valid metric");

    pub static ref API_LATENCY: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "api_latency_seconds",
            "API call latency in seconds"
        ).buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0])
    ).expect("valid metric");
}

fn collectors() -> Vec<Box<dyn Collector>> {
    vec![
        Box::new(DEXSCREENER_REQUESTS.clone()),
        Box::new(GMGN_DIRECT_REQUESTS.clone()),
        Box::new(GMGN_PROXY_REQUESTS.clone()),
        Box::new(CLEARANCE_REFRESHES.clone()),
        Box::new(API_ERRORS.clone()),
        Box::new(API_LATENCY.clone()),
    ]
}

/// Registers every collector with [`REGISTRY`]. Safe to call more than once.
pub fn init() -> Result<(), prometheus::Error> {
    for collector in collectors() {
        match REGISTRY.register(collector) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Text exposition of everything registered.
pub fn render() -> Result<String, prometheus::Error> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent_and_renders() {
        init().unwrap();
        init().unwrap();
        DEXSCREENER_REQUESTS.inc();
        let text = render().unwrap();
        assert!(text.contains("dexscreener_requests_total"));
        assert!(text.contains("gmgn_clearance_refreshes_total"));
    }
}
