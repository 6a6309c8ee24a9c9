use super::session::{Cookie, Session};
use crate::api::transport::{HttpRequest, HttpTransport};
use crate::error::{Error, Result};
use crate::metrics;
use log::{debug, error};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

pub const DEFAULT_CLEARANCE_URL: &str = "http://localhost:3003/cf-clearance-scraper";
const CLEARANCE_MODE: &str = "waf-session";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClearanceResponse {
    #[serde(default)]
    pub cookies: Vec<Cookie>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl ClearanceResponse {
    pub fn user_agent(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("user-agent"))
            .map(|(_, v)| v.as_str())
    }

    /// Merges the cookies and user agent into `session` and marks it cleared.
    pub fn apply(self, session: &mut Session) {
        if let Some(agent) = self.user_agent() {
            session.set_user_agent(agent);
        }
        for cookie in self.cookies {
            session.set_cookie(cookie);
        }
        session.mark_cleared();
    }
}

/// Asks the clearance service for a browser session valid for `target_url`.
pub async fn request_clearance(
    transport: &dyn HttpTransport,
    clearance_url: &str,
    target_url: &str,
) -> Result<ClearanceResponse> {
    metrics::CLEARANCE_REFRESHES.inc();
    debug!("Requesting clearance for {}", target_url);

    let request = HttpRequest::post_json(
        clearance_url,
        json!({ "url": target_url, "mode": CLEARANCE_MODE }),
    )
    .header("Cache-Control", "no-cache");

    let response = transport.send(request).await.map_err(|e| {
        error!("Error getting clearance: {}", e);
        Error::ClearanceError(e.to_string())
    })?;

    if response.status != 200 {
        error!("Failed to get clearance: {}", response.status);
        return Err(Error::ClearanceError(format!(
            "clearance service returned status {}",
            response.status
        )));
    }

    response.json::<ClearanceResponse>().map_err(|e| {
        error!("Invalid clearance response: {}", e);
        Error::ClearanceError(e.to_string())
    })
}
