use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default = "root_path")]
    pub path: String,
}

fn root_path() -> String {
    "/".to_string()
}

/// Cookie jar and browser identity shared by every GMGN request of a client.
#[derive(Debug, Clone)]
pub struct Session {
    cookies: BTreeMap<String, Cookie>,
    user_agent: String,
    cleared: bool,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

impl Session {
    pub fn new(user_agent: &str) -> Self {
        Self {
            cookies: BTreeMap::new(),
            user_agent: user_agent.to_string(),
            cleared: false,
            generation: 0,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn set_user_agent(&mut self, user_agent: &str) {
        self.user_agent = user_agent.to_string();
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// Bumped on every successful clearance so callers can tell whether
    /// someone else already refreshed while they waited on the lock.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mark_cleared(&mut self) {
        self.cleared = true;
        self.generation += 1;
    }

    pub fn cookie(&self, name: &str) -> Option<&Cookie> {
        self.cookies.get(name)
    }

    /// Inserts or overrides the cookie with the same name.
    pub fn set_cookie(&mut self, cookie: Cookie) {
        self.cookies.insert(cookie.name.clone(), cookie);
    }

    /// `Cookie` header value, or `None` for an empty jar.
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .values()
                .map(|c| format!("{}={}", c.name, c.value))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Stores the cookie carried by a proxy `Zr-Set-Cookie` header under
    /// `domain` with path `/`. Returns whether anything was stored.
    pub fn merge_zr_set_cookie(&mut self, header: &str, domain: &str) -> bool {
        match parse_set_cookie(header) {
            Some((name, value)) => {
                debug!("Set cookie: {}={}", name, value);
                self.set_cookie(Cookie {
                    name,
                    value,
                    domain: domain.to_string(),
                    path: root_path(),
                });
                true
            }
            None => false,
        }
    }
}

/// First `name=value` pair of a `Set-Cookie` style string.
pub fn parse_set_cookie(header: &str) -> Option<(String, String)> {
    let main = header.split(';').next()?.trim();
    let (name, value) = main.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}
