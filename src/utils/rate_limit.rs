use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use log::debug;

/// Sliding-window limiter keyed by endpoint group.
#[derive(Debug, Default)]
pub struct RateLimiter {
    requests: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Waits until a slot is free for `key`, then records the request.
    pub async fn acquire(&self, key: &str, max_requests: usize, window: Duration) {
        loop {
            let wait = {
                let mut requests = self.requests.lock().await;
                let now = Instant::now();
                let history = requests.entry(key.to_string()).or_default();
                Self::cleanup(history, now, window);

                if history.len() < max_requests {
                    history.push_back(now);
                    return;
                }
                match history.front() {
                    Some(oldest) => (*oldest + window).saturating_duration_since(now),
                    None => Duration::ZERO,
                }
            };
            debug!("Rate limit reached for {}, waiting {}ms", key, wait.as_millis());
            tokio::time::sleep(wait.max(Duration::from_millis(1))).await;
        }
    }

    fn cleanup(history: &mut VecDeque<Instant>, now: Instant, window: Duration) {
        while let Some(oldest) = history.front() {
            if now.duration_since(*oldest) >= window {
                history.pop_front();
            } else {
                break;
            }
        }
    }
}
