//! Retry classification and delay computation.

use std::time::Duration;

use chrono::{DateTime, Utc};
use increase_types::BackoffConfig;
use rand::Rng;

use crate::transport::HttpResponse;

/// Longest server-suggested delay that is honored.
pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(60);

/// Whether `resp` should be retried.
///
/// An `x-should-retry: true|false` header wins. Otherwise 408, 409, 429 and
/// 5xx statuses are retried.
#[must_use]
pub fn should_retry(resp: &HttpResponse) -> bool {
    match resp.header("x-should-retry").map(str::trim) {
        Some("true") => return true,
        Some("false") => return false,
        _ => {}
    }
    matches!(resp.status, 408 | 409 | 429) || resp.status >= 500
}

/// Server-suggested delay from `retry-after-ms` or `retry-after`.
///
/// `retry-after` may be a number of seconds or an HTTP date. Suggestions
/// outside `(0, 60s]` are ignored.
#[must_use]
pub fn retry_after(resp: &HttpResponse, now: DateTime<Utc>) -> Option<Duration> {
    let from_ms = resp
        .header("retry-after-ms")
        .and_then(|v| v.trim().parse::<f64>().ok())
        .map(|ms| ms / 1000.0);
    let secs = from_ms.or_else(|| {
        let raw = resp.header("retry-after")?.trim();
        raw.parse::<f64>().ok().or_else(|| {
            let at = DateTime::parse_from_rfc2822(raw).ok()?;
            let delta = at.with_timezone(&Utc) - now;
            Some(delta.num_milliseconds() as f64 / 1000.0)
        })
    })?;
    if !secs.is_finite() || secs <= 0.0 || secs > MAX_RETRY_AFTER.as_secs_f64() {
        return None;
    }
    Some(Duration::from_secs_f64(secs))
}

/// Undithered delay before retry number `attempt` (0-based).
#[must_use]
pub fn backoff_base(cfg: &BackoffConfig, attempt: u32) -> Duration {
    let factor = u64::from(cfg.factor.max(1));
    let ms = cfg
        .min_backoff_ms
        .saturating_mul(factor.saturating_pow(attempt))
        .min(cfg.max_backoff_ms);
    Duration::from_millis(ms)
}

/// Delay before retry number `attempt`, reduced by up to `jitter_percent`.
#[must_use]
pub fn backoff_delay(cfg: &BackoffConfig, attempt: u32) -> Duration {
    let base_ms = u64::try_from(backoff_base(cfg, attempt).as_millis()).unwrap_or(u64::MAX);
    let jitter_ms = base_ms.saturating_mul(u64::from(cfg.jitter_percent.min(100))) / 100;
    if jitter_ms == 0 {
        return Duration::from_millis(base_ms);
    }
    let mut rng = rand::rng();
    Duration::from_millis(base_ms - rng.random_range(0..=jitter_ms))
}

/// Delay before the next attempt, preferring the server's suggestion.
#[must_use]
pub fn next_delay(
    cfg: &BackoffConfig,
    attempt: u32,
    resp: Option<&HttpResponse>,
    now: DateTime<Utc>,
) -> Duration {
    resp.and_then(|r| retry_after(r, now))
        .unwrap_or_else(|| backoff_delay(cfg, attempt))
}
