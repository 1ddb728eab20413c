//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// How clients are told apart for rate limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitMode {
    /// No limits. Used when the router is driven without a socket (tests).
    Disabled,
    /// Key on the socket peer address.
    PeerIp,
    /// Key on `X-Forwarded-For` / `X-Real-Ip` / `Forwarded`, falling back to the peer.
    BehindProxy,
}

impl RateLimitMode {
    pub fn from_proxy_flag(behind_proxy: bool) -> Self {
        if behind_proxy {
            Self::BehindProxy
        } else {
            Self::PeerIp
        }
    }
}

type Layer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

fn build<K>(key_extractor: K, replenish_secs: u64, burst: u32) -> Layer<K>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(replenish_secs)
            .burst_size(burst)
            .finish()
            .expect("rate limit periods and burst sizes are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Limiter for the JSON API.
///
/// # Limits
///
/// - **Rate**: one request replenished every 2 seconds
/// - **Burst**: 100 requests
pub fn api_layer() -> Layer<PeerIpKeyExtractor> {
    build(PeerIpKeyExtractor, 2, 100)
}

/// [`api_layer`] keyed on forwarded client addresses.
pub fn api_layer_proxied() -> Layer<SmartIpKeyExtractor> {
    build(SmartIpKeyExtractor, 2, 100)
}

/// Stricter limiter for contact form posts.
///
/// # Limits
///
/// - **Rate**: one request replenished every 10 seconds
/// - **Burst**: 5 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn contact_layer() -> Layer<PeerIpKeyExtractor> {
    build(PeerIpKeyExtractor, 10, 5)
}

/// [`contact_layer`] keyed on forwarded client addresses.
pub fn contact_layer_proxied() -> Layer<SmartIpKeyExtractor> {
    build(SmartIpKeyExtractor, 10, 5)
}
