use thiserror::Error;

/// Reasons a controller declines to build.
///
/// None of these are fatal to the host page: the front-end logs them and
/// leaves the static markup in place.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrbitError {
    #[error("no orbit items to animate")]
    NoItems,
    #[error("fallback ring `{0}` is not configured")]
    UnknownFallbackRing(String),
    #[error("ring `{name}` is invalid: {reason}")]
    InvalidRing { name: String, reason: &'static str },
    #[error("parameter `{name}` has invalid value {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
