//! Configuration error types.

/// Errors that can occur when parsing or validating a scene configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("failed to parse scene config: {0}")]
    Parse(#[source] serde_json::Error),

    /// The scene has no rings, so nothing can orbit.
    #[error("scene config has no rings")]
    NoRings,

    /// A ring's radii are not a positive, ordered pair.
    #[error("ring {index}: inner radius {inner} must be positive and not exceed outer radius {outer}")]
    InvalidRing { index: usize, inner: f32, outer: f32 },

    /// A ring's body radius is not positive.
    #[error("ring {index}: body radius {radius} must be positive")]
    InvalidBodyRadius { index: usize, radius: f32 },

    /// A scalar setting that must be strictly positive is not.
    #[error("`{field}` must be positive")]
    NonPositive { field: &'static str },

    /// A scalar setting is NaN, infinite, or outside its allowed range.
    #[error("`{field}` = {value} is out of range")]
    OutOfRange { field: &'static str, value: f32 },

    /// The camera distance limits are not a positive, ordered pair.
    #[error("controls distance range [{min}, {max}] must be positive and ordered")]
    InvalidDistanceRange { min: f32, max: f32 },

    /// More stars or orbiting bodies than a scene may hold.
    #[error("`{field}` = {count} exceeds the limit of {limit}")]
    TooMany { field: &'static str, count: u64, limit: u64 },
}
