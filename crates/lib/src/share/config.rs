//! Where share links point.

use serde::{Deserialize, Serialize};
use url::Url;

use super::ShareError;

/// Origin used when nothing else is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";

/// Route of the builder page, relative to the origin.
pub const DEFAULT_ROUTE: &str = "builder";

/// Longest share link considered safe to pass around.
///
/// Links carry the form in the fragment, which browsers do not send to the
/// server and accept at far greater lengths than a path segment.
pub const MAX_URL_LENGTH: usize = 8000;

/// Settings for share link generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Scheme, host and optional port the builder is served from.
    pub origin: String,
    pub route: String,
    pub max_url_length: usize,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            route: DEFAULT_ROUTE.to_string(),
            max_url_length: MAX_URL_LENGTH,
        }
    }
}

impl ShareConfig {
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_max_url_length(mut self, max_url_length: usize) -> Self {
        self.max_url_length = max_url_length;
        self
    }

    /// Checks that the origin can be used as a link base.
    pub fn validate(&self) -> Result<(), ShareError> {
        validate_origin(&self.origin)
    }

    /// Returns true if `url` is within this configuration's length limit.
    pub fn is_url_safe(&self, url: &str) -> bool {
        super::is_url_safe_with(url, self.max_url_length)
    }
}

/// Supplies the location share links are built against.
///
/// Keeps link generation independent of any host environment.
pub trait Environment {
    /// The origin, e.g. `https://forms.example.com`.
    fn origin(&self) -> &str;

    /// The builder route under the origin.
    fn route(&self) -> &str {
        DEFAULT_ROUTE
    }
}

impl Environment for ShareConfig {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn route(&self) -> &str {
        &self.route
    }
}

/// An [`Environment`] with a fixed origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticEnvironment {
    origin: String,
}

impl StaticEnvironment {
    /// Creates an environment after checking that `origin` is a usable URL.
    pub fn new(origin: impl Into<String>) -> Result<Self, ShareError> {
        let origin = origin.into();
        validate_origin(&origin)?;
        Ok(Self { origin })
    }
}

impl Environment for StaticEnvironment {
    fn origin(&self) -> &str {
        &self.origin
    }
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

pub(crate) fn validate_origin(origin: &str) -> Result<(), ShareError> {
    let invalid = |reason: String| ShareError::InvalidOrigin {
        origin: origin.to_string(),
        reason,
    };
    let url = Url::parse(origin).map_err(|err| invalid(err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("origin cannot carry a path".to_string()));
    }
    if url.fragment().is_some() {
        return Err(invalid("origin must not contain a fragment".to_string()));
    }
    Ok(())
}
