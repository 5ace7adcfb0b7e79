//! Ambient request context for `self` link synthesis.

/// The one capability [`Resource::for_request`](crate::Resource::for_request)
/// needs from the host web framework.
///
/// Passed explicitly rather than read from framework-global state, so
/// resources stay constructible (and testable) without a live server.
pub trait RequestContext {
    /// Absolute URL of the in-flight request, or `None` outside one.
    fn current_url(&self) -> Option<String>;
}

/// A fixed-URL context for tests and callers that already know their
/// absolute URL. [`RequestUrl::none`] models "no request in flight".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestUrl {
    url: Option<String>,
}

impl RequestUrl {
    /// Context reporting the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// Context with no request in flight.
    #[must_use]
    pub fn none() -> Self {
        Self { url: None }
    }
}

impl RequestContext for RequestUrl {
    fn current_url(&self) -> Option<String> {
        self.url.clone()
    }
}
