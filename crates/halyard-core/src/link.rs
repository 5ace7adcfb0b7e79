//! Link type — a single navigational relation on a resource.

use serde::{Deserialize, Serialize};

use crate::hal::HalLink;

/// A hypermedia link: one action or navigation available on a resource.
///
/// Immutable once constructed; a [`Resource`](crate::Resource) owns its
/// links by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// The link's relation to its resource (e.g. "self", "next"). Registered
    /// rel values are not mandatory; a CURIE works where no official rel
    /// fits.
    pub rel: String,

    /// Target URI, or a URI template when `templated` is set.
    pub href: String,

    /// True if `href` is a URI template requiring substitution before use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,

    /// Disambiguates multiple links sharing a rel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Link {
    /// Create a link. Nothing is validated; non-empty `rel` and `href` are
    /// the caller's contract.
    #[must_use]
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            templated: None,
            name: None,
        }
    }

    /// Mark whether `href` is a URI template.
    #[must_use]
    pub fn templated(mut self, templated: bool) -> Self {
        self.templated = Some(templated);
        self
    }

    /// Set the disambiguating name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Project this link into its HAL shape: `href` always, `templated` and
    /// `name` only when set. The rel is not part of the object — it keys the
    /// `_links` entry.
    #[must_use]
    pub fn to_hal(&self) -> HalLink {
        HalLink {
            href: self.href.clone(),
            templated: self.templated,
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn to_hal_carries_href_only_by_default() {
        let hal = Link::new("self", "/items/1").to_hal();
        assert_eq!(
            serde_json::to_value(&hal).expect("serialize"),
            json!({ "href": "/items/1" })
        );
    }

    #[test]
    fn to_hal_includes_templated_and_name_when_set() {
        let hal = Link::new("search", "/search{?q}")
            .templated(true)
            .named("by-query")
            .to_hal();
        assert_eq!(
            serde_json::to_value(&hal).expect("serialize"),
            json!({ "href": "/search{?q}", "templated": true, "name": "by-query" })
        );
    }

    #[test]
    fn link_serialization_roundtrip() {
        let link = Link::new("next", "/items/2").named("paging");

        let json = serde_json::to_string(&link).expect("serialize");
        let deserialized: Link = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(link, deserialized);
    }

    #[test]
    fn structural_serialization_keeps_the_rel() {
        // Unlike the HAL projection, the link's own serialization carries
        // rel, so links can live in declarative tables.
        let json = serde_json::to_value(Link::new("prev", "/items/0")).expect("serialize");
        assert_eq!(json, json!({ "rel": "prev", "href": "/items/0" }));
    }
}
