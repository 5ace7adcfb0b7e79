//! The HAL+JSON wire shape.
//!
//! Typed projection targets for [`Resource::to_hal`](crate::Resource::to_hal),
//! using the key names the HAL convention fixes: `_links`, `_embedded`,
//! `href`, `templated`, `name`. The same types deserialize, so producers and
//! consuming clients share one shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::one_or_many::OneOrMany;

/// Media type of a HAL response body.
pub const MEDIA_TYPE: &str = "application/hal+json";

/// A link as it appears inside `_links`. The relation name keys the entry
/// and is not repeated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalLink {
    pub href: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The `_links` section: relation name to one link or an ordered list.
pub type HalLinks = BTreeMap<String, OneOrMany<HalLink>>;

/// The `_embedded` section: relation name to one sub-resource or an ordered
/// list.
pub type HalEmbedded = BTreeMap<String, OneOrMany<HalResource>>;

/// A full HAL document: `_links` first, the resource's own attributes merged
/// at the top level, `_embedded` last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalResource {
    /// Always present, even when the resource carries no links.
    #[serde(rename = "_links", default)]
    pub links: HalLinks,

    /// The resource's own attributes, spread at the top level. Keys must not
    /// collide with `_links` or `_embedded`; no collision check is made and
    /// a colliding key wins last-write at the JSON layer.
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,

    /// Present (possibly empty) when the resource has an embedded section,
    /// omitted from the output entirely when it does not.
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<HalEmbedded>,
}
