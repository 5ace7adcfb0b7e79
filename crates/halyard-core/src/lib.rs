//! # halyard-core
//!
//! Hypermedia resource model and HAL+JSON projection.
//!
//! This crate defines the types a hypermedia-driven HTTP API builds its
//! responses from:
//! - [`Resource`] — the unit of API response: links, data, embedded sub-resources
//! - [`Link`] — a single navigational relation
//! - [`OneOrMany`] — the one-value-or-ordered-sequence union HAL collapses
//! - The HAL wire shape ([`HalResource`], [`HalLink`], [`MEDIA_TYPE`])
//! - [`RequestContext`] — ambient request URL for `self` link synthesis
//! - Error type ([`HalyardError`])

pub mod error;
pub mod hal;
pub mod link;
pub mod one_or_many;
pub mod request;
pub mod resource;

pub use error::{HalyardError, Result};
pub use hal::{HalEmbedded, HalLink, HalLinks, HalResource, MEDIA_TYPE};
pub use link::Link;
pub use one_or_many::OneOrMany;
pub use request::{RequestContext, RequestUrl};
pub use resource::{Embedded, LinkArg, Links, Resource};
