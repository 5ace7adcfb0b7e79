//! # halyard-html
//!
//! HTML rendering for hypermedia links: project a
//! [`Link`](halyard_core::Link) into an `<a>` element the way a template
//! filter would, without binding to any one templating engine.
//!
//! - [`Anchor`] — one-shot builder for the anchor element
//! - [`Rendered`] — pre-escaped "safe" vs plain output duality
//! - [`attrs`] — HTML attribute serialization

pub mod anchor;
pub mod attrs;

pub use anchor::{Anchor, Rendered};
pub use attrs::{render_attrs, AttrValue, Attrs};
