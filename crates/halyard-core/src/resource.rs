//! Resource type — the unit of a hypermedia API response.

use std::collections::BTreeMap;

use crate::error::{HalyardError, Result};
use crate::hal::{HalEmbedded, HalLinks, HalResource};
use crate::link::Link;
use crate::one_or_many::OneOrMany;
use crate::request::RequestContext;

/// Link table: relation name to one link or an ordered sequence.
pub type Links = BTreeMap<String, OneOrMany<Link>>;

/// Embed table: relation name to one sub-resource or an ordered sequence.
pub type Embedded = BTreeMap<String, OneOrMany<Resource>>;

/// A resource intended to be rendered as HAL+JSON, or as HTML by a
/// presentation layer.
///
/// A resource owns its links and embedded children by value, so the
/// embedding graph is a tree and the projection walk always terminates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resource {
    /// Links describing every action that can be taken on this resource
    /// given the current context of caller permissions and resource state,
    /// keyed by the link's relation to the resource. At minimum this should
    /// contain a `self` link (convention, not enforced).
    pub links: Links,

    /// The resource's own attributes. Anything JSON-representable; keys must
    /// avoid the reserved `_links` and `_embedded` names (caller contract,
    /// unchecked).
    pub data: serde_json::Map<String, serde_json::Value>,

    /// Embedded sub-resources. `None` means no embedded section at all,
    /// distinct from `Some` of an empty table: only the former omits
    /// `_embedded` from the HAL output.
    ///
    /// A collection resource stores its items here; a single entity can
    /// still embed related resources.
    pub embedded: Option<Embedded>,
}

/// Second argument to [`Resource::link`]: a prebuilt link used as-is, or a
/// bare href from which a link is constructed with the rel passed alongside.
#[derive(Debug, Clone)]
pub enum LinkArg {
    Link(Link),
    Href(String),
}

impl From<Link> for LinkArg {
    fn from(link: Link) -> Self {
        LinkArg::Link(link)
    }
}

impl From<String> for LinkArg {
    fn from(href: String) -> Self {
        LinkArg::Href(href)
    }
}

impl From<&str> for LinkArg {
    fn from(href: &str) -> Self {
        LinkArg::Href(href.to_string())
    }
}

impl Resource {
    /// Empty resource: no links, no data, no embedded section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource wrapping the given link table. Data starts empty and the
    /// embedded section absent; use [`field`](Resource::field) and
    /// [`embed`](Resource::embed) or a struct literal to fill them.
    #[must_use]
    pub fn with_links(links: Links) -> Self {
        Self {
            links,
            data: serde_json::Map::new(),
            embedded: None,
        }
    }

    /// Alternate constructor that populates the `self` link from the current
    /// request when the supplied table lacks one.
    ///
    /// The context is consulted only when synthesis is needed: a table that
    /// already carries `self` never fails.
    ///
    /// # Errors
    ///
    /// Returns [`HalyardError::ContextUnavailable`] if a `self` link must be
    /// synthesized and `ctx` has no request in flight.
    pub fn for_request(ctx: &impl RequestContext, mut links: Links) -> Result<Self> {
        if !links.contains_key("self") {
            let url = ctx
                .current_url()
                .ok_or(HalyardError::ContextUnavailable)?;
            links.insert("self".to_string(), OneOrMany::One(Link::new("self", url)));
        }
        Ok(Self::with_links(links))
    }

    /// Add a link under `rel`.
    ///
    /// The second argument is either a prebuilt [`Link`] or a bare href (see
    /// [`LinkArg`]); a bare href builds `Link::new(rel, href)`. A new rel
    /// stores the link alone; a second link under the same rel turns the
    /// entry into the two-element sequence `[existing, new]`; further links
    /// append in call order.
    pub fn link(&mut self, rel: impl Into<String>, link: impl Into<LinkArg>) -> &mut Self {
        let rel = rel.into();
        let link = match link.into() {
            LinkArg::Link(link) => link,
            LinkArg::Href(href) => Link::new(rel.clone(), href),
        };
        match self.links.get_mut(&rel) {
            Some(entry) => entry.push(link),
            None => {
                self.links.insert(rel, OneOrMany::One(link));
            }
        }
        self
    }

    /// Embed a sub-resource under `rel`, materializing the embedded section
    /// on first use. Same single-to-sequence policy as
    /// [`link`](Resource::link).
    pub fn embed(&mut self, rel: impl Into<String>, resource: Resource) -> &mut Self {
        let rel = rel.into();
        let table = self.embedded.get_or_insert_with(Embedded::new);
        match table.get_mut(&rel) {
            Some(entry) => entry.push(resource),
            None => {
                table.insert(rel, OneOrMany::One(resource));
            }
        }
        self
    }

    /// Set one attribute in the data bag.
    pub fn field(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> &mut Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Convert this resource to its Hypertext Application Language shape.
    ///
    /// Pure and recomputed on every call — nothing is memoized, so callers
    /// needing the projection repeatedly should keep the result. The walk is
    /// depth-first: each embedded resource contributes its own `to_hal`.
    #[must_use]
    pub fn to_hal(&self) -> HalResource {
        let links: HalLinks = self
            .links
            .iter()
            .map(|(rel, entry)| (rel.clone(), entry.map(Link::to_hal)))
            .collect();

        let embedded: Option<HalEmbedded> = self.embedded.as_ref().map(|table| {
            table
                .iter()
                .map(|(rel, entry)| (rel.clone(), entry.map(Resource::to_hal)))
                .collect()
        });

        HalResource {
            links,
            data: self.data.clone(),
            embedded,
        }
    }

    /// Serialize the HAL projection to a JSON string — the response body for
    /// [`MEDIA_TYPE`](crate::hal::MEDIA_TYPE).
    ///
    /// # Errors
    ///
    /// Returns [`HalyardError::Serialization`] if the projection cannot be
    /// serialized.
    pub fn to_hal_json(&self) -> Result<String> {
        serde_json::to_string(&self.to_hal())
            .map_err(|e| HalyardError::Serialization(e.to_string()))
    }
}
