//! Link-to-anchor rendering.
//!
//! The template-filter contract: given a resource link, render
//! `<a href=.. rel=..>content</a>`, defaulting `href` and `rel` from the
//! link and letting the caller override or extend them.

use halyard_core::Link;
use maud::{Markup, PreEscaped, Render};

use crate::attrs::{escape_into, render_attrs, AttrValue, Attrs};

type ContentFn<'a> = Box<dyn FnOnce(&Link) -> Markup + 'a>;

/// One-shot builder for an anchor element.
///
/// An absent link renders to the empty string rather than erroring, so
/// optional links can be passed straight through from lookup results.
///
/// ```
/// use halyard_core::Link;
/// use halyard_html::Anchor;
///
/// let next = Link::new("next", "/items/2");
/// let anchor = Anchor::new(&next).fragment("Next").render(true);
/// assert_eq!(anchor.as_str(), r#"<a href="/items/2" rel="next">Next</a>"#);
/// ```
pub struct Anchor<'a> {
    link: Option<&'a Link>,
    attrs: Attrs,
    fragments: Vec<String>,
    nested: Option<ContentFn<'a>>,
}

impl<'a> Anchor<'a> {
    /// Start an anchor for `link`; pass `None` for a tolerant no-op render.
    #[must_use]
    pub fn new(link: impl Into<Option<&'a Link>>) -> Self {
        Self {
            link: link.into(),
            attrs: Attrs::new(),
            fragments: Vec::new(),
            nested: None,
        }
    }

    /// Set an HTML attribute. `href` overrides the link's own href; a text
    /// `rel` is appended after the link's rel rather than replacing it.
    /// Setting the same name twice keeps the later value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Add one inline content fragment. Fragments and nested content are
    /// joined by single spaces; fragments are escaped when rendering with
    /// autoescape on.
    #[must_use]
    pub fn fragment(mut self, text: impl Into<String>) -> Self {
        self.fragments.push(text.into());
        self
    }

    /// Supply nested content, produced with the link as context. The
    /// producer's output is markup already and is never re-escaped.
    #[must_use]
    pub fn nested(mut self, producer: impl FnOnce(&Link) -> Markup + 'a) -> Self {
        self.nested = Some(Box::new(producer));
        self
    }

    /// Render the anchor.
    ///
    /// With `autoescape` on, fragments are escaped and the result is
    /// [`Rendered::Safe`]; off, fragments pass through raw and the result is
    /// [`Rendered::Plain`], leaving escaping to the caller. Attribute values
    /// are escaped in both modes.
    #[must_use]
    pub fn render(self, autoescape: bool) -> Rendered {
        let wrap = if autoescape {
            Rendered::Safe
        } else {
            Rendered::Plain
        };

        let Some(link) = self.link else {
            return wrap(String::new());
        };

        let mut attrs = self.attrs;
        attrs
            .entry("href".to_string())
            .or_insert_with(|| AttrValue::Text(link.href.clone()));
        let rel = match attrs.remove("rel") {
            None => AttrValue::Text(link.rel.clone()),
            Some(AttrValue::Text(extra)) => AttrValue::Text(format!("{} {}", link.rel, extra)),
            // Flag/Null overrides keep their plain conventions.
            Some(other) => other,
        };
        attrs.insert("rel".to_string(), rel);

        let mut parts: Vec<String> = if autoescape {
            self.fragments
                .iter()
                .map(|fragment| {
                    let mut escaped = String::with_capacity(fragment.len());
                    escape_into(&mut escaped, fragment);
                    escaped
                })
                .collect()
        } else {
            self.fragments
        };
        if let Some(producer) = self.nested {
            parts.push(producer(link).into_string());
        }

        wrap(format!(
            "<a{}>{}</a>",
            render_attrs(&attrs),
            parts.join(" ")
        ))
    }

    /// Render for a maud template: autoescape on, spliced verbatim.
    #[must_use]
    pub fn to_markup(self) -> Markup {
        PreEscaped(self.render(true).into_string())
    }
}

/// Anchor output: already-escaped markup safe to splice, or a plain string
/// whose escaping the caller owns.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Safe(String),
    Plain(String),
}

impl Rendered {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Rendered::Safe(html) | Rendered::Plain(html) => html,
        }
    }

    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Rendered::Safe(html) | Rendered::Plain(html) => html,
        }
    }

    /// True for output already marked safe for splicing.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        matches!(self, Rendered::Safe(_))
    }
}

impl std::fmt::Display for Rendered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Render for Rendered {
    /// Safe output splices verbatim; plain output gets the template's
    /// escaping.
    fn render_to(&self, buffer: &mut String) {
        match self {
            Rendered::Safe(html) => buffer.push_str(html),
            Rendered::Plain(html) => escape_into(buffer, html),
        }
    }
}
