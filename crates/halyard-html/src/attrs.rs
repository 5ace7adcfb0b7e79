//! HTML attribute serialization.
//!
//! The conventions match what template engines' attribute filters do: text
//! values render escaped and quoted, `true` renders the bare attribute name,
//! `false` and null render nothing at all.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use maud::Escaper;

/// One attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Rendered as ` name="value"` with the value escaped.
    Text(String),
    /// `Flag(true)` renders the bare name; `Flag(false)` renders nothing.
    Flag(bool),
    /// Renders nothing. Lets optional attributes pass straight through.
    Null,
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        AttrValue::Text(text.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        AttrValue::Text(text)
    }
}

impl From<bool> for AttrValue {
    fn from(flag: bool) -> Self {
        AttrValue::Flag(flag)
    }
}

impl From<Option<String>> for AttrValue {
    fn from(text: Option<String>) -> Self {
        text.map_or(AttrValue::Null, AttrValue::Text)
    }
}

impl From<Option<&str>> for AttrValue {
    fn from(text: Option<&str>) -> Self {
        text.map_or(AttrValue::Null, AttrValue::from)
    }
}

/// Attribute table. Name-ordered, so output is deterministic.
pub type Attrs = BTreeMap<String, AttrValue>;

/// Escape `text` into `out` (`&`, `<`, `>`, `"`).
pub(crate) fn escape_into(out: &mut String, text: &str) {
    // Writing into a String cannot fail.
    let _ = Escaper::new(out).write_str(text);
}

/// Serialize attributes for splicing directly after a tag name.
///
/// Every rendered attribute is space-prefixed, so `<a{attrs}>` concatenates
/// cleanly. Attribute names are written verbatim; supplying valid names is
/// the caller's contract. Values are always escaped, whatever the
/// surrounding autoescape mode.
#[must_use]
pub fn render_attrs(attrs: &Attrs) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        match value {
            AttrValue::Text(text) => {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_into(&mut out, text);
                out.push('"');
            }
            AttrValue::Flag(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Flag(false) | AttrValue::Null => {}
        }
    }
    out
}
