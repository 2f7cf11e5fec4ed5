#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! A small owned element tree over `quick-xml`, plus the namespace-tolerant
//! lookups the model parser uses.

use quick_xml::{
    events::{BytesStart, Event},
    name::ResolveResult,
    reader::NsReader,
};

use super::parser::ParseError;
use crate::constants::XMILE_NS;

/// One element of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Namespace URI the element resolved to, if any.
    namespace:  Option<String>,
    /// Local name, without prefix.
    name:       String,
    /// Attributes keyed by local name, in document order.
    attributes: Vec<(String, String)>,
    /// Character data appearing before the first child element.
    text:       Option<String>,
    /// Child elements in document order.
    children:   Vec<Element>,
}

impl Element {
    /// Parses a complete document and returns its root element.
    pub fn parse(xml: &str) -> Result<Self, ParseError> {
        let mut reader = NsReader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let (ns, event) = reader.read_resolved_event()?;
            match event {
                Event::Start(start) => {
                    let element = Element::open(namespace_of(ns)?, &start)?;
                    if stack.is_empty() && root.is_some() {
                        return Err(ParseError::MultipleRootElements);
                    }
                    stack.push(element);
                }
                Event::Empty(start) => {
                    let element = Element::open(namespace_of(ns)?, &start)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None if root.is_none() => root = Some(element),
                        None => return Err(ParseError::MultipleRootElements),
                    }
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or(ParseError::UnmatchedEnd)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => root = Some(element),
                    }
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(&text.unescape()?);
                    }
                }
                Event::CData(cdata) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(&String::from_utf8_lossy(&cdata));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(ParseError::UnexpectedEof);
        }
        root.ok_or(ParseError::NoRootElement)
    }

    /// Builds an element with no children from a start tag.
    fn open(namespace: Option<String>, start: &BytesStart<'_>) -> Result<Self, ParseError> {
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            if attr.key.prefix().is_some() || attr.key.as_namespace_binding().is_some() {
                continue;
            }
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            namespace,
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            attributes,
            text: None,
            children: Vec::new(),
        })
    }

    /// Appends character data, ignoring anything after the first child.
    fn push_text(&mut self, text: &str) {
        if self.children.is_empty() {
            self.text.get_or_insert_with(String::new).push_str(text);
        }
    }

    /// Local name of this element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace URI of this element, if it is bound to one.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Value of the attribute with the given local name.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Leading text content; `None` when the element has no text at all.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Whether this element is `tag` in the given namespace (`None` meaning
    /// unbound).
    fn is(&self, namespace: Option<&str>, tag: &str) -> bool {
        self.name == tag && self.namespace.as_deref() == namespace
    }

    /// First child named `tag`, preferring the XMILE namespace and falling
    /// back to an unbound element of the same name.
    pub fn find_child(&self, tag: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|child| child.is(Some(XMILE_NS), tag))
            .or_else(|| self.children.iter().find(|child| child.is(None, tag)))
    }

    /// All children named `tag`. Namespaced matches win outright; unbound
    /// ones are only returned when there are no namespaced matches.
    pub fn find_children(&self, tag: &str) -> Vec<&Element> {
        let namespaced: Vec<&Element> = self
            .children
            .iter()
            .filter(|child| child.is(Some(XMILE_NS), tag))
            .collect();
        if !namespaced.is_empty() {
            return namespaced;
        }

        self.children
            .iter()
            .filter(|child| child.is(None, tag))
            .collect()
    }

    /// First descendant (excluding `self`) named `tag`, with the same
    /// namespace preference as [`Element::find_child`].
    pub fn find_descendant(&self, tag: &str) -> Option<&Element> {
        self.descendants()
            .find(|el| el.is(Some(XMILE_NS), tag))
            .or_else(|| self.descendants().find(|el| el.is(None, tag)))
    }

    /// Depth-first, document-order iterator over every descendant.
    fn descendants(&self) -> impl Iterator<Item = &Element> {
        let mut pending: Vec<&Element> = self.children.iter().rev().collect();
        std::iter::from_fn(move || {
            let next = pending.pop()?;
            pending.extend(next.children.iter().rev());
            Some(next)
        })
    }
}

/// Converts a resolved namespace into an owned URI. A prefix with no
/// matching `xmlns:` declaration makes the document ill-formed.
fn namespace_of(resolved: ResolveResult<'_>) -> Result<Option<String>, ParseError> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(String::from_utf8_lossy(ns.as_ref()).into_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(ParseError::UnboundPrefix(
            String::from_utf8_lossy(&prefix).into_owned(),
        )),
    }
}
