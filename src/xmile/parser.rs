#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Extracts stocks, flows and converters from a Stella `.stmx` export.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{
    document::Element,
    variable::{Variable, VariableKind, Variables},
};

/// Reasons a document cannot be turned into a variable collection.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The file could not be read.
    #[error("Could not read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path:   PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The markup is not well-formed.
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),
    /// An attribute is malformed.
    #[error("{0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),
    /// An element uses a prefix with no namespace declaration.
    #[error("unbound prefix `{0}`")]
    UnboundPrefix(String),
    /// The document ended with elements still open.
    #[error("unexpected end of document, some elements were never closed")]
    UnexpectedEof,
    /// A closing tag appeared with nothing open.
    #[error("closing tag without a matching opening tag")]
    UnmatchedEnd,
    /// The document contains no elements.
    #[error("no element found")]
    NoRootElement,
    /// More than one top-level element.
    #[error("junk after document element")]
    MultipleRootElements,
    /// No `model` element anywhere below the root.
    #[error("Could not find model element in STMX file")]
    MissingModel,
    /// The `model` element has no `variables` child.
    #[error("Could not find variables element in STMX file")]
    MissingVariables,
}

/// Reads and parses the model file at `path`.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Variables, ParseError> {
    let path = path.as_ref();
    let xml = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&xml)
}

/// Parses a model document held in memory.
pub fn parse_document(xml: &str) -> Result<Variables, ParseError> {
    let root = Element::parse(xml)?;
    let model = root
        .find_descendant("model")
        .ok_or(ParseError::MissingModel)?;
    let container = model
        .find_child("variables")
        .ok_or(ParseError::MissingVariables)?;

    let mut variables = Variables::new();
    for kind in [VariableKind::Stock, VariableKind::Flow, VariableKind::Aux] {
        for element in container.find_children(kind.as_str()) {
            let variable = read_variable(element, kind);
            if let Some(previous) = variables.insert(variable) {
                tracing::warn!(
                    "`{}` ({}) replaces an earlier {} named `{}`",
                    element.attribute("name").unwrap_or_default(),
                    kind,
                    previous.kind,
                    previous.name
                );
            }
        }
    }

    tracing::debug!("parsed {} variables", variables.len());
    Ok(variables)
}

/// Builds a variable of `kind` from its declaring element.
fn read_variable(element: &Element, kind: VariableKind) -> Variable {
    let name = element.attribute("name").unwrap_or_default();
    let equation = element
        .find_child("eqn")
        .and_then(Element::text)
        .unwrap_or_default();

    let (inflows, outflows) = match kind {
        VariableKind::Stock => (flow_names(element, "inflow"), flow_names(element, "outflow")),
        VariableKind::Flow | VariableKind::Aux => (Vec::new(), Vec::new()),
    };

    Variable::builder()
        .name(name)
        .kind(kind)
        .equation(equation)
        .inflows(inflows)
        .outflows(outflows)
        .build()
}

/// Text of every `tag` child of a stock, skipping empty ones.
fn flow_names(stock: &Element, tag: &str) -> Vec<String> {
    stock
        .find_children(tag)
        .into_iter()
        .filter_map(Element::text)
        .map(str::to_owned)
        .collect()
}
