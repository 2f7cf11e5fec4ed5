#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Owned element tree and namespace-tolerant lookups.
pub mod document;
/// Variable name normalization.
pub mod name;
/// Model parser for `.stmx` documents.
pub mod parser;
/// Variable records and the keyed collection.
pub mod variable;

pub use document::Element;
pub use name::normalize;
pub use parser::{ParseError, parse_document, parse_file};
pub use variable::{Variable, VariableKind, Variables};
