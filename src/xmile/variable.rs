#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::HashMap, fmt::Display};

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::name::normalize;

/// The role a variable plays in a stock-and-flow model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    /// An accumulated quantity.
    Stock,
    /// A rate moving quantity into or out of a stock.
    Flow,
    /// A converter computed from other variables.
    Aux,
}

impl VariableKind {
    /// Returns the XMILE tag naming this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Stock => "stock",
            VariableKind::Flow => "flow",
            VariableKind::Aux => "aux",
        }
    }
}

impl Display for VariableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One named quantity in the model, as declared in the document.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct Variable {
    /// Display name exactly as written in the `name` attribute.
    pub name:     String,
    /// Stock, flow or converter.
    pub kind:     VariableKind,
    /// Raw equation text; empty when the variable has no `eqn`.
    #[builder(default)]
    pub equation: String,
    /// Inflow names, stocks only.
    #[builder(default)]
    pub inflows:  Vec<String>,
    /// Outflow names, stocks only.
    #[builder(default)]
    pub outflows: Vec<String>,
}

impl Variable {
    /// The normalized key this variable is stored under.
    pub fn key(&self) -> String {
        normalize(&self.name)
    }

    /// Whether this variable has the given kind.
    pub fn is(&self, kind: VariableKind) -> bool {
        self.kind == kind
    }
}

/// Every variable of one model, keyed by normalized name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(HashMap<String, Variable>);

impl Variables {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `variable` under its normalized name and returns whatever was
    /// there before. A later definition always replaces an earlier one.
    pub fn insert(&mut self, variable: Variable) -> Option<Variable> {
        self.0.insert(variable.key(), variable)
    }

    /// Looks up a variable by normalized key.
    pub fn get(&self, key: &str) -> Option<&Variable> {
        self.0.get(key)
    }

    /// Whether a variable with this key exists, whatever its kind.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Whether a variable with this key exists and has the given kind.
    pub fn contains_kind(&self, key: &str, kind: VariableKind) -> bool {
        self.get(key).is_some_and(|v| v.is(kind))
    }

    /// Equation text of `key`, or `None` if the variable is absent.
    pub fn equation(&self, key: &str) -> Option<&str> {
        self.get(key).map(|v| v.equation.as_str())
    }

    /// Keys from `required` that are absent or not of `kind`, in the order
    /// given.
    pub fn missing<'a>(&self, required: &[&'a str], kind: VariableKind) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|key| !self.contains_kind(key, kind))
            .collect()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the model declared no variables.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, variable)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Variable)> {
        self.0.iter()
    }
}

impl FromIterator<Variable> for Variables {
    fn from_iter<T: IntoIterator<Item = Variable>>(iter: T) -> Self {
        let mut variables = Variables::new();
        for variable in iter {
            variables.insert(variable);
        }
        variables
    }
}
