// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the graph model.

use crate::catalog;
use crate::pin::{Pin, PinDirection};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Hyphen-free rendering for splicing into generated identifiers
    /// (`temp_<fragment>`, `var_<fragment>`).
    pub fn ident_fragment(&self) -> String {
        self.0.simple().to_string()
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Node category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    /// Branching and loops
    ControlFlow,
    /// Declarations and assignments
    Variables,
    /// Function definitions and calls
    Functions,
    /// Arithmetic and comparison expressions
    Operators,
}

/// Node kind, the closed catalog of program constructs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Conditional branch
    IfStatement,
    /// Infinite loop with optional break condition
    Loop,
    /// Variable declaration
    LetDeclaration,
    /// Assignment to an existing variable
    Assignment,
    /// Function definition
    FunctionDef,
    /// Function call
    FunctionCall,
    /// Arithmetic expression
    Arithmetic,
    /// Comparison expression
    Comparison,
}

impl NodeKind {
    /// Category this kind belongs to
    pub fn category(self) -> NodeCategory {
        match self {
            Self::IfStatement | Self::Loop => NodeCategory::ControlFlow,
            Self::LetDeclaration | Self::Assignment => NodeCategory::Variables,
            Self::FunctionDef | Self::FunctionCall => NodeCategory::Functions,
            Self::Arithmetic | Self::Comparison => NodeCategory::Operators,
        }
    }

    /// All catalog kinds, in display order
    pub fn all() -> [NodeKind; 8] {
        [
            Self::IfStatement,
            Self::Loop,
            Self::LetDeclaration,
            Self::Assignment,
            Self::FunctionDef,
            Self::FunctionCall,
            Self::Arithmetic,
            Self::Comparison,
        ]
    }
}

/// Category-specific node properties (variable name/type, operation selector,
/// condition text, ...), stored as a free-form string-keyed bag.
///
/// Missing properties are never an error; consumers fall back to documented
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Property values by key
    pub properties: serde_json::Map<String, Value>,
}

impl NodeConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style property insertion
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Set a property
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Get a string property
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// Get a boolean property
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.properties.get(key).and_then(Value::as_bool)
    }
}

/// A node instance in the graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Node kind
    pub kind: NodeKind,
    /// Display name
    pub name: String,
    /// Position on the canvas (irrelevant to code generation)
    pub position: [f32; 2],
    /// Category-specific properties
    pub config: NodeConfig,
    /// Pins, fixed per kind at creation
    pub pins: Vec<Pin>,
}

impl Node {
    /// Create a new node with catalog pins for its kind
    pub fn new(kind: NodeKind, name: impl Into<String>, config: NodeConfig) -> Self {
        Self {
            id: NodeId::new(),
            kind,
            name: name.into(),
            position: [0.0, 0.0],
            config,
            pins: catalog::pins_for(kind),
        }
    }

    /// Category of this node's kind
    pub fn category(&self) -> NodeCategory {
        self.kind.category()
    }

    /// Get a pin by ID
    pub fn pin(&self, pin_id: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == pin_id)
    }

    /// Input pins, in catalog order
    pub fn input_pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(|p| p.direction == PinDirection::Input)
    }

    /// Output pins, in catalog order
    pub fn output_pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(|p| p.direction == PinDirection::Output)
    }
}

/// Whole-field replacement update for a node.
///
/// Each `Some` field replaces the node's field outright; `None` fields are
/// left untouched.
#[derive(Debug, Clone, Default)]
pub struct NodeUpdate {
    /// New display name
    pub name: Option<String>,
    /// New canvas position
    pub position: Option<[f32; 2]>,
    /// New config (replaces the whole bag)
    pub config: Option<NodeConfig>,
}
