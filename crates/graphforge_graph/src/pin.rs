// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pin definitions for node connection endpoints.

use serde::{Deserialize, Serialize};

/// What a pin carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinKind {
    /// Control transfer between nodes
    Execution,
    /// A value produced or consumed by a node
    Data,
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinDirection {
    /// Input pin
    Input,
    /// Output pin
    Output,
}

/// A connection endpoint owned by a node.
///
/// Pin identifiers are catalog-assigned slugs (`"exec_in"`, `"left"`, ...)
/// shared by every node of the same kind. A pin's kind and direction are fixed
/// by the owning node's kind and never change after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pin {
    /// Catalog-assigned pin identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// What this pin carries
    pub kind: PinKind,
    /// Value type tag for data pins (`"bool"`, `"i32"`, ...)
    pub data_type: Option<String>,
    /// Pin direction
    pub direction: PinDirection,
    /// Display color (RGB)
    pub color: [u8; 3],
}

impl Pin {
    /// Create a new pin
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: PinKind,
        direction: PinDirection,
        color: [u8; 3],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            data_type: None,
            direction,
            color,
        }
    }

    /// Set the value type tag
    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    /// Whether this is an input pin
    pub fn is_input(&self) -> bool {
        self.direction == PinDirection::Input
    }

    /// Whether this is an output pin
    pub fn is_output(&self) -> bool {
        self.direction == PinDirection::Output
    }
}
