// SPDX-License-Identifier: MIT OR Apache-2.0
//! Static node catalog: per-kind pin layouts and property schemas.
//!
//! The catalog is pure and stateless; the editor queries it when creating
//! nodes and when rendering the properties panel. Pin lists are fixed per kind
//! and never change after node creation.

use crate::node::NodeKind;
use crate::pin::{Pin, PinDirection, PinKind};

/// Color for execution pins
pub const EXECUTION_COLOR: [u8; 3] = [0xFF, 0x6B, 0x6B];
/// Color for data pins
pub const DATA_COLOR: [u8; 3] = [0x4E, 0xCD, 0xC4];
/// Color for operator operand/result pins
pub const OPERATOR_COLOR: [u8; 3] = [0x45, 0xB7, 0xD1];

/// Value shape of a configurable property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyValueType {
    /// Free-form text
    Text,
    /// Boolean flag
    Boolean,
    /// One of a fixed option list
    Select,
    /// A Rust type name
    TypeName,
}

/// One option of a `Select` or `TypeName` property
#[derive(Debug, Clone, Copy)]
pub struct SelectOption {
    /// Stored value
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
}

/// Schema for one configurable property of a node kind
#[derive(Debug, Clone)]
pub struct PropertyDef {
    /// Config key
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Value shape
    pub value_type: PropertyValueType,
    /// Whether the properties panel should require a value
    pub required: bool,
    /// Options for `Select`/`TypeName` properties
    pub options: Vec<SelectOption>,
}

impl PropertyDef {
    fn new(key: &'static str, label: &'static str, value_type: PropertyValueType) -> Self {
        Self {
            key,
            label,
            value_type,
            required: false,
            options: Vec::new(),
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }
}

/// Display metadata and property schema for a node kind
#[derive(Debug, Clone)]
pub struct NodeTemplate {
    /// The kind this template describes
    pub kind: NodeKind,
    /// Display name
    pub name: &'static str,
    /// Short description for the add-node menu
    pub description: &'static str,
    /// Configurable properties
    pub properties: Vec<PropertyDef>,
}

fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// Get the template for a node kind
pub fn template(kind: NodeKind) -> NodeTemplate {
    use PropertyValueType::{Boolean, Select, Text, TypeName};
    match kind {
        NodeKind::IfStatement => NodeTemplate {
            kind,
            name: "If Statement",
            description: "Conditional branching",
            properties: vec![PropertyDef::new("condition", "Condition", Text).required()],
        },
        NodeKind::Loop => NodeTemplate {
            kind,
            name: "Loop",
            description: "Infinite loop with break condition",
            properties: vec![PropertyDef::new("break_condition", "Break Condition", Text)],
        },
        NodeKind::LetDeclaration => NodeTemplate {
            kind,
            name: "Let Declaration",
            description: "Variable declaration",
            properties: vec![
                PropertyDef::new("name", "Variable Name", Text).required(),
                PropertyDef::new("type", "Type", TypeName)
                    .required()
                    .with_options(vec![
                        option("i32", "i32 (32-bit integer)"),
                        option("f64", "f64 (64-bit float)"),
                        option("String", "String"),
                        option("bool", "bool"),
                        option("Vec<T>", "Vec (Vector)"),
                    ]),
                PropertyDef::new("mutable", "Mutable", Boolean),
            ],
        },
        NodeKind::Assignment => NodeTemplate {
            kind,
            name: "Assignment",
            description: "Assign value to variable",
            properties: vec![PropertyDef::new("target", "Target Variable", Text).required()],
        },
        NodeKind::FunctionDef => NodeTemplate {
            kind,
            name: "Function Definition",
            description: "Define a new function",
            properties: vec![
                PropertyDef::new("name", "Function Name", Text).required(),
                PropertyDef::new("return_type", "Return Type", TypeName)
                    .required()
                    .with_options(vec![
                        option("()", "Unit (no return)"),
                        option("i32", "i32"),
                        option("String", "String"),
                        option("bool", "bool"),
                    ]),
            ],
        },
        NodeKind::FunctionCall => NodeTemplate {
            kind,
            name: "Function Call",
            description: "Call a function",
            properties: vec![PropertyDef::new("function_name", "Function Name", Text).required()],
        },
        NodeKind::Arithmetic => NodeTemplate {
            kind,
            name: "Arithmetic",
            description: "Basic arithmetic operations",
            properties: vec![PropertyDef::new("operation", "Operation", Select)
                .required()
                .with_options(vec![
                    option("add", "Add (+)"),
                    option("subtract", "Subtract (-)"),
                    option("multiply", "Multiply (*)"),
                    option("divide", "Divide (/)"),
                ])],
        },
        NodeKind::Comparison => NodeTemplate {
            kind,
            name: "Comparison",
            description: "Comparison operations",
            properties: vec![PropertyDef::new("operation", "Operation", Select)
                .required()
                .with_options(vec![
                    option("eq", "Equals (==)"),
                    option("neq", "Not Equals (!=)"),
                    option("gt", "Greater Than (>)"),
                    option("lt", "Less Than (<)"),
                    option("gte", "Greater Than or Equal (>=)"),
                    option("lte", "Less Than or Equal (<=)"),
                ])],
        },
    }
}

fn exec_in() -> Pin {
    Pin::new("exec_in", "In", PinKind::Execution, PinDirection::Input, EXECUTION_COLOR)
}

fn exec_out() -> Pin {
    Pin::new("exec_out", "Out", PinKind::Execution, PinDirection::Output, EXECUTION_COLOR)
}

/// Get the fixed pin list for a node kind
pub fn pins_for(kind: NodeKind) -> Vec<Pin> {
    match kind {
        NodeKind::IfStatement => vec![
            exec_in(),
            Pin::new("condition", "Condition", PinKind::Data, PinDirection::Input, DATA_COLOR)
                .with_data_type("bool"),
            Pin::new("then", "Then", PinKind::Execution, PinDirection::Output, EXECUTION_COLOR),
            Pin::new("else", "Else", PinKind::Execution, PinDirection::Output, EXECUTION_COLOR),
        ],
        NodeKind::Loop => vec![
            exec_in(),
            Pin::new("body", "Loop Body", PinKind::Execution, PinDirection::Output, EXECUTION_COLOR),
            Pin::new(
                "completed",
                "Completed",
                PinKind::Execution,
                PinDirection::Output,
                EXECUTION_COLOR,
            ),
        ],
        NodeKind::LetDeclaration => vec![
            exec_in(),
            Pin::new("value", "Value", PinKind::Data, PinDirection::Input, DATA_COLOR),
            exec_out(),
            Pin::new("var_out", "Variable", PinKind::Data, PinDirection::Output, DATA_COLOR),
        ],
        NodeKind::Assignment => vec![
            exec_in(),
            Pin::new("value", "Value", PinKind::Data, PinDirection::Input, DATA_COLOR),
            exec_out(),
        ],
        NodeKind::FunctionDef => vec![
            Pin::new("exec_body", "Body", PinKind::Execution, PinDirection::Output, EXECUTION_COLOR),
            Pin::new("return_value", "Return", PinKind::Data, PinDirection::Input, DATA_COLOR),
        ],
        NodeKind::FunctionCall => vec![
            exec_in(),
            exec_out(),
            Pin::new("params", "Parameters", PinKind::Data, PinDirection::Input, DATA_COLOR),
            Pin::new("return", "Return Value", PinKind::Data, PinDirection::Output, DATA_COLOR),
        ],
        NodeKind::Arithmetic | NodeKind::Comparison => vec![
            Pin::new("left", "Left", PinKind::Data, PinDirection::Input, OPERATOR_COLOR),
            Pin::new("right", "Right", PinKind::Data, PinDirection::Input, OPERATOR_COLOR),
            Pin::new("result", "Result", PinKind::Data, PinDirection::Output, OPERATOR_COLOR),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_pins() {
        for kind in NodeKind::all() {
            assert!(!pins_for(kind).is_empty(), "no pins for {kind:?}");
        }
    }

    #[test]
    fn test_if_statement_pin_layout() {
        let pins = pins_for(NodeKind::IfStatement);
        assert_eq!(pins.len(), 4);
        assert_eq!(pins[0].id, "exec_in");
        assert_eq!(pins[0].kind, PinKind::Execution);
        assert_eq!(pins[1].id, "condition");
        assert_eq!(pins[1].data_type.as_deref(), Some("bool"));
        assert!(pins[2].is_output());
        assert!(pins[3].is_output());
    }

    #[test]
    fn test_operator_pin_layout() {
        for kind in [NodeKind::Arithmetic, NodeKind::Comparison] {
            let pins = pins_for(kind);
            assert_eq!(pins.len(), 3);
            assert!(pins.iter().all(|p| p.kind == PinKind::Data));
            assert_eq!(pins[0].id, "left");
            assert_eq!(pins[1].id, "right");
            assert_eq!(pins[2].id, "result");
        }
    }

    #[test]
    fn test_every_kind_has_a_template() {
        for kind in NodeKind::all() {
            let template = template(kind);
            assert_eq!(template.kind, kind);
            assert!(!template.name.is_empty());
        }
    }

    #[test]
    fn test_operation_properties_carry_options() {
        let arithmetic = template(NodeKind::Arithmetic);
        let operation = &arithmetic.properties[0];
        assert_eq!(operation.key, "operation");
        assert_eq!(operation.options.len(), 4);

        let comparison = template(NodeKind::Comparison);
        assert_eq!(comparison.properties[0].options.len(), 6);
    }
}
