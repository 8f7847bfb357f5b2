// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scope-aware code emission.
//!
//! Walks nodes in scheduler order and turns each into one or more source
//! lines. Nested block depth is a single flat counter shared across the whole
//! export: opening a branch or loop body increments it and the matching
//! closing braces are all appended once, at the very end, by decrementing the
//! counter back to zero. Control-flow sub-bodies get their own named blocks
//! (`<id>_true`, `<id>_body`, ...) and child scopes.

use crate::schedule;
use crate::scope::{ScopeArena, ScopeId};
use graphforge_graph::{ConnectionKind, Graph, Node, NodeCategory, NodeId, NodeKind, Pin, PinKind};
use indexmap::IndexMap;

/// Fixed prelude prepended to every export
const PRELUDE: &str = "// Generated Rust Code\nuse std::io;\n\n";

/// One indentation step
const INDENT_UNIT: &str = "    ";

fn indent(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

/// Emitted lines paired with the scope active while generating them
#[derive(Debug)]
pub struct Block {
    /// Generated source lines, without trailing newlines
    pub lines: Vec<String>,
    /// Lexical scope owned by this block
    pub scope: ScopeId,
}

/// State carried across one whole export
struct Emitter<'a> {
    graph: &'a Graph,
    scopes: ScopeArena,
    /// Block receiving top-level lines
    current: Block,
    /// Named sub-blocks keyed by node-id fragment (plus branch suffix)
    blocks: IndexMap<String, Block>,
    /// Variable name holding each node's computed value
    node_outputs: IndexMap<NodeId, String>,
    /// Flat global indentation counter; only restored for the loop
    /// break-condition line, otherwise it grows until final closing
    indent_level: usize,
}

/// Compile a graph into Rust source text.
///
/// Infallible: nodes with missing configuration fall back to defaults and
/// unrecognized nodes are skipped, per the editor's error-handling contract.
/// Exporting the same graph twice yields byte-identical text.
pub fn generate(graph: &Graph) -> String {
    let mut emitter = Emitter::new(graph);
    emitter.emit_graph();
    emitter.assemble()
}

impl<'a> Emitter<'a> {
    fn new(graph: &'a Graph) -> Self {
        let mut scopes = ScopeArena::new();
        let root = scopes.root();
        Self {
            graph,
            scopes,
            current: Block {
                lines: Vec::new(),
                scope: root,
            },
            blocks: IndexMap::new(),
            node_outputs: IndexMap::new(),
            indent_level: 0,
        }
    }

    fn emit_graph(&mut self) {
        for node in schedule::order(self.graph) {
            self.emit_node(node);
        }
    }

    fn emit_node(&mut self, node: &Node) {
        match node.kind.category() {
            NodeCategory::Variables => self.emit_variable(node),
            NodeCategory::Functions => self.emit_function_def(node),
            NodeCategory::Operators => self.emit_operator(node),
            NodeCategory::ControlFlow => match node.kind {
                NodeKind::IfStatement => self.emit_if(node),
                NodeKind::Loop => self.emit_loop(node),
                // control flow has no other kinds; anything else is skipped
                _ => {}
            },
        }
    }

    /// Input slot used for producer matching: the bare pin id, or
    /// `<pin>_<producer fragment>` once a data connection lands on the pin.
    fn input_slot(&self, node: &Node, pin: &Pin) -> String {
        let producer = self.graph.connections().find(|c| {
            c.kind == ConnectionKind::Data && c.to_node == node.id && c.to_pin == pin.id
        });
        match producer {
            Some(c) => format!("{}_{}", pin.id, c.from_node.ident_fragment()),
            None => pin.id.clone(),
        }
    }

    fn input_slots(&self, node: &Node) -> Vec<String> {
        node.input_pins().map(|pin| self.input_slot(node, pin)).collect()
    }

    /// Resolve an operand by containment: the slot text carries the producer's
    /// id fragment once connected, so the first node output whose fragment
    /// appears in the slot wins. Unconnected operands fall back to the bare
    /// pin id.
    fn operand(&self, node: &Node, index: usize) -> Option<String> {
        let pin = node.input_pins().nth(index)?;
        let slot = self.input_slot(node, pin);
        let resolved = self
            .node_outputs
            .iter()
            .find(|(id, _)| slot.contains(&id.ident_fragment()))
            .map_or_else(|| pin.id.clone(), |(_, output)| output.clone());
        Some(resolved)
    }

    fn emit_variable(&mut self, node: &Node) {
        let var_type = node.config.get_str("type").unwrap_or("i32").to_string();
        let var_name = match node.config.get_str("name") {
            Some(name) => name.to_string(),
            None => format!("var_{}", node.id.ident_fragment()),
        };
        let mutable = if node.config.get_bool("mutable").unwrap_or(false) {
            "mut "
        } else {
            ""
        };

        self.scopes.bind(self.current.scope, var_name.clone(), var_type.clone());

        let declaration = format!(
            "{}let {}{}: {}",
            indent(self.indent_level),
            mutable,
            var_name,
            var_type
        );

        let slots = self.input_slots(node);
        let initializer = self
            .node_outputs
            .iter()
            .find(|(id, _)| slots.iter().any(|slot| slot.contains(&id.ident_fragment())))
            .map(|(_, output)| output.clone());

        let line = match initializer {
            Some(output) => format!("{declaration} = {output};"),
            None => format!("{declaration} = {};", default_value(&var_type)),
        };
        self.current.lines.push(line);
    }

    fn emit_function_def(&mut self, node: &Node) {
        let func_name = match node.config.get_str("name") {
            Some(name) => name.to_string(),
            None => format!("func_{}", node.id.ident_fragment()),
        };
        let return_type = node.config.get_str("return_type").unwrap_or("()");

        let body_scope = self.scopes.child(self.current.scope);

        let params = node
            .input_pins()
            .filter(|pin| pin.kind != PinKind::Execution)
            .map(|pin| {
                let param_type = self.scopes.lookup(self.current.scope, &pin.id).unwrap_or("i32");
                format!("{}: {}", pin.id, param_type)
            })
            .collect::<Vec<_>>()
            .join(", ");

        self.current.lines.push(format!(
            "{}fn {}({}) -> {} {{",
            indent(self.indent_level),
            func_name,
            params,
            return_type
        ));

        self.blocks.insert(
            node.id.ident_fragment(),
            Block {
                lines: Vec::new(),
                scope: body_scope,
            },
        );
        self.indent_level += 1;
    }

    fn emit_operator(&mut self, node: &Node) {
        let Some(operation) = node.config.get_str("operation") else {
            tracing::warn!(node = ?node.id, "operator node has no operation configured, skipping");
            return;
        };
        let Some(symbol) = operation_symbol(operation) else {
            tracing::warn!(node = ?node.id, operation, "unknown operator operation, skipping");
            return;
        };

        let left = self.operand(node, 0).unwrap_or_else(|| "left".to_string());
        let right = self.operand(node, 1).unwrap_or_else(|| "right".to_string());

        let result = format!("temp_{}", node.id.ident_fragment());
        self.current.lines.push(format!(
            "{}let {} = {} {} {};",
            indent(self.indent_level),
            result,
            left,
            symbol,
            right
        ));
        self.node_outputs.insert(node.id, result);
    }

    fn emit_if(&mut self, node: &Node) {
        let condition = match node.config.get_str("condition") {
            Some(condition) => condition.to_string(),
            None => {
                tracing::warn!(node = ?node.id, "if node has no condition configured");
                "true".to_string()
            }
        };

        let true_scope = self.scopes.child(self.current.scope);
        let false_scope = self.scopes.child(self.current.scope);

        self.current
            .lines
            .push(format!("{}if {} {{", indent(self.indent_level), condition));

        let fragment = node.id.ident_fragment();
        self.blocks.insert(
            format!("{fragment}_true"),
            Block {
                lines: Vec::new(),
                scope: true_scope,
            },
        );
        self.blocks.insert(
            format!("{fragment}_false"),
            Block {
                lines: Vec::new(),
                scope: false_scope,
            },
        );
        self.indent_level += 1;
    }

    fn emit_loop(&mut self, node: &Node) {
        self.current
            .lines
            .push(format!("{}loop {{", indent(self.indent_level)));

        let break_condition = node
            .config
            .get_str("break_condition")
            .filter(|condition| !condition.is_empty())
            .map(str::to_string);
        if let Some(break_condition) = break_condition {
            self.indent_level += 1;
            self.current.lines.push(format!(
                "{}if {} {{ break; }}",
                indent(self.indent_level),
                break_condition
            ));
            self.indent_level -= 1;
        }

        let body_scope = self.scopes.child(self.current.scope);
        self.blocks.insert(
            format!("{}_body", node.id.ident_fragment()),
            Block {
                lines: Vec::new(),
                scope: body_scope,
            },
        );
        self.indent_level += 1;
    }

    /// Concatenate prelude, top-level lines, stored blocks in insertion order,
    /// then one closing brace per outstanding indent level.
    fn assemble(&mut self) -> String {
        let mut code = String::from(PRELUDE);
        code.push_str(&self.current.lines.join("\n"));

        for block in self.blocks.values() {
            code.push('\n');
            code.push_str(&block.lines.join("\n"));
        }

        while self.indent_level > 0 {
            self.indent_level -= 1;
            code.push('\n');
            code.push_str(&indent(self.indent_level));
            code.push('}');
        }

        code
    }
}

/// Map a configured operation to its infix symbol
fn operation_symbol(operation: &str) -> Option<&'static str> {
    match operation {
        "add" => Some("+"),
        "subtract" => Some("-"),
        "multiply" => Some("*"),
        "divide" => Some("/"),
        "eq" => Some("=="),
        "neq" => Some("!="),
        "gt" => Some(">"),
        "lt" => Some("<"),
        "gte" => Some(">="),
        "lte" => Some("<="),
        _ => None,
    }
}

/// Zero value emitted when a declaration has no incoming data connection
fn default_value(var_type: &str) -> &'static str {
    match var_type.trim() {
        "i32" | "i64" | "u32" | "u64" => "0",
        "f32" | "f64" => "0.0",
        "bool" => "false",
        "String" => "String::new()",
        t if t.starts_with("Vec<") => "vec![]",
        _ => "Default::default()",
    }
}
