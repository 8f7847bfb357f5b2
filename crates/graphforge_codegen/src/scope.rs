// SPDX-License-Identifier: MIT OR Apache-2.0
//! Lexical scopes for code generation.
//!
//! Scopes form a parent-linked chain; lookup walks outward and returns the
//! nearest enclosing binding. Records live in an arena and are referenced by
//! index, so blocks can hold onto their scope without back-references.

use indexmap::IndexMap;

/// Index of a scope record in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

/// Arena of scope records
#[derive(Debug, Default)]
pub struct ScopeArena {
    scopes: Vec<ScopeRecord>,
}

#[derive(Debug)]
struct ScopeRecord {
    /// Variable name -> declared type
    bindings: IndexMap<String, String>,
    parent: Option<ScopeId>,
}

impl ScopeArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope with no parent
    pub fn root(&mut self) -> ScopeId {
        self.push(None)
    }

    /// Create a child of an existing scope
    pub fn child(&mut self, parent: ScopeId) -> ScopeId {
        self.push(Some(parent))
    }

    fn push(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(ScopeRecord {
            bindings: IndexMap::new(),
            parent,
        });
        id
    }

    /// Register a variable in a scope, shadowing any enclosing binding
    pub fn bind(&mut self, scope: ScopeId, name: impl Into<String>, var_type: impl Into<String>) {
        self.scopes[scope.0].bindings.insert(name.into(), var_type.into());
    }

    /// Resolve a variable to its declared type, walking the parent chain
    /// outward. Returns the nearest enclosing binding.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&str> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let record = &self.scopes[id.0];
            if let Some(var_type) = record.bindings.get(name) {
                return Some(var_type);
            }
            current = record.parent;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_walks_parent_chain() {
        let mut arena = ScopeArena::new();
        let root = arena.root();
        let inner = arena.child(root);
        arena.bind(root, "x", "i32");

        assert_eq!(arena.lookup(inner, "x"), Some("i32"));
        assert_eq!(arena.lookup(root, "x"), Some("i32"));
        assert_eq!(arena.lookup(inner, "y"), None);
    }

    #[test]
    fn test_inner_binding_shadows_outer() {
        let mut arena = ScopeArena::new();
        let root = arena.root();
        let inner = arena.child(root);
        arena.bind(root, "x", "i32");
        arena.bind(inner, "x", "f64");

        // nearest enclosing binding wins
        assert_eq!(arena.lookup(inner, "x"), Some("f64"));
        // the outer binding is untouched
        assert_eq!(arena.lookup(root, "x"), Some("i32"));
    }

    #[test]
    fn test_siblings_do_not_share_bindings() {
        let mut arena = ScopeArena::new();
        let root = arena.root();
        let left = arena.child(root);
        let right = arena.child(root);
        arena.bind(left, "x", "bool");

        assert_eq!(arena.lookup(left, "x"), Some("bool"));
        assert_eq!(arena.lookup(right, "x"), None);
    }
}
