//! Shape environment (declared shapes and enums)

use std::collections::HashMap;

use ducktype_shape::Shape;

/// Registry of declared shapes and enums.
///
/// Flat — shape documents have no nested scopes. Declarations are
/// write-once; redeclaration is rejected by the checker before it
/// reaches the environment.
#[derive(Debug, Clone, Default)]
pub struct ShapeEnv {
    shapes: HashMap<String, Shape>,
    enums: HashMap<String, Vec<String>>,
}

impl ShapeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_shape(&mut self, shape: Shape) {
        self.shapes.insert(shape.name.clone(), shape);
    }

    pub fn define_enum(&mut self, name: String, members: Vec<String>) {
        self.enums.insert(name, members);
    }

    pub fn lookup_shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.get(name)
    }

    pub fn lookup_enum(&self, name: &str) -> Option<&Vec<String>> {
        self.enums.get(name)
    }

    pub fn has_shape(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    pub fn has_enum(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    pub fn has_enum_member(&self, name: &str, member: &str) -> bool {
        self.enums
            .get(name)
            .map(|members| members.iter().any(|m| m == member))
            .unwrap_or(false)
    }

    /// Declared shapes in name order, for the CLI's table dump.
    pub fn shapes_sorted(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.values().collect();
        shapes.sort_by(|a, b| a.name.cmp(&b.name));
        shapes
    }

    /// Declared enums in name order.
    pub fn enums_sorted(&self) -> Vec<(&str, &[String])> {
        let mut enums: Vec<(&str, &[String])> = self
            .enums
            .iter()
            .map(|(name, members)| (name.as_str(), members.as_slice()))
            .collect();
        enums.sort_by(|a, b| a.0.cmp(b.0));
        enums
    }
}
