//! Declaration checker
//!
//! Registers enums and shapes, resolving `extends` clauses and enforcing
//! the declaration invariants (unique names, declared enum references,
//! conflict-free composition) before anything lands in the environment.

use ducktype_shape::{FieldSpec, Shape, TypeTag};

use crate::env::ShapeEnv;
use crate::error::DeclareError;
use crate::merge::{merge_all, merge_shapes, normalize_fields};

/// Declaration-side entry point: owns the environment the assignability
/// checks read from.
#[derive(Debug, Default)]
pub struct ShapeChecker {
    env: ShapeEnv,
}

impl ShapeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn env(&self) -> &ShapeEnv {
        &self.env
    }

    pub fn lookup_shape(&self, name: &str) -> Option<&Shape> {
        self.env.lookup_shape(name)
    }

    pub fn declare_enum(
        &mut self,
        name: impl Into<String>,
        members: Vec<String>,
    ) -> Result<(), DeclareError> {
        let name = name.into();
        if self.env.has_enum(&name) {
            return Err(DeclareError::DuplicateEnum(name));
        }
        self.env.define_enum(name, members);
        Ok(())
    }

    /// Declare a plain shape. Duplicate field names within the
    /// declaration collapse when they agree in type and fail composition
    /// when they do not; every referenced enum must already be declared.
    pub fn declare_shape(&mut self, shape: Shape) -> Result<(), DeclareError> {
        if self.env.has_shape(&shape.name) {
            return Err(DeclareError::DuplicateShape(shape.name));
        }

        let fields = normalize_fields(shape.fields)?;
        for field in &fields {
            self.validate_tag(&field.ty)?;
        }

        self.env.define_shape(Shape::new(shape.name, fields));
        Ok(())
    }

    /// Declare `interface <name> extends <bases...> { <own_fields> }`.
    ///
    /// Base shapes merge left to right; own fields merge last and may
    /// re-declare a base field only with an identical type.
    pub fn declare_extension(
        &mut self,
        name: &str,
        bases: &[String],
        own_fields: Vec<FieldSpec>,
    ) -> Result<(), DeclareError> {
        if self.env.has_shape(name) {
            return Err(DeclareError::DuplicateShape(name.to_string()));
        }

        let mut base_shapes = Vec::with_capacity(bases.len());
        for base in bases {
            match self.env.lookup_shape(base) {
                Some(shape) => base_shapes.push(shape),
                None => return Err(DeclareError::UndefinedShape(base.clone())),
            }
        }

        let merged = merge_all(name, &base_shapes)?;

        let own_fields = normalize_fields(own_fields)?;
        for field in &own_fields {
            self.validate_tag(&field.ty)?;
        }
        let own = Shape::new(name, own_fields);
        let shape = merge_shapes(&merged, &own)?.renamed(name);

        self.env.define_shape(shape);
        Ok(())
    }

    fn validate_tag(&self, tag: &TypeTag) -> Result<(), DeclareError> {
        match tag {
            TypeTag::Enum(name) => {
                if !self.env.has_enum(name) {
                    return Err(DeclareError::UndefinedEnum(name.clone()));
                }
                Ok(())
            }
            TypeTag::Union(members) => {
                for member in members {
                    self.validate_tag(member)?;
                }
                Ok(())
            }
            TypeTag::Function {
                params,
                return_type,
            } => {
                for param in params {
                    self.validate_tag(param)?;
                }
                self.validate_tag(return_type)
            }
            _ => Ok(()),
        }
    }
}
