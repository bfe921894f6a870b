//! Checker errors
//!
//! All failures are plain values returned to the caller; the checker
//! never panics and never uses errors for control flow.

use std::fmt;

use ducktype_shape::TypeTag;

/// Two shapes declared the same field with different types.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionError {
    /// Name of the conflicting field
    pub field: String,
    /// Type declared by the left-hand shape
    pub left: TypeTag,
    /// Type declared by the right-hand shape
    pub right: TypeTag,
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "conflicting declarations of field '{}': {} vs {}",
            self.field, self.left, self.right
        )
    }
}

/// A candidate record failed to satisfy a target shape.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignabilityError {
    /// Required field absent from the candidate
    MissingField { field: String },
    /// Field present but its value has an incompatible type
    TypeMismatch {
        field: String,
        expected: TypeTag,
        actual: TypeTag,
    },
}

impl fmt::Display for AssignabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignabilityError::MissingField { field } => {
                write!(f, "missing required field '{}'", field)
            }
            AssignabilityError::TypeMismatch {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "field '{}': expected {}, found {}",
                    field, expected, actual
                )
            }
        }
    }
}

/// Declaration-time failure while registering enums and shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclareError {
    /// Shape composition conflict (duplicate field, extension clash)
    Composition(CompositionError),
    /// Extension names a base shape that was never declared
    UndefinedShape(String),
    /// Field references an enum type that was never declared
    UndefinedEnum(String),
    /// Shape name declared twice
    DuplicateShape(String),
    /// Enum name declared twice
    DuplicateEnum(String),
}

impl From<CompositionError> for DeclareError {
    fn from(err: CompositionError) -> Self {
        DeclareError::Composition(err)
    }
}

impl fmt::Display for DeclareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclareError::Composition(err) => write!(f, "{}", err),
            DeclareError::UndefinedShape(name) => {
                write!(f, "undefined shape '{}'", name)
            }
            DeclareError::UndefinedEnum(name) => {
                write!(f, "undefined enum '{}'", name)
            }
            DeclareError::DuplicateShape(name) => {
                write!(f, "duplicate declaration of shape '{}'", name)
            }
            DeclareError::DuplicateEnum(name) => {
                write!(f, "duplicate declaration of enum '{}'", name)
            }
        }
    }
}
