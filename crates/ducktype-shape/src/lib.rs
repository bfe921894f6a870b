//! # Ducktype Shape Model
//!
//! Structural shape definitions for the ducktype checker.
//! A shape is a named, ordered set of typed fields; shapes are built once
//! and never mutated.

mod shape;
mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use shape::{FieldSpec, Shape};
pub use types::TypeTag;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tag_display() {
        assert_eq!(format!("{}", TypeTag::String), "string");
        assert_eq!(format!("{}", TypeTag::Number), "number");
        assert_eq!(format!("{}", TypeTag::Date), "Date");
        assert_eq!(format!("{}", TypeTag::Enum("Gender".to_string())), "Gender");
    }

    #[test]
    fn test_union_display() {
        let ty = TypeTag::Union(vec![TypeTag::String, TypeTag::Null]);
        assert_eq!(format!("{}", ty), "string | null");
    }

    #[test]
    fn test_function_display() {
        let ty = TypeTag::Function {
            params: vec![],
            return_type: Box::new(TypeTag::Void),
        };
        assert_eq!(format!("{}", ty), "() => void");

        let ty = TypeTag::Function {
            params: vec![TypeTag::Number, TypeTag::Number],
            return_type: Box::new(TypeTag::Number),
        };
        assert_eq!(format!("{}", ty), "(number, number) => number");
    }

    #[test]
    fn test_shape_field_lookup() {
        let shape = Shape::new(
            "AccountSystem",
            vec![
                FieldSpec::required("email", TypeTag::String),
                FieldSpec::required("password", TypeTag::String),
                FieldSpec::required("subscribed", TypeTag::Boolean),
            ],
        );

        assert_eq!(shape.name, "AccountSystem");
        assert_eq!(shape.fields.len(), 3);
        assert!(shape.field("email").is_some());
        assert!(shape.field("nickname").is_none());
    }

    #[test]
    fn test_shape_renamed() {
        let shape = Shape::new("A & B", vec![]).renamed("UserAccount");
        assert_eq!(shape.name, "UserAccount");
    }

    #[test]
    fn test_optional_field() {
        let field = FieldSpec::optional("birth", TypeTag::Date);
        assert!(field.optional);
        assert_eq!(field.ty, TypeTag::Date);
    }
}
