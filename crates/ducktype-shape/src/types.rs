//! Type tags for shape fields

use std::fmt;

/// Type category of a shape field.
///
/// A closed enumeration covering the categories the checker understands.
/// Composite categories (`Union`, `Function`) nest recursively.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeTag {
    /// Primitive types
    String,
    Number,
    Boolean,
    Void,
    Null,
    Undefined,
    Unknown,

    /// Calendar date (a distinct category, not a string)
    Date,

    /// Named enum type, matched by name
    Enum(String),

    /// Union type: T1 | T2 | ...
    Union(Vec<TypeTag>),

    /// Function member type
    Function {
        params: Vec<TypeTag>,
        return_type: Box<TypeTag>,
    },
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::String => write!(f, "string"),
            TypeTag::Number => write!(f, "number"),
            TypeTag::Boolean => write!(f, "boolean"),
            TypeTag::Void => write!(f, "void"),
            TypeTag::Null => write!(f, "null"),
            TypeTag::Undefined => write!(f, "undefined"),
            TypeTag::Unknown => write!(f, "unknown"),
            TypeTag::Date => write!(f, "Date"),
            TypeTag::Enum(name) => write!(f, "{}", name),
            TypeTag::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
            TypeTag::Function {
                params,
                return_type,
            } => {
                write!(f, "(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ") => {}", return_type)
            }
        }
    }
}
