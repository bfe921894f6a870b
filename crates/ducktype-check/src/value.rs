//! Candidate values
//!
//! Runtime values supplied per compatibility check. A `Record` is the
//! concrete object checked against a target shape.

use std::fmt;

use chrono::NaiveDate;
use ducktype_shape::TypeTag;

/// A concrete runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    /// Reference to a member of a declared enum, e.g. `Gender.Male`
    EnumMember { enum_name: String, member: String },
    Null,
    Undefined,
    /// Function member, carried by its signature
    Function {
        params: Vec<TypeTag>,
        return_type: TypeTag,
    },
}

impl Value {
    /// The type category this value belongs to.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::String(_) => TypeTag::String,
            Value::Number(_) => TypeTag::Number,
            Value::Boolean(_) => TypeTag::Boolean,
            Value::Date(_) => TypeTag::Date,
            Value::EnumMember { enum_name, .. } => TypeTag::Enum(enum_name.clone()),
            Value::Null => TypeTag::Null,
            Value::Undefined => TypeTag::Undefined,
            Value::Function {
                params,
                return_type,
            } => TypeTag::Function {
                params: params.clone(),
                return_type: Box::new(return_type.clone()),
            },
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Date(d) => write!(f, "{}", d),
            Value::EnumMember { enum_name, member } => {
                write!(f, "{}.{}", enum_name, member)
            }
            Value::Null => write!(f, "null"),
            Value::Undefined => write!(f, "undefined"),
            Value::Function {
                params,
                return_type,
            } => {
                let tag = TypeTag::Function {
                    params: params.clone(),
                    return_type: Box::new(return_type.clone()),
                };
                write!(f, "[function {}]", tag)
            }
        }
    }
}

/// A candidate record: ordered field-name → value pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion; later values for the same name win.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: String, value: Value) {
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
