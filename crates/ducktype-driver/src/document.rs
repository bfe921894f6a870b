//! Shape document loader
//!
//! A shape document is a JSON file declaring enums, shapes (optionally
//! extending other shapes), and assignability checks to run:
//!
//! ```json
//! {
//!   "enums": { "Gender": ["Male", "Female", "Other"] },
//!   "shapes": {
//!     "AccountSystem": {
//!       "fields": { "email": "string", "password": "string", "subscribed": "boolean" }
//!     },
//!     "AccountPersonalInfo": {
//!       "fields": { "nickname?": "string", "birth?": "Date", "gender?": "Gender" }
//!     },
//!     "UserAccount": { "extends": ["AccountSystem", "AccountPersonalInfo"] }
//!   },
//!   "checks": [
//!     { "target": "UserAccount", "value": { "email": "max@example.com", "..." : "..." } }
//!   ]
//! }
//! ```
//!
//! A `?` suffix on a field name marks it optional. Candidate values use
//! JSON natives plus the tagged forms `{"$enum": "Gender.Male"}`,
//! `{"$date": "2000-02-01"}`, `{"$undefined": true}` and
//! `{"$function": {"params": [], "returns": "void"}}`.

use std::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use ducktype_check::{DeclareError, Record, ShapeChecker, ShapeEnv, Value};
use ducktype_shape::{FieldSpec, Shape, TypeTag};

#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub enums: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub shapes: IndexMap<String, ShapeDef>,
    #[serde(default)]
    pub checks: Vec<CheckDef>,
}

#[derive(Debug, Deserialize)]
pub struct ShapeDef {
    #[serde(default)]
    pub extends: Vec<String>,
    #[serde(default)]
    pub fields: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckDef {
    pub target: String,
    pub value: JsonValue,
}

/// Tagged-form value for `$function` members.
#[derive(Debug, Deserialize)]
struct FunctionDef {
    #[serde(default)]
    params: Vec<String>,
    returns: String,
}

/// A document with all declarations resolved and all values parsed.
#[derive(Debug)]
pub struct LoadedDocument {
    pub checker: ShapeChecker,
    pub checks: Vec<Check>,
}

/// One assignability check to run: a candidate record against a
/// declared target shape.
#[derive(Debug)]
pub struct Check {
    pub target: String,
    pub record: Record,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// Document is not valid JSON or does not match the schema
    Json(String),
    /// Field declares a type name that is neither built-in nor a declared enum
    UnknownType { field: String, ty: String },
    /// Check targets a shape that was never declared
    UnknownShape(String),
    /// `$enum` value references an undeclared enum
    UnknownEnum(String),
    /// `$enum` value references a member the enum does not have
    UnknownEnumMember { enum_name: String, member: String },
    /// `$date` value is not a YYYY-MM-DD date
    InvalidDate(String),
    /// Candidate field value has no type category (e.g. arrays)
    UnsupportedValue { field: String, reason: String },
    /// Declaration failed (duplicate, conflict, undefined reference)
    Declare(DeclareError),
}

impl From<DeclareError> for DocumentError {
    fn from(err: DeclareError) -> Self {
        DocumentError::Declare(err)
    }
}

impl DocumentError {
    /// Error code for CLI reporting.
    pub fn code(&self) -> &'static str {
        match self {
            DocumentError::Declare(_) => "E2000",
            _ => "E1000",
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Json(msg) => write!(f, "invalid document: {}", msg),
            DocumentError::UnknownType { field, ty } => {
                write!(f, "field '{}': unknown type '{}'", field, ty)
            }
            DocumentError::UnknownShape(name) => {
                write!(f, "check targets undeclared shape '{}'", name)
            }
            DocumentError::UnknownEnum(name) => {
                write!(f, "value references undeclared enum '{}'", name)
            }
            DocumentError::UnknownEnumMember { enum_name, member } => {
                write!(f, "enum '{}' has no member '{}'", enum_name, member)
            }
            DocumentError::InvalidDate(value) => {
                write!(f, "invalid date '{}' (expected YYYY-MM-DD)", value)
            }
            DocumentError::UnsupportedValue { field, reason } => {
                write!(f, "field '{}': unsupported value ({})", field, reason)
            }
            DocumentError::Declare(err) => write!(f, "{}", err),
        }
    }
}

/// Parse a shape document and resolve every declaration.
///
/// Enums are declared first, then shapes in document order (so `extends`
/// can only reference shapes declared above, like the sample sources),
/// then the checks' candidate values are parsed and validated.
pub fn load_document(source: &str) -> Result<LoadedDocument, DocumentError> {
    let doc: Document =
        serde_json::from_str(source).map_err(|e| DocumentError::Json(e.to_string()))?;

    let mut checker = ShapeChecker::new();

    for (name, members) in &doc.enums {
        checker.declare_enum(name.clone(), members.clone())?;
    }

    for (name, def) in &doc.shapes {
        let fields = parse_fields(&def.fields, checker.env())?;
        if def.extends.is_empty() {
            checker.declare_shape(Shape::new(name.clone(), fields))?;
        } else {
            checker.declare_extension(name, &def.extends, fields)?;
        }
    }

    let mut checks = Vec::with_capacity(doc.checks.len());
    for check in &doc.checks {
        if checker.lookup_shape(&check.target).is_none() {
            return Err(DocumentError::UnknownShape(check.target.clone()));
        }
        let record = parse_record(&check.value, checker.env())?;
        checks.push(Check {
            target: check.target.clone(),
            record,
        });
    }

    Ok(LoadedDocument { checker, checks })
}

fn parse_fields(
    fields: &IndexMap<String, String>,
    env: &ShapeEnv,
) -> Result<Vec<FieldSpec>, DocumentError> {
    let mut specs = Vec::with_capacity(fields.len());
    for (key, type_name) in fields {
        // `nickname?` declares an optional field
        let (name, optional) = match key.strip_suffix('?') {
            Some(name) => (name, true),
            None => (key.as_str(), false),
        };
        let ty = parse_type(name, type_name, env)?;
        specs.push(FieldSpec {
            name: name.to_string(),
            ty,
            optional,
        });
    }
    Ok(specs)
}

/// Map a document type name to a TypeTag.
///
/// Supports the built-in names, declared enum names, `a | b` unions and
/// `(a, b) => r` function members.
fn parse_type(field: &str, s: &str, env: &ShapeEnv) -> Result<TypeTag, DocumentError> {
    let s = s.trim();

    if let Some((params, return_type)) = s.split_once("=>") {
        let params = params.trim();
        let inner = params
            .strip_prefix('(')
            .and_then(|p| p.strip_suffix(')'))
            .ok_or_else(|| DocumentError::UnknownType {
                field: field.to_string(),
                ty: s.to_string(),
            })?;
        let mut param_tags = Vec::new();
        for part in inner.split(',') {
            let part = part.trim();
            if !part.is_empty() {
                param_tags.push(parse_type(field, part, env)?);
            }
        }
        let return_tag = parse_type(field, return_type.trim(), env)?;
        return Ok(TypeTag::Function {
            params: param_tags,
            return_type: Box::new(return_tag),
        });
    }

    if s.contains('|') {
        let mut members = Vec::new();
        for part in s.split('|') {
            members.push(parse_type(field, part.trim(), env)?);
        }
        return Ok(TypeTag::Union(members));
    }

    match s {
        "string" => Ok(TypeTag::String),
        "number" => Ok(TypeTag::Number),
        "boolean" => Ok(TypeTag::Boolean),
        "Date" => Ok(TypeTag::Date),
        "void" => Ok(TypeTag::Void),
        "null" => Ok(TypeTag::Null),
        "undefined" => Ok(TypeTag::Undefined),
        "unknown" => Ok(TypeTag::Unknown),
        name if env.has_enum(name) => Ok(TypeTag::Enum(name.to_string())),
        _ => Err(DocumentError::UnknownType {
            field: field.to_string(),
            ty: s.to_string(),
        }),
    }
}

fn parse_record(json: &JsonValue, env: &ShapeEnv) -> Result<Record, DocumentError> {
    let object = json
        .as_object()
        .ok_or_else(|| DocumentError::UnsupportedValue {
            field: "<candidate>".to_string(),
            reason: "candidate value must be a JSON object".to_string(),
        })?;

    let mut record = Record::new();
    for (name, value) in object {
        record.insert(name.clone(), parse_value(name, value, env)?);
    }
    Ok(record)
}

fn parse_value(field: &str, json: &JsonValue, env: &ShapeEnv) -> Result<Value, DocumentError> {
    match json {
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Bool(b) => Ok(Value::Boolean(*b)),
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Number(n) => {
            n.as_f64()
                .map(Value::Number)
                .ok_or_else(|| DocumentError::UnsupportedValue {
                    field: field.to_string(),
                    reason: format!("number out of range: {}", n),
                })
        }
        JsonValue::Object(map) => {
            if let Some(JsonValue::String(reference)) = map.get("$enum") {
                return parse_enum_member(reference, env);
            }
            if let Some(JsonValue::String(date)) = map.get("$date") {
                return NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .map(Value::Date)
                    .map_err(|_| DocumentError::InvalidDate(date.clone()));
            }
            if map.contains_key("$undefined") {
                return Ok(Value::Undefined);
            }
            if let Some(func) = map.get("$function") {
                let def: FunctionDef = serde_json::from_value(func.clone())
                    .map_err(|e| DocumentError::Json(e.to_string()))?;
                let mut params = Vec::with_capacity(def.params.len());
                for param in &def.params {
                    params.push(parse_type(field, param, env)?);
                }
                let return_type = parse_type(field, &def.returns, env)?;
                return Ok(Value::Function {
                    params,
                    return_type,
                });
            }
            Err(DocumentError::UnsupportedValue {
                field: field.to_string(),
                reason: "nested objects are not candidate values".to_string(),
            })
        }
        JsonValue::Array(_) => Err(DocumentError::UnsupportedValue {
            field: field.to_string(),
            reason: "arrays are not candidate values".to_string(),
        }),
    }
}

/// `"Gender.Male"` → a validated enum member value.
fn parse_enum_member(reference: &str, env: &ShapeEnv) -> Result<Value, DocumentError> {
    let (enum_name, member) =
        reference
            .split_once('.')
            .ok_or_else(|| DocumentError::UnknownEnum(reference.to_string()))?;
    if !env.has_enum(enum_name) {
        return Err(DocumentError::UnknownEnum(enum_name.to_string()));
    }
    if !env.has_enum_member(enum_name, member) {
        return Err(DocumentError::UnknownEnumMember {
            enum_name: enum_name.to_string(),
            member: member.to_string(),
        });
    }
    Ok(Value::EnumMember {
        enum_name: enum_name.to_string(),
        member: member.to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ducktype_check::check_assignable;

    const ACCOUNT_DOC: &str = r#"{
        "enums": { "Gender": ["Male", "Female", "Other"] },
        "shapes": {
            "AccountSystem": {
                "fields": { "email": "string", "password": "string", "subscribed": "boolean" }
            },
            "AccountPersonalInfo": {
                "fields": { "nickname?": "string", "birth?": "Date", "gender?": "Gender" }
            },
            "UserAccount": { "extends": ["AccountSystem", "AccountPersonalInfo"] }
        },
        "checks": [
            {
                "target": "UserAccount",
                "value": {
                    "email": "max@example.com",
                    "password": "<hashed-password>",
                    "subscribed": false,
                    "nickname": "Maxwell",
                    "gender": { "$enum": "Gender.Male" }
                }
            }
        ]
    }"#;

    #[test]
    fn test_load_account_document() {
        let loaded = load_document(ACCOUNT_DOC).unwrap();

        let user = loaded.checker.lookup_shape("UserAccount").unwrap();
        assert_eq!(user.fields.len(), 6);
        assert_eq!(user.required_fields().count(), 3);

        assert_eq!(loaded.checks.len(), 1);
        let check = &loaded.checks[0];
        assert!(check_assignable(&check.record, user).is_ok());
    }

    #[test]
    fn test_optional_marker_on_field_name() {
        let loaded = load_document(ACCOUNT_DOC).unwrap();
        let info = loaded.checker.lookup_shape("AccountPersonalInfo").unwrap();
        assert!(info.field("nickname").unwrap().optional);
        assert!(info.field("birth").unwrap().optional);
    }

    #[test]
    fn test_union_type_name() {
        let doc = r#"{
            "shapes": {
                "Holder": { "fields": { "value": "string | null" } }
            }
        }"#;
        let loaded = load_document(doc).unwrap();
        let holder = loaded.checker.lookup_shape("Holder").unwrap();
        assert_eq!(
            holder.field("value").unwrap().ty,
            TypeTag::Union(vec![TypeTag::String, TypeTag::Null])
        );
    }

    #[test]
    fn test_function_type_name() {
        let doc = r#"{
            "shapes": {
                "Duck": { "fields": { "noise": "string", "makeNoise": "() => void" } }
            }
        }"#;
        let loaded = load_document(doc).unwrap();
        let duck = loaded.checker.lookup_shape("Duck").unwrap();
        assert_eq!(
            duck.field("makeNoise").unwrap().ty,
            TypeTag::Function {
                params: vec![],
                return_type: Box::new(TypeTag::Void),
            }
        );
    }

    #[test]
    fn test_unknown_type_name() {
        let doc = r#"{
            "shapes": { "X": { "fields": { "value": "Gnome" } } }
        }"#;
        let err = load_document(doc).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::UnknownType { field, ty } if field == "value" && ty == "Gnome"
        ));
    }

    #[test]
    fn test_unknown_enum_member_in_value() {
        let doc = r#"{
            "enums": { "Gender": ["Male", "Female", "Other"] },
            "shapes": { "X": { "fields": { "gender": "Gender" } } },
            "checks": [
                { "target": "X", "value": { "gender": { "$enum": "Gender.Purple" } } }
            ]
        }"#;
        let err = load_document(doc).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::UnknownEnumMember { member, .. } if member == "Purple"
        ));
    }

    #[test]
    fn test_invalid_date_value() {
        let doc = r#"{
            "shapes": { "X": { "fields": { "birth": "Date" } } },
            "checks": [
                { "target": "X", "value": { "birth": { "$date": "soon" } } }
            ]
        }"#;
        let err = load_document(doc).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidDate(v) if v == "soon"));
    }

    #[test]
    fn test_check_against_undeclared_shape() {
        let doc = r#"{
            "checks": [ { "target": "Ghost", "value": {} } ]
        }"#;
        let err = load_document(doc).unwrap_err();
        assert!(matches!(err, DocumentError::UnknownShape(name) if name == "Ghost"));
    }

    #[test]
    fn test_conflicting_extension_reports_composition() {
        let doc = r#"{
            "shapes": {
                "I2": { "fields": { "b": "number", "c": "boolean" } },
                "I3": { "fields": { "a": "string", "c": "string" } },
                "I23": { "extends": ["I2", "I3"] }
            }
        }"#;
        let err = load_document(doc).unwrap_err();
        assert_eq!(err.code(), "E2000");
        assert!(matches!(err, DocumentError::Declare(_)));
    }

    #[test]
    fn test_field_order_follows_document() {
        let loaded = load_document(ACCOUNT_DOC).unwrap();
        let system = loaded.checker.lookup_shape("AccountSystem").unwrap();
        let names: Vec<&str> = system.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["email", "password", "subscribed"]);
    }
}
