//! Structural assignability

use ducktype_shape::{Shape, TypeTag};

use crate::error::AssignabilityError;
use crate::value::Record;

/// Check a candidate record against a target shape.
///
/// Every required field must be present with a compatible value type;
/// optional fields may be absent but must type-match when present. Extra
/// candidate fields are permitted and ignored — a record "is" the shape
/// as long as it has at least the required members.
///
/// All failures are collected, not just the first.
pub fn check_assignable(candidate: &Record, target: &Shape) -> Result<(), Vec<AssignabilityError>> {
    let mut errors = Vec::new();

    for field in &target.fields {
        match candidate.get(&field.name) {
            None => {
                if !field.optional {
                    errors.push(AssignabilityError::MissingField {
                        field: field.name.clone(),
                    });
                }
            }
            Some(value) => {
                let actual = value.type_tag();
                // `field?: T` means `T | undefined`, so an optional field
                // admits an explicit undefined value. null is distinct
                // and never implied.
                let undefined_ok = field.optional && actual == TypeTag::Undefined;
                if !undefined_ok && !tag_assignable(&actual, &field.ty) {
                    errors.push(AssignabilityError::TypeMismatch {
                        field: field.name.clone(),
                        expected: field.ty.clone(),
                        actual,
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Boolean form of [`check_assignable`].
pub fn is_assignable(candidate: &Record, target: &Shape) -> bool {
    check_assignable(candidate, target).is_ok()
}

/// Whether a value of type `actual` is acceptable where `expected` is
/// declared.
pub fn tag_assignable(actual: &TypeTag, expected: &TypeTag) -> bool {
    if actual == expected {
        return true;
    }

    match (actual, expected) {
        // Everything is assignable to unknown
        (_, TypeTag::Unknown) => true,
        // Source is a union: ALL members must be assignable to target
        (TypeTag::Union(members), _) => {
            members.iter().all(|m| tag_assignable(m, expected))
        }
        // Target is a union: source must be assignable to ANY member
        (_, TypeTag::Union(members)) => {
            members.iter().any(|m| tag_assignable(actual, m))
        }
        // Function compatibility: same arity, params compatible in either
        // direction, covariant return
        (
            TypeTag::Function {
                params: actual_params,
                return_type: actual_ret,
            },
            TypeTag::Function {
                params: expected_params,
                return_type: expected_ret,
            },
        ) => {
            if actual_params.len() != expected_params.len() {
                return false;
            }
            for (ap, ep) in actual_params.iter().zip(expected_params.iter()) {
                if !tag_assignable(ep, ap) && !tag_assignable(ap, ep) {
                    return false;
                }
            }
            tag_assignable(actual_ret, expected_ret)
        }
        _ => false,
    }
}
