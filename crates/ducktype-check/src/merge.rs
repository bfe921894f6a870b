//! Shape composition (extension / intersection)

use ducktype_shape::{FieldSpec, Shape};

use crate::error::CompositionError;

/// Merge two shapes into one, the `interface C extends A, B` rule.
///
/// Shared field names must agree in type: an agreeing duplicate collapses
/// to a single copy, a disagreeing one is a composition error. Fields
/// unique to one side carry over unchanged. The result keeps `a`'s field
/// order, then `b`'s novel fields in order, under the synthesized name
/// `"A & B"` (rename via [`Shape::renamed`]).
pub fn merge_shapes(a: &Shape, b: &Shape) -> Result<Shape, CompositionError> {
    let mut fields = Vec::with_capacity(a.fields.len() + b.fields.len());

    for field in &a.fields {
        match b.field(&field.name) {
            Some(other) if other.ty == field.ty => {
                // A shared field is optional only if both sides agree —
                // a value of the merged shape must satisfy both.
                fields.push(FieldSpec {
                    name: field.name.clone(),
                    ty: field.ty.clone(),
                    optional: field.optional && other.optional,
                });
            }
            Some(other) => {
                return Err(CompositionError {
                    field: field.name.clone(),
                    left: field.ty.clone(),
                    right: other.ty.clone(),
                });
            }
            None => fields.push(field.clone()),
        }
    }

    for field in &b.fields {
        if a.field(&field.name).is_none() {
            fields.push(field.clone());
        }
    }

    Ok(Shape::new(format!("{} & {}", a.name, b.name), fields))
}

/// N-way extension: fold [`merge_shapes`] left to right and give the
/// result its declared name. The first failing pair wins.
pub fn merge_all(name: &str, bases: &[&Shape]) -> Result<Shape, CompositionError> {
    let mut iter = bases.iter();
    let mut merged = match iter.next() {
        Some(first) => (*first).clone(),
        None => return Ok(Shape::new(name, Vec::new())),
    };

    for base in iter {
        merged = merge_shapes(&merged, base)?;
    }

    Ok(merged.renamed(name))
}

/// Collapse duplicate field names within a single declaration.
///
/// Re-declaring a field with the same type is a no-op; with a different
/// type it is a composition error, same as a cross-shape conflict.
pub fn normalize_fields(fields: Vec<FieldSpec>) -> Result<Vec<FieldSpec>, CompositionError> {
    let mut out: Vec<FieldSpec> = Vec::with_capacity(fields.len());

    for field in fields {
        match out.iter_mut().find(|f| f.name == field.name) {
            Some(existing) if existing.ty == field.ty => {
                existing.optional = existing.optional && field.optional;
            }
            Some(existing) => {
                return Err(CompositionError {
                    field: field.name,
                    left: existing.ty.clone(),
                    right: field.ty,
                });
            }
            None => out.push(field),
        }
    }

    Ok(out)
}
