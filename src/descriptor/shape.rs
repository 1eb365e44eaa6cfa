//! Shape checks on raw YAML before it is mapped onto the schema.
//!
//! A value of the wrong kind (a string where the `action` mapping belongs,
//! a mapping where a list item should be text) is removed from the tree and
//! recorded as [`Malformed`]. The rest of the file still deserializes and
//! the lint pass reports the recorded entries next to everything else.

use serde_yaml::{Mapping, Value};

use super::schema::Malformed;

type Fields = &'static [(&'static str, Shape)];

#[derive(Clone, Copy)]
enum Shape {
    Scalar,
    /// A list of scalars.
    Texts,
    /// A nested mapping; null counts as absent.
    Section(Fields),
    /// A list of mappings.
    Records(Fields),
    /// One item of [`Shape::Records`]; null is not allowed.
    Record(Fields),
}

impl Shape {
    fn expected(self) -> &'static str {
        match self {
            Shape::Scalar => "a scalar value",
            Shape::Texts | Shape::Records(_) => "a list",
            Shape::Section(_) | Shape::Record(_) => "a mapping",
        }
    }
}

const ACTION: Fields = &[("description", Shape::Scalar), ("trigger", Shape::Scalar)];

const SOURCE: Fields = &[
    ("name", Shape::Scalar),
    ("location", Shape::Scalar),
    ("validation", Shape::Scalar),
    ("freshness", Shape::Scalar),
];

const REQUIRES: Fields = &[
    ("sources_of_truth", Shape::Records(SOURCE)),
    ("access", Shape::Texts),
    ("environment", Shape::Texts),
];

const OUTPUT: Fields = &[("format", Shape::Scalar), ("destination", Shape::Scalar)];

const PRODUCES: Fields = &[("outputs", Shape::Records(OUTPUT))];

const CONFIDENCE: Fields = &[
    ("maturity", Shape::Scalar),
    ("known_gaps", Shape::Texts),
    ("failure_modes", Shape::Texts),
];

const METADATA: Fields = &[("author", Shape::Scalar), ("created", Shape::Scalar)];

const ROOT: Fields = &[
    ("id", Shape::Scalar),
    ("name", Shape::Scalar),
    ("domain", Shape::Scalar),
    ("version", Shape::Scalar),
    ("action", Shape::Section(ACTION)),
    ("requires", Shape::Section(REQUIRES)),
    ("produces", Shape::Section(PRODUCES)),
    ("confidence", Shape::Section(CONFIDENCE)),
    ("metadata", Shape::Section(METADATA)),
];

/// Null out or drop every mis-shaped value under `root`, in document
/// schema order, and return what was removed.
pub(crate) fn normalize(root: &mut Mapping) -> Vec<Malformed> {
    let mut malformed = Vec::new();
    check_fields(root, ROOT, "", &mut malformed);
    malformed
}

fn check_fields(map: &mut Mapping, fields: Fields, prefix: &str, out: &mut Vec<Malformed>) {
    for (key, shape) in fields {
        let Some(value) = map.get_mut(*key) else {
            continue;
        };
        let path = if prefix.is_empty() {
            (*key).to_string()
        } else {
            format!("{}.{}", prefix, key)
        };
        if !check_value(value, *shape, &path, out) {
            *value = Value::Null;
        }
    }
}

/// `false` when `value` itself has the wrong shape and must be removed.
fn check_value(value: &mut Value, shape: Shape, path: &str, out: &mut Vec<Malformed>) -> bool {
    untag(value);
    if value.is_null() && !matches!(shape, Shape::Record(_)) {
        return true;
    }

    let fits = match (shape, &mut *value) {
        (Shape::Scalar, Value::Sequence(_) | Value::Mapping(_)) => false,
        (Shape::Scalar, _) => true,
        (Shape::Section(fields) | Shape::Record(fields), Value::Mapping(map)) => {
            check_fields(map, fields, path, out);
            true
        }
        (Shape::Texts, Value::Sequence(items)) => {
            check_items(items, Shape::Scalar, path, out);
            true
        }
        (Shape::Records(fields), Value::Sequence(items)) => {
            check_items(items, Shape::Record(fields), path, out);
            true
        }
        _ => false,
    };

    if !fits {
        tracing::debug!(field = path, "dropping mis-shaped value");
        out.push(Malformed {
            field: path.to_string(),
            expected: shape.expected(),
            found: kind_of(value),
        });
    }
    fits
}

fn check_items(items: &mut Vec<Value>, item: Shape, path: &str, out: &mut Vec<Malformed>) {
    let mut index = 0;
    items.retain_mut(|value| {
        let keep = check_value(value, item, &format!("{}[{}]", path, index), out);
        index += 1;
        keep
    });
}

/// Replace a tagged value (`!foo bar`) with what it tags.
fn untag(value: &mut Value) {
    while let Value::Tagged(tagged) = value {
        let inner = std::mem::replace(&mut tagged.value, Value::Null);
        *value = inner;
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(tagged) => kind_of(&tagged.value),
    }
}
