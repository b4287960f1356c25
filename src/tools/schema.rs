//! Declared argument shapes and their validation.
//!
//! Every tool lists its fields as [`ArgSpec`]s. Incoming arguments are checked
//! against that list before anything is deserialized, so the caller always
//! learns which field was wrong.

use crate::error::ToolError;
use serde_json::{Map, Value};

/// Primitive type of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    String,
    /// Whole number in `min..=max`
    Integer { min: i64, max: i64 },
    StringList,
    /// String restricted to the listed values
    Enum(&'static [&'static str]),
}

impl ArgType {
    fn describe(&self) -> String {
        match self {
            Self::String => "a string".to_string(),
            Self::Integer { min, max } => format!("an integer from {} to {}", min, max),
            Self::StringList => "an array of strings".to_string(),
            Self::Enum(values) => format!("one of: {}", values.join(", ")),
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer { min, max } => value
                .as_i64()
                .is_some_and(|n| (*min..=*max).contains(&n)),
            Self::StringList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            Self::Enum(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
        }
    }
}

/// One named argument of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub ty: ArgType,
    pub required: bool,
}

impl ArgSpec {
    pub const fn required(name: &'static str, ty: ArgType) -> Self {
        Self {
            name,
            ty,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, ty: ArgType) -> Self {
        Self {
            name,
            ty,
            required: false,
        }
    }
}

/// Check `arguments` against `specs` and return the argument object.
///
/// A missing or `null` argument payload counts as an empty object. Optional
/// fields may be `null`; required ones may not.
pub fn validate_arguments(specs: &[ArgSpec], arguments: &Value) -> Result<Map<String, Value>, ToolError> {
    let object = match arguments {
        Value::Null => Map::new(),
        Value::Object(map) => map.clone(),
        _ => {
            return Err(ToolError::invalid(
                "arguments",
                "expected an object of named arguments",
            ))
        }
    };

    if let Some(unknown) = object
        .keys()
        .find(|key| !specs.iter().any(|spec| spec.name == key.as_str()))
    {
        let expected = if specs.is_empty() {
            "this tool takes no arguments".to_string()
        } else {
            format!(
                "unknown field, expected one of: {}",
                specs.iter().map(|s| s.name).collect::<Vec<_>>().join(", ")
            )
        };
        return Err(ToolError::invalid(unknown.as_str(), expected));
    }

    for spec in specs {
        match object.get(spec.name) {
            None if spec.required => {
                return Err(ToolError::invalid(spec.name, "missing required field"));
            }
            Some(Value::Null) if spec.required => {
                return Err(ToolError::invalid(spec.name, "must not be null"));
            }
            None | Some(Value::Null) => {}
            Some(value) if !spec.ty.accepts(value) => {
                return Err(ToolError::invalid(
                    spec.name,
                    format!("expected {}", spec.ty.describe()),
                ));
            }
            Some(_) => {}
        }
    }

    Ok(object)
}
