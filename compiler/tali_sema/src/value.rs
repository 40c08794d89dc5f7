//! The constant-value lattice.

use std::fmt;

use crate::errors::SemanticsError;

/// The classification of an expression: dynamic, or statically known
/// with a decoded value.
///
/// `Null` is the uninitialized state; the classifier never returns it.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ConstValue {
    /// Uninitialized; not a valid classification result.
    #[default]
    Null,
    /// Only known at run time.
    Dynamic,
    /// A compile-time integer.
    Int(u32),
    /// A compile-time character byte.
    Char(u8),
    /// A compile-time string.
    Str(String),
}

impl ConstValue {
    /// The tag's name, used in mismatch reports.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            ConstValue::Null => "null",
            ConstValue::Dynamic => "dynamic",
            ConstValue::Int(_) => "integer",
            ConstValue::Char(_) => "char",
            ConstValue::Str(_) => "string",
        }
    }

    /// True for a statically known value.
    pub const fn is_static(&self) -> bool {
        matches!(
            self,
            ConstValue::Int(_) | ConstValue::Char(_) | ConstValue::Str(_)
        )
    }

    /// True for a run-time-only classification.
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, ConstValue::Dynamic)
    }

    /// The integer value, or a tag-mismatch error.
    pub fn as_integer(&self) -> Result<u32, SemanticsError> {
        match self {
            ConstValue::Int(value) => Ok(*value),
            other => Err(SemanticsError::tag_mismatch("integer", other.kind_name())),
        }
    }

    /// The character byte, or a tag-mismatch error.
    pub fn as_char(&self) -> Result<u8, SemanticsError> {
        match self {
            ConstValue::Char(value) => Ok(*value),
            other => Err(SemanticsError::tag_mismatch("char", other.kind_name())),
        }
    }

    /// The string value, or a tag-mismatch error.
    pub fn as_string(&self) -> Result<&str, SemanticsError> {
        match self {
            ConstValue::Str(value) => Ok(value),
            other => Err(SemanticsError::tag_mismatch("string", other.kind_name())),
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Null => write!(f, "null"),
            ConstValue::Dynamic => write!(f, "dynamic"),
            ConstValue::Int(value) => write!(f, "{value}"),
            ConstValue::Char(value) => write!(f, "'{}'", char::from(*value).escape_default()),
            ConstValue::Str(value) => write!(f, "{value:?}"),
        }
    }
}
