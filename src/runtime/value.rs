use std::{fmt, rc::Rc};

/// Host primitive embedded in an object that wraps a primitive type.
///
/// Only objects manufactured through `instantiate_with_value` carry one of
/// these; composite user-defined objects leave the slot absent. `Rc<str>`
/// keeps text cloning O(1), matching how the rest of the kernel shares data.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point number.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// UTF-8 text value.
    Text(Rc<str>),
}

impl fmt::Display for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeValue::Integer(v) => write!(f, "{}", v),
            NativeValue::Float(v) => write!(f, "{}", v),
            NativeValue::Boolean(v) => write!(f, "{}", v),
            NativeValue::Text(v) => write!(f, "\"{}\"", v),
        }
    }
}

impl NativeValue {
    /// Returns the canonical type label used in diagnostics.
    ///
    /// These labels are user-visible and are expected to remain stable.
    pub fn type_name(&self) -> &'static str {
        match self {
            NativeValue::Integer(_) => "Int",
            NativeValue::Float(_) => "Float",
            NativeValue::Boolean(_) => "Bool",
            NativeValue::Text(_) => "Text",
        }
    }
}
