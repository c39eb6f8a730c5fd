use std::fmt;

use crate::runtime::{ClassRef, leak_detector, value::NativeValue};

/// Generic runtime value: a class reference plus an optional native value.
///
/// The class link is absent only inside the bootstrap window, while the root
/// metaclass is being knotted to itself. Once the runtime is bootstrapped,
/// every object's class link is populated.
pub struct RuntimeObject {
    class: Option<ClassRef>,
    value: Option<NativeValue>,
}

impl RuntimeObject {
    /// Creates an object of the given class. No validation: an absent class
    /// is legal during bootstrap.
    pub fn new(class: Option<ClassRef>) -> Self {
        leak_detector::record_object();
        Self { class, value: None }
    }

    /// Creates an object of the given class wrapping a host primitive.
    pub fn with_value(class: Option<ClassRef>, value: NativeValue) -> Self {
        leak_detector::record_object();
        Self {
            class,
            value: Some(value),
        }
    }

    /// Returns a shared handle to this object's class, if bound.
    pub fn class_of(&self) -> Option<ClassRef> {
        self.class.clone()
    }

    /// Returns the embedded host primitive, if any.
    pub fn native_value(&self) -> Option<&NativeValue> {
        self.value.as_ref()
    }

    /// Late-binds the class link. This is the seam the bootstrap driver uses
    /// to point the root metaclass back at itself.
    pub fn set_class(&mut self, class: ClassRef) {
        self.class = Some(class);
    }
}

impl fmt::Display for RuntimeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "<object>"),
        }
    }
}

// The class-of graph contains the Class -> Class cycle, so a derived Debug
// would recurse without bound.
impl fmt::Debug for RuntimeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuntimeObject({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_display() {
        let plain = RuntimeObject::new(None);
        assert_eq!(plain.to_string(), "<object>");

        let wrapped = RuntimeObject::with_value(None, NativeValue::Integer(42));
        assert_eq!(wrapped.to_string(), "42");
    }

    #[test]
    fn test_class_absent_during_bootstrap() {
        let obj = RuntimeObject::new(None);
        assert!(obj.class_of().is_none());
        assert!(obj.native_value().is_none());
    }

    #[test]
    fn test_native_value_access() {
        let obj = RuntimeObject::with_value(None, NativeValue::Boolean(true));
        assert_eq!(obj.native_value(), Some(&NativeValue::Boolean(true)));
    }
}
