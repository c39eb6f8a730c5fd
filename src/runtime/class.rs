use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::runtime::{
    ClassRef, ObjectRef, error::RuntimeError, leak_detector, method::Method,
    object::RuntimeObject, registry::ClassRegistry, value::NativeValue,
};

/// Global name under which the root metaclass is registered.
pub const METACLASS: &str = "Class";

/// A class in the Opal world. Classes are objects, so a class embeds the
/// object base (carrying its own class-of link) and adds a method table plus
/// a superclass link.
pub struct RuntimeClass {
    base: RuntimeObject,
    methods: HashMap<Rc<str>, Method>,
    superclass: Option<ClassRef>,
}

impl RuntimeClass {
    /// Creates a new class. `Number` is an instance of `Class`, for example.
    ///
    /// The new class's own class-of link is resolved against the registry:
    /// while the registry is not yet marked ready the link is left absent.
    /// This is the first half of the two-phase bootstrap contract; the
    /// driver later patches the root metaclass back to itself through
    /// [`set_class`](Self::set_class) once it is registered as [`METACLASS`].
    pub fn create(registry: &ClassRegistry, superclass: Option<ClassRef>) -> ClassRef {
        let class_of = if registry.is_ready() {
            registry.lookup(METACLASS)
        } else {
            None
        };

        leak_detector::record_class();
        Rc::new(RefCell::new(Self {
            base: RuntimeObject::new(class_of),
            methods: HashMap::new(),
            superclass,
        }))
    }

    /// Resolves a method by walking the superclass chain.
    ///
    /// The receiver's own table always wins over ancestors. The result
    /// depends only on the tables and the chain at call time; redefining a
    /// method changes future lookups, never results already returned.
    pub fn lookup(&self, name: &str) -> Result<Method, RuntimeError> {
        if let Some(method) = self.methods.get(name) {
            return Ok(method.clone());
        }
        match &self.superclass {
            Some(superclass) => superclass.borrow().lookup(name),
            None => Err(RuntimeError::MethodNotFound(name.into())),
        }
    }

    /// Installs a method under its name. Redefinition replaces the previous
    /// entry; last write wins for all subsequent lookups.
    pub fn define_method(&mut self, method: Method) {
        self.methods.insert(Rc::clone(&method.name), method);
    }

    /// True when the class itself defines `name`, ignoring ancestors.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Creates a new instance of this class, for composite user-defined
    /// types. Never fails.
    pub fn instantiate(class: &ClassRef) -> ObjectRef {
        Rc::new(RefCell::new(RuntimeObject::new(Some(Rc::clone(class)))))
    }

    /// Creates an instance of this class holding a host primitive, like a
    /// `Number` wrapping `42`. Never fails.
    pub fn instantiate_with_value(class: &ClassRef, value: NativeValue) -> ObjectRef {
        Rc::new(RefCell::new(RuntimeObject::with_value(
            Some(Rc::clone(class)),
            value,
        )))
    }

    /// Returns this class's own class, if bound.
    pub fn class_of(&self) -> Option<ClassRef> {
        self.base.class_of()
    }

    /// Late-binds this class's own class. The bootstrap driver uses this to
    /// close the `Class`-is-its-own-class cycle.
    pub fn set_class(&mut self, class: ClassRef) {
        self.base.set_class(class);
    }

    /// Returns the direct superclass, if any.
    pub fn superclass(&self) -> Option<ClassRef> {
        self.superclass.clone()
    }
}

impl fmt::Display for RuntimeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class>")
    }
}

// The class-of graph contains the Class -> Class cycle, so a derived Debug
// would recurse without bound.
impl fmt::Debug for RuntimeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuntimeClass({} methods)", self.methods.len())
    }
}
