use std::{collections::HashMap, rc::Rc};

use crate::runtime::ClassRef;

/// Process-wide, name-keyed table of class singletons.
///
/// The registry doubles as the explicit bootstrap context: it starts in the
/// not-ready state, during which `RuntimeClass::create` leaves new classes'
/// class-of links absent. The bootstrap driver registers the core classes,
/// patches the root metaclass, and then calls [`mark_ready`](Self::mark_ready)
/// exactly once. Readiness is monotonic; there is no way back, and no class
/// is ever removed.
pub struct ClassRegistry {
    classes: HashMap<Rc<str>, ClassRef>,
    ready: bool,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
            ready: false,
        }
    }

    /// Registers a class under a global name. Re-registering a name replaces
    /// the previous binding; last write wins.
    pub fn register(&mut self, name: impl Into<Rc<str>>, class: ClassRef) {
        self.classes.insert(name.into(), class);
    }

    /// Looks up a class by name, returning a shared handle.
    pub fn lookup(&self, name: &str) -> Option<ClassRef> {
        self.classes.get(name).cloned()
    }

    /// True once bootstrap has completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Marks bootstrap as complete. From here on, newly created classes
    /// resolve their class-of link through this registry.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}
