use std::{fmt, rc::Rc};

use crate::runtime::{ObjectRef, leak_detector};

/// Signature shared by every method body the kernel can store.
///
/// The kernel only stores and returns bodies; invoking one is the
/// evaluator's job. `Rc<dyn Fn>` rather than a plain fn pointer lets the
/// evaluator capture parsed bodies in closures.
pub type MethodFn = Rc<dyn Fn(ObjectRef, &[ObjectRef]) -> Result<ObjectRef, String>>;

/// A method definition installed on a class.
#[derive(Clone)]
pub struct Method {
    pub name: Rc<str>,
    pub params: Vec<Rc<str>>,
    pub body: MethodFn,
}

impl Method {
    pub fn new(name: impl Into<Rc<str>>, params: Vec<Rc<str>>, body: MethodFn) -> Self {
        leak_detector::record_method();
        Self {
            name: name.into(),
            params,
            body,
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method({}/{})", self.name, self.arity())
    }
}

// Equality is definition identity: two handles are equal only when they share
// the same body, so a lookup result can be attributed to its defining class.
impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Rc::ptr_eq(&self.body, &other.body)
    }
}
