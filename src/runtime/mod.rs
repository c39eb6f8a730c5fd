//! Object/class kernel for the Opal runtime.
//!
//! Every runtime entity is an object: an object carries a reference to its
//! class and, when it wraps a host primitive, a native value. Classes are
//! themselves objects that add a method table, a superclass link, and the
//! ability to manufacture instances. Method dispatch walks the superclass
//! chain explicitly; nothing here leans on the host language's own dispatch.
//!
//! # Reference-Graph Invariants
//! Objects and classes are shared through `Rc<RefCell<..>>` handles, so the
//! shape of the reference graph matters:
//!
//! - Superclass chains are acyclic and finite. `lookup` walks at most
//!   chain-depth links before it either returns a method or fails.
//! - The class-of graph carries exactly one intentional cycle: the root
//!   metaclass `Class` is its own class. That one-node `Rc` cycle is never
//!   collected, which is acceptable because classes are process-wide
//!   singletons that live until exit anyway.
//! - Instances point up into the class graph; classes never point back down
//!   at instances, so no further cycles can form.
//!
//! # Bootstrap
//! The `Class`-is-its-own-class knot cannot be tied in a single call. The
//! class-of link is therefore late-bound: `RuntimeClass::create` leaves it
//! absent while the [`ClassRegistry`](registry::ClassRegistry) is not yet
//! marked ready, and the bootstrap driver patches the root metaclass back to
//! itself once it is registered under `"Class"`. After `mark_ready`, every
//! freshly created class resolves its class-of link through the registry and
//! the absent state can no longer be observed.

use std::{cell::RefCell, rc::Rc};

use crate::runtime::{class::RuntimeClass, object::RuntimeObject};

pub mod class;
pub mod error;
pub mod leak_detector;
pub mod method;
pub mod object;
pub mod registry;
pub mod value;

/// A strong, shared reference to a runtime object.
pub type ObjectRef = Rc<RefCell<RuntimeObject>>;

/// A strong, shared reference to a runtime class.
pub type ClassRef = Rc<RefCell<RuntimeClass>>;
