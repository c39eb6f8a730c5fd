use std::{error, fmt, rc::Rc};

/// The kernel's single failure mode.
///
/// `lookup` raises this after exhausting the superclass chain. Construction,
/// registration, and instantiation never fail, so no other kinds exist.
/// Recovery is the caller's business; the evaluator decides whether this is
/// a fatal script error or becomes a language-level exception value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    MethodNotFound(Rc<str>),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::MethodNotFound(name) => write!(f, "Method not found: {}", name),
        }
    }
}

impl error::Error for RuntimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_found_display() {
        let err = RuntimeError::MethodNotFound("speak".into());
        assert_eq!(err.to_string(), "Method not found: speak");
    }

    #[test]
    fn test_carries_method_name() {
        let RuntimeError::MethodNotFound(name) = RuntimeError::MethodNotFound("bark".into());
        assert_eq!(&*name, "bark");
    }
}
