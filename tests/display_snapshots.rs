use std::rc::Rc;

use insta::assert_snapshot;
use opal::runtime::class::RuntimeClass;
use opal::runtime::error::RuntimeError;
use opal::runtime::method::{Method, MethodFn};
use opal::runtime::registry::ClassRegistry;
use opal::runtime::value::NativeValue;

fn noop_body() -> MethodFn {
    Rc::new(|receiver, _args| Ok(receiver))
}

#[test]
fn snapshot_method_not_found_message() {
    let err = RuntimeError::MethodNotFound("speak".into());
    assert_snapshot!(err.to_string(), @"Method not found: speak");
}

#[test]
fn snapshot_wrapped_primitive_rendering() {
    let registry = ClassRegistry::new();
    let number = RuntimeClass::create(&registry, None);

    let n = RuntimeClass::instantiate_with_value(&number, NativeValue::Integer(42));
    assert_snapshot!(n.borrow().to_string(), @"42");

    let t = RuntimeClass::instantiate_with_value(
        &number,
        NativeValue::Text("hello".to_string().into()),
    );
    assert_snapshot!(t.borrow().to_string(), @r#""hello""#);
}

#[test]
fn snapshot_plain_object_and_class_rendering() {
    let registry = ClassRegistry::new();
    let class = RuntimeClass::create(&registry, None);
    let instance = RuntimeClass::instantiate(&class);

    assert_snapshot!(instance.borrow().to_string(), @"<object>");
    assert_snapshot!(class.borrow().to_string(), @"<class>");
}

#[test]
fn snapshot_debug_rendering() {
    let registry = ClassRegistry::new();
    let class = RuntimeClass::create(&registry, None);
    class
        .borrow_mut()
        .define_method(Method::new("speak", vec!["volume".into()], noop_body()));

    assert_snapshot!(format!("{:?}", class.borrow()), @"RuntimeClass(1 methods)");
    assert_snapshot!(
        format!("{:?}", class.borrow().lookup("speak").unwrap()),
        @"Method(speak/1)"
    );
}
