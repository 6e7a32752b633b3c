use arcstr::{ArcStr, literal};
use pretty_assertions::assert_eq;

use crate::{
    CompileError, InputValue, Member, Reflect, Registry, Side, TypeDescriptor, TypeKind,
    reflect::{
        Primitive,
        probes::{Defaulted, Described, Named},
    },
};

/// Flag defaulting to `true` when omitted.
pub(super) struct Active;

impl Defaulted for Active {
    fn default_value() -> InputValue {
        InputValue::scalar(true)
    }
}

impl Reflect for Active {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive::<Self>(Primitive::Bool).defaulted::<Self>()
    }
}

pub(super) struct Input;

impl Named for Input {
    fn name() -> ArcStr {
        literal!("input")
    }
}

impl Described for Input {
    fn description() -> ArcStr {
        literal!("input")
    }
}

impl Reflect for Input {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::composite::<Self>(|| {
            vec![
                Member::new::<u32>("ID").tag(r#"graphql:"id,id""#),
                Member::new::<Active>("Active"),
            ]
        })
        .named::<Self>()
        .described::<Self>()
    }
}

#[test]
fn compiles_input_object() {
    let mut registry = Registry::new();

    let input = registry.compile_input::<Input>().expect("compiles");

    assert_eq!(input.type_kind(), TypeKind::InputObject);
    assert_eq!(input.name(), Some("input"));
    assert_eq!(input.description().map(ArcStr::as_str), Some("input"));
    assert!(input.field_by_name("id").is_none(), "no output fields");

    let id = input.input_field_by_name("id").expect("field");
    assert_eq!(id.field_type.to_string(), "ID!");
    assert_eq!(id.default_value, None);

    let active = input.input_field_by_name("Active").expect("field");
    assert_eq!(active.field_type.to_string(), "Boolean!");
    assert_eq!(active.default_value, Some(InputValue::scalar(true)));
}

#[test]
fn compiles_input_of_value() {
    let mut registry = Registry::new();

    let by_type = registry.compile_input::<Input>().expect("compiles");
    let by_value = registry.compile_input_of(&Input).expect("compiles");

    assert!(by_type.ptr_eq(&by_value));
    assert!(registry.get_type::<Input>(Side::Output).is_none());
}

#[test]
fn keeps_sides_apart() {
    let mut registry = Registry::new();

    let output = registry.compile_object::<Input>().expect("compiles");
    let input = registry.compile_input::<Input>().expect("compiles");

    assert_eq!(output.type_kind(), TypeKind::Object);
    assert_eq!(input.type_kind(), TypeKind::InputObject);
    assert!(registry.lookup(Side::Output, &Input::descriptor()).expect("cached").ptr_eq(&output));
    assert!(registry.lookup(Side::Input, &Input::descriptor()).expect("cached").ptr_eq(&input));
}

#[test]
fn detects_cycles() {
    struct Filter;
    struct Condition;
    impl Reflect for Filter {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::composite::<Self>(|| {
                vec![Member::new::<Vec<Condition>>("and").tag(r#"graphql:",nullable""#)]
            })
        }
    }
    impl Reflect for Condition {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::composite::<Self>(|| {
                vec![
                    Member::new::<String>("field"),
                    Member::new::<Option<Box<Filter>>>("nested").tag(r#"graphql:",nullable""#),
                ]
            })
        }
    }

    let mut registry = Registry::new();

    for result in [
        registry.compile_input::<Filter>(),
        registry.compile_object::<Filter>(),
    ] {
        let err = result.unwrap_err();
        assert!(matches!(err, CompileError::CircularReference { .. }));
        assert_eq!(err.type_name(), "Filter");
    }
    assert_eq!(
        registry.compile_input::<Condition>().unwrap_err().to_string(),
        "`Condition` contains itself: Condition -> Filter -> Condition",
    );
}
