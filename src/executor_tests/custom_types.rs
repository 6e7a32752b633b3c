use arcstr::{ArcStr, literal};
use pretty_assertions::assert_eq;

use crate::{
    CompileError, Config, DuplicatePolicy, EnumMeta, EnumValue, InputValue, Member, MetaType,
    Reflect, Registry, ScalarMeta, Side, TypeDescriptor, TypeKind,
    reflect::{
        Primitive,
        probes::{Described, Named},
    },
};

/// String newtype exposed through a custom scalar or enum.
struct Label;

impl Reflect for Label {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive::<Self>(Primitive::String)
    }
}

struct Tagged;

impl Reflect for Tagged {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::composite::<Self>(|| {
            vec![
                Member::new::<Label>("Name"),
                Member::new::<Vec<Label>>("aliases").tag(r#"graphql:",nullable""#),
            ]
        })
    }
}

#[test]
fn overrides_with_custom_scalar() {
    let mut registry = Registry::new();
    let scalar = registry
        .register_scalar::<Label>(
            ScalarMeta::new(literal!("Label")).description(literal!("Free-form label.")),
        )
        .expect("registers");

    let tagged = registry.compile_object::<Tagged>().expect("compiles");
    let args = registry.compile_arguments::<Tagged>().expect("compiles");

    let name = tagged.field_by_name("Name").expect("field");
    assert!(name.field_type.nullable().ptr_eq(&scalar));
    assert_eq!(name.field_type.to_string(), "Label!");
    assert_eq!(
        tagged.field_by_name("aliases").map(|f| f.field_type.to_string()).as_deref(),
        Some("[Label]"),
    );
    assert!(args["Name"].field_type.nullable().ptr_eq(&scalar));
    assert!(
        registry
            .get_type::<Label>(Side::Input)
            .expect("registered")
            .ptr_eq(&scalar),
    );
}

#[test]
fn overrides_with_raw_enum() {
    let mut registry = Registry::new();
    let meta = EnumMeta::new(
        literal!("Label"),
        &[
            EnumValue::new(literal!("A")).value(InputValue::scalar("a")),
            EnumValue::new(literal!("B")).value(InputValue::scalar("b")),
        ],
    );
    let en = registry.register_enum::<Label>(meta).expect("registers");

    let tagged = registry.compile_object::<Tagged>().expect("compiles");

    let name = &tagged.field_by_name("Name").expect("field").field_type;
    assert!(name.nullable().ptr_eq(&en));
    assert_eq!(name.nullable().type_kind(), TypeKind::Enum);
    assert!(name.nullable().is_leaf());
}

struct Color;

impl Named for Color {
    fn name() -> ArcStr {
        literal!("Colour")
    }
}

impl Described for Color {
    fn description() -> ArcStr {
        literal!("Primary colour.")
    }
}

impl Reflect for Color {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive::<Self>(Primitive::String)
            .named::<Self>()
            .described::<Self>()
    }
}

#[test]
fn builds_enum_from_values() {
    let mut registry = Registry::new();

    let en = registry
        .register_enum_values::<Color, _>([
            ("RED", InputValue::scalar("red")),
            ("GREEN", InputValue::scalar("green")),
        ])
        .expect("registers");

    let MetaType::Enum(meta) = en.meta() else {
        panic!("expected enum, found: {en}");
    };
    assert_eq!(meta.name.as_str(), "Colour");
    assert_eq!(meta.description.as_deref(), Some("Primary colour."));
    assert_eq!(
        meta.values
            .iter()
            .map(|v| (v.name.as_str(), v.value.clone()))
            .collect::<Vec<_>>(),
        [
            ("RED", Some(InputValue::scalar("red"))),
            ("GREEN", Some(InputValue::scalar("green"))),
        ],
    );
    assert!(registry.get_type::<Color>(Side::Output).expect("registered").ptr_eq(&en));
}

#[test]
fn ignores_duplicates_by_default() {
    let mut registry = Registry::new();

    let first = registry
        .register_enum_values::<Color, _>([("RED", InputValue::scalar("red"))])
        .expect("registers");
    let second = registry
        .register_scalar::<Color>(ScalarMeta::new(literal!("Color")))
        .expect("ignored");
    let builtin = registry
        .register_scalar::<String>(ScalarMeta::new(literal!("Text")))
        .expect("ignored");

    assert!(first.ptr_eq(&second));
    assert_eq!(builtin.name(), Some("String"));
}

#[test]
fn rejects_duplicates_when_configured() {
    let mut registry =
        Registry::with_config(Config::default().duplicates(DuplicatePolicy::Reject));

    registry
        .register_scalar::<Label>(ScalarMeta::new(literal!("Label")))
        .expect("registers");

    assert_eq!(
        registry.register_scalar::<Label>(ScalarMeta::new(literal!("Label"))),
        Err(CompileError::DuplicateType {
            type_name: literal!("Label"),
        }),
    );
    assert!(matches!(
        registry.register_scalar::<bool>(ScalarMeta::new(literal!("Bool"))),
        Err(CompileError::DuplicateType { .. }),
    ));

    registry.compile_input::<Tagged>().expect("compiles");
    assert!(matches!(
        registry.register_enum::<Tagged>(EnumMeta::new(literal!("Tagged"), &[])),
        Err(CompileError::DuplicateType { .. }),
    ));
}

#[test]
fn registration_skips_compilation() {
    struct Opaque;
    impl Reflect for Opaque {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::composite::<Self>(|| vec![Member::new::<u128>("unsupported")])
        }
    }
    struct Holder;
    impl Reflect for Holder {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::composite::<Self>(|| vec![Member::new::<Opaque>("opaque")])
        }
    }

    let mut registry = Registry::new();
    assert!(registry.compile_object::<Holder>().is_err());

    registry
        .register_scalar::<Opaque>(ScalarMeta::new(literal!("Opaque")))
        .expect("registers");

    let holder = registry.compile_object::<Holder>().expect("compiles");
    assert_eq!(
        holder.field_by_name("opaque").map(|f| f.field_type.to_string()).as_deref(),
        Some("Opaque!"),
    );
}

struct Money;

impl Reflect for Money {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::composite::<Self>(|| {
            vec![Member::new::<i64>("cents"), Member::new::<String>("currency")]
        })
    }
}

struct Order;

impl Reflect for Order {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::composite::<Self>(|| {
            vec![
                Member::new::<u32>("id").tag(r#"graphql:",id""#),
                Member::embedded::<Money>("Money").tag(r#"graphql:"total""#),
            ]
        })
    }
}

#[test]
fn keeps_registered_embedded_types_whole() {
    let mut registry = Registry::new();
    let money = registry
        .register_scalar::<Money>(ScalarMeta::new(literal!("Money")))
        .expect("registers");

    let order = registry.compile_object::<Order>().expect("compiles");
    let args = registry.compile_arguments::<Order>().expect("compiles");

    assert_eq!(
        order
            .fields()
            .expect("has fields")
            .iter()
            .map(|(name, f)| format!("{name}: {}", f.field_type))
            .collect::<Vec<_>>(),
        ["id: ID!", "total: Money!"],
    );
    assert!(args["total"].field_type.nullable().ptr_eq(&money));
    assert!(args.get("cents").is_none());
}

#[test]
fn flattens_compiled_embedded_types() {
    let mut registry = Registry::new();
    registry.compile_object::<Money>().expect("compiles");

    let order = registry.compile_object::<Order>().expect("compiles");

    assert_eq!(
        order.fields().expect("has fields").keys().map(|k| k.as_str()).collect::<Vec<_>>(),
        ["id", "cents", "currency"],
    );
}

#[test]
fn rejects_sequence_registration() {
    let mut registry = Registry::new();

    assert_eq!(
        registry.register_scalar::<Vec<u8>>(ScalarMeta::new(literal!("Base64"))),
        Err(CompileError::SequenceRegistration {
            type_name: literal!("Vec<u8>"),
        }),
    );
    assert!(matches!(
        registry.register_enum_values::<[Color; 2], _>([("RED", InputValue::scalar("red"))]),
        Err(CompileError::SequenceRegistration { .. }),
    ));
    assert!(registry.get_type::<Vec<u8>>(Side::Output).is_none());

    let err = registry
        .register_enum::<Vec<Label>>(EnumMeta::new(literal!("Labels"), &[]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "`Vec<Label>` is a sequence and cannot be registered: register its element type",
    );
}
