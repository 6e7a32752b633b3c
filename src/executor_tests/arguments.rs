use std::time::SystemTime;

use arcstr::literal;
use pretty_assertions::assert_eq;

use crate::{
    Arguments, CompileError, EnumMeta, EnumValue, InputValue, Member, Reflect, Registry, Side,
    TypeDescriptor, TypeKind, reflect::Primitive,
};

use super::input_objects::{Active, Input};

struct Status;

impl Reflect for Status {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive::<Self>(Primitive::String)
    }
}

struct Search;

impl Reflect for Search {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::composite::<Self>(|| {
            vec![
                Member::new::<u32>("ID"),
                Member::new::<String>("Name").tag(r#"graphql:"name""#),
                Member::new::<Active>("Active"),
                Member::new::<Option<SystemTime>>("Date"),
                Member::new::<Option<Box<Input>>>("Nested"),
                Member::new::<Status>("Status"),
                Member::new::<Vec<Box<Input>>>("NestedList"),
            ]
        })
    }
}

#[test]
fn compiles_argument_list() {
    let mut registry = Registry::new();
    let status = registry
        .register_enum::<Status>(EnumMeta::new(
            literal!("Status"),
            &[
                EnumValue::new(literal!("Active")).value(InputValue::scalar("active")),
                EnumValue::new(literal!("Inactive")).value(InputValue::scalar("inactive")),
            ],
        ))
        .expect("registers");

    let args = registry.compile_arguments::<Search>().expect("compiles");

    assert_eq!(
        args.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
        ["ID", "name", "Active", "Date", "Nested", "Status", "NestedList"],
    );
    assert_eq!(args["ID"].field_type.to_string(), "Int!");
    assert_eq!(args["name"].field_type.to_string(), "String!");
    assert_eq!(args["Active"].field_type.to_string(), "Boolean!");
    assert_eq!(args["Active"].default_value, Some(InputValue::scalar(true)));
    assert_eq!(args["Date"].field_type.to_string(), "DateTime!");
    assert!(args["Status"].field_type.nullable().ptr_eq(&status));

    let nested = args["Nested"].field_type.nullable();
    assert_eq!(nested.type_kind(), TypeKind::InputObject);
    assert_eq!(nested.name(), Some("input"));
    assert_eq!(nested.description().map(|d| d.as_str()), Some("input"));
    let id = nested.input_field_by_name("id").expect("field");
    assert_eq!(id.field_type.to_string(), "ID!");
    let active = nested.input_field_by_name("Active").expect("field");
    assert_eq!(active.default_value, Some(InputValue::scalar(true)));

    let list = &args["NestedList"].field_type;
    assert_eq!(list.to_string(), "[input]!");
    assert!(list.innermost().ptr_eq(nested));
    assert!(registry.get_type::<Search>(Side::Input).is_none());
}

#[test]
fn compiles_arguments_of_value() {
    let mut registry = Registry::new();

    let by_value = registry.compile_arguments_of(&Search).expect("compiles");
    let by_type = registry.compile_arguments::<Search>().expect("compiles");

    assert_eq!(by_value, by_type);
    assert!(
        by_value["Nested"]
            .field_type
            .nullable()
            .ptr_eq(by_type["Nested"].field_type.nullable()),
    );
}

#[test]
fn detects_circular_arguments() {
    struct Args;
    impl Reflect for Args {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::composite::<Self>(|| {
                vec![Member::new::<Option<Box<Args>>>("Args").tag(r#"graphql:",nullable""#)]
            })
        }
    }

    let mut registry = Registry::new();

    assert!(matches!(
        registry.compile_arguments::<Args>(),
        Err(CompileError::CircularReference { .. }),
    ));
}

#[test]
fn flattens_embedded_arguments() {
    struct Pagination;
    impl Reflect for Pagination {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::composite::<Self>(|| {
                vec![
                    Member::new::<i32>("first").tag(r#"graphql:",nullable""#),
                    Member::new::<String>("after").tag(r#"graphql:",nullable""#),
                ]
            })
        }
    }
    struct ListArgs;
    impl Reflect for ListArgs {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::composite::<Self>(|| {
                vec![
                    Member::new::<String>("query"),
                    Member::embedded::<Pagination>("Pagination"),
                ]
            })
        }
    }

    let mut registry = Registry::new();

    let args = registry.compile_arguments::<ListArgs>().expect("compiles");

    assert_eq!(
        args.iter()
            .map(|(name, arg)| format!("{name}: {}", arg.field_type))
            .collect::<Vec<_>>(),
        ["query: String!", "first: Int", "after: String"],
    );
    assert!(registry.get_type::<Pagination>(Side::Input).is_none());
}

struct Greeting;

impl Reflect for Greeting {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::composite::<Self>(|| vec![Member::new::<String>("name")])
    }
}

struct GreetArgs;

impl Reflect for GreetArgs {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::composite::<Self>(|| {
            vec![
                Member::new::<Greeting>("input"),
                Member::new::<String>("message"),
                Member::new::<Active>("loud"),
            ]
        })
    }
}

fn greet(args: &Arguments) -> Option<String> {
    let name = args["input"]["name"].as_string_value()?;
    let message = args.get::<String>("message")?;
    let greeting = format!("{message}, {name}");
    Some(if args.get::<bool>("loud")? {
        greeting.to_uppercase()
    } else {
        greeting
    })
}

#[test]
fn feeds_arguments_to_resolver() {
    let mut registry = Registry::new();
    let meta_args = registry.compile_arguments::<GreetArgs>().expect("compiles");

    assert_eq!(meta_args.len(), 3);
    let input = meta_args["input"].field_type.nullable();
    assert_eq!(input.type_kind(), TypeKind::InputObject);
    assert_eq!(
        input
            .fields()
            .expect("has fields")
            .iter()
            .map(|(name, f)| format!("{name}: {}", f.field_type))
            .collect::<Vec<_>>(),
        ["name: String!"],
    );
    assert_eq!(meta_args["message"].field_type.to_string(), "String!");

    let values: InputValue =
        serde_json::from_str(r#"{"input": {"name": "jimmy"}, "message": "hi"}"#)
            .expect("valid JSON");
    let args = Arguments::from_input_value(&values, &meta_args).expect("object");

    assert_eq!(args["input"]["name"].as_string_value(), Some("jimmy"));
    assert_eq!(greet(&args).as_deref(), Some("HI, JIMMY"));

    let values = serde_json::from_str::<InputValue>(
        r#"{"input": {"name": "jimmy"}, "message": "hi", "loud": false}"#,
    )
    .expect("valid JSON");
    let args = Arguments::from_input_value(&values, &meta_args).expect("object");

    assert_eq!(greet(&args).as_deref(), Some("hi, jimmy"));
}
