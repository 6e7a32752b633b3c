mod arguments;
mod custom_types;
mod input_objects;
