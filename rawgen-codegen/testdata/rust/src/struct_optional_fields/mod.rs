// Code generated by rawgen. DO NOT EDIT.

//! Types of the `struct_optional_fields` package.

pub mod some_struct;
pub mod struct_optional_fields_some_struct_field_anonymous_struct;
pub mod some_struct_operator;

pub use some_struct::SomeStruct;
pub use struct_optional_fields_some_struct_field_anonymous_struct::StructOptionalFieldsSomeStructFieldAnonymousStruct;
pub use some_struct_operator::SomeStructOperator;
