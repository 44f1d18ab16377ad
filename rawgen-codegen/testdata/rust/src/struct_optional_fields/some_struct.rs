// Code generated by rawgen. DO NOT EDIT.

/// SomeStruct struct.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SomeStruct {
    #[serde(rename = "FieldAnonymousStruct")]
    pub field_anonymous_struct: Option<super::StructOptionalFieldsSomeStructFieldAnonymousStruct>,
    #[serde(rename = "Operator")]
    pub operator: Option<super::SomeStructOperator>,
}

impl SomeStruct {
    /// Creates a new `SomeStruct`.
    #[must_use]
    pub fn new(field_anonymous_struct: Option<super::StructOptionalFieldsSomeStructFieldAnonymousStruct>, operator: Option<super::SomeStructOperator>) -> Self {
        Self {
            field_anonymous_struct,
            operator,
        }
    }
}
