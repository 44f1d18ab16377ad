// Code generated by rawgen. DO NOT EDIT.

/// StructOptionalFieldsSomeStructFieldAnonymousStruct struct.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StructOptionalFieldsSomeStructFieldAnonymousStruct {
    #[serde(rename = "FieldAny")]
    pub field_any: Option<serde_json::Value>,
}

impl StructOptionalFieldsSomeStructFieldAnonymousStruct {
    /// Creates a new `StructOptionalFieldsSomeStructFieldAnonymousStruct`.
    #[must_use]
    pub fn new(field_any: Option<serde_json::Value>) -> Self {
        Self {
            field_any: rawgen_runtime::coalesce(field_any),
        }
    }
}
