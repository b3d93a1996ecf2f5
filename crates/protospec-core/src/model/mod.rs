//! The Protocol-Buffer document model.
//!
//! These are the strongly-typed records for the specification-document wire
//! shape stored by the surrounding system. Design goals:
//! - **Permissive container:** the model holds whatever it is given; semantic
//!   rules (number ranges, uniqueness, proto3 zero values) live in
//!   `crate::validate`, not here.
//! - **Strict decode:** a required scalar attribute that is absent or
//!   mistyped fails decoding with `ProtoSpecError::InvalidDocument` instead
//!   of propagating a hole through the pipeline. Absent collections decode
//!   as empty; unknown keys are ignored.
//! - **Owned tree:** message nesting is a strict tree, each nested
//!   message/enum reachable only through its single parent.
//!
//! The JSON field names (`nestedMessages`, `inputType`, ...) are the wire
//! format and must remain stable.

use serde::{Deserialize, Serialize};

use crate::errors::{ProtoSpecError, ProtoSpecResult};

/// Protocol-Buffer syntax edition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Syntax {
    #[serde(rename = "proto2")]
    Proto2,
    #[default]
    #[serde(rename = "proto3")]
    Proto3,
}

impl Syntax {
    /// Canonical string form, as emitted in the `syntax = "...";` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proto2 => "proto2",
            Self::Proto3 => "proto3",
        }
    }
}

/// A single message field.
///
/// `r#type` is a free-form scalar/message/enum type token; the core does not
/// resolve cross-references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub r#type: String,
    pub name: String,
    pub number: i32,
    #[serde(default)]
    pub repeated: bool,
    #[serde(default)]
    pub optional: bool,
}

/// A single enum value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub number: i32,
}

/// An enum definition, top-level or nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl EnumDef {
    /// Look up a value by its number (the wire identity).
    pub fn value_with_number(&self, number: i32) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.number == number)
    }
}

/// A message definition. Nested messages recurse to arbitrary depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub nested_messages: Vec<Message>,
    #[serde(default)]
    pub nested_enums: Vec<EnumDef>,
}

impl Message {
    /// Look up a field by its number (the wire identity).
    pub fn field_with_number(&self, number: i32) -> Option<&Field> {
        self.fields.iter().find(|f| f.number == number)
    }

    /// Look up a directly nested message by name.
    pub fn nested_message_named(&self, name: &str) -> Option<&Message> {
        self.nested_messages.iter().find(|m| m.name == name)
    }

    /// Look up a directly nested enum by name.
    pub fn nested_enum_named(&self, name: &str) -> Option<&EnumDef> {
        self.nested_enums.iter().find(|e| e.name == name)
    }
}

/// Streaming flags for a service method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streaming {
    #[serde(default)]
    pub input: bool,
    #[serde(default)]
    pub output: bool,
}

/// A single rpc method.
///
/// Input/output types decode as empty strings when absent; the
/// `service_methods` validation rule reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMethod {
    pub name: String,
    #[serde(default)]
    pub input_type: String,
    #[serde(default)]
    pub output_type: String,
    #[serde(default)]
    pub streaming: Streaming,
}

/// A service definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<ServiceMethod>,
}

impl Service {
    /// Look up a method by name (the compatibility identity for rpcs).
    pub fn method_named(&self, name: &str) -> Option<&ServiceMethod> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// The document root: one `.proto` specification.
///
/// Declaration order is preserved everywhere; the generator emits collections
/// exactly as stored, never sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtoDocument {
    #[serde(default)]
    pub syntax: Syntax,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub enums: Vec<EnumDef>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl ProtoDocument {
    /// Decode a document from its JSON wire value.
    pub fn from_json(value: serde_json::Value) -> ProtoSpecResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| ProtoSpecError::invalid_document(e.to_string()))
    }

    /// Decode a document from JSON text.
    pub fn from_json_str(raw: &str) -> ProtoSpecResult<Self> {
        serde_json::from_str(raw).map_err(|e| ProtoSpecError::invalid_document(e.to_string()))
    }

    /// Look up a top-level message by name.
    pub fn message_named(&self, name: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.name == name)
    }

    /// Look up a top-level enum by name.
    pub fn enum_named(&self, name: &str) -> Option<&EnumDef> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Look up a service by name.
    pub fn service_named(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }
}
