//! Wire-compatibility analysis between two document versions.
//!
//! This is a structural comparison over the document trees, not a text diff:
//! messages and services are matched by name, fields and enum values by
//! number — the number is the on-the-wire identity, so a renamed field is a
//! different situation than a removed one.
//!
//! Classification:
//! - removals and type changes are breaking
//! - renames (same number, different name) are informational
//! - additions produce no issue
//!
//! Breaking issues are the signal callers use to block a publish or exit
//! nonzero; informational ones are reported and otherwise ignored.

use serde::Serialize;

use crate::model::{EnumDef, Message, ProtoDocument, Service};

/// Discrepancy categories reported by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    RemovedMessage,
    RemovedField,
    ChangedFieldType,
    RenamedField,
    RemovedEnum,
    RemovedEnumValue,
    RenamedEnumValue,
    RemovedService,
    RemovedMethod,
    ChangedMethodType,
    ChangedMethodStreaming,
}

impl IssueKind {
    /// Stable wire form, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RemovedMessage => "REMOVED_MESSAGE",
            Self::RemovedField => "REMOVED_FIELD",
            Self::ChangedFieldType => "CHANGED_FIELD_TYPE",
            Self::RenamedField => "RENAMED_FIELD",
            Self::RemovedEnum => "REMOVED_ENUM",
            Self::RemovedEnumValue => "REMOVED_ENUM_VALUE",
            Self::RenamedEnumValue => "RENAMED_ENUM_VALUE",
            Self::RemovedService => "REMOVED_SERVICE",
            Self::RemovedMethod => "REMOVED_METHOD",
            Self::ChangedMethodType => "CHANGED_METHOD_TYPE",
            Self::ChangedMethodStreaming => "CHANGED_METHOD_STREAMING",
        }
    }
}

/// One discrepancy between base and target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityIssue {
    pub kind: IssueKind,
    pub message: String,
    pub breaking: bool,
}

/// Compare `target` against `base` and report every discrepancy.
///
/// Neither document is mutated; an empty result means `target` can replace
/// `base` without breaking existing consumers.
pub fn check_compatibility(
    base: &ProtoDocument,
    target: &ProtoDocument,
) -> Vec<CompatibilityIssue> {
    let mut issues = Vec::new();

    compare_messages(&base.messages, &target.messages, "", &mut issues);
    compare_enums(&base.enums, &target.enums, "", &mut issues);
    compare_services(&base.services, &target.services, &mut issues);

    issues
}

fn qualify(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn push(issues: &mut Vec<CompatibilityIssue>, kind: IssueKind, breaking: bool, message: String) {
    issues.push(CompatibilityIssue {
        kind,
        message,
        breaking,
    });
}

fn compare_messages(
    base: &[Message],
    target: &[Message],
    prefix: &str,
    issues: &mut Vec<CompatibilityIssue>,
) {
    for base_msg in base {
        let path = qualify(prefix, &base_msg.name);
        let Some(target_msg) = target.iter().find(|m| m.name == base_msg.name) else {
            push(
                issues,
                IssueKind::RemovedMessage,
                true,
                format!("Message '{path}' was removed"),
            );
            continue;
        };

        for base_field in &base_msg.fields {
            match target_msg.field_with_number(base_field.number) {
                None => push(
                    issues,
                    IssueKind::RemovedField,
                    true,
                    format!(
                        "Field '{}' ({}) was removed from message '{path}'",
                        base_field.name, base_field.number
                    ),
                ),
                Some(target_field) if target_field.r#type != base_field.r#type => push(
                    issues,
                    IssueKind::ChangedFieldType,
                    true,
                    format!(
                        "Field '{}' type changed from '{}' to '{}' in message '{path}'",
                        base_field.name, base_field.r#type, target_field.r#type
                    ),
                ),
                Some(target_field) if target_field.name != base_field.name => push(
                    issues,
                    IssueKind::RenamedField,
                    false,
                    format!(
                        "Field {} renamed from '{}' to '{}' in message '{path}'",
                        base_field.number, base_field.name, target_field.name
                    ),
                ),
                Some(_) => {}
            }
        }

        compare_enums(&base_msg.nested_enums, &target_msg.nested_enums, &path, issues);
        compare_messages(
            &base_msg.nested_messages,
            &target_msg.nested_messages,
            &path,
            issues,
        );
    }
}

fn compare_enums(
    base: &[EnumDef],
    target: &[EnumDef],
    prefix: &str,
    issues: &mut Vec<CompatibilityIssue>,
) {
    for base_enum in base {
        let path = qualify(prefix, &base_enum.name);
        let Some(target_enum) = target.iter().find(|e| e.name == base_enum.name) else {
            push(
                issues,
                IssueKind::RemovedEnum,
                true,
                format!("Enum '{path}' was removed"),
            );
            continue;
        };

        for base_value in &base_enum.values {
            match target_enum.value_with_number(base_value.number) {
                None => push(
                    issues,
                    IssueKind::RemovedEnumValue,
                    true,
                    format!(
                        "Value '{}' ({}) was removed from enum '{path}'",
                        base_value.name, base_value.number
                    ),
                ),
                Some(target_value) if target_value.name != base_value.name => push(
                    issues,
                    IssueKind::RenamedEnumValue,
                    false,
                    format!(
                        "Value {} renamed from '{}' to '{}' in enum '{path}'",
                        base_value.number, base_value.name, target_value.name
                    ),
                ),
                Some(_) => {}
            }
        }
    }
}

fn compare_services(
    base: &[Service],
    target: &[Service],
    issues: &mut Vec<CompatibilityIssue>,
) {
    for base_svc in base {
        let Some(target_svc) = target.iter().find(|s| s.name == base_svc.name) else {
            push(
                issues,
                IssueKind::RemovedService,
                true,
                format!("Service '{}' was removed", base_svc.name),
            );
            continue;
        };

        for base_method in &base_svc.methods {
            let Some(target_method) = target_svc.method_named(&base_method.name) else {
                push(
                    issues,
                    IssueKind::RemovedMethod,
                    true,
                    format!(
                        "Method '{}' was removed from service '{}'",
                        base_method.name, base_svc.name
                    ),
                );
                continue;
            };

            if target_method.input_type != base_method.input_type {
                push(
                    issues,
                    IssueKind::ChangedMethodType,
                    true,
                    format!(
                        "Method '{}' input type changed from '{}' to '{}' in service '{}'",
                        base_method.name,
                        base_method.input_type,
                        target_method.input_type,
                        base_svc.name
                    ),
                );
            }
            if target_method.output_type != base_method.output_type {
                push(
                    issues,
                    IssueKind::ChangedMethodType,
                    true,
                    format!(
                        "Method '{}' output type changed from '{}' to '{}' in service '{}'",
                        base_method.name,
                        base_method.output_type,
                        target_method.output_type,
                        base_svc.name
                    ),
                );
            }
            if target_method.streaming != base_method.streaming {
                push(
                    issues,
                    IssueKind::ChangedMethodStreaming,
                    true,
                    format!(
                        "Method '{}' streaming changed in service '{}'",
                        base_method.name, base_svc.name
                    ),
                );
            }
        }
    }
}
