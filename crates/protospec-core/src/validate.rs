//! Rule-based document validation.
//!
//! The model is a permissive container; this module is where the semantic
//! rules live. Every rule runs against the whole document and reports one
//! granular pass/fail result — rules never short-circuit each other, so a
//! batch caller always gets the full picture. Within a rule, the first
//! violation found is the one reported.
//!
//! Rule names are part of the reporting contract (CLI `--rules` filtering,
//! stored validation reports) and must remain stable.

use serde::Serialize;

use crate::limits;
use crate::model::{EnumDef, Message, ProtoDocument, Syntax};

/// Outcome of one rule over one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleResult {
    #[serde(rename = "ruleName")]
    pub rule_name: String,
    pub passed: bool,
    pub message: String,
}

impl RuleResult {
    fn pass(rule_name: &str, message: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.to_string(),
            passed: true,
            message: message.into(),
        }
    }

    fn fail(rule_name: &str, message: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.to_string(),
            passed: false,
            message: message.into(),
        }
    }
}

/// The stable rule set, in reporting order.
pub const RULE_NAMES: [&str; 5] = [
    "syntax_version",
    "package_name",
    "field_numbers",
    "enum_values",
    "service_methods",
];

/// Run every rule against a document.
pub fn validate(doc: &ProtoDocument) -> Vec<RuleResult> {
    vec![
        syntax_version(doc),
        package_name(doc),
        field_numbers(doc),
        enum_values(doc),
        service_methods(doc),
    ]
}

fn syntax_version(doc: &ProtoDocument) -> RuleResult {
    // The typed model only admits proto2/proto3; the rule stays in the set
    // so reports remain complete and stable for callers.
    RuleResult::pass(
        "syntax_version",
        format!("Valid syntax: {}", doc.syntax.as_str()),
    )
}

fn package_name(doc: &ProtoDocument) -> RuleResult {
    let rule = "package_name";
    match doc.package.as_deref() {
        None | Some("") => RuleResult::fail(rule, "Package name not specified"),
        Some(package) if !is_lowercase_dotted(package) => {
            RuleResult::fail(rule, "Package name should follow lowercase dot notation")
        }
        Some(package) => RuleResult::pass(rule, format!("Valid package name: {package}")),
    }
}

/// Lowercase dot notation: segments of `[a-z][a-z0-9_]*` joined by dots.
fn is_lowercase_dotted(package: &str) -> bool {
    package.split('.').all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_lowercase() => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    })
}

fn field_numbers(doc: &ProtoDocument) -> RuleResult {
    let rule = "field_numbers";
    for (path, message) in walk_messages(&doc.messages) {
        let mut seen = std::collections::BTreeSet::new();
        for field in &message.fields {
            if !seen.insert(field.number) {
                return RuleResult::fail(
                    rule,
                    format!(
                        "Duplicate field number {} in message {path}",
                        field.number
                    ),
                );
            }
            if field.number < limits::FIELD_NUMBER_MIN || field.number > limits::FIELD_NUMBER_MAX {
                return RuleResult::fail(
                    rule,
                    format!("Invalid field number {} in message {path}", field.number),
                );
            }
            if field.number >= limits::RESERVED_RANGE_START
                && field.number <= limits::RESERVED_RANGE_END
            {
                return RuleResult::fail(
                    rule,
                    format!("Reserved field number {} in message {path}", field.number),
                );
            }
        }
    }
    RuleResult::pass(rule, "All field numbers are valid and unique")
}

fn enum_values(doc: &ProtoDocument) -> RuleResult {
    let rule = "enum_values";

    let mut enums: Vec<(String, &EnumDef)> = doc
        .enums
        .iter()
        .map(|e| (e.name.clone(), e))
        .collect();
    for (path, message) in walk_messages(&doc.messages) {
        for e in &message.nested_enums {
            enums.push((format!("{path}.{}", e.name), e));
        }
    }

    for (path, e) in enums {
        if e.values.is_empty() {
            return RuleResult::fail(rule, format!("Enum {path} has no values"));
        }

        let mut seen = std::collections::BTreeSet::new();
        let mut has_zero = false;
        for value in &e.values {
            if !seen.insert(value.number) {
                return RuleResult::fail(
                    rule,
                    format!("Duplicate enum value {} in enum {path}", value.number),
                );
            }
            if value.number == 0 {
                has_zero = true;
            }
        }

        if !has_zero && doc.syntax == Syntax::Proto3 {
            return RuleResult::fail(
                rule,
                format!("Enum {path} must have a zero value in proto3"),
            );
        }
    }

    RuleResult::pass(rule, "All enum values are valid")
}

fn service_methods(doc: &ProtoDocument) -> RuleResult {
    let rule = "service_methods";
    for service in &doc.services {
        let mut seen = std::collections::BTreeSet::new();
        for method in &service.methods {
            if !seen.insert(method.name.as_str()) {
                return RuleResult::fail(
                    rule,
                    format!(
                        "Duplicate method name {} in service {}",
                        method.name, service.name
                    ),
                );
            }
            if method.input_type.is_empty() || method.output_type.is_empty() {
                return RuleResult::fail(
                    rule,
                    format!("Method {} missing input or output type", method.name),
                );
            }
        }
    }
    RuleResult::pass(rule, "All service methods are valid")
}

/// Flatten the message tree into (dotted path, message) pairs, parents first.
fn walk_messages(messages: &[Message]) -> Vec<(String, &Message)> {
    let mut out = Vec::new();
    for m in messages {
        collect_message(m, "", &mut out);
    }
    out
}

fn collect_message<'a>(m: &'a Message, prefix: &str, out: &mut Vec<(String, &'a Message)>) {
    let path = if prefix.is_empty() {
        m.name.clone()
    } else {
        format!("{prefix}.{}", m.name)
    };
    out.push((path.clone(), m));
    for nested in &m.nested_messages {
        collect_message(nested, &path, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnumValue, Field, Service, ServiceMethod};

    fn field(name: &str, number: i32) -> Field {
        Field {
            r#type: "string".to_string(),
            name: name.to_string(),
            number,
            repeated: false,
            optional: false,
        }
    }

    fn doc_with_fields(numbers: &[i32]) -> ProtoDocument {
        ProtoDocument {
            messages: vec![Message {
                name: "User".to_string(),
                fields: numbers
                    .iter()
                    .enumerate()
                    .map(|(i, n)| field(&format!("f{i}"), *n))
                    .collect(),
                nested_messages: vec![],
                nested_enums: vec![],
            }],
            ..ProtoDocument::default()
        }
    }

    fn result_for<'a>(results: &'a [RuleResult], rule: &str) -> &'a RuleResult {
        results.iter().find(|r| r.rule_name == rule).unwrap()
    }

    #[test]
    fn every_rule_reports_once() {
        let results = validate(&ProtoDocument::default());
        let names: Vec<&str> = results.iter().map(|r| r.rule_name.as_str()).collect();
        assert_eq!(names, RULE_NAMES);
    }

    #[test]
    fn field_numbers_accepts_small_numbers() {
        let results = validate(&doc_with_fields(&[1, 2]));
        assert!(result_for(&results, "field_numbers").passed);
    }

    #[test]
    fn field_numbers_rejects_zero() {
        let results = validate(&doc_with_fields(&[0]));
        let r = result_for(&results, "field_numbers");
        assert!(!r.passed);
        assert_eq!(r.message, "Invalid field number 0 in message User");
    }

    #[test]
    fn field_numbers_rejects_above_max() {
        let results = validate(&doc_with_fields(&[536_870_912]));
        assert!(!result_for(&results, "field_numbers").passed);
    }

    #[test]
    fn field_numbers_rejects_reserved_band() {
        let results = validate(&doc_with_fields(&[19_500]));
        let r = result_for(&results, "field_numbers");
        assert!(!r.passed);
        assert_eq!(r.message, "Reserved field number 19500 in message User");
    }

    #[test]
    fn field_numbers_rejects_duplicates() {
        let results = validate(&doc_with_fields(&[5, 5]));
        let r = result_for(&results, "field_numbers");
        assert!(!r.passed);
        assert!(r.message.starts_with("Duplicate field number 5"));
    }

    #[test]
    fn field_numbers_walks_nested_messages() {
        let doc = ProtoDocument {
            messages: vec![Message {
                name: "Order".to_string(),
                fields: vec![field("id", 1)],
                nested_messages: vec![Message {
                    name: "Item".to_string(),
                    fields: vec![field("a", 2), field("b", 2)],
                    nested_messages: vec![],
                    nested_enums: vec![],
                }],
                nested_enums: vec![],
            }],
            ..ProtoDocument::default()
        };
        let r = validate(&doc);
        let r = result_for(&r, "field_numbers");
        assert!(!r.passed);
        assert!(r.message.contains("in message Order.Item"));
    }

    #[test]
    fn proto3_enum_without_zero_fails_then_passes() {
        let mut doc = ProtoDocument {
            enums: vec![EnumDef {
                name: "Status".to_string(),
                values: vec![EnumValue {
                    name: "ACTIVE".to_string(),
                    number: 1,
                }],
            }],
            ..ProtoDocument::default()
        };

        let r = validate(&doc);
        let r = result_for(&r, "enum_values");
        assert!(!r.passed);
        assert_eq!(r.message, "Enum Status must have a zero value in proto3");

        doc.enums[0].values.insert(
            0,
            EnumValue {
                name: "UNKNOWN".to_string(),
                number: 0,
            },
        );
        let r = validate(&doc);
        assert!(result_for(&r, "enum_values").passed);
    }

    #[test]
    fn proto2_enum_without_zero_passes() {
        let doc = ProtoDocument {
            syntax: Syntax::Proto2,
            enums: vec![EnumDef {
                name: "Status".to_string(),
                values: vec![EnumValue {
                    name: "ACTIVE".to_string(),
                    number: 1,
                }],
            }],
            ..ProtoDocument::default()
        };
        let r = validate(&doc);
        assert!(result_for(&r, "enum_values").passed);
    }

    #[test]
    fn empty_enum_fails() {
        let doc = ProtoDocument {
            enums: vec![EnumDef {
                name: "Empty".to_string(),
                values: vec![],
            }],
            ..ProtoDocument::default()
        };
        let r = validate(&doc);
        let r = result_for(&r, "enum_values");
        assert!(!r.passed);
        assert_eq!(r.message, "Enum Empty has no values");
    }

    #[test]
    fn duplicate_enum_numbers_fail() {
        let doc = ProtoDocument {
            enums: vec![EnumDef {
                name: "Status".to_string(),
                values: vec![
                    EnumValue {
                        name: "A".to_string(),
                        number: 0,
                    },
                    EnumValue {
                        name: "B".to_string(),
                        number: 0,
                    },
                ],
            }],
            ..ProtoDocument::default()
        };
        let r = validate(&doc);
        assert!(!result_for(&r, "enum_values").passed);
    }

    #[test]
    fn package_rules() {
        let mut doc = ProtoDocument::default();
        assert!(!result_for(&validate(&doc), "package_name").passed);

        doc.package = Some("Shop.Orders".to_string());
        assert!(!result_for(&validate(&doc), "package_name").passed);

        doc.package = Some("shop.orders_v2".to_string());
        let r = validate(&doc);
        let r = result_for(&r, "package_name");
        assert!(r.passed);
        assert_eq!(r.message, "Valid package name: shop.orders_v2");
    }

    #[test]
    fn service_method_rules() {
        let mut doc = ProtoDocument {
            services: vec![Service {
                name: "S".to_string(),
                methods: vec![
                    ServiceMethod {
                        name: "Get".to_string(),
                        input_type: "Req".to_string(),
                        output_type: "Resp".to_string(),
                        streaming: Default::default(),
                    },
                    ServiceMethod {
                        name: "Get".to_string(),
                        input_type: "Req".to_string(),
                        output_type: "Resp".to_string(),
                        streaming: Default::default(),
                    },
                ],
            }],
            ..ProtoDocument::default()
        };
        let r = validate(&doc);
        let r = result_for(&r, "service_methods");
        assert!(!r.passed);
        assert_eq!(r.message, "Duplicate method name Get in service S");

        doc.services[0].methods.pop();
        doc.services[0].methods[0].output_type.clear();
        let r = validate(&doc);
        let r = result_for(&r, "service_methods");
        assert!(!r.passed);
        assert_eq!(r.message, "Method Get missing input or output type");
    }

    #[test]
    fn rules_do_not_short_circuit_each_other() {
        // Broken fields and a broken enum: both rules report their failure.
        let mut doc = doc_with_fields(&[0]);
        doc.enums.push(EnumDef {
            name: "Status".to_string(),
            values: vec![EnumValue {
                name: "ACTIVE".to_string(),
                number: 1,
            }],
        });
        let results = validate(&doc);
        assert!(!result_for(&results, "field_numbers").passed);
        assert!(!result_for(&results, "enum_values").passed);
        assert_eq!(results.len(), RULE_NAMES.len());
    }
}
