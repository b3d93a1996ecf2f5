//! Canonical `.proto` text generation.
//!
//! `generate` is a total, deterministic function: the same document always
//! yields byte-identical output, and a partially-edited document (absent
//! package, empty collections) renders as the sections it does have rather
//! than failing. Declarations are emitted in stored order, never sorted.
//!
//! Layout contract:
//! - 2-space indent per nesting level
//! - one blank line after the syntax header, the package line, the import
//!   block, and every enum/message/service block
//! - inside a message: nested enums, then nested messages, then fields

use crate::model::{EnumDef, Message, ProtoDocument, Service};

/// Render a document to canonical proto source text.
pub fn generate(doc: &ProtoDocument) -> String {
    let mut out = String::new();

    out.push_str(&format!("syntax = \"{}\";\n\n", doc.syntax.as_str()));

    if let Some(package) = doc.package.as_deref() {
        if !package.is_empty() {
            out.push_str(&format!("package {package};\n\n"));
        }
    }

    if !doc.imports.is_empty() {
        for import in &doc.imports {
            out.push_str(&format!("import \"{import}\";\n"));
        }
        out.push('\n');
    }

    for e in &doc.enums {
        render_enum(e, 0, &mut out);
    }

    for m in &doc.messages {
        render_message(m, 0, &mut out);
    }

    for s in &doc.services {
        render_service(s, &mut out);
    }

    out
}

fn render_enum(e: &EnumDef, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    out.push_str(&format!("{pad}enum {} {{\n", e.name));
    for value in &e.values {
        out.push_str(&format!("{pad}  {} = {};\n", value.name, value.number));
    }
    out.push_str(&format!("{pad}}}\n\n"));
}

fn render_message(m: &Message, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    out.push_str(&format!("{pad}message {} {{\n", m.name));

    for nested in &m.nested_enums {
        render_enum(nested, indent + 1, out);
    }

    for nested in &m.nested_messages {
        render_message(nested, indent + 1, out);
    }

    for field in &m.fields {
        let repeated = if field.repeated { "repeated " } else { "" };
        let optional = if field.optional { "optional " } else { "" };
        out.push_str(&format!(
            "{pad}  {repeated}{optional}{} {} = {};\n",
            field.r#type, field.name, field.number
        ));
    }

    out.push_str(&format!("{pad}}}\n\n"));
}

fn render_service(s: &Service, out: &mut String) {
    out.push_str(&format!("service {} {{\n", s.name));
    for method in &s.methods {
        let input_stream = if method.streaming.input { "stream " } else { "" };
        let output_stream = if method.streaming.output { "stream " } else { "" };
        out.push_str(&format!(
            "  rpc {}({input_stream}{}) returns ({output_stream}{});\n",
            method.name, method.input_type, method.output_type
        ));
    }
    out.push_str("}\n\n");
}
