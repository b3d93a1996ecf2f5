use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use termcolor::Color;

use protospec_core::validate::{validate, RuleResult, RULE_NAMES};

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct ValidateOut {
    pub documents: Vec<DocumentOut>,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct DocumentOut {
    pub input: String,
    pub results: Vec<RuleResult>,
}

pub async fn run(inputs: &[String], rules: Option<&str>) -> Result<()> {
    let filter = parse_rule_filter(rules)?;

    let mut out = ValidateOut {
        documents: Vec::new(),
        passed: 0,
        failed: 0,
        total: 0,
    };

    for input_arg in inputs {
        let doc = input::resolve_document(input_arg).await?;
        let mut results = validate(&doc);
        if let Some(names) = &filter {
            results.retain(|r| names.iter().any(|n| n == &r.rule_name));
        }

        for r in &results {
            out.total += 1;
            if r.passed {
                out.passed += 1;
            } else {
                out.failed += 1;
            }
        }

        out.documents.push(DocumentOut {
            input: input_arg.clone(),
            results,
        });
    }

    if output::is_json() {
        output::print(&out)?;
    } else {
        print_report(&out)?;
    }

    if out.failed > 0 {
        bail!("validation failed: {} of {} rule checks failed", out.failed, out.total);
    }
    Ok(())
}

fn parse_rule_filter(rules: Option<&str>) -> Result<Option<Vec<String>>> {
    let Some(raw) = rules else {
        return Ok(None);
    };

    let names: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    for name in &names {
        if !RULE_NAMES.contains(&name.as_str()) {
            return Err(anyhow!(
                "unknown rule: {name} (known rules: {})",
                RULE_NAMES.join(", ")
            ));
        }
    }

    if names.is_empty() {
        return Err(anyhow!("--rules given but no rule names supplied"));
    }
    Ok(Some(names))
}

fn print_report(out: &ValidateOut) -> Result<()> {
    let mut stdout = output::stdout(true);

    for doc in &out.documents {
        output::write_line(&mut stdout, None, true, &format!("Validating: {}", doc.input))?;
        for r in &doc.results {
            if r.passed {
                output::write_line(
                    &mut stdout,
                    Some(Color::Green),
                    false,
                    &format!("  ✓ {}: {}", r.rule_name, r.message),
                )?;
            } else {
                output::write_line(
                    &mut stdout,
                    Some(Color::Red),
                    false,
                    &format!("  ✗ {}: {}", r.rule_name, r.message),
                )?;
            }
        }
        println!();
    }

    output::write_line(&mut stdout, None, true, "Validation Summary:")?;
    output::write_line(
        &mut stdout,
        Some(Color::Green),
        false,
        &format!("  Passed: {}", out.passed),
    )?;
    output::write_line(
        &mut stdout,
        Some(Color::Red),
        false,
        &format!("  Failed: {}", out.failed),
    )?;
    output::write_line(&mut stdout, None, false, &format!("  Total: {}", out.total))?;
    Ok(())
}
