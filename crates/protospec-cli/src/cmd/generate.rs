use anyhow::{anyhow, Result};

use protospec_core::generate::generate;

use crate::io::{export, input};

pub async fn run(input_arg: &str, format: &str, output_path: Option<&str>) -> Result<()> {
    let doc = input::resolve_document(input_arg).await?;

    let rendered = match format {
        "proto" => generate(&doc),
        "json" => {
            let mut s = serde_json::to_string_pretty(&doc)?;
            s.push('\n');
            s
        }
        "yaml" => serde_yaml::to_string(&doc)?,
        other => return Err(anyhow!("unknown format: {other} (expected proto|json|yaml)")),
    };

    export::write_output(output_path, &rendered)
}
