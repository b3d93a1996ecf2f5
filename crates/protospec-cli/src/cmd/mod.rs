use anyhow::Result;

use crate::args::{Cli, Command};

mod compare;
mod compatibility;
mod generate;
mod validate;

pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            input,
            format,
            output,
        } => generate::run(&input, &format, output.as_deref()).await,
        Command::Validate { inputs, rules } => validate::run(&inputs, rules.as_deref()).await,
        Command::Compare {
            left,
            right,
            format,
            output,
            no_color,
        } => compare::run(&left, &right, &format, output.as_deref(), no_color).await,
        Command::Compatibility { base, target } => compatibility::run(&base, &target).await,
    }
}
