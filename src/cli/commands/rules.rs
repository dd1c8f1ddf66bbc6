//! Rules command - List the compiled rule table

use super::{load_config, RulesArgs, RulesFormat};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, RulesRenderer, TerminalOutput};
use crate::error::BambotError;

pub fn execute(args: RulesArgs, config_path: Option<&std::path::Path>) -> Result<i32, BambotError> {
    let config = load_config(config_path)?;
    let scanner = config.build_scanner()?;

    let renderer: Box<dyn RulesRenderer> = match args.format {
        RulesFormat::Terminal => Box::new(TerminalOutput::new()),
        RulesFormat::Json => Box::new(JsonOutput::new()),
    };

    print!("{}", renderer.render_rules(scanner.rules())?);

    Ok(exit_codes::SUCCESS)
}
