//! The `teeny check` command.
//! `teeny check` 命令。

use super::Reporting;
use crate::output;
use teeny_parser::{Analysis, Error, parse};
use tracing::debug;

/// Check a Teeny file.
/// 检查 Teeny 文件。
pub fn run(file: &str, how: Reporting) -> Result<(), String> {
    let source = super::read_source(file)?;
    debug!(file, bytes = source.len(), "checking");

    match parse(&source) {
        Ok(analysis) => {
            output::success(&summary(&analysis));
            Ok(())
        }
        Err(e) => {
            super::report(&source, file, &e, how);
            Err(match e {
                Error::Lex(_) => "lexing error".to_string(),
                Error::Parse(_) => "parse error".to_string(),
            })
        }
    }
}

fn summary(analysis: &Analysis) -> String {
    format!(
        "OK - {} statement(s), {} variable(s), {} label(s)",
        analysis.program.statement_count(),
        analysis.symbols.variable_count(),
        analysis.symbols.label_count()
    )
}
