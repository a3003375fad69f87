use crate::error_formatter::{format_error, CalculationError};
use crate::formatter::Formatter;
use crate::store::Store;
use anyhow::{Context, Result};
use inquire::{InquireError, Text};
use pacecalc::{tokenize, UnitSystem};
use tracing::debug;

const SAVE_SUFFIX: char = '!';

/// Prompt for expressions until an empty line or Esc.
///
/// A trailing `!` saves a successful calculation to the store.
pub fn run_interactive(store: &mut Store, units: UnitSystem) -> Result<()> {
    let formatter = Formatter::default();
    println!("Units: {} (empty line or Esc to quit)", units);

    loop {
        let line = match Text::new("Calculate:")
            .with_help_message("e.g. 5km in 25min, add ! to save")
            .prompt()
        {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read expression"),
        };

        let line = line.trim();
        if line.is_empty() {
            break;
        }

        let (expression, save) = split_save_suffix(line);
        let calculation = tokenize(expression, units);
        debug!(expression, save, ok = calculation.is_ok(), "evaluated prompt line");

        if calculation.is_error() {
            eprintln!(
                "{}",
                format_error(&CalculationError {
                    input: expression.to_string(),
                    calculation,
                })
            );
            continue;
        }

        print!("{}", formatter.format_calculation(&calculation, units, false));

        if save {
            match store.push(&calculation) {
                Ok(()) => {
                    store.save()?;
                    println!("Saved");
                }
                Err(e) => eprintln!("Not saved: {}", e),
            }
        }
    }

    Ok(())
}

fn split_save_suffix(line: &str) -> (&str, bool) {
    match line.strip_suffix(SAVE_SUFFIX) {
        Some(expression) => (expression.trim_end(), true),
        None => (line, false),
    }
}
