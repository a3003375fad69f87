use ariadne::{Color, Label, Report, ReportKind, Source};
use pacecalc::{Calculation, Value};
use std::ops::Range;

/// A calculation that could not be read or evaluated
#[derive(Debug, thiserror::Error)]
#[error("{}", .calculation.error_message().unwrap_or("Invalid calculation"))]
pub struct CalculationError {
    pub input: String,
    pub calculation: Calculation,
}

/// Format a failed calculation with fancy terminal output using Ariadne
pub fn format_error(error: &CalculationError) -> String {
    let input = error.input.as_str();
    let message = error.to_string();
    let source_id = String::from("expression");

    let unmatched = error.calculation.parts().iter().find_map(|part| match part {
        Value::Error(remainder) => Some(remainder.as_str()),
        _ => None,
    });

    let (title, span, label, help) = match unmatched {
        Some(remainder) => (
            format!("Could not read '{}'", remainder),
            unmatched_span(input, remainder),
            "no number, unit or operator matches here",
            "Expressions look like 5km in 25min, 4:00 for 10min or 15km/h",
        ),
        None => (
            format!("Calculation failed: {}", message),
            trimmed_span(input),
            message.as_str(),
            "Combine a pace with a duration or distance, or a distance with a duration",
        ),
    };

    let mut output = Vec::new();
    let report = Report::build(ReportKind::Error, &source_id, span.start)
        .with_message(title)
        .with_label(
            Label::new((&source_id, span))
                .with_message(label)
                .with_color(Color::Red),
        )
        .with_help(help)
        .finish();

    match report.write((&source_id, Source::from(input)), &mut output) {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => format!("Error: {}", message),
    }
}

/// Character range of the unmatched remainder within the original input.
///
/// The tokenizer only sees the input with whitespace removed, so the
/// remainder is located by counting non-whitespace characters.
fn unmatched_span(input: &str, remainder: &str) -> Range<usize> {
    let significant = input.chars().filter(|c| !c.is_whitespace()).count();
    let consumed = significant.saturating_sub(remainder.chars().count());

    let start = input
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .nth(consumed)
        .map(|(index, _)| index)
        .unwrap_or(0);

    start..trimmed_span(input).end.max(start + 1)
}

fn trimmed_span(input: &str) -> Range<usize> {
    let leading = input.chars().take_while(|c| c.is_whitespace()).count();
    let end = input.trim_end().chars().count();
    leading..end.max(leading + 1)
}
