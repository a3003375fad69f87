use comfy_table::{presets::UTF8_FULL, Attribute, Cell, CellAlignment, Row, Table};
use pacecalc::{Calculation, Kind, UnitSystem, Value};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Tokens and result of one calculation. `raw` prints only a successful
    /// result, for piping to other tools.
    pub fn format_calculation(
        &self,
        calculation: &Calculation,
        units: UnitSystem,
        raw: bool,
    ) -> String {
        if raw {
            return match calculation.result() {
                Some(result) if !result.is_error() => format!("{}\n", result.render(units)),
                _ => String::new(),
            };
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Token").set_alignment(CellAlignment::Left),
            Cell::new("Kind").set_alignment(CellAlignment::Left),
        ]));

        for part in calculation.parts() {
            table.add_row(vec![
                Cell::new(part.render(units)),
                Cell::new(kind_label(part)),
            ]);
        }

        if let Some(result) = calculation.result() {
            table.add_row(vec![
                Cell::new(format!("= {}", result.render(units))).add_attribute(Attribute::Bold),
                Cell::new(kind_label(result)),
            ]);
        }

        format!("{}\n", table)
    }

    /// Saved calculations with the 1-based index `delete` takes
    pub fn format_history(&self, calculations: &[Calculation], units: UnitSystem) -> String {
        if calculations.is_empty() {
            return "No saved calculations\n".to_string();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec!["#", "Calculation", "Result"]));

        for (index, calculation) in calculations.iter().enumerate() {
            table.add_row(vec![
                Cell::new(index + 1).set_alignment(CellAlignment::Right),
                Cell::new(calculation.to_input(units)),
                Cell::new(result_text(calculation, units)),
            ]);
        }

        format!("{}\n", table)
    }

    pub fn format_samples(
        &self,
        samples: &[(&str, Calculation)],
        units: UnitSystem,
    ) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec!["Expression", "Result"]));

        for (expression, calculation) in samples {
            table.add_row(vec![
                Cell::new(expression),
                Cell::new(result_text(calculation, units)),
            ]);
        }

        format!("{}\n", table)
    }
}

fn result_text(calculation: &Calculation, units: UnitSystem) -> String {
    calculation
        .result()
        .map(|result| result.render(units))
        .unwrap_or_else(|| "?".to_string())
}

fn kind_label(value: &Value) -> &'static str {
    match value.kind() {
        Kind::Error => "error",
        Kind::Pace => "pace",
        Kind::Speed => "speed",
        Kind::Operator => "operator",
        Kind::Duration => "duration",
        Kind::Distance => "distance",
        Kind::Marathon => "marathon",
        Kind::HalfMarathon => "half marathon",
        Kind::Constant => "constant",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacecalc::tokenize;

    #[test]
    fn test_raw_output_is_result_only() {
        let formatter = Formatter::default();
        let ok = tokenize("4:00 for 10min", UnitSystem::Metric);
        assert_eq!(formatter.format_calculation(&ok, UnitSystem::Metric, true), "2.5km\n");

        let failed = tokenize("5km in 5km", UnitSystem::Metric);
        assert_eq!(formatter.format_calculation(&failed, UnitSystem::Metric, true), "");
    }

    #[test]
    fn test_table_lists_tokens_and_result() {
        let formatter = Formatter::default();
        let calculation = tokenize("HM in 1:30h", UnitSystem::Metric);
        let table = formatter.format_calculation(&calculation, UnitSystem::Metric, false);

        assert!(table.contains("HM"));
        assert!(table.contains("half marathon"));
        assert!(table.contains("1h 30min"));
        assert!(table.contains("= 4:16min/km"));
    }

    #[test]
    fn test_empty_history() {
        let formatter = Formatter::default();
        assert_eq!(
            formatter.format_history(&[], UnitSystem::Metric),
            "No saved calculations\n"
        );
    }
}
