use crate::units::UnitSystem;
use crate::value::Value;

/// The outcome of one [`crate::tokenize`] call: the tokens that were read and,
/// when there was something to compute, the result.
///
/// Calculations are never edited. Changing the input means tokenizing the
/// full text again.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    parts: Vec<Value>,
    result: Option<Value>,
}

impl Calculation {
    pub fn new(parts: Vec<Value>, result: Option<Value>) -> Self {
        Self { parts, result }
    }

    pub fn parts(&self) -> &[Value] {
        &self.parts
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    /// A result was computed and it is not an error
    pub fn is_ok(&self) -> bool {
        matches!(&self.result, Some(result) if !result.is_error())
    }

    /// Tokenizing stopped at unmatched input, or evaluation failed.
    ///
    /// A calculation with no result and no error (a lone distance, say) is
    /// neither ok nor an error.
    pub fn is_error(&self) -> bool {
        self.parts.iter().any(Value::is_error) || self.result.as_ref().is_some_and(Value::is_error)
    }

    /// The first error message, from the tokens or the result
    pub fn error_message(&self) -> Option<&str> {
        self.parts
            .iter()
            .chain(self.result.as_ref())
            .find_map(Value::error_message)
    }

    /// The tokens rendered back into editable input text
    pub fn to_input(&self, units: UnitSystem) -> String {
        self.parts
            .iter()
            .map(|part| part.render(units))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
