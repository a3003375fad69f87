//! Small lexical helpers shared by the matchers.
//!
//! Each helper takes the remaining input and returns what it read plus the
//! unconsumed tail, or `None` without consuming anything.

use crate::units::Unit;

/// One or more ASCII digits, read as a whole number
pub(crate) fn integer(input: &str) -> Option<(f64, &str)> {
    let len = input.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let (digits, rest) = input.split_at(len);
    Some((digits.parse().ok()?, rest))
}

/// `digits[.digits]`. A dot without digits after it is left unconsumed.
pub(crate) fn number(input: &str) -> Option<(f64, &str)> {
    let whole = input.bytes().take_while(u8::is_ascii_digit).count();
    if whole == 0 {
        return None;
    }

    let mut len = whole;
    if input.as_bytes().get(whole) == Some(&b'.') {
        let fraction = input[whole + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if fraction > 0 {
            len = whole + 1 + fraction;
        }
    }

    let (text, rest) = input.split_at(len);
    Some((text.parse().ok()?, rest))
}

/// `:digits`
pub(crate) fn colon_integer(input: &str) -> Option<(f64, &str)> {
    integer(input.strip_prefix(':')?)
}

/// The first unit in `candidates` whose symbol prefixes the input.
///
/// Candidate order matters wherever one symbol prefixes another (`mi`/`m`,
/// `min/km`/`min`).
pub(crate) fn unit<'a>(input: &'a str, candidates: &[Unit]) -> Option<(Unit, &'a str)> {
    candidates
        .iter()
        .find_map(|unit| input.strip_prefix(unit.symbol()).map(|rest| (*unit, rest)))
}

/// A case-insensitive literal word
pub(crate) fn keyword<'a>(input: &'a str, word: &str) -> Option<&'a str> {
    let head = input.get(..word.len())?;
    if head.eq_ignore_ascii_case(word) {
        Some(&input[word.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_leaves_bare_dot() {
        assert_eq!(number("1.5km"), Some((1.5, "km")));
        assert_eq!(number("12.x"), Some((12.0, ".x")));
        assert_eq!(number("km"), None);
    }

    #[test]
    fn test_integer_stops_at_dot() {
        assert_eq!(integer("4:05"), Some((4.0, ":05")));
        assert_eq!(integer("1.5"), Some((1.0, ".5")));
    }

    #[test]
    fn test_unit_respects_candidate_order() {
        let distance = [Unit::Miles, Unit::Meters, Unit::Kilometers, Unit::Yards];
        assert_eq!(unit("mi", &distance), Some((Unit::Miles, "")));
        assert_eq!(unit("m+", &distance), Some((Unit::Meters, "+")));
        assert_eq!(unit("ft", &distance), None);
    }

    #[test]
    fn test_keyword_ignores_case() {
        assert_eq!(keyword("HMin3h", "hm"), Some("in3h"));
        assert_eq!(keyword("hm", "hm"), Some(""));
        assert_eq!(keyword("h", "hm"), None);
    }
}
