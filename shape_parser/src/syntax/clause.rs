//! Measurement clause parser
//!
//! One clause is exactly five words: `{with|and} {a|an} <name> {of|=}
//! <integer>`. Checks run left to right so the reported failure always
//! names the first offending word.

use crate::config::constants::compile_time::syntax::CLAUSE_WORD_COUNT;
use crate::grammar::ast::Measurement;
use crate::grammar::vocabulary::ParameterKind;
use crate::syntax::error::SyntaxError;
use crate::tokens::{SpannedToken, Token};
use crate::utils::Span;

/// Parse one five-word clause into a measurement
pub fn parse_clause(clause: &[SpannedToken]) -> Result<Measurement, SyntaxError> {
    let clause_span = span_of(clause);

    if clause.len() != CLAUSE_WORD_COUNT {
        return Err(SyntaxError::malformed_clause(clause_span));
    }

    let conjunction = &clause[0];
    if !conjunction.value.is_conjunction() {
        return Err(SyntaxError::invalid_conjunction(
            conjunction.value.as_request_str(),
            conjunction.span,
        ));
    }

    if !clause[1].value.is_article() {
        return Err(SyntaxError::malformed_clause(clause_span));
    }

    let name = &clause[2];
    let parameter = ParameterKind::from_str(&name.value.as_request_str())
        .ok_or_else(|| SyntaxError::unknown_parameter(name.value.as_request_str(), name.span))?;

    if !clause[3].value.is_separator() {
        return Err(SyntaxError::malformed_clause(clause_span));
    }

    let value_token = &clause[4];
    let value = match &value_token.value {
        Token::Integer(value) => *value,
        other => {
            return Err(SyntaxError::invalid_value(
                other.as_request_str(),
                value_token.span,
            ));
        }
    };

    if value <= 0 {
        return Err(SyntaxError::non_positive_value(value, value_token.span));
    }

    Ok(Measurement::new(parameter, value, clause_span))
}

fn span_of(clause: &[SpannedToken]) -> Span {
    match (clause.first(), clause.last()) {
        (Some(first), Some(last)) => first.span.merge(last.span),
        _ => Span::dummy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause_from(words: &[&str]) -> Vec<SpannedToken> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| SpannedToken::new(Token::from_word(w), Span::word(i)))
            .collect()
    }

    #[test]
    fn test_valid_clause() {
        let clause = clause_from(&["with", "a", "radius", "of", "100"]);
        let measurement = parse_clause(&clause).unwrap();

        assert_eq!(measurement.parameter, ParameterKind::Radius);
        assert_eq!(measurement.value, 100);
        assert_eq!(measurement.span, Span::new(0, 5));
    }

    #[test]
    fn test_all_connector_combinations() {
        for conjunction in ["with", "and"] {
            for article in ["a", "an"] {
                for separator in ["of", "="] {
                    let clause = clause_from(&[conjunction, article, "height", separator, "50"]);
                    let measurement = parse_clause(&clause).unwrap();
                    assert_eq!(measurement.parameter, ParameterKind::Height);
                    assert_eq!(measurement.value, 50);
                }
            }
        }
    }

    #[test]
    fn test_wrong_length() {
        let clause = clause_from(&["with", "a", "radius", "of"]);
        assert_eq!(
            parse_clause(&clause).unwrap_err().to_string(),
            "Sorry - invalid measurement clause"
        );
    }

    #[test]
    fn test_bad_conjunction() {
        let clause = clause_from(&["plus", "a", "radius", "of", "100"]);
        assert_eq!(
            parse_clause(&clause).unwrap_err().to_string(),
            "Sorry - invalid conjunction (plus)"
        );
    }

    #[test]
    fn test_bad_article() {
        let clause = clause_from(&["with", "the", "radius", "of", "100"]);
        assert_eq!(
            parse_clause(&clause).unwrap_err().to_string(),
            "Sorry - invalid measurement clause"
        );
    }

    #[test]
    fn test_unknown_parameter() {
        let clause = clause_from(&["with", "a", "girth", "of", "100"]);
        assert_eq!(
            parse_clause(&clause).unwrap_err().to_string(),
            "Unknown measurement type girth"
        );
    }

    #[test]
    fn test_bad_separator() {
        let clause = clause_from(&["with", "a", "radius", "at", "100"]);
        assert_eq!(
            parse_clause(&clause).unwrap_err().to_string(),
            "Sorry - invalid measurement clause"
        );
    }

    #[test]
    fn test_non_integer_value() {
        let clause = clause_from(&["with", "a", "radius", "of", "10x"]);
        assert_eq!(
            parse_clause(&clause).unwrap_err().to_string(),
            "Sorry - invalid value (10x)"
        );
    }

    #[test]
    fn test_overflowing_value_reports_invalid() {
        // Larger than any i32; must fail as a bad value, not crash
        let clause = clause_from(&["with", "a", "radius", "of", "650000000000"]);
        assert_eq!(
            parse_clause(&clause).unwrap_err().to_string(),
            "Sorry - invalid value (650000000000)"
        );
    }

    #[test]
    fn test_non_positive_values() {
        for value in ["0", "-5"] {
            let clause = clause_from(&["with", "a", "radius", "of", value]);
            assert_eq!(
                parse_clause(&clause).unwrap_err().to_string(),
                "Sorry - negative or zero values are not allowed."
            );
        }
    }

    #[test]
    fn test_checks_run_left_to_right() {
        // Both the conjunction and the value are bad; the conjunction
        // is reported because it comes first
        let clause = clause_from(&["plus", "a", "radius", "of", "-5"]);
        assert!(matches!(
            parse_clause(&clause),
            Err(SyntaxError::InvalidConjunction { .. })
        ));
    }
}
