//! Locale-tolerant numeric parsing for grid and form inputs.
//!
//! Users type decimals with either comma or dot; the grid stores plain
//! `f64` and the wire format uses dot.

/// Coerce raw cell text to a finite number. Comma is accepted as the
/// decimal separator; unparsable or non-finite input becomes `0.0`.
/// Never panics: every keystroke must leave the cell with a usable value.
pub fn coagir_celula(texto: &str) -> f64 {
    match parse_decimal(texto) {
        Some(v) => v,
        None => 0.0,
    }
}

/// Parse optional numeric input. Unlike [`coagir_celula`] the failure case
/// is `None`, so callers can *drop* the value instead of zeroing it
/// (metas batch semantics).
pub fn parse_valor_meta(texto: &str) -> Option<f64> {
    parse_decimal(texto)
}

/// Render a value the way users type it: whole numbers without a decimal
/// part ("40"), fractional values as-is ("12.5"). Magnitudes beyond the
/// exact-integer range of `i64` keep the default float formatting.
pub fn formatar_decimal(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

fn parse_decimal(texto: &str) -> Option<f64> {
    let limpo = texto.trim().replace(',', ".");
    if limpo.is_empty() {
        return None;
    }
    match limpo.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coagir_virgula_decimal() {
        assert_eq!(coagir_celula("3,5"), 3.5);
        assert_eq!(coagir_celula("3.5"), 3.5);
        assert_eq!(coagir_celula(" 42 "), 42.0);
    }

    #[test]
    fn test_coagir_invalido_vira_zero() {
        assert_eq!(coagir_celula("abc"), 0.0);
        assert_eq!(coagir_celula(""), 0.0);
        assert_eq!(coagir_celula("1,2,3"), 0.0);
        assert_eq!(coagir_celula("inf"), 0.0);
        assert_eq!(coagir_celula("NaN"), 0.0);
    }

    #[test]
    fn test_coagir_aceita_negativos() {
        // No range validation on cells; negatives go upstream as-is.
        assert_eq!(coagir_celula("-7,25"), -7.25);
    }

    #[test]
    fn test_formatar_decimal() {
        assert_eq!(formatar_decimal(40.0), "40");
        assert_eq!(formatar_decimal(12.5), "12.5");
        assert_eq!(formatar_decimal(0.0), "0");
        assert_eq!(formatar_decimal(-3.0), "-3");
        // too large for an exact i64 round-trip: no integer cast
        assert_eq!(formatar_decimal(1e16), "10000000000000000");
    }

    #[test]
    fn test_parse_valor_meta() {
        assert_eq!(parse_valor_meta("10"), Some(10.0));
        assert_eq!(parse_valor_meta("0,5"), Some(0.5));
        assert_eq!(parse_valor_meta(""), None);
        assert_eq!(parse_valor_meta("  "), None);
        assert_eq!(parse_valor_meta("dez"), None);
    }
}
