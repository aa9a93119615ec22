//! Monetary amount extraction
//!
//! Three surface forms are tried in order and the first one present in the
//! message wins, even if its token later fails to parse:
//!
//! 1. currency marker then number: `Rs.1,250.50`, `INR 500`, `₹300`
//! 2. number then currency marker: `150 rs`, `1,000 rupees`
//! 3. the first bare number anywhere in the text
//!
//! The bare-number tier can pick up a reference number when no currency marker
//! is present. Callers only reach it after the message has passed the
//! transaction-vocabulary pre-filter.

use regex::Regex;
use std::sync::OnceLock;

/// Which surface form produced an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountForm {
    CurrencyPrefixed,
    CurrencySuffixed,
    BareNumber,
}

/// An amount found in a message
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedAmount {
    /// Parsed value, always > 0
    pub value: f64,
    /// Token as it appeared in the text
    pub raw: String,
    pub form: AmountForm,
}

fn prefixed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(?:rs\.?|inr|₹)\s*([0-9,.]+)").expect("invalid prefixed amount regex"))
}

fn suffixed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)([0-9,.]+)\s*(?:rs\.?|rupees|inr|₹)").expect("invalid suffixed amount regex")
    })
}

fn bare_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([0-9]+(?:\.[0-9]+)?)\b").expect("invalid bare number regex"))
}

fn first_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

fn currency_prefixed(text: &str) -> Option<&str> {
    first_capture(prefixed_re(), text)
}

fn currency_suffixed(text: &str) -> Option<&str> {
    first_capture(suffixed_re(), text)
}

fn bare_number(text: &str) -> Option<&str> {
    first_capture(bare_number_re(), text)
}

type AmountMatcher = fn(&str) -> Option<&str>;

const MATCHERS: [(AmountForm, AmountMatcher); 3] = [
    (AmountForm::CurrencyPrefixed, currency_prefixed),
    (AmountForm::CurrencySuffixed, currency_suffixed),
    (AmountForm::BareNumber, bare_number),
];

/// Find the transaction amount in a message
///
/// Returns `None` when no tier matches, when the matched token does not parse,
/// or when the parsed value is not greater than zero.
pub fn extract_amount(text: &str) -> Option<ExtractedAmount> {
    let (form, raw) = MATCHERS
        .iter()
        .find_map(|(form, matcher)| matcher(text).map(|raw| (*form, raw)))?;

    let value = parse_leading_decimal(&raw.replace(',', ""))?;
    if value <= 0.0 {
        return None;
    }

    Some(ExtractedAmount {
        value,
        raw: raw.to_string(),
        form,
    })
}

/// Parse the longest `digits[.digits]` prefix of a token
///
/// Sentence punctuation often trails the amount (`Rs.500.00.`), so anything
/// after the first fractional part is ignored rather than rejected.
fn parse_leading_decimal(token: &str) -> Option<f64> {
    let int_len = token.find(|c: char| !c.is_ascii_digit()).unwrap_or(token.len());
    let (int_part, rest) = token.split_at(int_len);

    let frac_part = match rest.strip_prefix('.') {
        Some(after_dot) => {
            let frac_len = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            &after_dot[..frac_len]
        }
        None => "",
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
    format!("{}.{}", int_part, frac_part).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_prefixed_strips_commas() {
        let amount = extract_amount("Rs.1,250.50 credited to your account").unwrap();
        assert_eq!(amount.value, 1250.50);
        assert_eq!(amount.raw, "1,250.50");
        assert_eq!(amount.form, AmountForm::CurrencyPrefixed);
    }

    #[test]
    fn test_prefix_variants() {
        assert_eq!(extract_amount("INR 500 debited").unwrap().value, 500.0);
        assert_eq!(extract_amount("₹300 paid").unwrap().value, 300.0);
        assert_eq!(extract_amount("rs 75.25 spent").unwrap().value, 75.25);
        assert_eq!(extract_amount("UPI: Rs. 500.00 paid to X").unwrap().value, 500.0);
    }

    #[test]
    fn test_currency_suffixed() {
        let amount = extract_amount("Paid 150 rupees for tea").unwrap();
        assert_eq!(amount.value, 150.0);
        assert_eq!(amount.form, AmountForm::CurrencySuffixed);
    }

    #[test]
    fn test_bare_number_fallback() {
        let amount = extract_amount("You paid 42.5 today").unwrap();
        assert_eq!(amount.value, 42.5);
        assert_eq!(amount.form, AmountForm::BareNumber);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let amount = extract_amount("Rs.300.00 debited. Avl Bal: Rs.1250.20").unwrap();
        assert_eq!(amount.value, 300.0);
    }

    #[test]
    fn test_trailing_punctuation() {
        assert_eq!(extract_amount("credited with INR 1,000.").unwrap().value, 1000.0);
        assert_eq!(extract_amount("Rs.500.00. Thanks").unwrap().value, 500.0);
    }

    #[test]
    fn test_zero_and_unparseable_rejected() {
        assert!(extract_amount("Rs. 0.00 debited").is_none());
        assert!(extract_amount("Rs... paid").is_none());
        assert!(extract_amount("no digits at all").is_none());
    }

    #[test]
    fn test_matched_tier_is_final() {
        // Prefixed tier matches first, so the later valid amount is not considered
        assert!(extract_amount("Rs.0 fee, 250 rupees paid").is_none());
    }

    #[test]
    fn test_parse_leading_decimal() {
        assert_eq!(parse_leading_decimal("1250.50"), Some(1250.5));
        assert_eq!(parse_leading_decimal("500."), Some(500.0));
        assert_eq!(parse_leading_decimal(".5"), Some(0.5));
        assert_eq!(parse_leading_decimal("1.2.3"), Some(1.2));
        assert_eq!(parse_leading_decimal("."), None);
        assert_eq!(parse_leading_decimal(""), None);
    }
}
