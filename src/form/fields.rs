use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::ValidateEmail;

/// Trailing decimal part made only of zeros, e.g. the `.0` in `20.0`.
static ZERO_DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.0*$").unwrap());

/// A single failed field rule. Its `Display` is the message shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidInteger,
    InvalidEmail,
    InvalidDate,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required => write!(f, "This field is required."),
            FieldError::InvalidInteger => write!(f, "Enter a whole number."),
            FieldError::InvalidEmail => write!(f, "Enter a valid email address."),
            FieldError::InvalidDate => write!(f, "Enter a valid date."),
        }
    }
}

impl std::error::Error for FieldError {}

/// Strip surrounding whitespace and reject missing or blank input.
fn required(raw: Option<&str>) -> Result<&str, FieldError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(FieldError::Required),
    }
}

pub fn clean_text(raw: Option<&str>) -> Result<String, FieldError> {
    required(raw).map(str::to_string)
}

pub fn clean_integer(raw: Option<&str>) -> Result<i64, FieldError> {
    let value = required(raw)?;
    let digits = ZERO_DECIMAL_RE.replace(value, "");
    digits.parse().map_err(|_| FieldError::InvalidInteger)
}

pub fn clean_email(raw: Option<&str>) -> Result<String, FieldError> {
    let value = required(raw)?;
    if value.validate_email() {
        Ok(value.to_string())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// Parse a date using the first of `formats` that accepts the whole input.
pub fn clean_date(raw: Option<&str>, formats: &[&str]) -> Result<NaiveDate, FieldError> {
    let value = required(raw)?;
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or(FieldError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::DOB_INPUT_FORMATS;

    #[test]
    fn text_is_trimmed() {
        assert_eq!(clean_text(Some("  Alice ")).unwrap(), "Alice");
    }

    #[test]
    fn blank_text_is_required() {
        assert_eq!(clean_text(Some("   ")), Err(FieldError::Required));
        assert_eq!(clean_text(None), Err(FieldError::Required));
    }

    #[test]
    fn integer_parses() {
        assert_eq!(clean_integer(Some("20")), Ok(20));
        assert_eq!(clean_integer(Some(" -3 ")), Ok(-3));
    }

    #[test]
    fn integer_drops_zero_decimals() {
        assert_eq!(clean_integer(Some("20.0")), Ok(20));
        assert_eq!(clean_integer(Some("20.")), Ok(20));
        assert_eq!(clean_integer(Some("20.5")), Err(FieldError::InvalidInteger));
    }

    #[test]
    fn integer_rejects_words() {
        assert_eq!(clean_integer(Some("abc")), Err(FieldError::InvalidInteger));
        assert_eq!(clean_integer(Some("")), Err(FieldError::Required));
    }

    #[test]
    fn email_accepts_common_addresses() {
        assert_eq!(clean_email(Some("a@b.com")).unwrap(), "a@b.com");
        assert!(clean_email(Some("first.last+tag@mail.example.org")).is_ok());
        assert!(clean_email(Some("root@localhost")).is_ok());
        assert!(clean_email(Some("user@[192.0.2.1]")).is_ok());
        assert!(clean_email(Some("user@[2001:db8::1]")).is_ok());
    }

    #[test]
    fn email_accepts_internationalized_domain() {
        assert_eq!(clean_email(Some(" user@bücher.de ")).unwrap(), "user@bücher.de");
    }

    #[test]
    fn email_rejects_malformed() {
        for bad in ["ab.com", "a@", "@b.com", "a b@c.com", "a@-b.com", "a@b..com", "a@[300.1.1.1]"] {
            assert_eq!(clean_email(Some(bad)), Err(FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn email_rejects_overlong() {
        let long = format!("{}@example.com", "a".repeat(65));
        assert_eq!(clean_email(Some(&long)), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn date_uses_day_month_year() {
        let date = clean_date(Some("31-12-2023"), DOB_INPUT_FORMATS).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn date_rejects_other_formats() {
        assert_eq!(clean_date(Some("2023-12-31"), DOB_INPUT_FORMATS), Err(FieldError::InvalidDate));
        assert_eq!(clean_date(Some("31/12/2023"), DOB_INPUT_FORMATS), Err(FieldError::InvalidDate));
        assert_eq!(clean_date(Some("31-02-2023"), DOB_INPUT_FORMATS), Err(FieldError::InvalidDate));
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(FieldError::Required.to_string(), "This field is required.");
        assert_eq!(FieldError::InvalidDate.to_string(), "Enter a valid date.");
    }
}
