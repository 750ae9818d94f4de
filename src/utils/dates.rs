use chrono::NaiveDate;

use crate::error::EngineError;

const ISO_DATE: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` form value; missing or blank input is malformed.
pub fn parse_iso_date(field: &str, raw: Option<&str>) -> Result<NaiveDate, EngineError> {
    let value = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| EngineError::malformed(field, "date is missing"))?;

    NaiveDate::parse_from_str(value, ISO_DATE)
        .map_err(|e| EngineError::malformed(field, format!("`{value}` is not an ISO date: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_iso_date("startDate", Some(" 2024-01-08 ")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
    }

    #[test]
    fn missing_and_garbage_are_malformed() {
        for raw in [None, Some(""), Some("   "), Some("08/01/2024"), Some("2024-02-30")] {
            let err = parse_iso_date("endDate", raw).unwrap_err();
            assert!(matches!(err, EngineError::MalformedInput { ref field, .. } if field == "endDate"));
        }
    }
}
