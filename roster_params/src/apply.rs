//! Apply one parsed operator/value pair to a filter of the matching kind.

use roster_core::domain::{Instant, Language};
use roster_core::filter::{InstantFilter, LanguageFilter, LongFilter, StringFilter};

use crate::errors::ParamError;
use crate::ops::FilterOp;

pub(crate) fn apply_long(
    filter: &mut LongFilter,
    field: &str,
    op: FilterOp,
    raw: &str,
) -> Result<(), ParamError> {
    match op {
        FilterOp::Equals => filter.equals = Some(parse_long(field, raw)?),
        FilterOp::NotEquals => filter.not_equals = Some(parse_long(field, raw)?),
        FilterOp::In => filter.is_in = Some(parse_list(field, raw, parse_long)?),
        FilterOp::NotIn => filter.not_in = Some(parse_list(field, raw, parse_long)?),
        FilterOp::Specified => filter.specified = Some(parse_bool(field, raw)?),
        FilterOp::GreaterThan => filter.greater_than = Some(parse_long(field, raw)?),
        FilterOp::LessThan => filter.less_than = Some(parse_long(field, raw)?),
        FilterOp::GreaterThanOrEqual => {
            filter.greater_than_or_equal = Some(parse_long(field, raw)?)
        }
        FilterOp::LessThanOrEqual => filter.less_than_or_equal = Some(parse_long(field, raw)?),
        FilterOp::Contains | FilterOp::DoesNotContain => {
            return Err(unsupported(field, "Long", op));
        }
    }
    Ok(())
}

pub(crate) fn apply_instant(
    filter: &mut InstantFilter,
    field: &str,
    op: FilterOp,
    raw: &str,
) -> Result<(), ParamError> {
    match op {
        FilterOp::Equals => filter.equals = Some(parse_instant(field, raw)?),
        FilterOp::NotEquals => filter.not_equals = Some(parse_instant(field, raw)?),
        FilterOp::In => filter.is_in = Some(parse_list(field, raw, parse_instant)?),
        FilterOp::NotIn => filter.not_in = Some(parse_list(field, raw, parse_instant)?),
        FilterOp::Specified => filter.specified = Some(parse_bool(field, raw)?),
        FilterOp::GreaterThan => filter.greater_than = Some(parse_instant(field, raw)?),
        FilterOp::LessThan => filter.less_than = Some(parse_instant(field, raw)?),
        FilterOp::GreaterThanOrEqual => {
            filter.greater_than_or_equal = Some(parse_instant(field, raw)?)
        }
        FilterOp::LessThanOrEqual => filter.less_than_or_equal = Some(parse_instant(field, raw)?),
        FilterOp::Contains | FilterOp::DoesNotContain => {
            return Err(unsupported(field, "Instant", op));
        }
    }
    Ok(())
}

pub(crate) fn apply_string(
    filter: &mut StringFilter,
    field: &str,
    op: FilterOp,
    raw: &str,
) -> Result<(), ParamError> {
    match op {
        FilterOp::Equals => filter.equals = Some(raw.to_string()),
        FilterOp::NotEquals => filter.not_equals = Some(raw.to_string()),
        FilterOp::In => filter.is_in = Some(split_list(raw).map(str::to_string).collect()),
        FilterOp::NotIn => filter.not_in = Some(split_list(raw).map(str::to_string).collect()),
        FilterOp::Specified => filter.specified = Some(parse_bool(field, raw)?),
        FilterOp::Contains => filter.contains = Some(raw.to_string()),
        FilterOp::DoesNotContain => filter.does_not_contain = Some(raw.to_string()),
        FilterOp::GreaterThan
        | FilterOp::LessThan
        | FilterOp::GreaterThanOrEqual
        | FilterOp::LessThanOrEqual => {
            return Err(unsupported(field, "Text", op));
        }
    }
    Ok(())
}

pub(crate) fn apply_language(
    filter: &mut LanguageFilter,
    field: &str,
    op: FilterOp,
    raw: &str,
) -> Result<(), ParamError> {
    match op {
        FilterOp::Equals => filter.equals = Some(parse_language(field, raw)?),
        FilterOp::NotEquals => filter.not_equals = Some(parse_language(field, raw)?),
        FilterOp::In => filter.is_in = Some(parse_list(field, raw, parse_language)?),
        FilterOp::NotIn => filter.not_in = Some(parse_list(field, raw, parse_language)?),
        FilterOp::Specified => filter.specified = Some(parse_bool(field, raw)?),
        FilterOp::GreaterThan
        | FilterOp::LessThan
        | FilterOp::GreaterThanOrEqual
        | FilterOp::LessThanOrEqual
        | FilterOp::Contains
        | FilterOp::DoesNotContain => {
            return Err(unsupported(field, "Language", op));
        }
    }
    Ok(())
}

pub(crate) fn parse_bool(field: &str, raw: &str) -> Result<bool, ParamError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(field, "Boolean", raw)),
    }
}

fn parse_long(field: &str, raw: &str) -> Result<i64, ParamError> {
    raw.parse::<i64>().map_err(|_| invalid(field, "Long", raw))
}

fn parse_instant(field: &str, raw: &str) -> Result<Instant, ParamError> {
    raw.parse::<Instant>()
        .map_err(|_| invalid(field, "Instant", raw))
}

fn parse_language(field: &str, raw: &str) -> Result<Language, ParamError> {
    Language::parse(raw).ok_or_else(|| invalid(field, "Language", raw))
}

fn parse_list<T>(
    field: &str,
    raw: &str,
    parse: fn(&str, &str) -> Result<T, ParamError>,
) -> Result<Vec<T>, ParamError> {
    split_list(raw).map(|item| parse(field, item)).collect()
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn invalid(field: &str, kind: &'static str, value: &str) -> ParamError {
    ParamError::InvalidFilterValue {
        field: field.to_string(),
        kind,
        value: value.to_string(),
    }
}

fn unsupported(field: &str, kind: &'static str, op: FilterOp) -> ParamError {
    ParamError::UnsupportedOperator {
        field: field.to_string(),
        kind,
        operator: op.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_long_range_operators() {
        let mut filter = LongFilter::new();
        apply_long(&mut filter, "salary", FilterOp::GreaterThanOrEqual, "5").unwrap();
        apply_long(&mut filter, "salary", FilterOp::LessThan, "10").unwrap();

        assert_eq!(filter.greater_than_or_equal, Some(5));
        assert_eq!(filter.less_than, Some(10));
    }

    #[test]
    fn test_long_in_list_is_comma_separated() {
        let mut filter = LongFilter::new();
        apply_long(&mut filter, "id", FilterOp::In, "1, 2,3").unwrap();
        assert_eq!(filter.is_in, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_long_rejects_substring_operators() {
        let mut filter = LongFilter::new();
        assert_matches!(
            apply_long(&mut filter, "salary", FilterOp::Contains, "5"),
            Err(ParamError::UnsupportedOperator { .. })
        );
    }

    #[test]
    fn test_unparseable_long_is_reported() {
        let mut filter = LongFilter::new();
        assert_matches!(
            apply_long(&mut filter, "salary", FilterOp::Equals, "abc"),
            Err(ParamError::InvalidFilterValue { .. })
        );
    }

    #[test]
    fn test_instant_parses_rfc3339() {
        let mut filter = InstantFilter::new();
        apply_instant(
            &mut filter,
            "hireDate",
            FilterOp::GreaterThanOrEqual,
            "2020-01-01T00:00:00Z",
        )
        .unwrap();
        assert!(filter.greater_than_or_equal.is_some());

        assert_matches!(
            apply_instant(&mut filter, "hireDate", FilterOp::Equals, "yesterday"),
            Err(ParamError::InvalidFilterValue { .. })
        );
    }

    #[test]
    fn test_string_rejects_range_operators() {
        let mut filter = StringFilter::new();
        assert_matches!(
            apply_string(&mut filter, "email", FilterOp::GreaterThan, "a"),
            Err(ParamError::UnsupportedOperator { .. })
        );
    }

    #[test]
    fn test_language_values_parse_case_insensitively() {
        let mut filter = LanguageFilter::new();
        apply_language(&mut filter, "language", FilterOp::In, "FRENCH,spanish").unwrap();
        assert_eq!(
            filter.is_in,
            Some(vec![Language::French, Language::Spanish])
        );

        assert_matches!(
            apply_language(&mut filter, "language", FilterOp::Equals, "LATIN"),
            Err(ParamError::InvalidFilterValue { .. })
        );
    }
}
