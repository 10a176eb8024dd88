use std::collections::HashMap;
use std::num::IntErrorKind;
use snafu::{ensure, OptionExt};
use crate::autocomplete::model::{AutocompleteQuery, SearchType};
use crate::errors::{EmptyQuerySnafu, InvalidLimitSnafu, MissingParameterSnafu, UnsupportedTypeSnafu, ValidationError};

pub const QUERY_PARAM: &str = "q";
pub const TYPE_PARAM: &str = "type";
pub const LIMIT_PARAM: &str = "limit";

impl TryFrom<&HashMap<String, String>> for AutocompleteQuery {
    type Error = ValidationError;

    /// Checks run in a fixed order and the first failing one is reported:
    /// presence of all parameters, then `limit`, then `type`, then `q`.
    fn try_from(params: &HashMap<String, String>) -> Result<Self, Self::Error> {
        let q = required(params, QUERY_PARAM)?;
        let search_type = required(params, TYPE_PARAM)?;
        let limit = required(params, LIMIT_PARAM)?;

        let limit = parse_limit(limit)?;
        let search_type = parse_search_type(search_type)?;
        ensure!(!q.is_empty(), EmptyQuerySnafu);

        Ok(AutocompleteQuery {
            q: q.to_string(),
            search_type,
            limit,
        })
    }
}

fn required<'a>(params: &'a HashMap<String, String>, key: &'static str) -> Result<&'a str, ValidationError> {
    params
        .get(key)
        .map(String::as_str)
        .context(MissingParameterSnafu { key })
}

fn parse_limit(raw: &str) -> Result<i64, ValidationError> {
    let digits = strip_digit_separators(raw.trim()).context(InvalidLimitSnafu)?;
    let limit = match digits.parse::<i64>() {
        Ok(limit) => limit,
        // still a positive integer, just wider than the database can take
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(_) => return InvalidLimitSnafu.fail(),
    };
    ensure!(limit > 0, InvalidLimitSnafu);
    Ok(limit)
}

/// Removes `_` used as a digit group separator (`1_000`). An underscore is only valid
/// with a digit on both sides.
fn strip_digit_separators(raw: &str) -> Option<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut digits = String::with_capacity(chars.len());
    for (i, c) in chars.iter().enumerate() {
        if *c != '_' {
            digits.push(*c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(digits)
}

fn parse_search_type(raw: &str) -> Result<SearchType, ValidationError> {
    match raw {
        "users" => Ok(SearchType::Users),
        _ => UnsupportedTypeSnafu.fail(),
    }
}
