//! Shared helpers for command handlers: `KEY=VALUE` flag parsing and
//! query construction.

use std::path::Path;

use indexmap::IndexMap;

use getresponse_api::{DateField, DateRange, ParamValue, Query, QueryParams, Scalar};

use crate::cli::QueryArgs;
use crate::error::CliError;

/// Split `KEY=VALUE` at the first `=`.
pub fn parse_pair<'a>(flag: &str, raw: &'a str) -> Result<(&'a str, &'a str), CliError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(CliError::Validation {
            field: flag.into(),
            reason: format!("expected KEY=VALUE, got '{raw}'"),
        }),
    }
}

/// A value containing `,` becomes a list, anything else a single value.
pub fn parse_value(value: &str) -> ParamValue {
    if value.contains(',') {
        ParamValue::List(value.split(',').map(Scalar::from).collect())
    } else {
        ParamValue::from(value)
    }
}

enum Filter {
    Value(ParamValue),
    Range(DateRange),
}

/// Build a [`Query`] from the shared query flags.
///
/// Returns `Query::None` when no flag was given.
pub fn build_query(args: &QueryArgs) -> Result<Query, CliError> {
    if let Some(ref raw) = args.raw_query {
        return Ok(Query::from(raw.as_str()));
    }

    // Filters keep the order their key first appeared in; `KEY.BOUND`
    // flags for the same date field collect into one range. Other dotted
    // keys are plain filters.
    let mut filters: IndexMap<String, Filter> = IndexMap::new();
    for raw in &args.query {
        let (key, value) = parse_pair("query", raw)?;
        match key.split_once('.') {
            Some((field, bound)) if DateField::from_key(field).is_some() && !bound.is_empty() => {
                let entry = filters
                    .entry(field.to_owned())
                    .or_insert_with(|| Filter::Range(DateRange::new()));
                let Filter::Range(range) = entry else {
                    return Err(CliError::Validation {
                        field: "query".into(),
                        reason: format!("'{field}' is given both as a value and as a range"),
                    });
                };
                *range = std::mem::take(range).bound(bound, value);
            }
            _ => {
                filters.insert(key.to_owned(), Filter::Value(parse_value(value)));
            }
        }
    }

    let mut params = QueryParams::new();
    for (key, filter) in filters {
        params = match filter {
            Filter::Value(value) => params.query(key, value),
            Filter::Range(range) => params.query(key, range),
        };
    }

    for raw in &args.sort {
        let (key, direction) = parse_pair("sort", raw)?;
        params = params.sort(key, direction);
    }

    for raw in &args.param {
        let (key, value) = parse_pair("param", raw)?;
        params = params.param(key, parse_value(value));
    }

    if let Some(ref fields) = args.fields {
        let names: Vec<&str> = fields
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();
        params = params.fields(&names);
    }
    if let Some(per_page) = args.per_page {
        params = params.per_page(per_page);
    }
    if let Some(page) = args.page {
        params = params.page(page);
    }

    Ok(if params.is_empty() {
        Query::None
    } else {
        Query::from(params)
    })
}

/// Parse `--data`: inline JSON, or `@FILE` to read it from disk.
pub fn read_json_data(data: &str) -> Result<serde_json::Value, CliError> {
    let contents = match data.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(Path::new(path))?,
        None => data.to_owned(),
    };
    Ok(serde_json::from_str(&contents)?)
}
