// Query-string encoding for read and delete requests.
//
// The remote API expects nested filters as bracketed keys
// (`query[createdOn][from]=...`), sort directives as `sort[field]=dir`, and
// everything else as flat `key=value` pairs. Every pair is terminated by `&`,
// including the last one; the server-side parser was written against that
// exact shape.

use std::fmt;

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left untouched by `encodeURIComponent`.
pub(crate) const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ── Values ──────────────────────────────────────────────────────────

/// A single query value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Falsy values are treated as absent and never reach the wire:
    /// `null`, `false`, `0`, `0.0`, `NaN` and the empty string.
    #[allow(clippy::float_cmp)]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::Float(f) => *f == 0.0 || f.is_nan(),
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_positive() { "Infinity" } else { "-Infinity" })
            }
            Self::Float(x) if x.is_nan() => f.write_str("NaN"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A date-range filter: an insertion-ordered set of bounds, usually
/// `from` and `to`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRange {
    bounds: IndexMap<String, Scalar>,
}

impl DateRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Range with both bounds set.
    pub fn between(from: impl Into<Scalar>, to: impl Into<Scalar>) -> Self {
        Self::new().from(from).to(to)
    }

    /// Set the lower bound (`from`).
    pub fn from(self, value: impl Into<Scalar>) -> Self {
        self.bound("from", value)
    }

    /// Set the upper bound (`to`).
    pub fn to(self, value: impl Into<Scalar>) -> Self {
        self.bound("to", value)
    }

    /// Set an arbitrary bound key.
    pub fn bound(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.bounds.insert(key.into(), value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.bounds.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Date fields the API filters by range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    CreatedOn,
    SendOn,
    ChangedOn,
}

impl DateField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedOn => "createdOn",
            Self::SendOn => "sendOn",
            Self::ChangedOn => "changedOn",
        }
    }

    /// Look up a field by its wire name.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "createdOn" => Some(Self::CreatedOn),
            "sendOn" => Some(Self::SendOn),
            "changedOn" => Some(Self::ChangedOn),
            _ => None,
        }
    }
}

/// Sort direction for `sort[field]=...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for Scalar {
    fn from(order: SortOrder) -> Self {
        Self::Text(match order {
            SortOrder::Asc => "asc".into(),
            SortOrder::Desc => "desc".into(),
        })
    }
}

/// A parameter value: a scalar, a list (sent comma-joined), or a date range
/// (sent as one bracketed pair per bound).
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
    DateRange(DateRange),
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }

            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_from!(
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    f32 => Float,
    f64 => Float,
    String => Text,
    &str => Text,
);

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Int)
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        Self::Scalar(value.into())
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<Scalar> for ParamValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl<S: Into<Scalar>> From<Vec<S>> for ParamValue {
    fn from(items: Vec<S>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<Scalar>, const N: usize> From<[S; N]> for ParamValue {
    fn from(items: [S; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<DateRange> for ParamValue {
    fn from(range: DateRange) -> Self {
        Self::DateRange(range)
    }
}

// ── Parameters ──────────────────────────────────────────────────────

/// Structured query parameters: a `query` filter block, a `sort` block and
/// flat top-level keys (pagination, field selection, ...). Each block keeps
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    query: IndexMap<String, ParamValue>,
    sort: IndexMap<String, Scalar>,
    params: IndexMap<String, ParamValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `query[key]` filter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a `query[field][from|to]` date-range filter.
    pub fn date_range(mut self, field: DateField, range: DateRange) -> Self {
        self.query
            .insert(field.as_str().to_owned(), ParamValue::DateRange(range));
        self
    }

    /// Add a `sort[key]` directive.
    pub fn sort(mut self, key: impl Into<String>, direction: impl Into<Scalar>) -> Self {
        self.sort.insert(key.into(), direction.into());
        self
    }

    /// Add a flat top-level parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Restrict returned fields. An empty slice leaves the parameter unset.
    pub fn fields(self, fields: &[&str]) -> Self {
        if fields.is_empty() {
            self
        } else {
            self.param("fields", fields.to_vec())
        }
    }

    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    pub fn per_page(self, per_page: u32) -> Self {
        self.param("perPage", per_page)
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.sort.is_empty() && self.params.is_empty()
    }
}

/// What a read or delete call appends to its path.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Query {
    /// Nothing is appended.
    #[default]
    None,
    /// A caller-built query string, normally starting with `?`.
    Raw(String),
    /// Structured parameters encoded by [`encode`].
    Params(QueryParams),
}

impl From<QueryParams> for Query {
    fn from(params: QueryParams) -> Self {
        Self::Params(params)
    }
}

impl From<Option<QueryParams>> for Query {
    fn from(params: Option<QueryParams>) -> Self {
        params.map_or(Self::None, Self::Params)
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_owned())
    }
}

impl From<String> for Query {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

// ── Encoding ────────────────────────────────────────────────────────

/// Encode a [`Query`] into the string appended after the request path.
///
/// - `None` yields an empty string.
/// - `Raw` strings starting with `?` pass through byte for byte; other raw
///   strings get the leading `?` added.
/// - `Params` yields `?` followed by the `query` block, the `sort` block and
///   the flat parameters, each pair terminated by `&`.
pub fn encode(query: &Query) -> String {
    match query {
        Query::None => String::new(),
        Query::Raw(raw) if raw.starts_with('?') => raw.clone(),
        Query::Raw(raw) => format!("?{raw}"),
        Query::Params(params) => encode_params(params),
    }
}

fn encode_params(params: &QueryParams) -> String {
    let mut out = String::from("?");

    for (key, value) in &params.query {
        push_value(&mut out, &format!("query[{key}]"), value);
    }

    for (key, direction) in &params.sort {
        if !direction.is_falsy() {
            push_pair(&mut out, &format!("sort[{key}]"), &direction.to_string());
        }
    }

    for (key, value) in &params.params {
        if key == "query" || key == "sort" {
            continue;
        }
        push_value(&mut out, key, value);
    }

    out
}

fn push_value(out: &mut String, key: &str, value: &ParamValue) {
    match value {
        ParamValue::Scalar(scalar) => {
            if !scalar.is_falsy() {
                push_pair(out, key, &scalar.to_string());
            }
        }
        // Lists are sent even when empty, mirroring how the API's own
        // clients treat arrays as present.
        ParamValue::List(items) => push_pair(out, key, &join_list(items)),
        ParamValue::DateRange(range) => {
            for (bound, scalar) in range.iter() {
                if !scalar.is_falsy() {
                    push_pair(out, &format!("{key}[{bound}]"), &scalar.to_string());
                }
            }
        }
    }
}

fn join_list(items: &[Scalar]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn push_pair(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push('=');
    out.extend(utf8_percent_encode(value, COMPONENT));
    out.push('&');
}
