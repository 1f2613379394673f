//! Boolean filter conditions over fields.
//!
//! A [`Restriction`] is a tree: leaves constrain one field, connectives
//! combine sub-restrictions with AND/OR/NOT. The tree renders to a single
//! Solr boolean phrase; registered at the query root it contributes one
//! `fq` clause, so filters narrow the result set without touching
//! relevance scoring.

use crate::field::Field;
use crate::params::{Params, ToParams};
use chrono::{DateTime, Utc};

/// A typed restriction value, rendered to the backend's text form
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Time(DateTime<Utc>),
}

impl Value {
    /// Backend text form, before any escaping
    pub fn to_indexed(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Time(t) => t.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Time(value)
    }
}

/// One node of a restriction tree
#[derive(Debug, Clone, PartialEq)]
pub enum Restriction {
    EqualTo { field: Field, value: Value },
    LessThan { field: Field, value: Value },
    GreaterThan { field: Field, value: Value },
    Between { field: Field, lower: Value, upper: Value },
    /// Field matches any of the values (OR within one field)
    AnyOf { field: Field, values: Vec<Value> },
    /// Field matches all of the values (AND within one field)
    AllOf { field: Field, values: Vec<Value> },
    /// Negation of the inner restriction
    Not(Box<Restriction>),
    /// Conjunction over sub-restrictions
    And(Vec<Restriction>),
    /// Disjunction over sub-restrictions
    Or(Vec<Restriction>),
}

impl Restriction {
    pub fn equal_to(field: Field, value: impl Into<Value>) -> Self {
        Restriction::EqualTo {
            field,
            value: value.into(),
        }
    }

    pub fn less_than(field: Field, value: impl Into<Value>) -> Self {
        Restriction::LessThan {
            field,
            value: value.into(),
        }
    }

    pub fn greater_than(field: Field, value: impl Into<Value>) -> Self {
        Restriction::GreaterThan {
            field,
            value: value.into(),
        }
    }

    pub fn between(field: Field, lower: impl Into<Value>, upper: impl Into<Value>) -> Self {
        Restriction::Between {
            field,
            lower: lower.into(),
            upper: upper.into(),
        }
    }

    pub fn any_of(field: Field, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Restriction::AnyOf {
            field,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn all_of(field: Field, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Restriction::AllOf {
            field,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn negated(self) -> Self {
        Restriction::Not(Box::new(self))
    }

    pub fn conjunction(restrictions: Vec<Restriction>) -> Self {
        Restriction::And(restrictions)
    }

    pub fn disjunction(restrictions: Vec<Restriction>) -> Self {
        Restriction::Or(restrictions)
    }

    /// Render this tree as one Solr boolean phrase
    pub fn boolean_phrase(&self) -> String {
        match self {
            Restriction::EqualTo { field, value } => {
                format!("{}:{}", field.indexed_name, escape(&value.to_indexed()))
            }
            Restriction::LessThan { field, value } => {
                format!("{}:[* TO {}]", field.indexed_name, escape(&value.to_indexed()))
            }
            Restriction::GreaterThan { field, value } => {
                format!("{}:[{} TO *]", field.indexed_name, escape(&value.to_indexed()))
            }
            Restriction::Between { field, lower, upper } => format!(
                "{}:[{} TO {}]",
                field.indexed_name,
                escape(&lower.to_indexed()),
                escape(&upper.to_indexed())
            ),
            // An empty value set degenerates to an unconstrained range
            Restriction::AnyOf { field, values } => {
                join_values(&field.indexed_name, values, " OR ")
            }
            Restriction::AllOf { field, values } => {
                join_values(&field.indexed_name, values, " AND ")
            }
            Restriction::Not(inner) => format!("-{}", inner.boolean_phrase()),
            Restriction::And(subs) => join_phrases(subs, " AND "),
            Restriction::Or(subs) => join_phrases(subs, " OR "),
        }
    }

    /// All fields referenced anywhere in the tree
    pub fn fields(&self) -> Vec<&Field> {
        let mut collected = Vec::new();
        self.collect_fields(&mut collected);
        collected
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a Field>) {
        match self {
            Restriction::EqualTo { field, .. }
            | Restriction::LessThan { field, .. }
            | Restriction::GreaterThan { field, .. }
            | Restriction::Between { field, .. }
            | Restriction::AnyOf { field, .. }
            | Restriction::AllOf { field, .. } => out.push(field),
            Restriction::Not(inner) => inner.collect_fields(out),
            Restriction::And(subs) | Restriction::Or(subs) => {
                for sub in subs {
                    sub.collect_fields(out);
                }
            }
        }
    }
}

impl ToParams for Restriction {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.push("fq", self.boolean_phrase());
        params
    }
}

fn join_values(indexed_name: &str, values: &[Value], connective: &str) -> String {
    if values.is_empty() {
        return format!("{}:[* TO *]", indexed_name);
    }
    if values.len() == 1 {
        return format!("{}:{}", indexed_name, escape(&values[0].to_indexed()));
    }
    let joined = values
        .iter()
        .map(|v| escape(&v.to_indexed()))
        .collect::<Vec<_>>()
        .join(connective);
    format!("{}:({})", indexed_name, joined)
}

fn join_phrases(subs: &[Restriction], connective: &str) -> String {
    match subs.len() {
        0 => "*:*".to_string(),
        1 => subs[0].boolean_phrase(),
        _ => {
            let joined = subs
                .iter()
                .map(Restriction::boolean_phrase)
                .collect::<Vec<_>>()
                .join(connective);
            format!("({})", joined)
        }
    }
}

/// Escape a value for inclusion in a boolean phrase.
///
/// Values containing whitespace become quoted phrases; otherwise the
/// backend's special characters are backslash-escaped.
pub fn escape(value: &str) -> String {
    if value.chars().any(char::is_whitespace) {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        for ch in value.chars() {
            if ch == '"' || ch == '\\' {
                quoted.push('\\');
            }
            quoted.push(ch);
        }
        quoted.push('"');
        quoted
    } else {
        let mut escaped = String::with_capacity(value.len());
        for ch in value.chars() {
            if matches!(
                ch,
                '+' | '-' | '&' | '|' | '!' | '(' | ')' | '{' | '}' | '[' | ']' | '^' | '"'
                    | '~' | '*' | '?' | ':' | '\\' | '/'
            ) {
                escaped.push('\\');
            }
            escaped.push(ch);
        }
        escaped
    }
}
