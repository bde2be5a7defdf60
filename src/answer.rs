//! Dynamically typed queries.
//!
//! Inputs arrive as arbitrary JSON values and results are reported as a
//! tagged [`Answer`]. Anything that is not a non-empty string is a negative
//! answer, never an error.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::lookup::MimeTypes;

/// Outcome of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    NotFound,
    Found(String),
    FoundMany(Vec<String>),
}

impl Answer {
    pub fn is_found(&self) -> bool {
        !matches!(self, Answer::NotFound)
    }
}

impl From<Option<&str>> for Answer {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Answer::NotFound, |s| Answer::Found(s.to_string()))
    }
}

impl From<Option<&[String]>> for Answer {
    fn from(value: Option<&[String]>) -> Self {
        value.map_or(Answer::NotFound, |v| Answer::FoundMany(v.to_vec()))
    }
}

/// Serialized as `false`, a string, or an array of strings.
impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Answer::NotFound => serializer.serialize_bool(false),
            Answer::Found(s) => serializer.serialize_str(s),
            Answer::FoundMany(v) => v.serialize(serializer),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::NotFound => f.write_str("false"),
            Answer::Found(s) => f.write_str(s),
            Answer::FoundMany(v) => f.write_str(&v.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Query {
    Charset,
    ContentType,
    Extension,
    Mime,
    Mimes,
}

impl Query {
    pub fn name(self) -> &'static str {
        match self {
            Query::Charset => "charset",
            Query::ContentType => "content-type",
            Query::Extension => "extension",
            Query::Mime => "mime",
            Query::Mimes => "mimes",
        }
    }
}

impl FromStr for Query {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "charset" | "getCharset" => Ok(Query::Charset),
            "content-type" | "contentType" | "getContentType" => Ok(Query::ContentType),
            "extension" | "getExtension" => Ok(Query::Extension),
            "mime" | "lookup" | "getMime" => Ok(Query::Mime),
            "mimes" | "getMimes" => Ok(Query::Mimes),
            other => Err(format!("unknown query: {other}")),
        }
    }
}

impl TryFrom<String> for Query {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Query> for &'static str {
    fn from(query: Query) -> Self {
        query.name()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl MimeTypes {
    /// Run a query against a string input.
    pub fn query(&self, query: Query, input: &str) -> Answer {
        match query {
            Query::Charset => self.charset(input).into(),
            Query::ContentType => self
                .content_type(input)
                .map_or(Answer::NotFound, |ct| Answer::Found(ct.into_owned())),
            Query::Extension => self.extension(input).into(),
            Query::Mime => self.mime(input).into(),
            Query::Mimes => self.mimes(input).into(),
        }
    }

    /// Run a query against an arbitrary JSON value.
    ///
    /// Only non-empty strings can produce a positive answer; `null`, numbers,
    /// booleans, arrays and objects all yield [`Answer::NotFound`].
    pub fn answer(&self, query: Query, input: &Value) -> Answer {
        match input {
            Value::String(s) if !s.is_empty() => self.query(query, s),
            _ => Answer::NotFound,
        }
    }
}
