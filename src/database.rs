use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::error::{MimeError, Result};
use crate::source::Source;

/// The dataset compiled into the crate, in mime-db JSON format.
pub const BUILTIN_DB_JSON: &str = include_str!("../data/db.json");

/// One media type's entry in the database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeRecord {
    #[serde(default, skip_serializing_if = "Source::is_unspecified")]
    pub source: Source,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressible: Option<bool>,
    /// Extensions without a leading dot; the first is the preferred one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
}

impl MimeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    pub fn with_compressible(mut self, compressible: bool) -> Self {
        self.compressible = Some(compressible);
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
}

/// Ordered `type -> record` table.
///
/// Iteration follows insertion order, which for JSON input is the order the
/// keys appear in the document. Registry construction depends on that order
/// for tie-breaking, so it is preserved rather than sorted.
#[derive(Debug, Clone, Default)]
pub struct MimeDatabase {
    entries: Vec<(String, MimeRecord)>,
    index: HashMap<String, usize>,
}

impl MimeDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the dataset bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DB_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let db: MimeDatabase = serde_json::from_str(json)?;
        tracing::debug!(records = db.len(), "loaded MIME database");
        Ok(db)
    }

    /// Read and parse a whole document. Read failures surface as
    /// [`MimeError::Io`], malformed input as [`MimeError::Json`].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| MimeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "database read from file");
        Ok(db)
    }

    pub fn from_records<I, K>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, MimeRecord)>,
        K: Into<String>,
    {
        let mut db = Self::new();
        for (mime_type, record) in records {
            db.insert(mime_type, record)?;
        }
        Ok(db)
    }

    /// Add a record, or replace an existing one in place.
    ///
    /// A replaced record keeps its original position, matching how a JSON
    /// object with a repeated key is read.
    pub fn insert(&mut self, mime_type: impl Into<String>, record: MimeRecord) -> Result<()> {
        let mime_type = mime_type.into();
        if mime_type.is_empty() {
            return Err(MimeError::InvalidRecord {
                mime_type,
                reason: "type key is empty".to_string(),
            });
        }

        match self.index.get(&mime_type) {
            Some(&pos) => self.entries[pos].1 = record,
            None => {
                self.index.insert(mime_type.clone(), self.entries.len());
                self.entries.push((mime_type, record));
            }
        }
        Ok(())
    }

    pub fn get(&self, mime_type: &str) -> Option<&MimeRecord> {
        self.index.get(mime_type).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, mime_type: &str) -> bool {
        self.index.contains_key(mime_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MimeRecord)> {
        self.entries.iter().map(|(t, r)| (t.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MimeDatabase {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (mime_type, record) in &self.entries {
            map.serialize_entry(mime_type, record)?;
        }
        map.end()
    }
}

struct DatabaseVisitor;

impl<'de> Visitor<'de> for DatabaseVisitor {
    type Value = MimeDatabase;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of MIME type to record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut db = MimeDatabase::new();
        while let Some((mime_type, record)) = access.next_entry::<String, MimeRecord>()? {
            db.insert(mime_type, record).map_err(serde::de::Error::custom)?;
        }
        Ok(db)
    }
}

impl<'de> Deserialize<'de> for MimeDatabase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(DatabaseVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_document_order() {
        let db = MimeDatabase::from_json_str(
            r#"{
                "text/zzz": {"extensions": ["z"]},
                "text/aaa": {"extensions": ["a"]},
                "text/mmm": {}
            }"#,
        )
        .unwrap();
        let keys: Vec<&str> = db.iter().map(|(t, _)| t).collect();
        assert_eq!(keys, vec!["text/zzz", "text/aaa", "text/mmm"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let db = MimeDatabase::from_json_str(r#"{"application/x-empty": {}}"#).unwrap();
        let record = db.get("application/x-empty").unwrap();
        assert_eq!(record.source, Source::Unspecified);
        assert!(record.charset.is_none());
        assert!(record.compressible.is_none());
        assert!(record.extensions.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let db = MimeDatabase::from_json_str(
            r#"{"text/x-test": {"source": "iana", "notes": ["x"], "extensions": ["t"]}}"#,
        )
        .unwrap();
        assert_eq!(db.get("text/x-test").unwrap().source, Source::Iana);
    }

    #[test]
    fn test_repeated_key_replaces_in_place() {
        let db = MimeDatabase::from_json_str(
            r#"{
                "text/a": {"extensions": ["one"]},
                "text/b": {},
                "text/a": {"extensions": ["two"]}
            }"#,
        )
        .unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.iter().next().unwrap().0, "text/a");
        assert_eq!(db.get("text/a").unwrap().extensions, vec!["two"]);
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = MimeDatabase::from_records([("", MimeRecord::new())]).unwrap_err();
        assert!(matches!(err, MimeError::InvalidRecord { .. }));
        assert!(MimeDatabase::from_json_str(r#"{"": {}}"#).is_err());
    }

    #[test]
    fn test_not_an_object() {
        let err = MimeDatabase::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, MimeError::Json(_)));
    }

    #[test]
    fn test_serialize_round_trips_fields() {
        let db = MimeDatabase::from_records([(
            "text/x-test",
            MimeRecord::new()
                .with_source(Source::Apache)
                .with_charset("UTF-8")
                .with_extensions(["t"]),
        )])
        .unwrap();
        let json = serde_json::to_string(&db).unwrap();
        assert_eq!(
            json,
            r#"{"text/x-test":{"source":"apache","charset":"UTF-8","extensions":["t"]}}"#
        );
    }

    #[test]
    fn test_from_reader_parses() {
        let json = br#"{"text/x-a": {"extensions": ["a"]}}"#;
        let db = MimeDatabase::from_reader(&json[..]).unwrap();
        assert_eq!(db.get("text/x-a").unwrap().extensions, vec!["a"]);
    }

    #[test]
    fn test_from_reader_io_failure() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk gone"))
            }
        }

        let err = MimeDatabase::from_reader(Broken).unwrap_err();
        assert!(matches!(err, MimeError::Io(_)));
    }

    #[test]
    fn test_from_reader_malformed_is_json_error() {
        let err = MimeDatabase::from_reader(&b"{\"text/x\": 5}"[..]).unwrap_err();
        assert!(matches!(err, MimeError::Json(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = MimeDatabase::from_path(Path::new("/nonexistent/db.json")).unwrap_err();
        assert!(matches!(err, MimeError::Read { .. }));
    }

    #[test]
    fn test_builtin_parses() {
        let db = MimeDatabase::builtin().unwrap();
        assert!(db.len() > 100);
        assert!(db.contains("application/json"));
    }
}
