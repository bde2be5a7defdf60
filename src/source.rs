use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Provenance of a database record.
///
/// Only used to break ties when several types claim the same extension.
/// Variants are declared from least to most preferred, so the derived `Ord`
/// is the precedence order: `Other < Nginx < Apache < Unspecified < Iana`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Source {
    /// A tag outside the known set; ranks below every known source.
    Other(String),
    Nginx,
    Apache,
    #[default]
    Unspecified,
    Iana,
}

impl Source {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            None => Source::Unspecified,
            Some("nginx") => Source::Nginx,
            Some("apache") => Source::Apache,
            Some("iana") => Source::Iana,
            Some(other) => Source::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Source::Other(tag) => Some(tag),
            Source::Nginx => Some("nginx"),
            Source::Apache => Some("apache"),
            Source::Unspecified => None,
            Source::Iana => Some("iana"),
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Source::Unspecified)
    }

    /// Precedence rank; higher wins.
    pub fn rank(&self) -> u8 {
        match self {
            Source::Other(_) => 0,
            Source::Nginx => 1,
            Source::Apache => 2,
            Source::Unspecified => 3,
            Source::Iana => 4,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag().unwrap_or("(none)"))
    }
}

impl Serialize for Source {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_tag() {
            Some(tag) => serializer.serialize_str(tag),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Source {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(Source::from_tag(tag.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        assert!(Source::Nginx < Source::Apache);
        assert!(Source::Apache < Source::Unspecified);
        assert!(Source::Unspecified < Source::Iana);
        assert!(Source::Other("debian".into()) < Source::Nginx);
    }

    #[test]
    fn test_rank_agrees_with_ord() {
        let mut sources = vec![
            Source::Iana,
            Source::Other("x".into()),
            Source::Unspecified,
            Source::Nginx,
            Source::Apache,
        ];
        sources.sort();
        let ranks: Vec<u8> = sources.iter().map(Source::rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_deserialize_tags() {
        let parsed: Vec<Source> =
            serde_json::from_str(r#"["iana", "apache", "nginx", null, "custom"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Source::Iana,
                Source::Apache,
                Source::Nginx,
                Source::Unspecified,
                Source::Other("custom".into()),
            ]
        );
    }

    #[test]
    fn test_serialize_keeps_unknown_tag() {
        let json = serde_json::to_string(&Source::Other("custom".into())).unwrap();
        assert_eq!(json, r#""custom""#);
        let json = serde_json::to_string(&Source::Unspecified).unwrap();
        assert_eq!(json, "null");
    }
}
