use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use crate::database::{MimeDatabase, MimeRecord};
use crate::error::Result;
use crate::essence;
use crate::extname::{self, ExtNameFn};
use crate::registry::Registry;

/// Charset assumed for `text/*` types without an explicit one.
pub const DEFAULT_TEXT_CHARSET: &str = "UTF-8";

/// Query facade over an immutable database and its derived registry.
///
/// Every query takes `&self`; a `MimeTypes` can be shared freely between
/// threads. To swap datasets at runtime, build a new value and replace an
/// `Arc` pointing at it.
#[derive(Debug, Clone)]
pub struct MimeTypes {
    db: MimeDatabase,
    registry: Registry,
    extname: ExtNameFn,
}

impl MimeTypes {
    pub fn new(db: MimeDatabase) -> Self {
        let registry = Registry::build(&db);
        Self {
            db,
            registry,
            extname: extname::extension,
        }
    }

    /// Build from the dataset bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(MimeDatabase::builtin()?))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(MimeDatabase::from_path(path)?))
    }

    /// Replace the function used to pull an extension out of a path.
    pub fn with_extname(mut self, extname: ExtNameFn) -> Self {
        self.extname = extname;
        self
    }

    /// Lookup the MIME type for a file path or extension.
    ///
    /// `html`, `.html`, `page.html` and `/path/to/PAGE.HTML` all resolve the
    /// same way. When several types share the extension, the one chosen by
    /// source precedence is returned; see [`MimeTypes::mimes`] for all of them.
    pub fn mime(&self, path: &str) -> Option<&str> {
        let ext = extname::lookup_key(path, self.extname)?;
        self.registry.mime_for(&ext)
    }

    /// Every MIME type associated with the extension of `path`.
    pub fn mimes(&self, path: &str) -> Option<&[String]> {
        let ext = extname::lookup_key(path, self.extname)?;
        self.registry.mimes_for(&ext)
    }

    /// The preferred extension for a MIME type.
    ///
    /// Parameters and surrounding whitespace are ignored. The result is the
    /// first extension the type's record lists, which is not necessarily an
    /// extension that [`MimeTypes::mime`] maps back to this type.
    pub fn extension(&self, mime_type: &str) -> Option<&str> {
        if mime_type.is_empty() {
            return None;
        }
        let token = essence::lookup_key(mime_type);
        self.registry
            .extensions_for(&token)
            .and_then(|exts| exts.first())
            .map(String::as_str)
    }

    /// The default charset for a MIME type.
    ///
    /// An explicit charset on the record wins; otherwise `text/*` defaults to
    /// UTF-8 and everything else has none.
    pub fn charset(&self, mime_type: &str) -> Option<&str> {
        if mime_type.is_empty() {
            return None;
        }
        let token = essence::lookup_key(mime_type);
        if let Some(charset) = self.db.get(&token).and_then(|r| r.charset.as_deref()) {
            return Some(charset);
        }
        essence::is_text(&token).then_some(DEFAULT_TEXT_CHARSET)
    }

    /// Build a full `Content-Type` header value from a type or extension.
    ///
    /// Input without a `/` is resolved as an extension and fails when the
    /// extension is unknown. Input with a `/` is used verbatim, so unknown
    /// types are echoed back and the caller's casing is kept. A charset
    /// parameter is appended unless one is already present.
    pub fn content_type<'a>(&'a self, input: &'a str) -> Option<Cow<'a, str>> {
        if input.is_empty() {
            return None;
        }
        let mime = if input.contains('/') {
            input
        } else {
            self.mime(input)?
        };

        if mime.contains("charset") {
            return Some(Cow::Borrowed(mime));
        }
        match self.charset(mime) {
            Some(charset) => Some(Cow::Owned(format!(
                "{mime}; charset={}",
                charset.to_lowercase()
            ))),
            None => Some(Cow::Borrowed(mime)),
        }
    }

    /// Whether the type's record marks it compressible, when known.
    pub fn is_compressible(&self, mime_type: &str) -> Option<bool> {
        self.record(mime_type).and_then(|r| r.compressible)
    }

    /// The database record for a MIME type, matched like [`MimeTypes::charset`].
    pub fn record(&self, mime_type: &str) -> Option<&MimeRecord> {
        if mime_type.is_empty() {
            return None;
        }
        self.db.get(&essence::lookup_key(mime_type))
    }

    pub fn database(&self) -> &MimeDatabase {
        &self.db
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Extension to winning type.
    pub fn types(&self) -> &HashMap<String, String> {
        self.registry.types()
    }

    /// Type to extensions, preferred first.
    pub fn extensions(&self) -> &HashMap<String, Vec<String>> {
        self.registry.extensions()
    }

    /// Extension to every type that lists it.
    pub fn type_sets(&self) -> &HashMap<String, Vec<String>> {
        self.registry.type_sets()
    }
}
