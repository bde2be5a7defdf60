use std::collections::HashMap;

use crate::database::MimeDatabase;
use crate::source::Source;

const OCTET_STREAM: &str = "application/octet-stream";

/// Indexes derived from a [`MimeDatabase`].
///
/// Built once by [`Registry::build`] and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: HashMap<String, String>,
    extensions: HashMap<String, Vec<String>>,
    type_sets: HashMap<String, Vec<String>>,
}

impl Registry {
    pub fn build(db: &MimeDatabase) -> Self {
        let mut registry = Registry::default();
        let mut conflicts = 0usize;

        for (mime_type, record) in db.iter() {
            let exts = &record.extensions;
            if exts.is_empty() {
                continue;
            }

            registry
                .extensions
                .insert(mime_type.to_string(), exts.clone());

            for ext in exts {
                registry
                    .type_sets
                    .entry(ext.clone())
                    .or_default()
                    .push(mime_type.to_string());

                if let Some(incumbent) = registry.types.get(ext) {
                    conflicts += 1;
                    let incumbent_source = db
                        .get(incumbent)
                        .map(|r| &r.source)
                        .unwrap_or(&Source::Unspecified);
                    if keeps_incumbent(incumbent, incumbent_source, &record.source) {
                        tracing::trace!(
                            extension = %ext,
                            kept = %incumbent,
                            skipped = %mime_type,
                            "extension conflict"
                        );
                        continue;
                    }
                    tracing::trace!(
                        extension = %ext,
                        replaced = %incumbent,
                        winner = %mime_type,
                        "extension conflict"
                    );
                }

                registry.types.insert(ext.clone(), mime_type.to_string());
            }
        }

        tracing::debug!(
            types = registry.extensions.len(),
            extensions = registry.types.len(),
            conflicts,
            "built MIME registry"
        );
        registry
    }

    /// Extension to its single winning type.
    pub fn types(&self) -> &HashMap<String, String> {
        &self.types
    }

    /// Type to its extensions, preferred extension first.
    pub fn extensions(&self) -> &HashMap<String, Vec<String>> {
        &self.extensions
    }

    /// Extension to every type that lists it, in database order.
    pub fn type_sets(&self) -> &HashMap<String, Vec<String>> {
        &self.type_sets
    }

    pub fn mime_for(&self, ext: &str) -> Option<&str> {
        self.types.get(ext).map(String::as_str)
    }

    pub fn mimes_for(&self, ext: &str) -> Option<&[String]> {
        self.type_sets.get(ext).map(Vec::as_slice)
    }

    pub fn extensions_for(&self, mime_type: &str) -> Option<&[String]> {
        self.extensions.get(mime_type).map(Vec::as_slice)
    }
}

/// Whether the current winner for an extension holds against a candidate.
///
/// `application/octet-stream` never holds. Otherwise the incumbent holds when
/// its source ranks strictly higher, or ranks equal and it is an
/// `application/*` type.
pub fn keeps_incumbent(incumbent: &str, from: &Source, to: &Source) -> bool {
    if incumbent == OCTET_STREAM {
        return false;
    }
    let (from, to) = (from.rank(), to.rank());
    from > to || (from == to && incumbent.starts_with("application/"))
}
