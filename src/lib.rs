//! Map file extensions to MIME types and back.
//!
//! A [`MimeDatabase`] of `type -> record` entries is turned into a
//! [`Registry`] of derived indexes once, then queried through
//! [`MimeTypes`]:
//!
//! ```
//! let mt = mimetable::MimeTypes::builtin().unwrap();
//! assert_eq!(mt.mime("page.html"), Some("text/html"));
//! assert_eq!(mt.extension("text/html; charset=utf-8"), Some("html"));
//! assert_eq!(mt.charset("text/plain"), Some("UTF-8"));
//! assert_eq!(
//!     mt.content_type("json").as_deref(),
//!     Some("application/json; charset=utf-8")
//! );
//! ```

pub mod answer;
pub mod database;
pub mod error;
pub mod essence;
pub mod extname;
pub mod lookup;
pub mod registry;
pub mod source;

pub use answer::{Answer, Query};
pub use database::{MimeDatabase, MimeRecord};
pub use error::{MimeError, Result};
pub use lookup::MimeTypes;
pub use registry::Registry;
pub use source::Source;
