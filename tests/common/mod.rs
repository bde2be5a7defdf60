use std::path::PathBuf;

use mimetable::MimeTypes;

/// Small database with every kind of extension conflict.
#[allow(dead_code)]
pub const CONFLICT_DB: &str = r#"{
  "application/octet-stream": {"source": "iana", "extensions": ["bin", "exe"]},
  "application/rtf": {"source": "iana", "extensions": ["rtf"]},
  "application/x-msdownload": {"source": "apache", "extensions": ["exe", "dll"]},
  "audio/mp3": {"compressible": false, "extensions": ["mp3"]},
  "audio/mpeg": {"source": "iana", "extensions": ["mpga", "mp3"]},
  "image/bmp": {"source": "iana", "extensions": ["bmp"]},
  "image/x-ms-bmp": {"source": "nginx", "extensions": ["bmp"]},
  "text/rtf": {"source": "iana", "extensions": ["rtf"]},
  "text/x-custom": {"source": "iana", "charset": "ISO-8859-1", "extensions": ["cst"]}
}"#;

/// The bundled database, built fresh for each test.
#[allow(dead_code)]
pub fn builtin() -> MimeTypes {
    MimeTypes::builtin().expect("bundled database parses")
}

/// Write a database JSON file into a temp directory.
/// Returns (TempDir, path_to_file). TempDir must be kept alive.
#[allow(dead_code)]
pub fn write_db(json: &str) -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::TempDir::new().expect("create temp dir");
    let path = tmp.path().join("db.json");
    std::fs::write(&path, json).expect("write database");
    (tmp, path)
}
