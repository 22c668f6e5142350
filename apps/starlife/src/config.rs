//! # Catalog Configuration
//!
//! Loads a reference catalog from a TOML file in place of the compiled-in
//! one. The file holds one `[[star]]` table per entry:
//!
//! ```toml
//! [[star]]
//! name = "Sun"
//! mass = 1.0
//! metallicity = 0.02
//! temperature = 5778.0
//! luminosity = 1.0
//! radius = 1.0
//! age = 4.6e9
//! type = "G-type main sequence"
//! description = "Our home star, middle-aged and stable"
//! ```
//!
//! The path comes from `--catalog` or, failing that, `STARLIFE_CATALOG`.

use serde::Deserialize;
use starlife_core::{Catalog, ReferenceStar, StarlifeError};
use std::path::{Path, PathBuf};

/// Environment variable naming a catalog file.
pub const CATALOG_ENV: &str = "STARLIFE_CATALOG";

/// Maximum catalog file size (1 MB).
pub const MAX_CATALOG_FILE_SIZE: u64 = 1024 * 1024;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default, rename = "star")]
    stars: Vec<ReferenceStar>,
}

/// Pick the catalog path: the explicit flag wins over the environment.
#[must_use]
pub fn resolve_catalog_path(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(CATALOG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Parse and validate catalog TOML.
pub fn parse_catalog(text: &str) -> Result<Catalog, StarlifeError> {
    let file: CatalogFile = toml::from_str(text)
        .map_err(|e| StarlifeError::Config(format!("Invalid catalog TOML: {}", e)))?;

    if file.stars.is_empty() {
        return Err(StarlifeError::Catalog(
            "catalog file defines no [[star]] entries".to_string(),
        ));
    }

    Catalog::new(file.stars)
}

/// Read, parse and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, StarlifeError> {
    let canonical = path.canonicalize().map_err(|e| {
        StarlifeError::Io(format!("Invalid catalog path '{}': {}", path.display(), e))
    })?;

    let metadata = std::fs::metadata(&canonical)
        .map_err(|e| StarlifeError::Io(format!("Cannot read file metadata: {}", e)))?;
    if !metadata.is_file() {
        return Err(StarlifeError::Io(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }
    if metadata.len() > MAX_CATALOG_FILE_SIZE {
        return Err(StarlifeError::Config(format!(
            "Catalog file size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_CATALOG_FILE_SIZE
        )));
    }

    let text = std::fs::read_to_string(&canonical)
        .map_err(|e| StarlifeError::Io(format!("Read catalog: {}", e)))?;

    let catalog = parse_catalog(&text)?;
    tracing::info!(
        "Loaded {} reference stars from {}",
        catalog.len(),
        canonical.display()
    );
    Ok(catalog)
}

/// The catalog to use: a loaded file if one is configured, else the built-in.
pub fn catalog_from(flag: Option<&Path>) -> Result<Catalog, StarlifeError> {
    match resolve_catalog_path(flag) {
        Some(path) => load_catalog(&path),
        None => {
            tracing::debug!("Using built-in reference catalog");
            Ok(Catalog::builtin().clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_STARS: &str = r#"
[[star]]
name = "Sun"
mass = 1.0
metallicity = 0.02
temperature = 5778.0
luminosity = 1.0
radius = 1.0
age = 4.6e9
type = "G-type main sequence"
description = "Our home star"

[[star]]
name = "Tau Ceti"
mass = 0.78
metallicity = 0.006
temperature = 5344.0
luminosity = 0.52
radius = 0.79
age = 5.8e9
type = "G-type main sequence"
description = "Nearby solar analog"
"#;

    #[test]
    fn parses_star_tables_in_order() {
        let catalog = parse_catalog(TWO_STARS).expect("parse");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.stars()[1].name, "Tau Ceti");
        assert_eq!(catalog.stars()[1].kind, "G-type main sequence");
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(parse_catalog(""), Err(StarlifeError::Catalog(_))));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            parse_catalog("[[star]]\nname = "),
            Err(StarlifeError::Config(_))
        ));
    }

    #[test]
    fn rejects_missing_fields() {
        let text = "[[star]]\nname = \"Vega\"\nmass = 2.1\n";
        assert!(matches!(parse_catalog(text), Err(StarlifeError::Config(_))));
    }

    #[test]
    fn rejects_invalid_values() {
        let text = TWO_STARS.replace("luminosity = 0.52", "luminosity = -0.52");
        assert!(matches!(parse_catalog(&text), Err(StarlifeError::Catalog(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(TWO_STARS.as_bytes()).expect("write");

        let catalog = load_catalog(file.path()).expect("load");
        assert!(catalog.get("Sun").is_some());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = load_catalog(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(StarlifeError::Io(_))));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(load_catalog(dir.path()), Err(StarlifeError::Io(_))));
    }

    #[test]
    fn flag_wins_over_environment() {
        let path = Path::new("/tmp/explicit.toml");
        assert_eq!(resolve_catalog_path(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn explicit_file_replaces_builtin() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(TWO_STARS.as_bytes()).expect("write");

        let catalog = catalog_from(Some(file.path())).expect("catalog");
        assert_eq!(catalog.len(), 2);
    }
}
