use std::{
    fs,
    path::{Path, PathBuf},
};

use enclose_core::Config;
use tracing::debug;

use crate::error::Error;

/// Config file picked up from the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "enclose.toml";

/// Load the report configuration.
///
/// An explicit `path` must exist. Without one, `enclose.toml` in the working
/// directory is used if present, and the defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<Config, Error> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(CONFIG_FILE);
            if !default.is_file() {
                debug!("no {CONFIG_FILE} found, using defaults");
                return Ok(Config::default());
            }
            default
        }
    };

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(source) => return Err(Error::Read { path, source }),
    };
    let config: Config =
        toml::from_str(&text).map_err(|source| Error::ConfigSyntax { path: path.clone(), source })?;
    config.validate()?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use enclose_core::MarkerStyle;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_explicit_file() {
        let file = write_config("marker_style = \"numbered\"\ntab_width = 2\n");
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.marker_style, MarkerStyle::Numbered);
        assert_eq!(config.tab_width, 2);
        assert!(config.show_source);
    }

    #[test]
    fn test_load_rejects_out_of_range_values() {
        let file = write_config("tab_width = 0\n");
        let err = load(Some(file.path())).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "{err}");
    }

    #[test]
    fn test_load_reports_syntax_errors_with_path() {
        let file = write_config("tab_width = \n");
        let err = load(Some(file.path())).unwrap_err();
        assert!(matches!(err, Error::ConfigSyntax { .. }));
        assert!(err.to_string().starts_with(&file.path().display().to_string()));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().starts_with(&path.display().to_string()), "{err}");
    }
}
