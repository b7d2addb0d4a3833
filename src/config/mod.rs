// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ast::{Document, Value};
use crate::TomeError;

mod access;
mod conversion;

/// A parsed TOME file with dotted-path, typed access to its values.
#[derive(Debug, Clone)]
pub struct TomeConfig {
    document: Document,
    source: Option<PathBuf>,
}

impl TomeConfig {
    /// Load and parse a file. A leading `~/` is expanded to the home
    /// directory. The file must be valid UTF-8.
    ///
    /// # Example
    /// ```no_run
    /// # use tome_cfg::TomeConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = TomeConfig::from_file("~/.config/app/settings.toml")?;
    /// let port: u16 = config.get("server.port")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TomeError> {
        let path = resolve_path(path.as_ref())?;
        debug!(path = %path.display(), "loading config file");

        let bytes = fs::read(&path).map_err(|e| TomeError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        let text = decode(bytes, &path.to_string_lossy())?;
        let document = crate::parse_document(&text)?;

        Ok(Self {
            document,
            source: Some(path),
        })
    }

    /// Parse raw bytes, rejecting anything that is not valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TomeError> {
        let text = decode(bytes.to_vec(), "<bytes>")?;
        Self::from_str(&text)
    }

    /// Parse a config from a string (no file I/O).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, TomeError> {
        Ok(Self {
            document: crate::parse_document(content)?,
            source: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// File the config was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Expand "~/" to the home directory.
fn resolve_path(raw: &Path) -> Result<PathBuf, TomeError> {
    match raw.to_str().and_then(|s| s.strip_prefix("~/")) {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| TomeError::FileError {
                message: "Could not determine home directory for ~ expansion".into(),
                path: raw.to_string_lossy().to_string(),
                hint: Some("Set HOME or use an absolute path".into()),
                code: Some(300),
            })?;
            Ok(home.join(rest))
        }
        None => Ok(raw.to_path_buf()),
    }
}

fn decode(bytes: Vec<u8>, origin: &str) -> Result<String, TomeError> {
    String::from_utf8(bytes).map_err(|e| {
        let offset = e.utf8_error().valid_up_to();
        TomeError::EncodingError {
            message: "Input contains invalid UTF-8 byte sequence".into(),
            path: origin.to_string(),
            offset,
            hint: Some("Save the file as UTF-8".into()),
            code: Some(302),
        }
    })
}
