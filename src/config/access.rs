use super::*;

impl TomeConfig {
    /// Get a typed value from the configuration using dot notation.
    ///
    /// # Examples
    /// ```no_run
    /// # use tome_cfg::TomeConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = TomeConfig::from_file("config.toml")?;
    /// let host: String = config.get("database.server")?;
    /// let ports: Vec<u16> = config.get("database.ports")?;
    /// let enabled: bool = config.get("database.enabled")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, TomeError>
    where
        T: TryFrom<Value, Error = TomeError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| with_path(e, path))
    }

    /// Get an optional typed value - returns `None` if key doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, TomeError>
    where
        T: TryFrom<Value, Error = TomeError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(TomeError::MissingPath { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// ```no_run
    /// # use tome_cfg::TomeConfig;
    /// # let config = TomeConfig::from_file("config.toml").unwrap();
    /// let max = config.get_or("database.connection_max", 100i64);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = TomeError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value`. The empty path is the whole document.
    pub fn get_value(&self, path: &str) -> Result<Value, TomeError> {
        if path.trim().is_empty() {
            return Ok(Value::Table(self.document.clone()));
        }
        self.find(path)
            .cloned()
            .ok_or_else(|| TomeError::MissingPath {
                path: path.to_string(),
                hint: Some("Check that the path exists in your config file".into()),
                code: Some(304),
            })
    }

    /// Keys of the table at `path`, in source order.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, TomeError> {
        if path.trim().is_empty() {
            return Ok(self.document.keys().cloned().collect());
        }
        match self.find(path) {
            Some(Value::Table(table)) => Ok(table.keys().cloned().collect()),
            Some(other) => Err(TomeError::TypeError {
                message: format!("Path '{}' is a {}, not a table", path, other.type_name()),
                hint: Some("Only tables have keys".into()),
                code: Some(306),
            }),
            None => Err(TomeError::MissingPath {
                path: path.to_string(),
                hint: None,
                code: Some(304),
            }),
        }
    }

    /// Check if a configuration path exists.
    pub fn has(&self, path: &str) -> bool {
        path.trim().is_empty() || self.find(path).is_some()
    }

    fn find(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = self.document.get(segments.next()?)?;
        segments.try_fold(first, |current, segment| current.as_table()?.get(segment))
    }
}

fn with_path(e: TomeError, path: &str) -> TomeError {
    match e {
        TomeError::TypeError { message, hint, code } => TomeError::TypeError {
            message: format!("{} at `{}`", message, path),
            hint,
            code,
        },
        other => other,
    }
}
