//! Key provisioning: ordered lookup of the encryption key.
//!
//! Resolution order is explicit override, then environment variable, then
//! key file; the first non-blank source wins and is base64-decoded. A wrong
//! length or invalid encoding means "no key available" (the caller degrades
//! to encryption-unavailable), never a startup failure — this module warns
//! and returns `None` instead of erroring.

use std::path::{Path, PathBuf};

use crate::crypto::{SymmetricKey, KEY_LEN};

/// Environment variable consulted when no explicit key is provided.
pub const KEY_ENV_VAR: &str = "MASKING_SECURITY_KEY";

/// Default key file path, relative to the working directory.
pub const DEFAULT_KEY_FILE: &str = "masking.key";

/// Ordered key lookup: explicit override → environment → file.
///
/// The file source reads the first non-blank line as the base64 key.
#[derive(Clone, Debug)]
pub struct KeyLoader {
    explicit: Option<String>,
    env_var: String,
    key_file: Option<PathBuf>,
}

impl Default for KeyLoader {
    fn default() -> Self {
        Self {
            explicit: None,
            env_var: KEY_ENV_VAR.to_owned(),
            key_file: Some(PathBuf::from(DEFAULT_KEY_FILE)),
        }
    }
}

impl KeyLoader {
    /// Creates a loader with the default environment variable and key file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit base64 key that takes precedence over all sources.
    #[must_use]
    pub fn with_explicit(mut self, key: impl Into<String>) -> Self {
        self.explicit = Some(key.into());
        self
    }

    /// Overrides the environment variable name to consult.
    #[must_use]
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// Overrides the key file path.
    #[must_use]
    pub fn with_key_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.key_file = Some(path.into());
        self
    }

    /// Disables the file source entirely.
    #[must_use]
    pub fn without_key_file(mut self) -> Self {
        self.key_file = None;
        self
    }

    /// Resolves the key, returning `None` when no usable key is found.
    #[must_use]
    pub fn load(&self) -> Option<SymmetricKey> {
        let candidate = self.first_non_blank()?;
        decode_key(&candidate)
    }

    fn first_non_blank(&self) -> Option<String> {
        if let Some(explicit) = non_blank(self.explicit.as_deref()) {
            return Some(explicit);
        }
        if let Some(from_env) = non_blank(std::env::var(&self.env_var).ok().as_deref()) {
            return Some(from_env);
        }
        self.key_file.as_deref().and_then(read_key_file)
    }
}

/// Resolves the key using the default sources.
#[must_use]
pub fn load_key() -> Option<SymmetricKey> {
    KeyLoader::default().load()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_owned)
}

fn read_key_file(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_owned),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "could not read key file");
            None
        }
    }
}

fn decode_key(encoded: &str) -> Option<SymmetricKey> {
    let key = SymmetricKey::from_base64(encoded);
    if key.is_none() {
        tracing::warn!(
            expected_bytes = KEY_LEN,
            "security key is not a valid base64-encoded {KEY_LEN}-byte key"
        );
    }
    key
}
