//! Editing a project's `package.json`.
//!
//! Key order is preserved on round trip, so a rewrite only shows the
//! intended changes in a diff.

use crate::assets::ModuleFlavor;
use crate::error::{Error, Result};
use crate::types::MANIFEST_FILE;
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};
use tracing::debug;

/// File receiving config sections moved out of `package.json`
pub const BACKUP_FILE: &str = "p8-package-backup.json";

/// Inline tool configs superseded by standalone config files
pub const CONFIG_SECTIONS: [&str; 3] = ["eslintConfig", "prettier", "commitlint"];

/// A loaded `package.json`
#[derive(Debug, Clone, PartialEq)]
pub struct PackageJson {
    path: Utf8PathBuf,
    data: Map<String, Value>,
}

impl PackageJson {
    /// Load `package.json` from `dir`
    pub fn load(dir: &Utf8Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::manifest_not_found(path.as_str()));
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(path, &text)
    }

    /// Parse manifest text that was read from `path`
    pub fn parse(path: impl Into<Utf8PathBuf>, text: &str) -> Result<Self> {
        let path = path.into();
        let value: Value = serde_json::from_str(text)
            .map_err(|e| Error::invalid_manifest(path.as_str(), e.to_string()))?;

        match value {
            Value::Object(data) => Ok(Self { path, data }),
            other => Err(Error::invalid_manifest(
                path.as_str(),
                format!("expected a JSON object, found {}", json_kind(&other)),
            )),
        }
    }

    /// Where this manifest is written back to
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Directory holding the manifest
    pub fn dir(&self) -> &Utf8Path {
        self.path.parent().unwrap_or(&self.path)
    }

    /// Module flavor declared by the `type` field
    pub fn module_flavor(&self) -> ModuleFlavor {
        match self.data.get("type").and_then(Value::as_str) {
            Some("module") => ModuleFlavor::Mjs,
            _ => ModuleFlavor::Cjs,
        }
    }

    /// Value of a script, if defined
    pub fn script(&self, name: &str) -> Option<&str> {
        self.data
            .get("scripts")
            .and_then(Value::as_object)
            .and_then(|scripts| scripts.get(name))
            .and_then(Value::as_str)
    }

    /// Add or replace a script, creating `scripts` when absent
    pub fn set_script(&mut self, name: &str, command: impl Into<String>) -> Result<()> {
        let scripts = self
            .data
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));

        if scripts.is_null() {
            *scripts = Value::Object(Map::new());
        }

        match scripts {
            Value::Object(scripts) => {
                scripts.insert(name.to_string(), Value::String(command.into()));
                Ok(())
            }
            other => Err(Error::invalid_manifest(
                self.path.as_str(),
                format!("\"scripts\" must be an object, found {}", json_kind(other)),
            )),
        }
    }

    /// Whether a top-level field is present
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Remove the inline tool configs listed in [`CONFIG_SECTIONS`]
    ///
    /// Only sections with a truthy value are moved; the removed sections are
    /// returned in [`CONFIG_SECTIONS`] order.
    pub fn take_config_sections(&mut self) -> Map<String, Value> {
        let mut taken = Map::new();
        for section in CONFIG_SECTIONS {
            if self.data.get(section).is_some_and(is_truthy) {
                if let Some(value) = self.data.remove(section) {
                    taken.insert(section.to_string(), value);
                }
            }
        }
        taken
    }

    /// Serialize as two-space indented JSON with a trailing newline
    pub fn to_pretty_string(&self) -> Result<String> {
        to_pretty_json(&self.data)
    }

    /// Write the manifest back to [`PackageJson::path`]
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, self.to_pretty_string()?)?;
        debug!("Wrote {}", self.path);
        Ok(())
    }
}

/// Write moved config sections to [`BACKUP_FILE`] in `dir`
pub fn write_backup(dir: &Utf8Path, sections: &Map<String, Value>) -> Result<Utf8PathBuf> {
    let path = dir.join(BACKUP_FILE);
    std::fs::write(&path, to_pretty_json(sections)?)?;
    debug!("Wrote {}", path);
    Ok(path)
}

fn to_pretty_json(map: &Map<String, Value>) -> Result<String> {
    let mut text = serde_json::to_string_pretty(map)?;
    text.push('\n');
    Ok(text)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
