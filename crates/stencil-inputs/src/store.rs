use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{InputsError, Result};

/// Location of the inputs document relative to a project base path.
pub const INPUTS_FILE: &str = "src/config/inputs.yaml";

/// In-memory view of a project's `inputs.yaml`.
///
/// Edits are buffered in memory and written back by [`save`]; use
/// [`InputsStore::edit`] to run the whole open → edit → save lifecycle in
/// one call:
///
/// ```no_run
/// use stencil_inputs::InputsStore;
///
/// InputsStore::edit(".", |inputs| {
///     inputs.set("topic", "Open Source Artificial Intelligence");
///     Ok(())
/// })?;
/// # Ok::<(), stencil_inputs::InputsError>(())
/// ```
///
/// [`save`]: InputsStore::save
#[derive(Debug)]
pub struct InputsStore {
    path: PathBuf,
    entries: IndexMap<String, String>,
}

impl InputsStore {
    /// Open the inputs document under `base`, creating the file and its
    /// parent directories if they do not exist yet. A missing or empty
    /// document loads as an empty mapping.
    pub fn open(base: impl AsRef<Path>) -> Result<Self> {
        let path = base.as_ref().join(INPUTS_FILE);

        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, "")?;
            info!(?path, "created empty inputs file");
        }

        let raw = fs::read_to_string(&path)?;
        let entries = if raw.trim().is_empty() {
            IndexMap::new()
        } else {
            serde_yaml::from_str::<Option<IndexMap<String, String>>>(&raw)
                .map(Option::unwrap_or_default)
                .map_err(|e| InputsError::Validation {
                    path: path.clone(),
                    message: e.to_string(),
                })?
        };

        debug!(?path, entries = entries.len(), "loaded inputs");
        Ok(Self { path, entries })
    }

    /// Open the store, run `f` against it, and save on scope exit.
    ///
    /// Save runs exactly once per scope, even when `f` returned an error
    /// (there is no rollback). The closure's error takes precedence over
    /// a save failure; a save failure surfaces only when `f` succeeded.
    pub fn edit<T, F>(base: impl AsRef<Path>, f: F) -> Result<T>
    where
        F: FnOnce(&mut InputsStore) -> Result<T>,
    {
        let mut store = Self::open(base)?;
        let outcome = f(&mut store);
        let saved = store.save();
        match outcome {
            Ok(value) => saved.map(|()| value),
            Err(e) => Err(e),
        }
    }

    /// Path of the underlying document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| InputsError::KeyNotFound(key.to_string()))
    }

    /// Insert or overwrite `key` in memory. Nothing is written to disk
    /// until [`save`](InputsStore::save).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The full mapping, in document order.
    pub fn snapshot(&self) -> IndexMap<String, String> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the mapping back to the document path, overwriting it.
    /// Every value is emitted as a folded block scalar; values folded
    /// style cannot represent losslessly fall back to the serializer's
    /// default scalar emission.
    pub fn save(&self) -> Result<()> {
        let mut doc = String::new();
        for (key, value) in &self.entries {
            self.emit_entry(&mut doc, key, value)?;
        }
        fs::write(&self.path, doc)?;
        debug!(path = ?self.path, entries = self.entries.len(), "saved inputs");
        Ok(())
    }

    fn emit_entry(&self, out: &mut String, key: &str, value: &str) -> Result<()> {
        let rendered_key = self.yaml_scalar(key)?;
        if !rendered_key.contains('\n') && foldable(value) {
            out.push_str(&rendered_key);
            out.push_str(": ");
            push_folded(out, value);
        } else {
            // Let serde_yaml pick the representation for the whole pair.
            let mut pair = IndexMap::new();
            pair.insert(key, value);
            let rendered =
                serde_yaml::to_string(&pair).map_err(|e| InputsError::Serialize {
                    path: self.path.clone(),
                    message: e.to_string(),
                })?;
            out.push_str(&rendered);
        }
        Ok(())
    }

    /// Render a bare scalar, applying the library's quoting rules.
    fn yaml_scalar(&self, s: &str) -> Result<String> {
        let rendered = serde_yaml::to_string(s).map_err(|e| InputsError::Serialize {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(rendered.trim_end_matches('\n').to_string())
    }
}

/// Open the inputs document under `base` and return its full mapping,
/// discarding any pending write. For read-only callers that don't need
/// the scoped-edit contract.
pub fn read_all(base: impl AsRef<Path>) -> Result<IndexMap<String, String>> {
    Ok(InputsStore::open(base)?.entries)
}

/// Whether folding reads back to exactly the same string. Leading or
/// trailing breaks interact with chomping, and a line with leading
/// whitespace becomes a more-indented literal line.
fn foldable(value: &str) -> bool {
    if value.is_empty() || value.starts_with('\n') || value.ends_with('\n') {
        return false;
    }
    if value.chars().any(|c| c.is_control() && c != '\n') {
        return false;
    }
    value.split('\n').all(|line| {
        line.is_empty()
            || (!line.starts_with(' ')
                && !line.starts_with('\t')
                && !line.ends_with(' ')
                && !line.ends_with('\t'))
    })
}

/// Emit `value` as a `>-` folded block scalar at indent 2. Folding joins
/// adjacent lines with a space, so each embedded newline becomes one
/// blank line.
fn push_folded(out: &mut String, value: &str) {
    out.push_str(">-\n");
    let mut first = true;
    for part in value.split('\n') {
        if first {
            first = false;
        } else {
            out.push('\n');
        }
        if !part.is_empty() {
            out.push_str("  ");
            out.push_str(part);
            out.push('\n');
        }
    }
}
