//! Compilation-database input handling.
//!
//! The positional CLI argument is either a lone source file or a JSON
//! compilation database (`compile_commands.json`); in the latter case every
//! entry's `file` field is parsed, first occurrence wins on duplicates.
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ExplorerError;

/// One entry of a `compile_commands.json` database. Only `file` (resolved
/// against `directory` when relative) drives parsing; the recorded compiler
/// command line is ignored in favor of the explorer's own clang arguments.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileCommand {
    pub file: String,
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub arguments: Option<Vec<String>>,
}

impl CompileCommand {
    fn source_path(&self) -> PathBuf {
        let file = Path::new(&self.file);
        match (&self.directory, file.is_relative()) {
            (Some(dir), true) => Path::new(dir).join(file),
            _ => file.to_path_buf(),
        }
    }
}

/// Resolve the input argument into the ordered, deduplicated list of source
/// files to parse.
pub fn load(input: &Path) -> Result<Vec<PathBuf>, ExplorerError> {
    let commands: Vec<CompileCommand> =
        if input.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")) {
            let data = std::fs::read_to_string(input)?;
            serde_json::from_str(&data).map_err(|source| ExplorerError::CompileDb {
                file: input.to_path_buf(),
                source,
            })?
        } else {
            vec![CompileCommand {
                file: input.to_string_lossy().into_owned(),
                directory: None,
                command: None,
                arguments: None,
            }]
        };

    let mut seen: Vec<PathBuf> = Vec::with_capacity(commands.len());
    for cmd in &commands {
        let path = cmd.source_path();
        if !seen.contains(&path) {
            seen.push(path);
        }
    }
    Ok(seen)
}
