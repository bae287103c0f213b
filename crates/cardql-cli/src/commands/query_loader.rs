use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where the query text comes from: inline `-q` text, a file, or stdin (`-`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
}

/// Query text plus a display name for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedQuery {
    pub text: String,
    /// File path or `<stdin>`; `None` for inline text.
    pub origin: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("query is required: use a positional QUERY_FILE (`-` for stdin) or -q/--query")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File { path: String, source: io::Error },
}

impl QueryInput {
    pub fn new(path: Option<PathBuf>, text: Option<String>) -> Self {
        Self { path, text }
    }

    pub fn load(&self) -> Result<LoadedQuery, LoadError> {
        if let Some(text) = &self.text {
            return Ok(LoadedQuery {
                text: text.clone(),
                origin: None,
            });
        }

        let Some(path) = &self.path else {
            return Err(LoadError::Missing);
        };
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        load_file(path)
    }
}

fn load_stdin() -> Result<LoadedQuery, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(LoadedQuery {
        text: strip_line_ending(buf),
        origin: Some("<stdin>".to_string()),
    })
}

fn load_file(path: &Path) -> Result<LoadedQuery, LoadError> {
    let display = path.to_string_lossy().into_owned();
    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: display.clone(),
        source,
    })?;
    Ok(LoadedQuery {
        text: strip_line_ending(content),
        origin: Some(display),
    })
}

/// Drops trailing line terminators. Newlines are not token separators.
pub(crate) fn strip_line_ending(mut text: String) -> String {
    let trimmed = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(trimmed);
    text
}
