//! Input and output plumbing shared by the commands.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Sink {
    pub fn is_stdout(&self) -> bool {
        matches!(self, Sink::Stdout)
    }

    /// Write `content` to the sink, creating missing parent directories.
    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            Sink::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(content.as_bytes())
                    .and_then(|()| stdout.flush())
                    .context("failed to write to stdout")
            }
            Sink::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create directory {}", parent.display()))?;
                }
                fs::write(path, content)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), bytes = content.len(), "wrote output");
                Ok(())
            }
        }
    }
}

/// Source text plus the name used in diagnostics.
#[derive(Debug)]
pub struct Input {
    pub name: String,
    pub text: String,
}

impl Input {
    /// Read `path`, stdin for `-`, or fall back to bundled text.
    pub fn load(path: Option<&Path>, bundled_name: &str, bundled: &str) -> Result<Self> {
        match path {
            None => Ok(Self {
                name: bundled_name.to_string(),
                text: bundled.to_string(),
            }),
            Some(p) if p.as_os_str() == "-" => {
                let text = io::read_to_string(io::stdin()).context("failed to read stdin")?;
                Ok(Self {
                    name: "<stdin>".to_string(),
                    text,
                })
            }
            Some(p) => read_file(p).map(|text| Self {
                name: p.display().to_string(),
                text,
            }),
        }
    }
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
