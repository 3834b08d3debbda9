//! Interpreter pattern: a tiny file search language.
//!
//! Terminals match a file name or a permission; `And` intersects two
//! sub-expressions. Every expression evaluates against a directory tree and
//! yields the matching regular files.

use crate::config::DemoConfig;
use crate::error::{PatternError, PatternResult};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Read,
    Write,
    Execute,
}

impl FromStr for Permission {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" => Ok(Permission::Read),
            "w" => Ok(Permission::Write),
            "x" => Ok(Permission::Execute),
            other => Err(PatternError::InvalidPermission(other.to_string())),
        }
    }
}

impl Permission {
    /// Read and write are checked by opening the file, so the answer reflects
    /// the current user rather than the mode bits alone.
    fn allows(self, path: &Path) -> bool {
        match self {
            Permission::Read => fs::File::open(path).is_ok(),
            Permission::Write => fs::OpenOptions::new().write(true).open(path).is_ok(),
            Permission::Execute => fs::metadata(path).is_ok_and(|m| is_executable(&m)),
        }
    }
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    false
}

// fnmatch semantics: `*` does not match a leading dot
const NAME_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

#[derive(Debug, Clone)]
pub enum Expression {
    FileName(Pattern),
    Permission(Permission),
    And(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn file_name(pattern: &str) -> PatternResult<Self> {
        Pattern::new(pattern)
            .map(Expression::FileName)
            .map_err(|source| PatternError::InvalidGlob {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn permission(flag: &str) -> PatternResult<Self> {
        flag.parse().map(Expression::Permission)
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    /// Regular files below `dir` (sorted by name) that satisfy the expression.
    pub fn evaluate(&self, dir: &Path) -> PatternResult<Vec<PathBuf>> {
        let files: Vec<PathBuf> = regular_files(dir)?
            .into_iter()
            .filter(|path| self.matches(path))
            .collect();
        debug!(expression = ?self, dir = %dir.display(), found = files.len(), "evaluated");
        Ok(files)
    }

    fn matches(&self, path: &Path) -> bool {
        match self {
            Expression::FileName(pattern) => path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches_with(name, NAME_MATCH)),
            Expression::Permission(permission) => permission.allows(path),
            Expression::And(left, right) => left.matches(path) && right.matches(path),
        }
    }
}

fn regular_files(dir: &Path) -> PatternResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            match e.into_io_error() {
                Some(source) => PatternError::from_fs("walk", path, source),
                None => PatternError::io(
                    format!("walk {}", path.display()),
                    std::io::Error::other("filesystem loop"),
                ),
            }
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

pub fn demo(config: &DemoConfig) -> PatternResult<Vec<String>> {
    let settings = &config.interpreter;
    let expression = Expression::and(
        Expression::file_name(&settings.file_name)?,
        Expression::permission(&settings.permission)?,
    );

    let files = expression.evaluate(&settings.root)?;
    let mut lines = vec![format!(
        "{} files matching '{}' with permission '{}' under {}",
        files.len(),
        settings.file_name,
        settings.permission,
        settings.root.display()
    )];
    lines.extend(files.iter().map(|f| f.display().to_string()));
    Ok(lines)
}
