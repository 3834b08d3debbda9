//! Command pattern: filesystem operations as undoable objects.
//!
//! Each concrete command keeps whatever it needs to reverse itself. A
//! [`CompositeCommand`] runs its children in insertion order and unwinds them
//! one at a time, last in first out.

use crate::config::DemoConfig;
use crate::error::{PatternError, PatternResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait Command {
    fn execute(&mut self) -> PatternResult<()>;

    /// Reverses the effect of the last `execute`.
    fn undo(&mut self) -> PatternResult<()>;

    fn description(&self) -> String;

    /// Whether the last `undo` left nothing further to reverse. Single
    /// operations are done after one undo; composites once they are empty.
    fn is_exhausted(&self) -> bool {
        true
    }
}

fn remove(path: &Path) -> PatternResult<()> {
    fs::remove_file(path).map_err(|e| PatternError::from_fs("delete", path, e))
}

fn write(path: &Path, text: &str) -> PatternResult<()> {
    fs::write(path, text).map_err(|e| PatternError::from_fs("write", path, e))
}

// ============================================================================
// Concrete commands
// ============================================================================

pub struct CreateFile {
    path: PathBuf,
    text: String,
}

impl CreateFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

impl Command for CreateFile {
    fn execute(&mut self) -> PatternResult<()> {
        write(&self.path, &self.text)
    }

    fn undo(&mut self) -> PatternResult<()> {
        remove(&self.path)
    }

    fn description(&self) -> String {
        format!("Create file {}", self.path.display())
    }
}

pub struct CopyFile {
    source: PathBuf,
    target: PathBuf,
}

impl CopyFile {
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Command for CopyFile {
    fn execute(&mut self) -> PatternResult<()> {
        if !self.source.exists() {
            return Err(PatternError::FileNotFound(self.source.clone()));
        }
        fs::copy(&self.source, &self.target)
            .map(|_| ())
            .map_err(|e| PatternError::from_fs("copy to", &self.target, e))
    }

    fn undo(&mut self) -> PatternResult<()> {
        remove(&self.target)
    }

    fn description(&self) -> String {
        format!(
            "Copy file {} to {}",
            self.source.display(),
            self.target.display()
        )
    }
}

/// Deletes a file, keeping its content so `undo` can write it back.
pub struct DeleteFile {
    path: PathBuf,
    captured: Option<String>,
}

impl DeleteFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            captured: None,
        }
    }
}

impl Command for DeleteFile {
    fn execute(&mut self) -> PatternResult<()> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| PatternError::from_fs("read", &self.path, e))?;
        remove(&self.path)?;
        self.captured = Some(text);
        Ok(())
    }

    fn undo(&mut self) -> PatternResult<()> {
        let text = self
            .captured
            .as_deref()
            .ok_or_else(|| PatternError::MissingUndoState(self.path.clone()))?;
        write(&self.path, text)
    }

    fn description(&self) -> String {
        format!("Delete file {}", self.path.display())
    }
}

// ============================================================================
// Composite command
// ============================================================================

/// An ordered batch of commands that is itself a command.
///
/// `execute` stops at the first failure and leaves earlier effects in place;
/// there is no rollback.
#[derive(Default)]
pub struct CompositeCommand {
    commands: Vec<Box<dyn Command>>,
}

impl CompositeCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Description of the command the next `undo` would reverse.
    pub fn peek(&self) -> Option<String> {
        self.commands.last().map(|cmd| cmd.description())
    }
}

impl Command for CompositeCommand {
    fn execute(&mut self) -> PatternResult<()> {
        for command in self.commands.iter_mut() {
            debug!(command = %command.description(), "execute");
            command.execute()?;
        }
        Ok(())
    }

    /// Undoes the most recent command and drops it once it has nothing left
    /// to reverse. A nested composite is unwound one step per call; a command
    /// whose undo fails stays on the stack.
    fn undo(&mut self) -> PatternResult<()> {
        let command = self
            .commands
            .last_mut()
            .ok_or(PatternError::NothingToUndo)?;
        debug!(command = %command.description(), "undo");
        command.undo()?;
        if command.is_exhausted() {
            self.commands.pop();
        }
        Ok(())
    }

    fn is_exhausted(&self) -> bool {
        self.is_empty()
    }

    fn description(&self) -> String {
        format!("Composite of {} commands", self.commands.len())
    }
}

fn present_files(paths: &[&Path]) -> String {
    let present: Vec<String> = paths
        .iter()
        .filter(|p| p.exists())
        .filter_map(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    if present.is_empty() {
        "(none)".to_string()
    } else {
        present.join(", ")
    }
}

pub fn demo(config: &DemoConfig) -> PatternResult<Vec<String>> {
    let settings = &config.command;
    let source = settings.workdir.join(&settings.source);
    let target = settings.workdir.join(&settings.target);
    let tracked = [source.as_path(), target.as_path()];

    let mut commands = CompositeCommand::new();
    commands.add(Box::new(CreateFile::new(&source, settings.text.as_str())));
    commands.add(Box::new(CopyFile::new(&source, &target)));
    commands.add(Box::new(DeleteFile::new(&source)));

    let mut lines = Vec::new();
    commands.execute()?;
    lines.push(format!("execute -> files: {}", present_files(&tracked)));

    while let Some(description) = commands.peek() {
        commands.undo()?;
        lines.push(format!(
            "undo '{}' -> files: {}",
            description,
            present_files(&tracked)
        ));
    }
    Ok(lines)
}
