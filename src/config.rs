//! Demo settings.
//!
//! Every value defaults to what the vignettes use out of the box, so a config
//! file only needs the keys it wants to change:
//!
//! ```toml
//! [command]
//! workdir = "/tmp/scratch"
//!
//! [observer]
//! employee = "Hanako"
//! salaries = [300, 400]
//! ```

use crate::error::{PatternError, PatternResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub command: CommandConfig,
    pub interpreter: InterpreterConfig,
    pub observer: ObserverConfig,
    pub report: ReportConfig,
    pub decorator: DecoratorConfig,
    pub adapter: AdapterConfig,
    pub iterator: IteratorConfig,
}

/// Files touched by the command demo, relative to `workdir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandConfig {
    pub workdir: PathBuf,
    pub source: String,
    pub target: String,
    pub text: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            workdir: PathBuf::from("."),
            source: "file_1.txt".to_string(),
            target: "file_2.txt".to_string(),
            text: "Hello World!".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpreterConfig {
    pub root: PathBuf,
    pub file_name: String,
    pub permission: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            file_name: "*.rs".to_string(),
            permission: "w".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverConfig {
    pub employee: String,
    pub salaries: Vec<u64>,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            employee: "Taro".to_string(),
            salaries: vec![5_000, 10_000],
        }
    }
}

/// Lines fed to both report patterns (strategy and template method).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub lines: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            lines: vec!["foo".into(), "bar".into(), "baz".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoratorConfig {
    pub text: String,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            text: "foo".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterConfig {
    pub text: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            text: "foo".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IteratorConfig {
    pub titles: Vec<String>,
}

impl Default for IteratorConfig {
    fn default() -> Self {
        Self {
            titles: vec!["test 1".into(), "test 2".into(), "test 3".into()],
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> PatternResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| PatternError::from_fs("read config", path, e))?;
        Self::parse(&text, path)
    }

    pub fn from_toml_str(text: &str) -> PatternResult<Self> {
        Self::parse(text, Path::new("<inline>"))
    }

    fn parse(text: &str, path: &Path) -> PatternResult<Self> {
        let config: Self = toml::from_str(text).map_err(|source| PatternError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded demo config");
        Ok(config)
    }
}
