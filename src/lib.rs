//! # Design Patterns Catalog
//!
//! Runnable examples of the classic object-oriented patterns, written with
//! traits and enums instead of class hierarchies.
//!
//! ## Creational
//! - Abstract Factory, Builder, Factory Method, Singleton
//!
//! ## Structural
//! - Adapter, Composite, Decorator, Proxy
//!
//! ## Behavioral
//! - Command (with undo), Interpreter, Iterator, Observer, Strategy, Template Method
//!
//! Run examples with:
//! ```bash
//! cargo run --bin patterns              # all of them
//! cargo run --bin patterns -- command observer
//! cargo run --bin patterns -- --list
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod patterns;

pub use config::DemoConfig;
pub use error::{PatternError, PatternResult};

use patterns::*;
use std::fmt;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    AbstractFactory,
    Adapter,
    Builder,
    Command,
    Composite,
    Decorator,
    FactoryMethod,
    Interpreter,
    Iterator,
    Observer,
    Proxy,
    Singleton,
    Strategy,
    TemplateMethod,
}

impl Pattern {
    pub const ALL: [Pattern; 14] = [
        Pattern::AbstractFactory,
        Pattern::Adapter,
        Pattern::Builder,
        Pattern::Command,
        Pattern::Composite,
        Pattern::Decorator,
        Pattern::FactoryMethod,
        Pattern::Interpreter,
        Pattern::Iterator,
        Pattern::Observer,
        Pattern::Proxy,
        Pattern::Singleton,
        Pattern::Strategy,
        Pattern::TemplateMethod,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::AbstractFactory => "abstract-factory",
            Pattern::Adapter => "adapter",
            Pattern::Builder => "builder",
            Pattern::Command => "command",
            Pattern::Composite => "composite",
            Pattern::Decorator => "decorator",
            Pattern::FactoryMethod => "factory-method",
            Pattern::Interpreter => "interpreter",
            Pattern::Iterator => "iterator",
            Pattern::Observer => "observer",
            Pattern::Proxy => "proxy",
            Pattern::Singleton => "singleton",
            Pattern::Strategy => "strategy",
            Pattern::TemplateMethod => "template-method",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Pattern::AbstractFactory => "families of related parts from one factory",
            Pattern::Adapter => "old interface behind a new one",
            Pattern::Builder => "same construction steps, different products",
            Pattern::Command => "file operations with LIFO undo",
            Pattern::Composite => "directories and files listed uniformly",
            Pattern::Decorator => "HTML tags wrapping each other",
            Pattern::FactoryMethod => "subclass-chosen product creation",
            Pattern::Interpreter => "file search expressions combined with AND",
            Pattern::Iterator => "cursor over blog articles",
            Pattern::Observer => "salary changes pushed to subscribers",
            Pattern::Proxy => "assistant forwarding hard questions",
            Pattern::Singleton => "one process-wide counter",
            Pattern::Strategy => "report with swappable formatter",
            Pattern::TemplateMethod => "fixed report skeleton, custom steps",
        }
    }

    /// Runs the pattern's vignette and returns what it would print.
    pub fn run(self, config: &DemoConfig) -> PatternResult<Vec<String>> {
        info!(pattern = self.name(), "running demo");
        match self {
            Pattern::AbstractFactory => abstract_factory::demo(config),
            Pattern::Adapter => adapter::demo(config),
            Pattern::Builder => builder::demo(config),
            Pattern::Command => command::demo(config),
            Pattern::Composite => composite::demo(config),
            Pattern::Decorator => decorator::demo(config),
            Pattern::FactoryMethod => factory_method::demo(config),
            Pattern::Interpreter => interpreter::demo(config),
            Pattern::Iterator => iterator::demo(config),
            Pattern::Observer => observer::demo(config),
            Pattern::Proxy => proxy::demo(config),
            Pattern::Singleton => singleton::demo(config),
            Pattern::Strategy => strategy::demo(config),
            Pattern::TemplateMethod => template_method::demo(config),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Accepts the kebab-case name in any case; `_` works in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| PatternError::UnknownPattern(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("command", Pattern::Command)]
    #[case("Template-Method", Pattern::TemplateMethod)]
    #[case("abstract_factory", Pattern::AbstractFactory)]
    #[case(" iterator ", Pattern::Iterator)]
    fn test_parse_pattern(#[case] input: &str, #[case] expected: Pattern) {
        assert_eq!(input.parse::<Pattern>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_pattern() {
        let err = "visitor".parse::<Pattern>().unwrap_err();
        assert!(matches!(err, PatternError::UnknownPattern(ref s) if s == "visitor"));
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_names_round_trip_through_display() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.to_string().parse::<Pattern>().unwrap(), pattern);
        }
    }
}
