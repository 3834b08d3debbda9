//! Adapter pattern: reuse an old printer behind the interface new code expects.

use crate::config::DemoConfig;
use crate::error::PatternResult;

// Target interface the client is written against
pub trait BracketPrinter {
    fn with_bracket(&self) -> String;
}

/// Client
pub struct NewPrinter<P: BracketPrinter> {
    printer: P,
}

impl<P: BracketPrinter> NewPrinter<P> {
    pub fn new(printer: P) -> Self {
        Self { printer }
    }

    pub fn with_bracket(&self) -> String {
        self.printer.with_bracket()
    }
}

// Existing code with a different interface
pub struct OldPrinter {
    text: String,
}

impl OldPrinter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn add_bracket_to_string(&self) -> String {
        format!("[{}]", self.text)
    }
}

pub struct PrinterAdapter {
    old_printer: OldPrinter,
}

impl PrinterAdapter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            old_printer: OldPrinter::new(text),
        }
    }
}

impl BracketPrinter for PrinterAdapter {
    fn with_bracket(&self) -> String {
        self.old_printer.add_bracket_to_string()
    }
}

pub fn demo(config: &DemoConfig) -> PatternResult<Vec<String>> {
    let printer = NewPrinter::new(PrinterAdapter::new(config.adapter.text.as_str()));
    Ok(vec![printer.with_bracket()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_delegates_to_old_printer() {
        let printer = NewPrinter::new(PrinterAdapter::new("foo"));
        assert_eq!(printer.with_bracket(), "[foo]");
    }

    #[test]
    fn test_client_accepts_any_target() {
        struct Angle;
        impl BracketPrinter for Angle {
            fn with_bracket(&self) -> String {
                "<x>".to_string()
            }
        }
        assert_eq!(NewPrinter::new(Angle).with_bracket(), "<x>");
    }
}
