//! Strategy pattern: a report delegates its layout to a swappable formatter.

use crate::config::DemoConfig;
use crate::error::PatternResult;

pub trait Formatter {
    fn name(&self) -> &str;
    fn format(&self, lines: &[String]) -> String;
}

pub struct PlainTextFormatter;

impl Formatter for PlainTextFormatter {
    fn name(&self) -> &str {
        "plain text"
    }

    fn format(&self, lines: &[String]) -> String {
        lines.join("\n")
    }
}

pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn format(&self, lines: &[String]) -> String {
        let mut html = String::from("<html><head></head><body>");
        for line in lines {
            html.push_str(&format!("<p>{}</p>", line));
        }
        html.push_str("</body></html>");
        html
    }
}

/// Any closure over the lines works as a strategy.
pub struct FnFormatter<F>
where
    F: Fn(&[String]) -> String,
{
    name: String,
    format_fn: F,
}

impl<F> FnFormatter<F>
where
    F: Fn(&[String]) -> String,
{
    pub fn new(name: impl Into<String>, format_fn: F) -> Self {
        Self {
            name: name.into(),
            format_fn,
        }
    }
}

impl<F> Formatter for FnFormatter<F>
where
    F: Fn(&[String]) -> String,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self, lines: &[String]) -> String {
        (self.format_fn)(lines)
    }
}

pub struct Report {
    text: Vec<String>,
    formatter: Box<dyn Formatter>,
}

impl Report {
    pub fn new(text: Vec<String>, formatter: Box<dyn Formatter>) -> Self {
        Self { text, formatter }
    }

    pub fn set_formatter(&mut self, formatter: Box<dyn Formatter>) {
        self.formatter = formatter;
    }

    pub fn formatter_name(&self) -> &str {
        self.formatter.name()
    }

    pub fn text(&self) -> &[String] {
        &self.text
    }

    pub fn display(&self) -> String {
        self.formatter.format(&self.text)
    }
}

pub fn demo(config: &DemoConfig) -> PatternResult<Vec<String>> {
    let mut report = Report::new(config.report.lines.clone(), Box::new(PlainTextFormatter));
    let mut lines = vec![format!("[{}]", report.formatter_name())];
    lines.extend(report.display().lines().map(str::to_string));

    report.set_formatter(Box::new(HtmlFormatter));
    lines.push(format!("[{}]", report.formatter_name()));
    lines.push(report.display());
    Ok(lines)
}
