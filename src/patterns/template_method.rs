//! Template Method pattern: the report skeleton is fixed, the steps are not.

use crate::config::DemoConfig;
use crate::error::PatternResult;

pub trait ReportTemplate {
    fn text(&self) -> &[String];

    fn line(&self, text: &str) -> String;

    fn start(&self) -> Option<String> {
        None
    }

    fn end(&self) -> Option<String> {
        None
    }

    /// start, one rendered line per entry, end. Implementors supply the steps.
    fn display(&self) -> Vec<String> {
        let mut out: Vec<String> = self.start().into_iter().collect();
        out.extend(self.text().iter().map(|t| self.line(t)));
        out.extend(self.end());
        out
    }
}

pub struct HtmlReport {
    text: Vec<String>,
}

impl HtmlReport {
    pub fn new(text: Vec<String>) -> Self {
        Self { text }
    }
}

impl ReportTemplate for HtmlReport {
    fn text(&self) -> &[String] {
        &self.text
    }

    fn start(&self) -> Option<String> {
        Some("<html><head></head><body><h1>HTML Report</h1>".to_string())
    }

    fn line(&self, text: &str) -> String {
        format!("<p>{}</p>", text)
    }

    fn end(&self) -> Option<String> {
        Some("</body></html>".to_string())
    }
}

pub struct PlainTextReport {
    text: Vec<String>,
}

impl PlainTextReport {
    pub fn new(text: Vec<String>) -> Self {
        Self { text }
    }
}

impl ReportTemplate for PlainTextReport {
    fn text(&self) -> &[String] {
        &self.text
    }

    fn start(&self) -> Option<String> {
        Some("*** PlainText Report ***".to_string())
    }

    fn line(&self, text: &str) -> String {
        text.to_string()
    }
}

pub fn demo(config: &DemoConfig) -> PatternResult<Vec<String>> {
    let text = &config.report.lines;
    let reports: [Box<dyn ReportTemplate>; 2] = [
        Box::new(HtmlReport::new(text.clone())),
        Box::new(PlainTextReport::new(text.clone())),
    ];
    Ok(reports.iter().flat_map(|r| r.display()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text() -> Vec<String> {
        vec!["foo".into(), "bar".into(), "baz".into()]
    }

    #[test]
    fn test_html_report() {
        assert_eq!(
            HtmlReport::new(text()).display(),
            vec![
                "<html><head></head><body><h1>HTML Report</h1>",
                "<p>foo</p>",
                "<p>bar</p>",
                "<p>baz</p>",
                "</body></html>",
            ]
        );
    }

    #[test]
    fn test_plain_text_report_has_no_footer() {
        assert_eq!(
            PlainTextReport::new(text()).display(),
            vec!["*** PlainText Report ***", "foo", "bar", "baz"]
        );
    }

    #[test]
    fn test_same_text_different_output() {
        let html = HtmlReport::new(text());
        let plain = PlainTextReport::new(text());
        assert_ne!(html.display(), plain.display());
        assert_eq!(html.display(), html.display());
        assert_eq!(html.text(), plain.text());
    }

    #[test]
    fn test_bare_template_uses_default_hooks() {
        struct Bullets(Vec<String>);
        impl ReportTemplate for Bullets {
            fn text(&self) -> &[String] {
                &self.0
            }
            fn line(&self, text: &str) -> String {
                format!("- {}", text)
            }
        }

        assert_eq!(Bullets(text()).display(), vec!["- foo", "- bar", "- baz"]);
    }
}
