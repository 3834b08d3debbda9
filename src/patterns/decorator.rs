//! Decorator pattern: HTML tags wrapping one another.
//!
//! A base tag collects the decorators appended to it. Rendering starts from the
//! last appended tag, so the base ends up outermost.

use crate::config::DemoConfig;
use crate::error::PatternResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Div,
    Center,
    Strong,
}

impl TagKind {
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Div => "div",
            TagKind::Center => "center",
            TagKind::Strong => "strong",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    kind: TagKind,
    value: String,
    chain: Vec<Tag>,
}

impl Tag {
    pub fn new(kind: TagKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            chain: Vec::new(),
        }
    }

    pub fn div(value: impl Into<String>) -> Self {
        Self::new(TagKind::Div, value)
    }

    pub fn center(value: impl Into<String>) -> Self {
        Self::new(TagKind::Center, value)
    }

    pub fn strong(value: impl Into<String>) -> Self {
        Self::new(TagKind::Strong, value)
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Attaches a decorator. Whatever `tag` had attached itself follows it.
    pub fn append(mut self, mut tag: Tag) -> Self {
        let nested = std::mem::take(&mut tag.chain);
        self.chain.push(tag);
        self.chain.extend(nested);
        self
    }

    fn wrap(&self, inner: &str) -> String {
        // a tag created with its own text keeps it
        let body = if self.value.is_empty() {
            inner
        } else {
            self.value.as_str()
        };
        format!("<{0}>{1}</{0}>", self.kind.name(), body)
    }

    pub fn render(&self) -> String {
        let text = self
            .chain
            .iter()
            .rev()
            .fold(String::new(), |inner, tag| tag.wrap(&inner));
        self.wrap(&text)
    }
}

pub fn demo(config: &DemoConfig) -> PatternResult<Vec<String>> {
    let text = config.decorator.text.as_str();
    let div = Tag::div("")
        .append(Tag::center(""))
        .append(Tag::strong(text));
    let center = Tag::center("").append(Tag::strong(text));
    Ok(vec![div.render(), center.render()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nests_base_outermost() {
        let html = Tag::div("")
            .append(Tag::center(""))
            .append(Tag::strong("foo"))
            .render();
        assert_eq!(html, "<div><center><strong>foo</strong></center></div>");
    }

    #[test]
    fn test_render_two_levels() {
        let html = Tag::center("").append(Tag::strong("bar")).render();
        assert_eq!(html, "<center><strong>bar</strong></center>");
    }

    #[test]
    fn test_single_tag() {
        assert_eq!(Tag::strong("x").render(), "<strong>x</strong>");
        assert_eq!(Tag::div("").render(), "<div></div>");
    }

    #[test]
    fn test_non_empty_value_is_not_overwritten() {
        let html = Tag::div("outer").append(Tag::strong("inner")).render();
        assert_eq!(html, "<div>outer</div>");
    }

    #[test]
    fn test_append_order_matters() {
        let a = Tag::div("").append(Tag::center("")).append(Tag::strong("t"));
        let b = Tag::div("").append(Tag::strong("")).append(Tag::center("t"));
        assert_ne!(a.render(), b.render());
        assert_eq!(b.render(), "<div><strong><center>t</center></strong></div>");
    }

    #[test]
    fn test_appended_chain_is_flattened() {
        let inner = Tag::center("").append(Tag::strong("deep"));
        let html = Tag::div("").append(inner).render();
        assert_eq!(html, "<div><center><strong>deep</strong></center></div>");
    }

    #[test]
    fn test_render_does_not_mutate() {
        let tag = Tag::div("").append(Tag::strong("foo"));
        let first = tag.render();
        assert_eq!(tag.render(), first);
        assert_eq!(tag.value(), "");
        assert_eq!(tag.kind(), TagKind::Div);
    }
}
