//! Iterator pattern: walking a blog's articles without exposing its storage.

use crate::config::DemoConfig;
use crate::error::PatternResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
}

impl Article {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Blog {
    articles: Vec<Article>,
}

impl Blog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_article(&mut self, article: Article) {
        self.articles.push(article);
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iterator(&self) -> BlogIterator<'_> {
        BlogIterator {
            blog: self,
            index: 0,
        }
    }
}

/// External iterator with one forward cursor.
///
/// The cursor starts on the first article, which `current` returns.
/// `has_next` reports whether `next_article` can still advance; once the
/// cursor sits on the last article it returns false and `next_article`
/// yields `None` instead of running off the end.
pub struct BlogIterator<'a> {
    blog: &'a Blog,
    index: usize,
}

impl<'a> BlogIterator<'a> {
    pub fn current(&self) -> Option<&'a Article> {
        self.blog.articles.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.blog.articles.len()
    }

    pub fn next_article(&mut self) -> Option<&'a Article> {
        if !self.has_next() {
            return None;
        }
        self.index += 1;
        self.current()
    }
}

// Internal iteration for everything else
impl<'a> IntoIterator for &'a Blog {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.articles.iter()
    }
}

pub fn demo(config: &DemoConfig) -> PatternResult<Vec<String>> {
    let mut blog = Blog::new();
    for title in &config.iterator.titles {
        blog.add_article(Article::new(title.as_str()));
    }

    let mut lines = Vec::new();
    let mut iterator = blog.iterator();
    if let Some(first) = iterator.current() {
        lines.push(first.title.clone());
    }
    while iterator.has_next() {
        if let Some(article) = iterator.next_article() {
            lines.push(article.title.clone());
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(titles: &[&str]) -> Blog {
        let mut blog = Blog::new();
        for title in titles {
            blog.add_article(Article::new(*title));
        }
        blog
    }

    #[test]
    fn test_has_next_boundary() {
        let blog = blog(&["test 1", "test 2", "test 3"]);
        let mut it = blog.iterator();

        assert_eq!(it.current().unwrap().title, "test 1");
        assert!(it.has_next());
        assert_eq!(it.next_article().unwrap().title, "test 2");
        assert!(it.has_next());
        assert_eq!(it.next_article().unwrap().title, "test 3");
        assert!(!it.has_next());
        assert_eq!(it.next_article(), None);
        assert_eq!(it.current().unwrap().title, "test 3");
    }

    #[test]
    fn test_empty_blog() {
        let blog = Blog::new();
        let mut it = blog.iterator();
        assert!(blog.is_empty());
        assert_eq!(it.current(), None);
        assert!(!it.has_next());
        assert_eq!(it.next_article(), None);
    }

    #[test]
    fn test_single_article() {
        let blog = blog(&["only"]);
        let it = blog.iterator();
        assert_eq!(it.current().unwrap().title, "only");
        assert!(!it.has_next());
    }

    #[test]
    fn test_for_loop_visits_all() {
        let blog = blog(&["a", "b", "c"]);
        let titles: Vec<&str> = (&blog).into_iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert_eq!(blog.len(), 3);
    }

    #[test]
    fn test_demo_does_not_skip_first() {
        let lines = demo(&DemoConfig::default()).unwrap();
        assert_eq!(lines, vec!["test 1", "test 2", "test 3"]);
    }
}
