//! Composite pattern: directories and files answer `list` the same way.

use crate::config::DemoConfig;
use crate::error::{PatternError, PatternResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File { name: String },
    Directory { name: String, children: Vec<Entry> },
}

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Entry::File { name: name.into() }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Entry::Directory {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::File { name } | Entry::Directory { name, .. } => name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory { .. })
    }

    /// Appends a child. Files are leaves and reject children.
    pub fn add(&mut self, entry: Entry) -> PatternResult<()> {
        match self {
            Entry::Directory { children, .. } => {
                children.push(entry);
                Ok(())
            }
            Entry::File { name } => Err(PatternError::NotADirectory(name.clone())),
        }
    }

    /// Full paths of this entry and everything below it, depth-first, pre-order.
    pub fn list(&self, prefix: &str) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect(prefix, &mut paths);
        paths
    }

    fn collect(&self, prefix: &str, paths: &mut Vec<String>) {
        let path = format!("{}/{}", prefix, self.name());
        paths.push(path.clone());
        if let Entry::Directory { children, .. } = self {
            for child in children {
                child.collect(&path, paths);
            }
        }
    }
}

pub fn demo(_config: &DemoConfig) -> PatternResult<Vec<String>> {
    let mut tmp = Entry::directory("tmp");
    tmp.add(Entry::file("test_1.txt"))?;
    tmp.add(Entry::file("test_2.txt"))?;
    tmp.add(Entry::file("test_3.txt"))?;

    let mut root = Entry::directory("root");
    root.add(tmp)?;

    Ok(root.list(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entry {
        let mut tmp = Entry::directory("tmp");
        for name in ["a", "b", "c"] {
            tmp.add(Entry::file(name)).unwrap();
        }
        let mut root = Entry::directory("root");
        root.add(tmp).unwrap();
        root
    }

    #[test]
    fn test_list_is_preorder() {
        assert_eq!(
            sample().list(""),
            vec!["/root", "/root/tmp", "/root/tmp/a", "/root/tmp/b", "/root/tmp/c"]
        );
    }

    #[test]
    fn test_list_with_prefix() {
        let file = Entry::file("notes.txt");
        assert_eq!(file.list("/home"), vec!["/home/notes.txt"]);
    }

    #[test]
    fn test_siblings_keep_insertion_order() {
        let mut root = Entry::directory("r");
        let mut left = Entry::directory("left");
        left.add(Entry::file("x")).unwrap();
        root.add(Entry::file("first")).unwrap();
        root.add(left).unwrap();
        root.add(Entry::file("last")).unwrap();

        assert_eq!(
            root.list(""),
            vec!["/r", "/r/first", "/r/left", "/r/left/x", "/r/last"]
        );
    }

    #[test]
    fn test_file_rejects_children() {
        let mut file = Entry::file("leaf");
        let err = file.add(Entry::file("child")).unwrap_err();
        assert!(matches!(err, PatternError::NotADirectory(ref n) if n == "leaf"));
        assert!(!file.is_directory());
    }

    #[test]
    fn test_empty_directory_lists_itself() {
        assert_eq!(Entry::directory("empty").list(""), vec!["/empty"]);
    }
}
