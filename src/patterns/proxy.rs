//! Proxy pattern: an assistant fields questions and only bothers the
//! professor with the hard ones.

use crate::config::DemoConfig;
use crate::error::PatternResult;
use std::cell::{Cell, OnceCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    Easy,
    Difficult,
}

/// Any teacher can answer the easy question; on its own a teacher has no
/// answer to the difficult one.
pub trait Teacher {
    fn ask(&self, question: Question) -> String {
        match question {
            Question::Easy => easy_answer(),
            Question::Difficult => "I don't know".to_string(),
        }
    }
}

fn easy_answer() -> String {
    "The answer is A".to_string()
}

/// A teacher with nothing but the default answers.
#[derive(Debug, Default)]
pub struct JuniorTeacher;

impl Teacher for JuniorTeacher {}

#[derive(Debug, Default)]
pub struct Professor;

impl Teacher for Professor {
    fn ask(&self, question: Question) -> String {
        match question {
            Question::Easy => easy_answer(),
            Question::Difficult => "The answer is B".to_string(),
        }
    }
}

/// Stands in for the professor. The professor is only brought in on the first
/// difficult question.
#[derive(Debug, Default)]
pub struct AssistantTeacher {
    professor: OnceCell<Professor>,
    delegated: Cell<usize>,
}

impl AssistantTeacher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delegated(&self) -> usize {
        self.delegated.get()
    }

    pub fn professor_consulted(&self) -> bool {
        self.professor.get().is_some()
    }
}

impl Teacher for AssistantTeacher {
    fn ask(&self, question: Question) -> String {
        match question {
            Question::Easy => easy_answer(),
            Question::Difficult => {
                self.delegated.set(self.delegated.get() + 1);
                self.professor
                    .get_or_init(Professor::default)
                    .ask(Question::Difficult)
            }
        }
    }
}

pub fn demo(_config: &DemoConfig) -> PatternResult<Vec<String>> {
    let teacher = AssistantTeacher::new();
    let mut lines: Vec<String> = [Question::Easy, Question::Difficult]
        .into_iter()
        .map(|q| format!("{:?}: {}", q, teacher.ask(q)))
        .collect();
    lines.push(format!(
        "without the professor: {}",
        JuniorTeacher.ask(Question::Difficult)
    ));
    Ok(lines)
}
