use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "How does automated PR review work?",
        answer: "When you open a pull request, our AI automatically analyzes your code changes within minutes. It creates a knowledge graph of your codebase, runs 40+ linters, maps dependencies, and generates line-by-line feedback with security findings and improvement suggestions, all without manual triggers.",
    },
    FaqEntry {
        question: "Is my code safe and private?",
        answer: "Your code is processed securely and shared only with trusted AI providers for review purposes. We never use your code to train any AI models.",
    },
    FaqEntry {
        question: "What programming languages and frameworks are supported?",
        answer: "We support a wide range of programming languages including JavaScript, TypeScript, Python, C, Rust and many more later on. Our AI is continuously updated to support new technologies.",
    },
    FaqEntry {
        question: "How does this fit into my existing development workflow?",
        answer: "Install our GitHub app in minutes and reviews start automatically on every PR. Interact with the AI directly in PR comments, get AI-generated summaries",
    },
];

/// Which FAQ answers are currently open. Entries open and close independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedFaqSet(BTreeSet<usize>);

impl ExpandedFaqSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.0.remove(&index) {
            self.0.insert(index);
        }
    }

    /// Returns a copy with `index` flipped, for handing to `UseStateHandle::set`.
    pub fn toggled(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.toggle(index);
        next
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
