//! Maps a tokenized line to the command it carries.

use crate::layout::{CommandLayout, LAYOUTS};
use adcgraph_core::CommandKind;

/// Where a classified line goes during the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Applied as soon as it is read.
    Immediate(&'static CommandLayout),
    /// Queued until every declaration has been read.
    Deferred(&'static CommandLayout),
    /// Not a command this engine models.
    Ignore,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LineClassifier;

impl LineClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Finds the layout whose prefix matches the leading tokens.
    ///
    /// Prefixes are literal and case-sensitive. No two prefixes overlap, so
    /// at most one layout matches.
    pub fn classify(&self, tokens: &[String]) -> Option<&'static CommandLayout> {
        LAYOUTS.iter().find(|layout| layout.matches(tokens))
    }

    pub fn route(&self, tokens: &[String]) -> Route {
        match self.classify(tokens) {
            Some(layout) if layout.kind.is_deferred() => Route::Deferred(layout),
            Some(layout) => Route::Immediate(layout),
            None => Route::Ignore,
        }
    }

    pub fn kind(&self, tokens: &[String]) -> Option<CommandKind> {
        self.classify(tokens).map(|layout| layout.kind)
    }
}
