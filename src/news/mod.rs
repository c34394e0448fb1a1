//! Newsletter shown between turns.
//!
//! [`NewsModal`] is the caller-owned visibility flag; [`Newsletter`] is the
//! issue content. Layout is left to whatever renders them.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Whether the newsletter overlay is currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewsModal {
    visible: bool,
}

impl NewsModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.set_visible(true);
    }

    /// No-op when already closed.
    pub fn close(&mut self) {
        self.set_visible(false);
    }

    pub fn toggle(&mut self) {
        self.set_visible(!self.visible);
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            debug!(visible, "News modal visibility changed");
        }
        self.visible = visible;
    }
}

/// How prominently a headline is placed in the issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prominence {
    Lead,
    Secondary,
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    pub prominence: Prominence,
}

/// One issue of the in-game newsletter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Newsletter {
    /// Issue label, e.g. the in-game date.
    pub issue: String,
    #[serde(default)]
    pub headlines: Vec<Headline>,
}

impl Newsletter {
    pub fn new(issue: impl Into<String>) -> Self {
        Self {
            issue: issue.into(),
            headlines: Vec::new(),
        }
    }

    pub fn with_headline(mut self, title: impl Into<String>, prominence: Prominence) -> Self {
        self.headlines.push(Headline {
            title: title.into(),
            prominence,
        });
        self
    }

    /// The first lead headline, if the issue has one.
    pub fn lead(&self) -> Option<&Headline> {
        self.headlines
            .iter()
            .find(|h| h.prominence == Prominence::Lead)
    }
}
