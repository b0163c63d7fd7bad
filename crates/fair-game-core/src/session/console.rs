//! Console capability the session talks to, plus an in-memory version.

use super::{SessionEvent, SessionSummary};
use crate::crypto::Commitment;
use crate::protocol::RoundReceipt;
use crate::GameError;
use async_trait::async_trait;
use std::collections::VecDeque;

/// Where session output goes and where user answers come from
///
/// Implementations can be:
/// - a terminal reading stdin and writing stdout
/// - MemoryConsole for testing
#[async_trait]
pub trait Console: Send {
    /// Present one event to the user
    fn render(&mut self, event: &SessionEvent<'_>) -> Result<(), GameError>;

    /// Wait for the next answer; `None` means input is closed
    async fn next_line(&mut self) -> Result<Option<String>, GameError>;
}

/// Scripted console that records what the session showed
#[derive(Debug, Default)]
pub struct MemoryConsole {
    inputs: VecDeque<String>,
    pub commitments: Vec<Commitment>,
    pub receipts: Vec<RoundReceipt>,
    pub invalid: Vec<String>,
    pub menus: usize,
    pub tables: usize,
    pub summary: Option<SessionSummary>,
    /// Commitments published since the last answer was handed out
    pending_commitments: usize,
    /// True if an answer was ever read while no commitment had been shown for the round
    pub read_before_commit: bool,
}

impl MemoryConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

#[async_trait]
impl Console for MemoryConsole {
    fn render(&mut self, event: &SessionEvent<'_>) -> Result<(), GameError> {
        match event {
            SessionEvent::Commitment { commitment, .. } => {
                self.commitments.push(**commitment);
                self.pending_commitments += 1;
            }
            SessionEvent::Menu(_) => self.menus += 1,
            SessionEvent::InvalidSelection(input) => self.invalid.push(input.to_string()),
            SessionEvent::Table(_) => self.tables += 1,
            SessionEvent::Round(receipt) => {
                self.receipts.push((*receipt).clone());
                self.pending_commitments = 0;
            }
            SessionEvent::Goodbye(summary) => self.summary = Some((*summary).clone()),
        }
        Ok(())
    }

    async fn next_line(&mut self) -> Result<Option<String>, GameError> {
        if self.pending_commitments == 0 {
            self.read_before_commit = true;
        }
        Ok(self.inputs.pop_front())
    }
}
