//! Outbound chat handoff.
//!
//! A single-producer single-consumer queue: behavior-tree nodes enqueue,
//! the network collaborator drains once per tick.  Flood control is the
//! collaborator's job; trees gate their own sends with timers.

use std::collections::VecDeque;

/// Addressing mode of a chat line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatKind {
    Public,
    Team,
    /// Message to another team.
    Frequency(u16),
    /// Direct message by player name.
    Private(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub kind: ChatKind,
    pub message: String,
}

#[derive(Default)]
pub struct ChatQueue {
    entries: VecDeque<ChatEntry>,
}

impl ChatQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send_public(&mut self, message: impl Into<String>) {
        self.push(ChatKind::Public, message);
    }

    pub fn send_team(&mut self, message: impl Into<String>) {
        self.push(ChatKind::Team, message);
    }

    pub fn send_frequency(&mut self, frequency: u16, message: impl Into<String>) {
        self.push(ChatKind::Frequency(frequency), message);
    }

    pub fn send_private(&mut self, target: impl Into<String>, message: impl Into<String>) {
        self.push(ChatKind::Private(target.into()), message);
    }

    fn push(&mut self, kind: ChatKind, message: impl Into<String>) {
        self.entries.push_back(ChatEntry { kind, message: message.into() });
    }

    pub fn pop(&mut self) -> Option<ChatEntry> {
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
