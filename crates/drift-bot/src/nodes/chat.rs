//! Chat output.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_game::ChatKind;

/// Enqueues one chat line.  Always succeeds; gate with a timer to avoid
/// flooding.
pub struct ChatMessageNode {
    kind: ChatKind,
    message: String,
}

impl ChatMessageNode {
    pub fn public(message: impl Into<String>) -> Self {
        Self { kind: ChatKind::Public, message: message.into() }
    }

    pub fn team(message: impl Into<String>) -> Self {
        Self { kind: ChatKind::Team, message: message.into() }
    }

    pub fn frequency(frequency: u16, message: impl Into<String>) -> Self {
        Self { kind: ChatKind::Frequency(frequency), message: message.into() }
    }

    pub fn private(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: ChatKind::Private(target.into()), message: message.into() }
    }
}

impl BehaviorNode for ChatMessageNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        match &self.kind {
            ChatKind::Public => ctx.chat.send_public(self.message.clone()),
            ChatKind::Team => ctx.chat.send_team(self.message.clone()),
            ChatKind::Frequency(freq) => ctx.chat.send_frequency(*freq, self.message.clone()),
            ChatKind::Private(target) => ctx.chat.send_private(target.clone(), self.message.clone()),
        }
        ExecuteResult::Success
    }
}
