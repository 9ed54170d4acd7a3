//! The trait the bot run loop drives.

use drift_core::EventBus;

use crate::chat::ChatQueue;
use crate::command::CommandQueue;
use crate::input::InputFrame;
use crate::state::GameState;

/// Whether the connection survives into the next tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClientStatus {
    Active,
    /// The connection ended (remote close, unrecoverable error); the run
    /// loop terminates cleanly.
    Closed,
}

/// A connected game session as seen by the bot core.
///
/// Real implementations wrap the UDP protocol stack; tests and the practice
/// arena implement it in-process.  The contract per tick:
///
/// 1. [`pump`](Client::pump) advances the session, refreshes the
///    [`GameState`] snapshot, and dispatches game events on `bus`.
/// 2. The controller runs against `state()`.
/// 3. The run loop hands back the input frame and drains the chat and
///    command queues through the flush methods.
pub trait Client {
    fn pump(&mut self, dt: f32, bus: &EventBus) -> ClientStatus;

    fn state(&self) -> &GameState;
    fn state_mut(&mut self) -> &mut GameState;

    /// Accept this tick's synthetic input.
    fn submit_input(&mut self, frame: InputFrame);

    /// Drain queued chat lines for serialization.
    fn flush_chat(&mut self, chat: &mut ChatQueue);

    /// Drain queued protocol requests for serialization.
    fn flush_commands(&mut self, commands: &mut CommandQueue);
}
