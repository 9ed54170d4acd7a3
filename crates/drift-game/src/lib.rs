//! `drift-game` — the surface between the network collaborator and the bot
//! core.
//!
//! The wire protocol itself lives outside this workspace.  What the core
//! needs from it is a coherent per-tick snapshot ([`GameState`]) and a small
//! set of outbound channels ([`InputFrame`], [`ChatQueue`], [`CommandQueue`]);
//! what it needs to hand back is defined by the [`Client`] trait.  Everything
//! here is plain data — no sockets, no packets.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`player`]   | `Player`, status flags, ship constants                 |
//! | [`settings`] | `ArenaSettings`, per-ship tuning                       |
//! | [`state`]    | `GameState` snapshot, `GameFlag`, `Green`, login state |
//! | [`input`]    | `InputAction`, `InputFrame` bitset                     |
//! | [`chat`]     | `ChatKind`, `ChatQueue`                                |
//! | [`command`]  | `Command`, `CommandQueue`                              |
//! | [`client`]   | `Client` trait, `ClientStatus`                         |
//! | [`event`]    | Game event types for the event bus                     |
//! | [`work`]     | Bounded background work queue (collaborator use only)  |

pub mod chat;
pub mod client;
pub mod command;
pub mod event;
pub mod input;
pub mod player;
pub mod settings;
pub mod state;
pub mod work;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use chat::{ChatEntry, ChatKind, ChatQueue};
pub use client::{Client, ClientStatus};
pub use command::{Command, CommandQueue};
pub use input::{InputAction, InputFrame};
pub use player::{Player, SPECTATOR_SHIP, StatusFlag};
pub use settings::{ArenaSettings, ShipSettings};
pub use state::{GameFlag, GameState, Green, LoginState};
pub use work::WorkQueue;
