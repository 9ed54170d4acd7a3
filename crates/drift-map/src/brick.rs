//! Temporary player-laid solid tiles.
//!
//! Bricks arrive from the network layer with a team and an expiry tick and
//! disappear on their own.  Storage is a freelist-backed slab indexed by a
//! `(x, y)` hashmap, so insert/remove/lookup are O(1) and iteration for
//! expiry touches only live slots.

use drift_core::Tick;
use rustc_hash::FxHashMap;

/// One live brick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Brick {
    pub x: u16,
    pub y: u16,
    /// Frequency that laid the brick; only this team passes through it.
    pub team: u16,
    /// Wrap-aware tick after which the brick is gone.
    pub end_tick: Tick,
}

#[derive(Default)]
pub struct BrickMap {
    slots: Vec<Option<Brick>>,
    free: Vec<u32>,
    index: FxHashMap<(u16, u16), u32>,
}

impl BrickMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Insert a brick, replacing any brick already on that tile (the server
    /// refreshes bricks by re-sending them).
    pub fn insert(&mut self, brick: Brick) {
        if let Some(&slot) = self.index.get(&(brick.x, brick.y)) {
            self.slots[slot as usize] = Some(brick);
            return;
        }

        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize] = Some(brick);
                slot
            }
            None => {
                self.slots.push(Some(brick));
                (self.slots.len() - 1) as u32
            }
        };
        self.index.insert((brick.x, brick.y), slot);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Brick> {
        let slot = *self.index.get(&(x, y))?;
        self.slots[slot as usize].as_ref()
    }

    /// Remove the brick at `(x, y)`.
    ///
    /// Removing a tile that holds no brick signals a bookkeeping bug in the
    /// caller; it is logged and trips a debug assertion.
    pub fn remove(&mut self, x: u16, y: u16) -> Option<Brick> {
        match self.index.remove(&(x, y)) {
            Some(slot) => {
                let brick = self.slots[slot as usize].take();
                self.free.push(slot);
                brick
            }
            None => {
                log::error!("removal of nonexistent brick at ({x}, {y})");
                debug_assert!(false, "removal of nonexistent brick at ({x}, {y})");
                None
            }
        }
    }

    /// Drop every brick whose `end_tick` has passed; returns the cleared
    /// bricks so the caller can publish removal events.
    pub fn expire(&mut self, now: Tick) -> Vec<Brick> {
        let expired: Vec<Brick> = self
            .slots
            .iter()
            .flatten()
            .filter(|brick| now.gte(brick.end_tick))
            .copied()
            .collect();

        for brick in &expired {
            self.remove(brick.x, brick.y);
        }
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.slots.iter().flatten()
    }
}
