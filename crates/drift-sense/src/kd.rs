//! KD partition over live players.
//!
//! Rebuilt from scratch every tick from the players the controller deems
//! live (on the playfield, synchronized, out of spawn grace), then treated
//! as immutable until the next rebuild.  Nodes live in a flat arena and
//! link by `u32` index — no pointer graph, no per-node allocation, and the
//! build's median partitioning works in place on the arena slice.

use drift_core::{PlayerId, Vec2};

const NO_CHILD: u32 = u32::MAX;

/// One snapshot entry.  Position is copied out of the player record so
/// queries never chase back into the player array.
#[derive(Copy, Clone, Debug)]
pub struct KdNode {
    pub position: Vec2,
    pub player: PlayerId,
    left: u32,
    right: u32,
}

pub struct KdTree {
    nodes: Vec<KdNode>,
    root: u32,
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl KdTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), root: NO_CHILD }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: u32) -> &KdNode {
        &self.nodes[index as usize]
    }

    pub fn root(&self) -> Option<u32> {
        (self.root != NO_CHILD).then_some(self.root)
    }

    /// Rebuild from this tick's live players.  The arena is reused; the
    /// previous tree vanishes.
    pub fn build(&mut self, players: impl IntoIterator<Item = (PlayerId, Vec2)>) {
        self.nodes.clear();
        self.nodes.extend(
            players
                .into_iter()
                .map(|(player, position)| KdNode { position, player, left: NO_CHILD, right: NO_CHILD }),
        );

        let count = self.nodes.len();
        self.root = Self::partition(&mut self.nodes, 0, count, 0);
    }

    /// Median-split `nodes[start..end]` on `axis` (0 = x, 1 = y), link the
    /// halves, and return the median's index.
    fn partition(nodes: &mut [KdNode], start: usize, end: usize, axis: usize) -> u32 {
        if start >= end {
            return NO_CHILD;
        }

        let mid = start + (end - start) / 2;
        nodes[start..end].select_nth_unstable_by(mid - start, |a, b| {
            let (ka, kb) = if axis == 0 { (a.position.x, b.position.x) } else { (a.position.y, b.position.y) };
            ka.total_cmp(&kb)
        });

        let left = Self::partition(nodes, start, mid, axis ^ 1);
        let right = Self::partition(nodes, mid + 1, end, axis ^ 1);
        nodes[mid].left = left;
        nodes[mid].right = right;

        mid as u32
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Find the shallowest node whose subtree encompasses everything within
    /// `min_distance` of `from` — the anchor for "territory far from here"
    /// decisions.  `None` when no player is within `min_distance` at all.
    pub fn range_search(&self, from: Vec2, min_distance: f32) -> Option<u32> {
        let root = self.root()?;
        self.range_search_at(root, from, min_distance * min_distance)
    }

    fn range_search_at(&self, index: u32, from: Vec2, min_dist_sq: f32) -> Option<u32> {
        let node = &self.nodes[index as usize];

        if from.distance_sq(node.position) < min_dist_sq {
            return Some(index);
        }

        // A child inside the radius means this node must represent the
        // whole ball.
        let child_close = |child: u32| {
            child != NO_CHILD && from.distance_sq(self.nodes[child as usize].position) < min_dist_sq
        };
        if child_close(node.left) || child_close(node.right) {
            return Some(index);
        }

        let best_left =
            (node.left != NO_CHILD).then(|| self.range_search_at(node.left, from, min_dist_sq)).flatten();
        let best_right =
            (node.right != NO_CHILD).then(|| self.range_search_at(node.right, from, min_dist_sq)).flatten();

        match (best_left, best_right) {
            (Some(l), Some(r)) => {
                let dl = from.distance_sq(self.nodes[l as usize].position);
                let dr = from.distance_sq(self.nodes[r as usize].position);
                Some(if dl < dr { l } else { r })
            }
            (Some(l), None) => Some(l),
            (None, r) => r,
        }
    }

    /// Every player in the subtree rooted at `index`.
    pub fn collect(&self, index: u32) -> Vec<PlayerId> {
        let mut players = Vec::new();
        self.collect_into(index, &mut players);
        players
    }

    fn collect_into(&self, index: u32, out: &mut Vec<PlayerId>) {
        if index == NO_CHILD {
            return;
        }
        let node = &self.nodes[index as usize];
        out.push(node.player);
        self.collect_into(node.left, out);
        self.collect_into(node.right, out);
    }
}
