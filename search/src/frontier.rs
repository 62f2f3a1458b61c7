//! Frontier containers: stack, queue, and cost-ordered heap.
//!
//! All three sit behind [`Frontier`], so the search loop is written once.
//! The stack and queue keep duplicates (the engine drops already-visited
//! states on pop); the heap keeps at most one live entry per state and
//! relaxes it in place when a strictly cheaper cost arrives.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::hash::Hash;

use crate::error::FrontierError;
use crate::node::{FrontierKey, NodeId};

/// What a push did to the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// A new entry was added.
    Inserted,
    /// An existing entry for the same state was replaced by a cheaper one.
    Relaxed,
    /// An entry at least as cheap already exists; nothing changed.
    Ignored,
}

/// A container of search nodes keyed by state.
///
/// The `cost` a node is pushed with is its ordering key, as chosen by the
/// engine: the path cost `g` for uniform-cost search, `g + h` for A*. The
/// frontier never sees `g` and `h` separately.
pub trait Frontier<S> {
    /// Offer `node` (whose state is `state`) at ordering key `cost`.
    fn push(&mut self, state: &S, node: NodeId, cost: f64) -> PushOutcome;

    /// Remove and return the next node.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::Empty`] if the frontier holds no entries.
    fn pop(&mut self) -> Result<NodeId, FrontierError>;

    /// The node `pop` would return, without removing it.
    fn peek(&self) -> Option<NodeId>;

    fn contains(&self, state: &S) -> bool;

    /// Lowest ordering key currently held for `state`: the best known path
    /// cost under uniform-cost search, the best `g + h` under A*.
    fn cost_of(&self, state: &S) -> Option<f64>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest `len()` observed so far.
    fn high_water(&self) -> u64;
}

// ---------------------------------------------------------------------------
// Stack / queue
// ---------------------------------------------------------------------------

/// Insertion-ordered frontier: LIFO (stack) or FIFO (queue).
///
/// No cost comparison on push; the same state may be present several times.
/// Membership is O(1) through a per-state entry count.
#[derive(Debug, Clone)]
pub struct InsertionFrontier<S> {
    entries: VecDeque<(S, NodeId, f64)>,
    counts: HashMap<S, usize>,
    lifo: bool,
    high_water: u64,
}

impl<S: Clone + Eq + Hash> InsertionFrontier<S> {
    /// Last-in, first-out (depth-first order).
    #[must_use]
    pub fn stack() -> Self {
        Self::with_order(true)
    }

    /// First-in, first-out (breadth-first order).
    #[must_use]
    pub fn queue() -> Self {
        Self::with_order(false)
    }

    fn with_order(lifo: bool) -> Self {
        Self {
            entries: VecDeque::new(),
            counts: HashMap::new(),
            lifo,
            high_water: 0,
        }
    }

    #[must_use]
    pub fn is_stack(&self) -> bool {
        self.lifo
    }
}

impl<S: Clone + Eq + Hash> Frontier<S> for InsertionFrontier<S> {
    fn push(&mut self, state: &S, node: NodeId, cost: f64) -> PushOutcome {
        self.entries.push_back((state.clone(), node, cost));
        *self.counts.entry(state.clone()).or_insert(0) += 1;
        self.high_water = self.high_water.max(self.entries.len() as u64);
        PushOutcome::Inserted
    }

    fn pop(&mut self) -> Result<NodeId, FrontierError> {
        let entry = if self.lifo {
            self.entries.pop_back()
        } else {
            self.entries.pop_front()
        };
        let (state, node, _) = entry.ok_or(FrontierError::Empty)?;
        if let Some(count) = self.counts.get_mut(&state) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&state);
            }
        }
        Ok(node)
    }

    fn peek(&self) -> Option<NodeId> {
        let entry = if self.lifo {
            self.entries.back()
        } else {
            self.entries.front()
        };
        entry.map(|(_, node, _)| *node)
    }

    fn contains(&self, state: &S) -> bool {
        self.counts.contains_key(state)
    }

    /// Linear in the frontier size; only membership is constant-time here.
    fn cost_of(&self, state: &S) -> Option<f64> {
        if !self.contains(state) {
            return None;
        }
        self.entries
            .iter()
            .filter(|(s, _, _)| s == state)
            .map(|(_, _, c)| *c)
            .min_by(f64::total_cmp)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

// ---------------------------------------------------------------------------
// Cost-ordered heap
// ---------------------------------------------------------------------------

/// A heap entry. `BinaryHeap` is a max-heap, so the key is wrapped in
/// `Reverse` to pop the lowest `(priority, seq)` first.
#[derive(Debug)]
struct HeapEntry<S> {
    key: Reverse<FrontierKey>,
    state: S,
    node: NodeId,
}

impl<S> PartialEq for HeapEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for HeapEntry<S> {}

impl<S> PartialOrd for HeapEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for HeapEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// The live entry for a state: which heap entry (by `seq`) is current.
#[derive(Debug, Clone, Copy)]
struct Live {
    seq: u64,
    cost: f64,
    node: NodeId,
}

/// Min-heap frontier with decrease-key by lazy deletion.
///
/// Maintains:
/// - a `BinaryHeap` for O(log n) push/pop
/// - a `HashMap<S, Live>` naming the single live entry per state
///
/// Relaxation pushes a new heap entry and repoints the map; the superseded
/// entry stays in the heap and is skipped once it surfaces. Stale entries are
/// never left on top, so `peek` is exact.
#[derive(Debug)]
pub struct PriorityFrontier<S> {
    heap: BinaryHeap<HeapEntry<S>>,
    live: HashMap<S, Live>,
    next_seq: u64,
    high_water: u64,
}

impl<S: Clone + Eq + Hash> PriorityFrontier<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Number of heap slots, including superseded entries not yet discarded.
    #[must_use]
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    fn is_live(&self, entry: &HeapEntry<S>) -> bool {
        self.live
            .get(&entry.state)
            .is_some_and(|l| l.seq == entry.key.0.seq)
    }

    /// Drop superseded entries sitting on top of the heap.
    fn settle(&mut self) {
        while let Some(top) = self.heap.peek() {
            if self.is_live(top) {
                break;
            }
            self.heap.pop();
        }
    }

    fn insert_entry(&mut self, state: &S, node: NodeId, cost: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(state.clone(), Live { seq, cost, node });
        self.heap.push(HeapEntry {
            key: Reverse(FrontierKey {
                priority: cost,
                seq,
            }),
            state: state.clone(),
            node,
        });
    }
}

impl<S: Clone + Eq + Hash> Default for PriorityFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash> Frontier<S> for PriorityFrontier<S> {
    fn push(&mut self, state: &S, node: NodeId, cost: f64) -> PushOutcome {
        let outcome = match self.live.get(state) {
            Some(existing) if cost < existing.cost => PushOutcome::Relaxed,
            Some(_) => return PushOutcome::Ignored,
            None => PushOutcome::Inserted,
        };
        self.insert_entry(state, node, cost);
        self.settle();
        self.high_water = self.high_water.max(self.live.len() as u64);
        outcome
    }

    fn pop(&mut self) -> Result<NodeId, FrontierError> {
        self.settle();
        let entry = self.heap.pop().ok_or(FrontierError::Empty)?;
        self.live.remove(&entry.state);
        self.settle();
        Ok(entry.node)
    }

    fn peek(&self) -> Option<NodeId> {
        self.heap.peek().map(|e| e.node)
    }

    fn contains(&self, state: &S) -> bool {
        self.live.contains_key(state)
    }

    fn cost_of(&self, state: &S) -> Option<f64> {
        self.live.get(state).map(|l| l.cost)
    }

    fn len(&self) -> usize {
        self.live.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<S: Clone + Eq + Hash> PriorityFrontier<S> {
    /// The node currently held for `state`, if any.
    #[must_use]
    pub fn node_of(&self, state: &S) -> Option<NodeId> {
        self.live.get(state).map(|l| l.node)
    }
}
