//! Generic graph searches over arbitrary state types.
//!
//! States carry whatever extra dimension a puzzle needs (heading, streak
//! length, tile offset) next to the position, and the visited sets are keyed
//! by the whole state. Every search terminates when the reachable state
//! space is finite.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// All states reachable from `starts`, found with an explicit stack.
pub fn reachable<S, I, F>(starts: impl IntoIterator<Item = S>, mut successors: F) -> HashSet<S>
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut visited = HashSet::new();
    let mut stack: Vec<S> = Vec::new();
    for start in starts {
        if visited.insert(start.clone()) {
            stack.push(start);
        }
    }

    while let Some(state) = stack.pop() {
        for next in successors(&state) {
            if visited.insert(next.clone()) {
                stack.push(next);
            }
        }
    }
    visited
}

/// Breadth-first distances from `start` to every reachable state.
///
/// With `max_depth`, states further than that many steps are not expanded.
pub fn bfs_distances<S, I, F>(start: S, max_depth: Option<usize>, mut successors: F) -> HashMap<S, usize>
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut distances = HashMap::from([(start.clone(), 0)]);
    let mut queue = VecDeque::from([(start, 0usize)]);

    while let Some((state, depth)) = queue.pop_front() {
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }
        for next in successors(&state) {
            if !distances.contains_key(&next) {
                distances.insert(next.clone(), depth + 1);
                queue.push_back((next, depth + 1));
            }
        }
    }
    distances
}

/// Dijkstra shortest path from any of `starts` to the first goal state.
///
/// `successors` yields `(state, edge_cost)` pairs. Returns the goal state
/// popped first together with its cost, or `None` if no goal is reachable.
pub fn dijkstra<S, I, F, G>(
    starts: impl IntoIterator<Item = S>,
    mut successors: F,
    mut is_goal: G,
) -> Option<(S, u64)>
where
    S: Clone + Ord + Hash,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, u64)>,
    G: FnMut(&S) -> bool,
{
    let mut best: HashMap<S, u64> = HashMap::new();
    let mut heap = BinaryHeap::new();
    for start in starts {
        best.insert(start.clone(), 0);
        heap.push(Reverse((0u64, start)));
    }

    while let Some(Reverse((cost, state))) = heap.pop() {
        if best.get(&state).is_some_and(|&known| known < cost) {
            continue;
        }
        if is_goal(&state) {
            return Some((state, cost));
        }
        for (next, step) in successors(&state) {
            let next_cost = cost + step;
            if best.get(&next).is_none_or(|&known| next_cost < known) {
                best.insert(next.clone(), next_cost);
                heap.push(Reverse((next_cost, next)));
            }
        }
    }
    None
}
