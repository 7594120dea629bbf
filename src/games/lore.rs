/*
lore.rs

Copyright 2025 Hervé Quatremain

This file is part of Rift Daily.

Rift Daily is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Rift Daily is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Rift Daily. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Lore connections: link two champions through their lore relationships.
//!
//! The [`LoreGraph`] maps each champion to the champions they are related to.
//! Edges are followed only in the stored direction.
//! The player builds a [`Chain`] from the first champion of the puzzle, one neighbor at a time,
//! until reaching the second champion.
//! The chain is compared to the shortest path, computed with a breadth-first search.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::config::SHARE_SITE;
use crate::game_mode::GameMode;
use crate::round::{Outcome, Round, RoundStatus, RoundTracker, mode_label};

/// Score of a chain as short as the shortest path.
const MAX_SCORE: u32 = 1000;

/// Points lost for each step above the shortest path.
const STEP_PENALTY: u32 = 150;

/// Lore puzzle: link `champion_a` to `champion_b`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LorePuzzle {
    pub champion_a: String,

    pub champion_b: String,
}

/// Adjacency map of the lore relationships.
///
/// The graph is loaded once and is read-only afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct LoreGraph {
    edges: HashMap<String, Vec<String>>,
}

impl LoreGraph {
    /// Create an empty [`LoreGraph`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the edges from `from` to each champion of `to`, in order.
    pub fn add_edges(&mut self, from: &str, to: &[&str]) {
        let neighbors: &mut Vec<String> = self.edges.entry(from.to_string()).or_default();
        for name in to {
            if !neighbors.iter().any(|n| n == name) {
                neighbors.push(name.to_string());
            }
        }
    }

    /// Return the champions that can follow `name` in a chain, in stored order.
    pub fn neighbors(&self, name: &str) -> &[String] {
        match self.edges.get(name) {
            Some(n) => n.as_slice(),
            None => &[],
        }
    }

    /// Whether `to` can directly follow `from`.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).iter().any(|n| n == to)
    }

    /// Number of champions with outgoing edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Return a shortest path from `start` to `end`, both included, or None if `end` is not
    /// reachable.
    ///
    /// The search is breadth-first. A champion is marked visited when it is queued, so it is
    /// never queued twice. When several shortest paths exist, the first one discovered wins,
    /// following the order of the neighbor lists.
    pub fn shortest_path(&self, start: &str, end: &str) -> Option<Vec<String>> {
        if start == end {
            return Some(vec![start.to_string()]);
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<Vec<&str>> = VecDeque::new();
        visited.insert(start);
        queue.push_back(vec![start]);

        while let Some(path) = queue.pop_front() {
            let node: &str = match path.last() {
                Some(n) => n,
                None => continue,
            };
            for neighbor in self.neighbors(node) {
                let neighbor: &str = neighbor.as_str();
                if visited.contains(neighbor) {
                    continue;
                }
                let mut new_path: Vec<&str> = path.clone();
                new_path.push(neighbor);
                if neighbor == end {
                    debug!("Shortest path from {start} to {end}: {new_path:?}");
                    return Some(new_path.into_iter().map(String::from).collect());
                }
                visited.insert(neighbor);
                queue.push_back(new_path);
            }
        }
        debug!("No path from {start} to {end}");
        None
    }
}

/// Chain of champions built by the player.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Chain {
    /// Chain as an ordered list of champions.
    chain: Vec<String>,

    /// Champions in the chain.
    /// Instead of looking for the champion in the [`Chain::chain`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<String>,
}

impl PartialEq for Chain {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain
    }
}

impl Chain {
    /// Create a [`Chain`] object that starts with the given champion.
    pub fn new(start: &str) -> Self {
        let mut chain: Chain = Chain::default();
        chain.push(start);
        chain
    }

    /// Add a champion at the end of the chain.
    fn push(&mut self, name: &str) {
        self.chain.push(name.to_string());
        self.visited.insert(name.to_string());
    }

    /// Remove the last champion from the chain, but never the first one.
    pub fn pop(&mut self) -> Option<String> {
        if self.chain.len() <= 1 {
            return None;
        }
        let last: Option<String> = self.chain.pop();
        if let Some(name) = &last {
            self.visited.remove(name);
        }
        last
    }

    /// Get the number of champions in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Number of links in the chain.
    pub fn steps(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }

    /// Whether the champion is in the chain or not.
    pub fn contains(&self, name: &str) -> bool {
        self.visited.contains(name)
    }

    /// Return a reference to the chain vector.
    pub fn get(&self) -> &Vec<String> {
        &self.chain
    }

    /// Return the last champion in the chain.
    pub fn get_last(&self) -> Option<&str> {
        self.chain.last().map(String::as_str)
    }
}

/// Whether the chain links the two champions of the puzzle through graph edges, without
/// visiting a champion twice.
pub fn is_solved(graph: &LoreGraph, puzzle: &LorePuzzle, chain: &[String]) -> bool {
    if chain.first() != Some(&puzzle.champion_a) || chain.last() != Some(&puzzle.champion_b) {
        return false;
    }
    let distinct: HashSet<&str> = chain.iter().map(String::as_str).collect();
    distinct.len() == chain.len() && chain.windows(2).all(|w| graph.has_edge(&w[0], &w[1]))
}

/// Score a chain of champions against the shortest path.
///
/// Invalid or incomplete chains score 0. A valid chain scores 1000 if it is as short as the
/// shortest path, and loses 150 points for each extra step.
pub fn score(graph: &LoreGraph, puzzle: &LorePuzzle, chain: &[String]) -> u32 {
    if !is_solved(graph, puzzle, chain) {
        return 0;
    }
    let optimal: Vec<String> = match graph.shortest_path(&puzzle.champion_a, &puzzle.champion_b) {
        Some(p) => p,
        None => return 0,
    };
    score_steps(chain.len() - 1, optimal.len() - 1)
}

/// Score for a complete chain of `steps` links, given the shortest number of links.
pub fn score_steps(steps: usize, optimal_steps: usize) -> u32 {
    let extra: u32 = steps.saturating_sub(optimal_steps) as u32;
    MAX_SCORE.saturating_sub(STEP_PENALTY.saturating_mul(extra))
}

/// Result of adding a champion to the chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LinkResult {
    /// The champion was added. The chain is not complete yet.
    Added,

    /// The champion was added and is the end of the puzzle.
    Complete,

    /// The champion is already in the chain.
    AlreadyInChain,

    /// The champion is not related to the last champion of the chain.
    NotLinked,

    /// The round is over, or the chain is already complete.
    Ignored,
}

/// Lore round in progress.
#[derive(Debug, Clone)]
pub struct LoreRound<'a> {
    graph: &'a LoreGraph,

    puzzle: LorePuzzle,

    chain: Chain,

    /// Shortest path, revealed after submission.
    shortest: Option<Vec<String>>,

    tracker: RoundTracker,
}

impl<'a> LoreRound<'a> {
    /// Create a [`LoreRound`] object. The chain starts with the first champion of the puzzle.
    pub fn new(graph: &'a LoreGraph, puzzle: LorePuzzle) -> Self {
        let chain: Chain = Chain::new(&puzzle.champion_a);
        Self {
            graph,
            puzzle,
            chain,
            shortest: None,
            tracker: RoundTracker::new(),
        }
    }

    /// Return the puzzle.
    pub fn puzzle(&self) -> &LorePuzzle {
        &self.puzzle
    }

    /// Return the chain.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Whether the chain reaches the second champion of the puzzle.
    pub fn is_complete(&self) -> bool {
        self.chain.get_last() == Some(self.puzzle.champion_b.as_str())
    }

    /// Return the champions that can be added to the chain.
    pub fn available(&self) -> Vec<&str> {
        match self.chain.get_last() {
            Some(last) => self
                .graph
                .neighbors(last)
                .iter()
                .map(String::as_str)
                .filter(|n| !self.chain.contains(n))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether the chain is stuck: not complete and no champion can be added.
    pub fn is_dead_end(&self) -> bool {
        !self.is_complete() && self.available().is_empty()
    }

    /// Add a champion at the end of the chain.
    pub fn add(&mut self, name: &str) -> LinkResult {
        if !self.tracker.is_in_progress() || self.is_complete() {
            return LinkResult::Ignored;
        }
        if self.chain.contains(name) {
            return LinkResult::AlreadyInChain;
        }
        let linked: bool = match self.chain.get_last() {
            Some(last) => self.graph.has_edge(last, name),
            None => false,
        };
        if !linked {
            warn!("{name} is not linked to {:?}", self.chain.get_last());
            return LinkResult::NotLinked;
        }
        self.chain.push(name);
        if self.is_complete() {
            LinkResult::Complete
        } else {
            LinkResult::Added
        }
    }

    /// Remove the last champion of the chain.
    pub fn undo(&mut self) -> Option<String> {
        if !self.tracker.is_in_progress() {
            return None;
        }
        self.chain.pop()
    }

    /// Submit the chain and reveal the shortest path. Return the score.
    ///
    /// An incomplete chain loses the round.
    pub fn submit(&mut self) -> u32 {
        if self.tracker.is_in_progress() {
            self.shortest = self
                .graph
                .shortest_path(&self.puzzle.champion_a, &self.puzzle.champion_b);
            if self.shortest.is_none() {
                warn!(
                    "No path between {} and {} in the lore graph",
                    self.puzzle.champion_a, self.puzzle.champion_b
                );
            }
            if self.is_complete() {
                self.tracker.win();
            } else {
                self.tracker.lose();
            }
        }
        self.score()
    }

    /// Return the shortest path, once the chain is submitted.
    pub fn shortest_path(&self) -> Option<&[String]> {
        self.shortest.as_deref()
    }
}

impl Round for LoreRound<'_> {
    fn mode(&self) -> GameMode {
        GameMode::Lore
    }

    fn status(&self) -> RoundStatus {
        self.tracker.status()
    }

    fn attempts(&self) -> u32 {
        self.chain.len() as u32
    }

    fn score(&self) -> u32 {
        score(self.graph, &self.puzzle, self.chain.get())
    }

    fn take_outcome(&mut self) -> Option<Outcome> {
        let attempts: u32 = self.attempts();
        let score: u32 = self.score();
        self.tracker.take_outcome(attempts, score)
    }

    fn share_text(&self, is_daily: bool) -> String {
        let optimal: String = match &self.shortest {
            Some(p) => (p.len() - 1).to_string(),
            None => "?".to_string(),
        };
        format!(
            "LoL {} {}\n{} → {}\nSolved in {} steps (optimal: {optimal})\n{SHARE_SITE}/{}",
            self.mode().title(),
            mode_label(is_daily),
            self.puzzle.champion_a,
            self.puzzle.champion_b,
            self.chain.steps(),
            self.mode()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> LoreGraph {
        let mut g: LoreGraph = LoreGraph::new();
        g.add_edges("Garen", &["Lux", "Katarina", "Jarvan IV"]);
        g.add_edges("Lux", &["Garen", "Sylas"]);
        g.add_edges("Jarvan IV", &["Shyvana", "Xin Zhao"]);
        g.add_edges("Katarina", &["Talon", "Cassiopeia"]);
        g.add_edges("Sylas", &["Lux", "Shyvana"]);
        g.add_edges("Talon", &["Katarina"]);
        g
    }

    fn puzzle(a: &str, b: &str) -> LorePuzzle {
        LorePuzzle {
            champion_a: a.to_string(),
            champion_b: b.to_string(),
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn path_to_self() {
        assert_eq!(graph().shortest_path("Ahri", "Ahri"), Some(names(&["Ahri"])));
    }

    #[test]
    fn straight_line() {
        let mut g: LoreGraph = LoreGraph::new();
        g.add_edges("A", &["B"]);
        g.add_edges("B", &["C"]);
        g.add_edges("C", &[]);
        assert_eq!(g.shortest_path("A", "C"), Some(names(&["A", "B", "C"])));
    }

    #[test]
    fn unreachable_end() {
        let mut g: LoreGraph = LoreGraph::new();
        g.add_edges("A", &["B"]);
        assert_eq!(g.shortest_path("A", "Z"), None);
        // Edges are directed
        assert_eq!(g.shortest_path("B", "A"), None);
    }

    #[test]
    fn ties_follow_neighbor_order() {
        // Garen -> Lux -> Sylas -> Shyvana and Garen -> Jarvan IV -> Shyvana
        assert_eq!(
            graph().shortest_path("Garen", "Shyvana"),
            Some(names(&["Garen", "Jarvan IV", "Shyvana"]))
        );
        let mut g: LoreGraph = LoreGraph::new();
        g.add_edges("A", &["B", "C"]);
        g.add_edges("B", &["D"]);
        g.add_edges("C", &["D"]);
        assert_eq!(g.shortest_path("A", "D"), Some(names(&["A", "B", "D"])));
    }

    #[test]
    fn cycles_terminate() {
        assert_eq!(graph().shortest_path("Talon", "Xin Zhao"), None);
    }

    #[test]
    fn graph_json() {
        let g: LoreGraph =
            serde_json::from_str(r#"{"A": ["B", "C"], "B": ["C"], "C": []}"#).unwrap();
        assert_eq!(g.len(), 3);
        assert!(g.has_edge("A", "C"));
        assert!(!g.has_edge("C", "A"));
        assert!(g.neighbors("Z").is_empty());
    }

    #[test]
    fn chain_scores() {
        let g: LoreGraph = graph();
        let p: LorePuzzle = puzzle("Garen", "Shyvana");
        assert_eq!(score(&g, &p, &names(&["Garen", "Jarvan IV", "Shyvana"])), 1000);
        assert_eq!(
            score(&g, &p, &names(&["Garen", "Lux", "Sylas", "Shyvana"])),
            850
        );
        // Not an edge
        assert_eq!(score(&g, &p, &names(&["Garen", "Shyvana"])), 0);
        // Incomplete
        assert_eq!(score(&g, &p, &names(&["Garen", "Lux"])), 0);
        // Revisits Garen
        assert_eq!(
            score(
                &g,
                &p,
                &names(&["Garen", "Lux", "Garen", "Jarvan IV", "Shyvana"])
            ),
            0
        );
        assert_eq!(score_steps(9, 2), 0);
    }

    #[test]
    fn round_builds_a_chain() {
        let g: LoreGraph = graph();
        let mut round: LoreRound = LoreRound::new(&g, puzzle("Garen", "Shyvana"));
        assert_eq!(round.add("Sylas"), LinkResult::NotLinked);
        assert_eq!(round.add("Garen"), LinkResult::AlreadyInChain);
        assert_eq!(round.add("Lux"), LinkResult::Added);
        assert_eq!(round.available(), ["Sylas"]);
        assert_eq!(round.undo(), Some("Lux".to_string()));
        assert_eq!(round.undo(), None);
        assert_eq!(round.add("Lux"), LinkResult::Added);
        assert_eq!(round.add("Sylas"), LinkResult::Added);
        assert_eq!(round.add("Shyvana"), LinkResult::Complete);
        assert_eq!(round.add("Xin Zhao"), LinkResult::Ignored);
        assert_eq!(round.shortest_path(), None);
        assert_eq!(round.submit(), 850);
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(
            round.shortest_path(),
            Some(names(&["Garen", "Jarvan IV", "Shyvana"]).as_slice())
        );
        assert_eq!(
            round.share_text(true),
            "LoL Lore Connections (Daily)\nGaren → Shyvana\nSolved in 3 steps (optimal: 2)\nlolhub.gg/lore"
        );
        assert_eq!(
            round.take_outcome(),
            Some(Outcome {
                attempts: 4,
                score: 850,
                won: true
            })
        );
        assert_eq!(round.take_outcome(), None);
    }

    #[test]
    fn dead_end_loses() {
        let g: LoreGraph = graph();
        let mut round: LoreRound = LoreRound::new(&g, puzzle("Garen", "Cassiopeia"));
        assert_eq!(round.add("Katarina"), LinkResult::Added);
        assert_eq!(round.add("Talon"), LinkResult::Added);
        assert!(round.is_dead_end());
        assert_eq!(round.submit(), 0);
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.undo(), None);
        assert_eq!(round.take_outcome().map(|o| o.won), Some(false));
    }
}
