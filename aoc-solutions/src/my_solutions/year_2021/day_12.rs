//! Day 12: Passage Pathing

use crate::utils::parse_lines;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;
use thiserror::Error;

const START: &str = "start";
const END: &str = "end";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 12, tags = ["2021", "graph", "dfs"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaveKind {
    Start,
    End,
    Big,
    Small,
}

impl CaveKind {
    pub fn of(name: &str) -> Result<Self, GraphError> {
        let letters = || name.chars().filter(|c| c.is_alphabetic());
        match name {
            START => Ok(CaveKind::Start),
            END => Ok(CaveKind::End),
            _ if letters().next().is_none() => Err(GraphError::InvalidName(name.to_string())),
            _ if letters().all(char::is_uppercase) => Ok(CaveKind::Big),
            _ if letters().all(char::is_lowercase) => Ok(CaveKind::Small),
            _ => Err(GraphError::InvalidName(name.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid cave name '{0}'")]
    InvalidName(String),
    #[error("missing '{0}' cave")]
    MissingCave(&'static str),
    #[error("big caves '{0}' and '{1}' are connected, so paths are unbounded")]
    AdjacentBigCaves(String, String),
}

/// Undirected cave system with caves addressed by index
#[derive(Debug, Clone)]
pub struct CaveGraph {
    names: Vec<String>,
    kinds: Vec<CaveKind>,
    connections: Vec<Vec<usize>>,
    start: usize,
}

impl CaveGraph {
    pub fn new<'a>(
        edges: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, GraphError> {
        let mut graph = CaveGraph {
            names: Vec::new(),
            kinds: Vec::new(),
            connections: Vec::new(),
            start: 0,
        };
        let mut ids: HashMap<&str, usize> = HashMap::new();

        for (a, b) in edges {
            let a = graph.cave_id(&mut ids, a)?;
            let b = graph.cave_id(&mut ids, b)?;
            if graph.kinds[a] == CaveKind::Big && graph.kinds[b] == CaveKind::Big {
                return Err(GraphError::AdjacentBigCaves(
                    graph.names[a].clone(),
                    graph.names[b].clone(),
                ));
            }
            graph.connections[a].push(b);
            graph.connections[b].push(a);
        }

        graph.start = *ids.get(START).ok_or(GraphError::MissingCave(START))?;
        if !ids.contains_key(END) {
            return Err(GraphError::MissingCave(END));
        }
        Ok(graph)
    }

    fn cave_id<'a>(
        &mut self,
        ids: &mut HashMap<&'a str, usize>,
        name: &'a str,
    ) -> Result<usize, GraphError> {
        if let Some(&id) = ids.get(name) {
            return Ok(id);
        }
        let id = self.names.len();
        self.kinds.push(CaveKind::of(name)?);
        self.names.push(name.to_string());
        self.connections.push(Vec::new());
        ids.insert(name, id);
        Ok(id)
    }

    /// Count distinct start-to-end paths
    ///
    /// Small caves are visited at most once, except that a single small cave
    /// may be visited twice when `allow_one_revisit` is set. The start cave is
    /// never re-entered.
    pub fn count_paths(&self, allow_one_revisit: bool) -> u64 {
        let mut visited = vec![false; self.names.len()];
        self.count_from(self.start, &mut visited, allow_one_revisit)
    }

    fn count_from(&self, cave: usize, visited: &mut [bool], revisit_available: bool) -> u64 {
        let mut paths = 0;
        for &next in &self.connections[cave] {
            paths += match self.kinds[next] {
                CaveKind::Start => 0,
                CaveKind::End => 1,
                CaveKind::Big => self.count_from(next, visited, revisit_available),
                CaveKind::Small if !visited[next] => {
                    visited[next] = true;
                    let found = self.count_from(next, visited, revisit_available);
                    visited[next] = false;
                    found
                }
                CaveKind::Small if revisit_available => self.count_from(next, visited, false),
                CaveKind::Small => 0,
            };
        }
        paths
    }
}

impl AocParser for Solver {
    type SharedData<'a> = CaveGraph;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let edges = parse_lines(input, |line| {
            line.trim()
                .split_once('-')
                .filter(|(a, b)| !a.is_empty() && !b.is_empty())
                .ok_or_else(|| anyhow!("expected '<cave>-<cave>'"))
        })?;
        CaveGraph::new(edges).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(graph: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(graph.count_paths(false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(graph: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(graph.count_paths(true).to_string())
    }
}
