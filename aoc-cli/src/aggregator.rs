//! Reorders results arriving from parallel workers
//!
//! Workers finish in any order, but output must follow (year, day, part).
//! The aggregator keeps two min-heaps: the keys still owed, and results that
//! arrived before their turn.

use crate::executor::{SolverResult, WorkItem};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Output position of a result, ordered by year, then day, then part
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl ResultKey {
    /// One key per part of every work item
    pub fn for_work_items(work_items: &[WorkItem]) -> Vec<ResultKey> {
        work_items
            .iter()
            .flat_map(|w| {
                w.parts.clone().map(move |part| ResultKey {
                    year: w.year,
                    day: w.day,
                    part,
                })
            })
            .collect()
    }
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Heap entry that sorts the smallest key to the top
struct Buffered(SolverResult);

impl Ord for Buffered {
    fn cmp(&self, other: &Self) -> Ordering {
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for Buffered {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Buffered {}

impl PartialEq for Buffered {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    buffered: BinaryHeap<Buffered>,
}

impl ResultAggregator {
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            buffered: BinaryHeap::new(),
        }
    }

    /// Accept a result and release every result whose turn has come
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.buffered.push(Buffered(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(Buffered(head))) =
            (self.expected.peek(), self.buffered.peek())
        {
            if ResultKey::from(head) != *next {
                break;
            }
            self.expected.pop();
            if let Some(Buffered(result)) = self.buffered.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Flush whatever is still buffered, in key order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.buffered.drain().map(|Buffered(r)| r).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
