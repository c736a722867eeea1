use fxhash::FxHashMap;
use tracing::debug;

use super::PuzzleError;
use crate::parser_combinators::{complete, pair, signed, tag, terminated};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct JunctionBox {
    x: i64,
    y: i64,
    z: i64,
}

impl JunctionBox {
    fn distance_squared(&self, other: &JunctionBox) -> u128 {
        let d = |a: i64, b: i64| u128::from(a.abs_diff(b)).pow(2);
        d(self.x, other.x) + d(self.y, other.y) + d(self.z, other.z)
    }
}

fn parse(lines: &[&str]) -> Result<Vec<JunctionBox>, PuzzleError> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, &line)| {
            let ((x, y), z) = complete(
                pair(
                    pair(terminated(signed, tag(",")), terminated(signed, tag(","))),
                    signed,
                ),
                i,
                line,
            )?;
            Ok(JunctionBox { x, y, z })
        })
        .collect()
}

/// Every pair of boxes, closest first. Ties keep input order.
fn closest_pairs(boxes: &[JunctionBox]) -> Vec<(usize, usize)> {
    let mut pairs = (0..boxes.len())
        .flat_map(|i| (i + 1..boxes.len()).map(move |j| (i, j)))
        .collect::<Vec<_>>();

    pairs.sort_by_cached_key(|&(i, j)| (boxes[i].distance_squared(&boxes[j]), i, j));

    pairs
}

/// Which circuit every box belongs to, and the members of every circuit.
struct Circuits {
    circuit_of: Vec<usize>,
    members: FxHashMap<usize, Vec<usize>>,
}

impl Circuits {
    fn new(count: usize) -> Self {
        Circuits {
            circuit_of: (0..count).collect(),
            members: (0..count).map(|i| (i, vec![i])).collect(),
        }
    }

    /// Joins the circuits of `a` and `b`, returning false when they were
    /// already one.
    fn connect(&mut self, a: usize, b: usize) -> bool {
        let (into, from) = (self.circuit_of[a], self.circuit_of[b]);
        if into == from {
            return false;
        }

        // move the smaller circuit over
        let (into, from) = if self.members[&into].len() < self.members[&from].len() {
            (from, into)
        } else {
            (into, from)
        };

        let moved = self.members.remove(&from).unwrap_or_default();
        for &member in &moved {
            self.circuit_of[member] = into;
        }
        self.members.entry(into).or_default().extend(moved);

        debug!(a, b, circuits = self.members.len(), "circuits merged");
        true
    }

    fn count(&self) -> usize {
        self.members.len()
    }

    fn sizes(&self) -> Vec<usize> {
        self.members.values().map(Vec::len).collect()
    }
}

pub fn solve(lines: &[&str], connections: usize) -> Result<usize, PuzzleError> {
    let boxes = parse(lines)?;
    let mut circuits = Circuits::new(boxes.len());

    for (a, b) in closest_pairs(&boxes).into_iter().take(connections) {
        circuits.connect(a, b);
    }

    let mut sizes = circuits.sizes();
    sizes.sort_unstable_by(|a, b| b.cmp(a));

    Ok(sizes.iter().take(3).product())
}

pub fn bonus(lines: &[&str]) -> Result<i128, PuzzleError> {
    let boxes = parse(lines)?;
    if boxes.len() < 2 {
        return Err(PuzzleError::NoSolution("need at least two junction boxes"));
    }

    let mut circuits = Circuits::new(boxes.len());

    for (a, b) in closest_pairs(&boxes) {
        if circuits.connect(a, b) && circuits.count() == 1 {
            return Ok(i128::from(boxes[a].x) * i128::from(boxes[b].x));
        }
    }

    Err(PuzzleError::NoSolution("the boxes never form a single circuit"))
}
