//! Day 8: Haunted Wasteland

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::{anyhow, bail, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use num_integer::Integer;
use regex::Regex;

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["graph", "math"])]
pub struct Solver;

static NODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)\s*=\s*\((\w+),\s*(\w+)\)$").expect("valid node regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

pub struct Network<'a> {
    turns: Vec<Turn>,
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    /// Steps from `start` until a node accepted by `is_end`, following the
    /// turns cyclically. At least one step is always taken.
    pub fn steps(&self, start: &'a str, is_end: impl Fn(&str) -> bool) -> Result<u64, SolveError> {
        let limit = (self.nodes.len() * self.turns.len()) as u64;
        let mut at = start;
        for (step, turn) in (1..=limit).zip(self.turns.iter().cycle()) {
            let (left, right) = self
                .nodes
                .get(at)
                .copied()
                .ok_or_else(|| SolveError::failed(format!("unknown node {:?}", at)))?;
            at = match turn {
                Turn::Left => left,
                Turn::Right => right,
            };
            if is_end(at) {
                return Ok(step);
            }
        }
        Err(SolveError::failed(format!(
            "walk from {:?} never reaches an end node",
            start
        )))
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network<'_>> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
    let turns = lines
        .next()
        .ok_or_else(|| anyhow!("missing turn instructions"))?
        .chars()
        .map(|c| match c {
            'L' => Ok(Turn::Left),
            'R' => Ok(Turn::Right),
            other => bail!("unknown turn {:?}", other),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    ensure!(!turns.is_empty(), "turn instructions are empty");

    let mut nodes = HashMap::new();
    for line in lines {
        let caps = NODE
            .captures(line)
            .ok_or_else(|| anyhow!("malformed node {:?}", line))?;
        let (Some(name), Some(left), Some(right)) = (caps.get(1), caps.get(2), caps.get(3)) else {
            bail!("malformed node {:?}", line);
        };
        if nodes
            .insert(name.as_str(), (left.as_str(), right.as_str()))
            .is_some()
        {
            bail!("node {:?} is defined twice", name.as_str());
        }
    }

    Ok(Network { turns, nodes })
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_network(input).map_err(invalid_format)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .steps("AAA", |node| node == "ZZZ")
            .map(|steps| steps.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let starts: Vec<&str> = shared
            .nodes
            .keys()
            .copied()
            .filter(|node| node.ends_with('A'))
            .collect();
        if starts.is_empty() {
            return Err(SolveError::failed("no node ends with `A`"));
        }

        starts
            .into_iter()
            .map(|start| shared.steps(start, |node| node.ends_with('Z')))
            .try_fold(1u64, |acc, steps| steps.map(|s| acc.lcm(&s)))
            .map(|steps| steps.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{parse_error, solve};

    const DIRECT: &str = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";

    const REPEATING: &str = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

    const GHOSTS: &str = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

    #[test]
    fn direct_route() {
        assert_eq!(solve::<Solver>(DIRECT, 1), "2");
    }

    #[test]
    fn instructions_repeat() {
        assert_eq!(solve::<Solver>(REPEATING, 1), "6");
    }

    #[test]
    fn ghosts_meet_at_the_lcm() {
        assert_eq!(solve::<Solver>(GHOSTS, 2), "6");
    }

    #[test]
    fn endless_walk_fails() {
        let input = "L\n\nAAA = (BBB, BBB)\nBBB = (AAA, AAA)\nZZZ = (ZZZ, ZZZ)";
        let mut shared = Solver::parse(input).unwrap();
        let err = <Solver as PartSolver<1>>::solve(&mut shared).unwrap_err();
        assert!(err.to_string().contains("never reaches"), "{}", err);
    }

    #[test]
    fn rejects_bad_turns() {
        let err = parse_error::<Solver>("LXR\n\nAAA = (AAA, AAA)");
        assert!(err.to_string().contains("unknown turn"), "{}", err);
    }
}
