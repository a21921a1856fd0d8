//! Day 16: Proboscidea Volcanium
//!
//! Branch-and-bound over walk-and-open move sequences. Paths carry the
//! pressure already locked in plus an optimistic bound; a bucket queue pops
//! the most promising branch first and anything bounded below the best
//! known path is dropped.

use std::collections::VecDeque;

use aoc_runner::{Solution, SolveError};
use aoc_runner_macros::RegisterSolution;

use crate::util;

const TIME_LIMIT: u32 = 30;
const START_VALVE: &str = "AA";
/// Committed-flow range covered by one priority bucket.
const BUCKET_RANGE: u64 = 10;

struct Valve {
    name: String,
    flow: u64,
    /// Step sequences to every other valve: `paths[target]` lists the
    /// valve indices walked in order, target last, empty when unreachable
    /// or for the valve itself.
    paths: Vec<Vec<usize>>,
}

fn parse_valve_line(line: &str) -> Result<(String, u64, Vec<String>), SolveError> {
    let malformed = || SolveError::InvalidInput(format!("malformed valve '{line}'"));
    let rest = line.strip_prefix("Valve ").ok_or_else(malformed)?;
    let (name, rest) = rest.split_once(" has flow rate=").ok_or_else(malformed)?;
    let (flow, rest) = rest.split_once(';').ok_or_else(malformed)?;
    // "; tunnels lead to valves ..." with singular forms for one tunnel
    let (_, tunnels) = rest.rsplit_once("valve").ok_or_else(malformed)?;
    let tunnels = tunnels.strip_prefix('s').unwrap_or(tunnels);
    let names: Vec<String> = tunnels
        .split(',')
        .map(|name| name.trim().to_string())
        .collect();
    if names.iter().any(String::is_empty) {
        return Err(malformed());
    }
    Ok((name.to_string(), util::parse_num(flow)?, names))
}

/// Parent links of a breadth-first tree rooted at `root`.
fn bfs_parents(adjacency: &[Vec<usize>], root: usize) -> Vec<Option<usize>> {
    let mut parents = vec![None; adjacency.len()];
    let mut explored = vec![false; adjacency.len()];
    explored[root] = true;
    let mut queue = VecDeque::from([root]);
    while let Some(from) = queue.pop_front() {
        for &to in &adjacency[from] {
            if !explored[to] {
                explored[to] = true;
                parents[to] = Some(from);
                queue.push_back(to);
            }
        }
    }
    parents
}

/// Steps from `root` to `target` in walking order, target last.
fn walk(parents: &[Option<usize>], root: usize, target: usize) -> Vec<usize> {
    let mut steps = Vec::new();
    let mut position = target;
    while position != root {
        steps.push(position);
        match parents[position] {
            Some(parent) => position = parent,
            None => return Vec::new(),
        }
    }
    steps.reverse();
    steps
}

/// Parse the scan into valves sorted by descending flow, each carrying
/// shortest step sequences to every other valve.
fn parse_valves(input: &str) -> Result<Vec<Valve>, SolveError> {
    let mut records: Vec<(String, u64, Vec<String>)> = input
        .lines()
        .map(parse_valve_line)
        .collect::<Result<_, _>>()?;
    if records.is_empty() {
        return Err(SolveError::InvalidInput("empty valve scan".to_string()));
    }
    // flow-descending so the greedy move always comes first
    records.sort_by(|a, b| b.1.cmp(&a.1));

    let adjacency: Vec<Vec<usize>> = records
        .iter()
        .map(|(_, _, tunnels)| {
            tunnels
                .iter()
                .map(|tunnel| {
                    records
                        .iter()
                        .position(|(name, _, _)| name == tunnel)
                        .ok_or_else(|| {
                            SolveError::InvalidInput(format!(
                                "tunnel to unknown valve '{tunnel}'"
                            ))
                        })
                })
                .collect()
        })
        .collect::<Result<_, _>>()?;

    let count = records.len();
    let mut valves: Vec<Valve> = records
        .into_iter()
        .map(|(name, flow, _)| Valve {
            name,
            flow,
            paths: vec![Vec::new(); count],
        })
        .collect();
    for source in 0..count {
        let parents = bfs_parents(&adjacency, source);
        for target in 0..count {
            if target != source {
                valves[source].paths[target] = walk(&parents, source, target);
            }
        }
    }
    Ok(valves)
}

/// Pressure released through the deadline by a valve opened at `minute`.
fn net_flow(rate: u64, minute: u32) -> u64 {
    (TIME_LIMIT - minute) as u64 * rate
}

#[derive(Clone)]
struct SearchPath {
    position: usize,
    time_used: u32,
    /// Pressure already locked in by opened valves.
    min_flow: u64,
    /// Optimistic completion: every remaining valve opens in flow order,
    /// one minute apart.
    max_flow: u64,
    open: Vec<bool>,
}

impl SearchPath {
    fn starting_at(position: usize, count: usize) -> SearchPath {
        SearchPath {
            position,
            time_used: 0,
            min_flow: 0,
            max_flow: 0,
            open: vec![false; count],
        }
    }

    fn can_continue(&self) -> bool {
        self.time_used < TIME_LIMIT
    }

    /// No move left worth making; collapse the bound onto the result.
    fn terminate(&mut self) {
        self.time_used = TIME_LIMIT;
        self.max_flow = self.min_flow;
    }

    fn is_better_than(&self, other: &SearchPath) -> bool {
        self.min_flow > other.min_flow
            || (self.min_flow == other.min_flow && self.max_flow > other.max_flow)
    }

    /// Walk to `target` and open it.
    fn advance(&mut self, valves: &[Valve], target: usize) {
        let steps = &valves[self.position].paths[target];
        debug_assert!(!steps.is_empty());
        for &step in steps {
            self.position = step;
            self.time_used += 1;
        }
        // opening costs one more minute; flow starts the minute after
        self.time_used += 1;
        self.open[target] = true;
        self.min_flow += net_flow(valves[target].flow, self.time_used);
        self.max_flow = self.bound(valves);
    }

    fn bound(&self, valves: &[Valve]) -> u64 {
        let mut total = self.min_flow;
        let mut minute = self.time_used + 1;
        for (index, valve) in valves.iter().enumerate() {
            if minute >= TIME_LIMIT {
                break;
            }
            if self.open[index] || valve.flow == 0 {
                continue;
            }
            total += net_flow(valve.flow, minute);
            minute += 1;
        }
        total
    }
}

/// Closed valves worth opening that are reachable in time to release any
/// pressure, in flow-descending order.
fn possible_moves(valves: &[Valve], path: &SearchPath) -> Vec<usize> {
    (0..valves.len())
        .filter(|&target| {
            if target == path.position || path.open[target] || valves[target].flow == 0 {
                return false;
            }
            let distance = valves[path.position].paths[target].len() as u32;
            distance > 0 && path.time_used + distance + 1 < TIME_LIMIT
        })
        .collect()
}

/// FIFO buckets keyed by committed flow; pops drain the fullest bucket
/// first so branches that lock pressure in early get explored early.
#[derive(Default)]
struct PathQueue {
    buckets: Vec<VecDeque<SearchPath>>,
}

impl PathQueue {
    fn push(&mut self, path: SearchPath) {
        let bucket = (path.min_flow / BUCKET_RANGE) as usize;
        if bucket >= self.buckets.len() {
            self.buckets.resize_with(bucket + 1, VecDeque::new);
        }
        self.buckets[bucket].push_back(path);
    }

    fn pop(&mut self) -> Option<SearchPath> {
        self.buckets.iter_mut().rev().find_map(VecDeque::pop_front)
    }
}

/// Advance `path` by its best move and queue clones for the alternatives.
/// Returns false once the path has terminated.
fn run_step(queue: &mut PathQueue, valves: &[Valve], path: &mut SearchPath) -> bool {
    if !path.can_continue() {
        return false;
    }
    let moves = possible_moves(valves, path);
    let Some((&greedy, branches)) = moves.split_first() else {
        path.terminate();
        return false;
    };
    for &branch in branches {
        let mut fork = path.clone();
        fork.advance(valves, branch);
        queue.push(fork);
    }
    path.advance(valves, greedy);
    true
}

/// Most pressure releasable in thirty minutes starting at valve AA.
fn best_total_flow(valves: &[Valve]) -> Result<u64, SolveError> {
    let start = valves
        .iter()
        .position(|valve| valve.name == START_VALVE)
        .ok_or_else(|| {
            SolveError::InvalidInput(format!("scan is missing valve {START_VALVE}"))
        })?;

    let mut queue = PathQueue::default();

    // greedy seed establishes the pruning baseline
    let mut best = SearchPath::starting_at(start, valves.len());
    while run_step(&mut queue, valves, &mut best) {}

    while let Some(mut path) = queue.pop() {
        if path.max_flow <= best.min_flow {
            continue;
        }
        while run_step(&mut queue, valves, &mut path) {
            if path.is_better_than(&best) {
                best = path.clone();
            }
            if path.max_flow <= best.min_flow {
                break;
            }
        }
        if path.is_better_than(&best) {
            best = path;
        }
    }

    Ok(best.min_flow)
}

pub fn maximum_pressure_release(input: &str) -> Result<u64, SolveError> {
    let valves = parse_valves(input)?;
    best_total_flow(&valves)
}

#[derive(RegisterSolution)]
#[solution(day = 16, part = 1)]
#[input(path = "inputs/day16.txt")]
#[input(path = "inputs/day16_example.txt", kind = example, embedded)]
pub struct Part1;

impl Solution for Part1 {
    fn run(&self, input: &str) -> Result<String, SolveError> {
        Ok(maximum_pressure_release(input)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = include_str!("inputs/day16_example.txt");

    #[test]
    fn test_part1_example() {
        assert_eq!(maximum_pressure_release(EXAMPLE).unwrap(), 1651);
    }

    #[test]
    fn test_parse_singular_tunnel() {
        let (name, flow, tunnels) =
            parse_valve_line("Valve HH has flow rate=22; tunnel leads to valve GG").unwrap();
        assert_eq!(name, "HH");
        assert_eq!(flow, 22);
        assert_eq!(tunnels, ["GG"]);
    }

    #[test]
    fn test_paths_are_shortest_walks() {
        let valves = parse_valves(EXAMPLE).unwrap();
        let start = valves.iter().position(|v| v.name == "AA").unwrap();
        let jj = valves.iter().position(|v| v.name == "JJ").unwrap();
        let hh = valves.iter().position(|v| v.name == "HH").unwrap();
        // AA -> II -> JJ and AA -> DD -> EE -> FF -> GG -> HH
        assert_eq!(valves[start].paths[jj].len(), 2);
        assert_eq!(valves[start].paths[hh].len(), 5);
        assert_eq!(*valves[start].paths[hh].last().unwrap(), hh);
    }

    #[test]
    fn test_zero_flow_scan_releases_nothing() {
        let input = "Valve AA has flow rate=0; tunnels lead to valves BB\n\
                     Valve BB has flow rate=0; tunnels lead to valves AA\n";
        assert_eq!(maximum_pressure_release(input).unwrap(), 0);
    }

    #[test]
    fn test_two_valve_scan() {
        // open BB (rate 9) at minute 2, then nothing else to do
        let input = "Valve AA has flow rate=0; tunnels lead to valves BB\n\
                     Valve BB has flow rate=9; tunnel leads to valve AA\n";
        assert_eq!(maximum_pressure_release(input).unwrap(), 28 * 9);
    }

    #[test]
    fn test_missing_start_valve() {
        let input = "Valve BB has flow rate=9; tunnel leads to valve BB\n";
        assert!(matches!(
            maximum_pressure_release(input),
            Err(SolveError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_far_big_valve_beats_near_small_one() {
        // CC first: 27 * 100 + 25 * 2 = 2750; BB first only reaches 2656
        let input = "Valve AA has flow rate=0; tunnels lead to valves BB\n\
                     Valve BB has flow rate=2; tunnels lead to valves AA, CC\n\
                     Valve CC has flow rate=100; tunnel leads to valve BB\n";
        assert_eq!(maximum_pressure_release(input).unwrap(), 2750);
    }
}
