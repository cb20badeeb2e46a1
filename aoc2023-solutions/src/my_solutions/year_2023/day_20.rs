use std::collections::{HashMap, VecDeque};

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 20, tags = ["simulation", "math"])]
pub struct Solver;

const BROADCASTER: &str = "broadcaster";
const FINAL_MACHINE: &str = "rx";
const WARM_UP_PRESSES: usize = 1000;
const MAX_PRESSES: u64 = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Broadcast,
    FlipFlop,
    Conjunction,
    /// Named only as a destination.
    Sink,
}

#[derive(Debug)]
pub struct Network {
    names: Vec<String>,
    kinds: Vec<Kind>,
    outputs: Vec<Vec<usize>>,
    inputs: Vec<Vec<usize>>,
    broadcaster: usize,
}

impl Network {
    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network> {
    let line_re = Regex::new(r"^([%&]?)(\w+) -> (.*)$")?;

    let mut definitions: Vec<(Kind, &str, Vec<&str>)> = Vec::new();
    for (idx, line) in input.lines().map(str::trim).enumerate() {
        if line.is_empty() {
            continue;
        }
        let caps = line_re
            .captures(line)
            .ok_or_else(|| anyhow!("expected `name -> a, b`, got {line:?}"))
            .with_context(|| format!("line {}", idx + 1))?;
        let (prefix, name, targets) = (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
            caps.get(3).map_or("", |m| m.as_str()),
        );
        let kind = match (prefix, name) {
            ("%", _) => Kind::FlipFlop,
            ("&", _) => Kind::Conjunction,
            ("", BROADCASTER) => Kind::Broadcast,
            _ => bail!("line {}: module {name:?} has no type", idx + 1),
        };
        if definitions.iter().any(|(_, n, _)| *n == name) {
            bail!("line {}: module {name:?} defined twice", idx + 1);
        }
        let targets = targets.split(',').map(str::trim).filter(|t| !t.is_empty()).collect();
        definitions.push((kind, name, targets));
    }

    let mut names: Vec<String> = definitions.iter().map(|(_, n, _)| n.to_string()).collect();
    let mut kinds: Vec<Kind> = definitions.iter().map(|(k, _, _)| *k).collect();
    let mut index: HashMap<String, usize> =
        names.iter().enumerate().map(|(i, n)| (n.clone(), i)).collect();

    let mut outputs: Vec<Vec<usize>> = Vec::new();
    for (_, _, targets) in &definitions {
        let ids = targets
            .iter()
            .map(|&t| {
                *index.entry(t.to_string()).or_insert_with(|| {
                    names.push(t.to_string());
                    kinds.push(Kind::Sink);
                    names.len() - 1
                })
            })
            .collect();
        outputs.push(ids);
    }
    outputs.resize(names.len(), Vec::new());

    let broadcaster = kinds
        .iter()
        .position(|&k| k == Kind::Broadcast)
        .ok_or_else(|| anyhow!("missing {BROADCASTER} module"))?;

    let mut inputs = vec![Vec::new(); names.len()];
    for (source, targets) in outputs.iter().enumerate() {
        for &target in targets {
            inputs[target].push(source);
        }
    }

    Ok(Network {
        names,
        kinds,
        outputs,
        inputs,
        broadcaster,
    })
}

/// A pulse travelling from one module to another (`true` = high).
#[derive(Debug, Clone, Copy)]
struct Pulse {
    from: usize,
    to: usize,
    high: bool,
}

/// Mutable module state on top of a [`Network`].
struct Machine<'a> {
    network: &'a Network,
    on: Vec<bool>,
    /// Last pulse remembered per (conjunction, input) pair.
    memory: Vec<HashMap<usize, bool>>,
}

impl<'a> Machine<'a> {
    fn new(network: &'a Network) -> Self {
        let memory = network
            .inputs
            .iter()
            .map(|inputs| inputs.iter().map(|&i| (i, false)).collect())
            .collect();
        Machine {
            network,
            on: vec![false; network.names.len()],
            memory,
        }
    }

    /// Push the button once, reporting every delivered pulse to `observe`.
    fn press(&mut self, mut observe: impl FnMut(Pulse)) {
        let mut queue = VecDeque::from([Pulse {
            from: self.network.broadcaster,
            to: self.network.broadcaster,
            high: false,
        }]);
        while let Some(pulse) = queue.pop_front() {
            observe(pulse);
            let id = pulse.to;
            let out = match self.network.kinds[id] {
                Kind::Broadcast => pulse.high,
                Kind::FlipFlop if pulse.high => continue,
                Kind::FlipFlop => {
                    self.on[id] = !self.on[id];
                    self.on[id]
                }
                Kind::Conjunction => {
                    self.memory[id].insert(pulse.from, pulse.high);
                    !self.memory[id].values().all(|&h| h)
                }
                Kind::Sink => continue,
            };
            queue.extend(self.network.outputs[id].iter().map(|&to| Pulse {
                from: id,
                to,
                high: out,
            }));
        }
    }
}

/// Product of low and high pulse counts over `presses` presses.
fn pulse_product(network: &Network, presses: usize) -> u64 {
    let mut machine = Machine::new(network);
    let (mut low, mut high) = (0u64, 0u64);
    for _ in 0..presses {
        machine.press(|p| if p.high { high += 1 } else { low += 1 });
    }
    low * high
}

/// Fewest presses until `rx` receives a low pulse.
///
/// `rx` must be fed by a single conjunction; each of that conjunction's
/// inputs is assumed to send it a high pulse on a fixed cycle.
fn presses_until_rx_low(network: &Network) -> Result<u64, SolveError> {
    let fail = |msg: String| SolveError::SolveFailed(msg.into());
    let rx = network
        .index_of(FINAL_MACHINE)
        .ok_or_else(|| fail(format!("no {FINAL_MACHINE} module")))?;
    let hub = match network.inputs[rx].as_slice() {
        &[hub] if network.kinds[hub] == Kind::Conjunction => hub,
        _ => return Err(fail(format!("{FINAL_MACHINE} is not fed by a single conjunction"))),
    };

    let mut cycles: HashMap<usize, u64> = HashMap::new();
    let feeders = &network.inputs[hub];
    let mut machine = Machine::new(network);
    for press in 1..=MAX_PRESSES {
        machine.press(|p| {
            if p.to == hub && p.high {
                cycles.entry(p.from).or_insert(press);
            }
        });
        if cycles.len() == feeders.len() {
            for (&feeder, &cycle) in &cycles {
                log::debug!("{} first sends high after {cycle} presses", network.names[feeder]);
            }
            return Ok(cycles.values().fold(1, |acc, &c| num::integer::lcm(acc, c)));
        }
    }
    Err(fail(format!("no low pulse to {FINAL_MACHINE} within {MAX_PRESSES} presses")))
}

impl AocParser for Solver {
    type SharedData = Network;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        parse_network(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(pulse_product(shared, WARM_UP_PRESSES).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        presses_until_rx_low(shared).map(|n| n.to_string())
    }
}
