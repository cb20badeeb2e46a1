use std::collections::HashMap;
use std::ops::Range;

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["ranges"])]
pub struct Solver;

#[derive(Debug, Clone)]
struct MapRange {
    source: Range<i64>,
    offset: i64,
}

#[derive(Debug)]
pub struct CategoryMap {
    target: String,
    ranges: Vec<MapRange>,
}

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<i64>,
    maps: HashMap<String, CategoryMap>,
}

impl CategoryMap {
    /// Split `range` into the pieces produced by this map.
    fn map_range(&self, range: Range<i64>) -> Vec<Range<i64>> {
        let mut mapped = Vec::new();
        let mut unmapped = vec![range];

        for map in &self.ranges {
            let mut remaining = Vec::new();
            for r in unmapped {
                let start = r.start.max(map.source.start);
                let end = r.end.min(map.source.end);
                if start >= end {
                    remaining.push(r);
                    continue;
                }
                mapped.push(start + map.offset..end + map.offset);
                if r.start < start {
                    remaining.push(r.start..start);
                }
                if end < r.end {
                    remaining.push(end..r.end);
                }
            }
            unmapped = remaining;
            if unmapped.is_empty() {
                break;
            }
        }

        mapped.extend(unmapped);
        mapped
    }
}

impl Almanac {
    /// Follow `ranges` from `seed` through every map to the final category.
    fn locations(&self, mut ranges: Vec<Range<i64>>) -> Vec<Range<i64>> {
        let mut category = "seed";
        // a map chain never visits more categories than there are maps
        for _ in 0..=self.maps.len() {
            let Some(map) = self.maps.get(category) else {
                break;
            };
            ranges = ranges.into_iter().flat_map(|r| map.map_range(r)).collect();
            category = &map.target;
        }
        ranges
    }

    fn lowest_location(&self, seeds: Vec<Range<i64>>) -> Result<i64, SolveError> {
        self.locations(seeds)
            .into_iter()
            .filter(|r| !r.is_empty())
            .map(|r| r.start)
            .min()
            .ok_or_else(|| SolveError::SolveFailed("no seeds".into()))
    }
}

impl AocParser for Solver {
    type SharedData = Almanac;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        parse_almanac(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let input = input.replace("\r\n", "\n");
    let mut blocks = input.split("\n\n");

    let seeds = blocks
        .next()
        .and_then(|b| b.trim().strip_prefix("seeds:"))
        .ok_or_else(|| anyhow!("missing 'seeds:' line"))?
        .split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad seed {n:?}")))
        .collect::<anyhow::Result<Vec<i64>>>()?;

    let mut maps = HashMap::new();
    for block in blocks.map(str::trim).filter(|b| !b.is_empty()) {
        let mut lines = block.lines();
        let header = lines.next().unwrap_or_default();
        let (source, target) = header
            .strip_suffix(" map:")
            .and_then(|h| h.split_once("-to-"))
            .ok_or_else(|| anyhow!("bad map header {header:?}"))?;

        let ranges = lines
            .map(|line| -> anyhow::Result<MapRange> {
                let nums = line
                    .split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<i64>, _>>()
                    .with_context(|| format!("bad range {line:?}"))?;
                let [dest, src, len] = nums[..] else {
                    bail!("expected three numbers in {line:?}");
                };
                Ok(MapRange {
                    source: src..src + len,
                    offset: dest - src,
                })
            })
            .collect::<anyhow::Result<_>>()
            .with_context(|| format!("{source}-to-{target} map"))?;

        maps.insert(
            source.to_string(),
            CategoryMap {
                target: target.to_string(),
                ranges,
            },
        );
    }

    Ok(Almanac { seeds, maps })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let seeds = shared.seeds.iter().map(|&s| s..s + 1).collect();
        shared.lowest_location(seeds).map(|v| v.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        if shared.seeds.len() % 2 != 0 {
            return Err(SolveError::SolveFailed("seed ranges need start/length pairs".into()));
        }
        let seeds = shared
            .seeds
            .chunks_exact(2)
            .map(|pair| pair[0]..pair[0] + pair[1])
            .collect();
        shared.lowest_location(seeds).map(|v| v.to_string())
    }
}
