use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["sorting"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

/// How `J` is scored: as a jack, or as a wildcard that ranks lowest.
#[derive(Debug, Clone, Copy)]
pub struct CardRules {
    pub jokers: bool,
}

impl CardRules {
    fn card_value(&self, label: u8) -> u8 {
        match label {
            b'A' => 14,
            b'K' => 13,
            b'Q' => 12,
            b'J' if self.jokers => 1,
            b'J' => 11,
            b'T' => 10,
            digit => digit - b'0',
        }
    }

    fn hand_type(&self, cards: &[u8; 5]) -> HandType {
        let jokers = if self.jokers {
            cards.iter().filter(|&&c| c == b'J').count()
        } else {
            0
        };
        let mut counts: Vec<usize> = cards
            .iter()
            .filter(|&&c| !(self.jokers && c == b'J'))
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();

        // jokers join the largest group
        match counts.first_mut() {
            Some(largest) => *largest += jokers,
            None => counts.push(jokers),
        }

        match counts[..] {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }

    fn sort_key(&self, cards: &[u8; 5]) -> (HandType, [u8; 5]) {
        (self.hand_type(cards), cards.map(|c| self.card_value(c)))
    }

    /// Sum of rank * bid with hands ranked weakest first.
    pub fn winnings(&self, hands: &[Hand]) -> u64 {
        hands
            .iter()
            .sorted_by_cached_key(|hand| self.sort_key(&hand.cards))
            .enumerate()
            .map(|(rank, hand)| (rank as u64 + 1) * hand.bid)
            .sum()
    }
}

#[derive(Debug, Clone)]
pub struct Hand {
    cards: [u8; 5],
    bid: u64,
}

impl AocParser for Solver {
    type SharedData = Vec<Hand>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| parse_hand(line.trim()).with_context(|| format!("line {}", idx + 1)))
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<cards> <bid>'"))?;
    let cards: [u8; 5] = cards
        .as_bytes()
        .try_into()
        .map_err(|_| anyhow!("a hand has five cards, got {cards:?}"))?;
    if let Some(bad) = cards.iter().find(|&&c| !b"AKQJT98765432".contains(&c)) {
        bail!("unknown card {:?}", *bad as char);
    }
    Ok(Hand {
        cards,
        bid: bid.trim().parse()?,
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(CardRules { jokers: false }.winnings(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(CardRules { jokers: true }.winnings(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "32T3K 765\nT55J5 684\nKK677 28\nKTJJT 220\nQQQJA 483\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6440");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "5905");
    }

    #[test]
    fn test_hand_types() {
        let plain = CardRules { jokers: false };
        let wild = CardRules { jokers: true };
        assert_eq!(plain.hand_type(b"KTJJT"), HandType::TwoPair);
        assert_eq!(wild.hand_type(b"KTJJT"), HandType::FourOfAKind);
        assert_eq!(wild.hand_type(b"JJJJJ"), HandType::FiveOfAKind);
        assert_eq!(plain.hand_type(b"23332"), HandType::FullHouse);
        assert_eq!(wild.hand_type(b"2345J"), HandType::OnePair);
        assert!(wild.sort_key(b"JKKK2") < wild.sort_key(b"QQQQ2"));
    }

    #[test]
    fn test_rejects_short_hand() {
        assert!(Solver::parse("AKQ 10").is_err());
    }
}
