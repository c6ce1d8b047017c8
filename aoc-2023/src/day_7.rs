//! Day 7: Camel Cards

use std::cmp::Ordering;

use anyhow::{Context, anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

use crate::utils::{invalid_format, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["sorting"])]
pub struct Solver;

const CARDS: &str = "23456789TJQKA";
const JOKER: u8 = 9;

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

impl HandType {
    /// Classifies a hand; with `jokers`, every `J` joins the largest group.
    pub fn of(cards: &[u8; 5], jokers: bool) -> Self {
        let wild = if jokers {
            cards.iter().filter(|c| **c == JOKER).count()
        } else {
            0
        };
        let mut groups: Vec<usize> = cards
            .iter()
            .filter(|c| !(jokers && **c == JOKER))
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();
        match groups.first_mut() {
            Some(largest) => *largest += wild,
            None => groups.push(wild),
        }

        match groups.as_slice() {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

/// Five cards as ranks `0..13` (`2` lowest, `A` highest) and the bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    pub cards: [u8; 5],
    pub bid: u64,
}

impl Hand {
    fn strength(&self, jokers: bool) -> (HandType, [u8; 5]) {
        let mut ranks = self.cards;
        if jokers {
            // a joker is weaker than every other card when breaking ties
            for rank in ranks.iter_mut() {
                *rank = match (*rank).cmp(&JOKER) {
                    Ordering::Less => *rank + 1,
                    Ordering::Equal => 0,
                    Ordering::Greater => *rank,
                };
            }
        }
        (HandType::of(&self.cards, jokers), ranks)
    }
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected `CARDS BID`"))?;
    ensure!(cards.len() == 5, "hand {:?} must hold five cards", cards);

    let mut ranks = [0u8; 5];
    for (rank, card) in ranks.iter_mut().zip(cards.chars()) {
        *rank = CARDS
            .find(card)
            .ok_or_else(|| anyhow!("unknown card {:?}", card))? as u8;
    }
    let bid = bid.trim().parse().context("bid")?;
    Ok(Hand { cards: ranks, bid })
}

fn total_winnings(hands: &[Hand], jokers: bool) -> u64 {
    hands
        .iter()
        .map(|hand| (hand.strength(jokers), hand.bid))
        .sorted_unstable()
        .zip(1..)
        .map(|((_, bid), rank)| bid * rank)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, parse_hand).map_err(invalid_format)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, true).to_string())
    }
}
