use miette::*;
use nom::{
    bytes::complete::tag,
    character::complete::{alpha1, u64 as number},
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};

#[derive(Debug)]
pub(crate) struct Game<'a> {
    pub(crate) id: u64,
    /// Each round is a list of (quantity, color) draws.
    pub(crate) rounds: Vec<Vec<(u64, &'a str)>>,
}

fn round(input: &str) -> IResult<&str, Vec<(u64, &str)>> {
    separated_list1(tag(", "), separated_pair(number, tag(" "), alpha1))(input)
}

fn game(input: &str) -> IResult<&str, Game> {
    let (input, _) = tag("Game ")(input)?;
    let (input, id) = number(input)?;
    let (input, _) = tag(": ")(input)?;
    let (input, rounds) = separated_list1(tag("; "), round)(input)?;
    Ok((input, Game { id, rounds }))
}

pub(crate) fn parse_games(input: &str) -> Result<Vec<Game>> {
    aoc_common::non_empty_lines(input)
        .map(|line| {
            let (rest, parsed) =
                game(line).map_err(|e| miette!("failed to parse {:?}: {}", line, e))?;
            if !rest.is_empty() {
                bail!("trailing garbage in {:?}: {:?}", line, rest);
            }
            Ok(parsed)
        })
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let games = parse_games(input)?;

    let available = |color: &str| match color {
        "red" => Some(12),
        "green" => Some(13),
        "blue" => Some(14),
        _ => None,
    };

    let sum: u64 = games
        .iter()
        .filter(|game| {
            game.rounds
                .iter()
                .flatten()
                .all(|&(quantity, color)| available(color).is_some_and(|limit| quantity <= limit))
        })
        .map(|game| game.id)
        .sum();

    Ok(sum.to_string())
}
