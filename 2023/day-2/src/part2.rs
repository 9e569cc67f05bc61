use std::collections::HashMap;

use itertools::Itertools;
use miette::*;

use crate::part1::parse_games;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let games = parse_games(input)?;

    // The power of a game is the product of the fewest cubes per color
    // that make all of its rounds possible.
    let sum: u64 = games
        .iter()
        .map(|game| {
            let mut needed: HashMap<&str, u64> = HashMap::new();
            for &(quantity, color) in game.rounds.iter().flatten() {
                let entry = needed.entry(color).or_default();
                *entry = (*entry).max(quantity);
            }
            needed.values().product::<u64>()
        })
        .sum1()
        .unwrap_or(0);

    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";
        assert_eq!("2286", process(input)?);
        Ok(())
    }
}
