use miette::*;

use aoc2023_day_9::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = aoc_common::load_input(env!("CARGO_MANIFEST_DIR"))?;
    let result = part1::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
