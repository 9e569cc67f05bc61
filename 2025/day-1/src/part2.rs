use chumsky::Parser;
use miette::*;

use crate::part1::{parser, DIAL_SIZE, DIAL_START};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    // Every individual click counts, not just the final resting position.
    let mut position = DIAL_START;
    let mut zero_hits = 0u64;
    for rotation in rotations {
        let step = if rotation < 0 { -1 } else { 1 };
        for _ in 0..rotation.abs() {
            position = (position + step).rem_euclid(DIAL_SIZE);
            if position == 0 {
                zero_hits += 1;
            }
        }
    }

    Ok(zero_hits.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "L68
L30
R48
L5
R60
L55
L1
L99
R14
L82";
        assert_eq!("6", process(input)?);
        Ok(())
    }

    #[test]
    fn passing_zero_mid_rotation_counts() -> Result<()> {
        // 50 -> 0 (hit) -> continues to 95.
        assert_eq!("1", process("L55")?);
        Ok(())
    }
}
