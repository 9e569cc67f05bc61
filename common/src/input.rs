use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use miette::{miette, IntoDiagnostic, Result, WrapErr};

/// Reads `input.txt` from a crate directory.
///
/// Binaries call this with `env!("CARGO_MANIFEST_DIR")` so every day picks
/// up the input file sitting next to its own `Cargo.toml`.
pub fn load_input(manifest_dir: &str) -> Result<String> {
    let path = Path::new(manifest_dir).join("input.txt");
    std::fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))
}

/// Splits input into lines, dropping `\r` and empty lines.
pub fn non_empty_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
}

/// Parses a whitespace-separated list of integers.
pub fn ints<T>(line: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<T>()
                .map_err(|e| miette!("invalid number {:?}: {}", token, e))
        })
        .collect()
}
