//! Junction-box clustering: repeatedly join the globally closest pair of
//! unconnected points and track the resulting circuits.

pub mod circuits;
pub mod kdtree;
pub mod ledger;
pub mod solver;

pub mod part1;
pub mod part2;
