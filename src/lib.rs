//! Atlas Jenga: a load-cell driven block-removal game.
//!
//! A tower stands on a scale; a microcontroller streams weight readings over
//! serial. Weight deltas are classified into game events (block removed,
//! tower collapsed) that drive a three-phase game loop with a persistent
//! SQLite leaderboard, rendered in the terminal.

pub mod audio;
pub mod config;
pub mod core;
pub mod input;
pub mod sensor;
pub mod store;
pub mod term;
pub mod types;
