//! # Genetic Connect Four
//!
//! A Connect Four engine paired with a genetic search that evolves fixed-length
//! drop sequences. A strategy's fitness is a replay of its genes on a fresh
//! board, so the game engine doubles as the fitness function.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, and the mutable game engine
//! - [`evolution`] — Genomes, fitness replay, selection/crossover/mutation, generational engine
//! - [`ai`] — Agent trait, the genome-backed agent, and a random opponent
//! - [`exhibition`] — One full two-player game between two agents
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod evolution;
pub mod exhibition;
pub mod game;
