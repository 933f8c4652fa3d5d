//! Dungeon Sim - Turn-Based Dungeon Combat Simulation

pub mod combat;
pub mod core;
pub mod entity;
pub mod simulation;
