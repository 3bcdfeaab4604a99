//! Core game state, controller and events.

pub mod constants;
pub mod controller;
pub mod events;
pub mod game_loop;
pub mod game_state;
