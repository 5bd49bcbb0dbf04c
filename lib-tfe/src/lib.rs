pub use core_tfe::*;

pub mod ai;
pub mod control_flow_helper;
pub mod game;
pub mod gen;
pub mod logic;
