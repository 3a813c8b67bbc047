pub mod game;
pub mod phase;
pub mod showdown;
pub mod team;
