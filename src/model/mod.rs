pub mod config;
pub mod frame;
pub mod grid;
pub mod leaderboard;
pub mod snapshot;
pub mod vision;
