pub mod grid;
pub mod leaderboard;
pub mod status;
