pub mod analysis;
mod auth;
pub mod client;
mod logs;
pub mod mock;
pub mod types;
mod users;

pub use analysis::AnalysisClient;
pub use client::*;
pub use types::*;
