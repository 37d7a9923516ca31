pub mod admin;
pub mod components;
mod panel;
pub mod repository;
pub mod staff;
pub mod utils;

pub use panel::DashboardPage;
