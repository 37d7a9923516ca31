pub mod admin_users;
pub mod dashboard;
pub mod home;
pub mod log_work;
pub mod login;
pub mod reports;

pub use admin_users::AdminUsersPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use log_work::LogWorkPage;
pub use login::LoginPage;
pub use reports::ReportsPage;
