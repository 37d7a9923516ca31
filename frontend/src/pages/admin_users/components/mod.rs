pub mod form;
pub mod list;
pub mod role_summary;
