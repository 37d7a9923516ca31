pub mod calendar;
pub mod guard;
pub mod layout;
