pub mod calendar;
pub mod geolocation;
pub mod period;
pub mod storage;
pub mod time;
