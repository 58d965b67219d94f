pub mod config;
pub mod events;
pub mod export;
pub mod notify;
pub mod set;
pub mod today;
pub mod week;
