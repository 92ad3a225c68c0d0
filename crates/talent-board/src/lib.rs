pub mod ats;
pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod jobs;
pub mod search;
pub mod telemetry;
