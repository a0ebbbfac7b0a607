pub mod checklist;
pub mod config;
pub mod data;
pub mod message;
pub mod mood;
pub mod notes;
pub mod tracker;
