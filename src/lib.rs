//! Terminal bank account manager backed by a flat file, with a per-account
//! transaction log.

pub mod account;
pub mod audit;
pub mod cli;
pub mod config;
pub mod database;
