#[macro_use]
extern crate lazy_static;

pub mod agent;
pub mod catalog;
pub mod chain;
pub mod config;
pub mod constants;
pub mod gateway;
pub mod logging;
pub mod oplog;
pub mod planner;
pub mod random;
pub mod registry;
pub mod scheduler;
pub mod wallets;
