pub mod action;
pub mod cli;
pub mod client;
pub mod config;
pub mod evaluate;
pub mod ledger;
pub mod pipeline;
pub mod report;
pub mod task;
pub mod util;
