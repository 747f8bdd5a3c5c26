#![forbid(unsafe_code)]

pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod install;
pub mod logging;
pub mod project;
pub mod registry;
pub mod site;
pub mod stack;
pub mod version;
