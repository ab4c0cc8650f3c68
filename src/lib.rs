pub mod api;
pub mod chrono_util;
pub mod config;
pub mod history;
pub mod manifest;
pub mod mark;
pub mod parser;
pub mod pipeline;
pub mod ranking;
pub mod schema;
pub mod snapshot;
