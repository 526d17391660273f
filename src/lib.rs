pub mod args;
pub mod code;
pub mod history;
pub mod logging;
pub mod plain;
pub mod round;
pub mod scoring;
pub mod ui;
