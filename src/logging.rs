use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;
use colored::*;

lazy_static::lazy_static! {
    static ref VERBOSE: AtomicBool = AtomicBool::new(false);
}

/// Enable debug-level log lines. Set once from the CLI before the run starts.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn log_info(message: &str) {
    log_with_level("INFO".green(), message);
}

pub fn log_error(message: &str) {
    log_with_level("ERROR".red(), message);
}

pub fn log_debug(message: &str) {
    if VERBOSE.load(Ordering::Relaxed) {
        log_with_level("DEBUG".blue(), message);
    }
}

fn log_with_level(level: ColoredString, message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    eprintln!("[{}] {} - {}", timestamp, level, message);
}
