#![doc(test(attr(deny(warnings))))]

//! Cannon Core turns a collection of expenses paid at mixed frequencies into
//! a single monthly burn figure, a per-category breakdown, and display-ready
//! currency strings, with the persistence, configuration, and shell plumbing
//! that surrounds them.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod finance;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(build = %utils::build_info::current().summary(), "Cannon Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
