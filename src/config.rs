//! Runtime configuration for the frame engine.
//!
//! Values are read from the environment (and a `.env` file, if one is
//! present) on first access and may be overridden at runtime.
//!
//! - `FERRUM_PMAP_WORKERS`: number of workers `DataFrame::pmap` splits the
//!   rows across. Default: the available parallelism of the machine.

use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

pub const PMAP_WORKERS_VAR: &str = "FERRUM_PMAP_WORKERS";

// 0 means "not set yet", resolved lazily to the available parallelism.
static PMAP_WORKERS: AtomicUsize = AtomicUsize::new(0);

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();

        if let Ok(value) = std::env::var(PMAP_WORKERS_VAR) {
            match parse_workers(&value) {
                Some(workers) => PMAP_WORKERS.store(workers, Ordering::Relaxed),
                None => log::warn!(
                    "ignoring {}={:?}: expected a positive integer",
                    PMAP_WORKERS_VAR,
                    value
                ),
            }
        }
    });
}

fn parse_workers(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

pub fn pmap_workers() -> usize {
    //! Number of workers used by `DataFrame::pmap`, never less than 1.

    ensure_init();
    match PMAP_WORKERS.load(Ordering::Relaxed) {
        0 => default_workers(),
        n => n,
    }
}

pub fn set_pmap_workers(workers: usize) {
    //! Override the pmap worker count. A value of 0 restores the default.

    ensure_init();
    PMAP_WORKERS.store(workers, Ordering::Relaxed);
}
