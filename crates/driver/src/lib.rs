//! Frame driver: the per-frame control logic of the benchmark.
//!
//! # Invariants
//! - One render call per `on_frame`, always, even when no rate is reported.
//! - The ambient spin advances every frame regardless of input state.
//! - `on_frame` has no dependency on any scheduling primitive; hosts feed
//!   it timestamps, tests feed it synthetic ones.

pub mod clock;
pub mod run;
pub mod session;

pub use clock::FrameClock;
pub use run::drive;
pub use session::{AMBIENT_SPIN, BenchSession};

pub fn crate_info() -> &'static str {
    "cubefield-driver v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("driver"));
    }
}
