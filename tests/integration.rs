// Aggregator test: include tests from tests/rust/* as distinct modules.
// This keeps sources organized while providing a single integration test
// file that Cargo will compile and run.

mod rust_tests {
    pub mod panel_sync {
        include!("rust/panel_sync.rs");
    }
    pub mod config_load {
        include!("rust/config_load.rs");
    }
}

// Re-export tests so the test runner finds them at crate root.
pub use rust_tests::*;
