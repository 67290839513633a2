//! Shared fixtures for the enumkit integration tests.
//!
//! The three status enums declare the same cases with each backing shape so
//! that every test can be run against all three.

#![allow(dead_code)]

use enumkit::define_enum;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

define_enum! {
    #[allow(non_camel_case_types)]
    pub enum StringStatus: str {
        PENDING = "pending",
        IN_PROGRESS = "in_progress",
        COMPLETED = "completed",
    }
}

define_enum! {
    #[allow(non_camel_case_types)]
    pub enum IntStatus: i64 {
        PENDING = 1,
        IN_PROGRESS = 2,
        COMPLETED = 3,
    }
}

define_enum! {
    #[allow(non_camel_case_types)]
    pub enum UnitStatus {
        PENDING,
        IN_PROGRESS,
        COMPLETED,
    }
}

define_enum! {
    /// Ticket priority with extended descriptions on some cases.
    pub enum Priority: i64 {
        Low = 10 { description: "Handle when convenient" },
        Normal = 20,
        Urgent = 30 { description: "Page the on-call engineer" },
    }
}

pub const STATUS_NAMES: [&str; 3] = ["PENDING", "IN_PROGRESS", "COMPLETED"];

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Defaults to `enumkit=debug`; set `RUST_LOG` to override.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("enumkit=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
