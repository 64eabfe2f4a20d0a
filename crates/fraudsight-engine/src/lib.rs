//! FraudSight Engine
//!
//! The orchestration layer over the analysis core. Callers hand it raw
//! text and a language tag; it returns flags, metadata, risk assessment,
//! advisor matches, narrative, and recommendations as plain structured
//! data. No transport framing lives here.

pub mod scan;

pub use scan::{dedupe_by_registration, ScanReport, ScanService, MIN_TEXT_LENGTH};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::scan::{ScanReport, ScanService};
}
