//! FraudSight Registry
//!
//! Advisor registry access and approximate identity resolution.
//!
//! This crate provides:
//! - The read-only `RegistryStore` abstraction and an in-memory snapshot
//! - The tiered advisor resolver with confidence scoring
//! - Heuristic extraction of candidate advisor names from free text

pub mod advisor;
pub mod names;
pub mod resolver;
pub mod store;

pub use advisor::{AdvisorMatch, AdvisorRecord, AdvisorStatus, CredentialCheck, MatchType};
pub use names::NameExtractor;
pub use resolver::{match_confidence, AdvisorResolver};
pub use store::{InMemoryRegistry, RegistryStore};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::advisor::{AdvisorMatch, AdvisorRecord, AdvisorStatus, MatchType};
    pub use crate::names::NameExtractor;
    pub use crate::resolver::{match_confidence, AdvisorResolver};
    pub use crate::store::{InMemoryRegistry, RegistryStore};
}
