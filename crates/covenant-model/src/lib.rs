//! Contract document model and interaction matching for consumer-driven
//! contract testing.
//!
//! Loads recorded consumer/provider contracts from JSON (tolerating legacy
//! schema spellings), and answers set and exactly-one queries against the
//! loaded interactions.
mod criteria;
mod loader;
mod sample;
mod types;

pub use criteria::{Criteria, CriterionValue};
pub use loader::{ContractReader, FsReader};
pub use sample::{is_sample_marker, unwrap_sample_values, SAMPLE_MARKER_JSON_CLASS};
pub use types::{ConsumerContract, ContractError, Interaction, ServiceConsumer, ServiceProvider};
