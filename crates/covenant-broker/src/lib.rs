//! Broker retrieval and response-fixture extraction for contract documents.
//!
//! Builds the canonical latest-contract address for a provider/consumer
//! pair, fetches the published document over a pluggable HTTP transport, and
//! extracts response fixtures keyed by provider state.
mod client;
mod fixtures;
mod transport;

pub use client::{latest_contract_url, BrokerClient, BrokerConfig};
pub use fixtures::ResponseFixtureClient;
pub use transport::{BrokerError, ContractTransport, HttpTransport};
