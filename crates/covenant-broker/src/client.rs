//! Broker client: canonical contract addresses and latest-contract fetch.

use std::sync::Arc;

use covenant_model::ConsumerContract;

use crate::transport::{BrokerError, ContractTransport, HttpTransport};

#[derive(Debug, Clone)]
/// Public struct `BrokerConfig` used across covenant components.
pub struct BrokerConfig {
    pub base_url: String,
    pub request_timeout_ms: u64,
}

#[derive(Clone)]
/// Client for retrieving published contract documents from a broker.
pub struct BrokerClient {
    config: BrokerConfig,
    transport: Arc<dyn ContractTransport>,
}

impl BrokerClient {
    pub fn new(config: BrokerConfig) -> Result<Self, BrokerError> {
        let transport = Arc::new(HttpTransport::new(config.request_timeout_ms)?);
        Ok(Self { config, transport })
    }

    pub fn with_transport(config: BrokerConfig, transport: Arc<dyn ContractTransport>) -> Self {
        Self { config, transport }
    }

    pub fn latest_contract_url(&self, provider_name: &str, consumer_name: &str) -> String {
        latest_contract_url(&self.config.base_url, provider_name, consumer_name)
    }

    /// Fetches the latest published contract for the provider/consumer pair
    /// and loads it. A single transport failure is surfaced immediately; no
    /// retries.
    pub async fn fetch_latest(
        &self,
        provider_name: &str,
        consumer_name: &str,
    ) -> Result<ConsumerContract, BrokerError> {
        let url = self.latest_contract_url(provider_name, consumer_name);
        tracing::debug!(url = url.as_str(), "fetching latest contract from broker");
        let body = self.transport.get(&url).await?;
        Ok(ConsumerContract::from_json(&body)?)
    }
}

/// Builds the canonical latest-contract address for a provider/consumer
/// pair. Pure string construction; performs no I/O.
pub fn latest_contract_url(base_url: &str, provider_name: &str, consumer_name: &str) -> String {
    format!(
        "{}/pacts/provider/{}/consumer/{}/latest",
        base_url.trim_end_matches('/'),
        percent_encode_path_segment(provider_name),
        percent_encode_path_segment(consumer_name)
    )
}

fn percent_encode_path_segment(value: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut encoded = String::with_capacity(value.len());
    for byte in value.as_bytes() {
        let is_unreserved = matches!(
            byte,
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~'
        );
        if is_unreserved {
            encoded.push(*byte as char);
        } else {
            encoded.push('%');
            encoded.push(HEX[(byte >> 4) as usize] as char);
            encoded.push(HEX[(byte & 0x0F) as usize] as char);
        }
    }
    encoded
}
