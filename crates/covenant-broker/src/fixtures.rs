//! Response fixture extraction keyed by provider state.

use serde_json::Value;

use covenant_model::{unwrap_sample_values, ContractError, Criteria};

use crate::client::BrokerClient;
use crate::transport::BrokerError;

/// Retrieves the recorded response for a provider state from the latest
/// published contract. Lookup failures (unknown state, duplicate state) and
/// transport failures are surfaced unchanged.
#[derive(Clone)]
pub struct ResponseFixtureClient {
    broker: BrokerClient,
}

impl ResponseFixtureClient {
    pub fn new(broker: BrokerClient) -> Self {
        Self { broker }
    }

    /// The full response structure recorded for `state`, matcher markers
    /// intact.
    pub async fn response_contract(
        &self,
        provider_name: &str,
        consumer_name: &str,
        state: &str,
    ) -> Result<Value, BrokerError> {
        let contract = self.broker.fetch_latest(provider_name, consumer_name).await?;
        let criteria = Criteria::new().with_provider_state(state);
        let interaction = contract.find_interaction(&criteria)?;
        Ok(interaction.response.clone())
    }

    /// The response body recorded for `state`, with sample-value markers
    /// unwrapped to the concrete samples they carry.
    pub async fn response_sample(
        &self,
        provider_name: &str,
        consumer_name: &str,
        state: &str,
    ) -> Result<Value, BrokerError> {
        let response = self
            .response_contract(provider_name, consumer_name, state)
            .await?;
        let body = response.get("body").ok_or_else(|| {
            BrokerError::Contract(ContractError::Schema {
                detail: format!("interaction response for state \"{state}\" has no body field"),
            })
        })?;
        Ok(unwrap_sample_values(body))
    }
}
