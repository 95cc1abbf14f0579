use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::criteria::Criteria;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Public struct `ServiceConsumer` used across covenant components.
pub struct ServiceConsumer {
    pub name: String,
}

impl ServiceConsumer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Public struct `ServiceProvider` used across covenant components.
pub struct ServiceProvider {
    pub name: String,
}

impl ServiceProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One recorded request/response pair plus the optional provider state it
/// assumes. `request` and `response` are opaque JSON trees.
pub struct Interaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "providerState", skip_serializing_if = "Option::is_none")]
    pub provider_state: Option<String>,
    #[serde(default)]
    pub request: Value,
    #[serde(default)]
    pub response: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A recorded set of expected interactions between one consumer and one
/// provider. Constructed by the loading functions, immutable afterwards.
pub struct ConsumerContract {
    pub consumer: ServiceConsumer,
    #[serde(alias = "producer")]
    pub provider: ServiceProvider,
    pub interactions: Vec<Interaction>,
}

impl ConsumerContract {
    /// Every interaction satisfying `criteria`, in document order. Zero
    /// matches is an empty vec, not an error.
    pub fn find_interactions(&self, criteria: &Criteria) -> Vec<&Interaction> {
        self.interactions
            .iter()
            .filter(|interaction| interaction.matches_criteria(criteria))
            .collect()
    }

    /// The single interaction satisfying `criteria`. Uniqueness is enforced
    /// here at read time; the document format itself does not guarantee it.
    pub fn find_interaction(&self, criteria: &Criteria) -> Result<&Interaction, ContractError> {
        let matches = self.find_interactions(criteria);
        match matches.as_slice() {
            [interaction] => Ok(*interaction),
            [] => Err(ContractError::NotFound {
                criteria: criteria.to_string(),
                consumer: self.consumer.name.clone(),
                provider: self.provider.name.clone(),
            }),
            _ => Err(ContractError::AmbiguousMatch {
                criteria: criteria.to_string(),
                consumer: self.consumer.name.clone(),
                provider: self.provider.name.clone(),
            }),
        }
    }
}

#[derive(Debug, Error)]
/// Enumerates supported `ContractError` values.
pub enum ContractError {
    #[error("failed to parse contract document: {detail}")]
    Schema { detail: String },
    #[error("failed to read contract document from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "Could not find interaction matching {criteria} in pact file between {consumer} and {provider}."
    )]
    NotFound {
        criteria: String,
        consumer: String,
        provider: String,
    },
    #[error(
        "Found more than 1 interaction matching {criteria} in pact file between {consumer} and {provider}."
    )]
    AmbiguousMatch {
        criteria: String,
        consumer: String,
        provider: String,
    },
}
