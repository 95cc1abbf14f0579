//! End-to-end flows: document loading, interaction lookup, and broker-backed
//! response fixture extraction against a mock broker.

use httpmock::prelude::*;
use serde_json::{json, Value};

use covenant_broker::{BrokerClient, BrokerConfig, ResponseFixtureClient};
use covenant_model::{ConsumerContract, Criteria};

fn pact_between(consumer: &str, provider: &str, interactions: Value) -> Value {
    json!({
        "consumer": {"name": consumer},
        "provider": {"name": provider},
        "interactions": interactions
    })
}

#[test]
fn loads_a_document_and_answers_queries_end_to_end() {
    let raw = r#"{
        "interactions": [
            {"request": {"path": "/path", "method": "get"}, "response": {"status": 200}}
        ],
        "consumer": {"name": "Bob"},
        "provider": {"name": "Mary"}
    }"#;

    let contract = ConsumerContract::from_json(raw).expect("document should load");
    assert_eq!(contract.consumer.name, "Bob");
    assert_eq!(contract.provider.name, "Mary");
    assert_eq!(contract.interactions.len(), 1);

    let interaction = &contract.interactions[0];
    assert_eq!(interaction.request["path"], "/path");
    assert_eq!(interaction.response["status"], 200);
}

#[test]
fn loads_a_legacy_document_end_to_end() {
    let raw = r#"{
        "consumer": {"name": "a consumer"},
        "producer": {"name": "an old producer"},
        "interactions": [
            {
                "description": "a request for something",
                "providerState": "state one",
                "request": {"path": "/something", "method": "get"},
                "response": {"status": 200}
            }
        ]
    }"#;

    let contract = ConsumerContract::from_json(raw).expect("legacy document should load");
    assert_eq!(contract.provider.name, "an old producer");
    assert_eq!(
        contract.interactions[0].provider_state.as_deref(),
        Some("state one")
    );

    let found = contract
        .find_interaction(&Criteria::new().with_provider_state("state one"))
        .expect("state one should be unique");
    assert_eq!(found.description.as_deref(), Some("a request for something"));
}

#[tokio::test]
async fn extracts_response_contract_and_sample_from_a_mock_broker() {
    let document = pact_between(
        "my consumer",
        "my provider",
        json!([
            {
                "provider_state": "my state",
                "request": {"path": "/path", "method": "get"},
                "response": {
                    "status": 200,
                    "body": {"json_class": "Pact::SomethingLike", "contents": "my body"}
                }
            }
        ]),
    );

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/pacts/provider/my%20provider/consumer/my%20consumer/latest");
        then.status(200).json_body(document);
    });

    let broker = BrokerClient::new(BrokerConfig {
        base_url: server.base_url(),
        request_timeout_ms: 5_000,
    })
    .expect("broker client should be created");
    let fixtures = ResponseFixtureClient::new(broker);

    let response = fixtures
        .response_contract("my provider", "my consumer", "my state")
        .await
        .expect("response contract should resolve");
    assert_eq!(response["body"]["json_class"], "Pact::SomethingLike");

    let sample = fixtures
        .response_sample("my provider", "my consumer", "my state")
        .await
        .expect("response sample should resolve");
    assert_eq!(sample, json!("my body"));

    let missing = fixtures
        .response_contract("my provider", "my consumer", "dummy state")
        .await
        .expect_err("unknown state should fail");
    assert!(missing.to_string().contains("dummy state"));

    mock.assert_calls(3);
}
