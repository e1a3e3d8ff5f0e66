// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Endpoint tests against a wiremock server.

use std::sync::Arc;

use esct_client::{
    ApiClient, CapInput, ClaimDecision, CreateOrder, MemoryTokenStore, VerifyClaim,
};
use esct_config::model::ApiConfig;
use esct_core::types::{ClaimStatus, ClaimType, DonationStatus};
use esct_core::{AuthTokenStore, DashboardSource, EsctError};
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup(token: Option<&str>) -> (MockServer, ApiClient, Arc<MemoryTokenStore>) {
    let server = MockServer::start().await;
    let store = Arc::new(match token {
        Some(t) => MemoryTokenStore::with_token(t),
        None => MemoryTokenStore::new(),
    });
    let config = ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout_secs: Some(5),
    };
    let client = ApiClient::new(&config, store.clone()).unwrap();
    (server, client, store)
}

#[tokio::test]
async fn attaches_bearer_token_when_present() {
    let (server, client, _) = setup(Some("tok-123")).await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"_id": "u1", "personalDetails": {"fullName": "Asha Rao"}, "isAdmin": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client.me().await.unwrap();
    assert_eq!(user.display_name(), "Asha Rao");
    assert!(user.is_admin);
}

#[tokio::test]
async fn sends_anonymously_without_token() {
    let (server, client, _) = setup(None).await;
    Mock::given(method("GET"))
        .and(path("/api/news"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "n1", "title": "AGM", "content": "Annual meeting", "isPublished": true}
        ])))
        .mount(&server)
        .await;

    let news = client.news().await.unwrap();
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].title, "AGM");
}

#[tokio::test]
async fn token_changes_apply_to_next_request() {
    let (server, client, store) = setup(None).await;
    Mock::given(method("GET"))
        .and(path("/api/users/calendar"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [
            {"monthYear": "2024-03", "status": "COMPLETED", "donationsCompleted": 2}
        ]})))
        .expect(1)
        .mount(&server)
        .await;

    store.set(SecretString::from("fresh".to_string())).unwrap();
    let events = client.calendar().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].donations_completed, 2);
}

#[tokio::test]
async fn error_body_message_is_unwrapped() {
    let (server, client, _) = setup(Some("t")).await;
    Mock::given(method("POST"))
        .and(path("/api/donations/add-to-queue"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Claim already in queue"})),
        )
        .mount(&server)
        .await;

    let err = client.add_to_queue("c1").await.unwrap_err();
    assert!(matches!(err, EsctError::Api { status: 400, .. }));
    assert_eq!(err.display_message(), "Claim already in queue");
}

#[tokio::test]
async fn error_without_message_uses_status_text() {
    let (server, client, _) = setup(None).await;
    Mock::given(method("GET"))
        .and(path("/api/claims"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.claims().await.unwrap_err();
    assert_eq!(err.display_message(), "Request failed with status code 503");
}

#[tokio::test]
async fn list_envelopes_are_normalized() {
    let (server, client, _) = setup(None).await;
    Mock::given(method("GET"))
        .and(path("/api/claims"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [
            {"_id": "c1", "type": "Medical Claim", "amountRequested": 1000},
            {"_id": "c2", "type": "RetirementFarewell", "amountRequested": "2500"}
        ]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let claims = client.claims().await.unwrap();
    assert_eq!(claims.len(), 2);
    assert_eq!(claims[1].claim_type, ClaimType::RetirementFarewell);
    assert_eq!(claims[1].amount_requested, 2500.0);

    assert!(client.gallery().await.unwrap().is_empty());
}

#[tokio::test]
async fn claims_by_type_sends_label_and_paging() {
    let (server, client, _) = setup(None).await;
    Mock::given(method("GET"))
        .and(path("/api/claims/Death%20During%20Service"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"_id": "c9", "type": "Death During Service"}],
            "pagination": {"page": 2, "limit": 5, "total": 6, "pages": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .claims_by_type(&ClaimType::DeathDuringService, 2, 5)
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 6);
    assert_eq!(page.pages, 2);
}

#[tokio::test]
async fn remove_from_queue_uses_claim_id_path() {
    let (server, client, _) = setup(Some("t")).await;
    Mock::given(method("DELETE"))
        .and(path("/api/donations/queue/c42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.remove_from_queue("c42").await.unwrap();
}

#[tokio::test]
async fn create_order_validates_before_sending() {
    let (server, client, _) = setup(Some("t")).await;
    Mock::given(method("POST"))
        .and(path("/api/donations/create-order"))
        .and(body_json(json!({"claimId": "c1", "amount": 500.0})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": "order_9", "amount": 50000, "donationId": "d1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bad = CreateOrder {
        claim_id: "c1".into(),
        amount: 0.0,
    };
    assert!(matches!(
        client.create_order(&bad).await,
        Err(EsctError::Validation(_))
    ));

    let order = client
        .create_order(&CreateOrder {
            claim_id: "c1".into(),
            amount: 500.0,
        })
        .await
        .unwrap();
    assert_eq!(order.order_id, "order_9");
    assert_eq!(order.currency, "INR");
    assert_eq!(order.donation_id.as_deref(), Some("d1"));
}

#[tokio::test]
async fn admin_verify_claim_puts_decision() {
    let (server, client, _) = setup(Some("admin")).await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/claims/c7/verify"))
        .and(body_json(json!({"status": "Approved", "verificationNotes": "documents ok"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "claim": {"_id": "c7", "status": "Approved"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let claim = client
        .admin()
        .verify_claim(
            "c7",
            &VerifyClaim {
                status: ClaimDecision::Approved,
                verification_notes: Some("documents ok".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(claim.status, ClaimStatus::Approved);
}

#[tokio::test]
async fn admin_list_filters_by_status() {
    let (server, client, _) = setup(Some("admin")).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/claims"))
        .and(query_param("status", "Pending Verification"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "c1", "status": "Pending Verification"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/donations"))
        .and(query_param("status", "COMPLETED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [
            {"_id": "d1", "amount": 300, "status": "COMPLETED"}
        ]})))
        .expect(1)
        .mount(&server)
        .await;

    let admin = client.admin();
    let claims = admin
        .claims(Some(ClaimStatus::PendingVerification))
        .await
        .unwrap();
    assert_eq!(claims.len(), 1);
    let donations = admin
        .donations(Some(DonationStatus::Completed))
        .await
        .unwrap();
    assert!(donations[0].is_completed());
}

#[tokio::test]
async fn admin_config_update_is_validated_locally() {
    let (server, client, _) = setup(Some("admin")).await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/config/maintenance_mode"))
        .and(body_json(json!({"value": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "updated"})))
        .expect(1)
        .mount(&server)
        .await;

    let admin = client.admin();
    let value = admin
        .update_config_str("maintenance_mode", "yes")
        .await
        .unwrap();
    assert_eq!(value.to_string(), "true");

    let err = admin
        .update_config_str("maintenance_mod", "true")
        .await
        .unwrap_err();
    assert!(matches!(err, EsctError::Validation(_)));
    assert!(err.to_string().contains("maintenance_mode"));
}

#[tokio::test]
async fn admin_cap_rejects_malformed_month() {
    let (_server, client, _) = setup(Some("admin")).await;
    let cap = CapInput {
        claim_type: ClaimType::MedicalClaim,
        month_year: "03-2024".into(),
        cap_amount: 1000.0,
        is_active: true,
    };
    assert!(matches!(
        client.admin().create_cap(&cap).await,
        Err(EsctError::Validation(_))
    ));
}

#[tokio::test]
async fn admin_logs_are_paginated() {
    let (server, client, _) = setup(Some("admin")).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/logs"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"_id": "l1", "action": "CLAIM_VERIFIED"}],
            "total": 41,
            "page": 1,
            "limit": 20
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.admin().logs(1, 20).await.unwrap();
    assert_eq!(page.items[0].action, "CLAIM_VERIFIED");
    assert_eq!(page.pages, 3);
}

#[tokio::test]
async fn dashboard_source_passes_raw_donation_payload() {
    let (server, client, _) = setup(Some("t")).await;
    Mock::given(method("GET"))
        .and(path("/api/donations/my-donations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"notAnArray": true})))
        .mount(&server)
        .await;

    let source: &dyn DashboardSource = &client;
    let payload = source.my_donations_payload().await.unwrap();
    assert_eq!(payload, json!({"notAnArray": true}));
}

#[tokio::test]
async fn rejected_login_token_is_not_kept() {
    let (server, client, store) = setup(None).await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid token"})))
        .mount(&server)
        .await;

    let err = client
        .login_with_token(SecretString::from("stale".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err.display_message(), "Invalid token");
    assert!(store.get().unwrap().is_none());
    assert!(!client.is_signed_in());
}

#[tokio::test]
async fn transport_failure_is_http_error() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:9/api".to_string(),
        timeout_secs: Some(2),
    };
    let client = ApiClient::new(&config, Arc::new(MemoryTokenStore::new())).unwrap();
    assert!(matches!(client.claims().await, Err(EsctError::Http { .. })));
}
