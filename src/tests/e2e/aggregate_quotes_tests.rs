use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::app_state::make_test_state;
use crate::tests::fixtures::cloud_events::structured_bank_offer;

async fn post_message_and_expect_success(app: &Router, issuer: &str, rate: f64, id: &str) {
    let body = structured_bank_offer(id, json!({"issuer": issuer, "rate": rate}));
    let response = app
        .clone()
        .oneshot(
            Request::post("/")
                .header("content-type", "application/cloudevents+json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

async fn get_quotes(app: &Router, id: &str) -> Vec<serde_json::Value> {
    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/quotes/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn reset(app: &Router) -> StatusCode {
    app.clone()
        .oneshot(Request::delete("/quotes").body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn aggregates_one_message() {
    let (_, state) = make_test_state();
    let app = router(state, true);

    post_message_and_expect_success(&app, "BankPremium", 4.655600086643112, "123").await;

    assert_eq!(get_quotes(&app, "123").await.len(), 1);
}

#[tokio::test]
async fn aggregates_many_quotes_for_a_single_instance() {
    let (_, state) = make_test_state();
    let app = router(state, true);

    post_message_and_expect_success(&app, "BankPremium", 4.655600086643112, "123").await;
    post_message_and_expect_success(&app, "BankStar", 5.4342645, "123").await;

    let quotes = get_quotes(&app, "123").await;
    assert_eq!(quotes.len(), 2);
    assert!(quotes.contains(&json!({"issuer": "BankStar", "rate": 5.4342645})));
    assert_eq!(get_quotes(&app, "123").await.len(), 2);
}

#[tokio::test]
async fn aggregates_many_quotes_for_many_instances() {
    let (_, state) = make_test_state();
    let app = router(state, true);

    post_message_and_expect_success(&app, "BankPremium", 4.655600086643112, "123").await;
    post_message_and_expect_success(&app, "BankPremium", 5.4342645, "456").await;

    assert_eq!(
        get_quotes(&app, "123").await,
        vec![json!({"issuer": "BankPremium", "rate": 4.655600086643112})]
    );
    assert_eq!(
        get_quotes(&app, "456").await,
        vec![json!({"issuer": "BankPremium", "rate": 5.4342645})]
    );
}

#[tokio::test]
async fn clears_every_instance_on_reset() {
    let (_, state) = make_test_state();
    let app = router(state, true);

    post_message_and_expect_success(&app, "BankPremium", 4.655600086643112, "123").await;
    post_message_and_expect_success(&app, "BankStar", 5.4342645, "123").await;

    assert_eq!(reset(&app).await, StatusCode::NO_CONTENT);
    assert!(get_quotes(&app, "123").await.is_empty());
}

#[tokio::test]
async fn hides_the_reset_hook_unless_enabled() {
    let (store, state) = make_test_state();
    let app = router(state, false);

    post_message_and_expect_success(&app, "BankPremium", 4.655600086643112, "123").await;

    assert_eq!(reset(&app).await, StatusCode::NOT_FOUND);
    assert_eq!(store.bucket_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn counts_every_concurrent_delivery() {
    let (_, state) = make_test_state();
    let app = router(state, false);

    let deliveries: Vec<_> = (0..200)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                post_message_and_expect_success(&app, &format!("Bank-{n}"), 4.5, "123").await;
            })
        })
        .collect();
    for delivery in deliveries {
        delivery.await.unwrap();
    }

    assert_eq!(get_quotes(&app, "123").await.len(), 200);
    assert!(get_quotes(&app, "456").await.is_empty());
}
