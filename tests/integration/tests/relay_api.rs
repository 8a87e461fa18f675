//! HTTP surface of the assembled service.

use actix_web::{http::StatusCode, test, web::ThinData, App};
use relay_minifier::api::routes::configure_routes;
use serde_json::{json, Value};

use crate::integration::common::context::deploy_app_state;

#[actix_web::test]
async fn test_full_router_serves_relay_lifecycle() {
    let app = test::init_service(
        App::new()
            .app_data(ThinData(deploy_app_state().await))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::post()
        .uri("/relays")
        .set_json(json!({
            "destination_chain": "ethereum",
            "message_hash": "746573744d65737361676548617368",
            "payload_size": 256
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!({ "type": "ok", "value": 0 }));

    let req = test::TestRequest::post()
        .uri("/relays/0/confirm")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"], json!({ "type": "ok", "value": true }));

    let req = test::TestRequest::post()
        .uri("/relays/0/confirm")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 103);
}

#[actix_web::test]
async fn test_full_router_batches_calls() {
    let app = test::init_service(
        App::new()
            .app_data(ThinData(deploy_app_state().await))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/calls")
        .set_json(json!({
            "calls": [
                {
                    "function": "create-relay",
                    "destination_chain": "",
                    "message_hash": "",
                    "payload_size": 0
                },
                {
                    "function": "create-relay",
                    "destination_chain": "polygon",
                    "message_hash": "0x636f6e6669726d4d65737361676548617368",
                    "payload_size": 128
                },
                { "function": "confirm-relay", "id": 0 }
            ]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["data"],
        json!([
            { "type": "err", "value": 101 },
            { "type": "ok", "value": 0 },
            { "type": "ok", "value": true }
        ])
    );
}
