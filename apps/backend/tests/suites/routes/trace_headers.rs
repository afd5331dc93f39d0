use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;
use tourney_backend::test_support::{create_test_app, create_test_state, frame_body};

#[actix_web::test]
async fn every_response_carries_a_request_id() {
    let harness = create_test_state().build().unwrap();
    let app = create_test_app(harness.state.clone()).await;

    let first = test::call_service(
        &app,
        test::TestRequest::get().uri("/chess960").to_request(),
    )
    .await;
    let second = test::call_service(
        &app,
        test::TestRequest::get().uri("/chess960").to_request(),
    )
    .await;

    let id = |resp: &actix_web::dev::ServiceResponse| {
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .expect("x-request-id header")
    };
    let (a, b) = (id(&first), id(&second));
    assert!(uuid::Uuid::parse_str(&a).is_ok(), "{a}");
    assert_ne!(a, b);
}

#[actix_web::test]
async fn error_trace_id_matches_request_id() {
    let harness = create_test_state().build().unwrap();
    let app = create_test_app(harness.state.clone()).await;

    let req = test::TestRequest::post()
        .uri("/api/chess960/move")
        .set_json(frame_body("unregistered"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let header = |name: &str| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| panic!("{name} header missing"))
    };
    let request_id = header("x-request-id");
    let trace_id = header("x-trace-id");
    assert_eq!(request_id, trace_id);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["trace_id"], trace_id.as_str());
}

#[actix_web::test]
async fn inbound_request_id_is_kept_only_when_it_is_a_uuid() {
    let harness = create_test_state().build().unwrap();
    let app = create_test_app(harness.state.clone()).await;
    let upstream = "6f1c2a9e-3b4d-4e5f-8a7b-9c0d1e2f3a4b";

    let kept = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/chess960")
            .insert_header(("x-request-id", upstream))
            .to_request(),
    )
    .await;
    assert_eq!(
        kept.headers().get("x-request-id").unwrap().to_str().unwrap(),
        upstream
    );

    let replaced = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/chess960")
            .insert_header(("x-request-id", "<script>"))
            .to_request(),
    )
    .await;
    let id = replaced
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_ne!(id, "<script>");
    assert!(uuid::Uuid::parse_str(&id).is_ok(), "{id}");
}
