use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_problem_details_from_service_response;
use tourney_backend::domain::{PlayerId, RoundId};
use tourney_backend::store::keys;
use tourney_backend::test_support::{create_test_app, create_test_state, frame_action, frame_body};

use crate::common::{meta, query_of, read_html, seed_classical};

const MOVE_URI: &str = "/api/chess960/move";

#[actix_web::test]
async fn submitted_move_renders_next_board() {
    let harness = create_test_state().build().unwrap();
    seed_classical(&harness.store).await;
    harness
        .verifier
        .accept("msg-e2e4", frame_action(7, 2, Some("e2 to e4")));
    let app = create_test_app(harness.state.clone()).await;

    let req = test::TestRequest::post()
        .uri(MOVE_URI)
        .set_json(frame_body("msg-e2e4"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("cache-control").unwrap().to_str().unwrap(),
        "no-store"
    );
    let html = read_html(resp).await;

    assert_eq!(meta(&html, "fc:frame").as_deref(), Some("vNext"));
    assert_eq!(
        meta(&html, "fc:frame:post_url").as_deref(),
        Some("http://localhost:8080/api/chess960/move")
    );
    assert_eq!(meta(&html, "fc:frame:button:1").as_deref(), Some("Reset board"));
    assert_eq!(meta(&html, "fc:frame:button:2").as_deref(), Some("Submit move"));
    assert_eq!(
        meta(&html, "fc:frame:input:text").as_deref(),
        Some("e.g. E2 to E4")
    );

    let image = meta(&html, "fc:frame:image").unwrap();
    let q = query_of(&image);
    assert_eq!(q["user"], "E2-E4");
    assert!(q.contains_key("cpu"));
    assert_eq!(q["gameId"], "0");
    assert!(!q.contains_key("gg"));

    let saved = harness
        .store
        .snapshot()
        .get(&keys::session(RoundId(0), PlayerId(7)))
        .cloned()
        .expect("session saved after the engine reply");
    assert_eq!(q["state"], saved);
    // Engine has replied, so it is White's move again.
    assert!(saved.contains(" w "), "{saved}");
}

#[actix_web::test]
async fn illegal_move_is_rejected_without_writes() {
    let harness = create_test_state().build().unwrap();
    seed_classical(&harness.store).await;
    harness
        .verifier
        .accept("msg-bad", frame_action(7, 2, Some("e2 to e5")));
    let before = harness.store.snapshot();
    let app = create_test_app(harness.state.clone()).await;

    let req = test::TestRequest::post()
        .uri(MOVE_URI)
        .set_json(frame_body("msg-bad"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_MOVE",
        StatusCode::BAD_REQUEST,
        Some("E2 to E5"),
    )
    .await;
    assert_eq!(harness.store.snapshot(), before);
}

#[actix_web::test]
async fn init_query_renders_without_resetting() {
    let harness = create_test_state().build().unwrap();
    let start = seed_classical(&harness.store).await;
    // Button 1 would reset, but the init flag wins.
    harness.verifier.accept("msg-init", frame_action(3, 1, None));
    let before = harness.store.snapshot();
    let app = create_test_app(harness.state.clone()).await;

    let req = test::TestRequest::post()
        .uri("/api/chess960/move?init=1")
        .set_json(frame_body("msg-init"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = read_html(resp).await;
    let q = query_of(&meta(&html, "fc:frame:image").unwrap());
    assert_eq!(q["state"], start.as_str());
    assert!(!q.contains_key("user"));
    assert_eq!(harness.store.snapshot(), before);
}

#[actix_web::test]
async fn echoed_moves_are_shown_when_nothing_was_played() {
    let harness = create_test_state().build().unwrap();
    seed_classical(&harness.store).await;
    harness.verifier.accept("msg-view", frame_action(3, 3, None));
    let app = create_test_app(harness.state.clone()).await;

    let req = test::TestRequest::get()
        .uri("/api/chess960/move?user=D2-D4&cpu=D7-D5")
        .set_json(frame_body("msg-view"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = read_html(resp).await;
    let q = query_of(&meta(&html, "fc:frame:image").unwrap());
    assert_eq!(q["user"], "D2-D4");
    assert_eq!(q["cpu"], "D7-D5");
}

#[actix_web::test]
async fn unseeded_round_redirects_to_source() {
    let harness = create_test_state().build().unwrap();
    harness.verifier.accept("msg", frame_action(3, 2, Some("e2 to e4")));
    let app = create_test_app(harness.state.clone()).await;

    let req = test::TestRequest::post()
        .uri(MOVE_URI)
        .set_json(frame_body("msg"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = read_html(resp).await;
    assert_eq!(meta(&html, "fc:frame:button:1").as_deref(), Some("View source"));
    assert_eq!(
        meta(&html, "fc:frame:button:1:action").as_deref(),
        Some("post_redirect")
    );
    assert_eq!(
        meta(&html, "fc:frame:image").as_deref(),
        Some("http://localhost:8080/static/og/chess960-gameover.png")
    );
    assert!(harness.store.snapshot().is_empty());
}

#[actix_web::test]
async fn unknown_message_is_an_invalid_signature() {
    let harness = create_test_state().build().unwrap();
    seed_classical(&harness.store).await;
    let app = create_test_app(harness.state.clone()).await;

    let req = test::TestRequest::post()
        .uri(MOVE_URI)
        .set_json(frame_body("forged"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_FRAME_SIGNATURE",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn action_from_another_origin_is_rejected() {
    let harness = create_test_state().build().unwrap();
    seed_classical(&harness.store).await;
    let mut action = frame_action(3, 2, Some("e2 to e4"));
    action.url = "https://evil.test/chess960".to_string();
    harness.verifier.accept("msg-evil", action);
    let before = harness.store.snapshot();
    let app = create_test_app(harness.state.clone()).await;

    let req = test::TestRequest::post()
        .uri(MOVE_URI)
        .set_json(frame_body("msg-evil"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "ORIGIN_MISMATCH",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
    assert_eq!(harness.store.snapshot(), before);
}

#[actix_web::test]
async fn malformed_body_is_a_bad_request() {
    let harness = create_test_state().build().unwrap();
    let app = create_test_app(harness.state.clone()).await;

    let req = test::TestRequest::post()
        .uri(MOVE_URI)
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"trustedData\":")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("unexpected end of input"),
    )
    .await;
}

#[actix_web::test]
async fn hub_outage_is_service_unavailable() {
    let harness = create_test_state().build().unwrap();
    harness.verifier.set_unreachable(true);
    let app = create_test_app(harness.state.clone()).await;

    let req = test::TestRequest::post()
        .uri(MOVE_URI)
        .set_json(frame_body("msg"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "UPSTREAM_UNAVAILABLE",
        StatusCode::SERVICE_UNAVAILABLE,
        None,
    )
    .await;
}

#[actix_web::test]
async fn store_outage_is_service_unavailable() {
    let harness = create_test_state().build().unwrap();
    seed_classical(&harness.store).await;
    harness.verifier.accept("msg", frame_action(3, 2, Some("e2 to e4")));
    harness.store.set_offline(true);
    let app = create_test_app(harness.state.clone()).await;

    let req = test::TestRequest::post()
        .uri(MOVE_URI)
        .set_json(frame_body("msg"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "STORE_UNAVAILABLE",
        StatusCode::SERVICE_UNAVAILABLE,
        None,
    )
    .await;
}

#[actix_web::test]
async fn stalled_store_is_gateway_timeout_and_writes_nothing() {
    let harness = create_test_state().build().unwrap();
    seed_classical(&harness.store).await;
    harness.verifier.accept("msg", frame_action(3, 2, Some("e2 to e4")));
    let before = harness.store.snapshot();
    harness.store.set_stalled(true);
    let app = create_test_app(harness.state.clone()).await;

    let req = test::TestRequest::post()
        .uri(MOVE_URI)
        .set_json(frame_body("msg"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "STORE_TIMEOUT",
        StatusCode::GATEWAY_TIMEOUT,
        Some("timed out"),
    )
    .await;
    harness.store.set_stalled(false);
    assert_eq!(harness.store.snapshot(), before);
}
