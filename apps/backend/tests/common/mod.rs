#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use tourney_backend::domain::{chess960, BoardState, RoundId};
use tourney_backend::repos::rounds;
use tourney_backend::store::MemoryStore;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Checkmate-in-one for White: Qh5xf7#.
pub const SCHOLARS_MATE_SETUP: &str =
    "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

/// White to move; after g2-g4 the engine mates with Qd8-h4.
pub const FOOLS_MATE_SETUP: &str = "rnbqkbnr/pppp1ppp/8/4p3/8/5P2/PPPPP1PP/RNBQKBNR w KQkq - 0 2";

/// Seed round 0 with the classical setup and return it.
pub async fn seed_classical(store: &MemoryStore) -> BoardState {
    let start = chess960::starting_position(chess960::CLASSICAL_POSITION).unwrap();
    rounds::seed_start(store, RoundId(0), &start).await.unwrap();
    start
}

pub async fn seed(store: &MemoryStore, round: RoundId, fen: &str) -> BoardState {
    let board = BoardState::new(fen);
    rounds::seed_start(store, round, &board).await.unwrap();
    board
}

/// Content of the `<meta>` tag named `key`, with attribute escaping undone.
pub fn meta(html: &str, key: &str) -> Option<String> {
    let needle_name = format!(r#"name="{key}" content=""#);
    let needle_property = format!(r#"property="{key}" content=""#);
    let start = html
        .find(&needle_name)
        .map(|i| i + needle_name.len())
        .or_else(|| html.find(&needle_property).map(|i| i + needle_property.len()))?;
    let end = html[start..].find('"')? + start;
    Some(
        html[start..end]
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}

/// Query parameters of `url` as owned pairs.
pub fn query_of(url: &str) -> std::collections::HashMap<String, String> {
    url::Url::parse(url)
        .unwrap()
        .query_pairs()
        .into_owned()
        .collect()
}

pub async fn read_html(resp: ServiceResponse<BoxBody>) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("frame html is utf-8")
}
