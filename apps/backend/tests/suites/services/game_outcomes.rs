use tourney_backend::domain::{Move, PlayerId, RoundId, TurnAction, TurnOutcome, Winner};
use tourney_backend::services::{RewardClaim, TurnRequest};
use tourney_backend::store::keys;
use tourney_backend::test_support::{create_test_state, frame_action};

use crate::common::{seed, FOOLS_MATE_SETUP, SCHOLARS_MATE_SETUP};

fn submit(fid: u64, text: &str) -> TurnRequest {
    TurnRequest {
        player: frame_action(fid, 2, Some(text)).player(),
        action: TurnAction::SubmitMove(text.to_string()),
        message_bytes: format!("msg-{fid}"),
    }
}

fn mv(token: &str) -> Option<Move> {
    Move::from_token(token)
}

#[tokio::test]
async fn checkmating_move_wins_the_round_and_issues_a_reward() {
    let mut harness = create_test_state().build().unwrap();
    seed(&harness.store, RoundId(0), SCHOLARS_MATE_SETUP).await;
    let flow = harness.state.turn_flow();

    let outcome = flow.play_turn(submit(5, "h5 to f7")).await.unwrap();
    let report = match outcome {
        TurnOutcome::Played(report) => report,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(report.round_id, RoundId(0));
    assert_eq!(report.winner, Some(Winner::White));
    assert_eq!(report.user_move, mv("H5-F7"));
    assert_eq!(report.cpu_move, None);

    let snapshot = harness.store.snapshot();
    assert_eq!(snapshot[keys::GAMES_COMPLETED], "1");
    assert_eq!(snapshot[&keys::wins(PlayerId(5))], "1");
    assert_eq!(
        snapshot[&keys::session(RoundId(0), PlayerId(5))],
        report.board.as_str()
    );

    let claim = harness.rewards.next().await.expect("reward dispatched");
    assert_eq!(
        claim,
        RewardClaim {
            address: "0xverified5".to_string(),
            frame_trusted_data: "msg-5".to_string(),
        }
    );
}

#[tokio::test]
async fn winner_is_gated_in_the_next_round() {
    let mut harness = create_test_state().build().unwrap();
    seed(&harness.store, RoundId(0), SCHOLARS_MATE_SETUP).await;
    let next_start = seed(&harness.store, RoundId(1), FOOLS_MATE_SETUP).await;
    let flow = harness.state.turn_flow();

    flow.play_turn(submit(5, "h5 to f7")).await.unwrap();
    assert!(harness.rewards.next().await.is_some());

    let again = flow.play_turn(submit(5, "g2 to g4")).await.unwrap();
    assert_eq!(again, TurnOutcome::AlreadyRewarded { round_id: RoundId(1) });

    // Another player starts round 1 from its seeded board.
    let other = TurnRequest {
        player: frame_action(6, 3, None).player(),
        action: TurnAction::Init,
        message_bytes: "msg-6".to_string(),
    };
    match flow.play_turn(other).await.unwrap() {
        TurnOutcome::Played(report) => {
            assert_eq!(report.round_id, RoundId(1));
            assert_eq!(report.board, next_start);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert!(harness.rewards.is_empty());
}

#[tokio::test]
async fn winner_is_gated_even_when_next_round_is_unseeded() {
    let mut harness = create_test_state().build().unwrap();
    seed(&harness.store, RoundId(0), SCHOLARS_MATE_SETUP).await;
    let flow = harness.state.turn_flow();

    flow.play_turn(submit(5, "h5 to f7")).await.unwrap();
    assert!(harness.rewards.next().await.is_some());

    let again = flow.play_turn(submit(5, "g2 to g4")).await.unwrap();
    assert_eq!(again, TurnOutcome::AlreadyRewarded { round_id: RoundId(1) });
    assert!(!harness
        .store
        .snapshot()
        .contains_key(&keys::session(RoundId(1), PlayerId(5))));
}

#[tokio::test]
async fn engine_mate_ends_the_game_without_reward() {
    let mut harness = create_test_state().build().unwrap();
    seed(&harness.store, RoundId(0), FOOLS_MATE_SETUP).await;
    let flow = harness.state.turn_flow();

    let outcome = flow.play_turn(submit(8, "G2 TO G4")).await.unwrap();
    let report = match outcome {
        TurnOutcome::Played(report) => report,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(report.user_move, mv("G2-G4"));
    assert_eq!(report.cpu_move, mv("D8-H4"));
    assert_eq!(report.winner, Some(Winner::Black));

    let snapshot = harness.store.snapshot();
    assert!(!snapshot.contains_key(keys::GAMES_COMPLETED));
    assert!(!snapshot.contains_key(&keys::wins(PlayerId(8))));
    assert_eq!(
        snapshot[&keys::session(RoundId(0), PlayerId(8))],
        report.board.as_str()
    );
    assert!(harness.rewards.is_empty());

    let frame = harness
        .state
        .frames
        .for_outcome(&TurnOutcome::Played(report), Default::default());
    assert_eq!(frame.buttons.len(), 1);
    assert_eq!(frame.buttons[0].label, "Reset board");
}
