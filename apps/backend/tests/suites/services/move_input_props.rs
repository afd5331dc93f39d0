// Property: any case/spacing of a legal move from any Chess960 start is
// accepted by the turn flow and applied as that move.

use proptest::prelude::*;
use tourney_backend::domain::{chess960, RoundId, TurnAction, TurnOutcome};
use tourney_backend::oracle::{ChessOracle, ShakmatyOracle};
use tourney_backend::repos::rounds;
use tourney_backend::services::TurnRequest;
use tourney_backend::test_support::{create_test_state, frame_action};

fn spell(from: &str, to: &str, upper: bool, pad: usize) -> String {
    let spaces = " ".repeat(pad);
    let text = format!("{spaces}{from}{spaces}to{spaces}{to}{spaces}");
    if upper {
        text.to_uppercase()
    } else {
        text.to_lowercase()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_any_spelling_of_a_legal_move_is_played(
        index in 0u16..chess960::POSITION_COUNT,
        pick in any::<prop::sample::Index>(),
        upper in any::<bool>(),
        pad in 0usize..3,
    ) {
        let start = chess960::starting_position(index).unwrap();
        let legal = ShakmatyOracle::new().legal_moves(&start).unwrap();
        let moves: Vec<_> = legal.iter().copied().collect();
        let chosen = moves[pick.index(moves.len())];
        let text = spell(
            &chosen.from.to_string(),
            &chosen.to.to_string(),
            upper,
            pad,
        );

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let outcome = runtime.block_on(async {
            let harness = create_test_state().with_search_depth(1).build().unwrap();
            rounds::seed_start(harness.store.as_ref(), RoundId(0), &start).await.unwrap();
            harness
                .state
                .turn_flow()
                .play_turn(TurnRequest {
                    player: frame_action(1, 2, Some(&text)).player(),
                    action: TurnAction::SubmitMove(text.clone()),
                    message_bytes: "msg".to_string(),
                })
                .await
        });

        match outcome {
            Ok(TurnOutcome::Played(report)) => {
                prop_assert_eq!(report.user_move, Some(chosen));
                prop_assert!(report.cpu_move.is_some());
            }
            other => prop_assert!(false, "{:?} for {:?}", other, text),
        }
    }
}
