use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::Span;

use crate::domain::{EchoedMoves, Move, TurnAction};
use crate::error::AppError;
use crate::extractors::VerifiedFrame;
use crate::services::TurnRequest;
use crate::state::app_state::AppState;

/// Query parameters the previous frame carried forward.
#[derive(Debug, Default, Deserialize)]
pub struct MoveQuery {
    /// Last player move, `FROM-TO`.
    user: Option<String>,
    /// Last engine move, `FROM-TO`.
    cpu: Option<String>,
    /// Set on the landing frame's post URL only.
    init: Option<String>,
}

impl MoveQuery {
    /// Present and not one of `""`, `0`, `false`.
    pub fn is_init(&self) -> bool {
        match self.init.as_deref().map(str::trim) {
            None | Some("") | Some("0") => false,
            Some(v) => !v.eq_ignore_ascii_case("false"),
        }
    }

    /// Unparseable echoes are dropped.
    pub fn echoed(&self) -> EchoedMoves {
        EchoedMoves {
            user: self.user.as_deref().and_then(Move::from_token),
            cpu: self.cpu.as_deref().and_then(Move::from_token),
        }
    }
}

async fn play_move(
    frame: VerifiedFrame,
    query: web::Query<MoveQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let VerifiedFrame {
        action: frame_action,
        message_bytes,
    } = frame;
    Span::current().record("fid", frame_action.fid.0);

    let action = TurnAction::from_frame(
        query.is_init(),
        frame_action.button_index,
        frame_action.input_text.as_deref(),
    );

    let outcome = app_state
        .turn_flow()
        .play_turn(TurnRequest {
            player: frame_action.player(),
            action,
            message_bytes,
        })
        .await?;

    Ok(app_state
        .frames
        .for_outcome(&outcome, query.echoed())
        .into_response())
}

async fn landing(app_state: web::Data<AppState>) -> HttpResponse {
    app_state.frames.landing().into_response()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/move")
            .route(web::post().to(play_move))
            .route(web::get().to(play_move)),
    );
}

pub fn configure_landing(cfg: &mut web::ServiceConfig) {
    cfg.route("/chess960", web::get().to(landing));
}
