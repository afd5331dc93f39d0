//! Frames for each turn outcome, plus the landing frame.

use url::Url;

use super::render::{FrameButton, FrameMeta};
use super::verify::base_authority;
use crate::domain::{EchoedMoves, RoundId, TurnOutcome, TurnReport, Winner};
use crate::error::AppError;

const LANDING_TITLE: &str = "Chess960 | Onframe Tourney";
const MOVE_PLACEHOLDER: &str = "e.g. E2 to E4";
const SOURCE_URL: &str = "https://github.com/fiveoutofnine/onframe-tourney";
const CONTRACT_URL: &str = "https://basescan.org/address/0xaDBa25b5f5035B4BBfd7b1f2eA3152FDc286474B";

/// Public URLs every frame is built from.
#[derive(Debug, Clone)]
pub struct FrameSettings {
    base_url: String,
    base_host: String,
    board_image: Url,
}

impl FrameSettings {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let base_host = base_authority(&base_url)?;
        let board_image = Url::parse(&format!("{base_url}/api/chess960/board-image"))
            .map_err(|e| AppError::config(format!("BASE_URL is not usable: {e}")))?;
        Ok(Self {
            base_url,
            base_host,
            board_image,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `host[:port]` of the base URL.
    pub fn base_host(&self) -> &str {
        &self.base_host
    }

    pub fn move_url(&self) -> String {
        format!("{}/api/chess960/move", self.base_url)
    }

    fn static_image(&self, name: &str) -> String {
        format!("{}/static/og/{name}", self.base_url)
    }

    /// Entry frame shared before a player's first action.
    pub fn landing(&self) -> FrameMeta {
        FrameMeta {
            title: LANDING_TITLE.to_string(),
            image_url: self.static_image("chess960.png"),
            post_url: format!("{}?init=1", self.move_url()),
            input_placeholder: None,
            buttons: vec![FrameButton::post("Compete")],
        }
    }

    pub fn for_outcome(&self, outcome: &TurnOutcome, echoed: EchoedMoves) -> FrameMeta {
        match outcome {
            TurnOutcome::RoundNotFound { round_id } => FrameMeta {
                title: game_title(*round_id),
                image_url: self.static_image("chess960-gameover.png"),
                post_url: SOURCE_URL.to_string(),
                input_placeholder: Some(MOVE_PLACEHOLDER.to_string()),
                buttons: vec![FrameButton::redirect("View source")],
            },
            TurnOutcome::AlreadyRewarded { round_id } => FrameMeta {
                title: game_title(*round_id),
                image_url: self.static_image("chess960-win.png"),
                post_url: CONTRACT_URL.to_string(),
                input_placeholder: Some(MOVE_PLACEHOLDER.to_string()),
                buttons: vec![FrameButton::redirect("View contract")],
            },
            TurnOutcome::Played(report) => self.board_frame(report, echoed),
        }
    }

    fn board_frame(&self, report: &TurnReport, echoed: EchoedMoves) -> FrameMeta {
        let black_won = report.winner == Some(Winner::Black);

        let (post_url, buttons) = if black_won {
            (
                format!("{}/chess960", self.base_url),
                vec![FrameButton::post("Reset board")],
            )
        } else {
            (
                self.move_url(),
                vec![FrameButton::post("Reset board"), FrameButton::post("Submit move")],
            )
        };

        FrameMeta {
            title: game_title(report.round_id),
            image_url: self.board_image_url(report, report.displayed_moves(echoed)),
            post_url,
            input_placeholder: Some(MOVE_PLACEHOLDER.to_string()),
            buttons,
        }
    }

    /// Board image with the last move pair and, once decided, the result
    /// (`gg=1` player won, `gg=0` engine won).
    pub fn board_image_url(&self, report: &TurnReport, shown: EchoedMoves) -> String {
        let mut url = self.board_image.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("state", report.board.as_str());
            if let Some(user) = shown.user {
                query.append_pair("user", &user.to_token());
            }
            if let Some(cpu) = shown.cpu {
                query.append_pair("cpu", &cpu.to_token());
            }
            if let Some(winner) = report.winner {
                let gg = match winner {
                    Winner::White => "1",
                    Winner::Black => "0",
                };
                query.append_pair("gg", gg);
            }
            query.append_pair("gameId", &report.round_id.to_string());
        }
        url.into()
    }
}

fn game_title(round: RoundId) -> String {
    format!("Game {round} - Chess960 | Onframe Tourney")
}
