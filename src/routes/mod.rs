//! Request handlers. Thin by intent: the game logic lives in
//! [`crate::wordle`], handlers just adapt it to HTTP.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use tracing::{error, instrument};

use crate::{framework::AppData, wordle};

const INDEX_TEMPLATE: &str = include_str!("../../assets/index.html");

/// The game page, with today's word baked in for the board script.
///
/// The date is taken from the server's local clock at request time, so the
/// word rolls over at the deployment's midnight without any scheduled job.
#[instrument(skip_all)]
pub async fn home(State(data): State<AppData>) -> Result<Html<String>, StatusCode> {
    let today = Local::now().date_naive();

    let word = wordle::daily_word(today, data.words()).map_err(|err| {
        error!(%err, "no daily word to serve");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Html(INDEX_TEMPLATE.replace("{{word}}", word)))
}

#[derive(Debug, Deserialize)]
pub struct CheckWordParams {
    guess: String,
}

/// Boolean validity of a guess.
///
/// Never errors once the query parses: anything wrong with the guess or
/// with the strategy's backing service comes back as `false`.
#[instrument(skip_all, fields(guess = %params.guess))]
pub async fn check_word(
    State(data): State<AppData>,
    Query(params): Query<CheckWordParams>,
) -> Json<bool> {
    Json(data.checker().check(&params.guess).await)
}
