#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

//! Backend for a daily word-guessing game in Urdu: one secret word per
//! calendar day, drawn deterministically from a fixed vocabulary, plus an
//! endpoint that judges whether a guess is an acceptable word.

pub mod cli;
pub mod fetch;
pub mod framework;
pub mod routes;
pub mod wordle;
