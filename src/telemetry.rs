use prometheus::{register_counter, register_counter_vec, Counter, CounterVec};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref QUIZ_QUESTIONS_CNTR: CounterVec = register_counter_vec!(
        "quiz_questions_served_total",
        "Number of questions served to quiz players",
        &["category"]
    )
    .unwrap();
    pub static ref QUESTIONS_CREATED_CNTR: Counter = register_counter!(
        "questions_created_total",
        "Number of questions added through the API"
    )
    .unwrap();
}

/// Directives used when `LOG_LEVEL` is unset or unparsable: request traces
/// from the HTTP layer, but no per-statement noise from sqlx.
pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

fn env_flag(name: &str) -> bool {
    std::env::var(name).is_ok_and(|value| value.eq_ignore_ascii_case("true"))
}

pub fn init_tracing() {
    let span_events = if env_flag("INCLUDE_SPAN_EVENTS") {
        FmtSpan::ENTER | FmtSpan::EXIT
    } else {
        FmtSpan::NONE
    };
    let filter_layer =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_span_events(span_events))
        .init();
}
