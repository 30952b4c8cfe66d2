use lazy_static::lazy_static;
use prometheus::{register_counter_vec, CounterVec};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

// sqlx logs every statement at info
const DEFAULT_FILTER: &str = "info,sqlx=warn";

lazy_static! {
    pub static ref QUIZ_QUESTIONS_SERVED: CounterVec = register_counter_vec!(
        "trivia_quiz_questions_served_total",
        "Number of questions drawn for quizzes",
        &["category"]
    )
    .unwrap();
}

/// Filter from the `LOG_LEVEL` directives, or [`DEFAULT_FILTER`] when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn span_events_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let mut fmt_layer = fmt::layer();
    if span_events_enabled(std::env::var("INCLUDE_SPAN_EVENTS").ok().as_deref()) {
        fmt_layer = fmt_layer.with_span_events(FmtSpan::ENTER | FmtSpan::EXIT);
    }
    let filter_layer = log_filter(std::env::var("LOG_LEVEL").ok().as_deref());

    if tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}
