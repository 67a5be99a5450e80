//! On-Call Feed Lambda - Publishes the on-call rotation as an ICS feed.
//!
//! Each invocation fetches the current rotation window from SSM Contacts,
//! builds a full-snapshot calendar, and returns the serialized document.
//! No state persists between invocations beyond the SSM Contacts client.

use std::sync::Arc;

use chrono::Utc;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use shared::{build_calendar, Config, ShiftFetcher};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Process-wide state, initialized once at cold start and immutable after.
struct AppState {
    fetcher: ShiftFetcher,
    organization: String,
}

async fn handler(state: Arc<AppState>, _event: LambdaEvent<Value>) -> Result<String, Error> {
    let shifts = state.fetcher.fetch(Utc::now()).await?;
    let calendar = build_calendar(&shifts, &state.organization)?;

    info!(events = shifts.len(), "Built on-call calendar");

    // TODO: Some clients may need a content-type header to recognize the
    //       ICS payload; Apple Calendar accepts the bare text as-is.
    Ok(calendar.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_ssmcontacts::Client::new(&aws_config);

    let state = Arc::new(AppState {
        fetcher: ShiftFetcher::new(client, config.rotation_id),
        organization: config.organization,
    });

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
