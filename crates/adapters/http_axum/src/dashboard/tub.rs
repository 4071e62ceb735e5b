//! `/settub` — switch the heater relay and log who did it.

use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, EXPIRES, LOCATION, PRAGMA};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use tubctl_app::ports::{Actuator, GreetingRepository, MeasureRepository};
use tubctl_domain::tub::TubCommand;

use crate::auth::IdentityProvider;
use crate::error::PageError;
use crate::params::FormValues;
use crate::state::AppState;

/// A plain `302 Found` to `location`.
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

/// `GET|POST /settub?value=on|off` — toggle the tub, then go back home.
///
/// Anonymous callers are sent to the login page first, with this request
/// as the return target.
pub async fn settub<GR, MR, A, IP>(
    State(state): State<AppState<GR, MR, A, IP>>,
    headers: HeaderMap,
    uri: Uri,
    params: FormValues,
) -> Result<Response, PageError>
where
    GR: GreetingRepository + Send + Sync + 'static,
    MR: MeasureRepository + Send + Sync + 'static,
    A: Actuator + Send + Sync + 'static,
    IP: IdentityProvider + Send + Sync + 'static,
{
    let Some(identity) = state.identity.current_identity(&headers) else {
        let return_to = uri.path_and_query().map_or("/settub", |pq| pq.as_str());
        return Ok(found(state.identity.login_url(return_to)));
    };

    let command: TubCommand = params.get("value").unwrap_or_default().parse()?;
    state.tub_service.toggle(&identity, command).await?;
    tracing::info!(%identity, %command, "tub toggled");

    Ok((
        [
            (CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
            (PRAGMA, "no-cache"),
            (EXPIRES, "0"),
        ],
        found("/".to_string()),
    )
        .into_response())
}
