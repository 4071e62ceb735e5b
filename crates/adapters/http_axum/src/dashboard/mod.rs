//! Server-side rendered pages.

pub mod home;
pub mod measure;
pub mod tub;

use askama::Template;
use axum::Router;
use axum::response::Html;
use axum::routing::get;

use tubctl_app::ports::{Actuator, GreetingRepository, MeasureRepository};
use tubctl_domain::error::TubError;

use crate::auth::IdentityProvider;
use crate::error::PageError;
use crate::state::AppState;

/// Build the page sub-router.
pub fn routes<GR, MR, A, IP>() -> Router<AppState<GR, MR, A, IP>>
where
    GR: GreetingRepository + Send + Sync + 'static,
    MR: MeasureRepository + Send + Sync + 'static,
    A: Actuator + Send + Sync + 'static,
    IP: IdentityProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<GR, MR, A, IP>))
        .route(
            "/settub",
            get(tub::settub::<GR, MR, A, IP>).post(tub::settub::<GR, MR, A, IP>),
        )
        .route(
            "/tub/measure",
            get(measure::measure::<GR, MR, A, IP>).post(measure::measure::<GR, MR, A, IP>),
        )
}

fn render(template: &impl Template) -> Result<Html<String>, PageError> {
    template
        .render()
        .map(Html)
        .map_err(|err| TubError::Render(err.to_string()).into())
}
