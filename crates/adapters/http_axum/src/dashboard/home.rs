//! Home page — recent toggles and the latest temperature estimate.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use tubctl_app::ports::{Actuator, GreetingRepository, MeasureRepository};
use tubctl_domain::greeting::Greeting;
use tubctl_domain::time::{DisplayZone, now};

use super::render;
use crate::auth::IdentityProvider;
use crate::error::PageError;
use crate::state::AppState;

/// Number of log entries shown on the home page.
pub const RECENT_GREETINGS: usize = 20;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Home page template.
#[derive(Template)]
#[template(
    ext = "html",
    source = r#"
<html>
  <head><title>Tub Control</title></head>
  <body>
    <a href="/settub?value=on">on</a>, <a href="/settub?value=off">off</a>, <a href="/tub/measure">measures</a><p>
    {%- for greeting in greetings %}
      At {{ greeting.date }}
        {{ greeting.author }}:
      {{ greeting.content }}<br>
    {%- endfor %}
    {{ temperature }}°F estimated at {{ measured_at }} but this is only correct when on.
  </body>
</html>
"#
)]
pub struct HomeTemplate {
    greetings: Vec<GreetingRow>,
    temperature: String,
    measured_at: String,
}

/// One greeting, already formatted for display.
pub struct GreetingRow {
    date: String,
    author: String,
    content: String,
}

impl GreetingRow {
    fn new(greeting: &Greeting, zone: DisplayZone) -> Self {
        Self {
            date: zone.localize(greeting.date).format(DATE_FORMAT).to_string(),
            author: greeting.display_author().to_owned(),
            content: greeting.content.clone(),
        }
    }
}

/// `GET /` — toggle log and current temperature.
///
/// Without any sample the temperature reads `NaN`, stamped with the
/// current time.
pub async fn index<GR, MR, A, IP>(
    State(state): State<AppState<GR, MR, A, IP>>,
) -> Result<Html<String>, PageError>
where
    GR: GreetingRepository + Send + Sync + 'static,
    MR: MeasureRepository + Send + Sync + 'static,
    A: Actuator + Send + Sync + 'static,
    IP: IdentityProvider + Send + Sync + 'static,
{
    let greetings = state
        .tub_service
        .recent_greetings(RECENT_GREETINGS)
        .await?;
    let latest = state.measure_service.latest().await?;

    let zone = state.zone;
    let (temperature, measured_at) = match latest {
        Some(measure) => (measure.fahrenheit(), measure.date),
        None => (f64::NAN, now()),
    };

    render(&HomeTemplate {
        greetings: greetings
            .iter()
            .map(|greeting| GreetingRow::new(greeting, zone))
            .collect(),
        temperature: format!("{temperature:.1}"),
        measured_at: zone.localize(measured_at).format(DATE_FORMAT).to_string(),
    })
}
