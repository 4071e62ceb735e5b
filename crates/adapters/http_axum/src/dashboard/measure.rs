//! `/tub/measure` — sample ingestion and history export.
//!
//! One path, two operations: a request carrying `value` records a sample,
//! any other request reads the history back as a chart page or as CSV.

use askama::Template;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use tubctl_app::ports::{Actuator, GreetingRepository, MeasureRepository};
use tubctl_app::services::measure_service::DEFAULT_HISTORY_LIMIT;
use tubctl_domain::error::{TubError, ValidationError};
use tubctl_domain::measure::Measure;
use tubctl_domain::time::DisplayZone;

use super::render;
use crate::auth::IdentityProvider;
use crate::error::PageError;
use crate::params::FormValues;
use crate::state::AppState;

const CSV_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Export formats of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Chart,
    Csv,
}

impl Output {
    fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("csv") => Self::Csv,
            _ => Self::Chart,
        }
    }
}

/// History chart page template.
#[derive(Template)]
#[template(
    ext = "html",
    source = r#"
<html>
  <head>
    <script type='text/javascript' src='https://www.google.com/jsapi'></script>
    <script type='text/javascript'>
      google.load('visualization', '1', {'packages':['annotatedtimeline']});
      google.setOnLoadCallback(drawChart);
      function drawChart() {
        var data = new google.visualization.DataTable();
        data.addColumn('datetime', 'Date');
        data.addColumn('number', 'Temp');
        data.addColumn('string', 'title1');
        data.addColumn('string', 'text1');
        data.addRows([
        {%- for point in points %}
          [new Date({{ point.millis }}), {{ point.fahrenheit }}, undefined, undefined],
        {%- endfor %}
        ]);

        var chart = new google.visualization.AnnotatedTimeLine(document.getElementById('chart_div'));
        chart.draw(data, {displayAnnotations: true, scaleType: "maximized"});
      }
    </script>
  </head>

  <body>
    This is a graph of temperature measured over the thermoresistor <i>and</i> disabling R. In other words, when the relay has disabled the tub the actual temperature is lower by about 5°F.
    <div id='chart_div' style='width: 700px; height: 240px;'></div>
    <a href="/tub/measure?output=csv">csv</a>
  </body>
</html>
"#
)]
pub struct ChartTemplate {
    points: Vec<ChartPoint>,
}

/// One chart row: epoch milliseconds at whole-second precision and the
/// one-decimal temperature.
pub struct ChartPoint {
    millis: i64,
    fahrenheit: String,
}

impl From<&Measure> for ChartPoint {
    fn from(measure: &Measure) -> Self {
        Self {
            millis: measure.date.timestamp() * 1000,
            fahrenheit: format!("{:.1}", measure.fahrenheit()),
        }
    }
}

/// `GET|POST /tub/measure` — dispatch on the presence of `value`.
pub async fn measure<GR, MR, A, IP>(
    State(state): State<AppState<GR, MR, A, IP>>,
    params: FormValues,
) -> Response
where
    GR: GreetingRepository + Send + Sync + 'static,
    MR: MeasureRepository + Send + Sync + 'static,
    A: Actuator + Send + Sync + 'static,
    IP: IdentityProvider + Send + Sync + 'static,
{
    match params.get("value") {
        Some(value) => record(&state, value).await.into_response(),
        None => export(&state, params.get("limit"), params.get("output"))
            .await
            .into_response(),
    }
}

/// Record one raw sample and acknowledge with `OK`.
///
/// # Errors
///
/// Fails when `value` is not an integer or the sample cannot be stored.
pub async fn record<GR, MR, A, IP>(
    state: &AppState<GR, MR, A, IP>,
    value: &str,
) -> Result<&'static str, PageError>
where
    GR: GreetingRepository + Send + Sync + 'static,
    MR: MeasureRepository + Send + Sync + 'static,
    A: Actuator + Send + Sync + 'static,
    IP: IdentityProvider + Send + Sync + 'static,
{
    let sample: i64 = value
        .parse()
        .map_err(|err| ValidationError::invalid_integer("value", err))?;
    state.measure_service.record_sample(sample).await?;
    Ok("OK")
}

/// Read the history back, oldest first, as a chart page or CSV.
///
/// # Errors
///
/// Fails when `limit` is not a non-negative integer, or when reading or
/// rendering fails.
pub async fn export<GR, MR, A, IP>(
    state: &AppState<GR, MR, A, IP>,
    limit: Option<&str>,
    output: Option<&str>,
) -> Result<Response, PageError>
where
    GR: GreetingRepository + Send + Sync + 'static,
    MR: MeasureRepository + Send + Sync + 'static,
    A: Actuator + Send + Sync + 'static,
    IP: IdentityProvider + Send + Sync + 'static,
{
    let limit = match limit {
        Some(limit) => limit
            .parse()
            .map_err(|err| ValidationError::invalid_integer("limit", err))?,
        None => DEFAULT_HISTORY_LIMIT,
    };
    let measures = state.measure_service.history(limit).await?;

    match Output::from_param(output) {
        Output::Csv => {
            let body = render_csv(&measures, state.zone)?;
            Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
        }
        Output::Chart => {
            let points = measures.iter().map(ChartPoint::from).collect();
            Ok(render(&ChartTemplate { points })?.into_response())
        }
    }
}

/// `Time,AtoD` header, then one `local time,raw sample` row per measure.
fn render_csv(measures: &[Measure], zone: DisplayZone) -> Result<Vec<u8>, TubError> {
    let to_render_error = |err: csv::Error| TubError::Render(err.to_string());

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer
        .write_record(["Time", "AtoD"])
        .map_err(to_render_error)?;
    for measure in measures {
        let time = zone.localize(measure.date).format(CSV_TIME_FORMAT).to_string();
        writer
            .write_record([time, measure.posted_sample.to_string()])
            .map_err(to_render_error)?;
    }

    writer
        .into_inner()
        .map_err(|err| TubError::Render(err.into_error().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn measure_at(sample: i64, hour: u32) -> Measure {
        Measure::recorded_at(sample, Utc.with_ymd_and_hms(2024, 1, 15, hour, 30, 5).unwrap())
    }

    #[test]
    fn should_choose_csv_only_when_asked() {
        assert_eq!(Output::from_param(Some("csv")), Output::Csv);
        assert_eq!(Output::from_param(Some("html")), Output::Chart);
        assert_eq!(Output::from_param(Some("CSV")), Output::Chart);
        assert_eq!(Output::from_param(None), Output::Chart);
    }

    #[test]
    fn should_render_csv_with_raw_samples_in_display_zone() {
        let measures = vec![measure_at(123, 20), measure_at(-4, 21)];

        let csv = render_csv(&measures, DisplayZone::default()).unwrap();

        assert_eq!(
            String::from_utf8(csv).unwrap(),
            "Time,AtoD\n2024-01-15T12:30:05,123\n2024-01-15T13:30:05,-4\n"
        );
    }

    #[test]
    fn should_render_csv_header_only_when_empty() {
        let csv = render_csv(&[], DisplayZone::default()).unwrap();
        assert_eq!(csv, b"Time,AtoD\n");
    }

    #[test]
    fn should_build_chart_point_from_measure() {
        let measure = measure_at(32_000, 20);
        let point = ChartPoint::from(&measure);

        assert_eq!(point.millis, 1_705_350_605_000);
        assert_eq!(point.fahrenheit, format!("{:.1}", measure.fahrenheit()));
    }

    #[test]
    fn should_drop_subsecond_part_of_chart_time() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 20, 30, 5).unwrap()
            + chrono::Duration::milliseconds(987);
        let point = ChartPoint::from(&Measure::recorded_at(1, date));

        assert_eq!(point.millis, 1_705_350_605_000);
    }

    #[test]
    fn should_render_chart_rows() {
        let template = ChartTemplate {
            points: vec![ChartPoint {
                millis: 1_705_350_605_000,
                fahrenheit: "101.5".to_string(),
            }],
        };

        let html = template.render().unwrap();

        assert!(html.contains("[new Date(1705350605000), 101.5, undefined, undefined],"));
        assert!(html.contains(r#"<a href="/tub/measure?output=csv">csv</a>"#));
    }
}
