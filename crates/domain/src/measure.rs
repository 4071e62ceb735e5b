//! Measure — one raw sample posted by the temperature sensor.

use serde::{Deserialize, Serialize};

use crate::id::MeasureId;
use crate::time::Timestamp;

/// Full scale of the useful 12-bit range.
const ADC_FULL_SCALE: f64 = 4095.0;
/// Reference voltage of the converter.
const ADC_REFERENCE_VOLTS: f64 = 3.3;
/// Empirical calibration of the thermistor circuit: `F = (V - OFFSET) / SLOPE`.
const CALIBRATION_OFFSET_VOLTS: f64 = 5.006_909_090_909_11;
const CALIBRATION_SLOPE_VOLTS_PER_F: f64 = -0.029_227_272_727_273;

/// Convert a raw analog-to-digital sample into degrees Fahrenheit.
///
/// The low four bits of the sample are below the sensor resolution and are
/// shifted away before scaling. Defined for every integer, meaningful only
/// for samples the sensor can actually produce.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_to_fahrenheit(sample: i64) -> f64 {
    let volts = (sample >> 4) as f64 / ADC_FULL_SCALE * ADC_REFERENCE_VOLTS;
    (volts - CALIBRATION_OFFSET_VOLTS) / CALIBRATION_SLOPE_VOLTS_PER_F
}

/// An immutable sensor sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    pub id: MeasureId,
    /// Ingestion time.
    pub date: Timestamp,
    /// Raw sample as posted, not unit-converted.
    pub posted_sample: i64,
}

impl Measure {
    /// Stamp a freshly posted sample with the current time.
    #[must_use]
    pub fn new(posted_sample: i64) -> Self {
        Self::recorded_at(posted_sample, crate::time::now())
    }

    /// A sample stamped with an explicit ingestion time.
    #[must_use]
    pub fn recorded_at(posted_sample: i64, date: Timestamp) -> Self {
        Self {
            id: MeasureId::new(),
            date,
            posted_sample,
        }
    }

    /// Estimated temperature for this sample.
    #[must_use]
    pub fn fahrenheit(&self) -> f64 {
        sample_to_fahrenheit(self.posted_sample)
    }
}
