//! Radar-chart shape enforcement.
//!
//! The upstream model is trusted for values but not for structure: entries
//! come back re-sorted into the canonical dimension order with the full-mark
//! axis pinned, regardless of how the model ordered them.

use crate::llm_client::LlmError;
use crate::models::report::RadarPoint;

/// The five dimensions every report carries, in display order.
pub const RADAR_DIMENSIONS: [&str; 5] =
    ["薪资待遇", "工作时长", "通勤体验", "城市潜力", "职业发展"];

pub const RADAR_FULL_MARK: f64 = 100.0;

/// Reorders parsed radar entries into canonical order and pins `fullMark`.
/// Unknown subjects are dropped; a missing or duplicated dimension is a
/// shape error. Values are passed through unclamped.
pub fn normalize_radar(points: Vec<RadarPoint>) -> Result<Vec<RadarPoint>, LlmError> {
    let mut ordered = Vec::with_capacity(RADAR_DIMENSIONS.len());
    for subject in RADAR_DIMENSIONS {
        let mut matches = points.iter().filter(|p| p.subject == subject);
        let point = matches
            .next()
            .ok_or_else(|| LlmError::Shape(format!("missing radar dimension {subject}")))?;
        if matches.next().is_some() {
            return Err(LlmError::Shape(format!(
                "duplicated radar dimension {subject}"
            )));
        }
        ordered.push(RadarPoint {
            subject: subject.to_string(),
            value: point.value,
            full_mark: RADAR_FULL_MARK,
        });
    }
    Ok(ordered)
}

/// The all-zero radar carried by fallback reports.
pub fn zero_radar() -> Vec<RadarPoint> {
    RADAR_DIMENSIONS
        .iter()
        .map(|subject| RadarPoint {
            subject: (*subject).to_string(),
            value: 0.0,
            full_mark: RADAR_FULL_MARK,
        })
        .collect()
}
