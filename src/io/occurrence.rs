//! Occurrence data loading
//!
//! Reads the occurrence stage's output:
//!
//! ```json
//! {"data": {"occurrence_points": [{"lon": 36.8, "lat": -1.3}, {"longitude": 35.0, "latitude": -2.1}]}}
//! ```
//!
//! Each entry may use either key spelling. Entries with missing,
//! unparseable or out-of-range coordinates are dropped and counted.

use std::fs;
use std::path::Path;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::coordinate::Point;
use crate::errors::{RangeError, RangeResult, RangeWarning};

#[derive(Debug, Default, Deserialize)]
struct OccurrenceFile {
    #[serde(default)]
    data: OccurrenceData,
}

#[derive(Debug, Default, Deserialize)]
struct OccurrenceData {
    #[serde(default)]
    occurrence_points: Vec<Value>,
}

/// Usable occurrence points and how many records were rejected
#[derive(Debug, Clone, PartialEq)]
pub struct OccurrenceSet {
    pub points: Vec<Point>,
    pub total_records: usize,
    pub excluded: usize,
}

impl OccurrenceSet {
    /// Warnings produced while loading
    pub fn warnings(&self) -> Vec<RangeWarning> {
        if self.excluded > 0 {
            vec![RangeWarning::MalformedCoordinates { excluded: self.excluded }]
        } else {
            Vec::new()
        }
    }
}

/// Read a numeric coordinate from a JSON number or numeric string
fn coordinate_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Extract a valid longitude/latitude point from one occurrence entry
pub fn parse_entry(entry: &Value) -> Option<Point> {
    let object = entry.as_object()?;

    let (lon, lat) = match (object.get("lon"), object.get("lat")) {
        (Some(lon), Some(lat)) => (lon, lat),
        _ => (object.get("longitude")?, object.get("latitude")?),
    };

    let point = Point::new(coordinate_value(lon)?, coordinate_value(lat)?);
    point.is_valid_geographic().then_some(point)
}

/// Convert raw occurrence entries into a point set
pub fn parse_occurrence_points(entries: &[Value]) -> OccurrenceSet {
    let mut points = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match parse_entry(entry) {
            Some(point) => points.push(point),
            None => debug!("Skipping occurrence record {}: {}", index, entry),
        }
    }

    let excluded = entries.len() - points.len();
    if excluded > 0 {
        warn!("Excluded {} of {} occurrence records with invalid coordinates", excluded, entries.len());
    }

    OccurrenceSet {
        points,
        total_records: entries.len(),
        excluded,
    }
}

/// Parse an occurrence document
///
/// # Returns
/// The point set, or `MissingInput` when the document holds no occurrence records
pub fn parse_occurrence_json(text: &str) -> RangeResult<OccurrenceSet> {
    let file: OccurrenceFile = serde_json::from_str(text)?;

    if file.data.occurrence_points.is_empty() {
        return Err(RangeError::MissingInput("No occurrence points found in data".to_string()));
    }

    Ok(parse_occurrence_points(&file.data.occurrence_points))
}

/// Load the occurrence file for one species
pub fn load_occurrences(path: &Path) -> RangeResult<OccurrenceSet> {
    if !path.exists() {
        return Err(RangeError::MissingInput(format!("Occurrence data not found: {}", path.display())));
    }

    let text = fs::read_to_string(path)?;
    let occurrences = parse_occurrence_json(&text)?;
    info!("Processing {} occurrence points...", occurrences.points.len());
    Ok(occurrences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_both_key_spellings() {
        let set = parse_occurrence_points(&[
            json!({"lon": 10.0, "lat": 20.0}),
            json!({"longitude": -5.5, "latitude": 40.25, "source": "gbif"}),
        ]);

        assert_eq!(set.points, vec![Point::new(10.0, 20.0), Point::new(-5.5, 40.25)]);
        assert_eq!(set.excluded, 0);
        assert!(set.warnings().is_empty());
    }

    #[test]
    fn test_malformed_entries_are_excluded() {
        let set = parse_occurrence_points(&[
            json!({"lon": 10.0}),
            json!({"lon": "abc", "lat": 1.0}),
            json!({"lon": 200.0, "lat": 1.0}),
            json!({"lon": 1.0, "lat": -91.0}),
            json!({"lon": null, "lat": 1.0}),
            json!([1.0, 2.0]),
            json!({"lon": " 12.5 ", "lat": "-3"}),
        ]);

        assert_eq!(set.points, vec![Point::new(12.5, -3.0)]);
        assert_eq!(set.total_records, 7);
        assert_eq!(set.excluded, 6);
        assert_eq!(set.warnings(), vec![RangeWarning::MalformedCoordinates { excluded: 6 }]);
    }

    #[test]
    fn test_short_keys_take_precedence() {
        let point = parse_entry(&json!({"lon": 1.0, "lat": 2.0, "longitude": 3.0, "latitude": 4.0}));
        assert_eq!(point, Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_empty_document_is_missing_input() {
        for text in [r#"{}"#, r#"{"data": {}}"#, r#"{"data": {"occurrence_points": []}}"#] {
            assert!(matches!(parse_occurrence_json(text), Err(RangeError::MissingInput(_))));
        }
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_occurrence_json("not json"), Err(RangeError::JsonError(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_occurrences(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(RangeError::MissingInput(_))));
    }
}
