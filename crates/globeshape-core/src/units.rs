//! Display formatting for coordinates, lengths and angles
//!
//! Used by the editor to label control points while they are dragged.

/// Format a latitude in degrees with a hemisphere suffix, e.g. `12.5000°S`
pub fn format_latitude(degrees: f64) -> String {
    let hemisphere = if degrees < 0.0 { 'S' } else { 'N' };
    format!("{:.4}°{}", degrees.abs(), hemisphere)
}

/// Format a longitude in degrees with a hemisphere suffix, e.g. `100.0000°W`
pub fn format_longitude(degrees: f64) -> String {
    let hemisphere = if degrees < 0.0 { 'W' } else { 'E' };
    format!("{:.4}°{}", degrees.abs(), hemisphere)
}

/// Format a length for display
///
/// * `meters` - Length in meters, shown in kilometers to 3 decimal places
pub fn format_length(meters: f64) -> String {
    format!("{:.3} km", meters / 1000.0)
}

/// Format a rotation angle in degrees to 4 decimal places
pub fn format_rotation(degrees: f64) -> String {
    format!("{:.4}°", degrees)
}
