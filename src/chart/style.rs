use plotters::style::RGBColor;

use crate::models::ActivityStatus;

pub const COMPLETED: RGBColor = RGBColor(0x2e, 0xcc, 0x71);
pub const IN_PROGRESS: RGBColor = RGBColor(0xf3, 0x9c, 0x12);
pub const PENDING: RGBColor = RGBColor(0xe7, 0x4c, 0x3c);

/// Bar fill color for a status. Total over the closed enumeration; unknown
/// status strings are rejected at plan load and never reach rendering.
pub fn status_color(status: ActivityStatus) -> RGBColor {
    match status {
        ActivityStatus::Completed => COMPLETED,
        ActivityStatus::InProgress => IN_PROGRESS,
        ActivityStatus::Pending => PENDING,
    }
}
