//! Time of day to hand angles.

use crate::config::HandScale;
use crate::error::ClockError;
use crate::geometry::DialGeometry;
use chrono::Timelike;
use std::f64::consts::{FRAC_PI_2, PI};

/// One reading of the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    hour24: u8,
    minute: u8,
    second: u8,
}

impl TimeSample {
    pub fn new(hour24: u8, minute: u8, second: u8) -> Result<Self, ClockError> {
        if hour24 > 23 || minute > 59 || second > 59 {
            return Err(ClockError::TimeOutOfRange {
                hour: hour24,
                minute,
                second,
            });
        }
        Ok(Self {
            hour24,
            minute,
            second,
        })
    }

    pub fn hour24(&self) -> u8 {
        self.hour24
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Hour on the 12-hour dial. Both midnight and noon read 12.
    pub fn hour12(&self) -> u8 {
        match self.hour24 {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        }
    }
}

/// Accepts any chrono time type. Leap seconds are carried in the nanosecond
/// field by chrono, so `second()` is always below 60.
impl<T: Timelike> From<&T> for TimeSample {
    fn from(time: &T) -> Self {
        Self {
            hour24: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandVector {
    pub angle: f64,
    pub length: f64,
}

impl HandVector {
    /// Angle of `position` minutes around the dial, with 0 at twelve o'clock.
    fn at_position(position: f64, length: i32) -> Self {
        Self {
            angle: PI * position / 30.0 - FRAC_PI_2,
            length: length as f64,
        }
    }

    /// Far end of the hand.
    pub fn tip(&self, geometry: &DialGeometry) -> (f64, f64) {
        self.tip_scaled(geometry, self.length)
    }

    /// Far end of the hand with a separate length for the y offset.
    pub fn tip_scaled(&self, geometry: &DialGeometry, vertical_length: f64) -> (f64, f64) {
        (
            geometry.center_x as f64 + self.angle.cos() * self.length,
            geometry.center_y as f64 + self.angle.sin() * vertical_length,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hands {
    pub hour: HandVector,
    pub minute: HandVector,
    pub second: HandVector,
}

impl Hands {
    /// Tips of the hour, minute and second hands, in that order.
    pub fn tips(&self, geometry: &DialGeometry, scale: HandScale) -> [(f64, f64); 3] {
        let long_hand_tip = |hand: &HandVector| match scale {
            HandScale::Uniform => hand.tip(geometry),
            HandScale::HourVertical => hand.tip_scaled(geometry, self.hour.length),
        };
        [
            self.hour.tip(geometry),
            long_hand_tip(&self.minute),
            long_hand_tip(&self.second),
        ]
    }
}

pub fn compute_hands(geometry: &DialGeometry, time: TimeSample) -> Hands {
    let hour_position = (time.hour12() as f64 + time.minute() as f64 / 60.0) * 5.0;
    Hands {
        hour: HandVector::at_position(hour_position, geometry.hour_hand_length),
        minute: HandVector::at_position(time.minute() as f64, geometry.minute_hand_length),
        // Shares the minute hand's length.
        second: HandVector::at_position(time.second() as f64, geometry.minute_hand_length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockConfig;
    use crate::geometry::compute_geometry;

    const EPS: f64 = 1e-9;

    fn sample(h: u8, m: u8, s: u8) -> TimeSample {
        TimeSample::new(h, m, s).unwrap()
    }

    fn geometry_500() -> DialGeometry {
        compute_geometry(500, 500, &ClockConfig::default())
    }

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < EPS && (actual.1 - expected.1).abs() < EPS,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(TimeSample::new(24, 0, 0).is_err());
        assert!(TimeSample::new(0, 60, 0).is_err());
        assert!(TimeSample::new(0, 0, 60).is_err());
        assert!(TimeSample::new(23, 59, 59).is_ok());
    }

    #[test]
    fn midnight_and_noon_both_read_twelve() {
        assert_eq!(sample(0, 0, 0).hour12(), 12);
        assert_eq!(sample(12, 0, 0).hour12(), 12);
    }

    #[test]
    fn afternoon_hours_wrap_to_the_dial() {
        assert_eq!(sample(1, 0, 0).hour12(), 1);
        assert_eq!(sample(11, 0, 0).hour12(), 11);
        assert_eq!(sample(13, 0, 0).hour12(), 1);
        assert_eq!(sample(23, 0, 0).hour12(), 11);
    }

    #[test]
    fn three_oclock_hour_hand_points_right() {
        let g = geometry_500();
        let hands = compute_hands(&g, sample(3, 0, 0));
        assert!(hands.hour.angle.abs() < EPS);
        assert_eq!(hands.hour.length, 68.0);
        assert_close(hands.hour.tip(&g), (318.0, 250.0));
    }

    #[test]
    fn minute_and_second_hands_share_length() {
        let g = geometry_500();
        let hands = compute_hands(&g, sample(8, 20, 45));
        assert_eq!(hands.minute.length, 102.0);
        assert_eq!(hands.second.length, 102.0);
        assert!(hands.hour.length < hands.minute.length);
    }

    #[test]
    fn zero_minute_points_up() {
        let g = geometry_500();
        let hands = compute_hands(&g, sample(5, 0, 30));
        assert!((hands.minute.angle + FRAC_PI_2).abs() < EPS);
        // Thirty seconds is straight down.
        assert!((hands.second.angle - FRAC_PI_2).abs() < EPS);
        assert_close(hands.minute.tip(&g), (250.0, 148.0));
    }

    #[test]
    fn hour_hand_advances_with_minutes() {
        let g = geometry_500();
        let on_the_hour = compute_hands(&g, sample(3, 0, 0)).hour.angle;
        let half_past = compute_hands(&g, sample(3, 30, 0)).hour.angle;
        assert!((half_past - on_the_hour - PI / 12.0).abs() < EPS);
    }

    #[test]
    fn hour_angle_is_monotonic_through_the_cycle() {
        let g = geometry_500();
        let mut previous = f64::NEG_INFINITY;
        for hour in 1..=12u8 {
            for minute in 0..60u8 {
                let angle = compute_hands(&g, sample(hour, minute, 0)).hour.angle;
                assert!(angle > previous, "{hour}:{minute:02}");
                previous = angle;
            }
        }
    }

    #[test]
    fn hour_vertical_scale_uses_hour_length_for_y() {
        let g = geometry_500();
        let hands = compute_hands(&g, sample(12, 0, 30));
        let [_, minute, second] = hands.tips(&g, HandScale::HourVertical);
        assert_close(minute, (250.0, 250.0 - 68.0));
        assert_close(second, (250.0, 250.0 + 68.0));

        let [_, minute, second] = hands.tips(&g, HandScale::Uniform);
        assert_close(minute, (250.0, 250.0 - 102.0));
        assert_close(second, (250.0, 250.0 + 102.0));
    }

    #[test]
    fn hour_vertical_scale_keeps_horizontal_reach() {
        let g = geometry_500();
        let hands = compute_hands(&g, sample(12, 15, 0));
        let [_, minute, _] = hands.tips(&g, HandScale::HourVertical);
        assert_close(minute, (352.0, 250.0));
    }

    #[test]
    fn converts_from_chrono_time() {
        let time = chrono::NaiveTime::from_hms_opt(21, 7, 42).unwrap();
        let sample = TimeSample::from(&time);
        assert_eq!(
            (sample.hour24(), sample.minute(), sample.second()),
            (21, 7, 42)
        );
        assert_eq!(sample.hour12(), 9);
    }
}
