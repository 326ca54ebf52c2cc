use crate::hands::TimeSample;

/// Supplies the time shown on the face.
pub trait ClockSource {
    fn now(&self) -> TimeSample;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> TimeSample {
        TimeSample::from(&chrono::Local::now())
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub TimeSample);

impl ClockSource for FixedClock {
    fn now(&self) -> TimeSample {
        self.0
    }
}
