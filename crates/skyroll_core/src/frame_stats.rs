//! Frame rate statistics
//!
//! Counts rendered frames per wall-clock second and keeps a bounded list of
//! samples. The demo logs a min/avg/max report at shutdown.

/// Summary of the recorded frame rate samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsReport {
    pub min: f32,
    pub avg: f32,
    pub max: f32,
}

/// Per-second frame counter with a bounded sample list.
///
/// Feed every frame's `dt` to [`record_frame`](Self::record_frame); whenever
/// a full second has accumulated, the frame count becomes one sample. Once
/// the sample list is full, further frames are ignored.
#[derive(Debug, Clone)]
pub struct FrameStats {
    samples: Vec<f32>,
    capacity: usize,
    accumulated: f32,
    frames: u32,
}

impl FrameStats {
    /// Number of one-second samples kept by [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
            accumulated: 0.0,
            frames: 0,
        }
    }

    /// Record one rendered frame that took `dt` seconds.
    pub fn record_frame(&mut self, dt: f32) {
        if self.samples.len() >= self.capacity {
            return;
        }
        self.accumulated += dt;
        self.frames += 1;
        if self.accumulated > 1.0 {
            self.samples.push(self.frames as f32);
            self.frames = 0;
            self.accumulated = 0.0;
        }
    }

    /// The most recently completed one-second sample, if any.
    pub fn latest(&self) -> Option<f32> {
        self.samples.last().copied()
    }

    /// Min/avg/max over the completed samples. `None` before the first full
    /// second has been recorded.
    pub fn report(&self) -> Option<FpsReport> {
        if self.samples.is_empty() {
            return None;
        }
        let mut min = f32::MAX;
        let mut max = 0.0f32;
        let mut total = 0.0f32;
        for &fps in &self.samples {
            min = min.min(fps);
            max = max.max(fps);
            total += fps;
        }
        Some(FpsReport {
            min,
            avg: total / self.samples.len() as f32,
            max,
        })
    }

    /// Log the report, or note that no full second was recorded.
    pub fn log_report(&self) {
        match self.report() {
            Some(report) => {
                log::info!("Min FPS: {:.1}", report.min);
                log::info!("Avg FPS: {:.1}", report.avg);
                log::info!("Max FPS: {:.1}", report.max);
            }
            None => log::info!("No frame rate samples recorded"),
        }
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats_have_no_report() {
        let stats = FrameStats::new();
        assert_eq!(stats.report(), None);
        assert_eq!(stats.latest(), None);
    }

    #[test]
    fn test_partial_second_has_no_report() {
        let mut stats = FrameStats::new();
        for _ in 0..30 {
            stats.record_frame(1.0 / 60.0);
        }
        assert_eq!(stats.report(), None);
    }

    #[test]
    fn test_samples_complete_after_a_second() {
        let mut stats = FrameStats::new();
        // 51 frames at 50 Hz pushes the accumulator past one second.
        for _ in 0..51 {
            stats.record_frame(0.02);
        }
        assert_eq!(stats.latest(), Some(51.0));
    }

    #[test]
    fn test_report_math() {
        let mut stats = FrameStats::new();
        // Two one-second windows at different frame rates.
        for _ in 0..26 {
            stats.record_frame(0.04);
        }
        for _ in 0..51 {
            stats.record_frame(0.02);
        }
        let report = stats.report().unwrap();
        assert_eq!(report.min, 26.0);
        assert_eq!(report.max, 51.0);
        assert!((report.avg - 38.5).abs() < 1e-5);
    }

    #[test]
    fn test_recording_stops_at_capacity() {
        let mut stats = FrameStats::with_capacity(2);
        for _ in 0..1000 {
            stats.record_frame(0.6);
        }
        let report = stats.report().unwrap();
        assert_eq!(report.min, 2.0);
        assert_eq!(report.max, 2.0);
        assert_eq!(stats.latest(), Some(2.0));
    }
}
