//! Lifecycle of the continuous redraw loop.

use std::time::{Duration, Instant};

use pixelwarp_common::EffectPhase;
use pixelwarp_renderer::FrameTimer;

/// Explicit handle for the redraw loop: `Initializing -> Running -> Stopped`.
///
/// Once stopped the loop never restarts; no further frames are rendered.
pub struct FrameLoop {
    phase: EffectPhase,
    timer: FrameTimer,
    fps_log_interval: Option<Duration>,
    last_fps_log: Option<Instant>,
}

impl FrameLoop {
    /// `fps_log_interval_secs` of 0 disables FPS logging.
    pub fn new(fps_log_interval_secs: u32) -> Self {
        Self {
            phase: EffectPhase::Initializing,
            timer: FrameTimer::new(),
            fps_log_interval: (fps_log_interval_secs > 0)
                .then(|| Duration::from_secs(u64::from(fps_log_interval_secs))),
            last_fps_log: None,
        }
    }

    pub fn phase(&self) -> EffectPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    /// Move to `Running`. Returns `false` unless the loop was initializing.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.phase != EffectPhase::Initializing {
            return false;
        }
        self.phase = EffectPhase::Running;
        self.last_fps_log = Some(now);
        tracing::debug!("Frame loop running");
        true
    }

    /// Move to `Stopped`. Returns `false` if it already was.
    pub fn stop(&mut self) -> bool {
        if self.phase.is_stopped() {
            return false;
        }
        self.phase = EffectPhase::Stopped;
        true
    }

    /// Record a presented frame. Returns the rolling FPS when a log line
    /// was due.
    pub fn frame_presented(&mut self, now: Instant) -> Option<f64> {
        self.timer.record(now);

        let interval = self.fps_log_interval?;
        let last = self.last_fps_log.get_or_insert(now);
        if now.saturating_duration_since(*last) < interval {
            return None;
        }
        *last = now;

        let fps = self.timer.fps();
        tracing::debug!(
            "FPS: {:.1} ({:.2} ms/frame)",
            fps,
            self.timer.frame_time_ms()
        );
        Some(fps)
    }

    pub fn frames_total(&self) -> u64 {
        self.timer.frames_total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_initializing() {
        let fl = FrameLoop::new(0);
        assert_eq!(fl.phase(), EffectPhase::Initializing);
        assert!(!fl.is_running());
    }

    #[test]
    fn start_then_stop() {
        let mut fl = FrameLoop::new(0);
        assert!(fl.start(Instant::now()));
        assert!(fl.is_running());
        assert!(fl.stop());
        assert_eq!(fl.phase(), EffectPhase::Stopped);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut fl = FrameLoop::new(0);
        assert!(fl.stop());
        assert!(!fl.stop());
    }

    #[test]
    fn stopped_loop_never_restarts() {
        let mut fl = FrameLoop::new(0);
        fl.start(Instant::now());
        fl.stop();
        assert!(!fl.start(Instant::now()));
        assert!(!fl.is_running());
    }

    #[test]
    fn fps_logging_disabled_by_default() {
        let mut fl = FrameLoop::new(0);
        let t0 = Instant::now();
        fl.start(t0);
        for i in 1..=200u32 {
            assert!(fl.frame_presented(t0 + Duration::from_millis(16) * i).is_none());
        }
        assert_eq!(fl.frames_total(), 200);
    }

    #[test]
    fn fps_logged_once_per_interval() {
        let mut fl = FrameLoop::new(1);
        let t0 = Instant::now();
        fl.start(t0);

        let mut logged = Vec::new();
        // 2.5 seconds at 100 Hz
        for i in 1..=250u32 {
            if let Some(fps) = fl.frame_presented(t0 + Duration::from_millis(10) * i) {
                logged.push(fps);
            }
        }
        assert_eq!(logged.len(), 2);
        assert!(logged.iter().all(|fps| (fps - 100.0).abs() < 1.0));
    }
}
