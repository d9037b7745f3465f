// SPDX-License-Identifier: MPL-2.0
//! Touch gesture classification
//!
//! Turns the pointer samples of one touch session into either a single tap or
//! a stream of live seek, volume or brightness adjustments. The classifier is
//! a pure state machine: it reads the snapshot handed to it at pointer-down
//! and never touches the engine or the device itself.

use crate::config::Config;
use crate::domain::gesture::{
    Adjustment, Brightness, GestureMode, SwipeSensitivity, Tap, TapTolerance, Viewport,
    VolumeLevel,
};

/// Values captured at pointer-down that every later sample is measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSnapshot {
    /// Stream volume and its maximum.
    pub volume: VolumeLevel,
    /// Window brightness, with "follow system" already mapped to the default.
    pub brightness: Brightness,
    /// Playback position in milliseconds.
    pub position_ms: u64,
    /// Media duration, `None` while unknown.
    pub duration_ms: Option<u64>,
}

/// Tuning parameters of the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTuning {
    pub tolerance: TapTolerance,
    pub sensitivity: SwipeSensitivity,
    /// Fraction of the duration covered by a full-width swipe.
    pub seek_window_fraction: f64,
    /// Lower bound of the seek window so short clips stay controllable.
    pub min_seek_window_ms: u64,
}

impl GestureTuning {
    /// Reads the tuning from the `[gestures]` config section.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            tolerance: config.tap_tolerance(),
            sensitivity: config.swipe_sensitivity(),
            seek_window_fraction: config.seek_window_fraction(),
            min_seek_window_ms: config.min_seek_window_ms(),
        }
    }
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone, Copy)]
struct GestureSession {
    start_x: f32,
    start_y: f32,
    mode: Option<GestureMode>,
    initial: GestureSnapshot,
}

/// Classifies one touch session at a time.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    tuning: GestureTuning,
    viewport: Viewport,
    session: Option<GestureSession>,
}

impl GestureClassifier {
    #[must_use]
    pub fn new(tuning: GestureTuning, viewport: Viewport) -> Self {
        Self {
            tuning,
            viewport,
            session: None,
        }
    }

    /// Updates the surface size used for new samples.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether a touch session is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Mode of the current session, if one has been resolved.
    #[must_use]
    pub fn mode(&self) -> Option<GestureMode> {
        self.session.and_then(|s| s.mode)
    }

    /// Starts a session. A session still in progress is replaced.
    pub fn on_down(&mut self, x: f32, y: f32, snapshot: GestureSnapshot) {
        self.session = Some(GestureSession {
            start_x: x,
            start_y: y,
            mode: None,
            initial: snapshot,
        });
    }

    /// Feeds a move sample and returns the adjustment to apply, if any.
    pub fn on_move(&mut self, x: f32, y: f32) -> Option<Adjustment> {
        let viewport = self.viewport;
        let tuning = self.tuning;
        let session = self.session.as_mut()?;

        let dx = x - session.start_x;
        let dy = y - session.start_y;
        if !dx.is_finite() || !dy.is_finite() {
            tracing::trace!(x, y, "non-finite pointer sample ignored");
            return None;
        }

        let mode = match session.mode {
            Some(mode) => mode,
            None => {
                if dx.hypot(dy) < tuning.tolerance.value() {
                    return None;
                }
                let mode = if dx.abs() > dy.abs() {
                    GestureMode::Seek
                } else if session.start_x < viewport.mid_x() {
                    GestureMode::Brightness
                } else {
                    GestureMode::Volume
                };
                tracing::debug!(%mode, dx, dy, "gesture mode resolved");
                session.mode = Some(mode);
                mode
            }
        };

        let initial = session.initial;
        match mode {
            GestureMode::Seek => seek_target(&tuning, viewport, &initial, dx),
            GestureMode::Volume => volume_target(&tuning, viewport, &initial, dy),
            GestureMode::Brightness => brightness_target(&tuning, viewport, &initial, dy),
        }
    }

    /// Ends the session on pointer-up.
    ///
    /// Returns a [`Tap`] when no mode was resolved; adjustments were already
    /// applied live, so a swipe produces nothing here.
    pub fn on_up(&mut self) -> Option<Tap> {
        self.finish()
    }

    /// Ends the session on cancellation. Same outcome as [`Self::on_up`].
    pub fn on_cancel(&mut self) -> Option<Tap> {
        self.finish()
    }

    fn finish(&mut self) -> Option<Tap> {
        let session = self.session.take()?;
        session.mode.is_none().then_some(Tap {
            x: session.start_x,
            y: session.start_y,
        })
    }
}

fn seek_target(
    tuning: &GestureTuning,
    viewport: Viewport,
    initial: &GestureSnapshot,
    dx: f32,
) -> Option<Adjustment> {
    let duration = initial.duration_ms.filter(|&d| d > 0)?;
    let fraction = f64::from(viewport.width_fraction(dx).unwrap_or(0.0));

    let window = (duration as f64 * tuning.seek_window_fraction)
        .max(tuning.min_seek_window_ms as f64);
    let target = (initial.position_ms as f64 + fraction * window)
        .round()
        .clamp(0.0, duration as f64);

    Some(Adjustment::Seek {
        target_ms: target as u64,
    })
}

fn volume_target(
    tuning: &GestureTuning,
    viewport: Viewport,
    initial: &GestureSnapshot,
    dy: f32,
) -> Option<Adjustment> {
    let max = initial.volume.max();
    let fraction = -viewport.height_fraction(dy).unwrap_or(0.0);

    let delta = fraction * tuning.sensitivity.value() * max as f32;
    let level = (initial.volume.level() as f32 + delta)
        .round()
        .clamp(0.0, max as f32);

    Some(Adjustment::Volume(VolumeLevel::new(level as u32, max)))
}

fn brightness_target(
    tuning: &GestureTuning,
    viewport: Viewport,
    initial: &GestureSnapshot,
    dy: f32,
) -> Option<Adjustment> {
    let fraction = -viewport.height_fraction(dy).unwrap_or(0.0);
    let value = initial.brightness.value() + fraction * tuning.sensitivity.value();
    Some(Adjustment::Brightness(Brightness::new(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, UNIT_EPSILON};

    fn snapshot() -> GestureSnapshot {
        GestureSnapshot {
            volume: VolumeLevel::new(7, 15),
            brightness: Brightness::new(0.5),
            position_ms: 20_000,
            duration_ms: Some(100_000),
        }
    }

    fn classifier(width: f32, height: f32) -> GestureClassifier {
        GestureClassifier::new(GestureTuning::default(), Viewport::new(width, height))
    }

    #[test]
    fn small_wobble_is_a_tap() {
        let mut gestures = classifier(800.0, 1200.0);
        gestures.on_down(100.0, 500.0, snapshot());

        assert_eq!(gestures.on_move(105.0, 500.0), None);
        assert_eq!(gestures.mode(), None);
        assert_eq!(gestures.on_up(), Some(Tap { x: 100.0, y: 500.0 }));
        assert!(!gestures.is_active());
    }

    #[test]
    fn horizontal_swipe_seeks_relative_to_initial_position() {
        let mut gestures = classifier(1000.0, 1000.0);
        gestures.on_down(500.0, 500.0, snapshot());

        assert_eq!(
            gestures.on_move(600.0, 500.0),
            Some(Adjustment::Seek { target_ms: 22_500 })
        );
        assert_eq!(gestures.on_up(), None);
    }

    #[test]
    fn short_clip_uses_minimum_seek_window() {
        let mut gestures = classifier(1000.0, 1000.0);
        let snap = GestureSnapshot {
            position_ms: 0,
            duration_ms: Some(40_000),
            ..snapshot()
        };
        gestures.on_down(0.0, 500.0, snap);

        // window = max(10_000, 20_000)
        assert_eq!(
            gestures.on_move(500.0, 500.0),
            Some(Adjustment::Seek { target_ms: 10_000 })
        );
    }

    #[test]
    fn seek_target_is_clamped_to_duration() {
        let mut gestures = classifier(1000.0, 1000.0);
        gestures.on_down(500.0, 500.0, snapshot());

        assert_eq!(
            gestures.on_move(-5000.0, 500.0),
            Some(Adjustment::Seek { target_ms: 0 })
        );
        assert_eq!(
            gestures.on_move(9000.0, 500.0),
            Some(Adjustment::Seek { target_ms: 100_000 })
        );
    }

    #[test]
    fn seek_is_noop_without_duration() {
        for duration_ms in [None, Some(0)] {
            let mut gestures = classifier(1000.0, 1000.0);
            gestures.on_down(500.0, 500.0, GestureSnapshot { duration_ms, ..snapshot() });

            assert_eq!(gestures.on_move(700.0, 500.0), None);
            assert_eq!(gestures.mode(), Some(GestureMode::Seek));
            assert_eq!(gestures.on_up(), None);
        }
    }

    #[test]
    fn vertical_swipe_on_right_half_changes_volume() {
        let mut gestures = classifier(800.0, 1000.0);
        gestures.on_down(600.0, 800.0, snapshot());

        // -dy/h = 0.2, 0.2 * 2.5 * 15 = 7.5, 7 + 7.5 = 14.5 rounds to 15
        assert_eq!(
            gestures.on_move(600.0, 600.0),
            Some(Adjustment::Volume(VolumeLevel::new(15, 15)))
        );
        assert_eq!(gestures.mode(), Some(GestureMode::Volume));
    }

    #[test]
    fn vertical_swipe_on_left_half_changes_brightness() {
        let mut gestures = classifier(800.0, 1000.0);
        gestures.on_down(100.0, 500.0, snapshot());

        match gestures.on_move(100.0, 580.0) {
            Some(Adjustment::Brightness(b)) => {
                assert_abs_diff_eq!(b.value(), 0.3, epsilon = UNIT_EPSILON);
            }
            other => panic!("expected brightness, got {other:?}"),
        }
    }

    #[test]
    fn volume_and_brightness_stay_in_bounds() {
        let mut gestures = classifier(800.0, 1000.0);
        gestures.on_down(600.0, 500.0, snapshot());
        assert_eq!(
            gestures.on_move(600.0, 50_000.0),
            Some(Adjustment::Volume(VolumeLevel::new(0, 15)))
        );

        gestures.on_down(100.0, 500.0, snapshot());
        match gestures.on_move(100.0, -50_000.0) {
            Some(Adjustment::Brightness(b)) => assert_abs_diff_eq!(b.value(), 1.0),
            other => panic!("expected brightness, got {other:?}"),
        }
    }

    #[test]
    fn mode_never_changes_within_a_session() {
        let mut gestures = classifier(1000.0, 1000.0);
        gestures.on_down(500.0, 500.0, snapshot());

        assert!(matches!(
            gestures.on_move(530.0, 500.0),
            Some(Adjustment::Seek { .. })
        ));
        // Now mostly vertical, still seeking
        assert!(matches!(
            gestures.on_move(540.0, 100.0),
            Some(Adjustment::Seek { .. })
        ));
        assert_eq!(gestures.mode(), Some(GestureMode::Seek));
    }

    #[test]
    fn diagonal_tie_is_vertical() {
        let mut gestures = classifier(1000.0, 1000.0);
        gestures.on_down(800.0, 500.0, snapshot());
        gestures.on_move(830.0, 470.0);
        assert_eq!(gestures.mode(), Some(GestureMode::Volume));
    }

    #[test]
    fn zero_viewport_is_no_motion() {
        let mut gestures = classifier(0.0, 0.0);
        gestures.on_down(0.0, 500.0, snapshot());

        assert_eq!(
            gestures.on_move(100.0, 500.0),
            Some(Adjustment::Seek { target_ms: 20_000 })
        );

        gestures.on_down(0.0, 500.0, snapshot());
        // mid_x is 0, so x=0 is not left of it
        assert_eq!(
            gestures.on_move(0.0, 100.0),
            Some(Adjustment::Volume(VolumeLevel::new(7, 15)))
        );
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let mut gestures = classifier(800.0, 1200.0);
        gestures.on_down(600.0, 500.0, snapshot());

        assert_eq!(gestures.on_move(600.0, f32::NAN), None);
        assert_eq!(gestures.on_move(f32::INFINITY, 500.0), None);
        assert_eq!(gestures.mode(), None);

        // The session keeps going with the next valid sample.
        assert_eq!(
            gestures.on_move(600.0, 260.0),
            Some(Adjustment::Volume(VolumeLevel::new(15, 15)))
        );
    }

    #[test]
    fn cancel_under_tolerance_is_a_tap() {
        let mut gestures = classifier(800.0, 1200.0);
        gestures.on_down(10.0, 10.0, snapshot());
        assert_eq!(gestures.on_cancel(), Some(Tap { x: 10.0, y: 10.0 }));
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut gestures = classifier(800.0, 1200.0);
        assert_eq!(gestures.on_move(500.0, 500.0), None);
        assert_eq!(gestures.on_up(), None);
    }

    #[test]
    fn seek_target_is_monotonic_in_dx() {
        let mut gestures = classifier(1000.0, 1000.0);
        gestures.on_down(500.0, 500.0, snapshot());

        let mut last = 0;
        for x in (-600..=1600).step_by(25) {
            if let Some(Adjustment::Seek { target_ms }) = gestures.on_move(x as f32, 500.0) {
                assert!(target_ms >= last);
                assert!(target_ms <= 100_000);
                last = target_ms;
            }
        }
    }
}
