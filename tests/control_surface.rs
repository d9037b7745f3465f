// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios over `ControlSurface` with simulated collaborators.

use approx::assert_abs_diff_eq;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use swipe_deck::app::{Collaborators, ControlEvent, ControlSurface, UiSignal};
use swipe_deck::application::port::{
    DeviceControls, EngineMessage, NotificationRouter, PlaybackEngine, SettingsStore,
    SharedSettings,
};
use swipe_deck::config::{Config, KEY_REMEMBER_POSITION};
use swipe_deck::domain::gesture::{Viewport, VolumeLevel};
use swipe_deck::domain::media::MediaLocator;
use swipe_deck::domain::ui::{LockIcon, LockState, OverlayRegion, OverlayText};
use swipe_deck::domain::video::{PlayAffordance, PlaybackSpeed};
use swipe_deck::error::ControlError;
use swipe_deck::infrastructure::{
    MemoryStore, SimulatedDevice, SimulatedEngine, SimulatedEngineFactory, SimulatedWakeLock,
};
use swipe_deck::video_player::{PositionStore, ProgressUpdate};

const MOVIE: &str = "movie";

/// A surface plus handles on everything it talks to.
struct Rig {
    surface: ControlSurface,
    engines: SimulatedEngineFactory,
    device: SimulatedDevice,
    wake_lock: Arc<SimulatedWakeLock>,
    inbox: Arc<Mutex<Vec<EngineMessage>>>,
    now: Instant,
}

impl Rig {
    fn new() -> Self {
        Self::with_settings(Arc::new(MemoryStore::new()))
    }

    fn with_settings(settings: Arc<MemoryStore>) -> Self {
        let engines = SimulatedEngineFactory::new()
            .with_media(MOVIE, Some(100_000))
            .with_media("live", None);
        let device = SimulatedDevice::new(7, 15);
        let wake_lock = Arc::new(SimulatedWakeLock::new());
        let inbox = Arc::new(Mutex::new(Vec::new()));

        let delivered = Arc::clone(&inbox);
        let router = NotificationRouter::new(move |message| {
            delivered.lock().unwrap().push(message);
        });
        let settings: SharedSettings = settings;
        let surface = ControlSurface::new(
            &Config::default(),
            Collaborators {
                engines: Box::new(engines.clone()),
                device: Box::new(device.clone()),
                wake_lock: wake_lock.clone(),
                settings,
            },
            router,
            Viewport::new(1000.0, 1000.0),
        );

        Self {
            surface,
            engines,
            device,
            wake_lock,
            inbox,
            now: Instant::now(),
        }
    }

    fn engine(&self) -> SimulatedEngine {
        self.engines.latest().expect("an engine was created")
    }

    /// Handles `event`, then every engine notification it triggered.
    fn send(&mut self, event: ControlEvent) -> Vec<UiSignal> {
        let mut signals = self.surface.handle(event, self.now);
        signals.extend(self.pump());
        signals
    }

    fn pump(&mut self) -> Vec<UiSignal> {
        let mut signals = Vec::new();
        loop {
            let pending: Vec<_> = self.inbox.lock().unwrap().drain(..).collect();
            if pending.is_empty() {
                return signals;
            }
            for message in pending {
                signals.extend(self.surface.handle(ControlEvent::Engine(message), self.now));
            }
        }
    }

    /// Moves both clocks forward and delivers a tick.
    fn advance(&mut self, ms: u64) -> Vec<UiSignal> {
        let elapsed = Duration::from_millis(ms);
        self.now += elapsed;
        if let Some(engine) = self.engines.latest() {
            engine.advance(elapsed);
        }
        let mut signals = self.pump();
        signals.extend(self.send(ControlEvent::Tick));
        signals
    }

    fn open(&mut self, locator: &str) -> Vec<UiSignal> {
        self.send(ControlEvent::Open(locator.to_string()))
    }

    fn swipe(&mut self, from: (f32, f32), to: (f32, f32)) -> Vec<UiSignal> {
        let mut signals = self.send(ControlEvent::PointerDown { x: from.0, y: from.1 });
        signals.extend(self.send(ControlEvent::PointerMove { x: to.0, y: to.1 }));
        signals.extend(self.send(ControlEvent::PointerUp));
        signals
    }

    fn tap(&mut self, x: f32, y: f32) -> Vec<UiSignal> {
        self.swipe((x, y), (x + 5.0, y))
    }
}

fn regions(signals: &[UiSignal]) -> Vec<UiSignal> {
    signals
        .iter()
        .filter(|s| matches!(s, UiSignal::RegionShown(_) | UiSignal::RegionHidden(_)))
        .cloned()
        .collect()
}

fn shown_controls() -> Vec<UiSignal> {
    OverlayRegion::CONTROLS
        .into_iter()
        .map(UiSignal::RegionShown)
        .collect()
}

fn hidden_controls() -> Vec<UiSignal> {
    OverlayRegion::CONTROLS
        .into_iter()
        .map(UiSignal::RegionHidden)
        .collect()
}

#[test]
fn opening_shows_controls_with_play_button() {
    let mut rig = Rig::new();
    let signals = rig.open(MOVIE);

    assert_eq!(
        signals[0],
        UiSignal::Opened {
            locator: MediaLocator::parse(MOVIE).unwrap(),
            start_ms: 0,
        }
    );
    assert_eq!(signals[1], UiSignal::PlayAffordance(PlayAffordance::Play));
    assert_eq!(regions(&signals), shown_controls());
    assert_eq!(rig.engine().loaded().unwrap().as_str(), MOVIE);
}

#[test]
fn controls_auto_hide_and_tap_brings_them_back() {
    let mut rig = Rig::new();
    rig.open(MOVIE);

    assert!(regions(&rig.advance(2_999)).is_empty());
    assert_eq!(regions(&rig.advance(1)), hidden_controls());
    assert!(!rig.surface.is_visible(OverlayRegion::MainOverlay));

    let signals = rig.tap(100.0, 500.0);
    assert_eq!(regions(&signals), shown_controls());

    let signals = rig.tap(100.0, 500.0);
    assert_eq!(regions(&signals), hidden_controls());
}

#[test]
fn horizontal_swipe_seeks_within_window() {
    let mut rig = Rig::new();
    rig.open(MOVIE);
    rig.send(ControlEvent::SeekBarMoved(20));

    // A tenth of the width over a 25 s window.
    let signals = rig.swipe((100.0, 500.0), (200.0, 500.0));

    assert_eq!(rig.engine().seeks(), vec![20_000, 22_500]);
    assert!(signals.contains(&UiSignal::RegionShown(OverlayRegion::GestureIndicator)));
    assert!(signals.contains(&UiSignal::Feedback(OverlayText::Seek { target_ms: 22_500 })));
    assert_eq!(rig.surface.controller().snapshot().unwrap().position_ms, 22_500);
}

#[test]
fn seek_swipe_on_live_stream_does_nothing() {
    let mut rig = Rig::new();
    rig.open("live");

    let signals = rig.swipe((100.0, 500.0), (400.0, 500.0));

    assert!(signals.is_empty());
    assert!(rig.engine().seeks().is_empty());
}

#[test]
fn vertical_swipes_adjust_volume_and_brightness() {
    let mut rig = Rig::new();
    rig.open(MOVIE);

    let signals = rig.swipe((900.0, 600.0), (900.0, 400.0));
    assert_eq!(rig.device.stream_volume(), 15);
    assert!(signals.contains(&UiSignal::Feedback(OverlayText::Volume(VolumeLevel::new(
        15, 15
    )))));

    rig.swipe((100.0, 500.0), (100.0, 580.0));
    let brightness = rig.device.window_brightness().unwrap();
    assert_abs_diff_eq!(brightness.value(), 0.3, epsilon = 1e-5);
}

#[test]
fn garbage_pointer_samples_leave_volume_alone() {
    let mut rig = Rig::new();
    rig.open(MOVIE);

    let signals = rig.swipe((800.0, 500.0), (800.0, f32::NAN));

    assert_eq!(rig.device.stream_volume(), 7);
    assert!(!signals.iter().any(|s| matches!(s, UiSignal::Feedback(_))));
}

#[test]
fn feedback_regions_hide_after_short_delay() {
    let mut rig = Rig::new();
    rig.open(MOVIE);
    rig.swipe((900.0, 600.0), (900.0, 500.0));

    let signals = rig.advance(1_000);
    assert!(signals.contains(&UiSignal::RegionHidden(OverlayRegion::GestureIndicator)));
    assert!(signals.contains(&UiSignal::RegionHidden(OverlayRegion::TransientText)));
    assert!(rig.surface.is_visible(OverlayRegion::MainOverlay));
}

#[test]
fn playback_to_the_end_offers_replay() {
    let mut rig = Rig::new();
    rig.open(MOVIE);

    let signals = rig.send(ControlEvent::PlayPause);
    assert!(signals.contains(&UiSignal::PlayAffordance(PlayAffordance::Pause)));
    assert!(rig.wake_lock.is_held());

    rig.advance(4_000);
    let signals = rig.advance(100_000);

    assert!(signals.contains(&UiSignal::PlayAffordance(PlayAffordance::Replay)));
    assert!(signals.contains(&UiSignal::Progress(ProgressUpdate {
        position_secs: 0,
        max_secs: 100,
    })));
    assert!(rig.surface.is_visible(OverlayRegion::MainOverlay));
    assert!(!rig.wake_lock.is_held());
    assert!(rig.surface.controller().is_ended());
    assert_eq!(rig.surface.controller().snapshot().unwrap().position_ms, 0);

    let signals = rig.send(ControlEvent::PlayPause);
    assert!(signals.contains(&UiSignal::PlayAffordance(PlayAffordance::Pause)));
    assert_eq!(rig.engine().seeks().last(), Some(&0));
    assert!(rig.wake_lock.is_held());
}

fn play_to_the_end(rig: &mut Rig) {
    rig.open(MOVIE);
    rig.send(ControlEvent::PlayPause);
    let signals = rig.advance(100_000);
    assert!(signals.contains(&UiSignal::PlayAffordance(PlayAffordance::Replay)));
}

#[test]
fn swipe_after_end_turns_replay_into_play() {
    let mut rig = Rig::new();
    play_to_the_end(&mut rig);

    let signals = rig.swipe((100.0, 500.0), (200.0, 500.0));
    assert!(signals.contains(&UiSignal::PlayAffordance(PlayAffordance::Play)));
    assert_eq!(rig.surface.controller().affordance(), PlayAffordance::Play);

    // Play resumes from the swipe target instead of replaying from 0.
    let signals = rig.send(ControlEvent::PlayPause);
    assert!(signals.contains(&UiSignal::PlayAffordance(PlayAffordance::Pause)));
    assert_eq!(rig.engine().seeks(), vec![2_500]);
}

#[test]
fn seek_bar_after_end_turns_replay_into_play() {
    let mut rig = Rig::new();
    play_to_the_end(&mut rig);

    let signals = rig.send(ControlEvent::SeekBarMoved(30));
    assert!(signals.contains(&UiSignal::PlayAffordance(PlayAffordance::Play)));

    let signals = rig.send(ControlEvent::SkipBackward);
    assert!(!signals
        .iter()
        .any(|s| matches!(s, UiSignal::PlayAffordance(_))));
    assert_eq!(rig.engine().seeks(), vec![30_000, 20_000]);
}

#[test]
fn skip_after_end_turns_replay_into_play() {
    let mut rig = Rig::new();
    play_to_the_end(&mut rig);

    let signals = rig.send(ControlEvent::SkipBackward);
    assert!(signals.contains(&UiSignal::PlayAffordance(PlayAffordance::Play)));
    assert_eq!(rig.surface.controller().affordance(), PlayAffordance::Play);
}

#[test]
fn skip_buttons_clamp_to_media_bounds() {
    let mut rig = Rig::new();
    rig.open(MOVIE);

    rig.send(ControlEvent::SkipBackward);
    assert_eq!(rig.engine().seeks(), vec![0]);

    rig.send(ControlEvent::SeekBarMoved(95));
    rig.send(ControlEvent::SkipForward);
    assert_eq!(rig.engine().seeks(), vec![0, 95_000, 100_000]);
}

#[test]
fn fullscreen_button_flips_the_flag() {
    let mut rig = Rig::new();
    rig.open(MOVIE);
    assert!(!rig.surface.is_fullscreen());

    assert_eq!(
        rig.send(ControlEvent::FullscreenToggled),
        vec![UiSignal::Fullscreen(true)]
    );
    assert!(rig.surface.is_fullscreen());
    assert_eq!(
        rig.send(ControlEvent::FullscreenToggled),
        vec![UiSignal::Fullscreen(false)]
    );
    assert!(!rig.surface.is_fullscreen());
}

#[test]
fn lock_blocks_everything_but_taps_and_unlock() {
    let mut rig = Rig::new();
    rig.open(MOVIE);

    let signals = rig.send(ControlEvent::LockToggled);
    assert_eq!(
        signals,
        [
            hidden_controls(),
            vec![UiSignal::LockIcon(Some(LockIcon::Closed))]
        ]
        .concat()
    );
    assert_eq!(rig.surface.lock_state(), LockState::LockedVisible);

    assert!(rig.swipe((900.0, 600.0), (900.0, 400.0)).is_empty());
    assert_eq!(rig.device.stream_volume(), 7);
    assert!(rig.send(ControlEvent::PlayPause).is_empty());
    assert!(!rig.engine().is_playing());
    assert!(rig.send(ControlEvent::SeekBarMoved(30)).is_empty());
    assert!(rig.send(ControlEvent::FullscreenToggled).is_empty());
    assert!(rig.engine().seeks().is_empty());

    let signals = rig.send(ControlEvent::LockToggled);
    assert_eq!(
        signals,
        [
            vec![UiSignal::LockIcon(Some(LockIcon::Open))],
            shown_controls()
        ]
        .concat()
    );
    assert_eq!(rig.surface.lock_state(), LockState::Unlocked);
}

#[test]
fn lock_button_hides_and_taps_rearm_it() {
    let mut rig = Rig::new();
    rig.open(MOVIE);
    rig.send(ControlEvent::LockToggled);

    rig.advance(2_000);
    assert!(rig.tap(500.0, 500.0).is_empty());
    assert!(!rig.advance(1_500).contains(&UiSignal::LockIcon(None)));
    assert_eq!(rig.surface.lock_state(), LockState::LockedVisible);

    assert!(rig.advance(1_500).contains(&UiSignal::LockIcon(None)));
    assert_eq!(rig.surface.lock_state(), LockState::LockedHidden);

    assert_eq!(
        rig.tap(500.0, 500.0),
        vec![UiSignal::LockIcon(Some(LockIcon::Closed))]
    );
    assert_eq!(rig.surface.lock_state(), LockState::LockedVisible);
}

#[test]
fn position_is_saved_on_close_and_restored_on_open() {
    let settings = Arc::new(MemoryStore::new());
    let mut rig = Rig::with_settings(Arc::clone(&settings));
    rig.open(MOVIE);
    rig.send(ControlEvent::SeekBarMoved(42));

    let engine = rig.engine();
    let signals = rig.send(ControlEvent::Close);
    assert_eq!(signals.last(), Some(&UiSignal::Closed));
    assert!(engine.is_released());
    assert!(!rig.wake_lock.is_held());

    let key = PositionStore::key(&MediaLocator::parse(MOVIE).unwrap());
    assert_eq!(settings.get_long(&key, -1).unwrap(), 42_000);

    let mut reopened = Rig::with_settings(settings);
    let signals = reopened.open(MOVIE);
    assert_eq!(
        signals[0],
        UiSignal::Opened {
            locator: MediaLocator::parse(MOVIE).unwrap(),
            start_ms: 42_000,
        }
    );
    assert_eq!(
        reopened.surface.controller().snapshot().unwrap().position_ms,
        42_000
    );
}

#[test]
fn disabled_remember_position_writes_nothing() {
    let settings = Arc::new(MemoryStore::new());
    settings.set_bool(KEY_REMEMBER_POSITION, false).unwrap();
    let mut rig = Rig::with_settings(Arc::clone(&settings));
    rig.open(MOVIE);
    rig.send(ControlEvent::SeekBarMoved(42));
    rig.send(ControlEvent::Close);

    let key = PositionStore::key(&MediaLocator::parse(MOVIE).unwrap());
    assert!(!settings.contains(&key));
    assert_eq!(settings.len(), 1);
}

#[test]
fn opening_another_item_saves_the_previous_one() {
    let settings = Arc::new(MemoryStore::new());
    let mut rig = Rig::with_settings(Arc::clone(&settings));
    rig.open(MOVIE);
    rig.send(ControlEvent::SeekBarMoved(12));
    let first = rig.engine();

    rig.open("live");

    assert!(first.is_released());
    assert_eq!(rig.engines.created(), 2);
    let key = PositionStore::key(&MediaLocator::parse(MOVIE).unwrap());
    assert_eq!(settings.get_long(&key, -1).unwrap(), 12_000);
}

#[test]
fn bad_locators_report_failure_and_keep_running() {
    let mut rig = Rig::new();

    let signals = rig.open("   ");
    assert!(matches!(
        signals.as_slice(),
        [UiSignal::Failed(ControlError::InitializationFailed(_))]
    ));
    assert_eq!(rig.engines.created(), 0);

    let signals = rig.open("missing");
    assert!(matches!(
        signals.as_slice(),
        [UiSignal::Failed(ControlError::InitializationFailed(_))]
    ));
    assert!(rig.engine().is_released());

    let signals = rig.send(ControlEvent::PlayPause);
    assert!(signals.contains(&UiSignal::Failed(ControlError::NotInitialized)));

    let signals = rig.open(MOVIE);
    assert!(matches!(signals[0], UiSignal::Opened { .. }));
}

#[test]
fn progress_pauses_in_background() {
    let mut rig = Rig::new();
    rig.open(MOVIE);
    rig.send(ControlEvent::Deactivated);

    let signals = rig.advance(3_000);
    assert!(!signals.iter().any(|s| matches!(s, UiSignal::Progress(_))));
    assert!(rig.surface.next_deadline().is_none());

    rig.send(ControlEvent::Activated);
    let signals = rig.advance(0);
    assert!(signals.contains(&UiSignal::Progress(ProgressUpdate {
        position_secs: 0,
        max_secs: 100,
    })));
}

#[test]
fn speed_selection_shows_feedback() {
    let mut rig = Rig::new();
    rig.open(MOVIE);
    let signals = rig.send(ControlEvent::SpeedSelected(PlaybackSpeed::new(1.5)));

    assert!(signals.contains(&UiSignal::Feedback(OverlayText::Speed(1.5))));
    assert_eq!(rig.engine().speed(), PlaybackSpeed::new(1.5));
}

#[test]
fn events_after_close_are_ignored() {
    let mut rig = Rig::new();
    rig.open(MOVIE);
    rig.send(ControlEvent::Close);

    assert!(rig.send(ControlEvent::PlayPause).is_empty());
    assert!(rig.open(MOVIE).is_empty());
    assert_eq!(rig.engines.created(), 1);
    assert!(rig.surface.is_closed());
}
