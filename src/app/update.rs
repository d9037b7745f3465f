// SPDX-License-Identifier: MPL-2.0
//! Event handlers for the control surface.
//!
//! `dispatch` routes each [`ControlEvent`] to a handler. Handlers push the
//! resulting [`UiSignal`]s in the order the UI should apply them.

use super::{ControlEvent, ControlSurface, UiSignal};
use crate::application::port::EngineMessage;
use crate::domain::gesture::{Adjustment, Viewport};
use crate::domain::media::MediaLocator;
use crate::domain::ui::{Interaction, OverlayRegion, OverlayText};
use crate::domain::video::{PlayAffordance, PlaybackSpeed};
use crate::error::ControlError;
use crate::video_player::{ProgressPoller, ProgressUpdate};
use std::time::Instant;

type Signals = Vec<UiSignal>;

pub(super) fn dispatch(
    surface: &mut ControlSurface,
    event: ControlEvent,
    now: Instant,
    signals: &mut Signals,
) {
    match event {
        ControlEvent::Open(raw) => handle_open(surface, &raw, now, signals),
        ControlEvent::PointerDown { x, y } => {
            let snapshot = surface.controller.gesture_snapshot();
            surface.classifier.on_down(x, y, snapshot);
        }
        ControlEvent::PointerMove { x, y } => {
            if let Some(adjustment) = surface.classifier.on_move(x, y) {
                handle_adjustment(surface, adjustment, now, signals);
            }
        }
        ControlEvent::PointerUp => {
            if surface.classifier.on_up().is_some() {
                handle_tap(surface, now, signals);
            }
        }
        ControlEvent::PointerCancel => {
            if surface.classifier.on_cancel().is_some() {
                handle_tap(surface, now, signals);
            }
        }
        ControlEvent::LockToggled => handle_lock_toggle(surface, now, signals),
        ControlEvent::PlayPause => {
            if permits(surface, Interaction::Transport) {
                let result = surface.controller.toggle_play_pause();
                report(result, signals);
                show_controls(surface, now, signals);
            }
        }
        ControlEvent::SkipForward => handle_skip(surface, 1, now, signals),
        ControlEvent::SkipBackward => handle_skip(surface, -1, now, signals),
        ControlEvent::SpeedSelected(speed) => handle_speed(surface, speed, now, signals),
        ControlEvent::SeekBarMoved(position_secs) => {
            if permits(surface, Interaction::SeekBar) {
                let result = surface
                    .controller
                    .apply_seek(position_secs.saturating_mul(1000));
                report_seek(result, signals);
                show_controls(surface, now, signals);
            }
        }
        ControlEvent::FullscreenToggled => {
            if permits(surface, Interaction::Transport) {
                surface.fullscreen = !surface.fullscreen;
                signals.push(UiSignal::Fullscreen(surface.fullscreen));
            }
        }
        ControlEvent::Activated => {
            if let Some(progress) = surface.progress.as_mut() {
                progress.resume(now);
            }
        }
        ControlEvent::Deactivated => {
            if let Some(progress) = surface.progress.as_mut() {
                progress.suspend();
            }
        }
        ControlEvent::Resized { width, height } => {
            surface.classifier.set_viewport(Viewport::new(width, height));
        }
        ControlEvent::Engine(message) => handle_engine(surface, message, now, signals),
        ControlEvent::Tick => handle_tick(surface, now, signals),
        ControlEvent::Close => handle_close(surface, signals),
    }
}

fn permits(surface: &ControlSurface, interaction: Interaction) -> bool {
    let state = surface.lock.state();
    let allowed = state.permits(interaction);
    if !allowed {
        tracing::debug!(?interaction, ?state, "interaction blocked by lock");
    }
    allowed
}

fn report(result: Result<(), ControlError>, signals: &mut Signals) {
    if let Err(err) = result {
        tracing::warn!(error = %err, "control request failed");
        signals.push(UiSignal::Failed(err));
    }
}

/// Like [`report`], plus the play button change when a seek left the end.
fn report_seek(result: Result<Option<PlayAffordance>, ControlError>, signals: &mut Signals) {
    match result {
        Ok(Some(affordance)) => signals.push(UiSignal::PlayAffordance(affordance)),
        Ok(None) => {}
        Err(err) => report(Err(err), signals),
    }
}

fn show_region(
    surface: &mut ControlSurface,
    region: OverlayRegion,
    now: Instant,
    signals: &mut Signals,
) {
    if !surface.visibility.is_visible(region) {
        signals.push(UiSignal::RegionShown(region));
    }
    surface.visibility.show(region, now);
}

fn show_controls(surface: &mut ControlSurface, now: Instant, signals: &mut Signals) {
    for region in OverlayRegion::CONTROLS {
        show_region(surface, region, now, signals);
    }
}

fn hide_controls(surface: &mut ControlSurface, signals: &mut Signals) {
    for region in OverlayRegion::CONTROLS {
        if surface.visibility.is_visible(region) {
            signals.push(UiSignal::RegionHidden(region));
        }
        surface.visibility.hide(region);
    }
}

fn show_feedback(
    surface: &mut ControlSurface,
    text: OverlayText,
    now: Instant,
    signals: &mut Signals,
) {
    show_region(surface, OverlayRegion::TransientText, now, signals);
    signals.push(UiSignal::Feedback(text));
}

// =============================================================================
// Lifecycle
// =============================================================================

fn handle_open(surface: &mut ControlSurface, raw: &str, now: Instant, signals: &mut Signals) {
    let Some(locator) = MediaLocator::parse(raw) else {
        let err = ControlError::InitializationFailed(format!("invalid locator {raw:?}"));
        tracing::warn!(error = %err, "cannot open media");
        signals.push(UiSignal::Failed(err));
        return;
    };

    save_position(surface);
    let start_ms = surface.positions.load(&locator);
    match surface.controller.initialize(&locator, start_ms) {
        Ok(_) => {
            surface.progress = Some(ProgressPoller::new(surface.progress_interval, now));
            signals.push(UiSignal::Opened { locator, start_ms });
            signals.push(UiSignal::PlayAffordance(surface.controller.affordance()));
            show_controls(surface, now, signals);
        }
        Err(err) => {
            surface.progress = None;
            signals.push(UiSignal::Failed(err));
        }
    }
}

fn save_position(surface: &ControlSurface) {
    let current = surface
        .controller
        .locator()
        .zip(surface.controller.snapshot());
    if let Some((locator, snapshot)) = current {
        surface.positions.save(locator, snapshot.position_ms);
    }
}

/// Teardown: timers first, then the position, then the engine.
fn handle_close(surface: &mut ControlSurface, signals: &mut Signals) {
    surface.visibility.cancel_all();
    surface.lock.cancel_timer();
    if let Some(progress) = surface.progress.as_mut() {
        progress.cancel();
    }
    save_position(surface);
    surface.controller.dispose();
    surface.closed = true;
    tracing::info!("control surface closed");
    signals.push(UiSignal::Closed);
}

// =============================================================================
// Gestures and taps
// =============================================================================

fn handle_adjustment(
    surface: &mut ControlSurface,
    adjustment: Adjustment,
    now: Instant,
    signals: &mut Signals,
) {
    if !permits(surface, Interaction::Gesture) {
        return;
    }
    let result = surface.controller.apply(adjustment);
    report_seek(result, signals);
    show_region(surface, OverlayRegion::GestureIndicator, now, signals);
    show_feedback(surface, OverlayText::from(adjustment), now, signals);
}

fn handle_tap(surface: &mut ControlSurface, now: Instant, signals: &mut Signals) {
    if surface.lock.is_locked() {
        if surface.lock.on_tap(now) {
            signals.push(UiSignal::LockIcon(surface.lock.icon()));
        }
        return;
    }

    if surface.visibility.is_visible(OverlayRegion::MainOverlay) {
        hide_controls(surface, signals);
    } else {
        show_controls(surface, now, signals);
    }
}

fn handle_lock_toggle(surface: &mut ControlSurface, now: Instant, signals: &mut Signals) {
    if !permits(surface, Interaction::LockToggle) {
        // The button is hidden; the press only counts as a tap.
        handle_tap(surface, now, signals);
        return;
    }

    if surface.lock.is_locked() {
        if surface.lock.exit_lock() {
            signals.push(UiSignal::LockIcon(surface.lock.icon()));
            show_controls(surface, now, signals);
        }
    } else if surface.lock.enter_lock(now) {
        hide_controls(surface, signals);
        signals.push(UiSignal::LockIcon(surface.lock.icon()));
    }
}

// =============================================================================
// Transport
// =============================================================================

fn handle_skip(
    surface: &mut ControlSurface,
    direction: i64,
    now: Instant,
    signals: &mut Signals,
) {
    if !permits(surface, Interaction::Transport) {
        return;
    }
    let delta_ms = surface.skip_duration().as_millis() * direction;
    let result = surface.controller.skip(delta_ms);
    report_seek(result, signals);
    show_controls(surface, now, signals);
}

fn handle_speed(
    surface: &mut ControlSurface,
    speed: PlaybackSpeed,
    now: Instant,
    signals: &mut Signals,
) {
    if !permits(surface, Interaction::Transport) {
        return;
    }
    match surface.controller.set_speed(speed) {
        Ok(()) => show_feedback(surface, OverlayText::Speed(speed.value()), now, signals),
        Err(err) => report(Err(err), signals),
    }
}

// =============================================================================
// Engine and timers
// =============================================================================

fn handle_engine(
    surface: &mut ControlSurface,
    message: EngineMessage,
    now: Instant,
    signals: &mut Signals,
) {
    let Some(affordance) = surface.controller.handle_notification(message) else {
        return;
    };
    signals.push(UiSignal::PlayAffordance(affordance));
    if affordance == PlayAffordance::Replay {
        if let Some(update) = surface.controller.poll_progress() {
            signals.push(UiSignal::Progress(update));
        }
        show_controls(surface, now, signals);
    }
}

fn handle_tick(surface: &mut ControlSurface, now: Instant, signals: &mut Signals) {
    for region in surface.visibility.expire(now) {
        signals.push(UiSignal::RegionHidden(region));
    }
    if surface.lock.expire(now) {
        signals.push(UiSignal::LockIcon(surface.lock.icon()));
    }

    let due = surface
        .progress
        .as_mut()
        .is_some_and(|progress| progress.poll(now));
    if due {
        let update = surface
            .controller
            .snapshot()
            .filter(|snapshot| snapshot.known_duration().is_some())
            .as_ref()
            .map(ProgressUpdate::from);
        if let Some(update) = update {
            signals.push(UiSignal::Progress(update));
        }
    }
}
