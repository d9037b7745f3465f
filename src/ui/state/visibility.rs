// SPDX-License-Identifier: MPL-2.0
//! Overlay auto-hide scheduling
//!
//! Each [`OverlayRegion`] carries a visible flag and at most one pending hide
//! deadline. Showing a region again moves its deadline instead of adding a
//! second one. Deadlines are plain [`Instant`]s; the owner calls
//! [`VisibilityScheduler::expire`] when the earliest one is reached.

use crate::domain::ui::{HideDelay, OverlayRegion, OverlayTimeout};
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RegionState {
    visible: bool,
    hide_at: Option<Instant>,
}

/// Debounced auto-hide timers for the overlay regions.
#[derive(Debug, Clone)]
pub struct VisibilityScheduler {
    controls_timeout: OverlayTimeout,
    feedback_timeout: OverlayTimeout,
    regions: [RegionState; OverlayRegion::ALL.len()],
}

impl VisibilityScheduler {
    /// Creates a scheduler with every region hidden.
    #[must_use]
    pub fn new(controls_timeout: OverlayTimeout, feedback_timeout: OverlayTimeout) -> Self {
        Self {
            controls_timeout,
            feedback_timeout,
            regions: [RegionState::default(); OverlayRegion::ALL.len()],
        }
    }

    fn delay(&self, region: OverlayRegion) -> OverlayTimeout {
        match region.hide_delay() {
            HideDelay::Long => self.controls_timeout,
            HideDelay::Short => self.feedback_timeout,
        }
    }

    /// Shows `region` and (re)schedules its hide.
    pub fn show(&mut self, region: OverlayRegion, now: Instant) {
        let hide_at = now + self.delay(region).as_duration();
        self.regions[region.index()] = RegionState {
            visible: true,
            hide_at: Some(hide_at),
        };
    }

    /// Hides `region` now and drops its pending hide.
    pub fn hide(&mut self, region: OverlayRegion) {
        self.regions[region.index()] = RegionState::default();
    }

    /// Shows a hidden region or hides a visible one.
    pub fn toggle(&mut self, region: OverlayRegion, now: Instant) {
        if self.is_visible(region) {
            self.hide(region);
        } else {
            self.show(region, now);
        }
    }

    #[must_use]
    pub fn is_visible(&self, region: OverlayRegion) -> bool {
        self.regions[region.index()].visible
    }

    /// Pending hide deadline of `region`.
    #[must_use]
    pub fn hide_deadline(&self, region: OverlayRegion) -> Option<Instant> {
        self.regions[region.index()].hide_at
    }

    /// Hides every region whose deadline is at or before `now`.
    ///
    /// Returns the regions that were hidden, in [`OverlayRegion::ALL`] order.
    pub fn expire(&mut self, now: Instant) -> Vec<OverlayRegion> {
        let mut hidden = Vec::new();
        for region in OverlayRegion::ALL {
            let state = &mut self.regions[region.index()];
            if state.hide_at.is_some_and(|at| at <= now) {
                *state = RegionState::default();
                hidden.push(region);
            }
        }
        hidden
    }

    /// Earliest pending hide deadline across all regions.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.regions.iter().filter_map(|r| r.hide_at).min()
    }

    /// Number of pending hide deadlines.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.regions.iter().filter(|r| r.hide_at.is_some()).count()
    }

    /// Drops every pending hide, leaving visibility untouched.
    pub fn cancel_all(&mut self) {
        for state in &mut self.regions {
            state.hide_at = None;
        }
    }
}

impl Default for VisibilityScheduler {
    fn default() -> Self {
        Self::new(
            OverlayTimeout::new(crate::config::DEFAULT_CONTROLS_TIMEOUT_MS),
            OverlayTimeout::new(crate::config::DEFAULT_INDICATOR_TIMEOUT_MS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn starts_hidden_without_timers() {
        let scheduler = VisibilityScheduler::default();
        for region in OverlayRegion::ALL {
            assert!(!scheduler.is_visible(region));
        }
        assert_eq!(scheduler.pending_count(), 0);
        assert!(scheduler.next_deadline().is_none());
    }

    #[test]
    fn repeated_show_keeps_a_single_timer() {
        let now = Instant::now();
        let mut scheduler = VisibilityScheduler::default();

        scheduler.show(OverlayRegion::TransientText, now);
        scheduler.show(OverlayRegion::TransientText, now + Duration::from_millis(10));

        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(
            scheduler.hide_deadline(OverlayRegion::TransientText),
            Some(now + Duration::from_millis(1_010))
        );
    }

    #[test]
    fn controls_and_feedback_use_different_delays() {
        let now = Instant::now();
        let mut scheduler = VisibilityScheduler::default();

        scheduler.show(OverlayRegion::BottomBar, now);
        scheduler.show(OverlayRegion::GestureIndicator, now);

        assert_eq!(
            scheduler.hide_deadline(OverlayRegion::BottomBar),
            Some(now + Duration::from_secs(3))
        );
        assert_eq!(
            scheduler.next_deadline(),
            Some(now + Duration::from_secs(1))
        );
    }

    #[test]
    fn expire_hides_only_due_regions() {
        let now = Instant::now();
        let mut scheduler = VisibilityScheduler::default();
        scheduler.show(OverlayRegion::TopBar, now);
        scheduler.show(OverlayRegion::TransientText, now);

        let hidden = scheduler.expire(now + Duration::from_secs(1));
        assert_eq!(hidden, vec![OverlayRegion::TransientText]);
        assert!(scheduler.is_visible(OverlayRegion::TopBar));
        assert!(!scheduler.is_visible(OverlayRegion::TransientText));
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn reshow_postpones_expiry() {
        let now = Instant::now();
        let mut scheduler = VisibilityScheduler::default();
        scheduler.show(OverlayRegion::MainOverlay, now);
        scheduler.show(OverlayRegion::MainOverlay, now + Duration::from_secs(2));

        assert!(scheduler.expire(now + Duration::from_secs(3)).is_empty());
        assert_eq!(
            scheduler.expire(now + Duration::from_secs(5)),
            vec![OverlayRegion::MainOverlay]
        );
    }

    #[test]
    fn hide_cancels_pending_timer() {
        let now = Instant::now();
        let mut scheduler = VisibilityScheduler::default();
        scheduler.show(OverlayRegion::TopBar, now);
        scheduler.hide(OverlayRegion::TopBar);

        assert!(!scheduler.is_visible(OverlayRegion::TopBar));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn toggle_flips_visibility() {
        let now = Instant::now();
        let mut scheduler = VisibilityScheduler::default();

        scheduler.toggle(OverlayRegion::BottomBar, now);
        assert!(scheduler.is_visible(OverlayRegion::BottomBar));
        scheduler.toggle(OverlayRegion::BottomBar, now);
        assert!(!scheduler.is_visible(OverlayRegion::BottomBar));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn cancel_all_keeps_visibility() {
        let now = Instant::now();
        let mut scheduler = VisibilityScheduler::default();
        for region in OverlayRegion::ALL {
            scheduler.show(region, now);
        }
        scheduler.cancel_all();

        assert_eq!(scheduler.pending_count(), 0);
        assert!(scheduler.is_visible(OverlayRegion::TopBar));
        assert!(scheduler.expire(now + Duration::from_secs(60)).is_empty());
    }
}
