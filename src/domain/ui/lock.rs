// SPDX-License-Identifier: MPL-2.0
//! Screen lock states and what each one lets through.

/// Two-level screen lock.
///
/// While locked, the lock affordance is first shown (`LockedVisible`) and
/// hides itself after a timeout (`LockedHidden`); a tap brings it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    /// Full controls and gestures.
    #[default]
    Unlocked,
    /// Locked, only the lock affordance is shown and interactive.
    LockedVisible,
    /// Locked, nothing is shown.
    LockedHidden,
}

/// Something the user can do on the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Seek, volume or brightness swipe.
    Gesture,
    /// Dragging the seek bar.
    SeekBar,
    /// Play/pause, skip, speed and fullscreen buttons.
    Transport,
    /// The lock toggle button.
    LockToggle,
    /// A tap on the viewport.
    Tap,
}

impl LockState {
    /// Returns true in either locked state.
    #[must_use]
    pub fn is_locked(self) -> bool {
        !matches!(self, LockState::Unlocked)
    }

    /// Returns whether `interaction` has any effect in this state.
    #[must_use]
    pub fn permits(self, interaction: Interaction) -> bool {
        match self {
            LockState::Unlocked => true,
            LockState::LockedVisible => {
                matches!(interaction, Interaction::LockToggle | Interaction::Tap)
            }
            LockState::LockedHidden => matches!(interaction, Interaction::Tap),
        }
    }

    /// Returns the lock button icon, `None` when the button is hidden.
    #[must_use]
    pub fn icon(self) -> Option<LockIcon> {
        match self {
            LockState::Unlocked => Some(LockIcon::Open),
            LockState::LockedVisible => Some(LockIcon::Closed),
            LockState::LockedHidden => None,
        }
    }
}

/// Lock button artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockIcon {
    /// Open padlock, offered while unlocked.
    Open,
    /// Closed padlock, offered while locked.
    Closed,
}

impl LockIcon {
    /// Returns the icon asset name.
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            LockIcon::Open => "ic_lock_open",
            LockIcon::Closed => "ic_lock_lock",
        }
    }
}
