//! The television state machine.
//!
//! Pure state, zero effects. Every operation is an instantaneous,
//! synchronous transition on the owned fields. Invalid requests
//! (mutating while off, out-of-range channels) are guarded no-ops:
//! nothing changes and nothing is reported.
//!
//! States are the cross-product `power × muted`; `channel` and `volume`
//! are bounded counters gated by `power`.

use std::fmt;

use crate::types::{Button, TelevisionState};

// ============================================================================
// BOUNDS
// ============================================================================

/// Lowest selectable channel.
pub const MIN_CHANNEL: u8 = 1;

/// Highest selectable channel.
pub const MAX_CHANNEL: u8 = 6;

/// Silent.
pub const MIN_VOLUME: u8 = 0;

/// Loudest.
pub const MAX_VOLUME: u8 = 100;

// ============================================================================
// TELEVISION
// ============================================================================

/// A television and its remote-controllable state.
///
/// Fields are private: the only way to change them is through the
/// operations below, which keep the invariants:
/// - `MIN_CHANNEL <= channel <= MAX_CHANNEL`
/// - `MIN_VOLUME <= volume <= MAX_VOLUME`
/// - `muted` implies `volume == MIN_VOLUME`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Television {
    power: bool,
    channel: u8,
    volume: u8,
    muted: bool,
    /// Volume to restore on unmute. `None` until the first mute.
    saved_volume: Option<u8>,
}

impl Default for Television {
    fn default() -> Self {
        Self::new()
    }
}

impl Television {
    /// Powered off, lowest channel, silent, unmuted.
    pub fn new() -> Self {
        Television {
            power: false,
            channel: MIN_CHANNEL,
            volume: MIN_VOLUME,
            muted: false,
            saved_volume: None,
        }
    }

    /// Rebuild a television from a snapshot.
    ///
    /// Out-of-range counters are clamped into their bounds, and a muted
    /// snapshot is forced silent, so the result always satisfies the
    /// invariants regardless of where the snapshot came from.
    pub fn from_state(state: TelevisionState) -> Self {
        let channel = state.channel.clamp(MIN_CHANNEL, MAX_CHANNEL);
        let volume = if state.muted {
            MIN_VOLUME
        } else {
            state.volume.min(MAX_VOLUME)
        };
        Television {
            power: state.power,
            channel,
            volume,
            muted: state.muted,
            saved_volume: state.saved_volume.map(|v| v.min(MAX_VOLUME)),
        }
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    /// Flip power. The one operation that works while off.
    pub fn toggle_power(&mut self) {
        self.power = !self.power;
    }

    /// Mute (remembering the current volume) or unmute (restoring it).
    pub fn toggle_mute(&mut self) {
        if !self.power {
            return;
        }
        if self.muted {
            self.unmute();
        } else {
            self.saved_volume = Some(self.volume);
            self.muted = true;
            self.volume = MIN_VOLUME;
        }
    }

    /// Next channel, wrapping from the top back to the bottom.
    pub fn channel_up(&mut self) {
        if !self.power {
            return;
        }
        self.channel = if self.channel == MAX_CHANNEL {
            MIN_CHANNEL
        } else {
            self.channel + 1
        };
    }

    /// Previous channel, wrapping from the bottom back to the top.
    pub fn channel_down(&mut self) {
        if !self.power {
            return;
        }
        self.channel = if self.channel == MIN_CHANNEL {
            MAX_CHANNEL
        } else {
            self.channel - 1
        };
    }

    /// Jump straight to `channel`. Ignored when off or out of range.
    pub fn set_channel(&mut self, channel: u8) {
        if self.power && (MIN_CHANNEL..=MAX_CHANNEL).contains(&channel) {
            self.channel = channel;
        }
    }

    /// One step louder. Unmutes first if muted.
    pub fn volume_up(&mut self) {
        if !self.power {
            return;
        }
        if self.muted {
            self.unmute();
        }
        if self.volume < MAX_VOLUME {
            self.volume += 1;
        }
    }

    /// One step quieter. Unmutes first if muted.
    pub fn volume_down(&mut self) {
        if !self.power {
            return;
        }
        if self.muted {
            self.unmute();
        }
        if self.volume > MIN_VOLUME {
            self.volume -= 1;
        }
    }

    /// Dispatch a single remote button to its mutator.
    pub fn press(&mut self, button: Button) {
        match button {
            Button::Power => self.toggle_power(),
            Button::Mute => self.toggle_mute(),
            Button::ChannelUp => self.channel_up(),
            Button::ChannelDown => self.channel_down(),
            Button::VolumeUp => self.volume_up(),
            Button::VolumeDown => self.volume_down(),
            Button::Channel(n) => self.set_channel(n),
        }
    }

    /// Shared unmute branch. With no saved volume the current one stays.
    fn unmute(&mut self) {
        self.muted = false;
        if let Some(saved) = self.saved_volume {
            self.volume = saved;
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn channel(&self) -> u8 {
        self.channel
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Power status: `true` when on.
    pub fn status(&self) -> bool {
        self.power
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Copy of the full state, including the saved volume.
    pub fn snapshot(&self) -> TelevisionState {
        TelevisionState {
            power: self.power,
            channel: self.channel,
            volume: self.volume,
            muted: self.muted,
            saved_volume: self.saved_volume,
        }
    }

    /// Diagnostic one-liner of power, channel and volume.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Television {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Power - {}, Channel - {}, Volume - {}",
            if self.power { "On" } else { "Off" },
            self.channel,
            self.volume
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn powered() -> Television {
        let mut tv = Television::new();
        tv.toggle_power();
        tv
    }

    fn powered_at_volume(volume: u8) -> Television {
        Television::from_state(TelevisionState {
            power: true,
            volume,
            ..TelevisionState::default()
        })
    }

    #[test]
    fn starts_off_on_lowest_channel_silent() {
        let tv = Television::new();
        assert!(!tv.status());
        assert_eq!(tv.channel(), MIN_CHANNEL);
        assert_eq!(tv.volume(), MIN_VOLUME);
        assert!(!tv.muted());
        assert_eq!(tv.snapshot().saved_volume, None);
    }

    #[test]
    fn power_toggles_both_ways() {
        let mut tv = Television::new();
        tv.toggle_power();
        assert!(tv.status());
        tv.toggle_power();
        assert!(!tv.status());
    }

    // -- Channels --

    #[test]
    fn channel_up_wraps_to_lowest() {
        let mut tv = powered();
        tv.set_channel(MAX_CHANNEL);
        tv.channel_up();
        assert_eq!(tv.channel(), MIN_CHANNEL);
    }

    #[test]
    fn channel_down_wraps_to_highest() {
        let mut tv = powered();
        tv.channel_down();
        assert_eq!(tv.channel(), MAX_CHANNEL);
    }

    #[test]
    fn channel_up_then_down_is_identity() {
        for start in MIN_CHANNEL..=MAX_CHANNEL {
            let mut tv = powered();
            tv.set_channel(start);
            tv.channel_up();
            tv.channel_down();
            assert_eq!(tv.channel(), start);
            tv.channel_down();
            tv.channel_up();
            assert_eq!(tv.channel(), start);
        }
    }

    #[test]
    fn set_channel_rejects_out_of_range() {
        let mut tv = powered();
        tv.set_channel(7);
        assert_eq!(tv.channel(), 1);
        tv.set_channel(0);
        assert_eq!(tv.channel(), 1);
        tv.set_channel(3);
        assert_eq!(tv.channel(), 3);
    }

    // -- Volume --

    #[test]
    fn volume_ceiling_holds() {
        let mut tv = powered_at_volume(MAX_VOLUME);
        tv.volume_up();
        assert_eq!(tv.volume(), MAX_VOLUME);
    }

    #[test]
    fn volume_floor_holds() {
        let mut tv = powered();
        tv.volume_down();
        assert_eq!(tv.volume(), MIN_VOLUME);
    }

    #[test]
    fn volume_steps_by_one() {
        let mut tv = powered_at_volume(10);
        tv.volume_up();
        assert_eq!(tv.volume(), 11);
        tv.volume_down();
        tv.volume_down();
        assert_eq!(tv.volume(), 9);
    }

    // -- Mute --

    #[test]
    fn mute_then_unmute_restores_volume() {
        let mut tv = powered_at_volume(40);
        tv.toggle_mute();
        assert_eq!(tv.volume(), 0);
        assert!(tv.muted());
        tv.toggle_mute();
        assert_eq!(tv.volume(), 40);
        assert!(!tv.muted());
    }

    #[test]
    fn volume_up_while_muted_restores_then_increments() {
        let mut tv = powered_at_volume(40);
        tv.toggle_mute();
        tv.volume_up();
        assert_eq!(tv.volume(), 41);
        assert!(!tv.muted());
    }

    #[test]
    fn volume_down_while_muted_restores_then_decrements() {
        let mut tv = powered_at_volume(40);
        tv.toggle_mute();
        tv.volume_down();
        assert_eq!(tv.volume(), 39);
        assert!(!tv.muted());
    }

    #[test]
    fn unmute_without_saved_volume_leaves_volume() {
        let mut tv = Television::from_state(TelevisionState {
            power: true,
            muted: true,
            volume: 55,
            saved_volume: None,
            ..TelevisionState::default()
        });
        assert_eq!(tv.volume(), 0, "muted snapshot is forced silent");
        tv.toggle_mute();
        assert!(!tv.muted());
        assert_eq!(tv.volume(), 0);
    }

    #[test]
    fn saved_volume_survives_unmute() {
        let mut tv = powered_at_volume(40);
        tv.toggle_mute();
        tv.toggle_mute();
        assert_eq!(tv.snapshot().saved_volume, Some(40));
    }

    // -- Guarded while off --

    #[test]
    fn mutators_are_noops_while_off() {
        let mut tv = Television::new();
        let before = tv.snapshot();
        tv.channel_up();
        tv.channel_down();
        tv.volume_up();
        tv.volume_down();
        tv.set_channel(3);
        tv.toggle_mute();
        assert_eq!(tv.snapshot(), before);
    }

    #[test]
    fn volume_down_is_guarded_while_off() {
        let mut tv = Television::from_state(TelevisionState {
            volume: 40,
            ..TelevisionState::default()
        });
        tv.volume_down();
        assert_eq!(tv.volume(), 40);
    }

    #[test]
    fn mutators_are_noops_while_off_mid_range() {
        let mut tv = Television::from_state(TelevisionState {
            power: false,
            channel: 3,
            volume: 40,
            muted: false,
            saved_volume: Some(25),
        });
        let before = tv.snapshot();
        tv.channel_up();
        tv.channel_down();
        tv.volume_up();
        tv.volume_down();
        tv.set_channel(5);
        tv.toggle_mute();
        assert_eq!(tv.snapshot(), before);
    }

    #[test]
    fn muted_tv_stays_muted_while_off() {
        let mut tv = Television::from_state(TelevisionState {
            channel: 6,
            muted: true,
            saved_volume: Some(40),
            ..TelevisionState::default()
        });
        let before = tv.snapshot();
        tv.volume_up();
        tv.volume_down();
        tv.toggle_mute();
        tv.channel_up();
        assert_eq!(tv.snapshot(), before);
    }

    #[test]
    fn state_is_kept_across_power_cycle() {
        let mut tv = powered_at_volume(20);
        tv.set_channel(4);
        tv.toggle_mute();
        tv.toggle_power();
        tv.toggle_power();
        assert_eq!(tv.channel(), 4);
        assert!(tv.muted());
        assert_eq!(tv.volume(), 0);
    }

    // -- press --

    #[test]
    fn press_dispatches_each_button() {
        let mut tv = Television::new();
        tv.press(Button::Power);
        tv.press(Button::Channel(5));
        tv.press(Button::ChannelUp);
        tv.press(Button::VolumeUp);
        tv.press(Button::VolumeUp);
        tv.press(Button::VolumeDown);
        tv.press(Button::Mute);
        assert_eq!(tv.channel(), 6);
        assert!(tv.muted());
        tv.press(Button::Mute);
        assert_eq!(tv.volume(), 1);
        tv.press(Button::ChannelDown);
        assert_eq!(tv.channel(), 5);
    }

    // -- from_state --

    #[test]
    fn from_state_clamps_counters() {
        let tv = Television::from_state(TelevisionState {
            power: true,
            channel: 42,
            volume: 250,
            muted: false,
            saved_volume: Some(200),
        });
        assert_eq!(tv.channel(), MAX_CHANNEL);
        assert_eq!(tv.volume(), MAX_VOLUME);
        assert_eq!(tv.snapshot().saved_volume, Some(MAX_VOLUME));

        let tv = Television::from_state(TelevisionState {
            channel: 0,
            ..TelevisionState::default()
        });
        assert_eq!(tv.channel(), MIN_CHANNEL);
    }

    #[test]
    fn snapshot_round_trips_through_from_state() {
        let mut tv = powered_at_volume(33);
        tv.set_channel(2);
        tv.toggle_mute();
        assert_eq!(Television::from_state(tv.snapshot()), tv);
    }

    // -- describe --

    #[test]
    fn describe_reports_power_channel_volume() {
        let mut tv = powered_at_volume(40);
        tv.set_channel(3);
        assert_eq!(tv.describe(), "Power - On, Channel - 3, Volume - 40");
        assert_eq!(
            Television::new().describe(),
            "Power - Off, Channel - 1, Volume - 0"
        );
    }
}
