//! Audio cue dispatch.
//!
//! Cues are fire-and-forget: the game never waits on playback and never
//! fails because a speaker is missing. The exhibit rig wires this trait to
//! its sound hardware; the defaults here log or swallow cues.

use crate::core::session::SessionEvent;
use crate::types::SoundCue;

/// Fire-and-forget sound trigger.
pub trait AudioNotifier {
    fn play(&mut self, cue: SoundCue);
}

/// Cues to fire for a session event. A win plays the removal clack and then
/// the fanfare, matching the exhibit's original behavior.
pub fn cues_for(event: SessionEvent) -> &'static [SoundCue] {
    match event {
        SessionEvent::Started => &[],
        SessionEvent::BlockRemoved => &[SoundCue::BlockRemoved],
        SessionEvent::Won => &[SoundCue::BlockRemoved, SoundCue::Success],
        SessionEvent::Collapsed | SessionEvent::TimedOut => &[SoundCue::Failure],
    }
}

/// Logs each cue. Stands in for a speaker during development and when the
/// rig's audio backend is not attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl AudioNotifier for LogNotifier {
    fn play(&mut self, cue: SoundCue) {
        log::info!("sound cue: {}", cue.as_str());
    }
}

/// Swallows every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl AudioNotifier for NullNotifier {
    fn play(&mut self, _cue: SoundCue) {}
}
