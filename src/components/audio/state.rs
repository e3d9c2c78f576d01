use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AudioError {
	#[error("audio element is not mounted")]
	ElementMissing,
	#[error("playback rejected: {0}")]
	PlaybackRejected(String),
	#[error("no audio source could be loaded")]
	SourcesExhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioStatus {
	Loading,
	Ready,
}

/// Which code path asked for playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOrigin {
	Unlock,
	Toggle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioState {
	sources: &'static [&'static str],
	source_idx: usize,
	pub status: AudioStatus,
	pub muted: bool,
	pub unlocked: bool,
}

impl AudioState {
	pub fn new(sources: &'static [&'static str]) -> Self {
		Self {
			sources,
			source_idx: 0,
			status: AudioStatus::Loading,
			muted: true,
			unlocked: false,
		}
	}

	pub fn current_source(&self) -> Option<&'static str> {
		self.sources.get(self.source_idx).copied()
	}

	/// Moves to the next source after a load error. The status stays `Loading`
	/// when every source has failed.
	pub fn on_load_error(&mut self) -> Result<&'static str, AudioError> {
		if self.source_idx + 1 < self.sources.len() {
			self.source_idx += 1;
			let next = self.sources[self.source_idx];
			info!("audio source failed, falling back to {next}");
			Ok(next)
		} else {
			Err(AudioError::SourcesExhausted)
		}
	}

	pub fn on_ready(&mut self) {
		self.status = AudioStatus::Ready;
	}

	/// First user interaction. Returns `true` only the first time, when the
	/// caller should start playback.
	pub fn unlock(&mut self) -> bool {
		if self.unlocked {
			return false;
		}
		self.unlocked = true;
		self.muted = false;
		true
	}

	/// Flips mute and returns the new value. A manual choice also ends the
	/// wait for the first interaction.
	pub fn toggle_mute(&mut self) -> bool {
		self.unlocked = true;
		self.muted = !self.muted;
		self.muted
	}

	/// Playback was refused, so the track is silent again. A refused unlock
	/// waits for the next interaction.
	pub fn on_play_rejected(&mut self, origin: PlayOrigin, err: &AudioError) {
		warn!("{origin:?} playback failed: {err}");
		self.muted = true;
		if origin == PlayOrigin::Unlock {
			self.unlocked = false;
		}
	}

	pub fn indicator(&self) -> &'static str {
		match (self.status, self.muted) {
			(AudioStatus::Loading, _) => "Loading audio…",
			(AudioStatus::Ready, false) => "Sound on",
			(AudioStatus::Ready, true) => "Sound off",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SOURCES: &[&str] = &["/a.mp3", "/a.ogg"];

	#[test]
	fn starts_muted_and_loading() {
		let s = AudioState::new(SOURCES);
		assert!(s.muted);
		assert!(!s.unlocked);
		assert_eq!(s.current_source(), Some("/a.mp3"));
		assert_eq!(s.indicator(), "Loading audio…");
	}

	#[test]
	fn falls_back_exactly_once() {
		let mut s = AudioState::new(SOURCES);
		assert_eq!(s.on_load_error(), Ok("/a.ogg"));
		assert_eq!(s.current_source(), Some("/a.ogg"));
		assert_eq!(s.on_load_error(), Err(AudioError::SourcesExhausted));
		assert_eq!(s.current_source(), Some("/a.ogg"));
		assert_eq!(s.status, AudioStatus::Loading);
	}

	#[test]
	fn unlock_fires_once_across_repeated_interactions() {
		let mut s = AudioState::new(SOURCES);
		let fired = (0..5).filter(|_| s.unlock()).count();
		assert_eq!(fired, 1);
		assert!(!s.muted);
	}

	#[test]
	fn toggle_rejection_reverts_to_muted() {
		let mut s = AudioState::new(SOURCES);
		s.on_ready();
		assert!(!s.toggle_mute());
		s.on_play_rejected(PlayOrigin::Toggle, &AudioError::PlaybackRejected("NotAllowedError".into()));
		assert!(s.muted);
		assert_eq!(s.indicator(), "Sound off");
	}

	#[test]
	fn unlock_rejection_mutes_and_waits_for_next_interaction() {
		let mut s = AudioState::new(SOURCES);
		s.on_ready();
		assert!(s.unlock());
		s.on_play_rejected(PlayOrigin::Unlock, &AudioError::PlaybackRejected("NotAllowedError".into()));
		assert!(s.muted);
		assert!(!s.unlocked);
		assert_eq!(s.indicator(), "Sound off");

		assert!(s.unlock());
		assert!(!s.muted);
		assert!(!s.unlock());
	}

	#[test]
	fn toggle_rejection_keeps_manual_choice() {
		let mut s = AudioState::new(SOURCES);
		s.toggle_mute();
		s.on_play_rejected(PlayOrigin::Toggle, &AudioError::ElementMissing);
		assert!(s.muted);
		assert!(!s.unlock());
	}

	#[test]
	fn manual_toggle_wins_over_later_unlock() {
		let mut s = AudioState::new(SOURCES);
		s.toggle_mute();
		s.toggle_mute();
		assert!(!s.unlock());
		assert!(s.muted);
	}
}
