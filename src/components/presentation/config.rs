pub const LOGO_PATH: &str = "/images/logo.png";

/// Background track, then the path tried once if it fails to load.
pub const AUDIO_SOURCES: &[&str] = &["/audio/background.mp3", "/audio/background.ogg"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slide {
	Welcome,
	ListReveal,
	GraphReveal,
	ThankYou,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
	/// Halving list and pattern graph only.
	Classic,
	/// Welcome and thank-you slides around the two reveals, with background audio.
	#[default]
	Narrated,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeckConfig {
	pub variant: Variant,
	pub slides: &'static [Slide],
	pub audio_sources: Option<&'static [&'static str]>,
	pub logo_path: &'static str,
}

impl DeckConfig {
	pub fn new(variant: Variant) -> Self {
		match variant {
			Variant::Classic => Self {
				variant,
				slides: &[Slide::ListReveal, Slide::GraphReveal],
				audio_sources: None,
				logo_path: LOGO_PATH,
			},
			Variant::Narrated => Self {
				variant,
				slides: &[
					Slide::Welcome,
					Slide::ListReveal,
					Slide::GraphReveal,
					Slide::ThankYou,
				],
				audio_sources: Some(AUDIO_SOURCES),
				logo_path: LOGO_PATH,
			},
		}
	}

	pub fn has_audio(&self) -> bool {
		self.audio_sources.is_some()
	}
}

impl Default for DeckConfig {
	fn default() -> Self {
		Self::new(Variant::default())
	}
}
