use log::debug;

use super::config::{DeckConfig, Slide};
use super::types::{HALVINGS, NODES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealCounter {
	pub count: usize,
	pub max: usize,
}

impl RevealCounter {
	pub fn new(max: usize) -> Self {
		Self { count: 0, max }
	}

	/// Reveals one more item, or restarts from zero once everything is shown.
	pub fn advance(&mut self) {
		if self.count < self.max {
			self.count += 1;
		} else {
			self.count = 0;
		}
	}

	pub fn reset(&mut self) {
		self.count = 0;
	}

	pub fn is_complete(&self) -> bool {
		self.count >= self.max
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	Advance,
	Reset,
	GoTo(usize),
	NextSlide,
	PrevSlide,
}

impl Command {
	/// Keyboard shortcut for a `KeyboardEvent::key()` value. Space and Enter are
	/// left alone since they already activate the focused button.
	pub fn from_key(key: &str) -> Option<Self> {
		match key {
			"ArrowRight" => Some(Self::Advance),
			"r" | "R" => Some(Self::Reset),
			"PageDown" => Some(Self::NextSlide),
			"PageUp" => Some(Self::PrevSlide),
			"Home" => Some(Self::GoTo(0)),
			_ => None,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonLabel {
	Start,
	Next,
	Restart,
}

impl ButtonLabel {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Start => "Start",
			Self::Next => "Next",
			Self::Restart => "Restart",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
	slides: &'static [Slide],
	slide: usize,
	pub list: RevealCounter,
	pub graph: RevealCounter,
}

impl RevealState {
	pub fn new(config: &DeckConfig) -> Self {
		Self::with_slides(config.slides)
	}

	pub fn with_slides(slides: &'static [Slide]) -> Self {
		Self {
			slides,
			slide: 0,
			list: RevealCounter::new(HALVINGS.len()),
			graph: RevealCounter::new(NODES.len()),
		}
	}

	pub fn slide_index(&self) -> usize {
		self.slide
	}

	pub fn slide_count(&self) -> usize {
		self.slides.len()
	}

	pub fn active_slide(&self) -> Option<Slide> {
		self.slides.get(self.slide).copied()
	}

	pub fn is_first(&self) -> bool {
		self.slide == 0
	}

	pub fn is_last(&self) -> bool {
		self.slide + 1 >= self.slides.len()
	}

	fn active_counter(&mut self) -> Option<&mut RevealCounter> {
		match self.active_slide()? {
			Slide::ListReveal => Some(&mut self.list),
			Slide::GraphReveal => Some(&mut self.graph),
			Slide::Welcome | Slide::ThankYou => None,
		}
	}

	/// Counter shown on the active slide, if it reveals anything.
	pub fn active_reveal(&self) -> Option<RevealCounter> {
		match self.active_slide()? {
			Slide::ListReveal => Some(self.list),
			Slide::GraphReveal => Some(self.graph),
			Slide::Welcome | Slide::ThankYou => None,
		}
	}

	pub fn go_to_slide(&mut self, n: usize) {
		self.slide = n.min(self.slides.len().saturating_sub(1));
		self.list.reset();
		self.graph.reset();
	}

	pub fn next_slide(&mut self) {
		if !self.is_last() {
			self.go_to_slide(self.slide + 1);
		}
	}

	pub fn prev_slide(&mut self) {
		if !self.is_first() {
			self.go_to_slide(self.slide - 1);
		}
	}

	pub fn advance(&mut self) {
		if let Some(counter) = self.active_counter() {
			counter.advance();
		}
	}

	pub fn reset(&mut self) {
		if let Some(counter) = self.active_counter() {
			counter.reset();
		}
	}

	pub fn apply(&mut self, command: Command) {
		match command {
			Command::Advance => self.advance(),
			Command::Reset => self.reset(),
			Command::GoTo(n) => self.go_to_slide(n),
			Command::NextSlide => self.next_slide(),
			Command::PrevSlide => self.prev_slide(),
		}
		debug!(
			"{:?} -> slide {} list {} graph {}",
			command, self.slide, self.list.count, self.graph.count
		);
	}

	pub fn button_label(&self) -> Option<ButtonLabel> {
		let counter = self.active_reveal()?;
		Some(if counter.count == 0 {
			ButtonLabel::Start
		} else if counter.is_complete() {
			ButtonLabel::Restart
		} else {
			ButtonLabel::Next
		})
	}

	pub fn show_reset(&self) -> bool {
		self.list.count > 0 || self.graph.count > 0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::presentation::config::Variant;

	fn narrated() -> RevealState {
		RevealState::new(&DeckConfig::new(Variant::Narrated))
	}

	fn classic() -> RevealState {
		RevealState::new(&DeckConfig::new(Variant::Classic))
	}

	#[test]
	fn starts_on_first_slide_with_nothing_revealed() {
		let s = narrated();
		assert_eq!(s.active_slide(), Some(Slide::Welcome));
		assert_eq!((s.list.count, s.graph.count), (0, 0));
		assert_eq!(classic().active_slide(), Some(Slide::ListReveal));
	}

	#[test]
	fn list_reveal_counts_up_then_restarts() {
		let mut s = classic();
		let seen: Vec<usize> = (0..6)
			.map(|_| {
				s.advance();
				s.list.count
			})
			.collect();
		assert_eq!(seen, vec![1, 2, 3, 4, 5, 0]);
	}

	#[test]
	fn graph_restarts_after_all_nodes() {
		let mut s = classic();
		s.go_to_slide(1);
		s.graph.count = 12;
		s.advance();
		assert_eq!(s.graph.count, 13);
		s.advance();
		assert_eq!(s.graph.count, 0);
	}

	#[test]
	fn counters_stay_in_bounds() {
		let mut s = classic();
		for slide in 0..2 {
			s.go_to_slide(slide);
			for _ in 0..100 {
				s.advance();
				assert!(s.list.count <= s.list.max);
				assert!(s.graph.count <= s.graph.max);
			}
		}
	}

	#[test]
	fn go_to_slide_always_resets_both_counters() {
		let mut s = narrated();
		s.list.count = 3;
		s.graph.count = 9;
		s.go_to_slide(1);
		assert_eq!((s.list.count, s.graph.count), (0, 0));

		s.list.count = 5;
		s.graph.count = 13;
		s.go_to_slide(1);
		assert_eq!((s.list.count, s.graph.count), (0, 0));
	}

	#[test]
	fn go_to_slide_clamps_past_the_end() {
		let mut s = narrated();
		s.go_to_slide(42);
		assert_eq!(s.active_slide(), Some(Slide::ThankYou));
	}

	#[test]
	fn advance_and_reset_ignore_non_revealing_slides() {
		let mut s = narrated();
		s.advance();
		s.reset();
		assert_eq!((s.list.count, s.graph.count), (0, 0));
		assert_eq!(s.button_label(), None);
	}

	#[test]
	fn reset_only_touches_active_counter() {
		let mut s = classic();
		s.advance();
		s.advance();
		s.graph.count = 4;
		s.reset();
		assert_eq!((s.list.count, s.graph.count), (0, 4));
	}

	#[test]
	fn slide_navigation_stops_at_the_ends() {
		let mut s = narrated();
		s.apply(Command::PrevSlide);
		assert_eq!(s.slide_index(), 0);
		for _ in 0..10 {
			s.apply(Command::NextSlide);
		}
		assert_eq!(s.slide_index(), 3);
		assert!(s.is_last());
		s.apply(Command::GoTo(2));
		assert_eq!(s.active_slide(), Some(Slide::GraphReveal));
	}

	#[test]
	fn button_label_follows_progress() {
		let mut s = classic();
		assert_eq!(s.button_label(), Some(ButtonLabel::Start));
		s.advance();
		assert_eq!(s.button_label(), Some(ButtonLabel::Next));
		for _ in 0..4 {
			s.advance();
		}
		assert_eq!(s.button_label(), Some(ButtonLabel::Restart));
		assert!(s.show_reset());
	}

	#[test]
	fn keyboard_shortcuts() {
		assert_eq!(Command::from_key("ArrowRight"), Some(Command::Advance));
		assert_eq!(Command::from_key(" "), None);
		assert_eq!(Command::from_key("R"), Some(Command::Reset));
		assert_eq!(Command::from_key("PageDown"), Some(Command::NextSlide));
		assert_eq!(Command::from_key("Home"), Some(Command::GoTo(0)));
		assert_eq!(Command::from_key("x"), None);
	}
}
