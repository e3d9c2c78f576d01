use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// Events that grant transient user activation, so `play()` is allowed from
/// inside their handlers. `pointerdown` and `touchstart` do not on touch devices.
pub const ACTIVATION_EVENTS: &[&str] = &["click", "keydown", "touchend", "pointerup"];

/// One handler registered for several event types on a target. Stays armed
/// until dropped.
pub struct UnlockListener {
	target: EventTarget,
	events: &'static [&'static str],
	callback: Closure<dyn FnMut(Event)>,
}

impl UnlockListener {
	pub fn arm(
		target: &EventTarget,
		events: &'static [&'static str],
		handler: impl FnMut(Event) + 'static,
	) -> Self {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		let options = AddEventListenerOptions::new();
		options.set_passive(true);
		for event in events {
			let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
				event,
				callback.as_ref().unchecked_ref(),
				&options,
			);
		}
		Self {
			target: target.clone(),
			events,
			callback,
		}
	}
}

impl Drop for UnlockListener {
	fn drop(&mut self) {
		for event in self.events {
			let _ = self
				.target
				.remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
		}
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use wasm_bindgen_test::*;

	use super::*;

	fn fire(target: &EventTarget, kind: &str) {
		let ev = Event::new(kind).unwrap();
		target.dispatch_event(&ev).unwrap();
	}

	#[wasm_bindgen_test]
	fn fires_for_every_registered_event_type() {
		let target = EventTarget::new().unwrap();
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		let _listener = UnlockListener::arm(&target, ACTIVATION_EVENTS, move |_| {
			counter.set(counter.get() + 1)
		});

		for kind in ACTIVATION_EVENTS {
			fire(&target, kind);
		}
		fire(&target, "pointerdown");
		assert_eq!(hits.get(), ACTIVATION_EVENTS.len());
	}

	#[wasm_bindgen_test]
	fn dropping_removes_all_listeners() {
		let target = EventTarget::new().unwrap();
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		let listener = UnlockListener::arm(&target, ACTIVATION_EVENTS, move |_| {
			counter.set(counter.get() + 1)
		});

		fire(&target, "click");
		drop(listener);
		for _ in 0..3 {
			for kind in ACTIVATION_EVENTS {
				fire(&target, kind);
			}
		}
		assert_eq!(hits.get(), 1);
	}
}
