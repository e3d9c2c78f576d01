use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlAudioElement};

use super::listener::{ACTIVATION_EVENTS, UnlockListener};
use super::state::{AudioError, AudioState, PlayOrigin};

const TOGGLE_SELECTOR: &str = "[data-audio-toggle]";

fn describe(err: &JsValue) -> String {
	err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn play(
	audio: &HtmlAudioElement,
	state: RwSignal<AudioState>,
	origin: PlayOrigin,
	on_started: impl FnOnce() + 'static,
) {
	let promise: js_sys::Promise = match audio.play() {
		Ok(promise) => promise,
		Err(err) => {
			let err = AudioError::PlaybackRejected(describe(&err));
			state.try_update(|s| s.on_play_rejected(origin, &err));
			return;
		}
	};
	let on_resolve = Closure::once(move |_: JsValue| {
		info!("{origin:?} playback started");
		on_started();
	});
	let on_reject = Closure::once(move |err: JsValue| {
		let err = AudioError::PlaybackRejected(describe(&err));
		state.try_update(|s| s.on_play_rejected(origin, &err));
	});
	let _ = promise.then2(&on_resolve, &on_reject);
	on_resolve.forget();
	on_reject.forget();
}

/// Interactions on the toggle itself are left to the toggle's own handler.
fn from_toggle(ev: &Event) -> bool {
	ev.target()
		.and_then(|t| t.dyn_into::<Element>().ok())
		.and_then(|el| el.closest(TOGGLE_SELECTOR).ok().flatten())
		.is_some()
}

/// Looping background track. Stays muted until the first interaction anywhere
/// on the page, and offers a manual mute toggle.
#[component]
pub fn BackgroundAudio(sources: &'static [&'static str]) -> impl IntoView {
	let audio_ref = NodeRef::<leptos::html::Audio>::new();
	let state = RwSignal::new(AudioState::new(sources));
	let unlock = StoredValue::new_local(None::<UnlockListener>);

	Effect::new(move |_| {
		let Some(audio) = audio_ref.get() else {
			return;
		};
		if unlock.with_value(Option::is_some) {
			return;
		}
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			warn!("no document, audio stays muted");
			return;
		};
		audio.set_loop(true);
		audio.set_muted(true);

		// Stays armed until playback actually starts, so a refused attempt is
		// retried on the next interaction.
		let listener = UnlockListener::arm(&document, ACTIVATION_EVENTS, move |ev: Event| {
			if from_toggle(&ev) {
				return;
			}
			if !state.try_update(|s| s.unlock()).unwrap_or(false) {
				return;
			}
			info!("interaction ({}), starting audio", ev.type_());
			audio.set_muted(false);
			play(&audio, state, PlayOrigin::Unlock, move || {
				unlock.try_update_value(|l| l.take());
			});
		});
		unlock.set_value(Some(listener));
	});

	Effect::new(move |_| {
		let muted = state.with(|s| s.muted);
		if let Some(audio) = audio_ref.get() {
			audio.set_muted(muted);
		}
	});

	on_cleanup(move || {
		unlock.try_update_value(|l| l.take());
		if let Some(Some(audio)) = audio_ref.try_get_untracked() {
			let _ = audio.pause();
		}
	});

	let on_error = move |_| match state.try_update(|s| s.on_load_error()) {
		Some(Ok(next)) => info!("retrying audio with {next}"),
		Some(Err(err)) => warn!("{err}"),
		None => {}
	};

	let on_toggle = move |_| {
		let Some(muted) = state.try_update(|s| s.toggle_mute()) else {
			return;
		};
		let Some(audio) = audio_ref.get_untracked() else {
			state.update(|s| s.on_play_rejected(PlayOrigin::Toggle, &AudioError::ElementMissing));
			return;
		};
		audio.set_muted(muted);
		if !muted {
			play(&audio, state, PlayOrigin::Toggle, || {});
		}
	};

	view! {
		<div class="audio-control">
			<audio
				node_ref=audio_ref
				src=move || state.with(|s| s.current_source())
				preload="auto"
				on:error=on_error
				on:canplaythrough=move |_| state.update(|s| s.on_ready())
			/>
			<button
				class="audio-toggle"
				class:muted=move || state.with(|s| s.muted)
				data-audio-toggle=""
				aria-label=move || if state.with(|s| s.muted) { "Unmute background audio" } else { "Mute background audio" }
				aria-pressed=move || (!state.with(|s| s.muted)).to_string()
				on:click=on_toggle
			>
				{move || state.with(|s| s.indicator())}
			</button>
		</div>
	}
}
