use leptos::ev;
use leptos::prelude::*;

use super::config::{DeckConfig, Slide, Variant};
use super::layout::{YEAR_FONT_SIZE, is_edge_visible, layout, visible_nodes};
use super::state::{Command, RevealState};
use super::types::{EDGES, GraphNode, HALVINGS, NODES, node_by_id};
use crate::components::audio::BackgroundAudio;

#[component]
pub fn Presentation(config: DeckConfig) -> impl IntoView {
	let state = RwSignal::new(RevealState::new(&config));
	let dispatch = move |cmd: Command| state.update(|s| s.apply(cmd));

	let keys = window_event_listener(ev::keydown, move |ev| {
		if let Some(cmd) = Command::from_key(&ev.key()) {
			ev.prevent_default();
			dispatch(cmd);
		}
	});
	on_cleanup(move || keys.remove());

	let list_revealed = Signal::derive(move || state.with(|s| s.list.count));
	let graph_revealed = Signal::derive(move || state.with(|s| s.graph.count));
	let deck_class = match config.variant {
		Variant::Classic => "deck deck-classic",
		Variant::Narrated => "deck deck-narrated",
	};

	view! {
		<div class=deck_class>
			<div class="backdrop" aria-hidden="true">
				<div class="blob blob-1"></div>
				<div class="blob blob-2"></div>
				<div class="blob blob-3"></div>
			</div>

			<div class="deck-frame">
				{config.audio_sources.map(|sources| view! { <BackgroundAudio sources=sources /> })}

				<div class="slide-indicator">
					{(0..config.slides.len())
						.map(|i| {
							view! {
								<button
									class="slide-bar"
									class:active=move || state.with(|s| s.slide_index() == i)
									aria-label=format!("Go to slide {}", i + 1)
									on:click=move |_| dispatch(Command::GoTo(i))
								></button>
							}
						})
						.collect_view()}
				</div>

				<div class="card">
					<div class="logo-row">
						<img src=config.logo_path alt="Logo" class="logo" />
					</div>

					{move || match state.with(|s| s.active_slide()) {
						Some(Slide::Welcome) => {
							view! { <WelcomeSlide has_audio=config.has_audio() /> }.into_any()
						}
						Some(Slide::ListReveal) => {
							view! { <HalvingList revealed=list_revealed /> }.into_any()
						}
						Some(Slide::GraphReveal) => {
							view! { <PatternGraph revealed=graph_revealed /> }.into_any()
						}
						Some(Slide::ThankYou) => view! { <ThankYouSlide /> }.into_any(),
						None => ().into_any(),
					}}

					<Controls state=state />
				</div>
			</div>
		</div>
	}
}

#[component]
fn Controls(state: RwSignal<RevealState>) -> impl IntoView {
	let dispatch = move |cmd: Command| state.update(|s| s.apply(cmd));

	view! {
		<div class="controls">
			<div class="slide-nav">
				<button
					class="nav-button"
					disabled=move || state.with(|s| s.is_first())
					on:click=move |_| dispatch(Command::PrevSlide)
				>
					"← Previous"
				</button>
				<span class="slide-count">
					{move || state.with(|s| format!("{} / {}", s.slide_index() + 1, s.slide_count()))}
				</span>
				<button
					class="nav-button"
					disabled=move || state.with(|s| s.is_last())
					on:click=move |_| dispatch(Command::NextSlide)
				>
					"Next slide →"
				</button>
			</div>

			<Show when=move || state.with(|s| s.button_label().is_some())>
				<div class="reveal-nav">
					<button class="primary-button" on:click=move |_| dispatch(Command::Advance)>
						{move || state.with(|s| s.button_label().map(|l| l.as_str()).unwrap_or_default())}
					</button>
					<Show when=move || state.with(|s| s.show_reset())>
						<button class="nav-button" on:click=move |_| dispatch(Command::Reset)>
							"Reset"
						</button>
					</Show>
				</div>
			</Show>
		</div>
	}
}

#[component]
fn WelcomeSlide(has_audio: bool) -> impl IntoView {
	view! {
		<div class="slide slide-welcome">
			<h1 class="title">"Bitcoin Halving"</h1>
			<p class="subtitle">
				"Every four years the block reward is cut in half. Here is what happened to the price."
			</p>
			{has_audio.then(|| view! { <p class="hint">"Tap anywhere to enable sound"</p> })}
		</div>
	}
}

#[component]
fn ThankYouSlide() -> impl IntoView {
	view! {
		<div class="slide slide-thanks">
			<h1 class="title">"Thank You"</h1>
			<p class="subtitle">"Will the pattern repeat after 2024?"</p>
		</div>
	}
}

#[component]
fn Progress(#[prop(into)] revealed: Signal<usize>, total: usize, label: &'static str) -> impl IntoView {
	view! {
		<div class="progress">
			<div class="progress-dots">
				{(0..total)
					.map(|i| view! { <span class="dot" class:filled=move || i < revealed.get()></span> })
					.collect_view()}
			</div>
			<p class="progress-text">{move || format!("{} of {} {}", revealed.get(), total, label)}</p>
		</div>
	}
}

#[component]
fn HalvingList(#[prop(into)] revealed: Signal<usize>) -> impl IntoView {
	view! {
		<div class="slide slide-list">
			<h1 class="title">"Halving Chart"</h1>
			<p class="subtitle">"Click to reveal the Bitcoin halving timeline"</p>
			<div class="halving-list">
				{HALVINGS
					.iter()
					.enumerate()
					.map(|(i, event)| {
						view! {
							<div class="halving-row" class:revealed=move || i < revealed.get()>
								<span class="halving-year">{event.year}</span>
								<span class="halving-arrow" aria-hidden="true">
									"→"
								</span>
								<span class="halving-reward">{event.reward_label}</span>
							</div>
						}
					})
					.collect_view()}
			</div>
			<Progress revealed=revealed total=HALVINGS.len() label="halvings revealed" />
		</div>
	}
}

fn px(v: f64) -> String {
	v.to_string()
}

fn graph_node(node: &'static GraphNode) -> impl IntoView {
	let l = layout(node);
	let style = l.style;

	view! {
		<g class="graph-node">
			<circle
				cx=px(l.center.x)
				cy=px(l.center.y)
				r=px(l.glow_radius)
				fill=style.glow_fill
				opacity="0.4"
			/>
			<circle
				class="node-marker"
				cx=px(l.center.x)
				cy=px(l.center.y)
				r=px(l.marker_radius)
				fill=style.marker_fill
				stroke=style.marker_stroke
				stroke-width="0.5"
			/>
			<circle cx=px(l.center.x) cy=px(l.center.y) r=px(l.core_radius) fill="#fbbf24" />

			<rect
				x=px(l.year_box.x)
				y=px(l.year_box.y)
				width=px(l.year_box.width)
				height=px(l.year_box.height)
				fill="#0f172a"
				opacity="0.95"
				rx="1"
			/>
			<text
				x=px(l.year_text.x)
				y=px(l.year_text.y)
				text-anchor="middle"
				dominant-baseline="middle"
				fill="#fbbf24"
				font-weight="700"
				font-size=px(YEAR_FONT_SIZE)
				font-family="Arial, sans-serif"
			>
				{node.year_label}
			</text>

			<rect
				x=px(l.price_box.x)
				y=px(l.price_box.y)
				width=px(l.price_box.width)
				height=px(l.price_box.height)
				fill="#0f172a"
				opacity="0.95"
				rx="1"
			/>
			<text
				x=px(l.price_text.x)
				y=px(l.price_text.y)
				text-anchor="middle"
				dominant-baseline="middle"
				fill=style.price_fill
				font-weight=style.price_weight
				font-size=px(l.price_font_size)
				font-family="Arial, sans-serif"
			>
				{node.price_label}
			</text>
		</g>
	}
}

#[component]
fn PatternGraph(#[prop(into)] revealed: Signal<usize>) -> impl IntoView {
	// Keyed so already-revealed elements keep their DOM nodes and don't replay animations
	let visible_edges = move || {
		let count = revealed.get();
		EDGES
			.iter()
			.filter(|e| is_edge_visible(e, count))
			.filter_map(|e| Some((e.to, node_by_id(e.from)?, node_by_id(e.to)?)))
			.collect::<Vec<_>>()
	};

	view! {
		<div class="slide slide-graph">
			<h1 class="title">"Bitcoin Pattern Graph"</h1>
			<p class="subtitle">"Reveal Bitcoin's historical pattern"</p>
			<div class="graph-frame">
				<svg
					class="pattern-graph"
					viewBox="0 0 100 100"
					preserveAspectRatio="xMidYMid meet"
					role="img"
					aria-label="Bitcoin price and halving timeline"
				>
					<For
						each=visible_edges
						key=|(to, _, _)| *to
						children=move |(_, from, to)| {
							view! {
								<line
									class="graph-edge"
									x1=px(from.x)
									y1=px(from.y)
									x2=px(to.x)
									y2=px(to.y)
									stroke="#f59e0b"
									stroke-width="0.5"
									stroke-linecap="round"
								/>
							}
						}
					/>
					<For
						each={move || visible_nodes(revealed.get()).collect::<Vec<_>>()}
						key=|node| node.id
						children=graph_node
					/>
				</svg>
			</div>
			<Progress revealed=revealed total=NODES.len() label="nodes" />
		</div>
	}
}
