use leptos::prelude::*;

use crate::components::presentation::{DeckConfig, Presentation, Variant};

fn deck(config: DeckConfig) -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<main class="fullscreen-deck">
				<Presentation config=config />
			</main>
		</ErrorBoundary>
	}
}

/// Four-slide deck with background audio
#[component]
pub fn Home() -> impl IntoView {
	deck(DeckConfig::default())
}

/// The two reveal slides on their own, without audio
#[component]
pub fn Classic() -> impl IntoView {
	deck(DeckConfig::new(Variant::Classic))
}
