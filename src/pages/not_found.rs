use leptos::prelude::*;
use leptos_router::components::A;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="fullscreen-deck">
			<div class="card">
				<h1 class="title">"Page not found"</h1>
				<p class="subtitle">
					<A href="/">"Back to the presentation"</A>
				</p>
			</div>
		</main>
	}
}
