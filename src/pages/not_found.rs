use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="canvas-overlay">
			<h1>"Uh oh!" <br /> "We couldn't find that page!"</h1>
			<A href="/">"Return home"</A>
		</div>
	}
}
