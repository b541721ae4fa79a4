use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::neural_canvas::{HubMapConfig, NeuralCanvas, SceneConfig};

#[component]
pub fn Contact() -> impl IntoView {
	let hub = Signal::derive(|| SceneConfig::HubMap(HubMapConfig::default()));

	view! {
		<div class="fullscreen-canvas">
			<NeuralCanvas scene=hub fullscreen=true class="background-canvas hub" />
			<div class="canvas-overlay">
				<h1>"Contact"</h1>
				<p class="subtitle">"Open to data science and ML engineering roles."</p>
				<A href="/">"Back"</A>
			</div>
		</div>
	}
}
