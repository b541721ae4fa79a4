use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::neural_canvas::{
	LayeredNetworkConfig, NeuralCanvas, ParticleFieldConfig, SceneConfig,
};

/// Landing page: drifting particles with the layered network behind them.
#[component]
pub fn Home() -> impl IntoView {
	let field = Signal::derive(|| SceneConfig::ParticleField(ParticleFieldConfig::default()));
	let network = Signal::derive(|| SceneConfig::LayeredNetwork(LayeredNetworkConfig::default()));

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

			<div class="fullscreen-canvas">
				<NeuralCanvas scene=field fullscreen=true class="background-canvas particles" />
				<NeuralCanvas scene=network fullscreen=true class="background-canvas network" />
				<div class="canvas-overlay">
					<h1>"Neural Entrance"</h1>
					<p class="subtitle">"Data science, machine learning and the pipelines between them."</p>
					<nav>
						<A href="/skills">"Neural Skills"</A>
						<A href="/contact">"Contact"</A>
					</nav>
				</div>
			</div>
		</ErrorBoundary>
	}
}
