use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::neural_canvas::{
	NeuralCanvas, SceneConfig, SkillCategory, SkillNetworkConfig, SkillRecord, proficiency_label,
};
use crate::data::load_skills;

/// Interactive skill network with a details panel for the clicked node.
#[component]
pub fn Skills() -> impl IntoView {
	let skills = load_skills();
	let scene = Signal::derive(move || SceneConfig::SkillNetwork {
		config: SkillNetworkConfig::default(),
		skills: skills.clone(),
	});
	let (selected, set_selected) = signal(None::<SkillRecord>);
	let on_select = Callback::new(move |skill: SkillRecord| set_selected.set(Some(skill)));
	let on_close = Callback::new(move |()| set_selected.set(None));

	view! {
		<div class="skills-page">
			<header class="canvas-overlay">
				<h1>"Neural Skills"</h1>
				<A href="/">"Back"</A>
			</header>
			<div class="skill-network">
				<NeuralCanvas scene=scene selected=selected on_select=on_select class="skill-network-canvas" />
				<Legend />
			</div>
			{move || selected.get().map(|skill| view! { <SkillDetails skill=skill on_close=on_close /> })}
		</div>
	}
}

#[component]
fn SkillDetails(skill: SkillRecord, on_close: Callback<()>) -> impl IntoView {
	let level = skill.level;
	view! {
		<aside class="skill-details">
			<button class="close" on:click=move |_| on_close.run(())>"×"</button>
			<h2>{skill.name}</h2>
			<p class="category" style=format!("color: {}", skill.category.color())>
				{skill.category.title()}
			</p>
			<div class="level-bar">
				<div class="level-fill" style=format!("width: {level}%")></div>
			</div>
			<p class="level">{format!("{level}% · {}", proficiency_label(level))}</p>
			{skill.description.map(|d| view! { <p class="description">{d}</p> })}
		</aside>
	}
}

#[component]
fn Legend() -> impl IntoView {
	view! {
		<div class="legend">
			<h3>"Legend"</h3>
			<ul>
				{SkillCategory::ALL
					.into_iter()
					.filter(|c| *c != SkillCategory::Other)
					.map(|c| {
						view! {
							<li>
								<span class="swatch" style=format!("background: {}", c.color())></span>
								{c.title()}
							</li>
						}
					})
					.collect_view()}
			</ul>
			<p class="hint">"Size = proficiency. Click a node for details."</p>
		</div>
	}
}
