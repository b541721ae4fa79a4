//! Per-canvas scene state: what each variant keeps between frames, how it
//! advances, and how pointer positions map onto it.

use rand::Rng;

use super::config::{
	HubMapConfig, LayeredNetworkConfig, ParticleFieldConfig, SceneConfig, SkillNetworkConfig,
};
use super::geometry::{Bounds, distance};
use super::layout;
use super::physics;
use super::render;
use super::surface::Surface;
use super::types::{Layer, Particle, SkillNode, SkillRecord};

/// Fixed frame length used to advance time-based effects.
pub const FRAME_SECONDS: f64 = 1.0 / 60.0;

/// Hover and selection for one canvas. Pointer handlers write it, the render
/// pass reads it; physics never touches it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interaction {
	pub hovered: Option<usize>,
	pub selected: Option<String>,
}

impl Interaction {
	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hovered == Some(idx)
	}

	pub fn is_selected(&self, name: &str) -> bool {
		self.selected.as_deref() == Some(name)
	}
}

/// A variant the animation loop can drive.
pub trait Scene {
	/// One-time generation. Only called with non-degenerate bounds.
	fn layout<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R);

	fn step<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R);

	fn render<S: Surface + ?Sized>(&self, bounds: Bounds, interaction: &Interaction, surface: &mut S);

	/// Index of the first node under `(x, y)`, if the variant is interactive.
	fn hit_test(&self, _x: f64, _y: f64) -> Option<usize> {
		None
	}

	/// Domain record behind a node.
	fn record(&self, _idx: usize) -> Option<&SkillRecord> {
		None
	}
}

pub struct ParticleField {
	pub config: ParticleFieldConfig,
	pub particles: Vec<Particle>,
}

impl ParticleField {
	pub fn new(config: ParticleFieldConfig) -> Self {
		Self {
			config,
			particles: Vec::new(),
		}
	}
}

impl Scene for ParticleField {
	fn layout<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
		self.particles = layout::uniform_particles(&self.config, bounds, rng);
	}

	fn step<R: Rng + ?Sized>(&mut self, bounds: Bounds, _rng: &mut R) {
		for p in &mut self.particles {
			physics::step_particle(p, bounds);
		}
	}

	fn render<S: Surface + ?Sized>(&self, bounds: Bounds, _: &Interaction, surface: &mut S) {
		render::particle_field(self, bounds, surface);
	}
}

pub struct LayeredNetwork {
	pub config: LayeredNetworkConfig,
	pub layers: Vec<Layer>,
}

impl LayeredNetwork {
	pub fn new(config: LayeredNetworkConfig) -> Self {
		Self {
			config,
			layers: Vec::new(),
		}
	}
}

impl Scene for LayeredNetwork {
	fn layout<R: Rng + ?Sized>(&mut self, _bounds: Bounds, rng: &mut R) {
		self.layers = layout::layered_layers(&self.config, rng);
	}

	fn step<R: Rng + ?Sized>(&mut self, _bounds: Bounds, rng: &mut R) {
		for layer in &mut self.layers {
			physics::step_layer(layer, self.config.drift, rng);
		}
	}

	fn render<S: Surface + ?Sized>(&self, bounds: Bounds, _: &Interaction, surface: &mut S) {
		render::layered_network(self, bounds, surface);
	}
}

pub struct SkillNetwork {
	pub config: SkillNetworkConfig,
	pub skills: Vec<SkillRecord>,
	pub nodes: Vec<SkillNode>,
}

impl SkillNetwork {
	pub fn new(config: SkillNetworkConfig, skills: Vec<SkillRecord>) -> Self {
		Self {
			config,
			skills,
			nodes: Vec::new(),
		}
	}

	pub fn radius(&self, node: &SkillNode) -> f64 {
		self.config.display_radius(node.level)
	}
}

impl Scene for SkillNetwork {
	fn layout<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
		self.nodes = layout::ring_layout(&self.skills, &self.config, bounds, rng);
	}

	fn step<R: Rng + ?Sized>(&mut self, bounds: Bounds, _rng: &mut R) {
		for node in &mut self.nodes {
			physics::step_skill_node(node, bounds, &self.config);
		}
	}

	fn render<S: Surface + ?Sized>(&self, bounds: Bounds, interaction: &Interaction, surface: &mut S) {
		render::skill_network(self, bounds, interaction, surface);
	}

	fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
		self.nodes.iter().position(|node| {
			distance(x, y, node.x, node.y) < self.radius(node) + self.config.hit_tolerance
		})
	}

	fn record(&self, idx: usize) -> Option<&SkillRecord> {
		let node = self.nodes.get(idx)?;
		self.skills.iter().find(|skill| skill.name == node.name)
	}
}

pub struct HubMap {
	pub config: HubMapConfig,
	pub elapsed: f64,
	/// Spokes drawing a bright pulse this frame.
	pub pulsing: Vec<bool>,
}

impl HubMap {
	pub fn new(config: HubMapConfig) -> Self {
		Self {
			config,
			elapsed: 0.0,
			pulsing: Vec::new(),
		}
	}
}

impl Scene for HubMap {
	fn layout<R: Rng + ?Sized>(&mut self, _bounds: Bounds, _rng: &mut R) {
		self.elapsed = 0.0;
		self.pulsing = vec![false; self.config.spokes.len()];
	}

	fn step<R: Rng + ?Sized>(&mut self, _bounds: Bounds, rng: &mut R) {
		self.elapsed += FRAME_SECONDS;
		let p = match self.config.pulse_probability {
			p if p.is_nan() => 0.0,
			p => p.clamp(0.0, 1.0),
		};
		for pulse in &mut self.pulsing {
			*pulse = rng.gen_bool(p);
		}
	}

	fn render<S: Surface + ?Sized>(&self, bounds: Bounds, _: &Interaction, surface: &mut S) {
		render::hub_map(self, bounds, surface);
	}
}

/// Any of the canvas variants, chosen at mount time from a [`SceneConfig`].
pub enum AnyScene {
	ParticleField(ParticleField),
	LayeredNetwork(LayeredNetwork),
	SkillNetwork(SkillNetwork),
	HubMap(HubMap),
}

impl From<SceneConfig> for AnyScene {
	fn from(config: SceneConfig) -> Self {
		match config {
			SceneConfig::ParticleField(c) => AnyScene::ParticleField(ParticleField::new(c)),
			SceneConfig::LayeredNetwork(c) => AnyScene::LayeredNetwork(LayeredNetwork::new(c)),
			SceneConfig::SkillNetwork { config, skills } => {
				AnyScene::SkillNetwork(SkillNetwork::new(config, skills))
			}
			SceneConfig::HubMap(c) => AnyScene::HubMap(HubMap::new(c)),
		}
	}
}

macro_rules! delegate {
	($self:expr, $scene:ident => $body:expr) => {
		match $self {
			AnyScene::ParticleField($scene) => $body,
			AnyScene::LayeredNetwork($scene) => $body,
			AnyScene::SkillNetwork($scene) => $body,
			AnyScene::HubMap($scene) => $body,
		}
	};
}

impl Scene for AnyScene {
	fn layout<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
		delegate!(self, s => s.layout(bounds, rng))
	}

	fn step<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
		delegate!(self, s => s.step(bounds, rng))
	}

	fn render<S: Surface + ?Sized>(&self, bounds: Bounds, interaction: &Interaction, surface: &mut S) {
		delegate!(self, s => s.render(bounds, interaction, surface))
	}

	fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
		delegate!(self, s => s.hit_test(x, y))
	}

	fn record(&self, idx: usize) -> Option<&SkillRecord> {
		delegate!(self, s => s.record(idx))
	}
}
