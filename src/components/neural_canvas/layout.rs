//! Initial placement for each variant, plus the skill network's connections.

use std::f64::consts::TAU;

use rand::Rng;
use rand::seq::index;

use super::config::{LayeredNetworkConfig, ParticleFieldConfig, SkillNetworkConfig};
use super::geometry::Bounds;
use super::types::{Layer, Particle, SkillNode, SkillRecord};

/// Uniform draw from `[lo, hi)`, collapsing to `lo` for an empty band.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

/// Scatter `config.count` particles over the canvas. A degenerate canvas
/// yields no particles.
pub fn uniform_particles<R: Rng + ?Sized>(
	config: &ParticleFieldConfig,
	bounds: Bounds,
	rng: &mut R,
) -> Vec<Particle> {
	if bounds.is_degenerate() {
		return Vec::new();
	}
	(0..config.count)
		.map(|_| {
			let hue = sample(rng, config.hue_min, config.hue_max);
			Particle {
				x: sample(rng, 0.0, bounds.width),
				y: sample(rng, 0.0, bounds.height),
				vx: sample(rng, -config.max_speed, config.max_speed),
				vy: sample(rng, -config.max_speed, config.max_speed),
				radius: sample(rng, config.radius_min, config.radius_max),
				color: format!(
					"hsl({:.0}, {}%, {}%)",
					hue, config.saturation, config.lightness
				),
			}
		})
		.collect()
}

/// Build the decorative network's layers with random starting activations.
pub fn layered_layers<R: Rng + ?Sized>(config: &LayeredNetworkConfig, rng: &mut R) -> Vec<Layer> {
	config
		.layers
		.iter()
		.map(|spec| Layer {
			x_ratio: spec.x_ratio,
			activations: (0..spec.neurons).map(|_| sample(rng, 0.0, 1.0)).collect(),
		})
		.collect()
}

/// Position of neuron `index` (0-based) in a layer of `neurons`.
pub fn neuron_position(x_ratio: f64, index: usize, neurons: usize, bounds: Bounds) -> (f64, f64) {
	if bounds.is_degenerate() {
		return (0.0, 0.0);
	}
	(
		x_ratio * bounds.width,
		(index + 1) as f64 * bounds.height / (neurons + 1) as f64,
	)
}

/// Positions of every neuron, grouped by layer.
pub fn layered_positions(layers: &[Layer], bounds: Bounds) -> Vec<Vec<(f64, f64)>> {
	layers
		.iter()
		.map(|layer| {
			(0..layer.neurons())
				.map(|i| neuron_position(layer.x_ratio, i, layer.neurons(), bounds))
				.collect()
		})
		.collect()
}

/// A neuron addressed as `(layer, index)`.
pub type NeuronId = (usize, usize);

/// Every neuron of each layer joined to every neuron of the next one.
pub fn layered_edges(layers: &[Layer]) -> Vec<(NeuronId, NeuronId)> {
	let mut edges = Vec::new();
	for (l, pair) in layers.windows(2).enumerate() {
		for i in 0..pair[0].neurons() {
			for j in 0..pair[1].neurons() {
				edges.push(((l, i), (l + 1, j)));
			}
		}
	}
	edges
}

/// Place skills evenly around a jittered ring centred on the canvas, then
/// wire up their connections.
pub fn ring_layout<R: Rng + ?Sized>(
	skills: &[SkillRecord],
	config: &SkillNetworkConfig,
	bounds: Bounds,
	rng: &mut R,
) -> Vec<SkillNode> {
	let count = skills.len();
	let (cx, cy, ring) = if bounds.is_degenerate() {
		(0.0, 0.0, 0.0)
	} else {
		let (cx, cy) = bounds.center();
		(cx, cy, bounds.min_side() * config.ring_ratio)
	};

	let mut nodes: Vec<SkillNode> = skills
		.iter()
		.enumerate()
		.map(|(i, skill)| {
			let angle = i as f64 / count as f64 * TAU;
			let radius = ring * sample(rng, config.jitter_min, config.jitter_max);
			SkillNode {
				name: skill.name.clone(),
				level: skill.level.min(100),
				category: skill.category,
				x: cx + angle.cos() * radius,
				y: cy + angle.sin() * radius,
				vx: sample(rng, -config.initial_speed, config.initial_speed),
				vy: sample(rng, -config.initial_speed, config.initial_speed),
				connections: Vec::new(),
			}
		})
		.collect();

	connect(&mut nodes, config, rng);
	nodes
}

/// Give every node `connection_count(level)` distinct random targets other
/// than itself, or all other nodes when there are not enough of them.
pub fn connect<R: Rng + ?Sized>(nodes: &mut [SkillNode], config: &SkillNetworkConfig, rng: &mut R) {
	let others = nodes.len().saturating_sub(1);
	for (i, node) in nodes.iter_mut().enumerate() {
		let wanted = config.connection_count(node.level).min(others);
		node.connections = index::sample(rng, others, wanted)
			.into_iter()
			.map(|j| if j >= i { j + 1 } else { j })
			.collect();
	}
}
