//! One-frame updates. Velocity corrections computed here take effect on the
//! following frame.

use rand::Rng;

use super::config::SkillNetworkConfig;
use super::geometry::{Bounds, clamp_speed, distance, reflect};
use super::layout::sample;
use super::types::{Layer, Particle, SkillNode};

/// Move, then bounce off the canvas edges by flipping velocity.
pub fn step_particle(p: &mut Particle, bounds: Bounds) {
	p.x += p.vx;
	p.y += p.vy;
	p.vx = reflect(p.x, p.vx, 0.0, bounds.width);
	p.vy = reflect(p.y, p.vy, 0.0, bounds.height);
}

/// Random walk of every activation, kept inside `[0, 1]`.
pub fn step_layer<R: Rng + ?Sized>(layer: &mut Layer, drift: f64, rng: &mut R) {
	for value in &mut layer.activations {
		*value = (*value + sample(rng, -drift, drift)).clamp(0.0, 1.0);
	}
}

pub fn step_skill_node(node: &mut SkillNode, bounds: Bounds, config: &SkillNetworkConfig) {
	node.x += node.vx;
	node.y += node.vy;

	let margin = config.edge_margin;
	node.vx = reflect(node.x, node.vx, margin, bounds.width - margin);
	node.vy = reflect(node.y, node.vy, margin, bounds.height - margin);

	let (cx, cy) = bounds.center();
	if distance(node.x, node.y, cx, cy) > bounds.min_side() * config.centering_ratio {
		node.vx += (cx - node.x) * config.centering_strength;
		node.vy += (cy - node.y) * config.centering_strength;
	}

	(node.vx, node.vy) = clamp_speed(node.vx, node.vy, config.max_speed);
}
