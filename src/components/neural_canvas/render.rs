//! Frame drawing for each variant. Every pass starts from a cleared canvas.

use super::geometry::{Bounds, distance};
use super::layout::{layered_edges, layered_positions};
use super::state::{HubMap, Interaction, LayeredNetwork, ParticleField, SkillNetwork};
use super::surface::Surface;

const LABEL_FONT: &str = "12px sans-serif";
const LABEL_OFFSET: f64 = 10.0;
const HIGHLIGHT: &str = "#ffffff";

pub fn particle_field<S: Surface + ?Sized>(field: &ParticleField, bounds: Bounds, surface: &mut S) {
	surface.clear(bounds);
	let particles = &field.particles;
	for p in particles {
		surface.circle((p.x, p.y), p.radius, &p.color);
	}

	let config = &field.config;
	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			if distance(a.x, a.y, b.x, b.y) < config.link_distance {
				surface.line((a.x, a.y), (b.x, b.y), &config.link_color, config.link_width);
			}
		}
	}
}

pub fn layered_network<S: Surface + ?Sized>(network: &LayeredNetwork, bounds: Bounds, surface: &mut S) {
	surface.clear(bounds);
	let config = &network.config;
	let positions = layered_positions(&network.layers, bounds);

	for ((la, ia), (lb, ib)) in layered_edges(&network.layers) {
		surface.line(
			positions[la][ia],
			positions[lb][ib],
			&config.edge_color,
			config.edge_width,
		);
	}

	for (layer, points) in network.layers.iter().zip(&positions) {
		for (&activation, &point) in layer.activations.iter().zip(points) {
			let radius = config.base_radius + activation * config.radius_gain;
			let alpha = config.base_alpha + activation * config.alpha_gain;
			surface.circle(point, radius, &format!("rgba({}, {alpha})", config.node_rgb));
		}
	}
}

pub fn skill_network<S: Surface + ?Sized>(
	network: &SkillNetwork,
	bounds: Bounds,
	interaction: &Interaction,
	surface: &mut S,
) {
	surface.clear(bounds);
	let config = &network.config;
	let nodes = &network.nodes;

	for node in nodes {
		for target in node.connections.iter().filter_map(|&t| nodes.get(t)) {
			surface.line((node.x, node.y), (target.x, target.y), &config.edge_color, 1.0);
		}
	}

	for (idx, node) in nodes.iter().enumerate() {
		let center = (node.x, node.y);
		let size = network.radius(node);
		let color = node.color();

		surface.halo(center, size * 0.8, size * config.halo_scale, &format!("{color}80"));
		surface.circle(center, size, color);

		let hovered = interaction.is_hovered(idx);
		if hovered || interaction.is_selected(&node.name) {
			surface.ring(center, size + 2.0, HIGHLIGHT, 2.0);
		}
		if hovered {
			surface.label(
				&node.name,
				(node.x, node.y - size - LABEL_OFFSET),
				HIGHLIGHT,
				LABEL_FONT,
			);
		}
	}
}

pub fn hub_map<S: Surface + ?Sized>(hub: &HubMap, bounds: Bounds, surface: &mut S) {
	surface.clear(bounds);
	let config = &hub.config;
	let center = (config.hub.0 * bounds.width, config.hub.1 * bounds.height);

	for (i, spoke) in config.spokes.iter().enumerate() {
		let point = (spoke.x_ratio * bounds.width, spoke.y_ratio * bounds.height);
		surface.line(center, point, &config.line_color, 1.0);
		if hub.pulsing.get(i).copied().unwrap_or(false) {
			surface.line(center, point, &config.pulse_color, 2.0);
		}
		let fill = if spoke.active {
			&config.active_color
		} else {
			&config.idle_color
		};
		surface.circle(point, config.spoke_radius, fill);
	}

	surface.circle(center, config.hub_radius, &config.active_color);
	let ring = config.ring_radius + hub.elapsed.sin() * config.ring_amplitude;
	surface.ring(center, ring, &config.ring_color, 2.0);
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::neural_canvas::config::{
		HubMapConfig, LayeredNetworkConfig, ParticleFieldConfig, SkillNetworkConfig,
	};
	use crate::components::neural_canvas::state::Scene;
	use crate::components::neural_canvas::testing::{Command, RecordingSurface};
	use crate::components::neural_canvas::types::{Particle, SkillCategory, SkillRecord};

	fn particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			color: "hsl(210, 70%, 60%)".into(),
		}
	}

	#[test]
	fn particle_links_only_below_threshold() {
		let mut field = ParticleField::new(ParticleFieldConfig::default());
		field.particles = vec![particle(0.0, 0.0), particle(99.0, 0.0), particle(250.0, 0.0)];
		let mut surface = RecordingSurface::default();
		particle_field(&field, Bounds::new(300.0, 300.0), &mut surface);

		assert!(matches!(surface.commands[0], Command::Clear(_)));
		assert_eq!(surface.count(|c| matches!(c, Command::Circle { .. })), 3);
		let lines: Vec<_> = surface.lines().collect();
		assert_eq!(lines, vec![((0.0, 0.0), (99.0, 0.0))]);
	}

	#[test]
	fn layered_draws_every_edge_then_every_neuron() {
		let mut network = LayeredNetwork::new(LayeredNetworkConfig::default());
		network.layout(Bounds::new(500.0, 500.0), &mut SmallRng::seed_from_u64(8));
		let mut surface = RecordingSurface::default();
		layered_network(&network, Bounds::new(500.0, 500.0), &mut surface);

		assert_eq!(surface.lines().count(), 48);
		assert_eq!(surface.count(|c| matches!(c, Command::Circle { .. })), 14);
		let first_circle = surface
			.commands
			.iter()
			.position(|c| matches!(c, Command::Circle { .. }))
			.unwrap();
		assert!(surface.commands[first_circle..].iter().all(|c| matches!(c, Command::Circle { .. })));
	}

	#[test]
	fn layered_radius_and_alpha_follow_activation() {
		let mut network = LayeredNetwork::new(LayeredNetworkConfig::default());
		network.layers = vec![crate::components::neural_canvas::types::Layer {
			x_ratio: 0.5,
			activations: vec![0.0, 1.0],
		}];
		let mut surface = RecordingSurface::default();
		layered_network(&network, Bounds::new(300.0, 300.0), &mut surface);
		let circles: Vec<_> = surface
			.commands
			.iter()
			.filter_map(|c| match c {
				Command::Circle { radius, fill, .. } => Some((*radius, fill.clone())),
				_ => None,
			})
			.collect();
		assert_eq!(circles[0], (5.0, "rgba(100, 200, 255, 0.3)".to_string()));
		assert_eq!(circles[1], (15.0, "rgba(100, 200, 255, 1)".to_string()));
	}

	fn two_node_network() -> SkillNetwork {
		let skills = vec![
			SkillRecord::new("Python", 100, SkillCategory::Programming),
			SkillRecord::new("SQL", 0, SkillCategory::Databases),
		];
		let mut network = SkillNetwork::new(SkillNetworkConfig::default(), skills);
		network.layout(Bounds::new(600.0, 400.0), &mut SmallRng::seed_from_u64(1));
		network
	}

	#[test]
	fn skill_nodes_draw_halo_body_and_directed_edges() {
		let network = two_node_network();
		let mut surface = RecordingSurface::default();
		skill_network(&network, Bounds::new(600.0, 400.0), &Interaction::default(), &mut surface);

		assert_eq!(surface.lines().count(), 2);
		let halos: Vec<_> = surface
			.commands
			.iter()
			.filter_map(|c| match c {
				Command::Halo { inner, outer, color, .. } => Some((*inner, *outer, color.clone())),
				_ => None,
			})
			.collect();
		assert_eq!(halos[0], (20.0, 37.5, "#3b82f680".to_string()));
		assert_eq!(halos[1], (4.0, 7.5, "#f59e0b80".to_string()));
		assert_eq!(surface.count(|c| matches!(c, Command::Ring { .. })), 0);
		assert_eq!(surface.count(|c| matches!(c, Command::Label { .. })), 0);
	}

	#[test]
	fn hovered_node_gets_ring_and_label() {
		let network = two_node_network();
		let mut surface = RecordingSurface::default();
		let interaction = Interaction {
			hovered: Some(0),
			selected: None,
		};
		skill_network(&network, Bounds::new(600.0, 400.0), &interaction, &mut surface);

		let node = &network.nodes[0];
		assert!(surface.commands.contains(&Command::Ring {
			center: (node.x, node.y),
			radius: 27.0,
			stroke: "#ffffff".into(),
		}));
		assert!(surface.commands.contains(&Command::Label {
			text: "Python".into(),
			at: (node.x, node.y - 25.0 - 10.0),
		}));
	}

	#[test]
	fn selected_node_gets_ring_without_label() {
		let network = two_node_network();
		let mut surface = RecordingSurface::default();
		let interaction = Interaction {
			hovered: None,
			selected: Some("SQL".into()),
		};
		skill_network(&network, Bounds::new(600.0, 400.0), &interaction, &mut surface);
		assert_eq!(surface.count(|c| matches!(c, Command::Ring { .. })), 1);
		assert_eq!(surface.count(|c| matches!(c, Command::Label { .. })), 0);
	}

	#[test]
	fn hub_map_draws_spokes_and_pulse_ring() {
		let mut hub = HubMap::new(HubMapConfig {
			pulse_probability: 1.0,
			..Default::default()
		});
		let bounds = Bounds::new(1000.0, 500.0);
		let mut rng = SmallRng::seed_from_u64(3);
		hub.layout(bounds, &mut rng);
		hub.step(bounds, &mut rng);

		let mut surface = RecordingSurface::default();
		hub_map(&hub, bounds, &mut surface);
		assert_eq!(surface.lines().count(), 10);
		assert!(surface.lines().all(|(from, _)| from == (300.0, 200.0)));
		assert_eq!(surface.count(|c| matches!(c, Command::Circle { .. })), 6);
		assert_eq!(surface.count(|c| matches!(c, Command::Ring { .. })), 1);
	}

	#[test]
	fn hub_ring_breathes_with_elapsed_time() {
		let mut hub = HubMap::new(HubMapConfig::default());
		let bounds = Bounds::new(1000.0, 500.0);
		let mut rng = SmallRng::seed_from_u64(9);
		hub.layout(bounds, &mut rng);
		for _ in 0..45 {
			hub.step(bounds, &mut rng);
		}

		let mut surface = RecordingSurface::default();
		hub_map(&hub, bounds, &mut surface);
		let rings: Vec<_> = surface
			.commands
			.iter()
			.filter_map(|c| match c {
				Command::Ring { center, radius, .. } => Some((*center, *radius)),
				_ => None,
			})
			.collect();
		assert_eq!(rings, vec![((300.0, 200.0), 12.0 + 3.0 * hub.elapsed.sin())]);
		assert!(rings[0].1 > 12.0);
	}

	#[test]
	fn pulse_overdraws_each_spoke_brighter_and_thicker() {
		let config = HubMapConfig {
			pulse_probability: 1.0,
			..Default::default()
		};
		let mut hub = HubMap::new(config.clone());
		let bounds = Bounds::new(1000.0, 500.0);
		let mut rng = SmallRng::seed_from_u64(5);
		hub.layout(bounds, &mut rng);
		hub.step(bounds, &mut rng);

		let mut surface = RecordingSurface::default();
		hub_map(&hub, bounds, &mut surface);
		let lines: Vec<_> = surface
			.commands
			.iter()
			.filter_map(|c| match c {
				Command::Line { to, color, width, .. } => Some((*to, color.clone(), *width)),
				_ => None,
			})
			.collect();
		assert_eq!(lines.len(), 2 * config.spokes.len());
		for (pair, spoke) in lines.chunks(2).zip(&config.spokes) {
			let end = (spoke.x_ratio * 1000.0, spoke.y_ratio * 500.0);
			assert_eq!(pair[0], (end, config.line_color.clone(), 1.0));
			assert_eq!(pair[1], (end, config.pulse_color.clone(), 2.0));
		}
	}

	#[test]
	fn no_pulse_lines_without_pulse_chance() {
		let mut hub = HubMap::new(HubMapConfig {
			pulse_probability: 0.0,
			..Default::default()
		});
		let bounds = Bounds::new(800.0, 600.0);
		let mut rng = SmallRng::seed_from_u64(5);
		hub.layout(bounds, &mut rng);
		for _ in 0..10 {
			hub.step(bounds, &mut rng);
		}

		let mut surface = RecordingSurface::default();
		hub_map(&hub, bounds, &mut surface);
		assert_eq!(surface.lines().count(), 5);
		assert_eq!(
			surface.count(|c| matches!(c, Command::Line { color, .. } if *color == hub.config.pulse_color)),
			0
		);
	}
}
