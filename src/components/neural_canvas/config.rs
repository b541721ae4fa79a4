//! Tunables for each canvas variant.
//!
//! Defaults reproduce the site's look. Every struct is `#[serde(default)]`, so
//! a JSON override only needs the fields it changes.

use serde::Deserialize;

use super::error::CanvasError;
use super::types::SkillRecord;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleFieldConfig {
	pub count: usize,
	pub radius_min: f64,
	pub radius_max: f64,
	/// Per-axis velocity is drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	pub hue_min: f64,
	pub hue_max: f64,
	pub saturation: f64,
	pub lightness: f64,
	pub link_distance: f64,
	pub link_color: String,
	pub link_width: f64,
}

impl Default for ParticleFieldConfig {
	fn default() -> Self {
		Self {
			count: 100,
			radius_min: 1.0,
			radius_max: 4.0,
			max_speed: 1.0,
			hue_min: 200.0,
			hue_max: 260.0,
			saturation: 70.0,
			lightness: 60.0,
			link_distance: 100.0,
			link_color: "rgba(100, 200, 255, 0.1)".into(),
			link_width: 0.5,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayerSpec {
	pub neurons: usize,
	pub x_ratio: f64,
}

impl Default for LayerSpec {
	fn default() -> Self {
		Self {
			neurons: 1,
			x_ratio: 0.5,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayeredNetworkConfig {
	pub layers: Vec<LayerSpec>,
	/// Activation moves by up to this much per frame, in either direction.
	pub drift: f64,
	pub edge_color: String,
	pub edge_width: f64,
	/// `r, g, b` of the neuron fill; alpha follows activation.
	pub node_rgb: String,
	pub base_radius: f64,
	pub radius_gain: f64,
	pub base_alpha: f64,
	pub alpha_gain: f64,
}

impl Default for LayeredNetworkConfig {
	fn default() -> Self {
		let layer = |neurons, x_ratio| LayerSpec { neurons, x_ratio };
		Self {
			layers: vec![layer(4, 0.2), layer(6, 0.5), layer(4, 0.8)],
			drift: 0.05,
			edge_color: "rgba(100, 200, 255, 0.1)".into(),
			edge_width: 1.0,
			node_rgb: "100, 200, 255".into(),
			base_radius: 5.0,
			radius_gain: 10.0,
			base_alpha: 0.3,
			alpha_gain: 0.7,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillNetworkConfig {
	/// Ring radius as a fraction of the shorter canvas side.
	pub ring_ratio: f64,
	pub jitter_min: f64,
	pub jitter_max: f64,
	/// Per-axis initial velocity is drawn from `[-initial_speed, initial_speed)`.
	pub initial_speed: f64,
	/// Nodes closer than this to an edge bounce back.
	pub edge_margin: f64,
	/// Centering kicks in beyond this fraction of the shorter side.
	pub centering_ratio: f64,
	pub centering_strength: f64,
	pub max_speed: f64,
	pub base_radius: f64,
	pub radius_gain: f64,
	pub hit_tolerance: f64,
	pub halo_scale: f64,
	/// A node of level `L` gets `L / connection_divisor + 1` connections.
	pub connection_divisor: u8,
	pub edge_color: String,
}

impl Default for SkillNetworkConfig {
	fn default() -> Self {
		Self {
			ring_ratio: 0.35,
			jitter_min: 0.8,
			jitter_max: 1.2,
			initial_speed: 0.15,
			edge_margin: 50.0,
			centering_ratio: 0.4,
			centering_strength: 0.0005,
			max_speed: 2.0,
			base_radius: 5.0,
			radius_gain: 20.0,
			hit_tolerance: 5.0,
			halo_scale: 1.5,
			connection_divisor: 30,
			edge_color: "rgba(255, 255, 255, 0.1)".into(),
		}
	}
}

impl SkillNetworkConfig {
	/// Body radius of a node; grows monotonically with `level`.
	pub fn display_radius(&self, level: u8) -> f64 {
		self.base_radius + f64::from(level.min(100)) / 100.0 * self.radius_gain
	}

	pub fn connection_count(&self, level: u8) -> usize {
		usize::from(level / self.connection_divisor.max(1)) + 1
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HubSpoke {
	pub x_ratio: f64,
	pub y_ratio: f64,
	pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HubMapConfig {
	pub hub: (f64, f64),
	pub spokes: Vec<HubSpoke>,
	/// Chance per spoke per frame of drawing a bright pulse over its line.
	pub pulse_probability: f64,
	pub line_color: String,
	pub pulse_color: String,
	pub active_color: String,
	pub idle_color: String,
	pub ring_color: String,
	pub hub_radius: f64,
	pub spoke_radius: f64,
	pub ring_radius: f64,
	pub ring_amplitude: f64,
}

impl Default for HubSpoke {
	fn default() -> Self {
		Self {
			x_ratio: 0.5,
			y_ratio: 0.5,
			active: false,
		}
	}
}

impl Default for HubMapConfig {
	fn default() -> Self {
		let spoke = |x_ratio, y_ratio| HubSpoke {
			x_ratio,
			y_ratio,
			active: false,
		};
		Self {
			hub: (0.3, 0.4),
			spokes: vec![
				spoke(0.7, 0.3),
				spoke(0.8, 0.6),
				spoke(0.2, 0.7),
				spoke(0.5, 0.2),
				spoke(0.4, 0.8),
			],
			pulse_probability: 0.3,
			line_color: "rgba(0, 162, 255, 0.2)".into(),
			pulse_color: "rgba(0, 162, 255, 0.6)".into(),
			active_color: "#00a2ff".into(),
			idle_color: "rgba(0, 162, 255, 0.5)".into(),
			ring_color: "rgba(0, 162, 255, 0.3)".into(),
			hub_radius: 8.0,
			spoke_radius: 4.0,
			ring_radius: 12.0,
			ring_amplitude: 3.0,
		}
	}
}

/// Everything needed to build one canvas. Changing it tears the running
/// animation down and starts a fresh one.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneConfig {
	ParticleField(ParticleFieldConfig),
	LayeredNetwork(LayeredNetworkConfig),
	SkillNetwork {
		config: SkillNetworkConfig,
		skills: Vec<SkillRecord>,
	},
	HubMap(HubMapConfig),
}

impl SceneConfig {
	pub fn name(&self) -> &'static str {
		match self {
			SceneConfig::ParticleField(_) => "particle-field",
			SceneConfig::LayeredNetwork(_) => "layered-network",
			SceneConfig::SkillNetwork { .. } => "skill-network",
			SceneConfig::HubMap(_) => "hub-map",
		}
	}
}

/// Parse JSON into a config struct or dataset. Config fields left out keep
/// their defaults.
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T, CanvasError> {
	Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_radius_is_monotonic() {
		let config = SkillNetworkConfig::default();
		assert_eq!(config.display_radius(0), 5.0);
		assert_eq!(config.display_radius(100), 25.0);
		assert_eq!(config.display_radius(200), 25.0);
		let radii: Vec<f64> = (0..=100).map(|l| config.display_radius(l)).collect();
		assert!(radii.windows(2).all(|w| w[0] <= w[1]));
	}

	#[test]
	fn connection_count_law() {
		let config = SkillNetworkConfig::default();
		assert_eq!(config.connection_count(0), 1);
		assert_eq!(config.connection_count(29), 1);
		assert_eq!(config.connection_count(30), 2);
		assert_eq!(config.connection_count(65), 3);
		assert_eq!(config.connection_count(100), 4);
	}

	#[test]
	fn partial_override_keeps_other_defaults() {
		let config: ParticleFieldConfig = from_json(r#"{"count": 12}"#).unwrap();
		assert_eq!(config.count, 12);
		assert_eq!(config.link_distance, 100.0);
	}

	#[test]
	fn layer_override() {
		let config: LayeredNetworkConfig =
			from_json(r#"{"layers": [{"neurons": 2, "x_ratio": 0.1}]}"#).unwrap();
		assert_eq!(config.layers.len(), 1);
		assert_eq!(config.layers[0].neurons, 2);
		assert_eq!(config.drift, 0.05);
	}

	#[test]
	fn malformed_json_is_reported() {
		let err = from_json::<HubMapConfig>("{").unwrap_err();
		assert!(matches!(err, CanvasError::InvalidConfig(_)));
	}
}
