//! Domain records fed into the canvases and the entities the engine animates.

use serde::{Deserialize, Deserializer};

/// Skill families shown in the network. Anything the palette does not know
/// deserializes to [`SkillCategory::Other`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillCategory {
	Programming,
	MlAi,
	DataEngineering,
	Databases,
	CloudMlops,
	Visualization,
	MathStats,
	#[default]
	#[serde(other)]
	Other,
}

impl SkillCategory {
	pub const ALL: [SkillCategory; 8] = [
		SkillCategory::Programming,
		SkillCategory::MlAi,
		SkillCategory::DataEngineering,
		SkillCategory::Databases,
		SkillCategory::CloudMlops,
		SkillCategory::Visualization,
		SkillCategory::MathStats,
		SkillCategory::Other,
	];

	/// Node fill color. `Other` is the documented gray fallback.
	pub fn color(self) -> &'static str {
		match self {
			SkillCategory::Programming => "#3b82f6",
			SkillCategory::MlAi => "#8b5cf6",
			SkillCategory::DataEngineering => "#10b981",
			SkillCategory::Databases => "#f59e0b",
			SkillCategory::CloudMlops => "#6366f1",
			SkillCategory::Visualization => "#ef4444",
			SkillCategory::MathStats => "#06b6d4",
			SkillCategory::Other => "#888888",
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			SkillCategory::Programming => "Programming Languages",
			SkillCategory::MlAi => "Machine Learning & AI",
			SkillCategory::DataEngineering => "Data Engineering",
			SkillCategory::Databases => "Databases",
			SkillCategory::CloudMlops => "Cloud & MLOps",
			SkillCategory::Visualization => "Visualization & BI",
			SkillCategory::MathStats => "Maths & Statistics",
			SkillCategory::Other => "Other",
		}
	}
}

/// One entry of the skills dataset. Names are expected to be unique.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillRecord {
	pub name: String,
	/// Proficiency, 0 to 100. Larger values are capped at 100.
	#[serde(deserialize_with = "capped_level")]
	pub level: u8,
	#[serde(default)]
	pub category: SkillCategory,
	#[serde(default)]
	pub description: Option<String>,
}

impl SkillRecord {
	pub fn new(name: impl Into<String>, level: u8, category: SkillCategory) -> Self {
		Self {
			name: name.into(),
			level: level.min(100),
			category,
			description: None,
		}
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
}

fn capped_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
	Ok(u64::deserialize(deserializer)?.min(100) as u8)
}

/// Human-readable proficiency tier for a 0-100 level.
pub fn proficiency_label(level: u8) -> &'static str {
	match level {
		90.. => "Expert",
		70..=89 => "Advanced",
		50..=69 => "Intermediate",
		_ => "Beginner",
	}
}

/// A drifting dot of the ambient field.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: String,
}

/// One column of the decorative network. Neuron `i` of the layer owns
/// `activations[i]`, always within `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
	pub x_ratio: f64,
	pub activations: Vec<f64>,
}

impl Layer {
	pub fn neurons(&self) -> usize {
		self.activations.len()
	}
}

/// A skill placed in the interactive network.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillNode {
	pub name: String,
	pub level: u8,
	pub category: SkillCategory,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Indices of target nodes; never the node itself, never repeated.
	pub connections: Vec<usize>,
}

impl SkillNode {
	pub fn color(&self) -> &'static str {
		self.category.color()
	}
}
