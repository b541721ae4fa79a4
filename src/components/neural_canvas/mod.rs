//! Canvas animation engine: ambient particle field, layered decorative
//! network, interactive skill network and hub map, all driven by one
//! lifecycle controller.

pub mod animation;
mod component;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod physics;
mod platform;
pub mod render;
pub mod state;
pub mod surface;
#[cfg(test)]
mod testing;
pub mod types;

pub use component::NeuralCanvas;
pub use config::{
	HubMapConfig, LayeredNetworkConfig, ParticleFieldConfig, SceneConfig, SkillNetworkConfig,
};
pub use types::{SkillCategory, SkillRecord, proficiency_label};
