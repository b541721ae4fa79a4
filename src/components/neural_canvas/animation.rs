//! The per-canvas animation controller.
//!
//! Lifecycle is `Uninitialized -> Running -> TornDown`. While running, every
//! delivered frame steps the scene, renders it and asks the platform for the
//! next one. `stop()` cancels the pending frame and detaches listeners; after
//! it, frames and pointer events are ignored.

use std::fmt;

use log::{debug, warn};
use rand::Rng;

use super::error::CanvasError;
use super::geometry::Bounds;
use super::state::{Interaction, Scene};
use super::surface::Surface;
use super::types::SkillRecord;

/// Frame scheduling and listener registration provided by the host.
pub trait Platform {
	type FrameHandle: Copy + fmt::Debug;

	fn request_frame(&mut self) -> Result<Self::FrameHandle, CanvasError>;
	fn cancel_frame(&mut self, handle: Self::FrameHandle);
	fn attach_listeners(&mut self) -> Result<(), CanvasError>;
	/// Must be safe to call repeatedly.
	fn detach_listeners(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Uninitialized,
	Running,
	TornDown,
}

pub struct Animation<S, P: Platform, R> {
	scene: S,
	platform: P,
	rng: R,
	bounds: Bounds,
	interaction: Interaction,
	phase: Phase,
	laid_out: bool,
	next_frame: Option<P::FrameHandle>,
}

impl<S: Scene, P: Platform, R: Rng> Animation<S, P, R> {
	pub fn new(scene: S, platform: P, rng: R) -> Self {
		Self {
			scene,
			platform,
			rng,
			bounds: Bounds::default(),
			interaction: Interaction::default(),
			phase: Phase::Uninitialized,
			laid_out: false,
			next_frame: None,
		}
	}

	/// Attach listeners, lay the scene out and schedule the first frame.
	/// With a degenerate canvas the layout waits for a usable resize.
	pub fn start(&mut self, bounds: Bounds) -> Result<(), CanvasError> {
		if self.phase != Phase::Uninitialized {
			return Ok(());
		}
		self.bounds = bounds;
		if let Err(err) = self.platform.attach_listeners() {
			self.stop();
			return Err(err);
		}
		self.phase = Phase::Running;
		debug!("animation started at {}x{}", bounds.width, bounds.height);
		self.ensure_layout();
		self.schedule()
	}

	/// Run one frame. Does nothing unless running.
	pub fn frame<Sf: Surface + ?Sized>(&mut self, surface: &mut Sf) -> Result<(), CanvasError> {
		if self.phase != Phase::Running {
			return Ok(());
		}
		self.next_frame = None;
		if self.laid_out {
			self.scene.step(self.bounds, &mut self.rng);
			self.scene.render(self.bounds, &self.interaction, surface);
		}
		self.schedule()
	}

	/// Record the new canvas size. An existing layout is kept as is; a
	/// deferred one is generated once the size becomes usable.
	pub fn resize(&mut self, bounds: Bounds) {
		if self.phase == Phase::TornDown {
			return;
		}
		self.bounds = bounds;
		self.ensure_layout();
	}

	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		if self.phase == Phase::Running {
			self.interaction.hovered = self.scene.hit_test(x, y);
		}
	}

	pub fn pointer_left(&mut self) {
		if self.phase == Phase::Running {
			self.interaction.hovered = None;
		}
	}

	/// Record under the pointer, if any. A miss leaves selection alone.
	pub fn clicked(&mut self, x: f64, y: f64) -> Option<SkillRecord> {
		if self.phase != Phase::Running {
			return None;
		}
		let idx = self.scene.hit_test(x, y)?;
		self.scene.record(idx).cloned()
	}

	pub fn set_selected(&mut self, name: Option<String>) {
		self.interaction.selected = name;
	}

	/// Cancel the pending frame and detach listeners. Idempotent.
	pub fn stop(&mut self) {
		if self.phase == Phase::TornDown {
			return;
		}
		if let Some(handle) = self.next_frame.take() {
			self.platform.cancel_frame(handle);
		}
		self.platform.detach_listeners();
		self.phase = Phase::TornDown;
		debug!("animation torn down");
	}

	#[cfg(test)]
	pub fn phase(&self) -> Phase {
		self.phase
	}

	#[cfg(test)]
	pub fn is_laid_out(&self) -> bool {
		self.laid_out
	}

	#[cfg(test)]
	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	#[cfg(test)]
	pub fn interaction(&self) -> &Interaction {
		&self.interaction
	}

	#[cfg(test)]
	pub fn scene(&self) -> &S {
		&self.scene
	}

	#[cfg(test)]
	pub fn platform(&self) -> &P {
		&self.platform
	}

	fn ensure_layout(&mut self) {
		if self.laid_out {
			return;
		}
		if self.bounds.is_degenerate() {
			debug!("canvas has no area yet, deferring layout");
			return;
		}
		self.scene.layout(self.bounds, &mut self.rng);
		self.laid_out = true;
	}

	fn schedule(&mut self) -> Result<(), CanvasError> {
		match self.platform.request_frame() {
			Ok(handle) => {
				self.next_frame = Some(handle);
				Ok(())
			}
			Err(err) => {
				warn!("could not schedule animation frame: {err}");
				Err(err)
			}
		}
	}
}
