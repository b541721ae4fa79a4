//! Test doubles: a surface that records draw calls and a platform that
//! tracks scheduled frames and attached listeners.

use super::animation::Platform;
use super::error::CanvasError;
use super::geometry::Bounds;
use super::surface::{Point, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
	Clear(Bounds),
	Line { from: Point, to: Point, color: String, width: f64 },
	Circle { center: Point, radius: f64, fill: String },
	Ring { center: Point, radius: f64, stroke: String },
	Halo { center: Point, inner: f64, outer: f64, color: String },
	Label { text: String, at: Point },
}

#[derive(Default)]
pub struct RecordingSurface {
	pub commands: Vec<Command>,
}

impl RecordingSurface {
	pub fn count(&self, pred: impl Fn(&Command) -> bool) -> usize {
		self.commands.iter().filter(|c| pred(c)).count()
	}

	pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
		self.commands.iter().filter_map(|c| match c {
			Command::Line { from, to, .. } => Some((*from, *to)),
			_ => None,
		})
	}

	pub fn all_finite(&self) -> bool {
		let point = |p: &Point| p.0.is_finite() && p.1.is_finite();
		self.commands.iter().all(|c| match c {
			Command::Clear(b) => b.width.is_finite() && b.height.is_finite(),
			Command::Line { from, to, width, .. } => point(from) && point(to) && width.is_finite(),
			Command::Circle { center, radius, .. } | Command::Ring { center, radius, .. } => {
				point(center) && radius.is_finite()
			}
			Command::Halo { center, inner, outer, .. } => {
				point(center) && inner.is_finite() && outer.is_finite()
			}
			Command::Label { at, .. } => point(at),
		})
	}
}

impl Surface for RecordingSurface {
	fn clear(&mut self, bounds: Bounds) {
		self.commands.push(Command::Clear(bounds));
	}

	fn line(&mut self, from: Point, to: Point, color: &str, width: f64) {
		self.commands.push(Command::Line {
			from,
			to,
			color: color.into(),
			width,
		});
	}

	fn circle(&mut self, center: Point, radius: f64, fill: &str) {
		self.commands.push(Command::Circle {
			center,
			radius,
			fill: fill.into(),
		});
	}

	fn ring(&mut self, center: Point, radius: f64, stroke: &str, _width: f64) {
		self.commands.push(Command::Ring {
			center,
			radius,
			stroke: stroke.into(),
		});
	}

	fn halo(&mut self, center: Point, inner: f64, outer: f64, color: &str) {
		self.commands.push(Command::Halo {
			center,
			inner,
			outer,
			color: color.into(),
		});
	}

	fn label(&mut self, text: &str, at: Point, _color: &str, _font: &str) {
		self.commands.push(Command::Label {
			text: text.into(),
			at,
		});
	}
}

#[derive(Default)]
pub struct MockPlatform {
	pub requested: usize,
	pub pending: Vec<u32>,
	pub cancelled: Vec<u32>,
	pub listeners: usize,
	pub fail_attach: bool,
	next_handle: u32,
}

impl MockPlatform {
	/// A platform whose listener registration always fails.
	pub fn failing_attach() -> Self {
		Self {
			fail_attach: true,
			..Default::default()
		}
	}
}

impl Platform for MockPlatform {
	type FrameHandle = u32;

	fn request_frame(&mut self) -> Result<u32, CanvasError> {
		self.requested += 1;
		self.next_handle += 1;
		// A delivered frame is no longer pending once the next is requested.
		self.pending.clear();
		self.pending.push(self.next_handle);
		Ok(self.next_handle)
	}

	fn cancel_frame(&mut self, handle: u32) {
		self.pending.retain(|&h| h != handle);
		self.cancelled.push(handle);
	}

	fn attach_listeners(&mut self) -> Result<(), CanvasError> {
		if self.fail_attach {
			return Err(CanvasError::Js("listener rejected".into()));
		}
		self.listeners += 1;
		Ok(())
	}

	fn detach_listeners(&mut self) {
		self.listeners = self.listeners.saturating_sub(1);
	}
}
