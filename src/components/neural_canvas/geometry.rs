//! Small 2D helpers shared by layout, physics and hit-testing.

/// Drawable area of a canvas in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// True when nothing sensible can be laid out: a zero, negative or
	/// non-finite side.
	pub fn is_degenerate(&self) -> bool {
		!(self.width.is_finite() && self.height.is_finite())
			|| self.width <= 0.0
			|| self.height <= 0.0
	}

	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	pub fn min_side(&self) -> f64 {
		self.width.min(self.height)
	}
}

pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
	let (dx, dy) = (ax - bx, ay - by);
	(dx * dx + dy * dy).sqrt()
}

pub fn speed(vx: f64, vy: f64) -> f64 {
	(vx * vx + vy * vy).sqrt()
}

/// Rescale `(vx, vy)` to `max` when it is faster, keeping the direction.
pub fn clamp_speed(vx: f64, vy: f64, max: f64) -> (f64, f64) {
	let s = speed(vx, vy);
	if s > max && s > 0.0 {
		(vx / s * max, vy / s * max)
	} else {
		(vx, vy)
	}
}

/// Negate `velocity` when `position` lies outside `[lo, hi]`.
pub fn reflect(position: f64, velocity: f64, lo: f64, hi: f64) -> f64 {
	if position < lo || position > hi {
		-velocity
	} else {
		velocity
	}
}
