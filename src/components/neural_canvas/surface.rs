//! Drawing primitives the render pass needs, implemented for the browser's
//! 2D context. Tests swap in a recorder.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::geometry::Bounds;

pub type Point = (f64, f64);

pub trait Surface {
	/// Wipe the whole canvas; no trails are kept between frames.
	fn clear(&mut self, bounds: Bounds);
	fn line(&mut self, from: Point, to: Point, color: &str, width: f64);
	fn circle(&mut self, center: Point, radius: f64, fill: &str);
	fn ring(&mut self, center: Point, radius: f64, stroke: &str, width: f64);
	/// Radial glow from `color` at `inner` fading to transparent at `outer`.
	fn halo(&mut self, center: Point, inner: f64, outer: f64, color: &str);
	/// Text centred horizontally on `at`.
	fn label(&mut self, text: &str, at: Point, color: &str, font: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, bounds: Bounds) {
		self.clear_rect(0.0, 0.0, bounds.width, bounds.height);
	}

	fn line(&mut self, from: Point, to: Point, color: &str, width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn circle(&mut self, center: Point, radius: f64, fill: &str) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius.max(0.0), 0.0, 2.0 * PI);
		self.set_fill_style_str(fill);
		self.fill();
	}

	fn ring(&mut self, center: Point, radius: f64, stroke: &str, width: f64) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius.max(0.0), 0.0, 2.0 * PI);
		self.set_stroke_style_str(stroke);
		self.set_line_width(width);
		self.stroke();
	}

	fn halo(&mut self, center: Point, inner: f64, outer: f64, color: &str) {
		let Ok(gradient) =
			self.create_radial_gradient(center.0, center.1, inner, center.0, center.1, outer)
		else {
			return;
		};
		if gradient.add_color_stop(0.0, color).is_err()
			|| gradient.add_color_stop(1.0, "transparent").is_err()
		{
			return;
		}
		self.begin_path();
		let _ = self.arc(center.0, center.1, outer.max(0.0), 0.0, 2.0 * PI);
		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.fill();
	}

	fn label(&mut self, text: &str, at: Point, color: &str, font: &str) {
		self.set_font(font);
		self.set_fill_style_str(color);
		self.set_text_align("center");
		let _ = self.fill_text(text, at.0, at.1);
	}
}
