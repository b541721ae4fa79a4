//! Browser implementation of [`Platform`]: `requestAnimationFrame` for
//! frames, a window `resize` listener for sizing.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::animation::Platform;
use super::error::CanvasError;
use super::geometry::Bounds;

/// The self-rescheduling frame closure, shared between the component (which
/// owns it) and the platform (which hands it to the browser).
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct WebPlatform {
	window: Window,
	animate: FrameCallback,
	on_resize: Closure<dyn FnMut()>,
	resize_attached: bool,
}

impl WebPlatform {
	pub fn new(window: Window, animate: FrameCallback, on_resize: Closure<dyn FnMut()>) -> Self {
		Self {
			window,
			animate,
			on_resize,
			resize_attached: false,
		}
	}
}

impl Platform for WebPlatform {
	type FrameHandle = i32;

	fn request_frame(&mut self) -> Result<i32, CanvasError> {
		let animate = self.animate.borrow();
		let callback = animate
			.as_ref()
			.ok_or_else(|| CanvasError::Js("frame callback not installed".into()))?;
		Ok(self
			.window
			.request_animation_frame(callback.as_ref().unchecked_ref())?)
	}

	fn cancel_frame(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}

	fn attach_listeners(&mut self) -> Result<(), CanvasError> {
		if !self.resize_attached {
			self.window
				.add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())?;
			self.resize_attached = true;
		}
		Ok(())
	}

	fn detach_listeners(&mut self) {
		if self.resize_attached {
			let _ = self.window.remove_event_listener_with_callback(
				"resize",
				self.on_resize.as_ref().unchecked_ref(),
			);
			self.resize_attached = false;
		}
	}
}

pub fn window() -> Result<Window, CanvasError> {
	web_sys::window().ok_or(CanvasError::NoWindow)
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")?
		.ok_or(CanvasError::ContextUnavailable)?
		.dyn_into()
		.map_err(|_| CanvasError::ContextUnavailable)
}

/// Size the canvas should take: the viewport when fullscreen, otherwise the
/// element's own client box.
pub fn measure(window: &Window, canvas: &HtmlCanvasElement, fullscreen: bool) -> Bounds {
	if fullscreen {
		let side = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		Bounds::new(side(window.inner_width()), side(window.inner_height()))
	} else {
		Bounds::new(canvas.client_width() as f64, canvas.client_height() as f64)
	}
}

/// Match the drawing buffer to `bounds`.
pub fn apply_size(canvas: &HtmlCanvasElement, bounds: Bounds) {
	canvas.set_width(bounds.width.max(0.0) as u32);
	canvas.set_height(bounds.height.max(0.0) as u32);
}

/// Unseeded generator for live canvases; tests seed their own.
pub fn entropy_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}
