//! Failure modes at the browser boundary.
//!
//! None of these ever reach the user: the component logs them and the canvas
//! simply draws nothing.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum CanvasError {
	#[error("no global window available")]
	NoWindow,
	#[error("canvas did not yield a 2d drawing context")]
	ContextUnavailable,
	#[error("javascript error: {0}")]
	Js(String),
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

impl From<JsValue> for CanvasError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

impl From<serde_json::Error> for CanvasError {
	fn from(err: serde_json::Error) -> Self {
		Self::InvalidConfig(err.to_string())
	}
}
