use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::animation::Animation;
use super::config::SceneConfig;
use super::error::CanvasError;
use super::platform::{self, FrameCallback, WebPlatform};
use super::state::AnyScene;
use super::types::SkillRecord;

type Controller = Animation<AnyScene, WebPlatform, SmallRng>;
type SharedController = Rc<RefCell<Option<Controller>>>;

/// An animated canvas running one scene.
///
/// The scene is rebuilt whenever `scene` changes. For the skill network,
/// clicks on a node call `on_select` with its record, and the node matching
/// `selected` is outlined.
#[component]
pub fn NeuralCanvas(
	#[prop(into)] scene: Signal<SceneConfig>,
	#[prop(optional, into)] selected: Option<Signal<Option<SkillRecord>>>,
	#[prop(optional)] on_select: Option<Callback<SkillRecord>>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = "neural-canvas")] class: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let controller: SharedController = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let (controller_init, animate_init) = (controller.clone(), animate.clone());

	Effect::new(move |_| {
		let config = scene.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		teardown(&controller_init, &animate_init);

		let selected_name = selected.and_then(|s| s.get_untracked()).map(|r| r.name);
		if let Err(err) = mount(
			canvas,
			config,
			fullscreen,
			selected_name,
			&controller_init,
			&animate_init,
		) {
			warn!("neural-canvas: {err}; drawing nothing");
			teardown(&controller_init, &animate_init);
		}
	});

	if let Some(selected) = selected {
		let controller_sel = controller.clone();
		Effect::new(move |_| {
			let name = selected.get().map(|r| r.name);
			if let Some(ref mut c) = *controller_sel.borrow_mut() {
				c.set_selected(name);
			}
		});
	}

	let cleanup = SendWrapper::new((controller.clone(), animate.clone()));
	on_cleanup(move || {
		let (controller, animate) = cleanup.take();
		teardown(&controller, &animate);
	});

	let controller_mm = controller.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *controller_mm.borrow_mut() {
			c.pointer_moved(x, y);
		}
	};

	let controller_ml = controller.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *controller_ml.borrow_mut() {
			c.pointer_left();
		}
	};

	let controller_click = controller.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		let hit = controller_click
			.borrow_mut()
			.as_mut()
			.and_then(|c| c.clicked(x, y));
		if let (Some(record), Some(on_select)) = (hit, on_select) {
			debug!("neural-canvas: selected {}", record.name);
			on_select.run(record);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class=class
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:click=on_click
			style="display: block; width: 100%; height: 100%;"
		/>
	}
}

fn mount(
	canvas: HtmlCanvasElement,
	config: SceneConfig,
	fullscreen: bool,
	selected: Option<String>,
	controller: &SharedController,
	animate: &FrameCallback,
) -> Result<(), CanvasError> {
	let window = platform::window()?;
	let mut ctx = platform::context_2d(&canvas)?;
	let bounds = platform::measure(&window, &canvas, fullscreen);
	platform::apply_size(&canvas, bounds);
	debug!("neural-canvas: mounting {}", config.name());

	let (controller_resize, window_resize) = (controller.clone(), window.clone());
	let on_resize = Closure::new(move || {
		let bounds = platform::measure(&window_resize, &canvas, fullscreen);
		platform::apply_size(&canvas, bounds);
		if let Some(ref mut c) = *controller_resize.borrow_mut() {
			c.resize(bounds);
		}
	});

	let mut animation = Animation::new(
		AnyScene::from(config),
		WebPlatform::new(window, animate.clone(), on_resize),
		platform::entropy_rng(),
	);
	animation.set_selected(selected);

	let controller_anim = controller.clone();
	*animate.borrow_mut() = Some(Closure::new(move || {
		if let Some(ref mut c) = *controller_anim.borrow_mut() {
			if let Err(err) = c.frame(&mut ctx) {
				warn!("neural-canvas: frame failed: {err}");
			}
		}
	}));

	let started = animation.start(bounds);
	*controller.borrow_mut() = Some(animation);
	started
}

/// Stop the running animation, if any, and drop its frame closure.
fn teardown(controller: &SharedController, animate: &FrameCallback) {
	let previous = controller.borrow_mut().take();
	if let Some(mut c) = previous {
		c.stop();
	}
	animate.borrow_mut().take();
}

fn pointer_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
