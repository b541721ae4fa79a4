//! Leptos client-side portfolio wiring: routes and the canvas engine behind
//! the animated backgrounds.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod data;
mod pages;

// Top-Level pages
use crate::pages::contact::Contact;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::skills::Skills;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the portfolio pages and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Neural Portfolio" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/skills") view=Skills />
				<Route path=path!("/contact") view=Contact />
			</Routes>
		</Router>
	}
}
