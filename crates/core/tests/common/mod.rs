//! Scripted in-process page backend for pipeline tests.
//!
//! Dispatches on distinctive fragments of each collection snippet so tests
//! run the real orchestrator against canned snapshots, with no browser.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};

use dsx::page::{ColorScheme, PageError, RenderablePage, Viewport};

pub struct MockPage {
	pub final_url: String,
	pub nav_results: Mutex<VecDeque<Result<String, PageError>>>,
	pub text_len: u64,
	pub colors: Value,
	pub dark_colors: Option<Value>,
	pub mobile_colors: Option<Value>,
	pub typography: Value,
	pub metrics: Value,
	pub components: Value,
	pub dark_components: Option<Value>,
	pub signals: Value,
	pub canvas: Value,
	pub assets: Value,
	pub hover: Value,
	dark: AtomicBool,
	mobile: AtomicBool,
	pub waits: Mutex<Vec<u64>>,
	pub navigations: Mutex<Vec<String>>,
}

pub fn empty_colors(total_visible: u32) -> Value {
	json!({ "totalVisible": total_visible, "elements": [], "cssVariables": [] })
}

pub fn color_elements(total_visible: u32, elements: Vec<Value>) -> Value {
	json!({ "totalVisible": total_visible, "elements": elements, "cssVariables": [] })
}

pub fn element(class_id: &str, background: &str, foreground: &str) -> Value {
	json!({ "classId": class_id, "background": background, "foreground": foreground })
}

impl MockPage {
	pub fn new(final_url: &str) -> Self {
		Self {
			final_url: final_url.to_string(),
			nav_results: Mutex::new(VecDeque::new()),
			text_len: 2000,
			colors: empty_colors(100),
			dark_colors: None,
			mobile_colors: None,
			typography: json!({ "records": [], "sources": [] }),
			metrics: json!({ "spacing": {}, "radius": {}, "shadows": {} }),
			components: json!({ "buttons": [], "inputs": [], "links": [] }),
			dark_components: None,
			signals: json!({ "mediaTexts": [], "stylesheetHrefs": [], "classSample": "", "headSample": "" }),
			canvas: json!({ "canvasCount": 0, "hasWebgl": false, "textChars": 2000 }),
			assets: json!({ "logo": null, "favicons": [] }),
			hover: json!([]),
			dark: AtomicBool::new(false),
			mobile: AtomicBool::new(false),
			waits: Mutex::new(Vec::new()),
			navigations: Mutex::new(Vec::new()),
		}
	}

	pub fn script_navigation(&self, results: Vec<Result<String, PageError>>) {
		*self.nav_results.lock().unwrap() = results.into();
	}

	pub fn navigation_count(&self) -> usize {
		self.navigations.lock().unwrap().len()
	}

	pub fn recorded_waits(&self) -> Vec<u64> {
		self.waits.lock().unwrap().clone()
	}
}

#[async_trait]
impl RenderablePage for MockPage {
	async fn navigate(&self, url: &str, _timeout_ms: u64) -> Result<String, PageError> {
		self.navigations.lock().unwrap().push(url.to_string());
		match self.nav_results.lock().unwrap().pop_front() {
			Some(result) => result,
			None => Ok(self.final_url.clone()),
		}
	}

	async fn evaluate(&self, expression: &str) -> Result<Value, PageError> {
		if expression.contains("innerText.length") {
			return Ok(json!(self.text_len));
		}
		if expression.contains("data-theme") {
			self.dark.store(true, Ordering::SeqCst);
			return Ok(json!(true));
		}
		if expression.contains("totalVisible") {
			if self.mobile.load(Ordering::SeqCst) {
				if let Some(v) = &self.mobile_colors {
					return Ok(v.clone());
				}
			}
			if self.dark.load(Ordering::SeqCst) {
				if let Some(v) = &self.dark_colors {
					return Ok(v.clone());
				}
			}
			return Ok(self.colors.clone());
		}
		if expression.contains("fontHosts") {
			return Ok(self.typography.clone());
		}
		if expression.contains("rowGap") {
			return Ok(self.metrics.clone());
		}
		if expression.contains("buttonSel") {
			if self.dark.load(Ordering::SeqCst) {
				if let Some(v) = &self.dark_components {
					return Ok(v.clone());
				}
			}
			return Ok(self.components.clone());
		}
		if expression.contains("mediaTexts") {
			return Ok(self.signals.clone());
		}
		if expression.contains("canvasCount") {
			return Ok(self.canvas.clone());
		}
		if expression.contains("favicons") {
			return Ok(self.assets.clone());
		}
		if expression.contains("selectorText") {
			return Ok(self.hover.clone());
		}
		Err(PageError::Evaluation(format!("unscripted expression: {}", &expression[..40.min(expression.len())])))
	}

	async fn wait_for_selector(&self, _selector: &str, _timeout_ms: u64) -> Result<(), PageError> {
		Ok(())
	}

	async fn wait_for_timeout(&self, ms: u64) {
		self.waits.lock().unwrap().push(ms);
	}

	async fn set_viewport(&self, viewport: Viewport) -> Result<(), PageError> {
		if viewport == Viewport::MOBILE {
			self.mobile.store(true, Ordering::SeqCst);
		}
		Ok(())
	}

	async fn emulate_color_scheme(&self, scheme: ColorScheme) -> Result<(), PageError> {
		if scheme == ColorScheme::Dark {
			self.dark.store(true, Ordering::SeqCst);
		}
		Ok(())
	}

	async fn simulate_pointer_move(&self, _x: f64, _y: f64) -> Result<(), PageError> {
		Ok(())
	}

	async fn simulate_scroll(&self, _delta_y: f64) -> Result<(), PageError> {
		Ok(())
	}
}
