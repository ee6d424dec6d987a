use std::sync::Arc;

use scalefind::audio::PlaybackMode;
use scalefind::{render_results_html, Catalog, ScaleError, ScaleView, SearchSession, Settings};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize, Debug, PartialEq)]
struct ErrorPayload {
    message: String,
    kind: &'static str,
}

fn error_payload(e: &ScaleError) -> ErrorPayload {
    ErrorPayload {
        message: e.to_string(),
        kind: e.kind(),
    }
}

fn to_js_error(e: ScaleError) -> JsValue {
    let payload = error_payload(&e);
    JsValue::from_str(&serde_json::to_string(&payload).unwrap_or(payload.message))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn parse_settings(settings_yaml: Option<String>) -> Result<Settings, ScaleError> {
    match settings_yaml {
        Some(yaml) => Settings::from_yaml(&yaml),
        None => Ok(Settings::default()),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Info).ok();

    log::info!("scalefind module initialized");
}

/// Query state and catalog behind the lookup page.
#[wasm_bindgen]
pub struct ScaleFinder {
    session: SearchSession,
    settings: Settings,
}

impl ScaleFinder {
    fn with_catalog(catalog: Arc<Catalog>, settings: Settings) -> Self {
        Self {
            session: SearchSession::with_settings(catalog, &settings),
            settings,
        }
    }
}

#[wasm_bindgen]
impl ScaleFinder {
    /// Build from a fetched catalog document.
    ///
    /// A document that fails to parse is logged and leaves the catalog empty, so
    /// every search shows "no matches". Invalid settings are an error.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str, settings_yaml: Option<String>) -> Result<ScaleFinder, JsValue> {
        let settings = parse_settings(settings_yaml).map_err(to_js_error)?;
        let catalog = Arc::new(Catalog::from_json_or_empty(catalog_json));
        Ok(Self::with_catalog(catalog, settings))
    }

    /// Build from the catalog bundled into the module.
    pub fn embedded(settings_yaml: Option<String>) -> Result<ScaleFinder, JsValue> {
        Self::new(scalefind_catalog::default_catalog_json(), settings_yaml)
    }

    /// Number of scales in the catalog, for the header counter.
    #[wasm_bindgen(js_name = scaleCount)]
    pub fn scale_count(&self) -> usize {
        self.session.catalog().len()
    }

    /// Search box input. Returns the new view.
    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.session.set_query(text);
        self.view()
    }

    /// Sort selector change. Unknown values sort by name.
    #[wasm_bindgen(js_name = setSort)]
    pub fn set_sort(&mut self, method: &str) -> Result<JsValue, JsValue> {
        self.session.set_sort_name(method);
        self.view()
    }

    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&mut self) -> bool {
        self.session.next_page()
    }

    #[wasm_bindgen(js_name = prevPage)]
    pub fn prev_page(&mut self) -> bool {
        self.session.prev_page()
    }

    /// Related-scale click. Returns `false` when the name does not resolve.
    #[wasm_bindgen(js_name = followRelated)]
    pub fn follow_related(&mut self, name: &str) -> bool {
        self.session.follow_related(name)
    }

    /// Current query text, to write back into the search box after a click-through.
    pub fn query(&self) -> String {
        self.session.query().to_string()
    }

    /// Snapshot of the query state: outcome, page, indicator, button states, names.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.view())
    }

    /// Results pane HTML for the current page.
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self) -> String {
        render_results_html(&self.session)
    }

    /// Display model for one scale, or `undefined` if it is not in the catalog.
    #[wasm_bindgen(js_name = scaleDetails)]
    pub fn scale_details(&self, name: &str) -> Result<JsValue, JsValue> {
        match ScaleView::new(self.session.catalog(), name) {
            Some(view) => to_js(&view),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Tone schedule for the play button.
    ///
    /// `mode` is `"arpeggio"` or `"chord"`; `base_frequency` is the raw text of the
    /// base-frequency field.
    pub fn playback(
        &self,
        name: &str,
        mode: &str,
        base_frequency: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let data = scalefind::preview(
            self.session.catalog(),
            name,
            PlaybackMode::from_name(mode),
            base_frequency.as_deref(),
            &self.settings,
        )
        .map_err(to_js_error)?;
        to_js(&data)
    }
}
