//! Analytics requests from the browser via `window.fetch`.
//!
//! Every failure (no window, network error, timeout, non-2xx, unreadable or
//! malformed body) comes back as a `FetchError`; callers log it and keep their
//! state. Requests are aborted once `ApiConfig::timeout` elapses, so a stalled
//! server never blocks the next refresh.

use agri_core::config::ApiConfig;
use agri_core::imagery::SatelliteImageRecord;
use agri_core::wire::CropAnalysisResponse;
use agri_core::FetchError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, RequestInit, Response, Window};

/// Service location, overridable at build time with `AGRI_API_BASE_URL`.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_override(option_env!("AGRI_API_BASE_URL"))
}

fn js_error(err: JsValue) -> FetchError {
    FetchError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Aborts its controller when the timeout fires. Cleared on drop.
struct AbortTimer {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl AbortTimer {
    fn start(
        window: &Window,
        controller: &AbortController,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let controller = controller.clone();
        let callback = Closure::<dyn FnMut()>::new(move || controller.abort());
        let millis = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(js_error)?;
        Ok(Self {
            window: window.clone(),
            handle,
            _callback: callback,
        })
    }
}

impl Drop for AbortTimer {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.handle);
    }
}

/// GET `url` and return the body as text, giving up after `timeout`.
pub async fn get_text(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("no window available".to_string()))?;
    let controller = AbortController::new().map_err(js_error)?;
    let init = RequestInit::new();
    init.set_signal(Some(&controller.signal()));

    // Held until the body is read; the abort also cancels a stalled body.
    let _timer = AbortTimer::start(&window, &controller, timeout)?;
    let timed_out = |err: JsValue| {
        if controller.signal().aborted() {
            FetchError::Network(format!("request timed out after {:?}", timeout))
        } else {
            js_error(err)
        }
    };

    let value = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(timed_out)?;
    let response: Response = value.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(timed_out)?;
    text.as_string()
        .ok_or_else(|| FetchError::Decode("response body is not text".to_string()))
}

/// GET `url` and decode the JSON body into `T`.
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    timeout: Duration,
) -> Result<T, FetchError> {
    let body = get_text(url, timeout).await?;
    Ok(serde_json::from_str(&body)?)
}

pub async fn crop_analysis(config: &ApiConfig) -> Result<CropAnalysisResponse, FetchError> {
    get_json(&config.crop_analysis_url(), config.timeout).await
}

pub async fn satellite_images(
    config: &ApiConfig,
) -> Result<Vec<SatelliteImageRecord>, FetchError> {
    get_json(&config.satellite_images_url(), config.timeout).await
}
