use crate::client::gemini::{GenerateRequest, GenerateResponse};
use crate::config::ClientConfig;
use crate::error::{Result, StudyError};

fn api_key(config: &ClientConfig) -> Result<&str> {
    config.api_key.as_deref().ok_or(StudyError::MissingApiKey)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn post(config: &ClientConfig, payload: &GenerateRequest) -> Result<GenerateResponse> {
    let api_key = api_key(config)?;
    // Sin timeout: la generación puede tardar bastante
    let client = reqwest::blocking::Client::builder()
        .timeout(None::<std::time::Duration>)
        .build()?;

    let response = client
        .post(config.generate_url())
        .header("x-goog-api-key", api_key)
        .json(payload)
        .send()?;

    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        return Err(StudyError::Status {
            status: status.as_u16(),
            body: body.trim().to_string(),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

#[cfg(target_arch = "wasm32")]
pub async fn post(config: &ClientConfig, payload: &GenerateRequest) -> Result<GenerateResponse> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    fn js_err(err: JsValue) -> StudyError {
        StudyError::Browser(format!("{err:?}"))
    }

    let api_key = api_key(config)?;
    let payload_json = serde_json::to_string(payload)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload_json));

    let request = Request::new_with_str_and_init(&config.generate_url(), &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    request
        .headers()
        .set("x-goog-api-key", api_key)
        .map_err(js_err)?;

    let window =
        web_sys::window().ok_or_else(|| StudyError::Browser("no window in WASM context".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| StudyError::Browser("fetch did not return a Response".into()))?;

    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        return Err(StudyError::Status {
            status: response.status(),
            body: text.trim().to_string(),
        });
    }

    Ok(serde_json::from_str(&text)?)
}
