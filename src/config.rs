const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Resuelve la configuración del entorno de ejecución (variables o página web).
    pub fn from_env() -> Self {
        Self {
            api_key: api_key_from_env(),
            model: model_from_env().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url_from_env().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn api_key_from_env() -> Option<String> {
    ["GEMINI_API_KEY", "API_KEY"]
        .iter()
        .find_map(|var| std::env::var(var).ok().as_deref().and_then(normalize))
}

#[cfg(not(target_arch = "wasm32"))]
fn model_from_env() -> Option<String> {
    std::env::var("STUDY_ONE_MODEL")
        .ok()
        .as_deref()
        .and_then(normalize)
}

#[cfg(not(target_arch = "wasm32"))]
fn base_url_from_env() -> Option<String> {
    std::env::var("STUDY_ONE_API_BASE")
        .ok()
        .as_deref()
        .and_then(normalize)
}

// En la web: variable de compilación, querystring, <meta> y localStorage, en ese orden.
#[cfg(target_arch = "wasm32")]
fn api_key_from_env() -> Option<String> {
    option_env!("GEMINI_API_KEY")
        .and_then(normalize)
        .or_else(|| from_querystring("api_key"))
        .or_else(|| from_meta("study-one-api-key"))
        .or_else(|| from_local_storage("study_one_api_key"))
}

#[cfg(target_arch = "wasm32")]
fn model_from_env() -> Option<String> {
    option_env!("STUDY_ONE_MODEL")
        .and_then(normalize)
        .or_else(|| from_querystring("model"))
        .or_else(|| from_meta("study-one-model"))
}

#[cfg(target_arch = "wasm32")]
fn base_url_from_env() -> Option<String> {
    option_env!("STUDY_ONE_API_BASE")
        .and_then(normalize)
        .or_else(|| from_meta("study-one-api-base"))
}

#[cfg(target_arch = "wasm32")]
fn from_querystring(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };

        if key == name {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            let decoded = decoded.as_string()?;
            return normalize(&decoded);
        }
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn from_meta(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let meta = document
        .query_selector(&format!("meta[name='{name}']"))
        .ok()??;

    meta.get_attribute("content").as_deref().and_then(normalize)
}

#[cfg(target_arch = "wasm32")]
fn from_local_storage(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?.as_deref().and_then(normalize)
}
