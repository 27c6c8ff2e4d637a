use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct VisionConfig {
    /// Absent credential is not a startup failure; the scan endpoints report
    /// it per-request instead.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub url: String,
    pub service_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub vision: VisionConfig,
    /// `None` when either the store URL or the service key is missing;
    /// persistence is then skipped silently.
    pub store: Option<StoreConfig>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let vision = VisionConfig {
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            model: std::env::var("OPENAI_VISION_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into()),
        };

        let store = match (
            std::env::var("RECORD_STORE_URL"),
            std::env::var("RECORD_STORE_SERVICE_KEY"),
        ) {
            (Ok(url), Ok(service_key)) if !url.is_empty() && !service_key.is_empty() => {
                Some(StoreConfig { url, service_key })
            }
            _ => None,
        };

        Ok(Self { vision, store })
    }
}
