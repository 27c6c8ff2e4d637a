use crate::config::AppConfig;
use crate::store::{RecordStore, RestStore};
use crate::vision::{OpenAiVision, VisionModel};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// `None` until a vision credential is configured.
    pub vision: Option<Arc<dyn VisionModel>>,
    /// `None` until the record store is configured.
    pub store: Option<Arc<dyn RecordStore>>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let http = reqwest::Client::new();

        let vision = config.vision.api_key.as_ref().map(|api_key| {
            Arc::new(OpenAiVision::new(
                http.clone(),
                &config.vision.base_url,
                &config.vision.model,
                api_key,
            )) as Arc<dyn VisionModel>
        });

        let store = config.store.as_ref().map(|store| {
            Arc::new(RestStore::new(http.clone(), &store.url, &store.service_key))
                as Arc<dyn RecordStore>
        });

        Ok(Self {
            config,
            vision,
            store,
        })
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        vision: Option<Arc<dyn VisionModel>>,
        store: Option<Arc<dyn RecordStore>>,
    ) -> Self {
        Self {
            config,
            vision,
            store,
        }
    }

    pub fn fake() -> Self {
        use crate::error::Result;
        use crate::vision::VisionPrompt;
        use axum::async_trait;
        use serde_json::Value;

        struct FakeVision;
        #[async_trait]
        impl VisionModel for FakeVision {
            async fn complete(&self, _prompt: VisionPrompt<'_>) -> Result<String> {
                Ok(r#"{"foodName":"Test Meal","calories":100,"protein":10,"carbs":10,"fats":5,"fiber":2,"servingSize":"1 plate","confidence":90,"breakdown":[]}"#.to_string())
            }
        }

        struct FakeStore;
        #[async_trait]
        impl RecordStore for FakeStore {
            async fn insert(&self, _table: &str, _row: Value) -> anyhow::Result<()> {
                Ok(())
            }
            async fn select(
                &self,
                _table: &str,
                _filters: &[(&str, String)],
                _order: Option<&str>,
            ) -> anyhow::Result<Vec<Value>> {
                Ok(Vec::new())
            }
            async fn upsert(&self, _table: &str, _on_conflict: &str, _row: Value) -> anyhow::Result<()> {
                Ok(())
            }
        }

        let config = Arc::new(AppConfig {
            vision: crate::config::VisionConfig {
                api_key: Some("test".into()),
                base_url: "https://fake.local/v1".into(),
                model: "fake-vision".into(),
            },
            store: Some(crate::config::StoreConfig {
                url: "https://fake.local".into(),
                service_key: "test".into(),
            }),
        });

        Self {
            config,
            vision: Some(Arc::new(FakeVision) as Arc<dyn VisionModel>),
            store: Some(Arc::new(FakeStore) as Arc<dyn RecordStore>),
        }
    }
}
