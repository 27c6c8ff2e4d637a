use anyhow::Context;
use axum::async_trait;
use serde_json::Value;

/// Hosted record store, reached over its REST data API. Filters use the
/// store's `column=op.value` query syntax (`eq.`, `gte.`, `lte.`), so callers
/// pass the operator as part of the value.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, table: &str, row: Value) -> anyhow::Result<()>;

    async fn select(
        &self,
        table: &str,
        filters: &[(&str, String)],
        order: Option<&str>,
    ) -> anyhow::Result<Vec<Value>>;

    /// Insert-or-update keyed on `on_conflict` column.
    async fn upsert(&self, table: &str, on_conflict: &str, row: Value) -> anyhow::Result<()>;
}

/// PostgREST-style client, one table endpoint per logical table, service
/// credential in both `apikey` and bearer headers.
#[derive(Clone)]
pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl RestStore {
    pub fn new(http: reqwest::Client, base_url: &str, service_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        }
    }

    fn request(&self, method: reqwest::Method, table: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}/rest/v1/{}", self.base_url, table))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn insert(&self, table: &str, row: Value) -> anyhow::Result<()> {
        let response = self
            .request(reqwest::Method::POST, table)
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await
            .with_context(|| format!("insert into {}", table))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!("insert into {} failed with {}: {}", table, status, detail);
        }
        Ok(())
    }

    async fn select(
        &self,
        table: &str,
        filters: &[(&str, String)],
        order: Option<&str>,
    ) -> anyhow::Result<Vec<Value>> {
        let mut request = self
            .request(reqwest::Method::GET, table)
            .query(&[("select", "*")])
            .query(filters);
        if let Some(order) = order {
            request = request.query(&[("order", order)]);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("select from {}", table))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!("select from {} failed with {}: {}", table, status, detail);
        }

        response
            .json::<Vec<Value>>()
            .await
            .with_context(|| format!("decode rows from {}", table))
    }

    async fn upsert(&self, table: &str, on_conflict: &str, row: Value) -> anyhow::Result<()> {
        let response = self
            .request(reqwest::Method::POST, table)
            .query(&[("on_conflict", on_conflict)])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&row)
            .send()
            .await
            .with_context(|| format!("upsert into {}", table))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!("upsert into {} failed with {}: {}", table, status, detail);
        }
        Ok(())
    }
}
