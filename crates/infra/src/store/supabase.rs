//! PostgREST-backed lead repository
//!
//! Inserts one row per lead into the appointments table through the
//! Supabase REST endpoint using the service-role key.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use rhai_core::LeadRepository;
use rhai_domain::{LeadRecord, NewLead, Result, RhaiError, StoreConfig};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Row returned by `?select=id`.
#[derive(Debug, Deserialize)]
struct InsertedRow {
    id: Value,
}

/// Lead repository writing to a Supabase (PostgREST) table
pub struct SupabaseLeadRepository {
    http_client: HttpClient,
    endpoint: Url,
    headers: HeaderMap,
}

impl SupabaseLeadRepository {
    /// Create a repository for the configured project and table
    ///
    /// # Errors
    /// `RhaiError::Config` when the URL or key can't be used in a request.
    pub fn new(config: &StoreConfig, http_client: HttpClient) -> Result<Self> {
        let base = Url::parse(config.url.trim_end_matches('/')).map_err(InfraError::from)?;
        let mut endpoint = base
            .join(&format!("rest/v1/{}", config.table))
            .map_err(InfraError::from)?;
        endpoint.query_pairs_mut().append_pair("select", "id");

        let key = config.service_role_key.trim();
        let invalid_key = |_| RhaiError::Config("Service role key is not a valid header".into());
        let mut headers = HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(key).map_err(invalid_key)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {key}")).map_err(invalid_key)?,
        );
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self { http_client, endpoint, headers })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LeadRepository for SupabaseLeadRepository {
    async fn insert_lead(&self, lead: &NewLead) -> Result<String> {
        let rows = [LeadRecord::from(lead)];
        let request = self
            .http_client
            .request(Method::POST, self.endpoint.clone())
            .headers(self.headers.clone())
            .json(&rows);

        let response = self.http_client.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "Lead insert rejected by store");
            return Err(RhaiError::Storage(format!("Insert failed with HTTP {}", status.as_u16())));
        }

        let inserted: Vec<InsertedRow> =
            response.json().await.map_err(|err| RhaiError::from(InfraError::from(err)))?;
        let row = inserted
            .into_iter()
            .next()
            .ok_or_else(|| RhaiError::Storage("Insert returned no rows".into()))?;

        let id = match row.id {
            Value::String(id) => id,
            Value::Null => return Err(RhaiError::Storage("Insert returned a null id".into())),
            other => other.to_string(),
        };
        debug!(%id, "Lead row inserted");
        Ok(id)
    }
}
