//! Search-index adapter.

use async_trait::async_trait;
use opensearch::auth::Credentials;
use opensearch::cert::CertificateValidation;
use opensearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use opensearch::{IndexParts, OpenSearch, SearchParts};
use pulsecheck_core::{DocumentStore, SinkError};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

/// Search-index sink.
///
/// Documents are schemaless JSON keyed by store-assigned identifiers; the
/// agent only ever appends. The deployment fronts the store with a
/// self-signed certificate, so certificate validation is disabled, matching
/// the original deployment's client settings.
pub struct IndexSink {
    client: OpenSearch,
}

impl IndexSink {
    /// Builds a client for a single node with basic-auth credentials.
    ///
    /// Construction does not touch the network; call [`IndexSink::ping`]
    /// to verify liveness.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparseable host URL or a transport that
    /// cannot be built.
    pub fn connect(host: &str, username: &str, password: &str) -> Result<Self, crate::ConnectError> {
        let url = url::Url::parse(host)?;
        let pool = SingleNodeConnectionPool::new(url);
        let transport = TransportBuilder::new(pool)
            .auth(Credentials::Basic(username.to_string(), password.to_string()))
            .cert_validation(CertificateValidation::None)
            .build()?;

        info!(host = %host, "Search-index client ready");

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }

    /// Fetches the newest documents from a collection.
    ///
    /// Returns each hit's source document with the store-assigned `_id`
    /// spliced in, newest-first as the store returns them.
    ///
    /// # Errors
    ///
    /// Propagates request failures and non-success responses.
    pub async fn recent(
        &self,
        collection: &str,
        size: usize,
    ) -> Result<Vec<Value>, crate::ConnectError> {
        let response = self
            .client
            .search(SearchParts::Index(&[collection]))
            .size(size as i64)
            .body(json!({ "query": { "match_all": {} } }))
            .send()
            .await?;

        let body = response.json::<Value>().await?;
        let hits = body["hits"]["hits"].as_array().cloned().unwrap_or_default();

        let documents = hits
            .into_iter()
            .map(|hit| {
                let mut source = hit["_source"].clone();
                if let (Some(object), Some(id)) = (source.as_object_mut(), hit["_id"].as_str()) {
                    object.insert("_id".to_string(), Value::String(id.to_string()));
                }
                source
            })
            .collect();

        Ok(documents)
    }
}

#[async_trait]
impl DocumentStore for IndexSink {
    async fn write(&self, collection: &str, document: &Value) -> Result<(), SinkError> {
        let response = self
            .client
            .index(IndexParts::Index(collection))
            .body(document)
            .send()
            .await
            .map_err(|error| SinkError::Index(error.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            debug!(collection = %collection, "Indexed document");
            Ok(())
        } else {
            Err(SinkError::Index(format!(
                "index request returned {status}"
            )))
        }
    }

    async fn ping(&self) -> bool {
        match self.client.ping().send().await {
            Ok(response) => response.status_code().is_success(),
            Err(error) => {
                warn!(error = %error, "Search-index ping failed");
                false
            }
        }
    }
}
