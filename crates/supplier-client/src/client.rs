//! REST client for the ledger gateway.
//!
//! Speaks the gateway's submission and query endpoints:
//! `POST /batches`, `GET /state?address=<prefix>`, `GET /state/<address>`,
//! and `GET /batch_statuses?id=<id>&wait=<seconds>`. Everything beyond
//! those endpoints (consensus, block production, the state store itself)
//! is the ledger's business.

use std::path::PathBuf;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use supplier_protocol::addressing::supplier_address;
use supplier_protocol::family;
use supplier_protocol::payload::SupplierPayload;
use supplier_protocol::record::SupplierRecord;

use crate::envelope::{build_batch_list, build_transaction};
use crate::errors::ClientError;
use crate::signing::Signer;

/// HTTP Basic auth credentials for gateways that require them.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Gateway base URL; a bare `host:port` is normalized to `http://`.
    pub base_url: String,
    /// Private key file for submitting operations. Read operations work
    /// without one.
    pub keyfile: Option<PathBuf>,
    /// Optional Basic auth credentials.
    pub auth: Option<BasicAuth>,
}

impl ClientConfig {
    /// Configuration for an unsigned (read-only) client.
    pub fn read_only(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            keyfile: None,
            auth: None,
        }
    }
}

/// Result of a batch submission.
#[derive(Debug, Clone)]
pub struct BatchSubmitResponse {
    /// Header signature of the submitted batch; usable as the id for
    /// `batch_statuses` polling.
    pub batch_id: String,
    /// Status link returned by the gateway, when present.
    pub link: Option<String>,
}

#[derive(Deserialize)]
struct StateEntry {
    data: String,
}

#[derive(Deserialize)]
struct StateListBody {
    data: Vec<StateEntry>,
}

#[derive(Deserialize)]
struct StateEntryBody {
    data: String,
}

#[derive(Deserialize)]
struct BatchStatusEntry {
    status: String,
}

#[derive(Deserialize)]
struct BatchStatusBody {
    data: Vec<BatchStatusEntry>,
}

#[derive(Deserialize)]
struct SubmitBody {
    link: Option<String>,
}

/// Client for building, signing, submitting, and querying supplier
/// transactions.
pub struct SupplierClient {
    base_url: String,
    http: Client,
    signer: Option<Signer>,
    auth: Option<BasicAuth>,
}

impl SupplierClient {
    /// Build a client from configuration. The key file, when configured,
    /// is read once here; each invocation constructs its own signer.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        let signer = match &config.keyfile {
            Some(path) => Some(Signer::from_key_file(path)?),
            None => None,
        };

        Ok(Self {
            base_url: normalize_base_url(&config.base_url),
            http,
            signer,
            auth: config.auth,
        })
    }

    fn signer(&self) -> Result<&Signer, ClientError> {
        self.signer.as_ref().ok_or(ClientError::SignerRequired)
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some(auth) => request.basic_auth(&auth.username, Some(&auth.password)),
            None => request,
        }
    }

    async fn get(&self, suffix: &str) -> Result<Response, ClientError> {
        let url = format!("{}/{suffix}", self.base_url);
        debug!(%url, "gateway GET");
        let response = self.with_auth(self.http.get(&url)).send().await?;
        Ok(response)
    }

    /// Submit a `create` operation for a new supplier.
    pub async fn create(
        &self,
        supplier_id: &str,
        short_id: &str,
        supplier_name: &str,
        password_hash: &str,
        supplier_url: &str,
    ) -> Result<BatchSubmitResponse, ClientError> {
        let payload = SupplierPayload::create(
            supplier_id,
            short_id,
            supplier_name,
            password_hash,
            supplier_url,
        );
        self.submit(&payload).await
    }

    /// Submit an `add-part` operation for an existing supplier.
    pub async fn add_part(
        &self,
        supplier_id: &str,
        part_id: &str,
    ) -> Result<BatchSubmitResponse, ClientError> {
        let payload = SupplierPayload::add_part(supplier_id, part_id);
        self.submit(&payload).await
    }

    async fn submit(&self, payload: &SupplierPayload) -> Result<BatchSubmitResponse, ClientError> {
        let signer = self.signer()?;
        let transaction = build_transaction(signer, payload)?;
        let batch_list = build_batch_list(signer, vec![transaction])?;
        let batch_id = batch_list.batches[0].header_signature.clone();

        let url = format!("{}/batches", self.base_url);
        debug!(%url, %batch_id, "submitting batch");
        let response = self
            .with_auth(self.http.post(&url))
            .header("Content-Type", "application/octet-stream")
            .body(batch_list.to_bytes()?)
            .send()
            .await?;
        let response = check_status(response, "batch submission")?;

        let body: SubmitBody = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        Ok(BatchSubmitResponse {
            batch_id,
            link: body.link,
        })
    }

    /// List every supplier record under the family namespace.
    pub async fn list_suppliers(&self) -> Result<Vec<SupplierRecord>, ClientError> {
        let prefix = family::namespace_prefix();
        let response = self.get(&format!("state?address={prefix}")).await?;
        let response = check_status(response, "supplier listing")?;

        let body: StateListBody = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        let mut records = Vec::with_capacity(body.data.len());
        for entry in body.data {
            let bytes = BASE64
                .decode(entry.data)
                .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
            let (_, record) = SupplierRecord::from_state_bytes(&bytes)?;
            records.push(record);
        }
        Ok(records)
    }

    /// Fetch the record for one supplier id.
    pub async fn retrieve_supplier(&self, supplier_id: &str) -> Result<SupplierRecord, ClientError> {
        let address = supplier_address(&family::namespace_prefix(), supplier_id);
        let response = self.get(&format!("state/{address}")).await?;
        if response.status().as_u16() == 404 {
            return Err(ClientError::NotFound(supplier_id.to_string()));
        }
        let response = check_status(response, "supplier retrieval")?;

        let body: StateEntryBody = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        let bytes = BASE64
            .decode(body.data)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        let (_, record) = SupplierRecord::from_state_bytes(&bytes)?;
        Ok(record)
    }

    /// Poll the status of a submitted batch, letting the gateway hold the
    /// request up to `wait_secs`.
    pub async fn batch_status(
        &self,
        batch_id: &str,
        wait_secs: u32,
    ) -> Result<String, ClientError> {
        let response = self
            .get(&format!("batch_statuses?id={batch_id}&wait={wait_secs}"))
            .await?;
        let response = check_status(response, "batch status")?;

        let body: BatchStatusBody = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        body.data
            .into_iter()
            .next()
            .map(|entry| entry.status)
            .ok_or_else(|| ClientError::InvalidResponse("empty batch status data".to_string()))
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

fn check_status(response: Response, context: &str) -> Result<Response, ClientError> {
    let status = response.status();
    if status.as_u16() == 404 {
        return Err(ClientError::NotFound(context.to_string()));
    }
    if !status.is_success() {
        return Err(ClientError::Rest {
            status: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        });
    }
    Ok(response)
}
