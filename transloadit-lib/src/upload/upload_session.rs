use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use transloadit_proto::{
    dto::{AssemblyDto, AssemblyParamsDto, BoredInstanceDto},
    ApiRoute, BORED_SERVER_URL, DEFAULT_EXPIRATION_MINUTES, DEFAULT_UPLOAD_TIMEOUT_SECS,
};

use crate::{multipart::MultipartBody, signing, Result};

use super::UploadRequest;

static CLIENT: Lazy<Client> = Lazy::new(|| {
    reqwest::ClientBuilder::new()
        .build()
        .expect("Failed to create reqwest client")
});

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Bored server request failed: {0}")]
    Discovery(#[source] reqwest::Error),
    #[error("Bored server returned no usable worker host")]
    DiscoveryFailed,
    #[error("Unknown response status code: {0}")]
    Unknown(StatusCode),
}

/// Outcome of one upload call. `response` is None when the assembly endpoint
/// answered 200 with a body that was not valid JSON.
#[derive(Debug)]
pub struct Assembly {
    pub status: StatusCode,
    pub response: Option<AssemblyDto>,
}

impl Assembly {
    pub fn result_steps(&self) -> Option<Vec<&str>> {
        Some(self.response.as_ref()?.result_steps())
    }

    pub fn step_result(&self, step_name: &str) -> Option<&serde_json::Value> {
        self.response.as_ref()?.step_result(step_name)
    }
}

#[derive(Debug)]
pub struct UploadSession {
    api_key: String,
    secret_key: String,
    pub bored_url: String,
    pub timeout: Duration,
}

impl UploadSession {
    pub fn new(api_key: impl ToString, secret_key: impl ToString) -> Self {
        Self {
            api_key: api_key.to_string(),
            secret_key: secret_key.to_string(),
            bored_url: BORED_SERVER_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_UPLOAD_TIMEOUT_SECS),
        }
    }

    pub async fn upload(&self, request: &UploadRequest) -> Result<Assembly> {
        let host = self.discover_worker().await?;
        let target = ApiRoute::Assemblies.target(&host);
        log::debug!("assembly target: {}", target);

        let expires_at =
            chrono::Utc::now() + chrono::Duration::minutes(DEFAULT_EXPIRATION_MINUTES);
        let params = AssemblyParamsDto::blocking(&request.template_id, &self.api_key, expires_at);
        let params_json = serde_json::to_string(&params)?;
        // The signature must cover the same bytes the params part carries.
        let signature = signing::sign(&self.secret_key, params_json.as_bytes());

        let mut body = MultipartBody::new();
        body.append_field("params", &params_json);
        body.append_field("signature", &signature);
        for (name, value) in &request.fields {
            body.append_field(name, value);
        }
        body.append_file(&request.file_name, &request.file_data);

        let content_type = body.content_type();
        let body = body.finish();

        let response = CLIENT
            .post(&target)
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CONTENT_LENGTH, body.len())
            .timeout(self.timeout)
            .body(body)
            .send()
            .await?;
        let status = response.status();
        match status {
            // 200
            StatusCode::OK => {}
            _ => {
                return Err(UploadError::Unknown(status).into());
            }
        }

        let raw = response.bytes().await?;
        let dto = match serde_json::from_slice::<AssemblyDto>(&raw) {
            Ok(dto) => Some(dto),
            Err(e) => {
                log::error!("Failed to parse assembly response: {}", e);
                None
            }
        };

        Ok(Assembly {
            status,
            response: dto,
        })
    }

    async fn discover_worker(&self) -> Result<String> {
        let response = CLIENT
            .get(&self.bored_url)
            .send()
            .await
            .map_err(UploadError::Discovery)?;
        match response.status() {
            // 200
            StatusCode::OK => {}
            _ => {
                return Err(UploadError::DiscoveryFailed.into());
            }
        }
        let instance = response
            .json::<BoredInstanceDto>()
            .await
            .map_err(|_| UploadError::DiscoveryFailed)?;
        let host = instance.into_host().ok_or(UploadError::DiscoveryFailed)?;
        log::debug!("bored worker: {}", host);
        Ok(host)
    }
}
