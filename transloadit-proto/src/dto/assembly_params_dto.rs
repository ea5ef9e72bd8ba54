use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{BLOCKING_MODE, EXPIRES_FORMAT};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthDto {
    pub expires: String,
    pub key: String,
}

impl AuthDto {
    pub fn new(key: impl ToString, expires_at: DateTime<Utc>) -> Self {
        Self {
            expires: expires_at.format(EXPIRES_FORMAT).to_string(),
            key: key.to_string(),
        }
    }
}

// Field order is load-bearing: the signature covers the serialized bytes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssemblyParamsDto {
    pub template_id: String,
    pub auth: AuthDto,
    pub blocking: String,
}

impl AssemblyParamsDto {
    pub fn blocking(
        template_id: impl ToString,
        api_key: impl ToString,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            template_id: template_id.to_string(),
            auth: AuthDto::new(api_key, expires_at),
            blocking: BLOCKING_MODE.to_string(),
        }
    }
}
