use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoredInstanceDto {
    pub api2_host: Option<String>,
}

impl BoredInstanceDto {
    pub fn into_host(self) -> Option<String> {
        self.api2_host.filter(|host| !host.is_empty())
    }
}
