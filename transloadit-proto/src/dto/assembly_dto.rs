use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AssemblyDto {
    #[serde(default)]
    pub results: HashMap<String, Vec<Value>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl AssemblyDto {
    pub fn result_steps(&self) -> Vec<&str> {
        self.results.keys().map(String::as_str).collect()
    }

    /// One file per upload, so a step carries at most one result.
    pub fn step_result(&self, step_name: &str) -> Option<&Value> {
        self.results.get(step_name)?.first()
    }
}
