use std::path::Path;

use linked_hash_map::LinkedHashMap;

use crate::Result;

/// Everything one upload call needs: the file, its name on the assembly,
/// extra form fields, and the template to run.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_data: Vec<u8>,
    pub file_name: String,
    pub fields: LinkedHashMap<String, String>,
    pub template_id: String,
}

impl UploadRequest {
    pub fn new(file_data: Vec<u8>, file_name: impl ToString, template_id: impl ToString) -> Self {
        Self {
            file_data,
            file_name: file_name.to_string(),
            fields: LinkedHashMap::new(),
            template_id: template_id.to_string(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>, template_id: impl ToString) -> Result<Self> {
        fn get_file_name(path: &Path) -> Option<String> {
            Some(path.file_name()?.to_str()?.to_string())
        }

        let path = path.as_ref();
        let file_data = std::fs::read(path)?;
        let file_name = get_file_name(path).unwrap_or("upload".to_string());
        Ok(Self::new(file_data, file_name, template_id))
    }

    pub fn add_field(&mut self, name: impl ToString, value: impl ToString) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    pub fn size(&self) -> u64 {
        self.file_data.len() as u64
    }
}
