use std::path::PathBuf;

use crate::constants::MAX_SEQ_LEN;

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_path: Option<PathBuf>,

    pub max_seq_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            max_seq_len: MAX_SEQ_LEN,
        }
    }
}

impl ClassifierConfig {
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            ..Default::default()
        }
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_seq_len == 0 {
            return Err("max_seq_len must be greater than 0".to_string());
        }

        match self.model_path {
            None => Err("model_path is required".to_string()),
            Some(ref path) if path.as_os_str().is_empty() => {
                Err("model_path cannot be empty".to_string())
            }
            Some(_) => Ok(()),
        }
    }
}
