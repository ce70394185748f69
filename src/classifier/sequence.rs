use candle_core::{Device, Tensor};
use parking_lot::Mutex;
use tokenizers::Tokenizer;
use tracing::{debug, info};

use super::config::ClassifierConfig;
use super::device::{device_label, select_device};
use super::error::ClassifierError;
use super::model::SequenceClassificationModel;
use super::utils::load_tokenizer_with_truncation;
use super::Classifier;

/// Candle-backed sequence classifier producing a single logit per prompt.
///
/// Forward passes are serialized through a mutex; concurrent requests queue on it.
pub struct SequenceClassifier {
    device: Device,
    config: ClassifierConfig,
    model: Mutex<SequenceClassificationModel>,
    tokenizer: Tokenizer,
}

impl std::fmt::Debug for SequenceClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceClassifier")
            .field("device", &device_label(&self.device))
            .field("config", &self.config)
            .finish()
    }
}

impl SequenceClassifier {
    pub fn load(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        if let Err(msg) = config.validate() {
            return Err(ClassifierError::InvalidConfig { reason: msg });
        }
        let Some(model_path) = config.model_path.clone() else {
            return Err(ClassifierError::InvalidConfig {
                reason: "model_path is required".to_string(),
            });
        };

        if !model_path.exists() {
            return Err(ClassifierError::ModelNotFound { path: model_path });
        }
        for required in ["config.json", "model.safetensors", "tokenizer.json"] {
            if !model_path.join(required).exists() {
                return Err(ClassifierError::ModelLoadFailed {
                    reason: format!("Missing {} in {}", required, model_path.display()),
                });
            }
        }

        let device = select_device()?;
        debug!(device = device_label(&device), "Selected compute device for classifier");

        info!(
            model_path = %model_path.display(),
            max_seq_len = config.max_seq_len,
            "Loading classifier model"
        );

        let model = SequenceClassificationModel::load(&model_path, &device).map_err(|e| {
            ClassifierError::ModelLoadFailed {
                reason: format!("Failed to load model weights: {}", e),
            }
        })?;

        let tokenizer = load_tokenizer_with_truncation(&model_path, config.max_seq_len)
            .map_err(|e| ClassifierError::ModelLoadFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            })?;

        info!(
            device = device_label(&device),
            encoder = model.encoder_label(),
            head = model.head_label(),
            "Classifier model loaded successfully"
        );

        Ok(Self {
            device,
            config,
            model: Mutex::new(model),
            tokenizer,
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    fn to_batch(&self, data: &[u32]) -> Result<Tensor, ClassifierError> {
        Ok(Tensor::new(data, &self.device)?.unsqueeze(0)?)
    }
}

impl Classifier for SequenceClassifier {
    fn classify(&self, prompt: &str) -> Result<f32, ClassifierError> {
        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(|e| ClassifierError::TokenizationFailed {
                reason: e.to_string(),
            })?;

        debug!(
            prompt_len = prompt.len(),
            tokens = encoding.len(),
            "Running classifier forward pass"
        );

        let input_ids = self.to_batch(encoding.get_ids())?;
        let type_ids = self.to_batch(encoding.get_type_ids())?;
        let attention_mask = self.to_batch(encoding.get_attention_mask())?;

        let logits = {
            let model = self.model.lock();
            model
                .forward(&input_ids, &type_ids, Some(&attention_mask))
                .map_err(|e| ClassifierError::InferenceFailed {
                    reason: e.to_string(),
                })?
        };

        let values = logits.flatten_all()?.to_vec1::<f32>()?;
        values
            .first()
            .copied()
            .ok_or_else(|| ClassifierError::InferenceFailed {
                reason: "model returned no logits".to_string(),
            })
    }
}
