use candle_core::{DType, Device, IndexOp, Result, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{self, BertModel};
use candle_transformers::models::xlm_roberta::{self, XLMRobertaModel};
use std::path::Path;

/// Transformer body, picked from the checkpoint's tensor prefix.
enum Encoder {
    /// `bert.*` or unprefixed weights; positions are `0..seq_len`.
    Bert(BertModel),
    /// `roberta.*` weights; positions skip padding and start at `pad_token_id + 1`.
    Roberta(XLMRobertaModel),
}

impl Encoder {
    fn load(vb: &VarBuilder, config_content: &str) -> Result<Self> {
        if vb.contains_tensor("roberta.embeddings.word_embeddings.weight") {
            let config: xlm_roberta::Config = parse_config(config_content)?;
            return Ok(Self::Roberta(XLMRobertaModel::new(&config, vb.pp("roberta"))?));
        }

        let config: bert::Config = parse_config(config_content)?;
        if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            Ok(Self::Bert(BertModel::load(vb.pp("bert"), &config)?))
        } else {
            Ok(Self::Bert(BertModel::load(vb.clone(), &config)?))
        }
    }

    fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        match self {
            Self::Bert(model) => model.forward(input_ids, token_type_ids, attention_mask),
            Self::Roberta(model) => {
                let mask = match attention_mask {
                    Some(mask) => mask.clone(),
                    None => input_ids.ones_like()?,
                };
                model.forward(input_ids, &mask, token_type_ids, None, None, None)
            }
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Bert(_) => "bert",
            Self::Roberta(_) => "roberta",
        }
    }
}

/// Single-logit head on top of the `[CLS]` hidden state.
enum ClassificationHead {
    /// `classifier` as one linear layer (BERT-style checkpoints).
    Linear(Linear),
    /// `classifier.dense` -> tanh -> `classifier.out_proj` (RoBERTa-style checkpoints).
    Projected { dense: Linear, out_proj: Linear },
}

impl ClassificationHead {
    fn load(vb: VarBuilder, hidden_size: usize) -> Result<Self> {
        if vb.contains_tensor("classifier.out_proj.weight") {
            let vb = vb.pp("classifier");
            Ok(Self::Projected {
                dense: candle_nn::linear(hidden_size, hidden_size, vb.pp("dense"))?,
                out_proj: candle_nn::linear(hidden_size, 1, vb.pp("out_proj"))?,
            })
        } else {
            Ok(Self::Linear(candle_nn::linear(
                hidden_size,
                1,
                vb.pp("classifier"),
            )?))
        }
    }

    fn forward(&self, cls: &Tensor) -> Result<Tensor> {
        match self {
            Self::Linear(linear) => linear.forward(cls),
            Self::Projected { dense, out_proj } => {
                let hidden = dense.forward(cls)?.tanh()?;
                out_proj.forward(&hidden)
            }
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Linear(_) => "linear",
            Self::Projected { .. } => "projected",
        }
    }
}

#[derive(serde::Deserialize)]
struct HiddenSize {
    hidden_size: usize,
}

fn parse_config<T: serde::de::DeserializeOwned>(content: &str) -> Result<T> {
    serde_json::from_str(content)
        .map_err(|e| candle_core::Error::Msg(format!("Failed to parse config: {}", e)))
}

/// Encoder plus one-label classification head, loaded from safetensors.
pub struct SequenceClassificationModel {
    encoder: Encoder,
    head: ClassificationHead,
}

impl SequenceClassificationModel {
    /// Loads `config.json` and `model.safetensors` from `model_dir`.
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_content = std::fs::read_to_string(model_dir.join("config.json"))?;
        let HiddenSize { hidden_size } = parse_config(&config_content)?;

        let weights_path = model_dir.join("model.safetensors");
        // SAFETY: the weights file is not modified while mapped.
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let encoder = Encoder::load(&vb, &config_content)?;
        let head = ClassificationHead::load(vb, hidden_size)?;

        Ok(Self { encoder, head })
    }

    /// Returns logits of shape `[batch, 1]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        let output = self
            .encoder
            .forward(input_ids, token_type_ids, attention_mask)?;
        let cls = output.i((.., 0, ..))?;
        self.head.forward(&cls)
    }

    /// `"bert"` or `"roberta"`.
    pub fn encoder_label(&self) -> &'static str {
        self.encoder.label()
    }

    /// `"linear"` or `"projected"`.
    pub fn head_label(&self) -> &'static str {
        self.head.label()
    }
}
