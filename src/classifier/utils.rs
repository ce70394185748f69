use std::io;
use std::path::Path;
use tokenizers::{Tokenizer, TruncationParams};

/// Resolves `tokenizer.json` from a model directory or an explicit file path.
pub fn tokenizer_path(model_path: &Path) -> io::Result<std::path::PathBuf> {
    if model_path
        .file_name()
        .is_some_and(|name| name == std::ffi::OsStr::new("tokenizer.json"))
    {
        Ok(model_path.to_path_buf())
    } else if model_path.is_dir() {
        Ok(model_path.join("tokenizer.json"))
    } else {
        model_path
            .parent()
            .map(|parent| parent.join("tokenizer.json"))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Model path has no parent"))
    }
}

/// Loads a tokenizer that truncates every encoding to `max_len` tokens.
///
/// The prompt template alone can approach the model's limit, so truncation must be on.
pub fn load_tokenizer_with_truncation(model_path: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let path = tokenizer_path(model_path)?;
    let mut tokenizer = Tokenizer::from_file(&path).map_err(io::Error::other)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;

    Ok(tokenizer)
}
