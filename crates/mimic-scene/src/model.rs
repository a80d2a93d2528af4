use anyhow::{
    ensure,
    Context,
    Result,
};
use mimic_base::path::resolve_path;
use serde::Deserialize;
use std::path::{
    Path,
    PathBuf,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelDescriptor {
    pub path: PathBuf,
}

impl ModelDescriptor {
    pub fn from_path(path: &Path) -> Result<Self> {
        ensure!(path.exists(), "Specified path doesn't exist: {:?}", path);

        let file = std::fs::File::open(path)?;
        let mut deserializer = serde_json::Deserializer::from_reader(file);
        let model_descriptor = ModelDescriptor::deserialize(&mut deserializer)
            .with_context(|| format!("invalid model descriptor: {}", path.display()))?;
        Ok(model_descriptor)
    }

    pub fn resolved_path(&self) -> Result<PathBuf> {
        resolve_path(&self.path)
    }
}
