use anyhow::Result;
use git2;
use std::path::{
    Path,
    PathBuf,
};

pub fn get_project_root() -> Result<PathBuf> {
    let repo = git2::Repository::discover(std::env::current_dir()?)?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| git2::Error::from_str("No workdir"))?;
    Ok(workdir.to_path_buf())
}

pub fn get_config_root() -> Result<PathBuf> {
    let project_root = get_project_root()?;
    Ok(project_root.join("crates/mimic-scene/config"))
}

/// Absolute paths are kept as-is, relative ones are anchored at the project root.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(get_project_root()?.join(path))
}
