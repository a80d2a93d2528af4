use anyhow::Result;
use mimic_base::path::get_config_root;
use mimic_scene::{
    model::ModelDescriptor,
    report::{
        report,
        LogReport,
    },
    skeleton::extract_bones,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let descriptor_path = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => get_config_root()?.join("trial.json"),
    };
    let descriptor = ModelDescriptor::from_path(&descriptor_path)?;
    log::debug!("{:#?}", descriptor);

    let result = descriptor
        .resolved_path()
        .and_then(|path| extract_bones(&path));
    report(result, &mut LogReport);
    Ok(())
}
