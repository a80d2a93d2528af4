use anyhow::{
    ensure,
    Result,
};
use mimic_base::path::get_config_root;
use mimic_scene::{
    bone::Bone,
    model::ModelDescriptor,
    pose,
    skeleton::Skeleton,
};

fn main() -> Result<()> {
    std::env::set_var("RUST_LOG", "debug");
    env_logger::init();

    let config_path = get_config_root()?.join("trial.json");
    ensure!(
        config_path.exists(),
        "Config doesn't exist: {:?}",
        config_path
    );
    let model_descriptor = ModelDescriptor::from_path(&config_path)?;
    log::info!("{:#?}", model_descriptor);

    let skeleton = Skeleton::from_model_descriptor(&model_descriptor)?;
    log::info!("{} joints", skeleton.joint_count());

    let bones = skeleton.bones();
    for bone in &bones {
        log::info!("{:#?}", bone);
    }

    let normalized = pose::normalize(&Bone::coordinates(&bones));
    log::info!("normalized: {:?}", normalized);
    Ok(())
}
