use anyhow::Result;
use mimic_view::health_bar::HealthBar;

fn main() -> Result<()> {
    std::env::set_var("RUST_LOG", "info");
    env_logger::init();

    for percentage in [0.0, 42.0, 100.0, 150.0] {
        let bar = HealthBar::new(percentage);
        log::info!("{:>5}: {}", percentage, bar.render());
    }
    Ok(())
}
