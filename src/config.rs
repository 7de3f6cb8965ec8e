use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    envy::prefixed("FLEETWATCH_")
        .from_env::<Config>()
        .expect("Invalid config. Optional env vars: FLEETWATCH_PUBLIC_DIR")
});

pub fn config() -> &'static Config {
    &CONFIG
}
