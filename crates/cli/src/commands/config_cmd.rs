//! `dualmind config`: Print a starter configuration file.

use dualmind_config::AppConfig;

pub fn run() {
    println!("# Save as {}", AppConfig::config_path().display());
    print!("{}", AppConfig::default_toml());
}
