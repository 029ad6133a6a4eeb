//! `veggietools init`: Write a default config file.

use std::path::Path;

use veggietools_config::AppConfig;

pub fn run(path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    AppConfig::write_default(path, force)?;
    println!("✅ Wrote default config: {}", path.display());
    println!("   Edit [gateway] to change host, port or CORS origins.");
    Ok(())
}
