//! Services command handler

use anyhow::Result;
use colored::*;
use svcheck_core::domain::SERVICES;

use crate::config::Config;

/// List every registered service with the command `check` would run
pub fn list_services(config: &Config) -> Result<()> {
    println!(
        "{}",
        format!("{} service(s), in check order:", SERVICES.len()).bold()
    );
    println!();

    for (idx, spec) in SERVICES.iter().enumerate() {
        println!("{}. {}", idx + 1, spec.name.as_str().cyan().bold());
        println!("   Directory:   {}", spec.working_dir(&config.root).display());
        println!("   Entry point: {}", spec.entry_point);
    }

    Ok(())
}
