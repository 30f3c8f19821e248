use retouch_core::config::{user_config_dir, write_default_config};

/// Initialize the user configuration directory with a default `retouch.yml`.
///
/// Writes `~/retouch/retouch.yml`. Safe to run multiple times - won't
/// overwrite an existing file unless `force` is true.
pub fn cmd_init(force: bool) -> Result<(), String> {
    let config_dir = user_config_dir().ok_or("Could not determine home directory")?;

    println!(
        "Initializing retouch configuration in: {}",
        config_dir.display()
    );

    match write_default_config(&config_dir, force).map_err(|e| e.to_string())? {
        Some(path) => {
            println!("  Wrote: {}", path.display());
            println!();
            println!("Edit the `defaults:` section to choose the corrections applied");
            println!("when no correction flags are given.");
        }
        None => println!("  Skipped: retouch.yml (already exists, use --force to overwrite)"),
    }

    Ok(())
}
