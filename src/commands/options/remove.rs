use anyhow::Result;
use log::info;
use webext_options::options::Options;

/// Remove an option. Removing an option that does not exist succeeds.
pub async fn remove_command(options: &Options, name: String) -> Result<()> {
    info!("Removing option: {}", name);

    options.remove(&name).await?;
    println!("Removed {}", name);

    Ok(())
}
