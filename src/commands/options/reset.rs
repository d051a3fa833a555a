use anyhow::Result;
use log::info;
use webext_options::options::Options;

use crate::ui::prompts::prompt_confirmation;

/// Reset an option to its default value
pub async fn reset_command(options: &Options, name: String) -> Result<()> {
    info!("Resetting option: {}", name);

    let option = options.option(&name, None).await?;
    option.reset().await?;

    println!("Reset {} to '{}'", name, option.value().await?);
    Ok(())
}

/// Reset all options to their default values
///
/// # Arguments
/// * `force` - Skip confirmation prompt
pub async fn reset_all_command(options: &Options, force: bool) -> Result<()> {
    info!("Resetting all options to defaults");

    if !force && !prompt_confirmation("Reset all options to their default values?", false)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let count = options.reset_all().await?;
    println!("Reset {} options to their default values.", count);

    Ok(())
}
