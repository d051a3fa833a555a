use anyhow::Result;
use log::info;
use webext_options::options::{OptionHandle, Options};

/// Print the value of an option
///
/// An option that does not exist yet is stored with `default` (or the
/// standard default) before its value is printed.
pub async fn get_command(options: &Options, name: String, default: Option<String>) -> Result<()> {
    info!("Getting option: {}", name);

    let option = options.option(&name, default.as_deref()).await?;
    println!("{}", option.value().await?);

    Ok(())
}

/// Print the default value of an option without storing it
pub async fn default_command(options: &Options, name: String) -> Result<()> {
    info!("Getting default of option: {}", name);

    let option = OptionHandle::new(options.storage().clone(), name);
    println!("{}", option.default_value().await?);

    Ok(())
}
