use anyhow::Result;
use log::info;
use webext_options::options::Options;

/// Set the value of an option
///
/// # Arguments
/// * `name` - Option name
/// * `value` - New value
/// * `default` - Default used when the option does not exist yet
pub async fn set_command(
    options: &Options,
    name: String,
    value: String,
    default: Option<String>,
) -> Result<()> {
    info!("Setting {} to {}", name, value);

    let option = options.option(&name, default.as_deref()).await?;
    option.update(|_| value.clone()).await?;

    println!("Set {} to {}", name, value);
    Ok(())
}

/// Append `suffix` to the current value of an option
pub async fn append_command(options: &Options, name: String, suffix: String) -> Result<()> {
    info!("Appending '{}' to {}", suffix, name);

    let option = options.option(&name, None).await?;
    option.update(|current| format!("{}{}", current, suffix)).await?;

    println!("Set {} to {}", name, option.value().await?);
    Ok(())
}
