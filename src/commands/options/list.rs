use anyhow::Result;
use colored::*;
use webext_options::options::Options;

/// List every stored option with its value and default
pub async fn list_command(options: &Options) -> Result<()> {
    let all = options.options().await?;

    if all.is_empty() {
        println!("No options stored.");
        return Ok(());
    }

    println!("{}", "Options:".bold());
    for option in &all {
        let value = option.value().await?;
        let default = option.default_value().await?;
        let marker = if value == default {
            "".normal()
        } else {
            " (modified)".yellow()
        };
        println!(
            "  {} = '{}' {}{}",
            option.name().cyan(),
            value.green(),
            format!("[default: '{}']", default).dimmed(),
            marker
        );
    }

    println!("\nTotal options: {}", all.len());
    Ok(())
}
