use crate::error::{LpError, Result};
use crate::settings::{load_settings, normalize_api_url, save_settings, settings_path};

pub fn run(api_url: Option<&str>, save: bool) -> Result<()> {
    let mut settings = load_settings();

    if save {
        let url = api_url.ok_or_else(|| {
            LpError::Settings("`--save` needs `--api-url <URL>` to know what to save".into())
        })?;
        settings.api_url = normalize_api_url(url)?;
        save_settings(&settings)?;
        tracing::info!(api_url = %settings.api_url, "saved API URL");
        println!("Saved API URL: {}", settings.api_url);
        return Ok(());
    }

    let path = settings_path();
    let note = if path.exists() { "" } else { " (not created)" };
    println!("Settings:   {}{note}", path.display());
    println!("API URL:    {}", settings.api_url);
    if let Some(url) = api_url {
        println!("Override:   {url}");
    }
    println!("Log file:   {}", settings.log_file);
    Ok(())
}
