use crate::api::LpApi;
use crate::error::Result;

use super::api_client;

pub fn run(api_url: Option<&str>) -> Result<()> {
    let api = api_client(api_url)?;
    println!("{}", list_text(&api)?);
    Ok(())
}

pub fn list_text(api: &dyn LpApi) -> Result<String> {
    let lps = api.list_lps()?;
    tracing::info!(count = lps.len(), "listed LPs");
    if lps.is_empty() {
        return Ok("No LPs available.".to_string());
    }
    Ok(lps.join("\n"))
}
