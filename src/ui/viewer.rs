use anyhow::{Result, anyhow};
use reqwest::Url;

/// Something that can show a book's detail page outside the app.
pub trait UrlViewer: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Only web links can be handed to a browser.
pub fn browsable(url: &str) -> Result<Url> {
    let parsed = Url::parse(url)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(anyhow!("No viewer for {} links", scheme)),
    }
}

/// Opens links in the system's default browser.
pub struct SystemViewer;

impl UrlViewer for SystemViewer {
    fn open(&self, url: &str) -> Result<()> {
        let url = browsable(url)?;
        open::that(url.as_str())?;
        Ok(())
    }
}
