//! Navigation service: the seam to the content host.
//!
//! The chrome never drives web content directly; it describes a load and the
//! host answers with page metadata. This in-process implementation resolves
//! what it can from the URL itself, which keeps the chrome fully exercisable
//! without an embedder attached.

use url::Url;

use crate::error::ShellError;
use crate::url_util;

/// Metadata the host reports once a load settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// The URL that finished loading (after any redirects).
    pub url: Url,
    /// Resolved page title.
    pub title: String,
}

/// Load a URL and resolve its page metadata.
pub async fn load(url: Url) -> Result<PageInfo, ShellError> {
    let title = match url.scheme() {
        "about" => match url.path() {
            "newtab" => "New Tab".to_owned(),
            path => format!("About: {path}"),
        },
        "file" => url.path().to_owned(),
        "http" | "https" => {
            let host = url
                .host_str()
                .ok_or_else(|| ShellError::load(url.as_str(), "URL has no host"))?;
            host.strip_prefix("www.").unwrap_or(host).to_owned()
        }
        _ => url_util::prettify(&url),
    };

    Ok(PageInfo { url, title })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn resolves_host_titles() {
        let info = block_on(load(Url::parse("https://www.example.com/docs").unwrap())).unwrap();
        assert_eq!(info.title, "example.com");
    }

    #[test]
    fn resolves_the_new_tab_page() {
        let info = block_on(load(url_util::new_tab_url())).unwrap();
        assert_eq!(info.title, "New Tab");
    }
}
