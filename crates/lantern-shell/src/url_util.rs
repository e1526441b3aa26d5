//! Address-bar URL interpretation and display formatting.

use url::Url;

/// The blank page every new tab starts on.
pub const NEW_TAB: &str = "about:newtab";

/// Schemes the address bar accepts verbatim.
const KNOWN_SCHEMES: &[&str] = &["http", "https", "about", "file", "data", "view-source"];

/// The new-tab URL.
pub fn new_tab_url() -> Url {
    Url::parse(NEW_TAB).expect("about:newtab is a valid URL")
}

/// Whether this is the new-tab page.
pub fn is_new_tab(url: &Url) -> bool {
    url.as_str() == NEW_TAB
}

/// Interpret address-bar text as a URL, if it is one.
///
/// Text that parses under a known scheme loads directly; text with a dot (or
/// a localhost prefix) and no spaces is retried with `https://` in front.
/// Anything else is not a URL — callers fall back to a search query.
pub fn read(input: &str) -> Option<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return None;
    }

    if let Ok(url) = Url::parse(trimmed)
        && KNOWN_SCHEMES.contains(&url.scheme())
    {
        return Some(url);
    }

    if trimmed.contains('.') || trimmed.starts_with("localhost") {
        if let Ok(url) = Url::parse(&format!("https://{trimmed}")) {
            return Some(url);
        }
    }

    None
}

/// Format a URL the way the location bar displays it: scheme and `www.`
/// stripped for plain web URLs, bare root path dropped.
pub fn prettify(url: &Url) -> String {
    if !matches!(url.scheme(), "http" | "https") {
        return url.to_string();
    }

    let host = url.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);

    let mut pretty = String::from(host);
    let path = url.path();
    if path != "/" {
        pretty.push_str(path);
    }
    if let Some(query) = url.query() {
        pretty.push('?');
        pretty.push_str(query);
    }
    pretty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_absolute_urls_verbatim() {
        assert_eq!(
            read("https://example.com/a").unwrap().as_str(),
            "https://example.com/a"
        );
        assert_eq!(read("about:newtab").unwrap().as_str(), NEW_TAB);
    }

    #[test]
    fn retries_bare_domains_with_https() {
        assert_eq!(
            read("example.com").unwrap().as_str(),
            "https://example.com/"
        );
        assert_eq!(
            read("localhost:8000").unwrap().as_str(),
            "https://localhost:8000/"
        );
    }

    #[test]
    fn rejects_plain_text() {
        assert_eq!(read("rust borrow checker"), None);
        assert_eq!(read("rust"), None);
        assert_eq!(read(""), None);
    }

    #[test]
    fn prettifies_web_urls() {
        let url = Url::parse("https://www.example.com/docs/").unwrap();
        assert_eq!(prettify(&url), "example.com/docs/");

        let root = Url::parse("https://example.com/").unwrap();
        assert_eq!(prettify(&root), "example.com");

        let other = Url::parse("about:newtab").unwrap();
        assert_eq!(prettify(&other), "about:newtab");
    }
}
