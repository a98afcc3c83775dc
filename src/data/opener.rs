use anyhow::{bail, Context, Result};

/// Hands a file link to something outside the app.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Only absolute web links are ever handed to the OS.
pub fn is_web_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Launches the system URL handler as a detached process.
///
/// The browser is started fresh by the OS, so it never sees a referrer and
/// holds no handle back into this process.
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        if !is_web_url(url) {
            bail!("refusing to open non-web link {}", url);
        }
        open::that_detached(url).with_context(|| format!("failed to open {}", url))
    }
}

/// Used when launching is disabled in config: accepts the link without
/// opening anything so the status bar can show it instead.
pub struct NoopOpener;

impl LinkOpener for NoopOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        if !is_web_url(url) {
            bail!("refusing to open non-web link {}", url);
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_urls_only() {
        assert!(is_web_url("https://example.com/a.pdf"));
        assert!(is_web_url("http://example.com"));
        assert!(!is_web_url("file:///etc/passwd"));
        assert!(!is_web_url("javascript:alert(1)"));
    }

    #[test]
    fn noop_opener_still_refuses_bad_links() {
        let mut opener = NoopOpener;
        assert!(opener.open("https://example.com").is_ok());
        assert!(opener.open("ftp://example.com").is_err());
    }

    #[test]
    fn system_opener_refuses_before_launching() {
        let mut opener = SystemOpener;
        let err = opener.open("file:///tmp/x").unwrap_err();
        assert!(err.to_string().contains("non-web link"));
    }
}
