use crate::error::{FetchError, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Where the sitemap comes from. Resolved once at startup.
#[derive(Debug, Clone)]
pub enum SitemapSource {
    File(PathBuf),
    Remote(String),
}

impl SitemapSource {
    /// Produce the sitemap's textual content.
    ///
    /// Sources whose name ends in `.gz` get opportunistic gzip
    /// decompression: if the bytes turn out not to be a gzip stream the
    /// raw bytes are used as-is, so misnamed or already-decompressed
    /// files stay readable.
    pub async fn load(&self, user_agent: &str) -> Result<String> {
        let (bytes, gzipped) = match self {
            SitemapSource::File(path) => {
                debug!("Reading sitemap from {}", path.display());
                let bytes = fs::read(path)?;
                let gzipped = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
                (bytes, gzipped)
            }
            SitemapSource::Remote(url) => {
                let url = ensure_http_scheme(url);
                debug!("Fetching sitemap from {}", url);

                let client = reqwest::Client::builder()
                    .user_agent(user_agent)
                    .danger_accept_invalid_certs(true)
                    .redirect(reqwest::redirect::Policy::none())
                    .build()?;

                let response = client.get(&url).send().await?;
                let status = response.status();
                if status.as_u16() != 200 {
                    return Err(FetchError::SitemapStatus(status.as_u16()));
                }

                let bytes = response.bytes().await?.to_vec();
                (bytes, url.ends_with(".gz"))
            }
        };

        let bytes = if gzipped { gunzip_or_raw(bytes) } else { bytes };
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Prefix `http://` when the address carries no scheme. A leading `http`
/// literal counts as a scheme, so `https://` addresses pass through.
pub fn ensure_http_scheme(addr: &str) -> String {
    if addr.starts_with("http") {
        addr.to_string()
    } else {
        format!("http://{}", addr)
    }
}

/// Try to gunzip `bytes`, returning the original bytes when they are not
/// a gzip stream.
fn gunzip_or_raw(bytes: Vec<u8>) -> Vec<u8> {
    let mut decoded = Vec::new();
    match GzDecoder::new(&bytes[..]).read_to_end(&mut decoded) {
        Ok(_) => decoded,
        Err(e) => {
            warn!("Not a gzip stream ({}), using raw bytes", e);
            bytes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    #[test]
    fn test_ensure_http_scheme_bare_host() {
        assert_eq!(ensure_http_scheme("127.0.0.1:8080"), "http://127.0.0.1:8080");
        assert_eq!(ensure_http_scheme("localhost"), "http://localhost");
    }

    #[test]
    fn test_ensure_http_scheme_passthrough() {
        assert_eq!(ensure_http_scheme("http://proxy:8080"), "http://proxy:8080");
        assert_eq!(
            ensure_http_scheme("https://proxy:8443"),
            "https://proxy:8443"
        );
    }

    #[test]
    fn test_gunzip_or_raw_decodes_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"<urlset></urlset>").unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(gunzip_or_raw(compressed), b"<urlset></urlset>");
    }

    #[test]
    fn test_gunzip_or_raw_falls_back_on_plain_bytes() {
        let plain = b"<urlset></urlset>".to_vec();
        assert_eq!(gunzip_or_raw(plain.clone()), plain);
    }
}
