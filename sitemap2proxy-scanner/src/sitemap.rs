use crate::error::{FetchError, Result};
use quick_xml::events::Event;
use tracing::debug;

/// Extract every URL at `urlset -> url -> loc`, in document order.
///
/// Duplicates are kept. Sitemap-index documents are not traversed; their
/// `sitemapindex/sitemap/loc` entries simply never match, yielding an
/// empty list. Malformed XML is a hard error.
pub fn parse_sitemap(xml: &str) -> Result<Vec<String>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(String::from_utf8_lossy(e.name().as_ref()).to_string());
            }
            Ok(Event::Text(ref e)) => {
                if at_loc(&stack) {
                    let text = e
                        .unescape()
                        .map_err(|e| FetchError::Parse(e.to_string()))?
                        .trim()
                        .to_string();
                    if !text.is_empty() {
                        urls.push(text);
                    }
                }
            }
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FetchError::Parse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    debug!("Parsed {} URL entries from sitemap", urls.len());
    Ok(urls)
}

fn at_loc(stack: &[String]) -> bool {
    stack.len() == 3 && stack[0] == "urlset" && stack[1] == "url" && stack[2] == "loc"
}
