use sitemap2proxy::commands::command_argument_builder;
use sitemap2proxy::handlers::{progress_marker, resolve_source};
use sitemap2proxy_scanner::{DEFAULT_USER_AGENT, SitemapSource};
use std::path::PathBuf;

#[test]
fn test_resolve_source_file() {
    let path = PathBuf::from("/tmp/sitemap.xml");
    let source = resolve_source(Some(&path), None).unwrap();
    assert!(matches!(source, SitemapSource::File(p) if p == path));
}

#[test]
fn test_resolve_source_url() {
    let url = "https://example.com/sitemap.xml".to_string();
    let source = resolve_source(None, Some(&url)).unwrap();
    assert!(matches!(source, SitemapSource::Remote(u) if u == url));
}

#[test]
fn test_resolve_source_both_rejected() {
    let path = PathBuf::from("/tmp/sitemap.xml");
    let url = "https://example.com/sitemap.xml".to_string();
    let result = resolve_source(Some(&path), Some(&url));
    assert!(result.unwrap_err().contains("not both"));
}

#[test]
fn test_resolve_source_neither_rejected() {
    let result = resolve_source(None, None);
    assert!(result.unwrap_err().contains("either a file or URL"));
}

#[test]
fn test_progress_marker_every_tenth() {
    let markers: String = (0usize..20).map(progress_marker).collect();
    assert_eq!(markers, "........./........./");
}

#[test]
fn test_cli_rejects_file_and_url_together() {
    let result = command_argument_builder().try_get_matches_from([
        "sitemap2proxy",
        "-f",
        "sitemap.xml",
        "-u",
        "https://example.com/sitemap.xml",
        "-p",
        "127.0.0.1:8080",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_cli_requires_proxy() {
    let result =
        command_argument_builder().try_get_matches_from(["sitemap2proxy", "-f", "sitemap.xml"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_default_user_agent() {
    let matches = command_argument_builder()
        .try_get_matches_from(["sitemap2proxy", "-f", "sitemap.xml", "-p", "127.0.0.1:8080"])
        .unwrap();
    assert_eq!(
        matches.get_one::<String>("ua").unwrap(),
        DEFAULT_USER_AGENT
    );
}

#[test]
fn test_cli_ua_override() {
    let matches = command_argument_builder()
        .try_get_matches_from([
            "sitemap2proxy",
            "-u",
            "example.com/sitemap.xml",
            "-p",
            "burp:8080",
            "-a",
            "my-agent/1.0",
        ])
        .unwrap();
    assert_eq!(matches.get_one::<String>("ua").unwrap(), "my-agent/1.0");
    assert!(matches.get_one::<PathBuf>("file").is_none());
}
