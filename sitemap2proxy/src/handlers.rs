use clap::ArgMatches;
use colored::Colorize;
use sitemap2proxy_scanner::{
    CancelFlag, ProxiedFetcher, RequestOutcome, ResponseTally, SitemapSource, parse_sitemap,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

pub fn print_banner() {
    println!(
        "{} {}",
        "sitemap2proxy".bright_white().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
}

fn fatal(message: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", "✗".red().bold(), message);
    std::process::exit(1);
}

/// Resolve the sitemap source from the mutually-exclusive --file/--url
/// arguments. Checked before any I/O happens.
pub fn resolve_source(
    file: Option<&PathBuf>,
    url: Option<&String>,
) -> Result<SitemapSource, String> {
    match (file, url) {
        (Some(_), Some(_)) => {
            Err("Specify either a file or URL to process, not both".to_string())
        }
        (Some(path), None) => Ok(SitemapSource::File(path.clone())),
        (None, Some(url)) => Ok(SitemapSource::Remote(url.clone())),
        (None, None) => Err("You must specify either a file or URL to process".to_string()),
    }
}

/// One character per URL, with a distinct marker every 10th.
pub fn progress_marker(idx: usize) -> char {
    if (idx + 1) % 10 == 0 { '/' } else { '.' }
}

pub async fn handle_run(matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let file = matches.get_one::<PathBuf>("file");
    let url = matches.get_one::<String>("url");
    let proxy = matches.get_one::<String>("proxy").unwrap();
    let user_agent = matches.get_one::<String>("ua").unwrap().clone();
    let verbose = matches.get_flag("verbose");

    let source = match resolve_source(file, url) {
        Ok(source) => source,
        Err(e) => fatal(e),
    };

    let sitemap = match source.load(&user_agent).await {
        Ok(sitemap) => sitemap,
        Err(e) => fatal(format!("There was a problem retrieving the sitemap: {}", e)),
    };

    let entries = match parse_sitemap(&sitemap) {
        Ok(entries) => entries,
        Err(e) => fatal(e),
    };

    println!("Starting to retrieve {} URLs", entries.len());
    println!();

    let fetcher = match ProxiedFetcher::new(proxy, &user_agent) {
        Ok(fetcher) => fetcher,
        Err(e) => fatal(e),
    };

    let fetcher = fetcher
        .with_request_callback(Arc::new(move |_idx, url| {
            if verbose {
                println!("Requesting: {}", url);
            }
        }))
        .with_outcome_callback(Arc::new(move |idx, outcome| {
            if verbose {
                match outcome {
                    RequestOutcome::Status(_) => println!("Response: {}", outcome.describe()),
                    RequestOutcome::Failed(err) => println!("{}", err),
                }
            } else {
                if let RequestOutcome::Failed(err) = outcome {
                    println!("{}", err);
                }
                print!("{}", progress_marker(idx));
                io::stdout().flush().unwrap();
            }
        }));

    // Ctrl-C breaks out of the loop; stats gathered so far still print
    let cancel = CancelFlag::new();
    let cancel_handle = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_handle.cancel();
        }
    });

    let mut tally = ResponseTally::new();
    let mut failed = false;
    if let Err(e) = fetcher.fetch_all(&entries, &mut tally, &cancel).await {
        println!();
        eprintln!("{} {}", "✗".red().bold(), e);
        failed = true;
    }

    println!();
    println!();
    print!("{}", tally.render());

    if failed {
        std::process::exit(1);
    }
}
