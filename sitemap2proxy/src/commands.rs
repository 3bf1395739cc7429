use clap::arg;
use sitemap2proxy_scanner::DEFAULT_USER_AGENT;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitemap2proxy")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitemap2proxy")
        .styles(CLAP_STYLING)
        .about(
            "Request every URL in a sitemap through a forward proxy, so an \
            intercepting tool gets its eyes on each page",
        )
        .arg(
            arg!(-f --"file" <PATH>)
                .required(false)
                .help("Local sitemap file to parse")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .conflicts_with("url"),
        )
        .arg(
            arg!(-u --"url" <URL>)
                .required(false)
                .help("URL of the sitemap to fetch")
                .conflicts_with("file"),
        )
        .arg(
            arg!(-p --"proxy" <ADDRESS>)
                .required(true)
                .help("Address of the forward proxy, host[:port]"),
        )
        .arg(
            arg!(-a --"ua" <USER_AGENT>)
                .required(false)
                .help("Alternative User-Agent header - default is Googlebot")
                .default_value(DEFAULT_USER_AGENT),
        )
        .arg(
            arg!(-v --"verbose" "Log every request and its response")
                .required(false),
        )
}
