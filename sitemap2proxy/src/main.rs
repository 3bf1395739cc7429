use sitemap2proxy::commands::command_argument_builder;
use sitemap2proxy::handlers::{handle_run, print_banner};

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let matches = cmd.get_matches();

    print_banner();
    handle_run(&matches).await;
}
