use clap::Parser;
use std::process::exit;
use swordward::{swordward_main, SwordWardCli};

#[tokio::main]
async fn main() {
    let args = SwordWardCli::parse();
    env_logger::builder()
        .filter_level(args.log_level())
        .format_target(false)
        .format_timestamp(None)
        .init();
    match swordward_main(args).await {
        Ok(_) => {
            exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };
}
