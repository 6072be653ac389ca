#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

use clap::Parser;
use tracing::info;
use tracing_unwrap::ResultExt;

use urdle::{
    cli::{Cli, Command},
    fetch,
    framework::{self, AppData, Config},
};

mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    framework::logging::init_tracing();

    let build = if built_info::DEBUG {
        format!("development build {}", built_info::PKG_VERSION)
    } else {
        format!("release {}", built_info::PKG_VERSION)
    };

    info!("{build}");

    match cli.command() {
        Command::Start => start(&cli).await,
        Command::Config => {
            let config =
                Config::load(cli.config_path()).expect_or_log("config should be loadable");
            let rendered =
                toml::to_string_pretty(&config).expect_or_log("config should serialise");

            println!("{rendered}");
        }
        Command::FetchWords(args) => {
            fetch::run(args).await.expect_or_log("fetching words failed");
        }
    }
}

async fn start(cli: &Cli) {
    let config = Config::load(cli.config_path()).expect_or_log("config should be loadable");

    if let Some(flavor_text) = config.logs.flavor_text() {
        info!("{flavor_text}");
    }

    let addr = config.http.socket_addr();
    let data = AppData::new(config).expect_or_log("app data should initialise");

    let app = framework::http::build(data);

    info!(%addr, "serving");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect_or_log("server exited with an error");
}
