use clap::{value_parser, Arg, Command};
use onboard_server::{routes, JsonlSheet, MemorySheet, RowSink, ServerState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("onboard-server")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hearing sheet intake endpoint")
        .arg(
            Arg::new("port")
                .long("port")
                .default_value("8787")
                .value_parser(value_parser!(u16))
                .help("Port to listen on"),
        )
        .arg(
            Arg::new("site-base")
                .long("site-base")
                .default_value("https://example.github.io/onboard")
                .help("Site base URL for derived document links (no trailing slash)"),
        )
        .arg(
            Arg::new("sheet")
                .long("sheet")
                .help("Path to the append-only sheet file (in-memory when omitted)"),
        );

    let matches = cli.get_matches();
    let port = *matches.get_one::<u16>("port").unwrap_or(&8787);
    let site_base = matches
        .get_one::<String>("site-base")
        .cloned()
        .unwrap_or_default();

    let sheet: Arc<dyn RowSink> = match matches.get_one::<String>("sheet") {
        Some(path) => match JsonlSheet::open(path) {
            Ok(sheet) => {
                info!(path = %path, "appending to sheet file");
                Arc::new(sheet)
            }
            Err(err) => {
                eprintln!("cannot open sheet file {path}: {err}");
                std::process::exit(1);
            }
        },
        None => {
            info!("no sheet file configured, rows stay in memory");
            Arc::new(MemorySheet::new())
        }
    };

    let state = ServerState::new(site_base, sheet);
    info!(port, "hearing sheet intake listening");
    warp::serve(routes(state)).run(([0, 0, 0, 0], port)).await;
}
