use log::LevelFilter;
use tower_lsp::Server;

#[tokio::main]
async fn main() {
    let level = std::env::var("RSXLS_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    rsxls::logger::init(level);

    log::info!("starting rsxls v{}", env!("CARGO_PKG_VERSION"));

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = rsxls::create_service();
    Server::new(stdin, stdout, socket).serve(service).await;
}
