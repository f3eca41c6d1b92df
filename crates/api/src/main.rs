use clap::Parser;

/// In-memory user CRUD HTTP service.
#[derive(Parser, Debug)]
#[command(name = "roster-api", version, about)]
struct Cli {
    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() {
    roster_observability::init();

    let cli = Cli::parse();

    let app = roster_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cli.port))
        .await
        .expect("failed to bind listen port");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
