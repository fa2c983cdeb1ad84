use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "crofeed")]
#[command(about = "RSS podcast feeds for Czech Radio iRadio archives", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Accept invalid TLS certificates from the upstream archive
    #[arg(long)]
    insecure_tls: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let config = server::Config::new(cli.insecure_tls);

    server::run_server(addr, config).await
}
