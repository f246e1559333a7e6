//! Example CLI that accepts listen addresses, an upstream URL and a timeout.
//!
//! ```text
//! LISTEN_ADDRS=localhost:4000 cargo run --example listen -- \
//!     -H localhost:4000,localhost:5000 --upstream https://example.com --timeout 30s
//! ```

use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use flagutil::{Duration, ListenAddresses, Url, env_or_parse};

/// Command-line options for the listener.
#[derive(Parser, Debug)]
struct Cli {
    /// Comma-separated addresses to listen on; falls back to `LISTEN_ADDRS`.
    #[arg(short = 'H', long)]
    listen: Option<ListenAddresses>,
    /// Upstream service to forward to.
    #[arg(long)]
    upstream: Option<Url>,
    /// How long to wait for the upstream.
    #[arg(long, default_value = "10s")]
    timeout: Duration,
}

fn run(cli: &Cli, listen: &ListenAddresses, out: &mut impl Write) -> io::Result<()> {
    for addr in listen {
        writeln!(out, "listening on {addr} (host {}, port {})", addr.host(), addr.port())?;
    }
    writeln!(out, "all addresses: {listen}")?;
    let upstream = cli.upstream.as_ref().map_or_else(
        || "no upstream configured".to_owned(),
        |url| format!("forwarding to {url}"),
    );
    writeln!(out, "{upstream}")?;
    writeln!(out, "timeout: {}", cli.timeout)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let listen = cli
        .listen
        .clone()
        .map_or_else(|| env_or_parse("LISTEN_ADDRS", "localhost:4000"), Ok)?;
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    run(&cli, &listen, &mut lock)?;
    Ok(())
}
