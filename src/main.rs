use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use eyre::{Result, WrapErr};
use tokio::sync::mpsc;

use portcheck::{ScanEvent, ScanRequest, SessionRegistry, spawn_scan};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first
    if let Err(e) = portcheck::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let args = portcheck::cli::parse();

    let host: IpAddr = args
        .host
        .parse()
        .wrap_err_with(|| format!("'{}' is not a valid IPv4 or IPv6 address", args.host))?;
    let request = ScanRequest::new(
        host,
        args.start_port,
        args.end_port,
        Duration::from_millis(args.timeout_ms),
    );
    let total = request.port_count();

    let registry = Arc::new(SessionRegistry::new());
    let session = registry.open();

    // Ctrl+C cancels the session; the worker stops at its next per-port checkpoint.
    {
        let registry = Arc::clone(&registry);
        let id = session.id();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("Interrupted, stopping after the in-flight probe");
                registry.cancel(&id);
            }
        });
    }

    println!(
        "Scanning {} ports {}..={} (timeout {}ms)",
        host, args.start_port, args.end_port, args.timeout_ms
    );

    let (tx, mut rx) = mpsc::unbounded_channel();
    let worker = spawn_scan(request, session.cancel_token(), tx);

    while let Some(event) = rx.recv().await {
        match event {
            ScanEvent::PortOpen(port) => println!("{} up", port),
            ScanEvent::Complete => break,
        }
    }

    let result = worker.await?;
    registry.close(&session.id());
    let summary = result?;

    if summary.cancelled {
        println!(
            "Scan cancelled after {} of {} ports, {} open ({:.2?})",
            summary.scanned, total, summary.open, summary.elapsed
        );
    } else {
        println!(
            "Scan complete: {} ports scanned, {} open ({:.2?})",
            summary.scanned, summary.open, summary.elapsed
        );
    }

    Ok(())
}
