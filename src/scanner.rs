use std::net::SocketAddr;
use std::time::Instant;

use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::error::ScanError;
use crate::types::{ScanEvent, ScanOutcome, ScanRequest, ScanSummary};

/// Callbacks a scan reports into. Both are invoked from the scan worker;
/// implementations hand results off to wherever the caller consumes them.
pub trait ScanObserver: Send {
    /// Called once per port that accepted a connection, in ascending port order.
    fn port_open(&mut self, port: u16);

    /// Called exactly once when scanning stops, including when the range
    /// was rejected up front.
    fn scan_complete(&mut self);
}

/// Forwards the callbacks as events. A send failure means the receiving side
/// has gone away; results are dropped since stopping the scan is the
/// cancellation token's job, not the channel's.
impl ScanObserver for mpsc::UnboundedSender<ScanEvent> {
    fn port_open(&mut self, port: u16) {
        let _ = self.send(ScanEvent::PortOpen(port));
    }

    fn scan_complete(&mut self) {
        let _ = self.send(ScanEvent::Complete);
    }
}

pub struct PortScanner {
    request: ScanRequest,
}

impl PortScanner {
    pub fn new(request: ScanRequest) -> Self {
        Self { request }
    }

    /// Probes every port in the request's range in ascending order, reporting
    /// each open port and exactly one completion to the observer. The token is
    /// checked before each attempt; a signal lets the in-flight attempt finish
    /// (or time out) and then stops the loop, so cancellation latency is at
    /// most one connection timeout.
    pub async fn scan<S: ScanObserver>(
        &self,
        cancel: &CancellationToken,
        observer: &mut S,
    ) -> Result<ScanSummary, ScanError> {
        let ScanRequest {
            host,
            start_port,
            end_port,
            ..
        } = self.request;

        if start_port > end_port {
            log::warn!(
                "[scanner] range_rejected: host={} start_port={} end_port={}",
                host, start_port, end_port
            );
            observer.scan_complete();
            return Err(ScanError::InvalidRange {
                start: start_port,
                end: end_port,
            });
        }

        log::debug!(
            "[scanner] scan_started: host={} ports={}..={} timeout={}ms",
            host, start_port, end_port, self.request.timeout.as_millis()
        );

        let started = Instant::now();
        let mut scanned = 0u32;
        let mut open = 0u32;
        let mut cancelled = false;

        for port in self.request.ports() {
            if cancel.is_cancelled() {
                log::debug!(
                    "[scanner] scan_cancelled: host={} next_port={} scanned={}",
                    host, port, scanned
                );
                cancelled = true;
                break;
            }

            let outcome = self.probe(port).await;
            scanned += 1;
            if outcome.reachable {
                open += 1;
                log::debug!("[scanner] port_open: host={} port={}", host, port);
                observer.port_open(port);
            }
        }

        observer.scan_complete();

        let summary = ScanSummary {
            scanned,
            open,
            cancelled,
            elapsed: started.elapsed(),
        };
        log::info!(
            "[scanner] scan_complete: host={} scanned={} open={} cancelled={} duration={}ms",
            host, summary.scanned, summary.open, summary.cancelled, summary.elapsed.as_millis()
        );

        Ok(summary)
    }

    /// One connection attempt with a bounded deadline. The socket (or the
    /// pending connect) is dropped before returning, on every path.
    async fn probe(&self, port: u16) -> ScanOutcome {
        let addr = SocketAddr::new(self.request.host, port);
        log::trace!("[scanner] probing: addr={}", addr);

        let reachable = match timeout(self.request.timeout, TcpStream::connect(addr)).await {
            Ok(Ok(_stream)) => true, // Accepted; dropping releases it, no data exchanged
            Ok(Err(_)) => false,     // Refused or unreachable
            Err(_) => false,         // Deadline elapsed
        };

        ScanOutcome { port, reachable }
    }
}

/// Runs a scan on its own worker task so the calling task is never blocked.
pub fn spawn_scan<S>(
    request: ScanRequest,
    cancel: CancellationToken,
    mut observer: S,
) -> JoinHandle<Result<ScanSummary, ScanError>>
where
    S: ScanObserver + 'static,
{
    tokio::spawn(async move { PortScanner::new(request).scan(&cancel, &mut observer).await })
}
