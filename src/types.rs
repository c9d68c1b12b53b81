use std::net::IpAddr;
use std::ops::RangeInclusive;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub host: IpAddr,                // Validated upstream; the scanner never parses strings
    pub start_port: u16,
    pub end_port: u16,
    pub timeout: Duration,           // Per-connection deadline
}

impl ScanRequest {
    pub fn new(host: IpAddr, start_port: u16, end_port: u16, timeout: Duration) -> Self {
        Self {
            host,
            start_port,
            end_port,
            timeout,
        }
    }

    /// Ports to probe, ascending, inclusive on both ends.
    pub fn ports(&self) -> RangeInclusive<u16> {
        self.start_port..=self.end_port
    }

    /// How many ports the range covers (0 for an inverted range).
    pub fn port_count(&self) -> u32 {
        if self.start_port > self.end_port {
            return 0;
        }
        u32::from(self.end_port) - u32::from(self.start_port) + 1
    }
}

/// Outcome of probing a single port. Only reachable outcomes are surfaced to
/// the observer; refused, timed-out, and unreachable all land in "not open".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    pub port: u16,
    pub reachable: bool,
}

/// Channel form of the observer callbacks, for callers that consume scan
/// results on a different task than the worker producing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    /// A port accepted a connection within the deadline.
    PortOpen(u16),
    /// The scan stopped, by exhaustion or cancellation. Sent exactly once.
    Complete,
}

#[derive(Debug, Clone, Copy)]
pub struct ScanSummary {
    pub scanned: u32,                // Ports actually probed before the loop exited
    pub open: u32,
    pub cancelled: bool,
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn request(start: u16, end: u16) -> ScanRequest {
        ScanRequest::new(
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            start,
            end,
            Duration::from_millis(50),
        )
    }

    #[test]
    fn test_ports_are_inclusive_and_ascending() {
        let ports: Vec<u16> = request(20, 25).ports().collect();
        assert_eq!(ports, vec![20, 21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_single_port_range() {
        let ports: Vec<u16> = request(443, 443).ports().collect();
        assert_eq!(ports, vec![443]);
    }

    #[test]
    fn test_range_reaches_the_last_port() {
        // 65535 is a valid end; the iterator must terminate there.
        let ports: Vec<u16> = request(65534, 65535).ports().collect();
        assert_eq!(ports, vec![65534, 65535]);
    }

    #[test]
    fn test_port_count() {
        assert_eq!(request(1, 65535).port_count(), 65535);
        assert_eq!(request(80, 80).port_count(), 1);
        assert_eq!(request(100, 50).port_count(), 0);
    }

    #[test]
    fn test_request_accepts_ipv6_hosts() {
        let req = ScanRequest::new(
            IpAddr::V6(Ipv6Addr::LOCALHOST),
            1,
            1024,
            Duration::from_millis(50),
        );
        assert!(req.host.is_ipv6());
        assert_eq!(req.port_count(), 1024);
    }
}
