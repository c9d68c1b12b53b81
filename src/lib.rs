pub mod cli;
pub mod error;
pub mod logging;
pub mod scanner;
pub mod session;
pub mod types;

// Re-export key types and functions at the crate root
pub use error::ScanError;
pub use logging::init_logging;
pub use scanner::{PortScanner, ScanObserver, spawn_scan};
pub use session::{ScanSession, SessionRegistry};
pub use types::{ScanEvent, ScanOutcome, ScanRequest, ScanSummary};
