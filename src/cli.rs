use clap::Parser;

#[derive(Parser)]
#[command(name = "portcheck")]
#[command(about = "Scan a TCP port range and report which ports accept connections")]
pub struct Cli {
    /// IPv4 or IPv6 address to scan
    #[arg(default_value = "127.0.0.1")]
    pub host: String,

    /// First port of the range
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..))]
    pub start_port: u16,

    /// Last port of the range, inclusive
    #[arg(short, long, default_value = "65535", value_parser = clap::value_parser!(u16).range(1..))]
    pub end_port: u16,

    /// Per-connection timeout in milliseconds
    #[arg(short, long, default_value = "50")]
    pub timeout_ms: u64,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arguments() {
        let cli = Cli::try_parse_from(["portcheck"]).unwrap();
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.start_port, 1);
        assert_eq!(cli.end_port, 65535);
        assert_eq!(cli.timeout_ms, 50);
    }

    #[test]
    fn test_explicit_arguments_are_honored() {
        let cli = Cli::try_parse_from([
            "portcheck", "10.0.0.7", "-s", "20", "-e", "25", "-t", "250",
        ])
        .unwrap();
        assert_eq!(cli.host, "10.0.0.7");
        assert_eq!(cli.start_port, 20);
        assert_eq!(cli.end_port, 25);
        assert_eq!(cli.timeout_ms, 250);
    }

    #[test]
    fn test_port_zero_is_rejected() {
        assert!(Cli::try_parse_from(["portcheck", "--start-port", "0"]).is_err());
        assert!(Cli::try_parse_from(["portcheck", "--end-port", "0"]).is_err());
    }
}
