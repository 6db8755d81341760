//! Configuration for the static SPA server.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "server", about = "Serve the built RAG chat web client")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "RAG_WEB_ADDR", default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// Directory holding index.html and the compiled assets
    #[arg(long, env = "RAG_WEB_DIST", default_value = "dist")]
    pub dist_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["server"]).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "server",
            "--addr",
            "0.0.0.0:3000",
            "--dist-dir",
            "/srv/rag-web",
        ])
        .unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/rag-web"));
    }

    #[test]
    fn test_rejects_bad_addr() {
        assert!(ServerConfig::try_parse_from(["server", "--addr", "not-an-addr"]).is_err());
    }
}
