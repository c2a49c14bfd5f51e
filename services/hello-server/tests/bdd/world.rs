//! BDD test world for the hello server

use std::net::SocketAddr;

use cucumber::World;
use hello_server::{Config, HelloServer};
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default, World)]
pub struct HelloServerWorld {
    pub config: Option<Config>,
    pub static_dir: Option<TempDir>,

    pub addr: Option<SocketAddr>,
    pub cancel: Option<CancellationToken>,
    pub server_task: Option<JoinHandle<hello_server::Result<()>>>,

    pub last_status: Option<u16>,
    pub last_body: Option<String>,
    pub last_allow_origin: Option<String>,
}

impl HelloServerWorld {
    pub fn config_mut(&mut self) -> &mut Config {
        self.config.get_or_insert_with(|| {
            let mut config = Config::default();
            config.server.host = "127.0.0.1".to_string();
            config.server.port = 0;
            config.static_files.enabled = false;
            config
        })
    }

    /// Start the server on an ephemeral port if it is not running yet
    pub async fn ensure_started(&mut self) -> SocketAddr {
        if let Some(addr) = self.addr {
            return addr;
        }

        let config = self.config_mut().clone();
        let server = HelloServer::new(config)
            .bind()
            .await
            .expect("failed to bind hello server");
        let addr = server.local_addr().expect("no local address");

        let cancel = CancellationToken::new();
        let cancel_for_server = cancel.clone();
        self.server_task = Some(tokio::spawn(async move {
            server.run(cancel_for_server).await
        }));
        self.cancel = Some(cancel);
        self.addr = Some(addr);
        addr
    }
}

impl Drop for HelloServerWorld {
    fn drop(&mut self) {
        if let Some(cancel) = &self.cancel {
            cancel.cancel();
        }
    }
}
