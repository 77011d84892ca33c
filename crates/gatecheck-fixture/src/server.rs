//! Serving the fixture - standalone and embedded in the test harness

use crate::routes;
use gatecheck_core::Result;
use tokio::sync::oneshot;
use tracing::{error, info};

/// Serve the fixture on an already-bound listener until the task is
/// cancelled or the connection loop fails
pub async fn serve(listener: tokio::net::TcpListener) -> Result<()> {
    axum::serve(listener, routes::router()).await?;
    Ok(())
}

/// In-process fixture handle for tests
///
/// Binds an ephemeral port and serves the fixture on a dedicated
/// runtime thread, so scenario-side blocking CDP calls cannot starve
/// it. Shuts down on drop.
pub struct FixtureServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl FixtureServer {
    /// Bind an ephemeral port and start serving
    pub fn start() -> Result<Self> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let thread = std::thread::Builder::new()
            .name("gatecheck-fixture".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    let listener = match tokio::net::TcpListener::from_std(listener) {
                        Ok(listener) => listener,
                        Err(e) => {
                            error!("Fixture listener setup failed: {}", e);
                            return;
                        }
                    };

                    let server = axum::serve(listener, routes::router())
                        .with_graceful_shutdown(async move {
                            let _ = shutdown_rx.await;
                        });

                    if let Err(e) = server.await {
                        error!("Fixture server failed: {}", e);
                    }
                });
            })?;

        info!("Login fixture running at {}", base_url);

        Ok(Self {
            base_url,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        })
    }

    /// Base URL of the running fixture
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stop the fixture and wait for the server thread to exit
    pub fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_serves_and_stops() {
        let mut server = FixtureServer::start().expect("start fixture");
        assert!(server.base_url().starts_with("http://127.0.0.1:"));

        // The port accepts connections while running
        let addr = server.base_url().trim_start_matches("http://").to_string();
        let stream = std::net::TcpStream::connect(&addr).expect("connect to fixture");
        // Close the connection first so graceful shutdown has nothing in flight
        drop(stream);

        server.stop();
    }

    #[test]
    fn test_two_fixtures_get_distinct_ports() {
        let a = FixtureServer::start().expect("start first");
        let b = FixtureServer::start().expect("start second");
        assert_ne!(a.base_url(), b.base_url());
    }
}
