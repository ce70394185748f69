//! Test server harness.

use keyscore::gateway::{HandlerState, create_router_with_state};
use keyscore::{RelevanceScorer, StubClassifier};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT: Duration = Duration::from_secs(5);
const STARTUP_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct TestServer {
    pub addr: SocketAddr,
    pub classifier: Arc<StubClassifier>,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn wait_for_server_ready(addr: SocketAddr) -> std::io::Result<()> {
    let start = std::time::Instant::now();

    loop {
        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(e) if start.elapsed() > STARTUP_WAIT_TIMEOUT => return Err(e),
            Err(_) => tokio::time::sleep(STARTUP_POLL_INTERVAL).await,
        }
    }
}

/// Spawns the real router on an ephemeral port, backed by a stub classifier.
pub async fn spawn_test_server(logit: f32) -> std::io::Result<TestServer> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;

    let classifier = Arc::new(StubClassifier::new(logit));
    let scorer = RelevanceScorer::new(classifier.clone());
    let app = create_router_with_state(HandlerState::new(Arc::new(scorer)));

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server_handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
    });

    wait_for_server_ready(addr).await?;

    Ok(TestServer {
        addr,
        classifier,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
