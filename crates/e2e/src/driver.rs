//! WebDriver server management - spawning and readiness checking

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::error::{SuiteError, SuiteResult};

/// Handle to a running WebDriver server process (chromedriver/geckodriver).
pub struct DriverHandle {
    child: Child,
    pub webdriver_url: String,
    pub port: u16,
}

impl DriverHandle {
    /// Spawn the WebDriver server and wait for it to report ready.
    pub async fn spawn(config: DriverConfig) -> SuiteResult<Self> {
        let port = config.port.unwrap_or_else(find_free_port);
        let webdriver_url = format!("http://127.0.0.1:{}", port);

        info!("Spawning WebDriver server on port {}", port);

        let mut cmd = Command::new(&config.binary_path);
        cmd.arg(format!("--port={}", port));

        cmd.stdout(Stdio::null()).stderr(Stdio::null());

        let child = cmd.spawn().map_err(|e| {
            SuiteError::DriverStartup(format!(
                "failed to spawn {}: {}",
                config.binary_path.display(),
                e
            ))
        })?;

        let handle = DriverHandle {
            child,
            webdriver_url: webdriver_url.clone(),
            port,
        };

        handle.wait_for_ready(config.startup_timeout).await?;

        info!("WebDriver server ready at {}", webdriver_url);
        Ok(handle)
    }

    /// Poll the WebDriver /status endpoint until it reports ready.
    async fn wait_for_ready(&self, timeout_duration: Duration) -> SuiteResult<()> {
        let status_url = format!("{}/status", self.webdriver_url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;

        let start = std::time::Instant::now();
        let mut attempts = 0;

        while start.elapsed() < timeout_duration {
            attempts += 1;

            match client.get(&status_url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let body: serde_json::Value = resp.json().await?;
                    if body["value"]["ready"].as_bool().unwrap_or(false) {
                        return Ok(());
                    }
                    warn!("WebDriver server up but not ready yet");
                }
                Ok(resp) => {
                    warn!("Status check returned {}", resp.status());
                }
                Err(e) => {
                    if attempts == 1 {
                        info!("Waiting for WebDriver server to start...");
                    }
                    // Connection refused is expected while the server starts
                    if !e.is_connect() {
                        warn!("Status check error: {}", e);
                    }
                }
            }

            sleep(Duration::from_millis(100)).await;
        }

        Err(SuiteError::DriverHealthCheck(attempts))
    }

    /// Base URL new sessions should connect to.
    pub fn webdriver_url(&self) -> &str {
        &self.webdriver_url
    }

    /// Stop the WebDriver server.
    pub fn stop(&mut self) -> SuiteResult<()> {
        info!("Stopping WebDriver server (pid: {})", self.child.id());

        // Try graceful shutdown first
        #[cfg(unix)]
        {
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;

            let pid = Pid::from_raw(self.child.id() as i32);
            if kill(pid, Signal::SIGTERM).is_ok() {
                std::thread::sleep(Duration::from_millis(500));
            }
        }

        // Force kill if still running
        let _ = self.child.kill();
        let _ = self.child.wait();

        Ok(())
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Configuration for spawning a WebDriver server.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Path to the chromedriver/geckodriver binary.
    pub binary_path: PathBuf,

    /// Port to listen on (None = find free port).
    pub port: Option<u16>,

    /// Timeout for server startup.
    pub startup_timeout: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            binary_path: PathBuf::from("chromedriver"),
            port: None,
            startup_timeout: Duration::from_secs(30),
        }
    }
}

/// Find a free port to use
fn find_free_port() -> u16 {
    use std::net::TcpListener;

    TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind to find free port")
        .local_addr()
        .expect("Failed to get local addr")
        .port()
}
