use crate::domain::ports::OrderChannel;
use crate::domain::request::ExternalRequest;
use crate::error::Result;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Opens the request URI with a host program such as `xdg-open` or `open`.
///
/// The program is spawned and left running; its exit status is never collected here.
#[derive(Debug, Clone)]
pub struct LauncherChannel {
    program: String,
}

impl LauncherChannel {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl OrderChannel for LauncherChannel {
    async fn open(&self, request: &ExternalRequest) -> Result<()> {
        let child = Command::new(&self.program)
            .arg(request.uri.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        tracing::info!(program = %self.program, pid = ?child.id(), "order handed to launcher");
        Ok(())
    }
}

/// Prints the request URI on stdout for the caller to open.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutChannel;

#[async_trait]
impl OrderChannel for StdoutChannel {
    async fn open(&self, request: &ExternalRequest) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("{}\n", request.uri).as_bytes())
            .await?;
        stdout.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::{Contact, MessagingChannel};
    use crate::error::OrderError;

    fn request() -> ExternalRequest {
        let channel = MessagingChannel::parse("https://wa.me").unwrap();
        let contact = Contact::new("6285607492894").unwrap();
        ExternalRequest::new(&channel, contact, "Es Teh x1".to_string()).unwrap()
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_launcher_spawns_without_waiting() {
        let launcher = LauncherChannel::new("true");
        assert!(launcher.open(&request()).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_launcher_reports_io_error() {
        let launcher = LauncherChannel::new("warung-no-such-launcher");
        let result = launcher.open(&request()).await;
        assert!(matches!(result, Err(OrderError::IoError(_))));
    }
}
