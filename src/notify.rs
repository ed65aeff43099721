use std::io::{self, Write};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncBufReadExt;

/// Port for user-facing dialogs.
///
/// Errors are modal: the user must acknowledge them before the form resumes.
/// Successes are toasts that dismiss themselves after `duration` without any
/// acknowledgment.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn error(&self, title: &str, message: &str);
    async fn success(&self, message: &str, duration: Duration);
}

/// Terminal rendering of the notification port.
pub struct ConsoleNotifier {
    acknowledge: bool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self { acknowledge: true }
    }

    /// Error dialogs print without waiting for Enter, so the flow can run
    /// unattended.
    pub fn without_acknowledge() -> Self {
        Self { acknowledge: false }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn error(&self, title: &str, message: &str) {
        println!();
        println!("❌ {}", title);
        println!("   {}", message);

        if self.acknowledge {
            print!("   [Press Enter to continue] ");
            io::stdout().flush().ok();

            let mut reader = tokio::io::BufReader::new(tokio::io::stdin());
            let mut line = String::new();
            reader.read_line(&mut line).await.ok();
        }
    }

    async fn success(&self, message: &str, duration: Duration) {
        print!("✅ {}", message);
        io::stdout().flush().ok();

        tokio::time::sleep(duration).await;

        // Erase the toast line once the timer expires
        print!("\r\x1b[2K");
        io::stdout().flush().ok();
    }
}
