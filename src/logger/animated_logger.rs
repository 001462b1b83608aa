use std::io::Write;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL_MS: u64 = 120;

/// Stderr spinner shown while the fallback loop runs in the CLI.
///
/// The line is `<frame> <message> (<detail>)`. The detail names the candidate
/// model in flight and can be swapped from any task while the spinner runs.
pub struct AnimatedLogger {
    message: String,
    detail: watch::Sender<String>,
    stop_sender: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: String) -> Self {
        let (detail, _) = watch::channel(String::new());

        Self {
            message,
            detail,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let detail_rx = self.detail.subscribe();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(Duration::from_millis(FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let line = render_line(&message, &detail_rx.borrow(), frame);
                        eprint!("\r\x1b[K{}", line);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    /// Shown in parentheses from the next frame on.
    pub fn set_detail(&self, detail: impl Into<String>) {
        self.detail.send_replace(detail.into());
    }

    pub fn detail(&self) -> String {
        self.detail.borrow().clone()
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        eprintln!("\r\x1b[K✅  {}", final_message);
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        eprintln!("\r\x1b[K❌ {}", error_message);
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }
}

fn render_line(message: &str, detail: &str, frame: usize) -> String {
    let spinner = FRAMES[frame % FRAMES.len()];
    if detail.is_empty() {
        format!("{} {}", spinner, message)
    } else {
        format!("{} {} ({})", spinner, message, detail)
    }
}
