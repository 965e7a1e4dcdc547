use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant};

const FRAME_INTERVAL_MS: u64 = 150;

/// Fixed list of status lines shown one after another, wrapping around.
#[derive(Debug, Clone)]
pub struct StatusCycle {
    statuses: Vec<String>,
    index: usize,
}

impl StatusCycle {
    pub fn new(statuses: &[&str]) -> Self {
        Self {
            statuses: statuses.iter().map(|s| s.to_string()).collect(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.statuses.get(self.index).map(String::as_str)
    }

    pub fn advance(&mut self) -> Option<&str> {
        if self.statuses.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.statuses.len();
        self.current()
    }
}

pub struct AnimatedLogger {
    message: String,
    animation_chars: Vec<&'static str>,
    statuses: StatusCycle,
    status_interval: Duration,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: String) -> Self {
        let animation_chars = vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

        Self {
            message,
            animation_chars,
            statuses: StatusCycle::new(&[]),
            status_interval: Duration::from_millis(FRAME_INTERVAL_MS),
            stop_sender: None,
            task_handle: None,
        }
    }

    /// Rotates through `statuses` after the message every `interval`.
    pub fn with_statuses(mut self, statuses: &[&str], interval: Duration) -> Self {
        self.statuses = StatusCycle::new(statuses);
        self.status_interval = interval;
        self
    }

    pub fn is_running(&self) -> bool {
        self.task_handle.is_some()
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();
        let animation_chars = self.animation_chars.clone();
        let mut statuses = self.statuses.clone();
        let status_interval = self.status_interval;

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
            let mut last_switch = Instant::now();

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if last_switch.elapsed() >= status_interval {
                            statuses.advance();
                            last_switch = Instant::now();
                        }
                        let status = statuses.current().unwrap_or_default();
                        eprint!("\r\x1b[K{} {} {}", animation_chars[frame], message, status);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % animation_chars.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K✅  {}\n", final_message);
        let _ = std::io::stderr().flush();
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K❌ {}\n", error_message);
        let _ = std::io::stderr().flush();
    }
}
