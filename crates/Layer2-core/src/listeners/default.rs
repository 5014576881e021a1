//! DefaultLogger - 콘솔용 기본 빌드 로거
//!
//! ## 출력 예시
//! ```text
//!
//! compile:
//!     [javac] Compiling 3 source files
//!
//! BUILD SUCCESSFUL
//! Total time: 2 seconds
//! ```

use chrono::{DateTime, Duration, Utc};
use multilog_foundation::{BuildEvent, BuildListener, BuildLogger, MessagePriority, Result, Sink};

/// 작업 이름 열 너비
const LEFT_COLUMN_SIZE: usize = 12;

/// 기본 로거
#[derive(Debug)]
pub struct DefaultLogger {
    out: Sink,
    err: Sink,
    level: MessagePriority,
    compact: bool,
    started_at: Option<DateTime<Utc>>,
}

impl DefaultLogger {
    pub fn new() -> Self {
        Self {
            out: Sink::stdout(),
            err: Sink::stderr(),
            level: MessagePriority::Info,
            compact: false,
            started_at: None,
        }
    }

    pub fn level(&self) -> MessagePriority {
        self.level
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    fn print(&self, text: &str, priority: MessagePriority) -> Result<()> {
        if !priority.is_reported_at(self.level) {
            return Ok(());
        }
        let sink = if priority == MessagePriority::Error {
            &self.err
        } else {
            &self.out
        };
        sink.write_line(text)?;
        Ok(())
    }

    /// `[task] ` 접두사 (오른쪽 정렬)
    fn task_prefix(&self, event: &BuildEvent) -> String {
        match event.task() {
            Some(task) if !self.compact => {
                let label = format!("[{}] ", task);
                format!("{:>width$}", label, width = LEFT_COLUMN_SIZE)
            }
            _ => String::new(),
        }
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildListener for DefaultLogger {
    fn name(&self) -> &str {
        "DefaultLogger"
    }

    fn build_started(&mut self, event: &BuildEvent) -> Result<()> {
        self.started_at = Some(event.timestamp());
        Ok(())
    }

    fn build_finished(&mut self, event: &BuildEvent) -> Result<()> {
        match event.failure() {
            None => self.print("\nBUILD SUCCESSFUL", MessagePriority::Warn)?,
            Some(failure) => {
                self.print(&format!("\nBUILD FAILED\n{}", failure), MessagePriority::Error)?
            }
        }

        if let Some(started_at) = self.started_at.take() {
            let elapsed = event.timestamp() - started_at;
            self.print(
                &format!("Total time: {}", format_elapsed(elapsed)),
                MessagePriority::Warn,
            )?;
        }
        Ok(())
    }

    fn target_started(&mut self, event: &BuildEvent) -> Result<()> {
        if let Some(target) = event.target() {
            self.print(&format!("\n{}:", target), MessagePriority::Info)?;
        }
        Ok(())
    }

    fn target_finished(&mut self, _event: &BuildEvent) -> Result<()> {
        Ok(())
    }

    fn task_started(&mut self, _event: &BuildEvent) -> Result<()> {
        Ok(())
    }

    fn task_finished(&mut self, _event: &BuildEvent) -> Result<()> {
        Ok(())
    }

    fn message_logged(&mut self, event: &BuildEvent) -> Result<()> {
        let Some(message) = event.message() else {
            return Ok(());
        };

        let prefix = self.task_prefix(event);
        let text = message
            .text
            .lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n");

        self.print(&text, message.priority)
    }
}

impl BuildLogger for DefaultLogger {
    fn set_output_sink(&mut self, sink: Sink) {
        self.out = sink;
    }

    fn set_error_sink(&mut self, sink: Sink) {
        self.err = sink;
    }

    fn set_message_output_level(&mut self, level: MessagePriority) {
        self.level = level;
    }

    fn set_compact_output(&mut self, compact: bool) {
        self.compact = compact;
    }
}

/// 경과 시간 표시 ("1 minute 5 seconds")
fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    let minutes = total / 60;
    let seconds = total % 60;

    let unit = |n: i64, word: &str| {
        if n == 1 {
            format!("{} {}", n, word)
        } else {
            format!("{} {}s", n, word)
        }
    };

    if minutes > 0 {
        format!("{} {}", unit(minutes, "minute"), unit(seconds, "second"))
    } else {
        unit(seconds, "second")
    }
}
