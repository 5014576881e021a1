//! JsonLogger - 이벤트마다 JSON 레코드 한 개를 기록
//!
//! 간결 출력이면 한 줄(JSON Lines), 아니면 pretty 형식으로 씁니다.
//! 실패 정보가 있는 이벤트는 에러 싱크로 보냅니다.

use chrono::{DateTime, Utc};
use multilog_foundation::{
    BuildEvent, BuildListener, BuildLogger, EventKind, MessagePriority, Result, Sink,
};
use serde::Serialize;

/// 직렬화용 레코드
#[derive(Debug, Serialize)]
struct EventRecord<'a> {
    event: &'static str,
    project: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    task: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<MessagePriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<&'a str>,
    at: DateTime<Utc>,
}

impl<'a> EventRecord<'a> {
    fn from_event(kind: EventKind, event: &'a BuildEvent) -> Self {
        let message = event.message();
        Self {
            event: kind.name(),
            project: event.project().name(),
            target: event.target(),
            task: event.task(),
            message: message.map(|m| m.text.as_str()),
            priority: message.map(|m| m.priority),
            failure: event.failure(),
            at: event.timestamp(),
        }
    }
}

/// JSON 로거
#[derive(Debug)]
pub struct JsonLogger {
    out: Sink,
    err: Sink,
    level: MessagePriority,
    compact: bool,
}

impl JsonLogger {
    pub fn new() -> Self {
        Self {
            out: Sink::stdout(),
            err: Sink::stderr(),
            level: MessagePriority::Info,
            compact: false,
        }
    }

    fn record(&self, kind: EventKind, event: &BuildEvent) -> Result<()> {
        let record = EventRecord::from_event(kind, event);
        let text = if self.compact {
            serde_json::to_string(&record)?
        } else {
            serde_json::to_string_pretty(&record)?
        };

        let sink = if event.failure().is_some() {
            &self.err
        } else {
            &self.out
        };
        sink.write_line(&text)?;
        Ok(())
    }
}

impl Default for JsonLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildListener for JsonLogger {
    fn name(&self) -> &str {
        "JsonLogger"
    }

    fn build_started(&mut self, event: &BuildEvent) -> Result<()> {
        self.record(EventKind::BuildStarted, event)
    }

    fn build_finished(&mut self, event: &BuildEvent) -> Result<()> {
        self.record(EventKind::BuildFinished, event)
    }

    fn target_started(&mut self, event: &BuildEvent) -> Result<()> {
        self.record(EventKind::TargetStarted, event)
    }

    fn target_finished(&mut self, event: &BuildEvent) -> Result<()> {
        self.record(EventKind::TargetFinished, event)
    }

    fn task_started(&mut self, event: &BuildEvent) -> Result<()> {
        self.record(EventKind::TaskStarted, event)
    }

    fn task_finished(&mut self, event: &BuildEvent) -> Result<()> {
        self.record(EventKind::TaskFinished, event)
    }

    fn message_logged(&mut self, event: &BuildEvent) -> Result<()> {
        match event.message() {
            Some(message) if !message.priority.is_reported_at(self.level) => Ok(()),
            _ => self.record(EventKind::MessageLogged, event),
        }
    }
}

impl BuildLogger for JsonLogger {
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

#[cfg(test)]
mod tests {
    use super::*;
    use multilog_foundation::Project;
    use serde_json::Value;

    fn compact_logger() -> (JsonLogger, Sink, Sink) {
        let out = Sink::buffer();
        let err = Sink::buffer();
        let mut logger = JsonLogger::new();
        logger.set_output_sink(out.clone());
        logger.set_error_sink(err.clone());
        logger.set_compact_output(true);
        (logger, out, err)
    }

    fn parse_lines(text: &str) -> Vec<Value> {
        text.lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_one_record_per_event() {
        let (mut logger, out, _) = compact_logger();
        let event = BuildEvent::new(Project::new("TestProject"))
            .with_target("compile")
            .with_task("javac");

        logger.build_started(&event).unwrap();
        logger.target_started(&event).unwrap();
        logger.task_started(&event).unwrap();
        logger.task_finished(&event).unwrap();
        logger.target_finished(&event).unwrap();
        logger.build_finished(&event).unwrap();

        let records = parse_lines(&out.captured().unwrap());
        let names: Vec<_> = records.iter().map(|r| r["event"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                "build.started",
                "target.started",
                "task.started",
                "task.finished",
                "target.finished",
                "build.finished",
            ]
        );
        assert_eq!(records[0]["project"], "TestProject");
        assert_eq!(records[2]["task"], "javac");
        assert!(records[0].get("message").is_none());
    }

    #[test]
    fn test_message_record_and_level_filter() {
        let (mut logger, out, _) = compact_logger();
        logger.set_message_output_level(MessagePriority::Warn);
        let project = std::sync::Arc::new(Project::new("p"));

        logger
            .message_logged(
                &BuildEvent::new(project.clone()).with_message("skip me", MessagePriority::Info),
            )
            .unwrap();
        logger
            .message_logged(
                &BuildEvent::new(project).with_message("keep me", MessagePriority::Warn),
            )
            .unwrap();

        let records = parse_lines(&out.captured().unwrap());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["message"], "keep me");
        assert_eq!(records[0]["priority"], "warn");
    }

    #[test]
    fn test_failure_goes_to_error_sink() {
        let (mut logger, out, err) = compact_logger();
        let event = BuildEvent::new(Project::new("p")).with_failure("boom");

        logger.build_finished(&event).unwrap();

        assert_eq!(out.captured().unwrap(), "");
        let records = parse_lines(&err.captured().unwrap());
        assert_eq!(records[0]["failure"], "boom");
    }

    #[test]
    fn test_pretty_output_when_not_compact() {
        let (mut logger, out, _) = compact_logger();
        logger.set_compact_output(false);

        logger
            .build_started(&BuildEvent::new(Project::new("p")))
            .unwrap();

        let text = out.captured().unwrap();
        assert!(text.lines().count() > 1);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["event"], "build.started");
    }
}
