//! DispatchConfig - 모든 리스너에 동일하게 적용되는 출력 설정

use super::sink::Sink;
use crate::event::{BuildLogger, MessagePriority};

/// 디스패치 설정
///
/// 빌드 시작 전에 설정되며, 등록되는 각 리스너에 복사되어 적용됩니다.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// 출력 싱크
    pub output: Sink,

    /// 에러 싱크
    pub error: Sink,

    /// 출력할 최소 메시지 중요도
    pub level: MessagePriority,

    /// 간결한 출력 (작업 이름 접두사 생략)
    pub compact: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            output: Sink::stdout(),
            error: Sink::stderr(),
            level: MessagePriority::Info,
            compact: false,
        }
    }
}

impl DispatchConfig {
    /// 기본 설정으로 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 출력 싱크 설정
    pub fn with_output(mut self, sink: Sink) -> Self {
        self.output = sink;
        self
    }

    /// 에러 싱크 설정
    pub fn with_error(mut self, sink: Sink) -> Self {
        self.error = sink;
        self
    }

    /// 메시지 레벨 설정
    pub fn with_level(mut self, level: MessagePriority) -> Self {
        self.level = level;
        self
    }

    /// 간결 출력 설정
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// 로거에 네 가지 설정을 적용
    pub fn apply_to(&self, logger: &mut dyn BuildLogger) {
        logger.set_output_sink(self.output.clone());
        logger.set_error_sink(self.error.clone());
        logger.set_message_output_level(self.level);
        logger.set_compact_output(self.compact);
    }
}
