//! Listener Contract - 빌드 리스너/로거 trait
//!
//! 모든 플러그형 리스너가 구현해야 하는 기능 계약입니다.

use super::types::{BuildEvent, MessagePriority};
use crate::config::Sink;
use crate::error::Result;

/// 빌드 라이프사이클 리스너
///
/// 호스트는 한 번에 하나의 콜백만 호출합니다 (동기, 단일 스레드).
/// 에러를 반환하면 호스트(또는 디스패처의 호출자)로 그대로 전파됩니다.
pub trait BuildListener: Send {
    /// 리스너 이름 (진단용)
    fn name(&self) -> &str;

    fn build_started(&mut self, event: &BuildEvent) -> Result<()>;

    fn build_finished(&mut self, event: &BuildEvent) -> Result<()>;

    fn target_started(&mut self, event: &BuildEvent) -> Result<()>;

    fn target_finished(&mut self, event: &BuildEvent) -> Result<()>;

    fn task_started(&mut self, event: &BuildEvent) -> Result<()>;

    fn task_finished(&mut self, event: &BuildEvent) -> Result<()>;

    fn message_logged(&mut self, event: &BuildEvent) -> Result<()>;
}

/// 출력 설정을 받는 빌드 로거
///
/// 등록 시점에 setter가 한 번씩 호출됩니다.
pub trait BuildLogger: BuildListener {
    fn set_output_sink(&mut self, sink: Sink);

    fn set_error_sink(&mut self, sink: Sink);

    /// 이 레벨보다 덜 중요한 메시지는 출력하지 않음
    fn set_message_output_level(&mut self, level: MessagePriority);

    /// 작업 이름 접두사 없는 간결한 출력
    fn set_compact_output(&mut self, compact: bool);
}
