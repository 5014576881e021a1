//! Event Types - 빌드 라이프사이클 이벤트 정의
//!
//! 호스트 빌드 엔진이 생성하여 리스너에게 전달하는 이벤트 페이로드입니다.
//! 디스패처는 내용을 변경하지 않고 그대로 전달합니다.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// ============================================================================
// Project
// ============================================================================

/// 빌드 실행 컨텍스트 (프로젝트 이름, 기준 경로, 속성)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    name: String,
    base_dir: Option<PathBuf>,
    properties: HashMap<String, String>,
}

impl Project {
    /// 새 프로젝트 생성
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// 기준 디렉토리 설정
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// 속성 설정 (빌더)
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(key, value);
        self
    }

    /// 속성 설정
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// 속성 조회
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }
}

// ============================================================================
// Message Priority
// ============================================================================

/// 메시지 중요도
///
/// 값이 작을수록 중요합니다. 리스너는 `priority <= threshold`인 메시지만 출력합니다.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MessagePriority {
    Error = 0,
    Warn = 1,
    #[default]
    Info = 2,
    Verbose = 3,
    Debug = 4,
}

impl MessagePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
        }
    }

    /// 숫자 레벨 (0 = error .. 4 = debug)
    pub fn level(&self) -> u8 {
        *self as u8
    }

    /// 주어진 임계값에서 출력 대상인지 확인
    pub fn is_reported_at(&self, threshold: MessagePriority) -> bool {
        *self <= threshold
    }
}

impl TryFrom<u8> for MessagePriority {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            0 => Ok(Self::Error),
            1 => Ok(Self::Warn),
            2 => Ok(Self::Info),
            3 => Ok(Self::Verbose),
            4 => Ok(Self::Debug),
            other => Err(Error::InvalidInput(format!(
                "message priority must be 0..=4, got {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for MessagePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Event Kind
// ============================================================================

/// 라이프사이클 이벤트 종류 (7가지)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    BuildStarted,
    BuildFinished,
    TargetStarted,
    TargetFinished,
    TaskStarted,
    TaskFinished,
    MessageLogged,
}

impl EventKind {
    /// 전체 종류 (디스패치 순서와 무관)
    pub const ALL: [EventKind; 7] = [
        Self::BuildStarted,
        Self::BuildFinished,
        Self::TargetStarted,
        Self::TargetFinished,
        Self::TaskStarted,
        Self::TaskFinished,
        Self::MessageLogged,
    ];

    /// 점으로 구분된 이벤트 이름
    pub fn name(&self) -> &'static str {
        match self {
            Self::BuildStarted => "build.started",
            Self::BuildFinished => "build.finished",
            Self::TargetStarted => "target.started",
            Self::TargetFinished => "target.finished",
            Self::TaskStarted => "task.started",
            Self::TaskFinished => "task.finished",
            Self::MessageLogged => "message.logged",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Build Event
// ============================================================================

/// 로그 메시지
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub text: String,
    pub priority: MessagePriority,
}

/// 빌드 이벤트
///
/// 호스트가 생성하며, 모든 리스너에게 동일한 참조로 전달됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildEvent {
    project: Arc<Project>,
    target: Option<String>,
    task: Option<String>,
    message: Option<LogMessage>,
    failure: Option<String>,
    at: DateTime<Utc>,
}

impl BuildEvent {
    /// 프로젝트 수준 이벤트 생성
    pub fn new(project: impl Into<Arc<Project>>) -> Self {
        Self {
            project: project.into(),
            target: None,
            task: None,
            message: None,
            failure: None,
            at: Utc::now(),
        }
    }

    /// 타겟 이름 지정
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// 태스크 이름 지정
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// 로그 메시지 첨부
    pub fn with_message(mut self, text: impl Into<String>, priority: MessagePriority) -> Self {
        self.message = Some(LogMessage {
            text: text.into(),
            priority,
        });
        self
    }

    /// 실패 정보 첨부 (build/target/task finished)
    pub fn with_failure(mut self, failure: impl Into<String>) -> Self {
        self.failure = Some(failure.into());
        self
    }

    /// 발생 시각 지정
    pub fn at(mut self, at: DateTime<Utc>) -> Self {
        self.at = at;
        self
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn task(&self) -> Option<&str> {
        self.task.as_deref()
    }

    pub fn message(&self) -> Option<&LogMessage> {
        self.message.as_ref()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.at
    }
}

// ============================================================================
// 테스트
// ============================================================================
