//! multilog-core: Fan-out build logger
//!
//! Layer2 - 리스너 생성 및 이벤트 분배 레이어
//!
//! # 주요 모듈
//!
//! - `factory`: 설정 → 리스너 식별자 → 리스너 인스턴스 (조회 테이블 기반)
//! - `dispatcher`: `MultiLogger` - 등록 순서대로 모든 리스너에 이벤트 전달
//! - `listeners`: 빌트인 로거 (`DefaultLogger`, `JsonLogger`)
//!
//! # 사용 예시
//!
//! ```ignore
//! use multilog_core::{BuildEvent, BuildListener, BuildLogger, MultiLogger, Project, Sink};
//!
//! let mut logger = MultiLogger::new();
//! logger.set_output_sink(Sink::stdout());
//! logger.set_error_sink(Sink::stderr());
//!
//! let project = Project::new("app")
//!     .with_property("MultiLogger.logger", "multilog.DefaultLogger, multilog.JsonLogger");
//! let event = BuildEvent::new(project);
//!
//! logger.build_started(&event)?;
//! // ... target/task/message 이벤트 ...
//! logger.build_finished(&event)?;
//! ```

pub mod dispatcher;
pub mod factory;
pub mod listeners;

// Re-exports: Dispatcher
pub use dispatcher::{DispatchState, MultiLogger, RegisteredListener};

// Re-exports: Factory
pub use factory::{
    ConfigSource, ListenerConstructor, ListenerFactory, ListenerSpec, NoConfigSource,
    PropertiesFileSource, StaticConfigSource,
};

// Re-exports: Built-in listeners
pub use listeners::{DefaultLogger, JsonLogger, DEFAULT_LOGGER, JSON_LOGGER};

// Re-exports: Foundation
pub use multilog_foundation::{
    BuildEvent, BuildListener, BuildLogger, DispatchConfig, Error, EventKind, LogMessage,
    MessagePriority, Project, Result, Sink, LOGGER_PROPERTY, PROPERTIES_FILE, PROPERTIES_KEY,
};
