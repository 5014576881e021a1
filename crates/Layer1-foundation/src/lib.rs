//! # multilog-foundation
//!
//! Foundation layer for multilog:
//! - Event: 빌드 라이프사이클 이벤트와 리스너 계약 (BuildListener, BuildLogger)
//! - Config: 디스패치 설정, 공유 출력 싱크, properties 파일
//! - Error: 중앙 에러 타입
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Host build engine (단일 로거만 등록 가능)               │
//! │                     │                                   │
//! │                     ▼                                   │
//! │            MultiLogger (Layer2-core)                    │
//! │          ┌──────────┼──────────┐                        │
//! │          ▼          ▼          ▼                        │
//! │     BuildLogger BuildLogger BuildLogger                 │
//! │      (Default)    (Json)     (Custom)                   │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod event;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Event (이벤트 및 리스너 계약)
// ============================================================================
pub use event::{
    // Types
    BuildEvent,
    EventKind,
    LogMessage,
    MessagePriority,
    Project,
    // Traits
    BuildListener,
    BuildLogger,
};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{
    DispatchConfig, Properties, Sink, LOGGER_PROPERTY, PROPERTIES_FILE, PROPERTIES_KEY,
};
