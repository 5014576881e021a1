//! Event System - 빌드 이벤트와 리스너 계약
//!
//! 호스트 빌드 엔진이 발생시키는 7가지 라이프사이클 이벤트와,
//! 이를 수신하는 리스너가 구현해야 하는 trait을 정의합니다.
//!
//! ## 사용법
//!
//! ```ignore
//! use multilog_foundation::event::{BuildEvent, BuildListener, Project};
//!
//! struct MyListener;
//!
//! impl BuildListener for MyListener {
//!     fn name(&self) -> &str { "my_listener" }
//!
//!     fn build_started(&mut self, event: &BuildEvent) -> Result<()> {
//!         println!("Build started: {}", event.project().name());
//!         Ok(())
//!     }
//!     // ...
//! }
//! ```

pub mod listener;
pub mod types;

pub use listener::{BuildListener, BuildLogger};

pub use types::{BuildEvent, EventKind, LogMessage, MessagePriority, Project};
