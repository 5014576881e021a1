//! # Listener Factory
//!
//! 설정 문자열 → 리스너 식별자 → 리스너 인스턴스
//!
//! ## 설정 우선순위
//!
//! 1. 프로젝트 속성 `MultiLogger.logger` (호출자가 전달)
//! 2. 대체 소스 (기본: 작업 디렉토리의 `MultiLogger.properties`, 키 `MultiLogger.listener`)
//! 3. 기본 리스너 `multilog.DefaultLogger`
//!
//! ## 사용 예시
//!
//! ```ignore
//! use multilog_core::factory::{ListenerFactory, ListenerSpec};
//!
//! let factory = ListenerFactory::with_builtins()
//!     .with_listener("my.Logger", || Ok(Box::new(MyLogger::default())));
//!
//! for spec in factory.resolve(Some("my.Logger, multilog.JsonLogger")) {
//!     let logger = factory.instantiate(&spec)?;
//! }
//! ```

mod registry;
mod source;
mod spec;

pub use registry::{ListenerConstructor, ListenerFactory};
pub use source::{ConfigSource, NoConfigSource, PropertiesFileSource, StaticConfigSource};
pub use spec::ListenerSpec;
