//! Built-in listeners
//!
//! 팩토리의 `with_builtins()`로 아래 식별자에 등록됩니다.

mod default;
mod json;

pub use default::DefaultLogger;
pub use json::JsonLogger;

/// 기본 로거 식별자 (설정이 전혀 없을 때 사용)
pub const DEFAULT_LOGGER: &str = "multilog.DefaultLogger";

/// JSON 로거 식별자
pub const JSON_LOGGER: &str = "multilog.JsonLogger";
