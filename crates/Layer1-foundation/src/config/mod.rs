//! Config - 디스패치 설정 관리
//!
//! - `dispatch.rs` - DispatchConfig (싱크, 레벨, 간결 출력)
//! - `sink.rs` - 공유 출력 싱크
//! - `properties.rs` - `.properties` 설정 파일 읽기

mod dispatch;
mod properties;
mod sink;

pub use dispatch::DispatchConfig;
pub use properties::Properties;
pub use sink::Sink;

/// 리스너 목록을 담는 프로젝트 속성 이름
pub const LOGGER_PROPERTY: &str = "MultiLogger.logger";

/// 작업 디렉토리의 대체 설정 파일 이름
pub const PROPERTIES_FILE: &str = "MultiLogger.properties";

/// 대체 설정 파일의 키
pub const PROPERTIES_KEY: &str = "MultiLogger.listener";
