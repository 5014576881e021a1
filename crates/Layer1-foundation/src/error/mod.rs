//! Error types for multilog
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// multilog 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    /// 설정 소스에 값이 없음 (치명적이지 않음, 다음 소스로 넘어감)
    #[error("Configuration absent: {0}")]
    ConfigurationAbsent(String),

    // ========================================================================
    // 리스너 생성 관련
    // ========================================================================
    /// 리스너 식별자를 찾을 수 없거나 생성 실패
    #[error("Can't create instance of build logger '{spec}': {reason}")]
    Instantiation { spec: String, reason: String },

    // ========================================================================
    // 이벤트 전달 관련
    // ========================================================================
    /// 리스너가 이벤트 처리 중 실패
    #[error("Listener '{listener}' failed: {message}")]
    Listener { listener: String, message: String },

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 빌드를 중단시키지 않는 에러인지 확인
    pub fn is_non_fatal(&self) -> bool {
        matches!(
            self,
            Error::ConfigurationAbsent(_) | Error::Instantiation { .. }
        )
    }

    /// 리스너 생성 에러 생성 헬퍼
    pub fn instantiation(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Instantiation {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// 리스너 실행 에러 생성 헬퍼
    pub fn listener(listener: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Listener {
            listener: listener.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_fatal_kinds() {
        assert!(Error::ConfigurationAbsent("MultiLogger.properties".into()).is_non_fatal());
        assert!(Error::instantiation("Bad", "unknown").is_non_fatal());
        assert!(!Error::listener("json", "boom").is_non_fatal());
        assert!(!Error::InvalidInput("x".into()).is_non_fatal());
    }

    #[test]
    fn test_instantiation_message_names_spec() {
        let err = Error::instantiation("acme.build.Missing", "no listener registered");
        assert_eq!(
            err.to_string(),
            "Can't create instance of build logger 'acme.build.Missing': no listener registered"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
