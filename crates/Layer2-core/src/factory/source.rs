//! Config Source - 대체 리스너 설정 소스
//!
//! 프로젝트 속성에 리스너 목록이 없을 때 사용됩니다.
//! 값이 없으면 `Error::ConfigurationAbsent`를 반환하며, 이는 치명적이지 않습니다.

use multilog_foundation::{Error, Properties, Result, PROPERTIES_FILE, PROPERTIES_KEY};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 리스너 설정 값을 제공하는 소스
pub trait ConfigSource: Send + Sync {
    /// 소스 설명 (진단용)
    fn describe(&self) -> String;

    /// 쉼표로 구분된 리스너 식별자 목록
    fn listener_config(&self) -> Result<String>;
}

// ============================================================================
// PropertiesFileSource
// ============================================================================

/// `.properties` 파일 소스
///
/// 파일이 없거나 읽을 수 없으면 "없음"으로 처리합니다.
#[derive(Debug, Clone)]
pub struct PropertiesFileSource {
    path: PathBuf,
    key: String,
}

impl PropertiesFileSource {
    /// 경로와 키 지정
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// 현재 작업 디렉토리의 `MultiLogger.properties`
    pub fn in_working_dir() -> Self {
        Self::new(PROPERTIES_FILE, PROPERTIES_KEY)
    }

    /// 지정 디렉토리의 `MultiLogger.properties`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PROPERTIES_FILE), PROPERTIES_KEY)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for PropertiesFileSource {
    fn describe(&self) -> String {
        format!("{} [{}]", self.path.display(), self.key)
    }

    fn listener_config(&self) -> Result<String> {
        let props = Properties::load(&self.path).map_err(|e| {
            debug!(path = %self.path.display(), error = %e, "Properties file not readable");
            Error::ConfigurationAbsent(format!("{} not readable", self.path.display()))
        })?;

        let value = props.get(&self.key).ok_or_else(|| {
            Error::ConfigurationAbsent(format!(
                "{} has no key '{}'",
                self.path.display(),
                self.key
            ))
        })?;

        info!(path = %self.path.display(), "Found logger classes: {}", value);
        Ok(value.to_string())
    }
}

// ============================================================================
// 기타 소스
// ============================================================================

/// 항상 비어 있는 소스
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConfigSource;

impl ConfigSource for NoConfigSource {
    fn describe(&self) -> String {
        "none".to_string()
    }

    fn listener_config(&self) -> Result<String> {
        Err(Error::ConfigurationAbsent("no fallback source".to_string()))
    }
}

/// 고정 값 소스 (임베딩/테스트용)
#[derive(Debug, Clone)]
pub struct StaticConfigSource(String);

impl StaticConfigSource {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl ConfigSource for StaticConfigSource {
    fn describe(&self) -> String {
        format!("static '{}'", self.0)
    }

    fn listener_config(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_properties_source_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(PROPERTIES_FILE),
            "# listeners\nMultiLogger.listener=A, B\n",
        )
        .unwrap();

        let source = PropertiesFileSource::in_dir(dir.path());
        assert_eq!(source.listener_config().unwrap(), "A, B");
    }

    #[test]
    fn test_properties_source_non_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(PROPERTIES_FILE),
            b"# caf\xe9\nMultiLogger.listener=multilog.JsonLogger\n",
        )
        .unwrap();

        let source = PropertiesFileSource::in_dir(dir.path());
        assert_eq!(source.listener_config().unwrap(), "multilog.JsonLogger");
    }

    #[test]
    fn test_properties_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = PropertiesFileSource::in_dir(dir.path());

        let err = source.listener_config().unwrap_err();
        assert!(matches!(err, Error::ConfigurationAbsent(_)));
        assert!(err.is_non_fatal());
    }

    #[test]
    fn test_properties_source_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROPERTIES_FILE), "other.key=A\n").unwrap();

        let source = PropertiesFileSource::in_dir(dir.path());
        assert!(matches!(
            source.listener_config(),
            Err(Error::ConfigurationAbsent(_))
        ));
    }

    #[test]
    fn test_working_dir_default() {
        let source = PropertiesFileSource::in_working_dir();
        assert_eq!(source.path(), Path::new("MultiLogger.properties"));
        assert_eq!(source.describe(), "MultiLogger.properties [MultiLogger.listener]");
    }

    #[test]
    fn test_static_and_empty_sources() {
        assert_eq!(StaticConfigSource::new("X").listener_config().unwrap(), "X");
        assert!(NoConfigSource.listener_config().is_err());
    }
}
