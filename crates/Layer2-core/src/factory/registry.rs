//! Listener Factory - 설정 문자열을 리스너 인스턴스로 변환
//!
//! 식별자 → 생성자 조회 테이블을 사용합니다. 호출자가 테이블을 주입하므로
//! 테스트에서는 결정적인 대역(stand-in)으로 교체할 수 있습니다.

use super::source::{ConfigSource, NoConfigSource, PropertiesFileSource};
use super::spec::ListenerSpec;
use crate::listeners::{DefaultLogger, JsonLogger, DEFAULT_LOGGER, JSON_LOGGER};
use multilog_foundation::{BuildLogger, Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// 리스너 생성자
pub type ListenerConstructor = Arc<dyn Fn() -> Result<Box<dyn BuildLogger>> + Send + Sync>;

/// 리스너 팩토리
pub struct ListenerFactory {
    /// 식별자별 생성자
    constructors: HashMap<String, ListenerConstructor>,

    /// 프로젝트 속성이 없을 때 사용하는 대체 소스
    fallback: Box<dyn ConfigSource>,

    /// 어떤 소스에도 값이 없을 때 사용하는 식별자
    default_spec: ListenerSpec,
}

impl ListenerFactory {
    /// 빈 팩토리 생성 (대체 소스: 작업 디렉토리의 properties 파일)
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
            fallback: Box::new(PropertiesFileSource::in_working_dir()),
            default_spec: ListenerSpec::new(DEFAULT_LOGGER),
        }
    }

    /// 빌트인 리스너로 초기화된 팩토리 생성
    pub fn with_builtins() -> Self {
        let mut factory = Self::new();
        factory.register_builtins();
        factory
    }

    /// 빌트인 리스너 등록
    pub fn register_builtins(&mut self) {
        self.register_type::<DefaultLogger>(DEFAULT_LOGGER);
        self.register_type::<JsonLogger>(JSON_LOGGER);

        info!("Registered {} built-in listeners", self.constructors.len());
    }

    /// 생성자 등록 (같은 식별자는 교체)
    pub fn register<F>(&mut self, id: impl Into<String>, constructor: F)
    where
        F: Fn() -> Result<Box<dyn BuildLogger>> + Send + Sync + 'static,
    {
        let id = id.into();
        debug!("Registering listener constructor: {}", id);
        self.constructors.insert(id, Arc::new(constructor));
    }

    /// `Default` 구현 타입 등록
    pub fn register_type<L>(&mut self, id: impl Into<String>)
    where
        L: BuildLogger + Default + 'static,
    {
        self.register(id, || Ok(Box::new(L::default()) as Box<dyn BuildLogger>));
    }

    /// 생성자 등록 (빌더)
    pub fn with_listener<F>(mut self, id: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> Result<Box<dyn BuildLogger>> + Send + Sync + 'static,
    {
        self.register(id, constructor);
        self
    }

    /// 대체 설정 소스 교체
    pub fn with_fallback(mut self, source: impl ConfigSource + 'static) -> Self {
        self.fallback = Box::new(source);
        self
    }

    /// 대체 설정 소스 없이 사용
    pub fn without_fallback(self) -> Self {
        self.with_fallback(NoConfigSource)
    }

    /// 기본 식별자 교체
    pub fn with_default_spec(mut self, id: impl Into<String>) -> Self {
        self.default_spec = ListenerSpec::new(id);
        self
    }

    /// 식별자 등록 여부
    pub fn contains(&self, id: &str) -> bool {
        self.constructors.contains_key(id)
    }

    /// 등록된 식별자 목록 (정렬됨)
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn default_spec(&self) -> &ListenerSpec {
        &self.default_spec
    }

    /// 설정 값을 리스너 식별자 목록으로 변환
    ///
    /// 1. `config_value`가 있으면 쉼표로 분리
    /// 2. 없으면 대체 소스 조회 (없음은 에러가 아님)
    /// 3. 그래도 없으면 기본 식별자 하나
    pub fn resolve(&self, config_value: Option<&str>) -> Vec<ListenerSpec> {
        let value = match config_value {
            Some(value) => Some(value.to_string()),
            None => self.load_fallback(),
        };

        match value {
            Some(value) => ListenerSpec::split_list(&value),
            None => {
                debug!(spec = %self.default_spec, "No listener configuration, using default");
                vec![self.default_spec.clone()]
            }
        }
    }

    /// 식별자로 리스너 생성
    pub fn instantiate(&self, spec: &ListenerSpec) -> Result<Box<dyn BuildLogger>> {
        let constructor = self.constructors.get(spec.as_str()).ok_or_else(|| {
            Error::instantiation(spec.as_str(), "no listener registered under this identifier")
        })?;

        constructor().map_err(|e| match e {
            Error::Instantiation { .. } => e,
            other => Error::instantiation(spec.as_str(), other.to_string()),
        })
    }

    fn load_fallback(&self) -> Option<String> {
        match self.fallback.listener_config() {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(
                    source = %self.fallback.describe(),
                    reason = %e,
                    "Fallback listener configuration not found"
                );
                None
            }
        }
    }
}

impl Default for ListenerFactory {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for ListenerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerFactory")
            .field("identifiers", &self.identifiers())
            .field("fallback", &self.fallback.describe())
            .field("default_spec", &self.default_spec)
            .finish()
    }
}

// ============================================================================
// 테스트
// ============================================================================
