//! MultiLogger - 여러 빌드 로거로 이벤트를 분배하는 디스패처
//!
//! 호스트는 로거를 하나만 등록할 수 있으므로, `MultiLogger`를 등록하면
//! 설정된 모든 로거가 같은 이벤트를 같은 순서로 받습니다.
//!
//! ## 상태
//!
//! ```text
//! Idle ──build_started──► Active ──(이벤트 전달)──► Active
//!        (리스너 생성/설정/등록)
//! ```
//!
//! 리스너 레지스트리는 첫 `build_started`에서 한 번만 채워집니다.

use crate::factory::{ListenerFactory, ListenerSpec};
use multilog_foundation::{
    BuildEvent, BuildListener, BuildLogger, DispatchConfig, EventKind, MessagePriority, Result,
    Sink, LOGGER_PROPERTY,
};
use tracing::{debug, info, trace, warn};

// ============================================================================
// RegisteredListener
// ============================================================================

/// 레지스트리에 등록된 리스너
pub struct RegisteredListener {
    spec: ListenerSpec,
    logger: Box<dyn BuildLogger>,
}

impl RegisteredListener {
    /// 생성에 사용된 식별자
    pub fn spec(&self) -> &ListenerSpec {
        &self.spec
    }

    pub fn logger(&self) -> &dyn BuildLogger {
        self.logger.as_ref()
    }

    pub fn name(&self) -> &str {
        self.logger.name()
    }
}

impl std::fmt::Debug for RegisteredListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredListener")
            .field("spec", &self.spec)
            .field("name", &self.logger.name())
            .finish()
    }
}

/// 디스패처 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    /// 아직 build_started를 받지 않음
    #[default]
    Idle,
    /// 레지스트리 구성 완료
    Active,
}

// ============================================================================
// MultiLogger
// ============================================================================

/// 팬아웃 디스패처
pub struct MultiLogger {
    factory: ListenerFactory,
    config: DispatchConfig,
    listeners: Vec<RegisteredListener>,
    rejected: Vec<ListenerSpec>,
    state: DispatchState,
}

impl MultiLogger {
    /// 빌트인 리스너 팩토리로 생성
    pub fn new() -> Self {
        Self::with_factory(ListenerFactory::with_builtins())
    }

    /// 커스텀 팩토리로 생성
    pub fn with_factory(factory: ListenerFactory) -> Self {
        Self {
            factory,
            config: DispatchConfig::default(),
            listeners: Vec::new(),
            rejected: Vec::new(),
            state: DispatchState::Idle,
        }
    }

    /// 설정 전체 지정 (빌더)
    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    /// 등록된 리스너 (등록 순서)
    pub fn listeners(&self) -> &[RegisteredListener] {
        &self.listeners
    }

    /// 생성에 실패한 식별자
    pub fn rejected(&self) -> &[ListenerSpec] {
        &self.rejected
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn factory(&self) -> &ListenerFactory {
        &self.factory
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == DispatchState::Active
    }

    /// 설정에서 리스너를 생성하여 레지스트리 구성
    fn register_listeners(&mut self, event: &BuildEvent) {
        let configured = event.project().property(LOGGER_PROPERTY);
        let specs = self.factory.resolve(configured);

        for spec in specs {
            if spec.is_empty() {
                debug!("Skipping empty listener identifier");
                continue;
            }

            match self.factory.instantiate(&spec) {
                Ok(mut logger) => {
                    self.config.apply_to(logger.as_mut());
                    debug!(spec = %spec, listener = logger.name(), "Registered build listener");
                    self.listeners.push(RegisteredListener { spec, logger });
                }
                Err(e) => {
                    warn!(
                        spec = %spec,
                        error = %e,
                        "Can't create instance of build logger '{}'",
                        spec
                    );
                    self.rejected.push(spec);
                }
            }
        }

        self.state = DispatchState::Active;
        info!(
            registered = self.listeners.len(),
            rejected = self.rejected.len(),
            "Build listeners ready"
        );
    }

    /// 모든 리스너에게 순서대로 전달
    ///
    /// 첫 번째 에러에서 멈추고 호출자에게 반환합니다.
    /// 이후 리스너는 이 이벤트를 받지 않습니다.
    fn forward<F>(&mut self, kind: EventKind, event: &BuildEvent, mut deliver: F) -> Result<()>
    where
        F: FnMut(&mut dyn BuildLogger, &BuildEvent) -> Result<()>,
    {
        for registered in &mut self.listeners {
            trace!(
                listener = registered.logger.name(),
                event = kind.name(),
                "Delivering event to listener"
            );
            deliver(registered.logger.as_mut(), event)?;
        }
        Ok(())
    }
}

impl Default for MultiLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MultiLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiLogger")
            .field("state", &self.state)
            .field("listeners", &self.listeners)
            .field("rejected", &self.rejected)
            .field("config", &self.config)
            .finish()
    }
}

impl BuildListener for MultiLogger {
    fn name(&self) -> &str {
        "MultiLogger"
    }

    fn build_started(&mut self, event: &BuildEvent) -> Result<()> {
        if self.state == DispatchState::Idle {
            self.register_listeners(event);
        }
        self.forward(EventKind::BuildStarted, event, |l, e| l.build_started(e))
    }

    fn build_finished(&mut self, event: &BuildEvent) -> Result<()> {
        self.forward(EventKind::BuildFinished, event, |l, e| l.build_finished(e))
    }

    fn target_started(&mut self, event: &BuildEvent) -> Result<()> {
        self.forward(EventKind::TargetStarted, event, |l, e| l.target_started(e))
    }

    fn target_finished(&mut self, event: &BuildEvent) -> Result<()> {
        self.forward(EventKind::TargetFinished, event, |l, e| l.target_finished(e))
    }

    fn task_started(&mut self, event: &BuildEvent) -> Result<()> {
        self.forward(EventKind::TaskStarted, event, |l, e| l.task_started(e))
    }

    fn task_finished(&mut self, event: &BuildEvent) -> Result<()> {
        self.forward(EventKind::TaskFinished, event, |l, e| l.task_finished(e))
    }

    fn message_logged(&mut self, event: &BuildEvent) -> Result<()> {
        self.forward(EventKind::MessageLogged, event, |l, e| l.message_logged(e))
    }
}

impl BuildLogger for MultiLogger {
    fn set_output_sink(&mut self, sink: Sink) {
        self.config.output = sink;
    }

    fn set_error_sink(&mut self, sink: Sink) {
        self.config.error = sink;
    }

    fn set_message_output_level(&mut self, level: MessagePriority) {
        self.config.level = level;
    }

    fn set_compact_output(&mut self, compact: bool) {
        self.config.compact = compact;
    }
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::{DefaultLogger, DEFAULT_LOGGER, JSON_LOGGER};
    use multilog_foundation::{Error, Project};

    fn project_event(loggers: Option<&str>) -> BuildEvent {
        let mut project = Project::new("TestProject");
        if let Some(loggers) = loggers {
            project.set_property(LOGGER_PROPERTY, loggers);
        }
        BuildEvent::new(project)
    }

    fn quiet_factory() -> ListenerFactory {
        ListenerFactory::with_builtins().without_fallback()
    }

    #[test]
    fn test_idle_until_build_started() {
        let mut logger = MultiLogger::with_factory(quiet_factory());
        assert_eq!(logger.state(), DispatchState::Idle);
        assert!(logger.listeners().is_empty());

        logger.set_output_sink(Sink::buffer());
        logger.build_started(&project_event(None)).unwrap();
        assert!(logger.is_active());
    }

    #[test]
    fn test_builtins_by_identifier() {
        let mut logger = MultiLogger::with_factory(quiet_factory())
            .with_config(DispatchConfig::new().with_output(Sink::buffer()));

        let loggers = format!("{}, {}", JSON_LOGGER, DEFAULT_LOGGER);
        logger.build_started(&project_event(Some(&loggers))).unwrap();

        let names: Vec<_> = logger.listeners().iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["JsonLogger", "DefaultLogger"]);
        assert_eq!(logger.listeners()[0].spec(), &JSON_LOGGER);
        assert_eq!(logger.listeners()[1].logger().name(), "DefaultLogger");
        assert!(logger.factory().contains(JSON_LOGGER));
    }

    #[test]
    fn test_empty_entries_skipped() {
        let mut logger = MultiLogger::with_factory(quiet_factory())
            .with_config(DispatchConfig::new().with_output(Sink::buffer()));

        let loggers = format!("{},,{},", DEFAULT_LOGGER, DEFAULT_LOGGER);
        logger.build_started(&project_event(Some(&loggers))).unwrap();

        assert_eq!(logger.listeners().len(), 2);
        assert!(logger.rejected().is_empty());
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let mut logger = MultiLogger::with_factory(quiet_factory())
            .with_config(DispatchConfig::new().with_output(Sink::buffer()));

        logger
            .build_started(&project_event(Some("Nope, multilog.DefaultLogger")))
            .unwrap();

        assert_eq!(logger.listeners().len(), 1);
        assert_eq!(logger.rejected(), &[ListenerSpec::new("Nope")]);
    }

    #[test]
    fn test_config_applied_to_builtin() {
        let out = Sink::buffer();
        let mut logger = MultiLogger::with_factory(quiet_factory());
        logger.set_output_sink(out.clone());
        logger.set_compact_output(true);

        let event = project_event(None);
        logger.build_started(&event).unwrap();
        logger
            .message_logged(
                &event
                    .clone()
                    .with_task("echo")
                    .with_message("hello", MessagePriority::Info),
            )
            .unwrap();

        assert_eq!(out.captured().unwrap(), "hello\n");
    }

    #[test]
    fn test_forwarding_error_propagates() {
        struct Failing;

        impl BuildListener for Failing {
            fn name(&self) -> &str {
                "Failing"
            }
            fn build_started(&mut self, _: &BuildEvent) -> Result<()> {
                Ok(())
            }
            fn build_finished(&mut self, _: &BuildEvent) -> Result<()> {
                Err(Error::listener("Failing", "disk full"))
            }
            fn target_started(&mut self, _: &BuildEvent) -> Result<()> {
                Ok(())
            }
            fn target_finished(&mut self, _: &BuildEvent) -> Result<()> {
                Ok(())
            }
            fn task_started(&mut self, _: &BuildEvent) -> Result<()> {
                Ok(())
            }
            fn task_finished(&mut self, _: &BuildEvent) -> Result<()> {
                Ok(())
            }
            fn message_logged(&mut self, _: &BuildEvent) -> Result<()> {
                Ok(())
            }
        }

        impl BuildLogger for Failing {
            fn set_output_sink(&mut self, _: Sink) {}
            fn set_error_sink(&mut self, _: Sink) {}
            fn set_message_output_level(&mut self, _: MessagePriority) {}
            fn set_compact_output(&mut self, _: bool) {}
        }

        let out = Sink::buffer();
        let factory = quiet_factory()
            .with_listener("Failing", || Ok(Box::new(Failing) as Box<dyn BuildLogger>));
        let mut logger = MultiLogger::with_factory(factory)
            .with_config(DispatchConfig::new().with_output(out.clone()));

        let event = project_event(Some("Failing, multilog.DefaultLogger"));
        logger.build_started(&event).unwrap();

        let err = logger.build_finished(&event).unwrap_err();
        assert!(matches!(err, Error::Listener { .. }));
        // 뒤쪽 DefaultLogger는 build_finished를 받지 못함
        assert_eq!(out.captured().unwrap(), "");
    }

    #[test]
    fn test_register_type_for_default_logger() {
        let mut factory = ListenerFactory::new().without_fallback();
        factory.register_type::<DefaultLogger>("console");

        let mut logger = MultiLogger::with_factory(factory.with_default_spec("console"));
        logger.set_output_sink(Sink::buffer());
        logger.build_started(&project_event(None)).unwrap();

        assert_eq!(logger.listeners().len(), 1);
        assert_eq!(logger.listeners()[0].spec(), &"console");
    }
}
