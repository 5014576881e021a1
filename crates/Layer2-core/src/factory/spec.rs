//! ListenerSpec - 리스너 구현 식별자

/// 설정에서 읽은 리스너 식별자 (쉼표로 분리 후 trim)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListenerSpec(String);

impl ListenerSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `"A,,B"` 처럼 비어 있는 항목인지 확인
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 쉼표로 구분된 설정 값을 순서대로 분리
    ///
    /// 빈 항목도 빈 spec으로 보존합니다.
    pub fn split_list(value: &str) -> Vec<ListenerSpec> {
        value.split(',').map(|id| ListenerSpec::new(id.trim())).collect()
    }
}

impl std::fmt::Display for ListenerSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListenerSpec {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for ListenerSpec {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ListenerSpec {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_entries() {
        let specs = ListenerSpec::split_list("acme.build.First, acme.build.Second ");
        assert_eq!(specs, vec!["acme.build.First", "acme.build.Second"]);
    }

    #[test]
    fn test_split_preserves_empty_entries() {
        let specs = ListenerSpec::split_list("A,,B,");
        assert_eq!(specs.len(), 4);
        assert_eq!(specs[0], "A");
        assert!(specs[1].is_empty());
        assert_eq!(specs[2], "B");
        assert!(specs[3].is_empty());
    }

    #[test]
    fn test_single_entry() {
        let specs = ListenerSpec::split_list("Only");
        assert_eq!(specs, vec![ListenerSpec::from("Only")]);
        assert_eq!(specs[0].to_string(), "Only");
    }
}
