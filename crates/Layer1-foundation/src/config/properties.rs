//! Properties File - `key=value` 형식 설정 파일 읽기
//!
//! 지원 형식:
//! - `key=value`, `key:value`, `key value`
//! - `#` 또는 `!`로 시작하는 주석 줄
//! - 줄 끝 `\` 로 다음 줄에 값 이어쓰기
//!
//! 파일은 ISO-8859-1로 읽습니다. 모든 바이트가 문자 하나에 대응하므로
//! UTF-8이 아닌 바이트가 있어도 로드가 실패하지 않습니다.
//!
//! 그 외 이스케이프 시퀀스는 해석하지 않습니다.

use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;
use tracing::trace;

/// 파싱된 속성 집합
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// 빈 속성 집합
    pub fn new() -> Self {
        Self::default()
    }

    /// 파일에서 로드 (ISO-8859-1)
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let content: String = bytes.iter().map(|&b| b as char).collect();
        let props = Self::parse(&content);
        trace!(path = %path.display(), entries = props.len(), "Loaded properties file");
        Ok(props)
    }

    /// 문자열 파싱 (나중에 나온 키가 우선)
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        let mut lines = content.lines();

        while let Some(raw) = lines.next() {
            let line = raw.trim_start();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            // 이어쓰기 처리
            let mut logical = line.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some(next) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_entry(&logical);
            entries.insert(key.to_string(), value.to_string());
        }

        Self { entries }
    }

    /// 값 조회
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// 값 설정
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 홀수 개의 `\`로 끝나면 이어쓰기
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// 첫 번째 `=`, `:` 또는 공백에서 키/값 분리
fn split_entry(line: &str) -> (&str, &str) {
    let split_at = line.find(|c: char| c == '=' || c == ':' || c.is_whitespace());

    match split_at {
        Some(idx) => {
            let key = &line[..idx];
            let rest = line[idx..].trim_start();
            let value = rest
                .strip_prefix('=')
                .or_else(|| rest.strip_prefix(':'))
                .unwrap_or(rest)
                .trim_start();
            (key, value.trim_end())
        }
        None => (line, ""),
    }
}
