//! Output Sink - 리스너 간에 공유되는 출력 대상

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// 실제 출력 대상
enum SinkTarget {
    Stdout,
    Stderr,
    /// 메모리 버퍼 (캡처/테스트용)
    Buffer(Vec<u8>),
    Writer(Box<dyn Write + Send>),
}

impl SinkTarget {
    fn label(&self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::Buffer(_) => "buffer",
            Self::Writer(_) => "writer",
        }
    }
}

/// 공유 출력 싱크
///
/// 복제해도 같은 대상을 가리킵니다. 쓰기마다 즉시 flush 합니다.
/// 싱크를 설정한 쪽이 소유권을 가지며, 리스너는 닫거나 다시 열지 않습니다.
#[derive(Clone)]
pub struct Sink {
    target: Arc<Mutex<SinkTarget>>,
}

impl Sink {
    fn from_target(target: SinkTarget) -> Self {
        Self {
            target: Arc::new(Mutex::new(target)),
        }
    }

    /// 프로세스 표준 출력
    pub fn stdout() -> Self {
        Self::from_target(SinkTarget::Stdout)
    }

    /// 프로세스 표준 에러
    pub fn stderr() -> Self {
        Self::from_target(SinkTarget::Stderr)
    }

    /// 메모리 버퍼
    pub fn buffer() -> Self {
        Self::from_target(SinkTarget::Buffer(Vec::new()))
    }

    /// 임의의 writer
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self::from_target(SinkTarget::Writer(Box::new(writer)))
    }

    /// 텍스트 그대로 쓰기
    pub fn write_str(&self, text: &str) -> io::Result<()> {
        let mut target = self.target.lock();
        match &mut *target {
            SinkTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()
            }
            SinkTarget::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(text.as_bytes())?;
                err.flush()
            }
            SinkTarget::Buffer(buf) => {
                buf.extend_from_slice(text.as_bytes());
                Ok(())
            }
            SinkTarget::Writer(writer) => {
                writer.write_all(text.as_bytes())?;
                writer.flush()
            }
        }
    }

    /// 한 줄 쓰기 (개행 추가)
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut text = String::with_capacity(line.len() + 1);
        text.push_str(line);
        text.push('\n');
        self.write_str(&text)
    }

    /// 버퍼 싱크에 쌓인 내용 (버퍼가 아니면 None)
    pub fn captured(&self) -> Option<String> {
        match &*self.target.lock() {
            SinkTarget::Buffer(buf) => Some(String::from_utf8_lossy(buf).into_owned()),
            _ => None,
        }
    }

    /// 두 싱크가 같은 대상을 공유하는지 확인
    pub fn ptr_eq(a: &Sink, b: &Sink) -> bool {
        Arc::ptr_eq(&a.target, &b.target)
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("target", &self.target.lock().label())
            .finish()
    }
}
