//! 레코드 컬렉션을 JSON 배열 하나로 내보낸다

use crate::core::types::ImageRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON 출력 형태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonLayout {
    /// 공백 없는 한 줄
    #[default]
    Compact,
    /// 들여쓰기 (사람이 볼 때)
    Pretty,
}

/// 레코드 전체를 `path`에 쓴다 (기존 파일은 덮어씀). 쓴 바이트 수 반환
pub fn write_records(path: &Path, records: &[ImageRecord], layout: JsonLayout) -> Result<u64> {
    let file = File::create(path)
        .with_context(|| format!("출력 파일을 만들 수 없습니다: {}", path.display()))?;
    let mut writer = CountingWriter::new(BufWriter::new(file));

    match layout {
        JsonLayout::Compact => serde_json::to_writer(&mut writer, records),
        JsonLayout::Pretty => serde_json::to_writer_pretty(&mut writer, records),
    }
    .with_context(|| format!("JSON 직렬화 실패: {}", path.display()))?;

    writer
        .flush()
        .with_context(|| format!("출력 파일 쓰기 실패: {}", path.display()))?;

    log::info!("{}개 레코드 저장: {}", records.len(), path.display());
    Ok(writer.written)
}

/// 메모리 안에서 JSON 문자열로 직렬화
pub fn records_to_string(records: &[ImageRecord], layout: JsonLayout) -> Result<String> {
    let json = match layout {
        JsonLayout::Compact => serde_json::to_string(records),
        JsonLayout::Pretty => serde_json::to_string_pretty(records),
    }
    .context("JSON 직렬화 실패")?;
    Ok(json)
}

struct CountingWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
