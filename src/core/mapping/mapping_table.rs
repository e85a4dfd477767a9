//! 라벨 코드 → 표시 문자 매핑 테이블
//!
//! 매핑 파일은 줄마다 `<라벨코드> <유니코드 코드포인트>` 형식이다.
//! 예: `10 65` → 라벨 10은 'A'

use anyhow::{anyhow, bail, Context, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 읽기 전용 라벨 매핑
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: BTreeMap<i64, char>,
}

impl MappingTable {
    pub fn get(&self, label: u8) -> Option<char> {
        self.entries.get(&i64::from(label)).copied()
    }

    /// 라벨을 문자로 변환, 없는 라벨은 에러
    pub fn resolve(&self, label: u8) -> Result<char> {
        self.get(label)
            .ok_or_else(|| anyhow!("매핑 테이블에 라벨 {}이(가) 없습니다", label))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 라벨 오름차순 순회
    pub fn iter(&self) -> impl Iterator<Item = (i64, char)> + '_ {
        self.entries.iter().map(|(&label, &ch)| (label, ch))
    }
}

/// 매핑 파일 로드
pub fn load_mapping(path: &Path) -> Result<MappingTable> {
    let file = File::open(path)
        .with_context(|| format!("매핑 파일을 열 수 없습니다: {}", path.display()))?;
    let table = parse_mapping(BufReader::new(file))
        .with_context(|| format!("매핑 파일 파싱 실패: {}", path.display()))?;
    log::info!("매핑 로드 완료: {}개 라벨 ({})", table.len(), path.display());
    Ok(table)
}

/// reader에서 매핑 파싱 (빈 줄은 건너뜀)
///
/// 같은 라벨이 여러 번 나오면 마지막 줄이 이긴다.
/// 라벨 바이트 범위(0-255) 밖의 코드도 테이블에는 들어가지만 조회되지는 않는다.
pub fn parse_mapping<R: BufRead>(reader: R) -> Result<MappingTable> {
    let mut entries = BTreeMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("{}번째 줄 읽기 실패", line_no))?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 2 {
            bail!(
                "{}번째 줄: 토큰 2개가 필요하지만 {}개입니다: {:?}",
                line_no,
                tokens.len(),
                line
            );
        }

        let label: i64 = tokens[0]
            .parse()
            .with_context(|| format!("{}번째 줄: 라벨 코드가 정수가 아닙니다: {:?}", line_no, tokens[0]))?;
        let code_point: u32 = tokens[1]
            .parse()
            .with_context(|| format!("{}번째 줄: 코드포인트가 정수가 아닙니다: {:?}", line_no, tokens[1]))?;
        let ch = char::from_u32(code_point)
            .ok_or_else(|| anyhow!("{}번째 줄: 유효하지 않은 코드포인트 {}", line_no, code_point))?;

        if let Some(previous) = entries.insert(label, ch) {
            log::debug!("{}번째 줄: 라벨 {} 재정의 ({:?} → {:?})", line_no, label, previous, ch);
        }
    }

    Ok(MappingTable { entries })
}
