//! IDX 바이너리 → JSON 변환 파이프라인
//!
//! 1. 매핑 로드 (선택)
//! 2. 라벨/이미지 헤더 제거 후 레코드 디코딩 (바이트가 모자라면 조기 종료)
//! 3. 레코드 전체를 JSON 배열로 저장
//!
//! 매핑 조회 실패는 출력 파일을 만들기 전에 에러로 끝난다.

use crate::core::convert::config::ConvertConfig;
use crate::core::decoder::{decode_records, Truncation};
use crate::core::export::write_records;
use crate::core::format::format_elapsed;
use crate::core::mapping::load_mapping;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// 변환 결과 요약
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub requested: usize,
    pub decoded: usize,
    pub truncation: Option<Truncation>,
    /// 매핑을 적용했는지
    pub mapped: bool,
    pub output_path: PathBuf,
    pub output_bytes: u64,
    pub elapsed: Duration,
}

impl ConversionReport {
    pub fn truncated_at(&self) -> Option<usize> {
        self.truncation.map(|t| t.index)
    }

    pub fn print_summary(&self) {
        println!("\n✅ 변환 완료!");
        println!("   - 요청 레코드: {}", self.requested);
        println!("   - 변환 레코드: {}", self.decoded);
        if let Some(t) = self.truncation {
            println!("   - 조기 종료: 이미지 {}에서 {} 스트림 종료", t.index, t.stream);
        }
        println!("   - 매핑 적용: {}", if self.mapped { "예" } else { "아니오" });
        println!(
            "   - 출력: {} ({:.2} MB)",
            self.output_path.display(),
            self.output_bytes as f64 / 1_048_576.0
        );
        println!("   - 소요 시간: {}", format_elapsed(self.elapsed));
    }
}

/// 설정대로 변환을 한 번 수행
pub fn convert(config: &ConvertConfig) -> Result<ConversionReport> {
    let start = Instant::now();

    let mapping = match &config.mapping_path {
        Some(path) => Some(load_mapping(path)?),
        None => None,
    };

    log::info!("바이너리 픽셀/라벨 파일 열기");
    let labels = File::open(&config.labels_path).with_context(|| {
        format!("라벨 파일을 열 수 없습니다: {}", config.labels_path.display())
    })?;
    let images = File::open(&config.images_path).with_context(|| {
        format!("이미지 파일을 열 수 없습니다: {}", config.images_path.display())
    })?;

    let progress = if config.show_progress {
        let pb = ProgressBar::new(config.max_count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  [{bar:40.cyan/blue}] {pos}/{len} 이미지 변환 중 ({elapsed_precise})")
                .context("진행 표시 템플릿 오류")?
                .progress_chars("██░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcome = decode_records(
        BufReader::new(labels),
        BufReader::new(images),
        mapping.as_ref(),
        config.max_count,
        &progress,
    )?;
    progress.finish_and_clear();

    let output_bytes = write_records(&config.output_path, &outcome.records, config.layout)?;

    let report = ConversionReport {
        requested: config.max_count,
        decoded: outcome.records.len(),
        truncation: outcome.truncation,
        mapped: mapping.is_some(),
        output_path: config.output_path.clone(),
        output_bytes,
        elapsed: start.elapsed(),
    };
    log::info!(
        "완료: {}/{}개 레코드, {}",
        report.decoded,
        report.requested,
        format_elapsed(report.elapsed)
    );
    Ok(report)
}
