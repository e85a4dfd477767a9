//! 라벨/이미지 스트림 쌍을 레코드로 디코딩
//!
//! 각 레코드마다 라벨 1바이트 → (매핑 조회) → 픽셀 784바이트 순서로 읽는다.
//! 어느 스트림이든 중간에 끝나면 거기서 멈추고, 미완성 레코드는 버린다.

use crate::core::decoder::stream::{read_full, skip_header};
use crate::core::mapping::MappingTable;
use crate::core::types::{
    IdxHeader, ImageRecord, IMAGE_HEADER_BYTES, LABEL_HEADER_BYTES, PIXELS_PER_IMAGE,
};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::fmt;
use std::io::Read;

/// 먼저 바닥난 스트림
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Labels,
    Images,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Labels => write!(f, "labels"),
            StreamKind::Images => write!(f, "images"),
        }
    }
}

/// 조기 종료 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    /// 읽지 못한 이미지 인덱스 (= 디코딩된 레코드 수)
    pub index: usize,
    pub stream: StreamKind,
}

/// 라벨 스트림과 이미지 스트림을 소유하는 디코더
pub struct RecordDecoder<L: Read, I: Read> {
    labels: L,
    images: I,
    next_index: usize,
    truncation: Option<Truncation>,
}

impl<L: Read, I: Read> RecordDecoder<L, I> {
    pub fn new(labels: L, images: I) -> Self {
        Self {
            labels,
            images,
            next_index: 0,
            truncation: None,
        }
    }

    /// 두 스트림의 헤더를 버린다 (라벨 8바이트, 이미지 16바이트)
    pub fn skip_headers(&mut self) -> Result<(IdxHeader, IdxHeader)> {
        let label_header = skip_header(&mut self.labels, LABEL_HEADER_BYTES)
            .context("라벨 헤더 읽기 실패")?;
        let image_header = skip_header(&mut self.images, IMAGE_HEADER_BYTES)
            .context("이미지 헤더 읽기 실패")?;
        Ok((label_header, image_header))
    }

    /// 다음 레코드. 스트림이 끝났으면 `None`
    ///
    /// 매핑이 있으면 라벨 조회 실패는 에러로 올라간다.
    pub fn next_record(&mut self, mapping: Option<&MappingTable>) -> Result<Option<ImageRecord>> {
        if self.truncation.is_some() {
            return Ok(None);
        }
        let index = self.next_index;

        let mut label_buf = [0u8; 1];
        let read = read_full(&mut self.labels, &mut label_buf)
            .with_context(|| format!("이미지 {}의 라벨 읽기 실패", index))?;
        if read == 0 {
            return Ok(self.stop(index, StreamKind::Labels));
        }
        let label = label_buf[0];

        let ascii = match mapping {
            Some(table) => Some(
                table
                    .resolve(label)
                    .with_context(|| format!("이미지 {}의 라벨을 문자로 변환할 수 없습니다", index))?,
            ),
            None => None,
        };

        let mut data = vec![0u8; PIXELS_PER_IMAGE];
        let read = read_full(&mut self.images, &mut data)
            .with_context(|| format!("이미지 {}의 픽셀 읽기 실패", index))?;
        if read < PIXELS_PER_IMAGE {
            return Ok(self.stop(index, StreamKind::Images));
        }

        self.next_index += 1;
        Ok(Some(ImageRecord { label, ascii, data }))
    }

    fn stop(&mut self, index: usize, stream: StreamKind) -> Option<ImageRecord> {
        log::warn!("이미지 {}에서 바이트가 부족합니다 ({} 스트림 종료)", index, stream);
        self.truncation = Some(Truncation { index, stream });
        None
    }

    /// 지금까지 디코딩된 레코드 수
    pub fn decoded(&self) -> usize {
        self.next_index
    }

    pub fn truncation(&self) -> Option<Truncation> {
        self.truncation
    }

    /// 스트림 반환 (남은 바이트 확인용)
    pub fn into_inner(self) -> (L, I) {
        (self.labels, self.images)
    }
}

/// 디코딩 결과
#[derive(Debug)]
pub struct DecodeOutcome {
    pub records: Vec<ImageRecord>,
    pub truncation: Option<Truncation>,
    pub label_header: IdxHeader,
    pub image_header: IdxHeader,
}

impl DecodeOutcome {
    pub fn truncated_at(&self) -> Option<usize> {
        self.truncation.map(|t| t.index)
    }
}

/// 헤더를 버리고 최대 `max_count`개 레코드를 디코딩
pub fn decode_records<L: Read, I: Read>(
    labels: L,
    images: I,
    mapping: Option<&MappingTable>,
    max_count: usize,
    progress: &ProgressBar,
) -> Result<DecodeOutcome> {
    let mut decoder = RecordDecoder::new(labels, images);

    let (label_header, image_header) = decoder.skip_headers()?;
    log::info!("바이너리 헤더 제거 완료");
    log::debug!(
        "라벨 헤더: magic={:#010x} dims={:?}, 이미지 헤더: magic={:#010x} dims={:?}",
        label_header.magic,
        label_header.dims,
        image_header.magic,
        image_header.dims
    );
    for (name, header) in [("라벨", &label_header), ("이미지", &image_header)] {
        if !header.complete {
            log::warn!("{} 헤더가 잘렸습니다", name);
        } else if let Some(count) = header.declared_count() {
            if (count as usize) < max_count {
                log::warn!(
                    "{} 헤더 선언 개수 {} < 요청 개수 {}",
                    name,
                    count,
                    max_count
                );
            }
        }
    }

    let mut records = Vec::new();
    while records.len() < max_count {
        match decoder.next_record(mapping)? {
            Some(record) => {
                records.push(record);
                progress.inc(1);
            }
            None => break,
        }
    }

    Ok(DecodeOutcome {
        records,
        truncation: decoder.truncation(),
        label_header,
        image_header,
    })
}
