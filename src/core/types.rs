//! # 데이터셋 포맷 상수와 레코드 타입
//!
//! IDX 바이너리 레이아웃(EMNIST/MNIST)의 고정 크기와
//! JSON으로 내보내는 이미지 레코드 구조

use serde::Serialize;

/// 이미지 파일 헤더 크기 (magic, 개수, 행, 열)
pub const IMAGE_HEADER_BYTES: usize = 16;
/// 라벨 파일 헤더 크기 (magic, 개수)
pub const LABEL_HEADER_BYTES: usize = 8;
pub const IMAGE_ROWS: usize = 28;
pub const IMAGE_COLS: usize = 28;
/// 이미지 한 장의 픽셀 수 (28×28, row-major)
pub const PIXELS_PER_IMAGE: usize = IMAGE_ROWS * IMAGE_COLS;
/// EMNIST balanced train 세트 크기
pub const DEFAULT_MAX_COUNT: usize = 112_800;

/// 디코딩된 이미지 한 장
///
/// 직렬화 키 순서는 `label`, `ascii`(있을 때만), `data` 이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    pub label: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascii: Option<char>,
    pub data: Vec<u8>,
}

/// 버려지는 헤더를 로그용으로만 해석한 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdxHeader {
    /// 첫 4바이트 (big-endian)
    pub magic: u32,
    /// 나머지 차원 워드들 (라벨: [개수], 이미지: [개수, 행, 열])
    pub dims: Vec<u32>,
    /// 헤더 크기만큼 바이트를 다 읽었는지
    pub complete: bool,
}

impl IdxHeader {
    /// 헤더가 선언한 아이템 개수
    pub fn declared_count(&self) -> Option<u32> {
        if self.complete {
            self.dims.first().copied()
        } else {
            None
        }
    }
}

