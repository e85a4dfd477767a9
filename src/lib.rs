//! EMNIST/MNIST IDX → JSON 변환 라이브러리
//!
//! IDX 바이너리(헤더 + 픽셀/라벨 바이트 배열)를 읽어서
//! `[{"label": .., "ascii": .., "data": [..784개..]}, ...]` 형태의 JSON으로 내보낸다.

pub mod core;

pub use crate::core::{
    // 데이터 구조
    ImageRecord, IdxHeader, MappingTable,
    IMAGE_HEADER_BYTES, LABEL_HEADER_BYTES, PIXELS_PER_IMAGE, DEFAULT_MAX_COUNT,
    // 디코딩 / 내보내기
    RecordDecoder, DecodeOutcome, Truncation, StreamKind, JsonLayout,
    decode_records, load_mapping, parse_mapping, write_records,
    // 변환 파이프라인
    ConvertConfig, ConversionReport, DatasetSplit, convert,
};
