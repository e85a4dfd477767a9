//! # IDX 데이터셋 변환 핵심 모듈
//!
//! 라벨/이미지 바이너리 디코딩, 라벨 매핑, JSON 내보내기

pub mod types;
pub mod mapping;
pub mod decoder;
pub mod export;
pub mod convert;
pub mod format;

// 주요 타입들 재수출
pub use types::*;
pub use mapping::*;
pub use decoder::*;
pub use export::*;
pub use convert::*;
pub use format::format_elapsed;
