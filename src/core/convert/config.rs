//! 변환 설정

use crate::core::export::JsonLayout;
use crate::core::types::DEFAULT_MAX_COUNT;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// EMNIST balanced 세트 분할
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSplit {
    Train,
    Test,
}

impl DatasetSplit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetSplit::Train => "train",
            DatasetSplit::Test => "test",
        }
    }
}

impl fmt::Display for DatasetSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetSplit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "train" => Ok(DatasetSplit::Train),
            "test" => Ok(DatasetSplit::Test),
            other => Err(format!("알 수 없는 split: {} (train 또는 test)", other)),
        }
    }
}

/// IDX → JSON 변환 한 번에 필요한 설정
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub images_path: PathBuf,
    pub labels_path: PathBuf,
    /// 있으면 레코드마다 `ascii` 필드가 붙는다
    pub mapping_path: Option<PathBuf>,
    pub output_path: PathBuf,
    /// 디코딩할 최대 레코드 수
    pub max_count: usize,
    pub layout: JsonLayout,
    pub show_progress: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::balanced(Path::new("."), DatasetSplit::Train)
    }
}

impl ConvertConfig {
    /// 경로만 지정한 기본 설정 (매핑 없음)
    pub fn new(
        images_path: impl Into<PathBuf>,
        labels_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            images_path: images_path.into(),
            labels_path: labels_path.into(),
            mapping_path: None,
            output_path: output_path.into(),
            max_count: DEFAULT_MAX_COUNT,
            layout: JsonLayout::Compact,
            show_progress: false,
        }
    }

    /// `dir` 아래 EMNIST balanced 파일들을 쓰는 설정
    pub fn balanced(dir: &Path, split: DatasetSplit) -> Self {
        let prefix = format!("emnist-balanced-{}", split);
        Self {
            mapping_path: Some(dir.join("emnist-balanced-mapping.txt")),
            ..Self::new(
                dir.join(format!("{}-images-idx3-ubyte", prefix)),
                dir.join(format!("{}-labels-idx1-ubyte", prefix)),
                format!("emnist_{}_data.json", split),
            )
        }
    }

    pub fn balanced_train(dir: &Path) -> Self {
        Self::balanced(dir, DatasetSplit::Train)
    }

    pub fn balanced_test(dir: &Path) -> Self {
        Self::balanced(dir, DatasetSplit::Test)
    }

    pub fn with_mapping(mut self, mapping_path: impl Into<PathBuf>) -> Self {
        self.mapping_path = Some(mapping_path.into());
        self
    }

    pub fn without_mapping(mut self) -> Self {
        self.mapping_path = None;
        self
    }

    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn with_layout(mut self, layout: JsonLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}
