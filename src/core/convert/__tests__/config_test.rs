//! ConvertConfig 프리셋 테스트

use crate::core::convert::{ConvertConfig, DatasetSplit};
use crate::core::export::JsonLayout;
use crate::core::types::DEFAULT_MAX_COUNT;
use std::path::{Path, PathBuf};

#[test]
fn balanced_train_경로() {
    let config = ConvertConfig::balanced_train(Path::new("/data/emnist"));

    assert_eq!(
        config.images_path,
        PathBuf::from("/data/emnist/emnist-balanced-train-images-idx3-ubyte")
    );
    assert_eq!(
        config.labels_path,
        PathBuf::from("/data/emnist/emnist-balanced-train-labels-idx1-ubyte")
    );
    assert_eq!(
        config.mapping_path,
        Some(PathBuf::from("/data/emnist/emnist-balanced-mapping.txt"))
    );
    assert_eq!(config.output_path, PathBuf::from("emnist_train_data.json"));
    assert_eq!(config.max_count, DEFAULT_MAX_COUNT);
}

#[test]
fn balanced_test_경로() {
    let config = ConvertConfig::balanced_test(Path::new("balanced"));

    assert_eq!(
        config.images_path,
        PathBuf::from("balanced/emnist-balanced-test-images-idx3-ubyte")
    );
    assert_eq!(config.output_path, PathBuf::from("emnist_test_data.json"));
}

#[test]
fn 빌더_메서드() {
    let config = ConvertConfig::new("img", "lbl", "out.json")
        .with_mapping("map.txt")
        .with_max_count(10)
        .with_layout(JsonLayout::Pretty)
        .with_progress(true);

    assert_eq!(config.mapping_path, Some(PathBuf::from("map.txt")));
    assert_eq!(config.max_count, 10);
    assert_eq!(config.layout, JsonLayout::Pretty);
    assert!(config.show_progress);
    assert_eq!(config.without_mapping().mapping_path, None);
}

#[test]
fn split_파싱() {
    assert_eq!("train".parse::<DatasetSplit>(), Ok(DatasetSplit::Train));
    assert_eq!("TEST".parse::<DatasetSplit>(), Ok(DatasetSplit::Test));
    assert!("valid".parse::<DatasetSplit>().is_err());
}
