//! MappingTable 파싱 테스트

use crate::core::mapping::{load_mapping, parse_mapping};
use std::io::{Cursor, Write};

#[test]
fn 두_줄_매핑_파싱() {
    let table = parse_mapping(Cursor::new("0 48\n1 97\n")).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0), Some('0'));
    assert_eq!(table.get(1), Some('a'));
    assert_eq!(table.get(2), None);
}

#[test]
fn 빈_줄과_여분_공백_허용() {
    let table = parse_mapping(Cursor::new("\n  5\t65  \n\n10 66\r\n")).unwrap();

    assert_eq!(table.get(5), Some('A'));
    assert_eq!(table.get(10), Some('B'));
    assert_eq!(table.iter().collect::<Vec<_>>(), vec![(5, 'A'), (10, 'B')]);
}

#[test]
fn 토큰_개수가_틀리면_실패() {
    let err = parse_mapping(Cursor::new("0 48\n1\n")).unwrap_err();
    assert!(err.to_string().contains("2번째 줄"), "{}", err);

    assert!(parse_mapping(Cursor::new("0 48 7\n")).is_err());
}

#[test]
fn 정수가_아니면_실패() {
    assert!(parse_mapping(Cursor::new("a 48\n")).is_err());
    assert!(parse_mapping(Cursor::new("0 x\n")).is_err());
    assert!(parse_mapping(Cursor::new("1.5 48\n")).is_err());
}

#[test]
fn 바이트_범위_밖_라벨도_허용() {
    let table = parse_mapping(Cursor::new("0 48\n300 65\n-1 66\n")).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.get(0), Some('0'));
    assert_eq!(
        table.iter().collect::<Vec<_>>(),
        vec![(-1, 'B'), (0, '0'), (300, 'A')]
    );
    // 300은 라벨 바이트 44(300 mod 256)로 취급되지 않는다
    assert!(table.resolve(44).is_err());
}

#[test]
fn 서로게이트_코드포인트는_실패() {
    let err = parse_mapping(Cursor::new("0 55296\n")).unwrap_err();
    assert!(err.to_string().contains("55296"), "{}", err);
}

#[test]
fn 중복_라벨은_마지막_줄이_이김() {
    let table = parse_mapping(Cursor::new("3 65\n3 66\n")).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(3), Some('B'));
}

#[test]
fn 없는_라벨_resolve_실패() {
    let table = parse_mapping(Cursor::new("5 65\n")).unwrap();

    assert_eq!(table.resolve(5).unwrap(), 'A');
    let err = table.resolve(6).unwrap_err();
    assert!(err.to_string().contains('6'), "{}", err);
}

#[test]
fn 파일에서_로드() {
    let mut file = tempfile::NamedTempFile::new().expect("임시 파일 생성 실패");
    writeln!(file, "0 48").unwrap();
    writeln!(file, "36 97").unwrap();
    file.flush().unwrap();

    let table = load_mapping(file.path()).unwrap();
    assert_eq!(table.get(36), Some('a'));
}

#[test]
fn 없는_파일은_실패() {
    let dir = tempfile::tempdir().expect("임시 디렉토리 생성 실패");
    let err = load_mapping(&dir.path().join("missing.txt")).unwrap_err();
    assert!(err.to_string().contains("missing.txt"), "{}", err);
}
