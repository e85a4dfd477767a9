//! 순차 읽기 유틸리티
//!
//! seek 없이 읽기만으로 헤더를 버리고, 스트림 끝을 에러가 아닌
//! 읽은 바이트 수로 알려준다.

use crate::core::types::IdxHeader;
use byteorder::{BigEndian, ByteOrder};
use std::io::{self, ErrorKind, Read};

/// `buf`가 가득 차거나 스트림이 끝날 때까지 읽고, 실제로 읽은 바이트 수 반환
pub fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// 헤더 `size` 바이트를 읽어서 버린다.
///
/// 버린 바이트는 big-endian u32 워드로만 해석해서 돌려준다.
/// 스트림이 헤더보다 짧으면 `complete == false`.
pub fn skip_header<R: Read>(reader: &mut R, size: usize) -> io::Result<IdxHeader> {
    let mut buf = vec![0u8; size];
    let filled = read_full(reader, &mut buf)?;
    let complete = filled == size;

    let words: Vec<u32> = buf[..filled]
        .chunks_exact(4)
        .map(BigEndian::read_u32)
        .collect();
    let magic = words.first().copied().unwrap_or(0);
    let dims = words.into_iter().skip(1).collect();

    Ok(IdxHeader { magic, dims, complete })
}
