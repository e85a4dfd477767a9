//! 진행 시간 표시용 포맷터

use std::time::Duration;

/// `1h 2m 3s 45ms` 형태. 큰 단위는 그 단위 이상일 때만 붙인다
pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();
    let mut text = format!("{}ms", ms % 1000);
    if ms >= 1000 {
        text = format!("{}s {}", (ms / 1000) % 60, text);
    }
    if ms >= 1000 * 60 {
        text = format!("{}m {}", (ms / 1000 / 60) % 60, text);
    }
    if ms >= 1000 * 60 * 60 {
        text = format!("{}h {}", (ms / 1000 / 60 / 60) % 24, text);
    }
    if ms >= 1000 * 60 * 60 * 24 {
        text = format!("{}d {}", ms / 1000 / 60 / 60 / 24, text);
    }
    text
}
