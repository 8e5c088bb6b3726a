//! Small scalar/stream converters shared across handlers.
//!
//! Responsibility:
//! - ストリーム全体を Vec<u8> に読み切る (partial read 対応)
//! - "数値でなければ None" の整数パース
//! - 壁時計の日時を UTC とみなして Unix タイムスタンプへ変換
//!
//! Notes:
//! - Failure to parse is an expected state here, never an error.

use chrono::NaiveDateTime;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Drains `input` to exhaustion and returns its contents.
///
/// Handles as many partial reads as the source needs; the intermediate
/// buffer is dropped on cancellation like any local.
pub async fn read_bytes<R>(input: &mut R) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut buf = Vec::new();
    input.read_to_end(&mut buf).await?;
    Ok(buf)
}

/// Parses a base-10 integer, `None` when the input is not one.
pub fn to_nullable_int(s: &str) -> Option<i32> {
    s.parse::<i32>().ok()
}

/// Reinterprets the wall-clock fields of `dt` as UTC and returns whole
/// seconds since the Unix epoch. The instant itself is not converted.
pub fn to_unix_timestamp(dt: NaiveDateTime) -> i64 {
    dt.and_utc().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn read_bytes_drains_the_whole_stream() {
        let mut input: &[u8] = b"hello wopi";
        let bytes = read_bytes(&mut input).await.unwrap();
        assert_eq!(bytes, b"hello wopi");
    }

    #[tokio::test]
    async fn read_bytes_survives_partial_reads() {
        // chain() yields the halves in separate reads
        let first: &[u8] = b"part one / ";
        let second: &[u8] = b"part two";
        let mut chained = first.chain(second);
        let bytes = read_bytes(&mut chained).await.unwrap();
        assert_eq!(bytes, b"part one / part two");
    }

    #[tokio::test]
    async fn read_bytes_on_empty_stream_is_empty() {
        let mut input: &[u8] = b"";
        assert!(read_bytes(&mut input).await.unwrap().is_empty());
    }

    #[test]
    fn parses_valid_integers() {
        assert_eq!(to_nullable_int("42"), Some(42));
        assert_eq!(to_nullable_int("-7"), Some(-7));
        assert_eq!(to_nullable_int("0"), Some(0));
    }

    #[test]
    fn rejects_non_integers_as_none() {
        assert_eq!(to_nullable_int(""), None);
        assert_eq!(to_nullable_int("abc"), None);
        assert_eq!(to_nullable_int("4.5"), None);
        assert_eq!(to_nullable_int("42x"), None);
    }

    #[test]
    fn epoch_plus_ten_seconds() {
        let dt = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 10)
            .unwrap();
        assert_eq!(to_unix_timestamp(dt), 10);
    }

    #[test]
    fn wall_clock_is_taken_as_utc() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(to_unix_timestamp(dt), 1_704_067_200);
    }
}
