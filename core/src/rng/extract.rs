//! Digest-to-number conversion
//!
//! All variants read numbers out of a digest the same way: the leading bytes
//! are taken as a little-endian two's-complement integer. Only `unit_double`
//! normalizes; the integer readers return the raw signed value.

/// Read the first 8 digest bytes as a little-endian `i64`
///
/// # Panics
/// Panics if `digest` is shorter than 8 bytes. Every supported digest
/// primitive produces at least 16.
pub(crate) fn le_i64(digest: &[u8]) -> i64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&digest[..8]);
    i64::from_le_bytes(buf)
}

/// Read the first 4 digest bytes as a little-endian `i32`
pub(crate) fn le_i32(digest: &[u8]) -> i32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&digest[..4]);
    i32::from_le_bytes(buf)
}

/// Fold a digest into `[0.0, 1.0)`
///
/// `|x| / i64::MAX % 1.0`. The absolute value wraps, so `i64::MIN` stays
/// negative and yields `-0.0`.
pub(crate) fn unit_double(digest: &[u8]) -> f64 {
    let magnitude = le_i64(digest).wrapping_abs();
    (magnitude as f64 / i64::MAX as f64) % 1.0
}

/// Scale a unit double to `[0, exclusive)` and truncate toward zero
pub(crate) fn scale_i64(unit: f64, exclusive: i64) -> i64 {
    (unit * exclusive as f64) as i64
}

/// Scale a unit double to `[0, exclusive)` and truncate toward zero
pub(crate) fn scale_i32(unit: f64, exclusive: i32) -> i32 {
    (unit * exclusive as f64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest_with_prefix(prefix: &[u8]) -> Vec<u8> {
        let mut digest = vec![0xAA; 16];
        digest[..prefix.len()].copy_from_slice(prefix);
        digest
    }

    #[test]
    fn test_little_endian_reads() {
        let digest = digest_with_prefix(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
        assert_eq!(le_i64(&digest), 0x0807060504030201);
        assert_eq!(le_i32(&digest), 0x04030201);
    }

    #[test]
    fn test_integer_reads_keep_sign() {
        let digest = digest_with_prefix(&[0xFF; 8]);
        assert_eq!(le_i64(&digest), -1);
        assert_eq!(le_i32(&digest), -1);
    }

    #[test]
    fn test_unit_double_takes_magnitude() {
        let minus_one = digest_with_prefix(&[0xFF; 8]);
        let plus_one = digest_with_prefix(&[0x01, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(unit_double(&minus_one), unit_double(&plus_one));
        assert!(unit_double(&plus_one) > 0.0);
    }

    #[test]
    fn test_unit_double_max_folds_to_zero() {
        let max = digest_with_prefix(&i64::MAX.to_le_bytes());
        assert_eq!(unit_double(&max), 0.0);
    }

    #[test]
    fn test_unit_double_min_wraps_without_panicking() {
        let min = digest_with_prefix(&i64::MIN.to_le_bytes());
        let value = unit_double(&min);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative(), "i64::MIN should fold to -0.0");
    }

    #[test]
    fn test_scaling_truncates_toward_zero() {
        assert_eq!(scale_i64(0.99, 10), 9);
        assert_eq!(scale_i32(0.5, 7), 3);
        assert_eq!(scale_i32(0.5, -7), -3);
        assert_eq!(scale_i64(0.0, i64::MAX), 0);
    }
}
