/// Narrows an integral float to a byte modulo 256, the way a typed byte
/// array store would. NaN and infinities narrow to 0.
pub fn wrap_byte(v: f64) -> u8 {
    v.rem_euclid(256.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_byte() {
        assert_eq!(wrap_byte(0.0), 0);
        assert_eq!(wrap_byte(255.0), 255);
        assert_eq!(wrap_byte(256.0), 0);
        assert_eq!(wrap_byte(300.0), 44);
        assert_eq!(wrap_byte(-1.0), 255);
        assert_eq!(wrap_byte(-256.0), 0);
        assert_eq!(wrap_byte(-0.0), 0);
        assert_eq!(wrap_byte(1e300), 0);
        assert_eq!(wrap_byte(f64::NAN), 0);
        assert_eq!(wrap_byte(f64::INFINITY), 0);
    }
}
