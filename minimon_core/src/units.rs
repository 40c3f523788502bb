//! Binary unit conversions (1 KB = 1024 bytes).

const K: f64 = 1024.0;

pub fn bytes_to_kb(b: f64) -> f64 {
    b / K
}

pub fn bytes_to_mb(b: f64) -> f64 {
    b / (K * K)
}

pub fn bytes_to_gb(b: f64) -> f64 {
    b / (K * K * K)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_of_1024() {
        assert_eq!(bytes_to_kb(2048.0), 2.0);
        assert_eq!(bytes_to_mb(1_048_576.0), 1.0);
        assert_eq!(bytes_to_gb(3.0 * 1_073_741_824.0), 3.0);
    }
}
