//! Unit conversions.
use std::convert::TryFrom;

/// Convert a memory size in megabytes to bytes.
///
/// `u32::MAX` megabytes means unlimited and maps to `usize::MAX`, as does any size that does not
/// fit into `usize`.
pub fn megabytes_to_bytes(megabytes: u32) -> usize {
    if megabytes == u32::MAX {
        return usize::MAX;
    }
    usize::try_from(u64::from(megabytes) << 20).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion() {
        assert_eq!(megabytes_to_bytes(0), 0);
        assert_eq!(megabytes_to_bytes(1), 1024 * 1024);
        assert_eq!(megabytes_to_bytes(300), 300 * 1024 * 1024);
        assert_eq!(megabytes_to_bytes(u32::MAX), usize::MAX);
    }
}
