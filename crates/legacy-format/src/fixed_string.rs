//! Fixed-length, NUL-padded character buffers

/// A character field stored in a fixed number of bytes.
///
/// Text ends at the first zero byte. A buffer filled to the end without a
/// terminator holds exactly `N` characters.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FixedString<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FixedString<N> {
    /// Wrap a raw buffer as read from disk
    pub fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// Build a buffer from text, truncating at `N` bytes and zero-padding the rest
    pub fn from_text(text: &str) -> Self {
        let mut bytes = [0u8; N];
        for (dst, src) in bytes.iter_mut().zip(text.bytes()) {
            *dst = src;
        }
        Self { bytes }
    }

    /// Declared length of the field
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Raw contents including padding
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Characters before the terminator, never past the declared length
    pub fn content(&self) -> &[u8] {
        let end = self.bytes.iter().position(|&b| b == 0).unwrap_or(N);
        &self.bytes[..end]
    }

    /// Decode into an owned string, one character per byte. Bytes are read as
    /// Latin-1: a byte above 0x7F becomes a two-byte UTF-8 character, so the
    /// decoded `len()` can exceed the buffer length while `chars().count()`
    /// never does.
    pub fn decode(&self) -> String {
        self.content().iter().map(|&b| char::from(b)).collect()
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self { bytes: [0u8; N] }
    }
}

impl<const N: usize> std::fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FixedString").field(&self.decode()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stops_at_terminator() {
        let field = FixedString::<8>::from_bytes(*b"RS\0garbg");
        assert_eq!(field.decode(), "RS");
        assert_eq!(field.content().len(), 2);
    }

    #[test]
    fn test_unterminated_reads_declared_length() {
        let field = FixedString::<4>::from_bytes(*b"ABCD");
        assert_eq!(field.decode(), "ABCD");
        assert_eq!(field.capacity(), 4);
    }

    #[test]
    fn test_from_text_truncates() {
        let field = FixedString::<3>::from_text("serial");
        assert_eq!(field.decode(), "ser");

        let padded = FixedString::<6>::from_text("ab");
        assert_eq!(padded.as_bytes(), b"ab\0\0\0\0");
    }

    #[test]
    fn test_high_bytes_decode_as_latin1() {
        let field = FixedString::<3>::from_bytes([0xE9, b'a', 0]);
        let text = field.decode();
        assert_eq!(text, "\u{e9}a");
        assert_eq!(text.chars().count(), 2);
        assert_eq!(text.len(), 3);
    }

    #[test]
    fn test_empty_buffer() {
        let field = FixedString::<16>::default();
        assert_eq!(field.decode(), "");
    }

    proptest! {
        #[test]
        fn content_never_exceeds_capacity(bytes in proptest::array::uniform16(any::<u8>())) {
            let field = FixedString::<16>::from_bytes(bytes);
            prop_assert!(field.content().len() <= 16);
            prop_assert!(!field.content().contains(&0));
        }
    }
}
