use std::fmt;

/// A 3-character ISO 639-2 language code as carried on the wire (e.g. `b"eng"`).
///
/// The bytes are kept verbatim; no validation or case folding is done.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LanguageCode(pub [u8; 3]);

impl LanguageCode {
    /// The raw code bytes.
    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// The code as a string slice, if the bytes are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

impl From<[u8; 3]> for LanguageCode {
    fn from(value: [u8; 3]) -> Self {
        LanguageCode(value)
    }
}

impl PartialEq<[u8; 3]> for LanguageCode {
    fn eq(&self, other: &[u8; 3]) -> bool {
        &self.0 == other
    }
}

impl PartialEq<&[u8; 3]> for LanguageCode {
    fn eq(&self, other: &&[u8; 3]) -> bool {
        &self.0 == *other
    }
}

impl fmt::Debug for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(code) => write!(f, "LanguageCode({code:?})"),
            None => write!(f, "LanguageCode({:?})", self.0),
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        let code = LanguageCode(*b"eng");
        assert_eq!(code.as_str(), Some("eng"));
        assert_eq!(code, b"eng");
        assert_eq!(code.to_string(), "eng");
        assert_eq!(format!("{code:?}"), "LanguageCode(\"eng\")");
    }

    #[test]
    fn test_language_code_not_utf8() {
        let code = LanguageCode([0xFF, b'n', b'g']);
        assert!(code.as_str().is_none());
        assert_eq!(code.as_bytes(), &[0xFF, b'n', b'g']);
    }
}
