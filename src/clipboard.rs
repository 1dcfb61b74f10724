//! Clipboard access and paste normalisation

/// The buffer's internal line-break marker
pub const LINE_BREAK: &str = "\\N";

/// Clipboard collaborator
pub trait Clipboard {
    fn read(&mut self) -> Result<String, String>;

    fn write(&mut self, text: &str) -> Result<(), String>;

    /// Whether a paste would insert anything
    fn has_text(&mut self) -> bool {
        self.read().map(|text| !text.is_empty()).unwrap_or(false)
    }
}

/// System clipboard via arboard.
///
/// A fresh handle is opened per call; some platforms invalidate long-lived
/// handles when another process takes ownership of the clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn read(&mut self) -> Result<String, String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.get_text().map_err(|e| e.to_string())
    }

    fn write(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| e.to_string())
    }
}

/// Replace every platform line ending (`\r\n`, `\n`, `\r`) with [`LINE_BREAK`].
///
/// `\r\n` is handled first so it becomes one marker, not two.
pub fn normalize_line_breaks(data: &str) -> String {
    data.replace("\r\n", LINE_BREAK)
        .replace('\n', LINE_BREAK)
        .replace('\r', LINE_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_line_ending_becomes_one_marker() {
        assert_eq!(normalize_line_breaks("a\r\nb"), "a\\Nb");
        assert_eq!(normalize_line_breaks("a\nb"), "a\\Nb");
        assert_eq!(normalize_line_breaks("a\rb"), "a\\Nb");
    }

    #[test]
    fn test_mixed_line_endings() {
        let normalized = normalize_line_breaks("one\r\ntwo\nthree\rfour\n\r");
        assert_eq!(normalized, "one\\Ntwo\\Nthree\\Nfour\\N\\N");
        assert!(!normalized.contains('\r'));
        assert!(!normalized.contains('\n'));
    }

    #[test]
    fn test_no_line_endings_is_unchanged() {
        assert_eq!(normalize_line_breaks("plain \\N text"), "plain \\N text");
    }
}
