use arboard::Clipboard;

pub struct ClipboardService;

impl ClipboardService {
    pub fn copy_text(text: &str) -> Result<String, String> {
        match Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(text.to_string()) {
                Ok(()) => Ok(text.to_string()),
                Err(e) => Err(format!("Failed to write clipboard: {}", e)),
            },
            Err(e) => Err(format!("Failed to open clipboard: {}", e)),
        }
    }
}
