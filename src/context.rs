use crate::models::Language;

/// Session-wide UI state handed to the parts that need it.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    language: Language,
    modal_open: bool,
}

impl AppContext {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            modal_open: false,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        if language != self.language {
            log::debug!("language {} -> {}", self.language, language);
        }
        self.language = language;
    }

    pub fn cycle_language(&mut self) -> Language {
        self.set_language(self.language.next());
        self.language
    }

    pub fn open_trial(&mut self) {
        self.modal_open = true;
    }

    pub fn close_trial(&mut self) {
        self.modal_open = false;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_traditional_chinese_with_modal_closed() {
        let ctx = AppContext::default();
        assert_eq!(ctx.language(), Language::ZhTw);
        assert!(!ctx.is_modal_open());
    }

    #[test]
    fn test_modal_open_close() {
        let mut ctx = AppContext::new(Language::En);
        ctx.open_trial();
        assert!(ctx.is_modal_open());
        ctx.close_trial();
        assert!(!ctx.is_modal_open());
    }

    #[test]
    fn test_cycle_language() {
        let mut ctx = AppContext::new(Language::Ja);
        assert_eq!(ctx.cycle_language(), Language::ZhTw);
        assert_eq!(ctx.language(), Language::ZhTw);
    }
}
