// 語法高亮主模組

mod engine;
mod theme;

// 導出公開 API
pub use engine::{
    acquire, supports_true_color, Highlighter, LineHighlighter, SUPPORTED_LANGUAGES,
};
pub use theme::{ScopeRule, ThemeDefinition, ThemeKind, LETTR_THEME};
