//! 語法高亮引擎
//!
//! 包裝 syntect：固定的 lettr 主題 + 固定的語言集合。
//!
//! 實現特點：
//! - 行程範圍共享單例（OnceCell 守衛的延遲初始化）
//! - Token 層級過濾換行符（輸出行保證不含換行）
//! - 優化 ANSI 碼生成（只在顏色變化時輸出，減少輸出大小）

use crate::highlight::theme::LETTR_THEME;
use anyhow::{anyhow, Context, Result};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt::Write;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, Style, Theme};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// 高亮器支援的語言集合（範例內容只能使用這些語言 ID）
pub const SUPPORTED_LANGUAGES: &[&str] =
    &["php", "javascript", "python", "go", "ruby", "bash", "shell"];

/// 全域共享高亮器
///
/// ⚠️ 使用 OnceCell 而非 Lazy：初始化可能失敗（主題或語言被拒絕）。
/// get_or_try_init 保證單次飛行：並行的首次呼叫會阻塞等待同一次初始化；
/// 初始化失敗時 cell 保持為空，之後的呼叫可以乾淨地重試
static HIGHLIGHTER: OnceCell<Highlighter> = OnceCell::new();

/// 取得共享高亮器（首次呼叫時初始化，之後直接回傳同一實例）
///
/// 初始化錯誤原樣回傳給呼叫端，這裡不做重試或降級
pub fn acquire() -> Result<&'static Highlighter> {
    HIGHLIGHTER.get_or_try_init(Highlighter::initialize)
}

/// 語法高亮引擎
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
    /// 語言 ID -> 語法名稱（初始化時全部解析完成）
    languages: HashMap<&'static str, String>,
}

impl Highlighter {
    fn initialize() -> Result<Self> {
        Self::with_languages(SUPPORTED_LANGUAGES)
    }

    /// 以指定語言集合建立高亮器
    ///
    /// 任一語言無法解析即整體失敗，不會建立部分可用的實例
    fn with_languages(langs: &[&'static str]) -> Result<Self> {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme = LETTR_THEME
            .to_syntect()
            .context("Failed to build the lettr theme")?;

        let mut languages = HashMap::with_capacity(langs.len());
        for &lang in langs {
            let syntax = resolve_syntax(&syntax_set, lang)
                .ok_or_else(|| anyhow!("Language '{}' is not available in the syntax set", lang))?;
            log::debug!("Resolved language '{}' to syntax '{}'", lang, syntax.name);
            languages.insert(lang, syntax.name.clone());
        }

        Ok(Self {
            syntax_set,
            theme,
            languages,
        })
    }

    /// 是否支援指定語言
    pub fn supports(&self, lang: &str) -> bool {
        self.languages.contains_key(lang)
    }

    /// 支援的語言 ID
    pub fn languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.languages.keys().copied()
    }

    /// 主題名稱
    pub fn theme_name(&self) -> &str {
        self.theme.name.as_deref().unwrap_or("Unknown")
    }

    /// 建立逐行高亮器
    ///
    /// 語言不在支援集合內時回傳錯誤
    pub fn line_highlighter(&self, lang: &str, true_color: bool) -> Result<LineHighlighter<'_>> {
        let name = self
            .languages
            .get(lang)
            .ok_or_else(|| anyhow!("Unsupported language: '{}'", lang))?;
        let syntax = self
            .syntax_set
            .find_syntax_by_name(name)
            .ok_or_else(|| anyhow!("Syntax '{}' disappeared from the syntax set", name))?;

        Ok(LineHighlighter {
            inner: HighlightLines::new(syntax, &self.theme),
            syntax_set: &self.syntax_set,
            true_color,
        })
    }

    /// 高亮整段程式碼，回傳以 \n 連接的 ANSI 字串
    pub fn highlight(&self, lang: &str, code: &str, true_color: bool) -> Result<String> {
        let mut highlighter = self.line_highlighter(lang, true_color)?;
        let lines: Vec<String> = LinesWithEndings::from(code)
            .map(|line| highlighter.highlight_line(line))
            .collect();
        Ok(lines.join("\n"))
    }
}

/// 逐行高亮器（維護內部語法狀態）
///
/// ⚠️ HighlightLines 內部維護 ParseState，
/// 必須循序處理行才能正確處理跨行語法（如多行註解）
pub struct LineHighlighter<'a> {
    inner: HighlightLines<'a>,
    syntax_set: &'a SyntaxSet,
    true_color: bool,
}

impl LineHighlighter<'_> {
    /// 高亮單行，返回 ANSI 色碼字串
    ///
    /// ⚠️ 錯誤處理策略：高亮失敗時自動降級為純文字（不崩潰）
    pub fn highlight_line(&mut self, line: &str) -> String {
        match self.inner.highlight_line(line, self.syntax_set) {
            Ok(ranges) => self.ranges_to_ansi_optimized(&ranges),
            Err(e) => {
                log::warn!("Syntax highlighting failed: {}", e);
                strip_line_endings(line)
            }
        }
    }

    /// 優化的 ANSI 碼生成
    ///
    /// 1. Token 層級過濾換行符
    /// 2. 只在顏色變化時輸出色碼（減少輸出大小）
    /// 3. 統一處理真彩色和 256 色模式
    fn ranges_to_ansi_optimized(&self, ranges: &[(Style, &str)]) -> String {
        let mut output = String::with_capacity(256);
        let mut last_color: Option<Color> = None;

        for (style, text) in ranges {
            let clean = strip_line_endings(text);
            if clean.is_empty() {
                continue;
            }

            let fg = style.foreground;
            let color_changed =
                last_color.is_none_or(|last| last.r != fg.r || last.g != fg.g || last.b != fg.b);

            if color_changed {
                if self.true_color {
                    let _ = write!(output, "\x1b[38;2;{};{};{}m", fg.r, fg.g, fg.b);
                } else {
                    let code = ansi_colours::ansi256_from_rgb((fg.r, fg.g, fg.b));
                    let _ = write!(output, "\x1b[38;5;{}m", code);
                }
                last_color = Some(fg);
            }

            output.push_str(&clean);
        }

        // 只在有輸出色碼時才需要 reset
        if last_color.is_some() && !output.is_empty() {
            output.push_str("\x1b[0m");
        }

        output
    }
}

/// 將語言 ID 解析為 syntect 語法
///
/// 範例內容沿用網頁端的語言 ID 慣例（'shell' 是 'bash' 的別名），
/// 與 syntect 的語法名稱不完全一致，這裡做對應
fn resolve_syntax<'a>(set: &'a SyntaxSet, lang: &str) -> Option<&'a SyntaxReference> {
    match lang {
        "bash" | "shell" => set
            .find_syntax_by_name("Bourne Again Shell (bash)")
            .or_else(|| set.find_syntax_by_extension("bash"))
            .or_else(|| set.find_syntax_by_extension("sh")),
        _ => set
            .find_syntax_by_token(lang)
            .or_else(|| set.find_syntax_by_extension(lang)),
    }
}

/// 移除行尾的換行符（\n, \r, \r\n）
#[inline]
fn strip_line_endings(s: &str) -> String {
    let mut result = s;
    if result.ends_with("\r\n") {
        result = &result[..result.len() - 2];
    } else if result.ends_with('\n') || result.ends_with('\r') {
        result = &result[..result.len() - 1];
    }
    result.to_string()
}

/// 檢測終端是否支援 24-bit 真彩色
///
/// 檢測策略：
/// 1. 檢查 COLORTERM 環境變數
/// 2. 檢查 TERM 環境變數
/// 3. Windows 特殊處理（Windows Terminal, Windows 11）
pub fn supports_true_color() -> bool {
    if let Ok(colorterm) = std::env::var("COLORTERM") {
        if colorterm == "truecolor" || colorterm == "24bit" {
            return true;
        }
    }

    if let Ok(term) = std::env::var("TERM") {
        if term.contains("24bit") || term.contains("truecolor") {
            return true;
        }
        // iTerm2, Konsole, 等現代終端
        if term.contains("iterm") || term.contains("konsole") {
            return true;
        }
    }

    #[cfg(windows)]
    {
        // Windows Terminal 支援真彩色
        if std::env::var("WT_SESSION").is_ok() {
            return true;
        }

        if is_windows_virtual_terminal_enabled() {
            return true;
        }
    }

    // 預設：降級為 256 色
    false
}

#[cfg(windows)]
fn is_windows_virtual_terminal_enabled() -> bool {
    // 檢查是否啟用 ENABLE_VIRTUAL_TERMINAL_PROCESSING
    unsafe {
        use winapi::um::consoleapi::GetConsoleMode;
        use winapi::um::handleapi::INVALID_HANDLE_VALUE;
        use winapi::um::processenv::GetStdHandle;
        use winapi::um::winbase::STD_OUTPUT_HANDLE;
        use winapi::um::wincon::ENABLE_VIRTUAL_TERMINAL_PROCESSING;

        let handle = GetStdHandle(STD_OUTPUT_HANDLE);
        if handle == INVALID_HANDLE_VALUE {
            return false;
        }

        let mut mode = 0;
        if GetConsoleMode(handle, &mut mode) == 0 {
            return false;
        }

        (mode & ENABLE_VIRTUAL_TERMINAL_PROCESSING) != 0
    }
}
