//! lettr-tabs - lettr 文件網站的程式碼範例分頁
//!
//! 三個彼此獨立的部分：
//! - 主題定義（lettr 深色主題，靜態不可變資料）
//! - 共享高亮器（延遲初始化的行程範圍單例）
//! - 範例內容註冊表（固定順序的分頁清單）
//!
//! 渲染層（終端 CLI 或網頁端）各自消費這三者，彼此之間沒有資料流

// 導出公開模組
pub mod highlight;
pub mod samples;
pub mod utils;

// 重新導出常用類型
pub use highlight::{acquire, Highlighter, LETTR_THEME};
pub use samples::{CodeSample, CODE_SAMPLES};
