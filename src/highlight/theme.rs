//! lettr 主題定義
//!
//! 宣告式的主題資料（UI 色彩 + 有序的 scope 規則），與引擎解耦：
//! 這裡只提供資料，scope 的優先序解析由消費端引擎決定。
//! `to_syntect` 負責轉成 syntect 的 `Theme` 供高亮引擎使用。

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use syntect::highlighting::{
    Color, ScopeSelectors, StyleModifier, Theme, ThemeItem, ThemeSettings,
};

/// 主題明暗分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Dark,
    Light,
}

/// 單條 scope 規則：一組 scope 識別字對應一個前景色
///
/// ⚠️ scope 字串是 TextMate 語法慣例下的契約字串，不可改寫。
/// 空的 scope 清單代表全域預設的 token 前景色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeRule {
    pub scopes: &'static [&'static str],
    pub foreground: &'static str,
}

/// 主題定義
///
/// 載入時建構一次，之後不可變。`colors` 與 `rules` 的順序都是資料的一部分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub kind: ThemeKind,
    /// UI 介面色彩（介面名稱 -> 色彩值），名稱沿用引擎慣例（如 editor.background）
    pub colors: &'static [(&'static str, &'static str)],
    /// 有序的 scope 規則
    pub rules: &'static [ScopeRule],
}

/// lettr 深色主題
pub const LETTR_THEME: ThemeDefinition = ThemeDefinition {
    name: "lettr",
    kind: ThemeKind::Dark,
    colors: &[
        ("editor.background", "#1a1a1a"),
        ("editor.foreground", "#e0e0e0"),
    ],
    rules: &[
        ScopeRule {
            scopes: &[],
            foreground: "#f0f0f0",
        },
        ScopeRule {
            scopes: &["comment", "punctuation.definition.comment"],
            foreground: "#6b7280",
        },
        ScopeRule {
            scopes: &["string", "string.quoted"],
            foreground: "#f9a8b8",
        },
        ScopeRule {
            scopes: &["keyword", "storage.type", "storage.modifier"],
            foreground: "#f43f6b",
        },
        ScopeRule {
            scopes: &["entity.name.function", "support.function"],
            foreground: "#ffffff",
        },
        ScopeRule {
            scopes: &["variable", "variable.other", "variable.parameter"],
            foreground: "#e8e8e8",
        },
        ScopeRule {
            scopes: &["constant", "constant.numeric", "constant.language"],
            foreground: "#f9c4d0",
        },
        ScopeRule {
            scopes: &["entity.name.type", "entity.name.class", "support.class"],
            foreground: "#f9a8b8",
        },
        ScopeRule {
            scopes: &["punctuation", "meta.brace"],
            foreground: "#a1a1aa",
        },
        ScopeRule {
            scopes: &["entity.name.tag"],
            foreground: "#f43f6b",
        },
        ScopeRule {
            scopes: &["entity.other.attribute-name"],
            foreground: "#f9c4d0",
        },
        ScopeRule {
            scopes: &["support.type.property-name", "meta.object-literal.key"],
            foreground: "#e8e8e8",
        },
        ScopeRule {
            scopes: &["keyword.operator", "keyword.operator.assignment"],
            foreground: "#a1a1aa",
        },
    ],
};

impl ThemeDefinition {
    /// 轉成 syntect 的 `Theme`
    ///
    /// 規則順序原樣保留為 `ThemeItem` 順序。空 scope 的規則對應
    /// `ThemeSettings::foreground`（全域預設 token 色，後者覆蓋前者），
    /// 不會產生 `ThemeItem`
    pub fn to_syntect(&self) -> Result<Theme> {
        let mut settings = ThemeSettings::default();

        for &(surface, value) in self.colors {
            let color = parse_color(value)
                .with_context(|| format!("Invalid color for surface '{}'", surface))?;
            match surface {
                "editor.background" => settings.background = Some(color),
                "editor.foreground" => settings.foreground = Some(color),
                // 其餘介面色彩由外部渲染層消費，引擎不認識
                _ => {}
            }
        }

        let mut scopes = Vec::with_capacity(self.rules.len());
        for rule in self.rules {
            let color = parse_color(rule.foreground)?;

            if rule.scopes.is_empty() {
                settings.foreground = Some(color);
                continue;
            }

            let joined = rule.scopes.join(", ");
            let selector: ScopeSelectors = joined
                .parse()
                .map_err(|e| anyhow!("Invalid scope selector '{}': {:?}", joined, e))?;
            scopes.push(ThemeItem {
                scope: selector,
                style: StyleModifier {
                    foreground: Some(color),
                    background: None,
                    font_style: None,
                },
            });
        }

        Ok(Theme {
            name: Some(self.name.to_string()),
            author: None,
            settings,
            scopes,
        })
    }
}

/// 解析 "#RRGGBB" 色彩字串
fn parse_color(value: &str) -> Result<Color> {
    let hex = value
        .strip_prefix('#')
        .ok_or_else(|| anyhow!("Color '{}' must start with '#'", value))?;
    if hex.len() != 6 {
        bail!("Color '{}' must be in #RRGGBB form", value);
    }

    let r = u8::from_str_radix(&hex[0..2], 16)
        .with_context(|| format!("Invalid color '{}'", value))?;
    let g = u8::from_str_radix(&hex[2..4], 16)
        .with_context(|| format!("Invalid color '{}'", value))?;
    let b = u8::from_str_radix(&hex[4..6], 16)
        .with_context(|| format!("Invalid color '{}'", value))?;

    Ok(Color { r, g, b, a: 0xFF })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_shape() {
        assert_eq!(LETTR_THEME.name, "lettr");
        assert_eq!(LETTR_THEME.kind, ThemeKind::Dark);
        assert_eq!(LETTR_THEME.colors.len(), 2);
        assert_eq!(LETTR_THEME.rules.len(), 13);
    }

    #[test]
    fn test_theme_is_stable_data() {
        // 重複讀取內容不變
        let first = LETTR_THEME;
        let second = LETTR_THEME;
        assert_eq!(first, second);
        assert_eq!(first.rules[0].foreground, "#f0f0f0");
        assert!(first.rules[0].scopes.is_empty());
    }

    #[test]
    fn test_rule_order_preserved() {
        assert_eq!(LETTR_THEME.rules[1].scopes[0], "comment");
        assert_eq!(
            LETTR_THEME.rules[3].scopes,
            &["keyword", "storage.type", "storage.modifier"][..]
        );
        assert_eq!(LETTR_THEME.rules[12].scopes[0], "keyword.operator");
    }

    #[test]
    fn test_to_syntect() {
        let theme = LETTR_THEME.to_syntect().unwrap();
        assert_eq!(theme.name.as_deref(), Some("lettr"));

        // 12 條帶 scope 的規則；空 scope 規則成為全域前景色
        assert_eq!(theme.scopes.len(), 12);
        let fg = theme.settings.foreground.unwrap();
        assert_eq!((fg.r, fg.g, fg.b), (0xf0, 0xf0, 0xf0));
        let bg = theme.settings.background.unwrap();
        assert_eq!((bg.r, bg.g, bg.b), (0x1a, 0x1a, 0x1a));

        // 順序保留：第一個 ThemeItem 是註解規則
        let comment_fg = theme.scopes[0].style.foreground.unwrap();
        assert_eq!((comment_fg.r, comment_fg.g, comment_fg.b), (0x6b, 0x72, 0x80));
        let last_fg = theme.scopes[11].style.foreground.unwrap();
        assert_eq!((last_fg.r, last_fg.g, last_fg.b), (0xa1, 0xa1, 0xaa));
    }

    #[test]
    fn test_parse_color() {
        let c = parse_color("#f43f6b").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0xf4, 0x3f, 0x6b, 0xff));

        assert!(parse_color("f43f6b").is_err());
        assert!(parse_color("#f43f").is_err());
        assert!(parse_color("#zzzzzz").is_err());
    }
}
