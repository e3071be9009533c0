use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ja")]
    Ja,
}

impl Language {
    pub fn all() -> [Language; 4] {
        [Language::ZhTw, Language::ZhCn, Language::En, Language::Ja]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::ZhTw => "zh-TW",
            Language::ZhCn => "zh-CN",
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::ZhTw => "繁體中文",
            Language::ZhCn => "简体中文",
            Language::En => "English",
            Language::Ja => "日本語",
        }
    }

    pub fn next(&self) -> Language {
        match self {
            Language::ZhTw => Language::ZhCn,
            Language::ZhCn => Language::En,
            Language::En => Language::Ja,
            Language::Ja => Language::ZhTw,
        }
    }

    pub fn is_chinese(&self) -> bool {
        matches!(self, Language::ZhTw | Language::ZhCn)
    }

    /// Unit shown after the yearly money figure ("TWD / 年").
    pub fn per_year_suffix(&self) -> &'static str {
        if self.is_chinese() { "年" } else { "YR" }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "zh-tw" | "tw" => Ok(Language::ZhTw),
            "zh-cn" | "cn" => Ok(Language::ZhCn),
            "en" | "english" => Ok(Language::En),
            "ja" | "jp" => Ok(Language::Ja),
            _ => {
                let codes: Vec<&str> = Language::all().iter().map(|l| l.code()).collect();
                Err(anyhow::anyhow!(
                    "Unknown language: {} (expected one of {})",
                    s,
                    codes.join(", ")
                ))
            }
        }
    }
}
