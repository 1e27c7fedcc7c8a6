use std::fmt;

use serde::Serialize;

// 1 形態素
// 元の行を借用する
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MecabToken<'a> {
    pub(super) surface: &'a str, // 表層形

    // 品詞 + 品詞細分類 (1 〜 4 要素)
    pub(super) classes: Vec<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) conjugation_type: Option<&'a str>, // 活用型
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) conjugation_form: Option<&'a str>, // 活用形
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) base_form: Option<&'a str>, // 原形
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) kana: Option<&'a str>, // 読み
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) pronunciation: Option<&'a str>, // 発音
}

impl<'a> MecabToken<'a> {
    pub fn surface(&self) -> &'a str {
        self.surface
    }

    /// 品詞（細分類を含まない）
    pub fn class(&self) -> &'a str {
        self.classes[0]
    }

    /// 品詞と品詞細分類
    ///
    /// 少なくとも 1 要素，最大 4 要素。
    /// 細分類はそれぞれ独立に省略されるので，`["名詞", "一般"]` の 2 番目が
    /// 品詞細分類1 であるとは限らない。
    pub fn classes(&self) -> &[&'a str] {
        &self.classes
    }

    pub fn conjugation_type(&self) -> Option<&'a str> {
        self.conjugation_type
    }

    pub fn conjugation_form(&self) -> Option<&'a str> {
        self.conjugation_form
    }

    pub fn base_form(&self) -> Option<&'a str> {
        self.base_form
    }

    /// 読み（カタカナ）
    pub fn kana(&self) -> Option<&'a str> {
        self.kana
    }

    /// 発音（カタカナ）
    pub fn pronunciation(&self) -> Option<&'a str> {
        self.pronunciation
    }
}

impl fmt::Display for MecabToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.surface)
    }
}
