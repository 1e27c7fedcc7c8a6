use once_cell::sync::Lazy;
use regex::Regex;

// 文末の区切り
pub const DEFAULT_DELIMITERS: [&str; 2] = [". ", "。"];

// 前後から取り除く空白（全角空白は本文として残す）
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSplitter {
    delimiters: Vec<String>,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        SentenceSplitter::new(DEFAULT_DELIMITERS)
    }
}

impl SentenceSplitter {
    // 空の区切りは無視する（全ての文字の間で分割されてしまう）
    pub fn new<I, S>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let delimiters = delimiters
            .into_iter()
            .map(|d| d.into())
            .filter(|d: &String| !d.is_empty())
            .collect();

        SentenceSplitter { delimiters }
    }

    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// 文章を改行と区切りをもとに文に分割する。
    ///
    /// 区切りは文の末尾に残る。空白だけの行は捨てる。
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut text = text.to_owned();
        for delimiter in &self.delimiters {
            text = text.replace(delimiter.as_str(), &format!("{}\n", delimiter));
        }

        // CR+LF, CR を LF に
        static REGEX_NEW_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").unwrap());
        let text = REGEX_NEW_LINE.replace_all(&text, "\n");

        text.split('\n')
            .map(|sentence| sentence.trim_matches(TRIM_CHARS))
            .filter(|sentence| !sentence.is_empty())
            .map(|sentence| sentence.to_owned())
            .collect()
    }
}

pub fn split_sentences(text: &str) -> Vec<String> {
    SentenceSplitter::default().split(text)
}
