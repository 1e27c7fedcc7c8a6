use crate::{
    error::MecabError,
    mecab_output::{parser::parse_mecab_line, token::MecabToken},
};

// 出力の終わり（形態素ではない）
pub const END_OF_SENTENCE: &str = "EOS";

// MeCab の出力 1 回分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MecabSentence {
    lines: Vec<String>,
}

impl MecabSentence {
    pub fn new(lines: Vec<String>) -> Self {
        MecabSentence { lines }
    }

    // 標準出力をそのまま受け取る
    pub fn from_output(output: &str) -> Self {
        MecabSentence {
            lines: output.lines().map(|line| line.to_owned()).collect(),
        }
    }

    pub fn raw_lines(&self) -> &[String] {
        &self.lines
    }

    /// 形態素を先頭から順に解析して返す。
    ///
    /// 呼ぶたびに保持している行から解析し直す。
    /// 不正な行は `MecabError::MalformedToken` になるが，その後の行の解析は続けられる。
    pub fn tokens(&self) -> impl Iterator<Item = Result<MecabToken<'_>, MecabError>> + '_ {
        self.token_lines().map(parse_mecab_line)
    }

    pub fn surfaces(&self) -> impl Iterator<Item = Result<&str, MecabError>> + '_ {
        self.tokens().map(|token| token.map(|t| t.surface()))
    }

    // 最初の不正な行でエラー
    pub fn all_tokens(&self) -> Result<Vec<MecabToken<'_>>, MecabError> {
        self.tokens().collect()
    }

    /// 分かち書き
    pub fn all_surfaces(&self) -> Result<Vec<&str>, MecabError> {
        self.surfaces().collect()
    }

    /// 読み（カタカナ）
    ///
    /// 読みの無い形態素（記号の一部や未知語）は何も出力されないので，
    /// `"今年も, 春が"` は `"コトシモハルガ"` になる。
    pub fn to_kana(&self) -> Result<String, MecabError> {
        self.concat(|token| token.kana())
    }

    /// 発音（カタカナ）
    ///
    /// `to_kana` と同様に発音の無い形態素は何も出力されない。
    pub fn to_pronunciation(&self) -> Result<String, MecabError> {
        self.concat(|token| token.pronunciation())
    }

    fn token_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines
            .iter()
            .map(|line| line.as_str())
            .filter(|&line| line != END_OF_SENTENCE)
    }

    fn concat<'a, F>(&'a self, f: F) -> Result<String, MecabError>
    where
        F: Fn(&MecabToken<'a>) -> Option<&'a str>,
    {
        let mut ret = String::new();
        for token in self.tokens() {
            ret.push_str(f(&token?).unwrap_or(""));
        }
        Ok(ret)
    }
}
