use crate::{error::MecabError, mecab_output::token::MecabToken};

// 該当なしを表す
pub const FIELD_PLACEHOLDER: &str = "*";

// 品詞,品詞細分類1,品詞細分類2,品詞細分類3,活用型,活用形,原形,読み,発音
pub const MAX_FIELDS: usize = 9;

// 出力 1 行を形態素に
pub fn parse_mecab_line(line: &str) -> Result<MecabToken<'_>, MecabError> {
    let (surface, detail) = match line.split_once('\t') {
        Some((surface, detail)) if !surface.is_empty() => (surface, detail),
        _ => {
            return Err(MecabError::MalformedToken {
                line: line.to_owned(),
            })
        }
    };

    // 9 要素目以降はカンマを含んでいてもそのまま
    let detail: Vec<&str> = detail.splitn(MAX_FIELDS, ',').collect();

    let mut classes = vec![detail[0]];
    // 細分類は前が欠けていても詰めて追加する
    for i in 1..=3 {
        if let Some(class) = field(&detail, i) {
            classes.push(class);
        }
    }

    Ok(MecabToken {
        surface,
        classes,
        conjugation_type: field(&detail, 4),
        conjugation_form: field(&detail, 5),
        base_form: field(&detail, 6),
        kana: field(&detail, 7),
        pronunciation: field(&detail, 8),
    })
}

fn field<'a>(detail: &[&'a str], index: usize) -> Option<&'a str> {
    match detail.get(index) {
        Some(&value) if !value.is_empty() && value != FIELD_PLACEHOLDER => Some(value),
        _ => None,
    }
}
