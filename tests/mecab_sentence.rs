use std::fs;

use anyhow::{Context, Result};

use mecab_sentence::{
    mecab_output::sentence::MecabSentence, sentence_splitter::split_sentences,
};

// IPADIC で解析した出力
static MECAB_OUTPUT_DIR: &str = "./tests/mecab_output";

fn load(name: &str) -> Result<MecabSentence> {
    let path = format!("{}/{}.ipadic.txt", MECAB_OUTPUT_DIR, name);
    let output = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    Ok(MecabSentence::from_output(&output))
}

static SAMPLE_TEXT_1: &str = "[明石焼きについて]\n明石では、卵焼きと呼ばれている。しかし普通の卵焼きも卵焼きである。\n地元民としても非常にわかりづらい。";
static SAMPLE_TEXT_2: &str = "港では「いかなご」が水揚げされていた. \n3月の末ごろに街を歩けば, 釘煮の, 甘辛い醤油の香りがあちこちにたちこめている. 今年も, 春がやってきたのだ.";

#[test]
fn test_split_sample_texts() {
    assert_eq!(
        split_sentences(SAMPLE_TEXT_1),
        vec![
            "[明石焼きについて]",
            "明石では、卵焼きと呼ばれている。",
            "しかし普通の卵焼きも卵焼きである。",
            "地元民としても非常にわかりづらい。",
        ]
    );
    assert_eq!(
        split_sentences(SAMPLE_TEXT_2),
        vec![
            "港では「いかなご」が水揚げされていた.",
            "3月の末ごろに街を歩けば, 釘煮の, 甘辛い醤油の香りがあちこちにたちこめている.",
            "今年も, 春がやってきたのだ.",
        ]
    );
}

#[test]
fn test_wakachi() -> Result<()> {
    let akashi = load("akashi")?;
    let minato = load("minato")?;

    let expected_1 = vec!["明石", "で", "は", "、", "卵焼き", "と", "呼ば", "れ", "て", "いる", "。"];
    let expected_2 = vec![
        "港", "で", "は", "「", "いかなご", "」", "が", "水揚げ", "さ", "れ", "て", "い", "た", ".",
    ];

    assert_eq!(akashi.all_surfaces()?, expected_1);
    assert_eq!(minato.all_surfaces()?, expected_2);

    assert_eq!(akashi.surfaces().collect::<Result<Vec<_>, _>>()?, expected_1);
    assert_eq!(minato.surfaces().collect::<Result<Vec<_>, _>>()?, expected_2);

    // 表層形をつなげると元の文に戻る
    assert_eq!(akashi.all_surfaces()?.concat(), split_sentences(SAMPLE_TEXT_1)[1]);

    let displayed: Vec<String> = akashi.all_tokens()?.iter().map(|t| t.to_string()).collect();
    assert_eq!(displayed, expected_1);

    Ok(())
}

#[test]
fn test_to_kana() -> Result<()> {
    assert_eq!(load("jimoto")?.to_kana()?, "ジモトミントシテモヒジョウニワカリヅライ。");
    // "," と "." は読みが無いので消える
    assert_eq!(load("kotoshi")?.to_kana()?, "コトシモハルガヤッテキタノダ");
    Ok(())
}

#[test]
fn test_to_pronunciation() -> Result<()> {
    assert_eq!(
        load("jimoto")?.to_pronunciation()?,
        "ジモトミントシテモヒジョーニワカリズライ。"
    );
    assert_eq!(
        load("minato")?.to_pronunciation()?,
        "ミナトデワ「イカナゴ」ガミズアゲサレテイタ"
    );
    Ok(())
}

#[test]
fn test_token_fields() -> Result<()> {
    let sentence = load("kotoshi")?;
    let tokens = sentence.all_tokens()?;

    let expected_class = [
        "名詞", "助詞", "名詞", "名詞", "助詞", "動詞", "助動詞", "名詞", "助動詞", "名詞",
    ];
    let expected_classes: [&[&str]; 10] = [
        &["名詞", "副詞可能"],
        &["助詞", "係助詞"],
        &["名詞", "サ変接続"],
        &["名詞", "一般"],
        &["助詞", "格助詞", "一般"],
        &["動詞", "自立"],
        &["助動詞"],
        &["名詞", "非自立", "一般"],
        &["助動詞"],
        &["名詞", "サ変接続"],
    ];
    let expected_type = [
        None,
        None,
        None,
        None,
        None,
        Some("カ変・クル"),
        Some("特殊・タ"),
        None,
        Some("特殊・ダ"),
        None,
    ];
    let expected_form = [
        None,
        None,
        None,
        None,
        None,
        Some("連用形"),
        Some("基本形"),
        None,
        Some("基本形"),
        None,
    ];
    let expected_base = [
        Some("今年"),
        Some("も"),
        None,
        Some("春"),
        Some("が"),
        Some("やってくる"),
        Some("た"),
        Some("の"),
        Some("だ"),
        None,
    ];
    let expected_kana = [
        Some("コトシ"),
        Some("モ"),
        None,
        Some("ハル"),
        Some("ガ"),
        Some("ヤッテキ"),
        Some("タ"),
        Some("ノ"),
        Some("ダ"),
        None,
    ];

    assert_eq!(tokens.len(), 10);
    for (i, token) in tokens.iter().enumerate() {
        assert_eq!(token.class(), expected_class[i]);
        assert_eq!(token.classes(), expected_classes[i]);
        assert_eq!(token.conjugation_type(), expected_type[i]);
        assert_eq!(token.conjugation_form(), expected_form[i]);
        assert_eq!(token.base_form(), expected_base[i]);
        assert_eq!(token.kana(), expected_kana[i]);
        // IPADIC ではこの文の読みと発音は同じ
        assert_eq!(token.pronunciation(), expected_kana[i]);
    }

    Ok(())
}

#[test]
fn test_kana_is_concatenation_of_tokens() -> Result<()> {
    for name in ["akashi", "jimoto", "minato", "kotoshi"] {
        let sentence = load(name)?;
        let tokens = sentence.all_tokens()?;

        let kana: String = tokens.iter().map(|t| t.kana().unwrap_or("")).collect();
        let pronunciation: String = tokens
            .iter()
            .map(|t| t.pronunciation().unwrap_or(""))
            .collect();

        assert_eq!(sentence.to_kana()?, kana);
        assert_eq!(sentence.to_pronunciation()?, pronunciation);

        for token in &tokens {
            assert!((1..=4).contains(&token.classes().len()));
        }
    }
    Ok(())
}
