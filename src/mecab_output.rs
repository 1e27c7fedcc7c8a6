// MeCab（IPADIC 形式）の出力の解析
//
// 1 行 1 形態素で "表層形\t品詞,品詞細分類1,品詞細分類2,品詞細分類3,活用型,活用形,原形,読み,発音"
// 出力の終わりは "EOS" の行
//
// 未知語などは後ろのフィールドが欠ける（7 要素など）ので欠けたものは無いものとして扱う

pub mod parser;
pub mod sentence;
pub mod token;
