//! 全角・半角の正規化

use unicode_normalization::UnicodeNormalization;

/// 文字列をNFKC正規化する
///
/// 全角英数字・記号を半角に、半角カタカナを全角に揃えます（例: `"月３"` → `"月3"`）。
/// 失敗することはなく、正規化済みの文字列に再適用しても結果は変わりません。
pub fn normalize_width(text: &str) -> String {
    text.nfkc().collect()
}
