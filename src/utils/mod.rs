pub mod screenplay_constants;

pub use screenplay_constants::ScreenplayConstants;

/// 文本是否全部大写
///
/// 至少要有一个区分大小写的字母，且不含任何小写字母，数字和标点不影响结果。
pub fn is_upper_case(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// 按空白分隔的单词数
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 文本是否被一对圆括号包裹
pub fn is_wrapped_in_parens(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('(') && text.ends_with(')')
}
