use crate::utils::screenplay_constants::{CHARACTER_EXTENSION_REGEX, SPACE_RUN_REGEX};

// 规范化文本：去掉回车，换行换成空格，合并连续空格，去掉首尾空白
pub fn normalize(text: &str) -> String {
    let text = text.replace('\r', "").replace('\n', " ");
    SPACE_RUN_REGEX.replace_all(&text, " ").trim().to_string()
}

/// 规范化角色名：转大写，可选去掉 (CONT'D) 之类的续接标记
///
/// 去掉标记后为空时保留原文。
pub fn normalize_character(text: &str, strip_extensions: bool) -> String {
    let upper = text.to_uppercase();
    if !strip_extensions {
        return upper;
    }

    let stripped = CHARACTER_EXTENSION_REGEX.replace(&upper, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        upper
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_spaces_and_trims() {
        assert_eq!(normalize("  Hello    there.  "), "Hello there.");
    }

    #[test]
    fn strips_line_break_artifacts() {
        assert_eq!(normalize("Hello\r\n"), "Hello");
        assert_eq!(normalize("one\ntwo"), "one two");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = ["  a  b\r\n", "\tINT.   ROOM\t", "", "x\n\ny"];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn character_is_upper_cased() {
        assert_eq!(normalize_character("John", true), "JOHN");
    }

    #[test]
    fn character_extension_is_removed() {
        assert_eq!(normalize_character("JOHN (CONT'D)", true), "JOHN");
        assert_eq!(normalize_character("JOHN (cont'd)", true), "JOHN");
        assert_eq!(normalize_character("JOHN (CONT'D)", false), "JOHN (CONT'D)");
        assert_eq!(normalize_character("JOHN (V.O.)", true), "JOHN (V.O.)");
    }

    #[test]
    fn bare_extension_is_kept() {
        assert_eq!(normalize_character("(CONTINUED)", true), "(CONTINUED)");
    }
}
