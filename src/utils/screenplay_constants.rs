use lazy_static::lazy_static;
use regex::Regex;

pub struct ScreenplayConstants;

impl ScreenplayConstants {
    /// 场景标题前缀
    pub fn scene_prefixes() -> &'static [&'static str] {
        &["INT./EXT.", "EXT./INT.", "INT.", "EXT.", "I/E", "EST."]
    }

    /// 句点后不断句的英文缩写(比较时不区分大小写)
    pub fn abbreviations() -> &'static [&'static str] {
        &[
            "Mr.", "Mrs.", "Ms.", "Messrs.", "Dr.", "Prof.", "St.", "Jr.", "Sr.", "Lt.",
            "Col.", "Gen.", "Capt.", "Sgt.", "Cpl.", "Maj.", "Rev.", "Hon.", "Gov.",
            "Sen.", "Rep.", "Mt.", "Ft.", "vs.",
        ]
    }

    /// 不以冒号结尾的转场
    pub fn closing_transitions() -> &'static [&'static str] {
        &["FADE OUT.", "FADE TO BLACK."]
    }
}

lazy_static! {
    // 连续空格
    pub static ref SPACE_RUN_REGEX: Regex = Regex::new(r" {2,}").unwrap();

    // 角色名后的续接标记，如 (CONT'D)
    pub static ref CHARACTER_EXTENSION_REGEX: Regex =
        Regex::new(r"\s*\((?:CONT['’]?D|CONT\.?|CONTINUED)\)\s*$").unwrap();
}
