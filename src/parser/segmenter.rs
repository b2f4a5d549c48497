use unicode_segmentation::UnicodeSegmentation;
use crate::utils::ScreenplayConstants;

/// 句子切分服务
///
/// 给定一段文本，按顺序返回去掉首尾空白的句子，空句子被丢弃。
/// 实现必须可以在多个并发解析之间共享。
pub trait SentenceSegmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// 基于 Unicode 句子边界(UAX #29)的英文切分
///
/// UAX #29 会在 `Mr.` 这类缩写后断句，以缩写结尾的片段会并入下一句。
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSegmenter;

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences: Vec<String> = Vec::new();
        let mut pending: Option<String> = None;

        for part in text.split_sentence_bounds().map(str::trim) {
            if part.is_empty() {
                continue;
            }

            let sentence = match pending.take() {
                Some(mut head) => {
                    head.push(' ');
                    head.push_str(part);
                    head
                }
                None => part.to_string(),
            };

            if ends_with_abbreviation(&sentence) {
                pending = Some(sentence);
            } else {
                sentences.push(sentence);
            }
        }

        sentences.extend(pending);
        sentences
    }
}

fn ends_with_abbreviation(sentence: &str) -> bool {
    sentence.split_whitespace().last().map_or(false, |word| {
        ScreenplayConstants::abbreviations()
            .iter()
            .any(|abbreviation| abbreviation.eq_ignore_ascii_case(word))
    })
}

/// 不切分，整段作为一句
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeTextSegmenter;

impl SentenceSegmenter for WholeTextSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            Vec::new()
        } else {
            vec![text.to_string()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sentences() {
        let sentences = UnicodeSentenceSegmenter.segment("Hello there. How are you?");
        assert_eq!(sentences, vec!["Hello there.", "How are you?"]);
    }

    #[test]
    fn does_not_split_after_honorifics() {
        let sentences = UnicodeSentenceSegmenter.segment("Mr. Lebowski is here. Dr. Smith too.");
        assert_eq!(sentences, vec!["Mr. Lebowski is here.", "Dr. Smith too."]);
    }

    #[test]
    fn honorifics_match_regardless_of_case() {
        let sentences = UnicodeSentenceSegmenter.segment("WHERE'S MRS. LEBOWSKI? SHE'S GONE.");
        assert_eq!(sentences, vec!["WHERE'S MRS. LEBOWSKI?", "SHE'S GONE."]);
    }

    #[test]
    fn trailing_abbreviation_is_kept() {
        assert_eq!(UnicodeSentenceSegmenter.segment("Ask the Dr."), vec!["Ask the Dr."]);
    }

    #[test]
    fn single_sentence() {
        assert_eq!(UnicodeSentenceSegmenter.segment("I don't know."), vec!["I don't know."]);
    }

    #[test]
    fn empty_text_has_no_sentences() {
        assert!(UnicodeSentenceSegmenter.segment("   ").is_empty());
        assert!(WholeTextSegmenter.segment("").is_empty());
    }

    #[test]
    fn whole_text() {
        assert_eq!(WholeTextSegmenter.segment(" One. Two. "), vec!["One. Two."]);
    }
}
