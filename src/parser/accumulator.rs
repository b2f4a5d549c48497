use log::{debug, warn};
use crate::models::{ElementType, ParserConf, ScriptElement};
use crate::parser::classifier::ScriptLine;
use crate::parser::segmenter::{SentenceSegmenter, WholeTextSegmenter};
use crate::parser::text_processor::normalize_character;

/// 扫描状态
///
/// 任一时刻最多只有一个正在累积的元素。处于 `Dialogue` 状态即表示有当前角色，
/// 此时 `text` 为空说明刚读到角色名，还没有对白。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Action {
        text: String,
        indentation: usize,
    },
    Dialogue {
        character: String,
        text: String,
        indentation: usize,
    },
}

impl ScanState {
    pub fn in_dialogue(&self) -> bool {
        matches!(self, ScanState::Dialogue { .. })
    }

    pub fn character(&self) -> Option<&str> {
        match self {
            ScanState::Dialogue { character, .. } => Some(character.as_str()),
            _ => None,
        }
    }
}

/// 处理一行后的结果：新状态，以及按顺序产出的元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: ScanState,
    pub emitted: Vec<ScriptElement>,
}

impl Step {
    fn new(state: ScanState) -> Self {
        Step {
            state,
            emitted: Vec::new(),
        }
    }

    fn emit(mut self, element: Option<ScriptElement>) -> Self {
        if let Some(element) = element {
            debug!("emit {} (line indent {})", element.element_type(), element.indentation());
            self.emitted.push(element);
        }
        self
    }
}

/// 元素累积状态机
///
/// 状态作为值传入并返回，`step` 本身不持有任何可变状态。
pub struct ElementAccumulator<'a> {
    conf: &'a ParserConf,
    segmenter: &'a dyn SentenceSegmenter,
}

impl<'a> ElementAccumulator<'a> {
    pub fn new(conf: &'a ParserConf, segmenter: &'a dyn SentenceSegmenter) -> Self {
        ElementAccumulator { conf, segmenter }
    }

    /// 处理一行已分类的文本
    pub fn step(&self, state: ScanState, element_type: ElementType, line: &ScriptLine) -> Step {
        match element_type {
            ElementType::SceneHeading | ElementType::Location | ElementType::Transition => {
                let text = line.text.clone();
                let indentation = line.indent;
                let element = match element_type {
                    ElementType::SceneHeading => ScriptElement::SceneHeading { text, indentation },
                    ElementType::Location => ScriptElement::Location { text, indentation },
                    _ => ScriptElement::Transition { text, indentation },
                };
                Step::new(ScanState::Idle)
                    .emit(self.flush(state))
                    .emit(Some(element))
            }
            ElementType::Character => {
                let character =
                    normalize_character(&line.text, self.conf.strip_character_extensions);
                Step::new(ScanState::Dialogue {
                    character,
                    text: String::new(),
                    indentation: line.indent,
                })
                .emit(self.flush(state))
            }
            ElementType::Dialogue => match state {
                ScanState::Dialogue {
                    character,
                    mut text,
                    mut indentation,
                } => {
                    if text.is_empty() {
                        indentation = line.indent;
                    } else {
                        text.push(' ');
                    }
                    text.push_str(&line.text);
                    Step::new(ScanState::Dialogue {
                        character,
                        text,
                        indentation,
                    })
                }
                other => {
                    warn!(
                        "line {}: dialogue without a character, treating as action: {}",
                        line.number, line.text
                    );
                    self.step(other, ElementType::Action, line)
                }
            },
            ElementType::Parenthetical => {
                let element = ScriptElement::Parenthetical {
                    text: line.text.clone(),
                    character: state.character().map(str::to_string),
                    indentation: line.indent,
                };
                match state {
                    // 先收尾已有的对白以保持源文本顺序，角色上下文保留给后续对白
                    ScanState::Dialogue {
                        character,
                        text,
                        indentation,
                    } => {
                        let flushed = if text.is_empty() {
                            None
                        } else {
                            self.flush(ScanState::Dialogue {
                                character: character.clone(),
                                text,
                                indentation,
                            })
                        };
                        let next = ScanState::Dialogue {
                            character,
                            text: String::new(),
                            indentation,
                        };
                        Step::new(next).emit(flushed).emit(Some(element))
                    }
                    other => Step::new(ScanState::Idle)
                        .emit(self.flush(other))
                        .emit(Some(element)),
                }
            }
            ElementType::Action => match state {
                ScanState::Action {
                    mut text,
                    indentation,
                } => {
                    text.push(' ');
                    text.push_str(&line.text);
                    Step::new(ScanState::Action { text, indentation })
                }
                other => Step::new(ScanState::Action {
                    text: line.text.clone(),
                    indentation: line.indent,
                })
                .emit(self.flush(other)),
            },
        }
    }

    /// 处理空行：默认结束当前元素，关闭 `blank_line_closes_block` 后状态不变
    pub fn blank(&self, state: ScanState) -> Step {
        if self.conf.blank_line_closes_block {
            Step::new(ScanState::Idle).emit(self.flush(state))
        } else {
            Step::new(state)
        }
    }

    /// 输入结束，收尾正在累积的元素
    pub fn finish(&self, state: ScanState) -> Option<ScriptElement> {
        self.flush(state)
    }

    fn flush(&self, state: ScanState) -> Option<ScriptElement> {
        match state {
            ScanState::Idle => None,
            ScanState::Action { text, indentation } => {
                if text.is_empty() {
                    None
                } else {
                    Some(ScriptElement::Action { text, indentation })
                }
            }
            ScanState::Dialogue {
                character,
                text,
                indentation,
            } => {
                if text.is_empty() {
                    debug!("discarding character cue without dialogue: {}", character);
                    return None;
                }

                let mut sentences = if self.conf.segment_dialogue {
                    self.segmenter.segment(&text)
                } else {
                    WholeTextSegmenter.segment(&text)
                };
                if sentences.is_empty() {
                    sentences.push(text);
                }

                Some(ScriptElement::Dialogue {
                    character,
                    sentences,
                    indentation,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::segmenter::UnicodeSentenceSegmenter;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::sync::{Mutex, Once};

    /// 收集日志记录，用于断言告警确实被写出
    struct CaptureLogger {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };
    static CAPTURE_INIT: Once = Once::new();

    fn capture_logs() {
        CAPTURE_INIT.call_once(|| {
            let _ = log::set_logger(&CAPTURE);
            log::set_max_level(LevelFilter::Trace);
        });
    }

    fn warned_about(text: &str) -> bool {
        CAPTURE
            .records
            .lock()
            .unwrap()
            .iter()
            .any(|(level, message)| *level == Level::Warn && message.contains(text))
    }

    /// 按 "|" 切分，便于断言
    struct PipeSegmenter;

    impl SentenceSegmenter for PipeSegmenter {
        fn segment(&self, text: &str) -> Vec<String> {
            text.split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        }
    }

    fn line(indent: usize, text: &str) -> ScriptLine {
        ScriptLine::new(1, indent, text)
    }

    fn run(conf: &ParserConf, lines: &[(ElementType, usize, &str)]) -> Vec<ScriptElement> {
        let segmenter = PipeSegmenter;
        let accumulator = ElementAccumulator::new(conf, &segmenter);
        let mut state = ScanState::Idle;
        let mut out = Vec::new();
        for (element_type, indent, text) in lines {
            let step = accumulator.step(state, *element_type, &line(*indent, text));
            out.extend(step.emitted);
            state = step.state;
        }
        out.extend(accumulator.finish(state));
        out
    }

    #[test]
    fn character_opens_dialogue_context() {
        let conf = ParserConf::default();
        let segmenter = UnicodeSentenceSegmenter;
        let accumulator = ElementAccumulator::new(&conf, &segmenter);
        let step = accumulator.step(ScanState::Idle, ElementType::Character, &line(3, "john"));
        assert!(step.emitted.is_empty());
        assert_eq!(step.state.character(), Some("JOHN"));
    }

    #[test]
    fn dialogue_lines_merge_and_segment_on_flush() {
        let elements = run(
            &ParserConf::default(),
            &[
                (ElementType::Character, 3, "JOHN"),
                (ElementType::Dialogue, 2, "One | two"),
                (ElementType::Dialogue, 2, "continues | three"),
            ],
        );
        assert_eq!(
            elements,
            vec![ScriptElement::Dialogue {
                character: "JOHN".to_string(),
                sentences: vec![
                    "One".to_string(),
                    "two continues".to_string(),
                    "three".to_string()
                ],
                indentation: 2,
            }]
        );
    }

    #[test]
    fn segmentation_can_be_disabled() {
        let conf = ParserConf {
            segment_dialogue: false,
            ..ParserConf::default()
        };
        let elements = run(
            &conf,
            &[
                (ElementType::Character, 3, "JOHN"),
                (ElementType::Dialogue, 2, "One | two"),
            ],
        );
        assert_eq!(elements[0].content(), vec!["One | two"]);
    }

    #[test]
    fn orphan_character_is_discarded() {
        let elements = run(
            &ParserConf::default(),
            &[
                (ElementType::Character, 3, "JOHN"),
                (ElementType::Character, 3, "JANE"),
                (ElementType::Dialogue, 2, "Hi."),
            ],
        );
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].character(), Some("JANE"));
    }

    #[test]
    fn consecutive_actions_merge() {
        let elements = run(
            &ParserConf::default(),
            &[
                (ElementType::Action, 0, "A man walks in."),
                (ElementType::Action, 1, "He sits."),
            ],
        );
        assert_eq!(
            elements,
            vec![ScriptElement::Action {
                text: "A man walks in. He sits.".to_string(),
                indentation: 0,
            }]
        );
    }

    #[test]
    fn scene_heading_flushes_dialogue_and_clears_context() {
        let conf = ParserConf::default();
        let segmenter = PipeSegmenter;
        let accumulator = ElementAccumulator::new(&conf, &segmenter);
        let state = ScanState::Dialogue {
            character: "JOHN".to_string(),
            text: "Bye.".to_string(),
            indentation: 2,
        };
        let step = accumulator.step(state, ElementType::SceneHeading, &line(0, "EXT. STREET - DAY"));
        assert_eq!(step.state, ScanState::Idle);
        assert_eq!(step.emitted.len(), 2);
        assert_eq!(step.emitted[0].element_type(), ElementType::Dialogue);
        assert_eq!(step.emitted[1].element_type(), ElementType::SceneHeading);
    }

    #[test]
    fn action_ends_dialogue_context() {
        let elements = run(
            &ParserConf::default(),
            &[
                (ElementType::Character, 3, "JOHN"),
                (ElementType::Dialogue, 2, "Hi."),
                (ElementType::Action, 0, "He leaves."),
            ],
        );
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].text(), "He leaves.");
        assert_eq!(elements[1].character(), None);
    }

    #[test]
    fn dialogue_without_character_recovers_as_action() {
        capture_logs();

        let elements = run(
            &ParserConf::default(),
            &[
                (ElementType::Action, 0, "Door opens."),
                (ElementType::Dialogue, 2, "Someone mutters."),
            ],
        );
        assert_eq!(
            elements,
            vec![ScriptElement::Action {
                text: "Door opens. Someone mutters.".to_string(),
                indentation: 0,
            }]
        );
        assert!(warned_about("Someone mutters."), "应该写出告警");

        let elements = run(
            &ParserConf::default(),
            &[(ElementType::Dialogue, 2, "Nobody answers.")],
        );
        assert_eq!(
            elements,
            vec![ScriptElement::Action {
                text: "Nobody answers.".to_string(),
                indentation: 2,
            }]
        );
        assert!(warned_about("Nobody answers."), "应该写出告警");
    }

    #[test]
    fn parenthetical_keeps_character_and_source_order() {
        let elements = run(
            &ParserConf::default(),
            &[
                (ElementType::Character, 3, "JOHN"),
                (ElementType::Dialogue, 2, "Well."),
                (ElementType::Parenthetical, 2, "(beat)"),
                (ElementType::Dialogue, 2, "No."),
            ],
        );
        let types: Vec<ElementType> = elements.iter().map(|e| e.element_type()).collect();
        assert_eq!(
            types,
            vec![ElementType::Dialogue, ElementType::Parenthetical, ElementType::Dialogue]
        );
        assert!(elements.iter().all(|e| e.character() == Some("JOHN")));
    }

    #[test]
    fn parenthetical_outside_dialogue_has_no_character() {
        let elements = run(
            &ParserConf::default(),
            &[(ElementType::Parenthetical, 0, "(silence)")],
        );
        assert_eq!(elements[0].character(), None);
    }

    #[test]
    fn blank_line_can_keep_state() {
        let conf = ParserConf {
            blank_line_closes_block: false,
            ..ParserConf::default()
        };
        let segmenter = PipeSegmenter;
        let accumulator = ElementAccumulator::new(&conf, &segmenter);
        let state = ScanState::Action {
            text: "x".to_string(),
            indentation: 0,
        };
        let step = accumulator.blank(state.clone());
        assert_eq!(step.state, state);
        assert!(step.emitted.is_empty());
    }

    #[test]
    fn blank_line_closes_block_by_default() {
        let conf = ParserConf::default();
        let segmenter = PipeSegmenter;
        let accumulator = ElementAccumulator::new(&conf, &segmenter);
        let step = accumulator.blank(ScanState::Action {
            text: "x".to_string(),
            indentation: 0,
        });
        assert_eq!(step.state, ScanState::Idle);
        assert_eq!(step.emitted.len(), 1);
    }

    #[test]
    fn finish_on_idle_emits_nothing() {
        let conf = ParserConf::default();
        let segmenter = PipeSegmenter;
        let accumulator = ElementAccumulator::new(&conf, &segmenter);
        assert_eq!(accumulator.finish(ScanState::Idle), None);
    }

    #[test]
    fn empty_segmentation_falls_back_to_joined_text() {
        let elements = run(
            &ParserConf::default(),
            &[
                (ElementType::Character, 3, "JOHN"),
                (ElementType::Dialogue, 2, "|"),
            ],
        );
        assert_eq!(elements[0].content(), vec!["|"]);
    }
}
