pub mod accumulator;
pub mod classifier;
pub mod error;
pub mod indentation;
pub mod screenplay_parser;
pub mod segmenter;
pub mod text_processor;

pub use accumulator::{ElementAccumulator, ScanState, Step};
pub use classifier::{LineClassifier, ScriptLine};
pub use error::{ParseError, ParseResult};
pub use indentation::analyze;
pub use screenplay_parser::ScreenplayParser;
pub use segmenter::{SentenceSegmenter, UnicodeSentenceSegmenter, WholeTextSegmenter};
pub use text_processor::{normalize, normalize_character};
