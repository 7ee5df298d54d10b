pub mod ovp;
pub mod session;
pub mod timing;
pub mod token;

pub use ovp::{format_word, pivot_index, PivotSegments};
pub use session::{Phase, Session};
pub use timing::{tokenize_text, word_delay, word_delay_ms, wpm_to_milliseconds, PauseKind};
pub use token::WordToken;
