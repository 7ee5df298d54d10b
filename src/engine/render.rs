use crate::reading::PivotSegments;

/// Everything a renderer needs to paint the reader.
///
/// Emitted after every state-affecting transition.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInstruction {
    pub word: PivotSegments,
    /// Share of the text shown so far, in `[0, 1]`.
    pub progress: f64,
    pub wpm: u32,
    /// `false` means the reader was dismissed and should be torn down.
    pub visible: bool,
    /// Paused hint; renderers usually draw the word faded.
    pub dimmed: bool,
}

impl RenderInstruction {
    pub fn hidden(wpm: u32) -> Self {
        Self {
            word: PivotSegments::default(),
            progress: 0.0,
            wpm,
            visible: false,
            dimmed: false,
        }
    }
}

/// Receiver of render instructions.
pub trait RenderSink {
    fn render(&mut self, instruction: &RenderInstruction);
}

/// Sink that keeps every instruction, useful for headless runs.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub instructions: Vec<RenderInstruction>,
}

impl RecordingSink {
    pub fn last(&self) -> Option<&RenderInstruction> {
        self.instructions.last()
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, instruction: &RenderInstruction) {
        self.instructions.push(instruction.clone());
    }
}
