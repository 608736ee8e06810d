//! View states and the back-navigation table.

/// Which view is active and receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    FilePicker,
    FileModeChoice,
    TextInputs,
    CertPicker,
    Result,
}

impl ViewState {
    pub const ALL: [ViewState; 5] = [
        ViewState::FilePicker,
        ViewState::FileModeChoice,
        ViewState::TextInputs,
        ViewState::CertPicker,
        ViewState::Result,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// How a state was reached; only `TextInputs` has more than one predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryReason {
    #[default]
    Direct,
    ViaFileModeChoice,
}

/// Where Esc leads from a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackEdge {
    /// Leave the program.
    Exit,
    To(ViewState),
}

/// Esc targets keyed by (state, entry reason).
pub fn back_edge(state: ViewState, entry: EntryReason) -> BackEdge {
    use EntryReason::*;
    use ViewState::*;
    match (state, entry) {
        (FilePicker, _) => BackEdge::Exit,
        (FileModeChoice, _) => BackEdge::To(FilePicker),
        (TextInputs, ViaFileModeChoice) => BackEdge::To(FileModeChoice),
        (TextInputs, Direct) => BackEdge::To(FilePicker),
        (CertPicker, _) => BackEdge::To(TextInputs),
        (Result, _) => BackEdge::Exit,
    }
}

/// What a key press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Goto(ViewState, EntryReason),
    Back,
    Quit,
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
