/// Per-note interaction state shared by list rows and the detail view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum NoteRowState {
    #[default]
    Idle,
    ConfirmingDelete,
    /// A delete or archive toggle is in flight.
    Processing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RowEvent {
    AskDelete,
    Cancel,
    ConfirmDelete,
    ToggleArchive,
    /// The mutation finished, successfully or not.
    Settled,
}

impl NoteRowState {
    /// Events that do not apply to the current state are ignored.
    pub fn next(self, event: RowEvent) -> Self {
        use NoteRowState::*;
        match (self, event) {
            (Idle, RowEvent::AskDelete) => ConfirmingDelete,
            (Idle, RowEvent::ToggleArchive) => Processing,
            (ConfirmingDelete, RowEvent::Cancel) => Idle,
            (ConfirmingDelete, RowEvent::ConfirmDelete) => Processing,
            (Processing, RowEvent::Settled) => Idle,
            (state, _) => state,
        }
    }

    /// Whether `event` moves this row into [`NoteRowState::Processing`],
    /// i.e. whether the caller should start the mutation.
    pub fn starts_work(self, event: RowEvent) -> bool {
        self != NoteRowState::Processing && self.next(event) == NoteRowState::Processing
    }

    pub fn is_busy(self) -> bool {
        self == NoteRowState::Processing
    }

    pub fn is_confirming(self) -> bool {
        self == NoteRowState::ConfirmingDelete
    }
}
