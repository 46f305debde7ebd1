use crate::domain::models::NumberRow;
use ratatui::widgets::TableState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumbersState {
    pub rows: Vec<NumberRow>,
    pub table_state: TableState,
}

impl NumbersState {
    pub fn new(rows: Vec<NumberRow>) -> Self {
        let mut table_state = TableState::default();
        if !rows.is_empty() {
            table_state.select(Some(0));
        }
        Self { rows, table_state }
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected().filter(|i| *i < self.rows.len())
    }
}

/// Whatever page the current path points at. Replaced wholesale on every
/// load, so a reload discards selection and scroll.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Console,
    Numbers(NumbersState),
    Text {
        title: Option<String>,
        body: String,
        scroll: u16,
    },
    Failed(String),
}
