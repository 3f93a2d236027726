use crate::ui::state::{InputEdit, Scroll};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,
    Submit,
    Edit(InputEdit),
    ScrollResults(Scroll),
}
