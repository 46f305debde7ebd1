use crate::domain::models::{Approval, CommandText, NumberId};
use crate::domain::submission::InFlight;

/// Side effects requested by the reducer, run by the loop.
#[derive(Debug)]
pub enum Command {
    LoadPage(String),
    /// The guard keeps the submit control disabled until the task ends.
    Submit(CommandText, InFlight),
    SetApproval {
        path: String,
        id: NumberId,
        approval: Approval,
    },
}
