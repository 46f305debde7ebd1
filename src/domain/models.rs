use std::fmt;

/// Text the user submits to the console. Any value is accepted, the empty
/// string included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CommandText(pub String);

impl CommandText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommandText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CommandText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Raw body the server answered with. Rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseText(pub String);

impl ResponseText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResponseText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier carried by a `data-number` attribute on the admin numbers page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NumberId(pub String);

impl fmt::Display for NumberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberRow {
    pub id: NumberId,
    pub name: Option<String>,
    pub approved: bool,
}

impl NumberRow {
    /// Label of the action the row offers: unapproved rows can be approved
    /// and vice versa.
    pub fn action_label(&self) -> &'static str {
        if self.approved {
            "Unapprove"
        } else {
            "Approve"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approval {
    Approve,
    Unapprove,
}

impl Approval {
    /// The toggle a row offers given its current state.
    pub fn toggle_for(row: &NumberRow) -> Self {
        if row.approved {
            Approval::Unapprove
        } else {
            Approval::Approve
        }
    }

    pub fn path_segment(&self) -> &'static str {
        match self {
            Approval::Approve => "approve",
            Approval::Unapprove => "unapprove",
        }
    }
}

/// What a server page turned into once its markup was read.
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    /// The home page: the console form plus its example commands.
    Console { suggestions: Vec<String> },
    Numbers { rows: Vec<NumberRow> },
    Text { title: Option<String>, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_toggle_follows_row_state() {
        let unapproved = NumberRow {
            id: NumberId("42".to_string()),
            name: None,
            approved: false,
        };
        assert_eq!(Approval::toggle_for(&unapproved), Approval::Approve);
        assert_eq!(unapproved.action_label(), "Approve");

        let approved = NumberRow {
            approved: true,
            ..unapproved
        };
        assert_eq!(Approval::toggle_for(&approved), Approval::Unapprove);
        assert_eq!(approved.action_label(), "Unapprove");
        assert_eq!(Approval::Unapprove.path_segment(), "unapprove");
    }
}
