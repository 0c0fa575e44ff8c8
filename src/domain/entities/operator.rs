use std::fmt;

/// The chat user who sent a command
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
    pub id: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl Operator {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
            first_name: None,
        }
    }

    pub fn with_username(mut self, username: Option<impl Into<String>>) -> Self {
        self.username = username.map(Into::into);
        self
    }

    pub fn with_first_name(mut self, first: Option<impl Into<String>>) -> Self {
        self.first_name = first.map(Into::into);
        self
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.username, &self.first_name) {
            (Some(username), _) => write!(f, "@{} ({})", username, self.id),
            (None, Some(first)) => write!(f, "{} ({})", first, self.id),
            (None, None) => write!(f, "{}", self.id),
        }
    }
}
