/// A commit taken from a push webhook.
///
/// Only lives for the duration of the request that delivered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Commit SHA when the sender provides one; used for log context only
    pub id: Option<String>,
    /// First line of the commit message
    pub title: String,
    /// Full commit message, title included
    pub message: String,
}

impl Commit {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Abbreviated SHA for log fields, `-` when unknown
    pub fn short_id(&self) -> &str {
        match self.id.as_deref() {
            Some(id) => id.get(..8).unwrap_or(id),
            None => "-",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        let mut commit = Commit::new("release: v1.0.0", "");
        assert_eq!(commit.short_id(), "-");

        commit.id = Some("b6568db1bc1dcd7f8b4d5a946b0b91f9dacd7327".to_string());
        assert_eq!(commit.short_id(), "b6568db1");

        commit.id = Some("abc".to_string());
        assert_eq!(commit.short_id(), "abc");
    }
}
