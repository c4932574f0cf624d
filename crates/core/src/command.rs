/// An ordered list of single-character rover command tokens.
///
/// Tokens are not validated here: whatever the operator typed is forwarded
/// character by character to the collaborator that executes the commands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandSequence {
    tokens: Vec<String>,
}

impl CommandSequence {
    /// Splits one raw input line into per-character tokens, keeping order.
    pub fn from_raw(raw: &str) -> Self {
        Self {
            tokens: raw.chars().map(String::from).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
