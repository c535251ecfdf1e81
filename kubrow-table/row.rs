/// Single table row.\
/// **Note** that `fields` are aligned with the [`crate::Header`] columns the row was rendered for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub id: String,
    pub fields: Box<[String]>,
}

impl Row {
    /// Creates new [`Row`] instance.
    pub fn new(id: String, fields: Box<[String]>) -> Self {
        Self { id, fields }
    }

    /// Returns number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns text for the specified `column`.
    pub fn field(&self, column: usize) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}
