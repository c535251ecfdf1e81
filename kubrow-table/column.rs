use std::borrow::Cow;

/// Default `NAMESPACE` column.
pub const NAMESPACE: Column = Column::new("NAMESPACE");

/// Default `NAME` column.
pub const NAME: Column = Column::new("NAME");

/// Default `AGE` column.
pub const AGE: Column = Column::time("AGE");

/// Column for the table header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: Cow<'static, str>,
    pub is_wide: bool,
    pub is_time: bool,
}

impl Column {
    /// Creates new [`Column`] instance that is always visible.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            is_wide: false,
            is_time: false,
        }
    }

    /// Creates new [`Column`] instance that is visible only in the wide view.
    pub const fn wide(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            is_wide: true,
            is_time: false,
        }
    }

    /// Creates new [`Column`] instance that holds elapsed time values.
    pub const fn time(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            is_wide: false,
            is_time: true,
        }
    }

    /// Returns `true` if values in this column should be aligned to the right.
    #[inline]
    pub fn to_right(&self) -> bool {
        self.is_time
    }
}
