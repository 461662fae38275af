use crate::interpreter::value::core::Value;

/// The owned child sequence of an S-expression or Q-expression.
///
/// `Cells` is the only place children live, and every way of getting a child
/// out of it moves the child: there is no shared access to a detached value
/// and nothing is ever copied. Dropping a `Cells` drops every child it still
/// owns.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Cells(Vec<Value>);

impl Cells {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the children in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Detaches and returns the child at `index`, shifting later children
    /// down. The sequence and its other children stay alive.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Example
    /// ```
    /// use lispty::interpreter::value::{cells::Cells, core::Value};
    ///
    /// let mut cells: Cells = [1, 2, 3].into_iter().map(Value::Number).collect();
    /// assert_eq!(cells.pop(0), Value::Number(1));
    /// assert_eq!(cells.len(), 2);
    /// ```
    #[must_use = "a popped child is dropped unless it is used"]
    pub fn pop(&mut self, index: usize) -> Value {
        self.0.remove(index)
    }

    /// Detaches the child at `index` and drops the sequence together with
    /// every other child.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn take(mut self, index: usize) -> Value {
        self.pop(index)
    }

    /// Moves every child of `other` onto the end of `self`, in order, and
    /// drops the emptied `other`.
    ///
    /// # Example
    /// ```
    /// use lispty::interpreter::value::{cells::Cells, core::Value};
    ///
    /// let left: Cells = [1, 2].into_iter().map(Value::Number).collect();
    /// let right: Cells = [3].into_iter().map(Value::Number).collect();
    ///
    /// assert_eq!(left.join(right).len(), 3);
    /// ```
    #[must_use]
    pub fn join(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }
}

impl Drop for Cells {
    /// Drops nested lists from a worklist so that dropping a deep tree does
    /// not recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.0);

        while let Some(mut value) = pending.pop() {
            if let Value::SExpr(cells) | Value::QExpr(cells) = &mut value {
                pending.append(&mut cells.0);
            }
        }
    }
}

impl From<Vec<Value>> for Cells {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Cells {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Cells {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(mut self) -> Self::IntoIter {
        std::mem::take(&mut self.0).into_iter()
    }
}

impl<'a> IntoIterator for &'a Cells {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
