/// Configuration for creating a [`Session`](crate::Session).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: i32,
    pub cols: i32,
}

impl SessionConfig {
    /// Set the grid dimensions (builder).
    pub fn with_size(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { rows: 50, cols: 50 }
    }
}
