//! Double-buffered cell storage.
//!
//! [`CellBuffers`] keeps two same-sized buffers that alternate between
//! "published" (the current generation, readable and point-editable)
//! and "staging" (the next generation under construction). A step reads
//! only the published buffer and writes only the staging buffer; once
//! every cell has been written, [`CellBuffers::publish`] swaps the roles.
//! The old published buffer is then reused as the next staging buffer,
//! so no allocation happens per step.

pub(crate) struct CellBuffers {
    published: Vec<bool>,
    staging: Vec<bool>,
}

impl CellBuffers {
    /// Wrap an initial generation. The staging buffer is allocated to match.
    pub(crate) fn new(initial: Vec<bool>) -> Self {
        let staging = vec![false; initial.len()];
        Self {
            published: initial,
            staging,
        }
    }

    /// The current generation.
    pub(crate) fn current(&self) -> &[bool] {
        &self.published
    }

    /// Mutable access to the current generation, for point edits between steps.
    pub(crate) fn current_mut(&mut self) -> &mut [bool] {
        &mut self.published
    }

    /// Split into `(published, staging)` for computing the next generation.
    ///
    /// The borrow checker keeps the two halves disjoint: the step cannot
    /// read a cell it has already rewritten.
    pub(crate) fn split(&mut self) -> (&[bool], &mut [bool]) {
        (&self.published, &mut self.staging)
    }

    /// Make the staging buffer the current generation.
    pub(crate) fn publish(&mut self) {
        std::mem::swap(&mut self.published, &mut self.staging);
    }
}
