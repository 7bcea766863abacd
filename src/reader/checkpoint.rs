//! Buffering iterator adapter with nested checkpoints.
//!
//! Every value pulled from the wrapped iterator is appended to a log. Reads behind the
//! end of the log replay from it, so rewinding never re-runs the upstream iterator:
//! for a tokenizer that means no character is scanned twice, however much the parser
//! backtracks.

/// Iterator adapter that remembers everything it produced and can rewind.
#[derive(Debug)]
pub struct CheckpointIter<I: Iterator> {
    upstream: I,
    log: Vec<I::Item>,
    /// Index into `log` of the next value to produce.
    cursor: usize,
    /// Cursor positions saved by `create_checkpoint`, innermost last.
    checkpoints: Vec<usize>,
    /// Largest cursor ever reached.
    furthest: usize,
}

impl<I> CheckpointIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub fn new(upstream: I) -> Self {
        CheckpointIter {
            upstream,
            log: Vec::new(),
            cursor: 0,
            checkpoints: Vec::new(),
            furthest: 0,
        }
    }

    /// Save the current position. Checkpoints nest; each one is closed by exactly one
    /// `rollback` or `commit_checkpoint`.
    pub fn create_checkpoint(&mut self) {
        self.checkpoints.push(self.cursor);
    }

    /// Close the innermost checkpoint and return to the position it saved.
    ///
    /// # Panics
    ///
    /// If no checkpoint is active. That is a bug in the caller, not a property of the input.
    pub fn rollback(&mut self) {
        let saved = self
            .checkpoints
            .pop()
            .expect("internal error: rollback without an active checkpoint");
        self.cursor = saved;
    }

    /// Close the innermost checkpoint, keeping the current position.
    pub fn commit_checkpoint(&mut self) {
        self.checkpoints.pop();
    }

    /// Un-read the most recently produced value. The checkpoint stack is untouched.
    ///
    /// # Panics
    ///
    /// If nothing has been read on the current path.
    pub fn step_back(&mut self) {
        self.cursor = self
            .cursor
            .checked_sub(1)
            .expect("internal error: step_back before the first value");
    }

    /// Number of values read so far on the current path.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of active checkpoints.
    pub fn depth(&self) -> usize {
        self.checkpoints.len()
    }

    /// The furthest value ever produced, on any path.
    pub fn furthest(&self) -> Option<&I::Item> {
        self.log.get(self.furthest.checked_sub(1)?)
    }

    /// Everything produced so far, in upstream order.
    pub fn log(&self) -> &[I::Item] {
        &self.log
    }
}

impl<I> Iterator for CheckpointIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let value = match self.log.get(self.cursor) {
            Some(value) => value.clone(),
            None => {
                let value = self.upstream.next()?;
                self.log.push(value.clone());
                value
            }
        };
        self.cursor += 1;
        self.furthest = self.furthest.max(self.cursor);
        Some(value)
    }
}
