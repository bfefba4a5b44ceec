// src/progress.rs
/// Progress reporting for a refresh run (one item per fetched page).
/// Front ends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page fetched and parsed; `label` names it, e.g. "2022 lanes p2".
    fn item_done(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Counts calls; handy in tests.
#[derive(Debug, Default)]
pub struct Tally {
    pub total: usize,
    pub done: Vec<String>,
    pub finished: bool,
}

impl Progress for Tally {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, label: &str) {
        self.done.push(s!(label));
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
