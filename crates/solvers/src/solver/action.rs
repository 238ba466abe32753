/// Actions an observer can take during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the scan; the cursor comes back exhausted.
    StopEarly,

    /// Skip this bracket and keep scanning.
    ///
    /// On [`Event::Sampled`](super::Event::Sampled) the bracket is not
    /// tested; on [`Event::Honed`](super::Event::Honed) the refined point is
    /// discarded even if valid.
    Ignore,
}
