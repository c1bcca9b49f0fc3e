//! Request coalescing for batched remote lookups.
//!
//! The editor emits bursts of small lookups (font subsets, crop
//! previews) that the backend serves far more cheaply as one call.
//! [`Coalescer`] merges every request enqueued within a time window into
//! a single [`Batch`]; settling the batch settles every ticket taken
//! from it.
//!
//! Time is injected as monotonic milliseconds (`performance.now()` in
//! the browser) rather than read from a clock, so flushing is
//! deterministic and driver-agnostic: the caller polls [`Coalescer::take_due`]
//! from whatever timer it already runs.
//!
//! Tickets are single-threaded (`Rc` slots), matching the wasm
//! execution model this crate targets.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

/// Errors from enqueueing into a [`Coalescer`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    /// The pending queue reached capacity before a flush.
    #[error("coalescer queue is full (capacity {0})")]
    QueueFull(usize),
}

/// State of one enqueued request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<R> {
    /// The batch has not been dispatched or has not come back yet.
    Pending,
    /// The batch completed and this is the request's result.
    Completed(R),
    /// The batch failed, or completed without a result at this position.
    Failed,
}

type Slot<R> = Rc<RefCell<Settled<R>>>;

/// Handle to one enqueued request's eventual result.
#[derive(Debug)]
pub struct Ticket<R> {
    slot: Slot<R>,
}

impl<R: Clone> Ticket<R> {
    /// Observe the current state without consuming the ticket.
    pub fn poll(&self) -> Settled<R> {
        self.slot.borrow().clone()
    }
}

/// Bounded queue merging requests enqueued within a time window.
#[derive(Debug)]
pub struct Coalescer<T, R> {
    capacity: usize,
    window_ms: f64,
    pending: Vec<(T, Slot<R>)>,
    deadline: Option<f64>,
}

impl<T, R> Coalescer<T, R> {
    /// A coalescer flushing after `window_ms` or when `capacity`
    /// requests are pending, whichever comes first.
    pub fn new(capacity: usize, window_ms: f64) -> Self {
        Self {
            capacity,
            window_ms,
            pending: Vec::new(),
            deadline: None,
        }
    }

    /// Add a request to the current window. The first enqueue of a
    /// window arms the flush deadline.
    pub fn enqueue(&mut self, item: T, now_ms: f64) -> Result<Ticket<R>, BatchError> {
        if self.pending.len() >= self.capacity {
            return Err(BatchError::QueueFull(self.capacity));
        }
        if self.pending.is_empty() {
            self.deadline = Some(now_ms + self.window_ms);
        }

        let slot: Slot<R> = Rc::new(RefCell::new(Settled::Pending));
        self.pending.push((item, Rc::clone(&slot)));
        Ok(Ticket { slot })
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// True once the window deadline has passed or the queue is full.
    pub fn is_due(&self, now_ms: f64) -> bool {
        !self.pending.is_empty()
            && (self.pending.len() >= self.capacity
                || self.deadline.is_some_and(|deadline| now_ms >= deadline))
    }

    /// Drain the pending window into a batch when due. The caller
    /// performs the merged call and settles the batch with its outcome.
    pub fn take_due(&mut self, now_ms: f64) -> Option<Batch<T, R>> {
        if !self.is_due(now_ms) {
            return None;
        }
        self.deadline = None;
        Some(Batch {
            entries: std::mem::take(&mut self.pending),
        })
    }
}

/// One drained window of requests awaiting a merged call's outcome.
#[derive(Debug)]
pub struct Batch<T, R> {
    entries: Vec<(T, Slot<R>)>,
}

impl<T, R> Batch<T, R> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The batched request payloads, in enqueue order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(item, _)| item)
    }

    /// Settle every ticket with the result at its position. Missing
    /// results fail their tickets; extra results are dropped.
    pub fn complete(self, results: Vec<R>) {
        let mut results = results.into_iter();
        for (_, slot) in self.entries {
            *slot.borrow_mut() = match results.next() {
                Some(result) => Settled::Completed(result),
                None => Settled::Failed,
            };
        }
    }

    /// Fail every ticket, e.g. when the merged call errored.
    pub fn fail(self) {
        for (_, slot) in self.entries {
            *slot.borrow_mut() = Settled::Failed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_within_window() {
        let mut queue: Coalescer<&str, u32> = Coalescer::new(8, 50.0);
        queue.enqueue("a", 0.0).unwrap();

        assert!(!queue.is_due(30.0));
        assert!(queue.take_due(30.0).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_flushes_after_window() {
        let mut queue: Coalescer<&str, u32> = Coalescer::new(8, 50.0);
        let first = queue.enqueue("a", 0.0).unwrap();
        let second = queue.enqueue("b", 10.0).unwrap();

        let batch = queue.take_due(50.0).expect("window elapsed");
        assert_eq!(batch.items().copied().collect::<Vec<_>>(), ["a", "b"]);
        assert!(queue.is_empty());

        batch.complete(vec![1, 2]);
        assert_eq!(first.poll(), Settled::Completed(1));
        assert_eq!(second.poll(), Settled::Completed(2));
    }

    #[test]
    fn test_flushes_at_capacity_before_deadline() {
        let mut queue: Coalescer<u32, u32> = Coalescer::new(2, 1000.0);
        queue.enqueue(1, 0.0).unwrap();
        queue.enqueue(2, 1.0).unwrap();

        assert!(queue.is_due(2.0));
        assert_eq!(queue.take_due(2.0).unwrap().len(), 2);
    }

    #[test]
    fn test_enqueue_on_full_queue_errors() {
        let mut queue: Coalescer<u32, u32> = Coalescer::new(1, 1000.0);
        queue.enqueue(1, 0.0).unwrap();

        let err = queue.enqueue(2, 1.0).unwrap_err();
        assert_eq!(err, BatchError::QueueFull(1));
    }

    #[test]
    fn test_tickets_pending_until_settled() {
        let mut queue: Coalescer<&str, u32> = Coalescer::new(8, 10.0);
        let ticket = queue.enqueue("a", 0.0).unwrap();

        assert_eq!(ticket.poll(), Settled::Pending);
        let batch = queue.take_due(10.0).unwrap();
        assert_eq!(ticket.poll(), Settled::Pending);

        batch.complete(vec![7]);
        assert_eq!(ticket.poll(), Settled::Completed(7));
    }

    #[test]
    fn test_failed_batch_fails_all_tickets() {
        let mut queue: Coalescer<&str, u32> = Coalescer::new(8, 10.0);
        let a = queue.enqueue("a", 0.0).unwrap();
        let b = queue.enqueue("b", 0.0).unwrap();

        queue.take_due(10.0).unwrap().fail();
        assert_eq!(a.poll(), Settled::Failed);
        assert_eq!(b.poll(), Settled::Failed);
    }

    #[test]
    fn test_short_result_list_fails_remainder() {
        let mut queue: Coalescer<&str, u32> = Coalescer::new(8, 10.0);
        let a = queue.enqueue("a", 0.0).unwrap();
        let b = queue.enqueue("b", 0.0).unwrap();

        queue.take_due(10.0).unwrap().complete(vec![1]);
        assert_eq!(a.poll(), Settled::Completed(1));
        assert_eq!(b.poll(), Settled::Failed);
    }

    #[test]
    fn test_new_window_arms_fresh_deadline() {
        let mut queue: Coalescer<&str, u32> = Coalescer::new(8, 50.0);
        queue.enqueue("a", 0.0).unwrap();
        queue.take_due(50.0).unwrap().fail();

        // Next window starts from its own first enqueue.
        queue.enqueue("b", 200.0).unwrap();
        assert!(!queue.is_due(240.0));
        assert!(queue.is_due(250.0));
    }
}
