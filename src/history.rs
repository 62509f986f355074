// Rolling CPU/RAM history feeding the chart and sparklines

use std::collections::VecDeque;

/// Number of samples kept per metric.
pub const HISTORY_LENGTH: usize = 40;

/// Value the buffer is pre-filled with so charts start at full width.
pub const HISTORY_FILL: f64 = 20.0;

/// Fixed-capacity FIFO of CPU and RAM samples, oldest first.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    capacity: usize,
    cpu: VecDeque<f64>,
    ram: VecDeque<f64>,
}

/// Owned copy of the buffer contents handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    pub cpu: Vec<f64>,
    pub ram: Vec<f64>,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(HISTORY_LENGTH, HISTORY_FILL)
    }
}

impl HistoryBuffer {
    /// Buffer of `capacity` samples per metric, all set to `fill`.
    /// A zero capacity is bumped to 1.
    pub fn new(capacity: usize, fill: f64) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            cpu: std::iter::repeat_n(fill, capacity).collect(),
            ram: std::iter::repeat_n(fill, capacity).collect(),
        }
    }

    /// Empty buffer that grows to `capacity` before it starts dropping.
    #[cfg(test)]
    pub(crate) fn empty(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            cpu: VecDeque::with_capacity(capacity + 1),
            ram: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.cpu.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty()
    }

    /// Appends one sample per metric and drops the oldest past capacity.
    pub fn push(&mut self, cpu: f64, ram: f64) {
        self.cpu.push_back(cpu);
        self.ram.push_back(ram);
        while self.cpu.len() > self.capacity {
            self.cpu.pop_front();
        }
        while self.ram.len() > self.capacity {
            self.ram.pop_front();
        }
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            cpu: self.cpu.iter().copied().collect(),
            ram: self.ram.iter().copied().collect(),
        }
    }
}

impl HistorySnapshot {
    /// Per-index mean of CPU and RAM. Drawn in the disk sparkline in place of
    /// a real disk history.
    pub fn disk_trace(&self) -> Vec<f64> {
        self.cpu
            .iter()
            .zip(&self.ram)
            .map(|(c, r)| (c + r) / 2.0)
            .collect()
    }
}
