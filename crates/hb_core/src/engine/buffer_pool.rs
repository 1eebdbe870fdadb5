//! Pre-allocated trajectory buffers.
//!
//! A game owns one pool; the integrator borrows a buffer per flight and the
//! caller returns it when the trajectory has been consumed. Games are
//! single-threaded internally, so the pool needs no synchronization.

use nalgebra::Vector3;

use crate::error::GameError;

/// One recorded integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub t: f64,
    pub pos: Vector3<f64>,
    pub vel: Vector3<f64>,
}

/// A reusable trace of one flight.
#[derive(Debug, Clone)]
pub struct TrajectoryBuffer {
    samples: Vec<TrajectorySample>,
    capacity: usize,
}

impl TrajectoryBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { samples: Vec::with_capacity(capacity), capacity }
    }

    /// Append a sample; `false` when the buffer is full.
    #[inline]
    pub fn push(&mut self, sample: TrajectorySample) -> bool {
        if self.samples.len() >= self.capacity {
            return false;
        }
        self.samples.push(sample);
        true
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Fixed-size pool of trajectory buffers.
pub struct BufferPool {
    free: Vec<TrajectoryBuffer>,
    total: usize,
}

impl BufferPool {
    /// `pool_size` buffers, each able to trace `max_steps` integration steps.
    pub fn new(pool_size: usize, max_steps: usize) -> Self {
        let free = (0..pool_size).map(|_| TrajectoryBuffer::with_capacity(max_steps)).collect();
        Self { free, total: pool_size }
    }

    /// Take a cleared buffer. An empty pool is an invariant violation: pools
    /// are sized for the worst case and flights return their buffer.
    pub fn acquire(&mut self) -> Result<TrajectoryBuffer, GameError> {
        match self.free.pop() {
            Some(mut buf) => {
                buf.clear();
                Ok(buf)
            }
            None => Err(GameError::BufferPoolExhausted),
        }
    }

    pub fn release(&mut self, buf: TrajectoryBuffer) {
        debug_assert!(self.free.len() < self.total, "released more buffers than acquired");
        self.free.push(buf);
    }

    pub fn available(&self) -> usize {
        self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_release_cycle() {
        let mut pool = BufferPool::new(2, 16);
        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        assert!(matches!(pool.acquire(), Err(GameError::BufferPoolExhausted)));
        pool.release(a);
        pool.release(b);
        assert_eq!(pool.available(), 2);
    }

    #[test]
    fn test_buffer_capacity_enforced() {
        let mut buf = TrajectoryBuffer::with_capacity(2);
        let sample = TrajectorySample {
            t: 0.0,
            pos: Vector3::zeros(),
            vel: Vector3::zeros(),
        };
        assert!(buf.push(sample));
        assert!(buf.push(sample));
        assert!(!buf.push(sample));
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_reacquired_buffer_is_cleared() {
        let mut pool = BufferPool::new(1, 8);
        let mut buf = pool.acquire().unwrap();
        buf.push(TrajectorySample { t: 0.0, pos: Vector3::zeros(), vel: Vector3::zeros() });
        pool.release(buf);
        let buf = pool.acquire().unwrap();
        assert!(buf.is_empty());
    }
}
