/// RollingWindow keeps the last `capacity` values pushed to it. As soon as the capacity is
/// reached, the oldest value is overwritten.
#[derive(Debug)]
pub struct RollingWindow<T> {
    vals: Vec<T>,
    idx: usize,
    capacity: usize,
}

impl<T: Into<f64> + std::marker::Copy> RollingWindow<T> {
    pub fn new(capacity: usize) -> RollingWindow<T> {
        RollingWindow {
            vals: Vec::with_capacity(capacity),
            idx: 0,
            capacity,
        }
    }

    pub fn push(&mut self, val: T) {
        if self.capacity == 0 {
            return;
        }
        if self.vals.len() < self.capacity {
            self.vals.push(val);
        } else {
            self.vals[self.idx] = val;
            self.idx = (self.idx + 1) % self.capacity;
        }
    }

    pub fn is_full(&self) -> bool {
        self.vals.len() == self.capacity
    }

    pub fn get_avg(&self) -> Option<f64> {
        if self.vals.is_empty() {
            return None;
        }
        Some(self.get_sum() / self.vals.len() as f64)
    }

    fn get_sum(&self) -> f64 {
        self.vals.iter().map(|&val| Into::<f64>::into(val)).sum()
    }
}
