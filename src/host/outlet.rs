use super::OutletSink;

/// Fixed bank of float outlets, sized once when the object is created.
#[derive(Clone, Debug)]
pub struct OutletBank {
    values: Box<[f64]>,
    writes: u64,
}

impl OutletBank {
    pub fn new(slot_count: usize) -> Self {
        Self {
            values: vec![0.0; slot_count].into_boxed_slice(),
            writes: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<f64> {
        self.values.get(slot).copied()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Total number of values delivered since creation.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl OutletSink for OutletBank {
    fn outlet_float(&mut self, slot: usize, value: f64) {
        match self.values.get_mut(slot) {
            Some(outlet) => {
                *outlet = value;
                self.writes += 1;
            }
            None => log::warn!(
                "dropping value {} for outlet {} (only {} outlets)",
                value,
                slot,
                self.values.len()
            ),
        }
    }
}
