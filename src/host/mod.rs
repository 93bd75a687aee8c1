mod class;
mod instance;
mod outlet;

pub use self::class::ObjectClass;
pub use self::instance::SupersawerInstance;
pub use self::outlet::OutletBank;

/// Destination for values leaving an object's outlets.
pub trait OutletSink {
    fn outlet_float(&mut self, slot: usize, value: f64);
}

impl OutletSink for Vec<(usize, f64)> {
    fn outlet_float(&mut self, slot: usize, value: f64) {
        self.push((slot, value));
    }
}
