use super::outlet::OutletBank;
use super::OutletSink;
use crate::supersaw::{Message, SupersawConfig, VoiceSpreadCalculator};

/// One supersawer object in a patch: its calculator plus the outlets it owns.
pub struct SupersawerInstance {
    calculator: VoiceSpreadCalculator,
    outlets: OutletBank,
}

impl SupersawerInstance {
    pub fn new(config: &SupersawConfig) -> Self {
        let calculator = VoiceSpreadCalculator::from_config(config);
        let outlets = OutletBank::new(calculator.slot_count());
        Self {
            calculator,
            outlets,
        }
    }

    pub fn calculator(&self) -> &VoiceSpreadCalculator {
        &self.calculator
    }

    pub fn outlets(&self) -> &OutletBank {
        &self.outlets
    }

    pub fn inlet_count(&self) -> usize {
        super::ObjectClass::INLETS
    }

    pub fn outlet_count(&self) -> usize {
        self.outlets.len()
    }

    /// Routes a message to the matching setter, or emits to this instance's outlets on bang.
    pub fn dispatch(&mut self, message: Message) {
        log::trace!("dispatch {}", message);
        match message {
            Message::Bang => Self::send(&self.calculator, &mut self.outlets),
            _ => self.apply(message),
        }
    }

    /// Like `dispatch`, but a bang is delivered to `sink` instead of the owned outlets.
    pub fn dispatch_to(&mut self, message: Message, sink: &mut dyn OutletSink) {
        match message {
            Message::Bang => Self::send(&self.calculator, sink),
            _ => self.apply(message),
        }
    }

    pub fn bang(&mut self) {
        self.dispatch(Message::Bang);
    }

    fn apply(&mut self, message: Message) {
        match message {
            Message::Float(x) => self.calculator.set_base_frequency(x),
            Message::Int(n) => self.calculator.set_base_frequency(n as f64),
            Message::Voices(n) => self.calculator.set_active_voices(n),
            Message::Detune(x) => self.calculator.set_detune_ratio(x),
            Message::Bang => {}
        }
    }

    fn send(calculator: &VoiceSpreadCalculator, sink: &mut dyn OutletSink) {
        for emission in calculator.emit() {
            sink.outlet_float(emission.slot, emission.value);
        }
    }
}
