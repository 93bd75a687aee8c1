use super::config::SupersawConfig;

/// One value bound for a fixed outlet position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emission {
    pub slot: usize,
    pub value: f64,
}

/// Computes the base frequency plus symmetric detuned partials for a fixed number of voice pairs.
#[derive(Clone, Debug)]
pub struct VoiceSpreadCalculator {
    base_frequency: f64,
    detune_ratio: f64,
    active_voices: i64, // Not clamped; may be negative or exceed max_voices
    max_voices: usize,
    slot_count: usize,
}

impl VoiceSpreadCalculator {
    /// Creates a calculator with the default parameters and `max_voices` pairs.
    /// A `max_voices` of zero is raised to one so there are always at least three slots.
    pub fn new(max_voices: usize) -> Self {
        Self::from_config(&SupersawConfig {
            max_voices,
            ..SupersawConfig::default()
        })
    }

    pub fn from_config(config: &SupersawConfig) -> Self {
        let max_voices = config.max_voices.max(1);
        Self {
            base_frequency: config.base_frequency,
            detune_ratio: config.detune_ratio,
            active_voices: config.active_voices,
            max_voices,
            slot_count: max_voices * 2 + 1,
        }
    }

    pub fn set_base_frequency(&mut self, value: f64) {
        self.base_frequency = value;
        log::debug!("frequency changed to {}", value);
    }

    pub fn set_detune_ratio(&mut self, value: f64) {
        self.detune_ratio = value;
        log::debug!("detune changed to {}", value);
    }

    pub fn set_active_voices(&mut self, value: i64) {
        self.active_voices = value;
        log::debug!("active voices changed to {}", value);
    }

    pub fn base_frequency(&self) -> f64 {
        self.base_frequency
    }

    pub fn detune_ratio(&self) -> f64 {
        self.detune_ratio
    }

    pub fn active_voices(&self) -> i64 {
        self.active_voices
    }

    pub fn max_voices(&self) -> usize {
        self.max_voices
    }

    /// Number of output positions, always `2 * max_voices + 1`.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Per-voice frequency step.
    pub fn detune_amount(&self) -> f64 {
        self.base_frequency * self.detune_ratio
    }

    /// Produces one emission per slot, in output order.
    ///
    /// The center (highest slot) comes first and carries the base frequency. Each voice pair
    /// then takes the next two slots downward, positive partial before negative, from the
    /// innermost pair outward. Pairs beyond the active voice count are zeroed.
    pub fn emit(&self) -> Vec<Emission> {
        let detune_amount = self.detune_amount();
        log::trace!(
            "emit: max_voices={} frequency={} active_voices={} detune={} detune_amount={}",
            self.max_voices,
            self.base_frequency,
            self.active_voices,
            self.detune_ratio,
            detune_amount
        );

        let center = self.slot_count - 1;
        let mut emissions = Vec::with_capacity(self.slot_count);
        emissions.push(Emission {
            slot: center,
            value: self.base_frequency,
        });

        for voice in 1..=self.max_voices {
            let (positive, negative) = if (voice as i64) <= self.active_voices {
                let offset = voice as f64 * detune_amount;
                (self.base_frequency + offset, self.base_frequency - offset)
            } else {
                (0.0, 0.0)
            };
            emissions.push(Emission {
                slot: center - (voice * 2 - 1),
                value: positive,
            });
            emissions.push(Emission {
                slot: center - voice * 2,
                value: negative,
            });
        }

        emissions
    }

    /// The emitted values laid out by slot index rather than emission order.
    pub fn spread(&self) -> Vec<f64> {
        let mut slots = vec![0.0; self.slot_count];
        for emission in self.emit() {
            slots[emission.slot] = emission.value;
        }
        slots
    }
}

impl Default for VoiceSpreadCalculator {
    fn default() -> Self {
        Self::from_config(&SupersawConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn values(emissions: &[Emission]) -> Vec<f64> {
        emissions.iter().map(|e| e.value).collect()
    }

    #[test]
    fn two_voice_scenario() {
        let mut calc = VoiceSpreadCalculator::new(2);
        calc.set_base_frequency(400.0);
        calc.set_detune_ratio(0.5);
        calc.set_active_voices(1);

        assert_eq!(calc.detune_amount(), 200.0);
        let out = calc.emit();
        assert_eq!(values(&out), vec![400.0, 600.0, 200.0, 0.0, 0.0]);
        let slots: Vec<usize> = out.iter().map(|e| e.slot).collect();
        assert_eq!(slots, vec![4, 3, 2, 1, 0]);
        assert_eq!(calc.spread(), vec![0.0, 0.0, 200.0, 600.0, 400.0]);
    }

    #[test]
    fn zero_active_voices_leaves_only_center() {
        let mut calc = VoiceSpreadCalculator::new(3);
        calc.set_base_frequency(220.0);
        calc.set_active_voices(0);

        let out = calc.emit();
        assert_eq!(out[0].value, 220.0);
        assert!(out[1..].iter().all(|e| e.value == 0.0));
    }

    #[test]
    fn single_voice_pair_boundary() {
        let mut calc = VoiceSpreadCalculator::new(1);
        calc.set_base_frequency(100.0);
        calc.set_detune_ratio(0.1);
        calc.set_active_voices(5);

        let out = calc.emit();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], Emission { slot: 2, value: 100.0 });
        assert_eq!(out[1].slot, 1);
        assert_eq!(out[2].slot, 0);
        assert_eq!(out[1].value, 100.0 + 100.0 * 0.1);
        assert_eq!(out[2].value, 100.0 - 100.0 * 0.1);
    }

    #[test]
    fn negative_active_voices_are_accepted() {
        let mut calc = VoiceSpreadCalculator::new(2);
        calc.set_active_voices(-3);
        assert_eq!(calc.active_voices(), -3);
        assert_eq!(values(&calc.emit()), vec![400.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_max_voices_is_raised() {
        let calc = VoiceSpreadCalculator::new(0);
        assert_eq!(calc.max_voices(), 1);
        assert_eq!(calc.slot_count(), 3);
    }

    #[test]
    fn defaults_emit_one_pair() {
        let calc = VoiceSpreadCalculator::default();
        assert_eq!(values(&calc.emit()), vec![400.0, 600.0, 200.0]);
    }

    #[test]
    fn randomized_spread_invariants() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let max_voices = rng.gen_range(1..16usize);
            let mut calc = VoiceSpreadCalculator::new(max_voices);
            let base = rng.gen_range(-2000.0..2000.0);
            let ratio = rng.gen_range(-1.0..1.0);
            let active = rng.gen_range(-4..20i64);
            calc.set_base_frequency(base);
            calc.set_detune_ratio(ratio);
            calc.set_active_voices(active);

            let out = calc.emit();
            assert_eq!(out.len(), 2 * max_voices + 1);
            assert_eq!(out[0].slot, 2 * max_voices);
            assert_eq!(out[0].value, base);

            let mut seen = vec![false; out.len()];
            for e in &out {
                assert!(!seen[e.slot], "slot {} emitted twice", e.slot);
                seen[e.slot] = true;
            }

            let step = base * ratio;
            for voice in 1..=max_voices {
                let positive = out[2 * voice - 1].value;
                let negative = out[2 * voice].value;
                if voice as i64 <= active {
                    assert_eq!(positive, base + voice as f64 * step);
                    assert_eq!(negative, base - voice as f64 * step);
                } else {
                    assert_eq!(positive, 0.0);
                    assert_eq!(negative, 0.0);
                }
            }

            assert_eq!(out, calc.emit());
        }
    }
}
