use super::instance::SupersawerInstance;
use crate::supersaw::SupersawConfig;

/// Describes the supersawer object to a host and builds instances of it.
///
/// The class carries the defaults every new instance starts from. Hosts hold on to it
/// and pass it wherever instances are created.
#[derive(Clone, Debug)]
pub struct ObjectClass {
    name: String,
    defaults: SupersawConfig,
}

impl ObjectClass {
    pub const INLETS: usize = 3;
    pub const SELECTORS: [&'static str; 5] = ["bang", "float", "int", "in1", "ft2"];

    pub fn new(name: impl Into<String>) -> Self {
        Self::with_defaults(name, SupersawConfig::default())
    }

    pub fn with_defaults(name: impl Into<String>, defaults: SupersawConfig) -> Self {
        let name = name.into();
        log::debug!("{} class loaded", name);
        Self { name, defaults }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn defaults(&self) -> &SupersawConfig {
        &self.defaults
    }

    pub fn responds_to(&self, selector: &str) -> bool {
        Self::SELECTORS.contains(&selector)
    }

    /// Creates an instance from the integer typed into the object box, if any.
    pub fn instantiate(&self, arg: Option<i64>) -> SupersawerInstance {
        let config = self.defaults.clone().with_creation_arg(arg);
        log::debug!(
            "new {} instance with {} voice pairs",
            self.name,
            config.max_voices
        );
        SupersawerInstance::new(&config)
    }
}

impl Default for ObjectClass {
    fn default() -> Self {
        Self::new("Supersawer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_argument_sets_outlets() {
        let class = ObjectClass::default();
        assert_eq!(class.name(), "Supersawer");
        assert_eq!(class.instantiate(Some(6)).outlet_count(), 13);
        assert_eq!(class.instantiate(None).outlet_count(), 3);
        assert_eq!(class.instantiate(Some(0)).outlet_count(), 3);
        assert_eq!(class.instantiate(Some(-2)).outlet_count(), 3);
    }

    #[test]
    fn instances_start_from_class_defaults() {
        let class = ObjectClass::with_defaults(
            "wide",
            SupersawConfig {
                max_voices: 4,
                base_frequency: 110.0,
                detune_ratio: 0.02,
                active_voices: 4,
            },
        );
        let object = class.instantiate(None);
        assert_eq!(object.calculator().max_voices(), 4);
        assert_eq!(object.calculator().base_frequency(), 110.0);
        assert_eq!(class.instantiate(Some(2)).calculator().max_voices(), 2);
    }

    #[test]
    fn instances_are_independent() {
        let class = ObjectClass::default();
        let mut a = class.instantiate(Some(1));
        let b = class.instantiate(Some(1));
        a.dispatch(crate::supersaw::Message::Float(50.0));
        assert_eq!(a.calculator().base_frequency(), 50.0);
        assert_eq!(b.calculator().base_frequency(), 400.0);
    }

    #[test]
    fn knows_its_selectors() {
        let class = ObjectClass::default();
        assert!(class.responds_to("ft2"));
        assert!(!class.responds_to("list"));
        assert_eq!(class.instantiate(None).inlet_count(), ObjectClass::INLETS);
    }
}
