//! Logistics - the Factory Method in its first two stages.
//!
//! The [`legacy`] stage has a creator that builds a transport nobody can use:
//! the product type declares no behaviour, so planning a delivery creates a
//! truck or ship and then drops it. The corrected stage gives the product a
//! [`Transport::deliver`] operation and lets the creator's business logic
//! ([`Logistics::plan_delivery`]) use whatever the factory method returns.

use crate::core::effect::{Effect, EffectSink};

/// Something that can deliver cargo.
pub trait Transport {
    fn deliver(&self, sink: &mut dyn EffectSink);
}

/// Creator of transports.
pub trait Logistics {
    /// Label used in effects.
    fn name(&self) -> &'static str;

    /// The factory method.
    fn create_transport(&self, sink: &mut dyn EffectSink) -> Box<dyn Transport>;

    /// Plan a delivery with a freshly created transport.
    fn plan_delivery(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(self.name(), "plan", "Logistics plan delivery"));
        let transport = self.create_transport(sink);
        transport.deliver(sink);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Truck;

impl Transport for Truck {
    fn deliver(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new("truck", "deliver", "truck deliver"));
    }
}

#[derive(Debug, Clone, Default)]
pub struct Ship;

impl Transport for Ship {
    fn deliver(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new("ship", "deliver", "ship deliver"));
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoadLogistics;

impl Logistics for RoadLogistics {
    fn name(&self) -> &'static str {
        "road"
    }

    fn create_transport(&self, sink: &mut dyn EffectSink) -> Box<dyn Transport> {
        sink.emit(Effect::new("road", "create", "Road create transport"));
        Box::new(Truck)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeaLogistics;

impl Logistics for SeaLogistics {
    fn name(&self) -> &'static str {
        "sea"
    }

    fn create_transport(&self, sink: &mut dyn EffectSink) -> Box<dyn Transport> {
        sink.emit(Effect::new("sea", "create", "Sea create transport"));
        Box::new(Ship)
    }
}

/// The first stage: a factory method whose product has no behaviour.
pub mod legacy {
    use crate::core::effect::{Effect, EffectSink};

    /// What the creator returns. There is nothing a caller can do with it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Transport {
        Truck,
        Ship,
    }

    pub trait Logistics {
        fn name(&self) -> &'static str;

        fn create_transport(&self, sink: &mut dyn EffectSink) -> Transport;

        /// Creates a transport and discards it; no delivery happens.
        fn plan_delivery(&self, sink: &mut dyn EffectSink) {
            sink.emit(Effect::new(self.name(), "plan", "Logistics plan delivery"));
            let _ = self.create_transport(sink);
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct RoadLogistics;

    impl Logistics for RoadLogistics {
        fn name(&self) -> &'static str {
            "road"
        }

        fn create_transport(&self, sink: &mut dyn EffectSink) -> Transport {
            sink.emit(Effect::new("road", "create", "Road create transport"));
            Transport::Truck
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct SeaLogistics;

    impl Logistics for SeaLogistics {
        fn name(&self) -> &'static str {
            "sea"
        }

        fn create_transport(&self, sink: &mut dyn EffectSink) -> Transport {
            sink.emit(Effect::new("sea", "create", "Sea create transport"));
            Transport::Ship
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effect::Trace;

    #[test]
    fn test_plan_delivery_delivers() {
        let mut trace = Trace::new();
        RoadLogistics.plan_delivery(&mut trace);
        assert_eq!(
            trace.messages(),
            vec![
                "Logistics plan delivery",
                "Road create transport",
                "truck deliver"
            ]
        );
    }

    #[test]
    fn test_road_and_sea_share_the_script() {
        let mut road = Trace::new();
        let mut sea = Trace::new();
        RoadLogistics.plan_delivery(&mut road);
        SeaLogistics.plan_delivery(&mut sea);

        assert_eq!(road.operations(), sea.operations());
        assert_eq!(sea.messages()[2], "ship deliver");
    }

    #[test]
    fn test_legacy_stage_never_delivers() {
        use legacy::Logistics as _;

        let mut trace = Trace::new();
        legacy::SeaLogistics.plan_delivery(&mut trace);
        assert_eq!(trace.operations(), vec!["plan", "create"]);

        let transport = legacy::RoadLogistics.create_transport(&mut Trace::new());
        assert_eq!(transport, legacy::Transport::Truck);
    }
}
