//! Open/Closed: open for extension, closed for modification.
//!
//! [`legacy::Order`] computes shipping through a string switch that has to be
//! edited for every new method. [`Order`] delegates to a [`Shipping`]
//! strategy, so adding a method means adding a type.

use crate::core::effect::{Effect, EffectSink};

/// A line on an order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub weight: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        LineItem {
            name: name.into(),
            weight,
        }
    }
}

/// Items used by the demonstrations.
pub fn sample_items() -> Vec<LineItem> {
    vec![LineItem::new("book", 2.0), LineItem::new("lamp", 4.0)]
}

fn total_weight(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.weight).sum()
}

/// A shipping strategy.
pub trait Shipping {
    fn name(&self) -> &'static str;

    /// Cost for the order.
    fn cost(&self, order: &Order, sink: &mut dyn EffectSink) -> f64;

    /// Days until delivery.
    fn date(&self, order: &Order, sink: &mut dyn EffectSink) -> u32;
}

#[derive(Debug, Clone, Default)]
pub struct Ground;

impl Shipping for Ground {
    fn name(&self) -> &'static str {
        "ground"
    }

    fn cost(&self, order: &Order, sink: &mut dyn EffectSink) -> f64 {
        let cost = order.total_weight() * 1.5;
        sink.emit(Effect::new(
            "ground",
            "cost",
            format!("Ground shipping weight * 1.5 = {:.2}", cost),
        ));
        cost
    }

    fn date(&self, _order: &Order, sink: &mut dyn EffectSink) -> u32 {
        sink.emit(Effect::new("ground", "date", "Ground date: 5 days"));
        5
    }
}

#[derive(Debug, Clone, Default)]
pub struct Air;

impl Shipping for Air {
    fn name(&self) -> &'static str {
        "air"
    }

    fn cost(&self, order: &Order, sink: &mut dyn EffectSink) -> f64 {
        let cost = order.total_weight() * 3.0;
        sink.emit(Effect::new(
            "air",
            "cost",
            format!("Air shipping weight * 3 = {:.2}", cost),
        ));
        cost
    }

    fn date(&self, _order: &Order, sink: &mut dyn EffectSink) -> u32 {
        sink.emit(Effect::new("air", "date", "Air date: 1 day"));
        1
    }
}

/// An order that delegates shipping to a strategy.
pub struct Order {
    line_items: Vec<LineItem>,
    shipping: Box<dyn Shipping>,
}

impl Order {
    pub fn new(line_items: Vec<LineItem>, shipping: Box<dyn Shipping>) -> Self {
        Order {
            line_items,
            shipping,
        }
    }

    pub fn total_weight(&self) -> f64 {
        total_weight(&self.line_items)
    }

    pub fn shipping_method(&self) -> &'static str {
        self.shipping.name()
    }

    pub fn shipping_cost(&self, sink: &mut dyn EffectSink) -> f64 {
        self.shipping.cost(self, sink)
    }

    pub fn shipping_date(&self, sink: &mut dyn EffectSink) -> u32 {
        self.shipping.date(self, sink)
    }
}

impl std::fmt::Debug for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Order")
            .field("line_items", &self.line_items)
            .field("shipping", &self.shipping.name())
            .finish()
    }
}

pub mod legacy {
    use super::{total_weight, LineItem};
    use crate::core::effect::{Effect, EffectSink};
    use crate::principles::errors::ShippingError;

    /// Order with every shipping method hard-coded.
    #[derive(Debug, Clone, Default)]
    pub struct Order {
        line_items: Vec<LineItem>,
    }

    impl Order {
        pub fn new(line_items: Vec<LineItem>) -> Self {
            Order { line_items }
        }

        pub fn total_weight(&self) -> f64 {
            total_weight(&self.line_items)
        }

        pub fn shipping_cost(
            &self,
            shipping: &str,
            sink: &mut dyn EffectSink,
        ) -> Result<f64, ShippingError> {
            let weight = self.total_weight();
            let (cost, message) = match shipping {
                "ground" => (weight * 1.5, "shipping ground weight * 1.5"),
                "air" => (weight * 3.0, "shipping air weight * 3"),
                other => return Err(ShippingError::UnknownShipping(other.to_string())),
            };
            sink.emit(Effect::new(
                shipping,
                "cost",
                format!("{} = {:.2}", message, cost),
            ));
            Ok(cost)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effect::Trace;
    use crate::principles::errors::ShippingError;

    #[test]
    fn test_strategies_compute_costs() {
        let mut trace = Trace::new();
        let ground = Order::new(sample_items(), Box::new(Ground));
        let air = Order::new(sample_items(), Box::new(Air));

        assert_eq!(ground.shipping_cost(&mut trace), 9.0);
        assert_eq!(air.shipping_cost(&mut trace), 18.0);
        assert_eq!(ground.shipping_date(&mut trace), 5);
        assert_eq!(air.shipping_date(&mut trace), 1);
        assert_eq!(trace.messages()[0], "Ground shipping weight * 1.5 = 9.00");
    }

    #[test]
    fn test_new_strategy_needs_no_order_change() {
        struct Drone;

        impl Shipping for Drone {
            fn name(&self) -> &'static str {
                "drone"
            }

            fn cost(&self, order: &Order, sink: &mut dyn EffectSink) -> f64 {
                sink.emit(Effect::new("drone", "cost", "Drone"));
                order.total_weight() * 10.0
            }

            fn date(&self, _order: &Order, sink: &mut dyn EffectSink) -> u32 {
                sink.emit(Effect::new("drone", "date", "Drone date"));
                0
            }
        }

        let order = Order::new(sample_items(), Box::new(Drone));
        assert_eq!(order.shipping_cost(&mut Trace::new()), 60.0);
        assert_eq!(order.shipping_method(), "drone");
    }

    #[test]
    fn test_legacy_switch() {
        let order = legacy::Order::new(sample_items());
        let mut trace = Trace::new();

        assert_eq!(order.shipping_cost("air", &mut trace), Ok(18.0));
        assert_eq!(
            order.shipping_cost("drone", &mut trace),
            Err(ShippingError::UnknownShipping("drone".into()))
        );
        assert_eq!(trace.len(), 1);
    }
}
