//! Creator - the Factory Method skeleton.
//!
//! The creator's main job is not creating products: [`Creator::some_operation`]
//! holds business logic that relies on whatever product the factory method
//! returns. Implementors change that logic indirectly by returning a different
//! product.
//!
//! Creators `a` and `b` are the structural pair; `1` and `2` are the
//! conceptual pair whose products only differ in [`Product::operation`].

use crate::core::effect::{Effect, EffectSink};

/// Operations every concrete product implements.
pub trait Product {
    fn do_stuff(&self, sink: &mut dyn EffectSink);

    /// Value used by the creator's business logic.
    fn operation(&self) -> String;
}

/// Declares the factory method and the logic that depends on it.
pub trait Creator {
    fn name(&self) -> &'static str;

    fn create_product(&self, sink: &mut dyn EffectSink) -> Box<dyn Product>;

    /// Create a product, use it, and report the combined result.
    fn some_operation(&self, sink: &mut dyn EffectSink) -> String {
        let product = self.create_product(sink);
        product.do_stuff(sink);

        let result = format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        );
        sink.emit(Effect::new(self.name(), "operate", result.clone()));
        result
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductA;

impl Product for ProductA {
    fn do_stuff(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new("a", "do_stuff", "A do stuff"));
    }

    fn operation(&self) -> String {
        "Result of ProductA".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductB;

impl Product for ProductB {
    fn do_stuff(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new("b", "do_stuff", "B do stuff"));
    }

    fn operation(&self) -> String {
        "Result of ProductB".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreatorA;

impl Creator for CreatorA {
    fn name(&self) -> &'static str {
        "a"
    }

    fn create_product(&self, sink: &mut dyn EffectSink) -> Box<dyn Product> {
        sink.emit(Effect::new("a", "create", "CreatorA create product"));
        Box::new(ProductA)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreatorB;

impl Creator for CreatorB {
    fn name(&self) -> &'static str {
        "b"
    }

    fn create_product(&self, sink: &mut dyn EffectSink) -> Box<dyn Product> {
        sink.emit(Effect::new("b", "create", "CreatorB create product"));
        Box::new(ProductB)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConcreteProduct1;

impl Product for ConcreteProduct1 {
    fn do_stuff(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new("1", "do_stuff", "ConcreteProduct1 do stuff"));
    }

    fn operation(&self) -> String {
        "{Result of ConcreteProduct1}".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConcreteProduct2;

impl Product for ConcreteProduct2 {
    fn do_stuff(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new("2", "do_stuff", "ConcreteProduct2 do stuff"));
    }

    fn operation(&self) -> String {
        "{Result of ConcreteProduct2}".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConcreteCreator1;

impl Creator for ConcreteCreator1 {
    fn name(&self) -> &'static str {
        "1"
    }

    fn create_product(&self, sink: &mut dyn EffectSink) -> Box<dyn Product> {
        sink.emit(Effect::new("1", "create", "ConcreteCreator1 create product"));
        Box::new(ConcreteProduct1)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConcreteCreator2;

impl Creator for ConcreteCreator2 {
    fn name(&self) -> &'static str {
        "2"
    }

    fn create_product(&self, sink: &mut dyn EffectSink) -> Box<dyn Product> {
        sink.emit(Effect::new("2", "create", "ConcreteCreator2 create product"));
        Box::new(ConcreteProduct2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effect::Trace;

    #[test]
    fn test_some_operation_uses_created_product() {
        let mut trace = Trace::new();
        let result = CreatorB.some_operation(&mut trace);

        assert_eq!(
            result,
            "Creator: The same creator's code has just worked with Result of ProductB"
        );
        assert_eq!(trace.operations(), vec!["create", "do_stuff", "operate"]);
        assert_eq!(trace.messages()[0], "CreatorB create product");
    }

    #[test]
    fn test_creators_differ_only_in_payload() {
        let mut a = Trace::new();
        let mut b = Trace::new();
        CreatorA.some_operation(&mut a);
        CreatorB.some_operation(&mut b);

        assert_eq!(a.operations(), b.operations());
        assert_ne!(a.messages(), b.messages());
    }

    #[test]
    fn test_conceptual_creators_compose_result() {
        let mut trace = Trace::new();
        let result = ConcreteCreator2.some_operation(&mut trace);

        assert_eq!(
            result,
            "Creator: The same creator's code has just worked with {Result of ConcreteProduct2}"
        );
        assert_eq!(trace.effects()[2].variant, "2");
        assert_eq!(trace.messages()[2], result);
    }
}
