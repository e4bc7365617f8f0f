//! Payment gateways creating payment methods.

use crate::core::effect::{Effect, EffectSink};

/// A way to pay.
pub trait PaymentMethod {
    fn pay(&self, sink: &mut dyn EffectSink);
}

/// Creator of payment methods.
pub trait PaymentGateway {
    fn create_payment(&self, sink: &mut dyn EffectSink) -> Box<dyn PaymentMethod>;

    /// Create a payment method and pay with it.
    fn checkout(&self, sink: &mut dyn EffectSink) {
        let payment = self.create_payment(sink);
        payment.pay(sink);
    }
}

/// Defines a method/gateway pair.
///
/// `$method` pays with `$pay_msg`; `$gateway` announces `$create_msg` and
/// returns a `$method`.
macro_rules! payment {
    ($variant:literal, $method:ident, $pay_msg:literal, $gateway:ident, $create_msg:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $method;

        impl PaymentMethod for $method {
            fn pay(&self, sink: &mut dyn EffectSink) {
                sink.emit(Effect::new($variant, "pay", $pay_msg));
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $gateway;

        impl PaymentGateway for $gateway {
            fn create_payment(&self, sink: &mut dyn EffectSink) -> Box<dyn PaymentMethod> {
                sink.emit(Effect::new($variant, "create", $create_msg));
                Box::new($method)
            }
        }
    };
}

payment!(
    "credit",
    CreditCard,
    "Pay with credit card",
    CreditCardPayment,
    "Credit card payment"
);
payment!(
    "debit",
    DebitCard,
    "Pay with debit card",
    DebitCardPayment,
    "Debit card payment"
);
payment!("pix", Pix, "Pay with pix", PixPayment, "Pix payment");
payment!(
    "bankslip",
    BankSlip,
    "Pay with bank slip",
    BankSlipPayment,
    "Bank slip payment"
);
