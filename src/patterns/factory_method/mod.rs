//! Factory Method demonstrations.
//!
//! - [`logistics`] - the legacy stage and the corrected plan/deliver stage
//! - [`creator`] - the structural and conceptual creator/product pairs
//! - [`dialog`] - dialogs creating Windows or Web buttons
//! - [`payment`] - gateways creating card, Pix and bank slip payments

pub mod creator;
pub mod dialog;
pub mod logistics;
pub mod payment;

pub use creator::{
    ConcreteCreator1, ConcreteCreator2, Creator, CreatorA, CreatorB, Product, ProductA, ProductB,
};
pub use dialog::{ButtonType, Dialog, DialogButton, DialogEvent, WebDialog, WindowsDialog};
pub use logistics::{Logistics, RoadLogistics, SeaLogistics, Ship, Transport, Truck};
pub use payment::{
    BankSlipPayment, CreditCardPayment, DebitCardPayment, PaymentGateway, PaymentMethod,
    PixPayment,
};
