//! Abstract Factory - families of GUI widgets.
//!
//! A [`GuiFactory`] produces a family of related widgets ([`Button`],
//! [`Checkbox`]) that belong to one variant. The [`Application`] client only
//! sees the abstract traits, so any factory can be passed in without changing
//! the client.
//!
//! ```text
//!                 GuiFactory
//!            ┌────────┴────────┐
//!       WinFactory         MacFactory
//!       ├ WinButton        ├ MacButton
//!       └ WinCheckbox      └ MacCheckbox
//! ```

use crate::core::effect::{Effect, EffectSink};

/// Construction-time properties shared by every widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetProps {
    pub id: Option<String>,
    pub label: Option<String>,
}

impl WidgetProps {
    /// Properties with a label.
    pub fn labelled(id: impl Into<String>, label: impl Into<String>) -> Self {
        WidgetProps {
            id: Some(id.into()),
            label: Some(label.into()),
        }
    }
}

/// A button from some widget family.
pub trait Button {
    fn props(&self) -> &WidgetProps;
    fn paint(&self, sink: &mut dyn EffectSink);
}

/// A checkbox from some widget family.
pub trait Checkbox {
    fn props(&self) -> &WidgetProps;
    fn paint(&self, sink: &mut dyn EffectSink);
}

/// Produces a compatible family of widgets.
///
/// Signatures return abstract widgets; each factory instantiates the concrete
/// widgets of its own variant, so products of one family are never mixed
/// with another.
pub trait GuiFactory {
    fn create_button(&self, sink: &mut dyn EffectSink) -> Box<dyn Button>;
    fn create_checkbox(&self, sink: &mut dyn EffectSink) -> Box<dyn Checkbox>;
}

macro_rules! widget {
    ($name:ident, $kind:ident, $variant:literal, $what:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            props: WidgetProps,
        }

        impl $name {
            pub fn new(props: WidgetProps) -> Self {
                $name { props }
            }
        }

        impl $kind for $name {
            fn props(&self) -> &WidgetProps {
                &self.props
            }

            fn paint(&self, sink: &mut dyn EffectSink) {
                sink.emit(Effect::new(
                    $variant,
                    "paint",
                    concat!("Paint ", $variant, " ", $what),
                ));
            }
        }
    };
}

widget!(WinButton, Button, "win", "button");
widget!(MacButton, Button, "mac", "button");
widget!(WinCheckbox, Checkbox, "win", "checkbox");
widget!(MacCheckbox, Checkbox, "mac", "checkbox");

/// Factory for the Windows widget family.
#[derive(Debug, Clone, Default)]
pub struct WinFactory;

impl WinFactory {
    pub fn new() -> Self {
        WinFactory
    }
}

impl GuiFactory for WinFactory {
    fn create_button(&self, sink: &mut dyn EffectSink) -> Box<dyn Button> {
        sink.emit(Effect::new("win", "create", "Create win button"));
        Box::new(WinButton::new(WidgetProps::labelled("win-button", "OK")))
    }

    fn create_checkbox(&self, sink: &mut dyn EffectSink) -> Box<dyn Checkbox> {
        sink.emit(Effect::new("win", "create", "Create win checkbox"));
        Box::new(WinCheckbox::new(WidgetProps::labelled(
            "win-checkbox",
            "Remember me",
        )))
    }
}

/// Factory for the Mac widget family.
#[derive(Debug, Clone, Default)]
pub struct MacFactory;

impl MacFactory {
    pub fn new() -> Self {
        MacFactory
    }
}

impl GuiFactory for MacFactory {
    fn create_button(&self, sink: &mut dyn EffectSink) -> Box<dyn Button> {
        sink.emit(Effect::new("mac", "create", "Create mac button"));
        Box::new(MacButton::new(WidgetProps::labelled("mac-button", "OK")))
    }

    fn create_checkbox(&self, sink: &mut dyn EffectSink) -> Box<dyn Checkbox> {
        sink.emit(Effect::new("mac", "create", "Create mac checkbox"));
        Box::new(MacCheckbox::new(WidgetProps::labelled(
            "mac-checkbox",
            "Remember me",
        )))
    }
}

/// Client working with factories and widgets only through abstract types.
pub struct Application {
    factory: Box<dyn GuiFactory>,
    button: Option<Box<dyn Button>>,
    checkbox: Option<Box<dyn Checkbox>>,
}

impl Application {
    pub fn new(factory: Box<dyn GuiFactory>) -> Self {
        Application {
            factory,
            button: None,
            checkbox: None,
        }
    }

    /// Create the widgets. Calling again replaces them.
    pub fn create_ui(&mut self, sink: &mut dyn EffectSink) {
        self.button = Some(self.factory.create_button(sink));
        self.checkbox = Some(self.factory.create_checkbox(sink));
    }

    /// Paint whatever widgets have been created.
    pub fn paint(&self, sink: &mut dyn EffectSink) {
        if let Some(button) = &self.button {
            button.paint(sink);
        }
        if let Some(checkbox) = &self.checkbox {
            checkbox.paint(sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effect::Trace;

    #[test]
    fn test_win_button_paints() {
        let mut trace = Trace::new();
        let button = WinFactory::new().create_button(&mut Trace::new());
        button.paint(&mut trace);
        assert_eq!(trace.messages(), vec!["Paint win button"]);
    }

    #[test]
    fn test_factories_keep_families_consistent() {
        let mut trace = Trace::new();
        let mut app = Application::new(Box::new(MacFactory::new()));
        app.create_ui(&mut trace);
        app.paint(&mut trace);

        assert!(trace.effects().iter().all(|e| e.variant == "mac"));
        assert_eq!(
            trace.messages(),
            vec![
                "Create mac button",
                "Create mac checkbox",
                "Paint mac button",
                "Paint mac checkbox"
            ]
        );
    }

    #[test]
    fn test_paint_before_create_is_silent() {
        let mut trace = Trace::new();
        let app = Application::new(Box::new(WinFactory::new()));
        app.paint(&mut trace);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_widget_props_set_at_construction() {
        let checkbox = WinFactory::new().create_checkbox(&mut Trace::new());
        assert_eq!(checkbox.props().label.as_deref(), Some("Remember me"));
        assert_eq!(checkbox.props().id.as_deref(), Some("win-checkbox"));
    }
}
