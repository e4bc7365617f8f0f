//! Dialogs creating platform-specific buttons.
//!
//! [`Dialog::render`] is the default script: create a button, send it a
//! `Close` click and render it as a `Cancel` button. The Windows dialog
//! overrides the script to render an `OK` button instead; the call sequence
//! stays the same.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::effect::{Effect, EffectSink};

/// Events a dialog button can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogEvent {
    Open,
    Close,
    Minimize,
    Maximize,
    Restore,
}

impl fmt::Display for DialogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How a button is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonType {
    #[serde(rename = "OK")]
    Ok,
    Cancel,
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonType::Ok => f.write_str("OK"),
            ButtonType::Cancel => f.write_str("Cancel"),
        }
    }
}

/// A button a dialog can create.
pub trait DialogButton {
    fn render(&self, sink: &mut dyn EffectSink);
    fn render_as(&self, button_type: ButtonType, sink: &mut dyn EffectSink);
    fn on_click(&self, sink: &mut dyn EffectSink);
    fn on_event(&self, event: DialogEvent, sink: &mut dyn EffectSink);
}

/// Platform button, parameterised by its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformButton {
    variant: &'static str,
    title: &'static str,
}

impl PlatformButton {
    pub fn windows() -> Self {
        PlatformButton {
            variant: "windows",
            title: "Windows",
        }
    }

    pub fn web() -> Self {
        PlatformButton {
            variant: "web",
            title: "Web",
        }
    }
}

impl DialogButton for PlatformButton {
    fn render(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            self.variant,
            "render",
            format!("{} button render", self.title),
        ));
    }

    fn render_as(&self, button_type: ButtonType, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            self.variant,
            "render",
            format!("{} button render. Type: {}", self.title, button_type),
        ));
    }

    fn on_click(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            self.variant,
            "click",
            format!("{} button onclick", self.title),
        ));
    }

    fn on_event(&self, event: DialogEvent, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            self.variant,
            "click",
            format!("{} button onclick dialog event: {}", self.title, event),
        ));
    }
}

/// A dialog whose button comes from a factory method.
pub trait Dialog {
    fn create_button(&self, sink: &mut dyn EffectSink) -> Box<dyn DialogButton>;

    /// Button type used when rendering.
    fn button_type(&self) -> ButtonType {
        ButtonType::Cancel
    }

    fn render(&self, sink: &mut dyn EffectSink) {
        let button = self.create_button(sink);
        button.on_event(DialogEvent::Close, sink);
        button.render_as(self.button_type(), sink);
    }
}

#[derive(Debug, Clone, Default)]
pub struct WindowsDialog;

impl Dialog for WindowsDialog {
    fn create_button(&self, sink: &mut dyn EffectSink) -> Box<dyn DialogButton> {
        sink.emit(Effect::new("windows", "create", "Create Windows button"));
        Box::new(PlatformButton::windows())
    }

    fn button_type(&self) -> ButtonType {
        ButtonType::Ok
    }
}

#[derive(Debug, Clone, Default)]
pub struct WebDialog;

impl Dialog for WebDialog {
    fn create_button(&self, sink: &mut dyn EffectSink) -> Box<dyn DialogButton> {
        sink.emit(Effect::new("web", "create", "Create Web button"));
        Box::new(PlatformButton::web())
    }
}
