//! Single Responsibility: a class should have one reason to change.
//!
//! The legacy employee also knows how to print its time sheet, so changes to
//! the report format touch the employee. The corrected version moves the
//! report into [`TimeSheetReport`].

use crate::core::effect::{Effect, EffectSink};

/// An employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
}

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Employee { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Prints time sheet reports for employees.
#[derive(Debug, Clone, Default)]
pub struct TimeSheetReport;

impl TimeSheetReport {
    pub fn print(&self, employee: &Employee, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            "report",
            "print",
            format!("Print time sheet report for {}", employee.name()),
        ));
    }
}

pub mod legacy {
    use crate::core::effect::{Effect, EffectSink};

    /// Employee that also owns its reporting.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Employee {
        name: String,
    }

    impl Employee {
        pub fn new(name: impl Into<String>) -> Self {
            Employee { name: name.into() }
        }

        pub fn name(&self) -> &str {
            &self.name
        }

        pub fn print_time_sheet_report(&self, sink: &mut dyn EffectSink) {
            sink.emit(Effect::new(
                "employee",
                "print",
                format!("PrintTimeSheetReport for {}", self.name),
            ));
        }
    }
}
