//! Dependency Inversion: high-level code depends on abstractions.
//!
//! The legacy budget report owns a MySQL database. The corrected report holds
//! any [`Database`], chosen by the caller.

use crate::core::effect::{Effect, EffectSink};

/// Date the demonstration report is opened for.
pub const REPORT_DATE: &str = "2024-01-31";

pub trait Database {
    fn name(&self) -> &'static str;
    fn insert(&self, sink: &mut dyn EffectSink);
    fn update(&self, sink: &mut dyn EffectSink);
    fn delete(&self, sink: &mut dyn EffectSink);
}

macro_rules! database {
    ($name:ident, $variant:literal, $label:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name;

        impl Database for $name {
            fn name(&self) -> &'static str {
                $variant
            }

            fn insert(&self, sink: &mut dyn EffectSink) {
                sink.emit(Effect::new($variant, "insert", concat!($label, " insert")));
            }

            fn update(&self, sink: &mut dyn EffectSink) {
                sink.emit(Effect::new($variant, "update", concat!($label, " update")));
            }

            fn delete(&self, sink: &mut dyn EffectSink) {
                sink.emit(Effect::new($variant, "delete", concat!($label, " delete")));
            }
        }
    };
}

database!(MySql, "mysql", "MySQL");
database!(MongoDb, "mongodb", "MongoDB");

/// Report that forwards data changes to its database.
pub struct BudgetReport {
    database: Box<dyn Database>,
}

impl BudgetReport {
    pub fn new(database: Box<dyn Database>) -> Self {
        BudgetReport { database }
    }

    pub fn open(&self, date: &str, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new("report", "open", format!("Open {}", date)));
    }

    pub fn insert(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new("report", "insert", "Report insert"));
        self.database.insert(sink);
    }

    pub fn update(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new("report", "update", "Report update"));
        self.database.update(sink);
    }

    pub fn delete(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new("report", "delete", "Report delete"));
        self.database.delete(sink);
    }

    pub fn save(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new("report", "save", "Save"));
    }
}

impl std::fmt::Debug for BudgetReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetReport")
            .field("database", &self.database.name())
            .finish()
    }
}

pub mod legacy {
    use crate::core::effect::{Effect, EffectSink};

    #[derive(Debug, Clone, Default)]
    pub struct MySqlDatabase;

    impl MySqlDatabase {
        pub fn insert(&self, sink: &mut dyn EffectSink) {
            sink.emit(Effect::new("mysql", "insert", "MYSQL insert"));
        }

        pub fn update(&self, sink: &mut dyn EffectSink) {
            sink.emit(Effect::new("mysql", "update", "MYSQL update"));
        }

        pub fn delete(&self, sink: &mut dyn EffectSink) {
            sink.emit(Effect::new("mysql", "delete", "MYSQL delete"));
        }
    }

    /// Report hard-wired to MySQL.
    #[derive(Debug, Clone, Default)]
    pub struct BudgetReport {
        mysql: MySqlDatabase,
    }

    impl BudgetReport {
        pub fn new() -> Self {
            BudgetReport::default()
        }

        pub fn mysql(&self) -> &MySqlDatabase {
            &self.mysql
        }

        pub fn open(&self, date: &str, sink: &mut dyn EffectSink) {
            sink.emit(Effect::new("report", "open", format!("Open {}", date)));
        }

        pub fn save(&self, sink: &mut dyn EffectSink) {
            sink.emit(Effect::new("report", "save", "Save"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effect::Trace;

    #[test]
    fn test_report_forwards_to_database() {
        let mut trace = Trace::new();
        let report = BudgetReport::new(Box::new(MongoDb));
        report.insert(&mut trace);
        report.delete(&mut trace);

        assert_eq!(
            trace.messages(),
            vec!["Report insert", "MongoDB insert", "Report delete", "MongoDB delete"]
        );
    }

    #[test]
    fn test_databases_are_interchangeable() {
        let mut mysql = Trace::new();
        let mut mongo = Trace::new();
        BudgetReport::new(Box::new(MySql)).update(&mut mysql);
        BudgetReport::new(Box::new(MongoDb)).update(&mut mongo);
        assert_eq!(mysql.operations(), mongo.operations());
    }

    #[test]
    fn test_legacy_report_owns_mysql() {
        let mut trace = Trace::new();
        let report = legacy::BudgetReport::new();
        report.open(REPORT_DATE, &mut trace);
        report.mysql().insert(&mut trace);
        assert_eq!(trace.messages(), vec!["Open 2024-01-31", "MYSQL insert"]);
    }
}
