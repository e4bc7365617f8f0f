//! Interface Segregation: clients should not depend on methods they do not use.
//!
//! The legacy cloud provider interface bundles storage, hosting and CDN;
//! Dropbox only does storage and refuses the rest. The corrected design
//! splits the capabilities and lets callers query for them.

use crate::core::effect::{Effect, EffectSink};

pub trait CloudStorage {
    fn store_file(&self, name: &str, sink: &mut dyn EffectSink);
    fn get_file(&self, name: &str, sink: &mut dyn EffectSink);
}

pub trait CloudHosting {
    fn create_server(&self, region: &str, sink: &mut dyn EffectSink);
    fn list_servers(&self, region: &str, sink: &mut dyn EffectSink);
}

pub trait CdnProvider {
    fn cdn_address(&self, sink: &mut dyn EffectSink);
}

/// A cloud vendor and the capabilities it exposes.
pub trait CloudProvider {
    fn name(&self) -> &'static str;

    fn storage(&self) -> Option<&dyn CloudStorage> {
        None
    }

    fn hosting(&self) -> Option<&dyn CloudHosting> {
        None
    }

    fn cdn(&self) -> Option<&dyn CdnProvider> {
        None
    }
}

/// Region used by the demonstration.
pub const DEMO_REGION: &str = "us-east-1";

/// File name used by the demonstration.
pub const DEMO_FILE: &str = "file1";

/// Exercise every capability the provider exposes.
pub fn exercise(provider: &dyn CloudProvider, sink: &mut dyn EffectSink) {
    if let Some(storage) = provider.storage() {
        storage.store_file(DEMO_FILE, sink);
        storage.get_file(DEMO_FILE, sink);
    }
    if let Some(hosting) = provider.hosting() {
        hosting.create_server(DEMO_REGION, sink);
        hosting.list_servers(DEMO_REGION, sink);
    }
    if let Some(cdn) = provider.cdn() {
        cdn.cdn_address(sink);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Amazon;

impl CloudStorage for Amazon {
    fn store_file(&self, name: &str, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            "amazon",
            "store_file",
            format!("Amazon store file: {}", name),
        ));
    }

    fn get_file(&self, name: &str, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            "amazon",
            "get_file",
            format!("Amazon get file: {}", name),
        ));
    }
}

impl CloudHosting for Amazon {
    fn create_server(&self, region: &str, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            "amazon",
            "create_server",
            format!("Amazon create server: {}", region),
        ));
    }

    fn list_servers(&self, region: &str, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            "amazon",
            "list_servers",
            format!("Amazon list servers: {}", region),
        ));
    }
}

impl CdnProvider for Amazon {
    fn cdn_address(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new("amazon", "cdn_address", "Amazon CDN address"));
    }
}

impl CloudProvider for Amazon {
    fn name(&self) -> &'static str {
        "amazon"
    }

    fn storage(&self) -> Option<&dyn CloudStorage> {
        Some(self)
    }

    fn hosting(&self) -> Option<&dyn CloudHosting> {
        Some(self)
    }

    fn cdn(&self) -> Option<&dyn CdnProvider> {
        Some(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dropbox;

impl CloudStorage for Dropbox {
    fn store_file(&self, name: &str, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            "dropbox",
            "store_file",
            format!("Dropbox store file: {}", name),
        ));
    }

    fn get_file(&self, name: &str, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            "dropbox",
            "get_file",
            format!("Dropbox get file: {}", name),
        ));
    }
}

impl CloudProvider for Dropbox {
    fn name(&self) -> &'static str {
        "dropbox"
    }

    fn storage(&self) -> Option<&dyn CloudStorage> {
        Some(self)
    }
}

pub mod legacy {
    use crate::core::effect::{Effect, EffectSink};
    use crate::principles::errors::UnsupportedOperation;

    pub type Outcome = Result<(), UnsupportedOperation>;

    /// One interface for everything a cloud vendor might do.
    pub trait CloudProvider {
        fn store_file(&self, name: &str, sink: &mut dyn EffectSink) -> Outcome;
        fn get_file(&self, name: &str, sink: &mut dyn EffectSink) -> Outcome;
        fn create_server(&self, region: &str, sink: &mut dyn EffectSink) -> Outcome;
        fn list_servers(&self, region: &str, sink: &mut dyn EffectSink) -> Outcome;
        fn cdn_address(&self, sink: &mut dyn EffectSink) -> Outcome;
    }

    #[derive(Debug, Clone, Default)]
    pub struct Amazon;

    impl CloudProvider for Amazon {
        fn store_file(&self, _name: &str, sink: &mut dyn EffectSink) -> Outcome {
            sink.emit(Effect::new("amazon", "store_file", "Amazon store file"));
            Ok(())
        }

        fn get_file(&self, _name: &str, sink: &mut dyn EffectSink) -> Outcome {
            sink.emit(Effect::new("amazon", "get_file", "Amazon get file"));
            Ok(())
        }

        fn create_server(&self, _region: &str, sink: &mut dyn EffectSink) -> Outcome {
            sink.emit(Effect::new("amazon", "create_server", "Amazon create server"));
            Ok(())
        }

        fn list_servers(&self, _region: &str, sink: &mut dyn EffectSink) -> Outcome {
            sink.emit(Effect::new("amazon", "list_servers", "Amazon list servers"));
            Ok(())
        }

        fn cdn_address(&self, sink: &mut dyn EffectSink) -> Outcome {
            sink.emit(Effect::new("amazon", "cdn_address", "Amazon CDN address"));
            Ok(())
        }
    }

    /// Forced to implement hosting and CDN, which it does not offer.
    #[derive(Debug, Clone, Default)]
    pub struct Dropbox;

    impl CloudProvider for Dropbox {
        fn store_file(&self, _name: &str, sink: &mut dyn EffectSink) -> Outcome {
            sink.emit(Effect::new("dropbox", "store_file", "Dropbox store file"));
            Ok(())
        }

        fn get_file(&self, _name: &str, sink: &mut dyn EffectSink) -> Outcome {
            sink.emit(Effect::new("dropbox", "get_file", "Dropbox get file"));
            Ok(())
        }

        fn create_server(&self, _region: &str, _sink: &mut dyn EffectSink) -> Outcome {
            Err(UnsupportedOperation::new("dropbox", "create_server"))
        }

        fn list_servers(&self, _region: &str, _sink: &mut dyn EffectSink) -> Outcome {
            Err(UnsupportedOperation::new("dropbox", "list_servers"))
        }

        fn cdn_address(&self, _sink: &mut dyn EffectSink) -> Outcome {
            Err(UnsupportedOperation::new("dropbox", "cdn_address"))
        }
    }
}
