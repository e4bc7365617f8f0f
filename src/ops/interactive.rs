//! Line-oriented variant selection.
//!
//! The loop reads one token per line and maps it through a [`Menu`]. Only
//! tokens the menu knows reach the resolver; anything else gets a hint and a
//! new prompt. The exit token or end of input prints the farewell.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::catalog::Catalog;
use crate::core::effect::Console;
use crate::core::kind::CapabilityKind;
use crate::core::variant::VariantKey;
use crate::ops::use_case::run_use_case;
use crate::resolver::ResolveError;
use crate::util::config::{Config, DEFAULT_EXIT_TOKEN};

/// Error ending the interactive loop.
#[derive(Debug, Error)]
pub enum InteractiveError {
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Result of matching one input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Exit,
    Variant(VariantKey),
    Invalid,
}

/// Tokens accepted for one capability kind.
#[derive(Debug, Clone)]
pub struct Menu {
    kind: CapabilityKind,
    exit_token: String,
    entries: Vec<(String, VariantKey)>,
}

impl Menu {
    /// Build the menu for `kind`: built-in tokens, then configured aliases.
    ///
    /// Aliases pointing at unregistered variants, or reusing a token, are
    /// skipped with a warning. An exit token that shadows a built-in token
    /// falls back to the default one.
    pub fn for_kind(kind: CapabilityKind, catalog: &Catalog, config: &Config) -> Self {
        let exit_token = config.exit_token().trim().to_ascii_lowercase();
        let mut menu = Menu {
            kind,
            exit_token,
            entries: Vec::new(),
        };

        match kind {
            CapabilityKind::Dialog => {
                menu.entries.push(("w".to_string(), VariantKey::new("windows")));
                menu.entries.push(("web".to_string(), VariantKey::new("web")));
            }
            _ => {
                for variant in catalog.variants(kind) {
                    menu.entries.push((variant.as_str().to_string(), variant));
                }
            }
        }

        if menu.lookup(&menu.exit_token).is_some() {
            warn!(
                %kind,
                token = %menu.exit_token,
                fallback = DEFAULT_EXIT_TOKEN,
                "Exit token shadows a variant, using the default"
            );
            menu.exit_token = DEFAULT_EXIT_TOKEN.to_string();
        }

        for (token, variant) in config.aliases_for(kind) {
            let token = token.trim().to_ascii_lowercase();
            if !catalog.contains(kind, variant) {
                warn!(%kind, %token, variant, "Ignoring alias to unknown variant");
                continue;
            }
            if token == menu.exit_token || menu.lookup(&token).is_some() {
                warn!(%kind, %token, "Ignoring alias for a token already in use");
                continue;
            }
            debug!(%kind, %token, variant, "Added alias");
            menu.entries.push((token, VariantKey::new(variant)));
        }

        menu
    }

    /// Accepted tokens, built-ins first.
    pub fn tokens(&self) -> Vec<&str> {
        self.entries.iter().map(|(t, _)| t.as_str()).collect()
    }

    fn lookup(&self, token: &str) -> Option<&VariantKey> {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v)
    }

    /// Classify one line of input.
    pub fn select(&self, input: &str) -> Selection {
        let token = input.trim().to_ascii_lowercase();
        if token == self.exit_token {
            return Selection::Exit;
        }
        match self.lookup(&token) {
            Some(variant) => Selection::Variant(variant.clone()),
            None => Selection::Invalid,
        }
    }

    pub fn prompt(&self) -> String {
        match self.kind {
            CapabilityKind::Gui => "Type (win)dows or (mac)...(win/mac)? ".to_string(),
            CapabilityKind::Dialog => "Type (w)indows or (web)...(w/web)?: ".to_string(),
            kind => format!("Type a {} variant...({})? ", kind, self.tokens().join("/")),
        }
    }

    /// Hint printed after an unrecognised token.
    pub fn invalid_message(&self) -> String {
        format!("Choose an valid option: {}", self.tokens().join(" or "))
    }
}

/// Run the selection loop until the exit token or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    catalog: &Catalog,
    kind: CapabilityKind,
    config: &Config,
    mut input: R,
    mut out: W,
) -> Result<(), InteractiveError> {
    let menu = Menu::for_kind(kind, catalog, config);
    debug!(%kind, tokens = ?menu.tokens(), "Starting interactive loop");

    let mut buf = Vec::new();
    loop {
        write!(out, "{}", menu.prompt())?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            writeln!(out, "{}", config.farewell())?;
            return Ok(());
        }
        // Undecodable bytes become U+FFFD and fall through to the hint
        let line = String::from_utf8_lossy(&buf);

        match menu.select(&line) {
            Selection::Exit => {
                writeln!(out, "{}", config.farewell())?;
                return Ok(());
            }
            Selection::Invalid => {
                debug!(input = line.trim(), "Unrecognised token");
                writeln!(out, "{}", menu.invalid_message())?;
            }
            Selection::Variant(variant) => {
                let mut console = Console::new(&mut out);
                run_use_case(catalog, kind, variant.as_str(), &mut console)?;
                console.finish()?;
            }
        }
    }
}
