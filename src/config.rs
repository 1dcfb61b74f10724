//! Edit box configuration and the change bus that distributes it
//!
//! Stores user preferences in `~/.config/subedit/config.yaml`. At runtime the
//! config lives inside a [`ConfigBus`]; components subscribe to the keys they
//! care about and receive a [`ConfigKey`] on a channel whenever one changes.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::style::SyntaxColour;
use crate::syntax::SyntaxStyle;

/// Edit box configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditBoxConfig {
    /// Font face for every style; empty means the system GUI font
    #[serde(default)]
    pub font_face: String,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_true")]
    pub syntax_highlighting: bool,

    #[serde(default = "default_true")]
    pub call_tips: bool,

    /// Dictionary language code; empty disables spell checking
    #[serde(default)]
    pub spell_checker_language: String,

    /// Thesaurus language code; empty disables the thesaurus
    #[serde(default)]
    pub thesaurus_language: String,

    /// Per-category overrides; missing categories use built-in colours
    #[serde(default)]
    pub syntax: BTreeMap<SyntaxStyle, SyntaxColour>,
}

fn default_font_size() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for EditBoxConfig {
    fn default() -> Self {
        Self {
            font_face: String::new(),
            font_size: default_font_size(),
            syntax_highlighting: true,
            call_tips: true,
            spell_checker_language: String::new(),
            thesaurus_language: String::new(),
            syntax: BTreeMap::new(),
        }
    }
}

impl EditBoxConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Effective colour for a style (override or built-in)
    pub fn syntax_colour(&self, style: SyntaxStyle) -> SyntaxColour {
        let style = match style {
            SyntaxStyle::Unclassified => SyntaxStyle::Normal,
            other => other,
        };
        self.syntax
            .get(&style)
            .copied()
            .unwrap_or_else(|| SyntaxColour::default_for(style))
    }

    pub fn language(&self, kind: LanguageKind) -> &str {
        match kind {
            LanguageKind::SpellChecker => &self.spell_checker_language,
            LanguageKind::Thesaurus => &self.thesaurus_language,
        }
    }
}

/// Which language setting a language menu controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageKind {
    SpellChecker,
    Thesaurus,
}

impl LanguageKind {
    pub fn config_key(self) -> ConfigKey {
        match self {
            LanguageKind::SpellChecker => ConfigKey::SpellCheckerLanguage,
            LanguageKind::Thesaurus => ConfigKey::ThesaurusLanguage,
        }
    }
}

/// Individually observable configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    FontFace,
    FontSize,
    SyntaxHighlighting,
    CallTips,
    SpellCheckerLanguage,
    ThesaurusLanguage,
    SyntaxForeground(SyntaxStyle),
    SyntaxBackground(SyntaxStyle),
    SyntaxBold(SyntaxStyle),
}

impl ConfigKey {
    /// Keys the edit box subscribes to
    pub fn edit_box_keys() -> Vec<ConfigKey> {
        let mut keys = vec![
            ConfigKey::FontFace,
            ConfigKey::FontSize,
            ConfigKey::SyntaxHighlighting,
            ConfigKey::CallTips,
            ConfigKey::SpellCheckerLanguage,
            ConfigKey::ThesaurusLanguage,
        ];
        for style in SyntaxStyle::ALL {
            if style == SyntaxStyle::Unclassified {
                continue;
            }
            keys.push(ConfigKey::SyntaxForeground(style));
            keys.push(ConfigKey::SyntaxBackground(style));
            keys.push(ConfigKey::SyntaxBold(style));
        }
        keys
    }

    /// Hierarchical option path, used in logs
    pub fn path(&self) -> String {
        match self {
            ConfigKey::FontFace => "Subtitle/Edit Box/Font Face".to_string(),
            ConfigKey::FontSize => "Subtitle/Edit Box/Font Size".to_string(),
            ConfigKey::SyntaxHighlighting => "Subtitle/Highlight/Syntax".to_string(),
            ConfigKey::CallTips => "App/Call Tips".to_string(),
            ConfigKey::SpellCheckerLanguage => "Tool/Spell Checker/Language".to_string(),
            ConfigKey::ThesaurusLanguage => "Tool/Thesaurus/Language".to_string(),
            ConfigKey::SyntaxForeground(style) => {
                format!("Colour/Subtitle/Syntax/{}", style.category_name())
            }
            ConfigKey::SyntaxBackground(style) => {
                format!("Colour/Subtitle/Syntax/Background/{}", style.category_name())
            }
            ConfigKey::SyntaxBold(style) => {
                format!("Colour/Subtitle/Syntax/Bold/{}", style.category_name())
            }
        }
    }

    /// Does a change to this key require a new style sheet?
    pub fn affects_style_sheet(&self) -> bool {
        matches!(
            self,
            ConfigKey::FontFace
                | ConfigKey::FontSize
                | ConfigKey::SyntaxForeground(_)
                | ConfigKey::SyntaxBackground(_)
                | ConfigKey::SyntaxBold(_)
        )
    }
}

/// Identifies one subscription on a [`ConfigBus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Receiving end of a subscription
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    rx: Receiver<ConfigKey>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Take every pending notification without blocking
    pub fn drain(&self) -> Vec<ConfigKey> {
        self.rx.try_iter().collect()
    }
}

#[derive(Debug)]
struct Subscriber {
    id: SubscriptionId,
    keys: Vec<ConfigKey>,
    tx: Sender<ConfigKey>,
}

#[derive(Debug)]
struct BusState {
    config: EditBoxConfig,
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

/// Shared configuration store with per-key change notification.
///
/// Single-threaded: shared through `Rc`, mutated through `&self`.
#[derive(Debug)]
pub struct ConfigBus {
    state: RefCell<BusState>,
}

impl ConfigBus {
    pub fn new(config: EditBoxConfig) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(BusState {
                config,
                subscribers: Vec::new(),
                next_id: 1,
            }),
        })
    }

    /// Read from the current configuration
    pub fn read<T>(&self, f: impl FnOnce(&EditBoxConfig) -> T) -> T {
        f(&self.state.borrow().config)
    }

    /// Clone of the current configuration
    pub fn snapshot(&self) -> EditBoxConfig {
        self.read(EditBoxConfig::clone)
    }

    /// Mutate the configuration and notify subscribers of `key`
    pub fn update(&self, key: ConfigKey, f: impl FnOnce(&mut EditBoxConfig)) {
        let mut state = self.state.borrow_mut();
        f(&mut state.config);
        tracing::debug!("Config changed: {}", key.path());
        // Subscribers whose receiver is gone are pruned here
        state
            .subscribers
            .retain(|sub| !sub.keys.contains(&key) || sub.tx.send(key).is_ok());
    }

    pub fn set_font_face(&self, face: &str) {
        self.update(ConfigKey::FontFace, |c| c.font_face = face.to_string());
    }

    pub fn set_font_size(&self, size: u32) {
        self.update(ConfigKey::FontSize, |c| c.font_size = size);
    }

    pub fn set_syntax_highlighting(&self, enabled: bool) {
        self.update(ConfigKey::SyntaxHighlighting, |c| {
            c.syntax_highlighting = enabled
        });
    }

    pub fn set_call_tips(&self, enabled: bool) {
        self.update(ConfigKey::CallTips, |c| c.call_tips = enabled);
    }

    pub fn set_language(&self, kind: LanguageKind, language: &str) {
        self.update(kind.config_key(), |c| match kind {
            LanguageKind::SpellChecker => c.spell_checker_language = language.to_string(),
            LanguageKind::Thesaurus => c.thesaurus_language = language.to_string(),
        });
    }

    /// Replace a category's colour triple, notifying each of its three keys
    pub fn set_syntax_colour(&self, style: SyntaxStyle, colour: SyntaxColour) {
        self.update(ConfigKey::SyntaxForeground(style), |c| {
            c.syntax.insert(style, colour);
        });
        self.update(ConfigKey::SyntaxBackground(style), |_| {});
        self.update(ConfigKey::SyntaxBold(style), |_| {});
    }

    /// Register interest in `keys`
    pub fn subscribe(&self, keys: &[ConfigKey]) -> Subscription {
        let mut state = self.state.borrow_mut();
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        let (tx, rx) = mpsc::channel();
        state.subscribers.push(Subscriber {
            id,
            keys: keys.to_vec(),
            tx,
        });
        tracing::debug!("Config subscription {:?} for {} keys", id, keys.len());
        Subscription { id, rx }
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut state = self.state.borrow_mut();
        state.subscribers.retain(|sub| sub.id != id);
        tracing::debug!("Config subscription {:?} removed", id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }

    /// Persist the current configuration to the default location
    pub fn save(&self) -> Result<(), String> {
        self.read(EditBoxConfig::save)
    }
}
