//! The edit box model - complete state of one subtitle text editor
//!
//! State only. Everything that changes it goes through
//! [`crate::update::update`].

use std::rc::Rc;

use crate::buffer::TextBuffer;
use crate::calltip::{CalltipProvider, CalltipTracker, TagCalltips};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::{ConfigBus, ConfigKey, LanguageKind, Subscription};
use crate::guard::{EditGuard, EditTransaction};
use crate::menu::SuggestionMenu;
use crate::messages::Msg;
use crate::position::{char_to_caret, CaretPos, CharPos, CharRange};
use crate::spelling::{SpellChecker, Thesaurus};
use crate::style::StyleSheet;
use crate::syntax::{PlainTokenizer, Styling, Token, Tokenizer};

/// Builds the thesaurus the first time a menu needs it
pub type ThesaurusFactory = Box<dyn Fn() -> Option<Box<dyn Thesaurus>>>;

/// Current interaction mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    /// A context menu is open and its suggestion lists are live
    MenuOpen,
}

/// Selection in code-point space. `head` is the caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: CharPos,
    pub head: CharPos,
}

impl Selection {
    pub fn caret(pos: CharPos) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    pub fn range(&self) -> CharRange {
        CharRange::new(self.anchor, self.head)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Clamp both ends to a buffer of `len` code points
    pub fn clamped(self, len: usize) -> Self {
        Self {
            anchor: CharPos(self.anchor.get().min(len)),
            head: CharPos(self.head.get().min(len)),
        }
    }
}

/// One subtitle edit box
pub struct EditBox {
    pub buffer: TextBuffer,
    pub selection: Selection,
    pub mode: Mode,
    /// Styling karaoke template syntax
    pub template_line: bool,
    /// Attached to a subtitle line, so the split commands are offered
    pub line_attached: bool,

    pub(crate) tokens: Vec<Token>,
    /// Last styling handed to the host, to skip identical re-sends
    pub(crate) applied: Option<Styling>,
    pub(crate) tracker: CalltipTracker,
    pub(crate) menu: Option<SuggestionMenu>,

    tokenizer: Box<dyn Tokenizer>,
    calltips: Box<dyn CalltipProvider>,
    spell: Option<Box<dyn SpellChecker>>,
    thesaurus: Option<Box<dyn Thesaurus>>,
    thesaurus_factory: Option<ThesaurusFactory>,
    clipboard: Box<dyn Clipboard>,

    config: Rc<ConfigBus>,
    subscription: Subscription,
    guard: EditGuard,
    /// Held from an emitted `Cmd::SetText` until `Msg::TextApplied`
    pending_edit: Option<EditTransaction>,
}

impl EditBox {
    /// Empty edit box on the system clipboard with the plain tokenizer
    pub fn new(config: Rc<ConfigBus>) -> Self {
        let subscription = config.subscribe(&ConfigKey::edit_box_keys());
        tracing::debug!(
            "Edit box subscribed to {} config keys",
            ConfigKey::edit_box_keys().len()
        );

        Self {
            buffer: TextBuffer::new(),
            selection: Selection::default(),
            mode: Mode::Idle,
            template_line: false,
            line_attached: false,
            tokens: Vec::new(),
            applied: None,
            tracker: CalltipTracker::new(),
            menu: None,
            tokenizer: Box::new(PlainTokenizer),
            calltips: Box::new(TagCalltips::default()),
            spell: None,
            thesaurus: None,
            thesaurus_factory: None,
            clipboard: Box::new(SystemClipboard),
            config,
            subscription,
            guard: EditGuard::new(),
            pending_edit: None,
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.buffer.set_text(text);
        self.selection = Selection::caret(CharPos(self.buffer.len_chars()));
        self.retokenize();
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self.retokenize();
        self
    }

    pub fn with_calltip_provider(mut self, provider: impl CalltipProvider + 'static) -> Self {
        self.calltips = Box::new(provider);
        self
    }

    /// Attach a spell checker, switched to the configured language
    pub fn with_spell_checker(mut self, checker: impl SpellChecker + 'static) -> Self {
        let mut checker: Box<dyn SpellChecker> = Box::new(checker);
        let language = self.language(LanguageKind::SpellChecker);
        if !language.is_empty() {
            checker.set_language(&language);
        }
        self.spell = Some(checker);
        self
    }

    /// Thesaurus construction is deferred until a context menu needs it
    pub fn with_thesaurus_factory(
        mut self,
        factory: impl Fn() -> Option<Box<dyn Thesaurus>> + 'static,
    ) -> Self {
        self.thesaurus_factory = Some(Box::new(factory));
        self
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    pub fn with_line_attached(mut self, attached: bool) -> Self {
        self.line_attached = attached;
        self
    }

    // === Accessors ===

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn config(&self) -> &Rc<ConfigBus> {
        &self.config
    }

    /// Style sheet for the current configuration, for the host's first paint
    pub fn style_sheet(&self) -> StyleSheet {
        self.config.read(StyleSheet::from_config)
    }

    pub fn calltip_tracker(&self) -> &CalltipTracker {
        &self.tracker
    }

    /// Suggestion lists of the open context menu
    pub fn open_menu(&self) -> Option<&SuggestionMenu> {
        self.menu.as_ref()
    }

    pub fn spell_checker(&self) -> Option<&dyn SpellChecker> {
        self.spell.as_deref()
    }

    pub(crate) fn spell_checker_mut(&mut self) -> Option<&mut (dyn SpellChecker + 'static)> {
        self.spell.as_deref_mut()
    }

    pub(crate) fn calltip_provider(&self) -> &dyn CalltipProvider {
        self.calltips.as_ref()
    }

    pub(crate) fn clipboard_mut(&mut self) -> &mut dyn Clipboard {
        self.clipboard.as_mut()
    }

    /// Whether the thesaurus has been constructed yet
    pub fn has_thesaurus(&self) -> bool {
        self.thesaurus.is_some()
    }

    /// The thesaurus, constructing it on first use
    pub(crate) fn thesaurus(&mut self) -> Option<&dyn Thesaurus> {
        if self.thesaurus.is_none() {
            if let Some(factory) = &self.thesaurus_factory {
                let mut thesaurus = factory();
                let language = self.language(LanguageKind::Thesaurus);
                if let Some(thesaurus) = thesaurus.as_mut() {
                    tracing::debug!("Constructed thesaurus ({:?})", language);
                    thesaurus.set_language(&language);
                }
                self.thesaurus = thesaurus;
            }
        }
        self.thesaurus.as_deref()
    }

    pub(crate) fn thesaurus_mut(&mut self) -> Option<&mut (dyn Thesaurus + 'static)> {
        self.thesaurus.as_deref_mut()
    }

    pub(crate) fn language(&self, kind: LanguageKind) -> String {
        self.config.read(|config| config.language(kind).to_string())
    }

    // === Positions ===

    /// Selection in the host's caret space, `(anchor, head)`
    pub fn caret_selection(&self) -> (CaretPos, CaretPos) {
        let text = self.buffer.text();
        (
            char_to_caret(&text, self.selection.anchor),
            char_to_caret(&text, self.selection.head),
        )
    }

    // === Tokens ===

    pub(crate) fn retokenize(&mut self) {
        self.tokens = self.tokenizer.tokenize(&self.buffer.text());
    }

    // === Edit transactions ===

    /// Start a programmatic edit of the host's own, outside any
    /// `Cmd::SetText` the edit box emitted.
    pub fn transaction(&self) -> EditTransaction {
        self.guard.begin()
    }

    /// Keep ignoring widget notifications until the host acknowledges the
    /// replacement with `Msg::TextApplied`. A newer replacement takes over
    /// the pending one.
    pub(crate) fn begin_host_edit(&mut self) {
        self.pending_edit = Some(self.guard.begin());
    }

    pub(crate) fn finish_host_edit(&mut self) -> bool {
        self.pending_edit.take().is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.guard.is_active()
    }

    // === Configuration ===

    /// Turn queued configuration notifications into messages
    pub fn pump_config(&self) -> Vec<Msg> {
        self.subscription
            .drain()
            .into_iter()
            .map(Msg::ConfigChanged)
            .collect()
    }

    /// Drain notifications without dispatching them
    pub(crate) fn take_config_changes(&self) -> Vec<ConfigKey> {
        self.subscription.drain()
    }
}

impl Drop for EditBox {
    fn drop(&mut self) {
        self.config.unsubscribe(self.subscription.id());
        tracing::debug!("Edit box unsubscribed from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditBoxConfig;

    #[test]
    fn test_subscription_lifetime() {
        let bus = ConfigBus::new(EditBoxConfig::default());
        {
            let _edit_box = EditBox::new(Rc::clone(&bus));
            assert_eq!(bus.subscriber_count(), 1);
        }
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_config_changes_become_messages() {
        let bus = ConfigBus::new(EditBoxConfig::default());
        let edit_box = EditBox::new(Rc::clone(&bus));
        bus.set_call_tips(false);
        bus.set_font_size(14);
        assert_eq!(
            edit_box.pump_config(),
            vec![
                Msg::ConfigChanged(ConfigKey::CallTips),
                Msg::ConfigChanged(ConfigKey::FontSize)
            ]
        );
        assert!(edit_box.pump_config().is_empty());
    }

    #[test]
    fn test_thesaurus_built_lazily_once() {
        use std::cell::Cell;

        struct Empty;
        impl Thesaurus for Empty {
            fn lookup(&self, _word: &str) -> Vec<crate::spelling::ThesaurusEntry> {
                Vec::new()
            }
            fn language_list(&self) -> Vec<String> {
                Vec::new()
            }
        }

        let built = Rc::new(Cell::new(0));
        let counter = Rc::clone(&built);
        let mut edit_box = EditBox::new(ConfigBus::new(EditBoxConfig::default()))
            .with_thesaurus_factory(move || {
                counter.set(counter.get() + 1);
                Some(Box::new(Empty) as Box<dyn Thesaurus>)
            });

        assert!(!edit_box.has_thesaurus());
        assert!(edit_box.thesaurus().is_some());
        assert!(edit_box.thesaurus().is_some());
        assert_eq!(built.get(), 1);
    }

    #[test]
    fn test_host_edit_held_until_finished() {
        let mut edit_box = EditBox::new(ConfigBus::new(EditBoxConfig::default()));
        edit_box.begin_host_edit();
        edit_box.begin_host_edit();
        assert!(edit_box.is_editing());
        assert!(edit_box.finish_host_edit());
        assert!(!edit_box.is_editing());
        assert!(!edit_box.finish_host_edit());
    }

    #[test]
    fn test_with_text_puts_caret_at_end() {
        let edit_box = EditBox::new(ConfigBus::new(EditBoxConfig::default())).with_text("h\u{e9}llo");
        assert_eq!(edit_box.selection, Selection::caret(CharPos(5)));
        assert_eq!(edit_box.caret_selection(), (CaretPos(5), CaretPos(5)));
        assert_eq!(edit_box.tokens().len(), 1);
    }
}
