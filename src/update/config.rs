//! Reacting to configuration changes

use crate::commands::Cmd;
use crate::config::{ConfigKey, LanguageKind};
use crate::editbox::EditBox;
use crate::style::StyleSheet;

use super::{refresh, update_calltip};

pub(super) fn changed(model: &mut EditBox, key: ConfigKey) -> Vec<Cmd> {
    apply(model, &[key])
}

/// Handle notifications this edit box raised itself, without waiting for
/// the host to pump them
pub(super) fn apply_pending(model: &mut EditBox) -> Vec<Cmd> {
    let keys = model.take_config_changes();
    apply(model, &keys)
}

fn apply(model: &mut EditBox, keys: &[ConfigKey]) -> Vec<Cmd> {
    let mut style_sheet = false;
    let mut restyle = false;
    let mut calltip = false;

    for &key in keys {
        tracing::debug!("Config changed: {}", key.path());
        match key {
            ConfigKey::SyntaxHighlighting => restyle = true,
            ConfigKey::CallTips => calltip = true,
            ConfigKey::SpellCheckerLanguage => {
                let language = model.language(LanguageKind::SpellChecker);
                if let Some(checker) = model.spell_checker_mut() {
                    checker.set_language(&language);
                }
                restyle = true;
            }
            ConfigKey::ThesaurusLanguage => {
                let language = model.language(LanguageKind::Thesaurus);
                if let Some(thesaurus) = model.thesaurus_mut() {
                    thesaurus.set_language(&language);
                }
            }
            key if key.affects_style_sheet() => {
                style_sheet = true;
                restyle = true;
            }
            _ => {}
        }
    }

    let mut cmds = Vec::new();
    if style_sheet {
        cmds.push(Cmd::SetStyles(model.config().read(StyleSheet::from_config)));
    }
    if restyle {
        cmds.extend(refresh(model, true));
    } else if calltip {
        cmds.extend(update_calltip(model));
    }
    cmds
}
