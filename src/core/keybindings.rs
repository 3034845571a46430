//! Named key bindings for containers.

use std::collections::BTreeMap;

use crate::core::message::KeyMsg;

pub type KeyId = String;

/// Short help text for a binding, e.g. `("tab", "next")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    pub key: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    keys: Vec<KeyId>,
    help: Help,
    enabled: bool,
}

impl KeyBinding {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyId>,
    {
        Self {
            keys: keys
                .into_iter()
                .map(|key| key.into().to_ascii_lowercase())
                .collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    pub fn keys(&self) -> &[KeyId] {
        &self.keys
    }

    pub fn set_keys<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyId>,
    {
        self.keys = keys
            .into_iter()
            .map(|key| key.into().to_ascii_lowercase())
            .collect();
    }

    pub fn help(&self) -> &Help {
        &self.help
    }

    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether `key` triggers this binding. Disabled bindings never match.
    pub fn matches(&self, key: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|id| key.is(id))
    }
}

/// A set of bindings that can describe itself to a help bar.
pub trait KeyMap {
    /// Every binding under its field name, e.g. `("focus_next", ..)`.
    fn named(&self) -> Vec<(&str, &KeyBinding)>;

    fn short_help(&self) -> Vec<&KeyBinding>;

    /// Bindings grouped into help columns. Defaults to the short help as a single column.
    fn full_help(&self) -> Vec<Vec<&KeyBinding>> {
        vec![self.short_help()]
    }
}

/// Bindings from several key maps under `scope.field` names, with an explicit help selection.
///
/// ```
/// use tape_layout::{Bindings, GroupKeyMap, KeyMap, TabKeyMap};
///
/// let bindings = Bindings::new()
///     .with_keymap("group", &GroupKeyMap::default())
///     .with_keymap("tabs", &TabKeyMap::default())
///     .with_short_help(["group.focus_next", "tabs.tab_next"]);
/// assert_eq!(bindings.short_help().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    bindings: BTreeMap<String, KeyBinding>,
    short: Vec<String>,
    full: Vec<Vec<String>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binding(mut self, name: impl Into<String>, binding: KeyBinding) -> Self {
        self.bindings.insert(name.into(), binding);
        self
    }

    /// Copies every binding of `keymap` in as `scope.field`.
    pub fn with_keymap(mut self, scope: &str, keymap: &dyn KeyMap) -> Self {
        for (field, binding) in keymap.named() {
            self.bindings
                .insert(format!("{scope}.{field}"), binding.clone());
        }
        self
    }

    /// Names shown in the one-line help, in order. Unknown names are skipped when rendering.
    pub fn with_short_help<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.short = names.into_iter().map(Into::into).collect();
        self
    }

    /// Adds one column to the full help.
    pub fn with_full_help_column<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.full.push(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn key(&self, name: &str) -> Option<&KeyBinding> {
        self.bindings.get(name)
    }

    pub fn key_mut(&mut self, name: &str) -> Option<&mut KeyBinding> {
        self.bindings.get_mut(name)
    }

    pub fn set_key(&mut self, name: impl Into<String>, binding: KeyBinding) {
        self.bindings.insert(name.into(), binding);
    }

    /// Whether the binding registered as `name` matches `key`. Unknown names never match.
    pub fn matches(&self, name: &str, key: &KeyMsg) -> bool {
        self.key(name).is_some_and(|binding| binding.matches(key))
    }

    fn resolve<'a>(&'a self, names: &'a [String]) -> Vec<&'a KeyBinding> {
        names.iter().filter_map(|name| self.key(name)).collect()
    }
}

impl KeyMap for Bindings {
    fn named(&self) -> Vec<(&str, &KeyBinding)> {
        self.bindings
            .iter()
            .map(|(name, binding)| (name.as_str(), binding))
            .collect()
    }

    fn short_help(&self) -> Vec<&KeyBinding> {
        self.resolve(&self.short)
    }

    /// The configured columns, or the short help when none were given.
    fn full_help(&self) -> Vec<Vec<&KeyBinding>> {
        if self.full.is_empty() {
            return vec![self.short_help()];
        }
        self.full.iter().map(|column| self.resolve(column)).collect()
    }
}

/// Focus navigation inside a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupKeyMap {
    pub focus_next: KeyBinding,
    pub focus_prev: KeyBinding,
}

impl Default for GroupKeyMap {
    fn default() -> Self {
        Self {
            focus_next: KeyBinding::new(["tab"]).with_help("tab", "next"),
            focus_prev: KeyBinding::new(["shift+tab"]).with_help("shift+tab", "prev"),
        }
    }
}

impl KeyMap for GroupKeyMap {
    fn named(&self) -> Vec<(&str, &KeyBinding)> {
        vec![("focus_next", &self.focus_next), ("focus_prev", &self.focus_prev)]
    }

    fn short_help(&self) -> Vec<&KeyBinding> {
        vec![&self.focus_next, &self.focus_prev]
    }
}

/// Page navigation inside a tab group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabKeyMap {
    pub tab_next: KeyBinding,
    pub tab_prev: KeyBinding,
}

impl Default for TabKeyMap {
    fn default() -> Self {
        Self {
            tab_next: KeyBinding::new(["ctrl+right", "ctrl+l"]).with_help("ctrl+→", "next tab"),
            tab_prev: KeyBinding::new(["ctrl+left", "ctrl+h"]).with_help("ctrl+←", "prev tab"),
        }
    }
}

impl KeyMap for TabKeyMap {
    fn named(&self) -> Vec<(&str, &KeyBinding)> {
        vec![("tab_next", &self.tab_next), ("tab_prev", &self.tab_prev)]
    }

    fn short_help(&self) -> Vec<&KeyBinding> {
        vec![&self.tab_next, &self.tab_prev]
    }
}

#[cfg(test)]
mod tests {
    use super::{Bindings, GroupKeyMap, KeyBinding, KeyMap, TabKeyMap};
    use crate::core::message::KeyMsg;

    #[test]
    fn binding_matches_any_of_its_keys() {
        let binding = KeyBinding::new(["ctrl+right", "ctrl+l"]);
        assert!(binding.matches(&KeyMsg::new("ctrl+l")));
        assert!(binding.matches(&KeyMsg::new("CTRL+RIGHT")));
        assert!(!binding.matches(&KeyMsg::new("l")));
    }

    #[test]
    fn disabled_or_empty_bindings_never_match() {
        let mut binding = KeyBinding::new(["tab"]);
        binding.set_enabled(false);
        assert!(!binding.matches(&KeyMsg::new("tab")));

        let empty = KeyBinding::new(Vec::<String>::new());
        assert!(!empty.enabled());
    }

    #[test]
    fn default_group_keys() {
        let keys = GroupKeyMap::default();
        assert!(keys.focus_next.matches(&KeyMsg::new("tab")));
        assert!(keys.focus_prev.matches(&KeyMsg::new("shift+tab")));
        assert_eq!(keys.short_help().len(), 2);
    }

    #[test]
    fn default_tab_keys_do_not_collide_with_group_keys() {
        let group = GroupKeyMap::default();
        let tabs = TabKeyMap::default();
        for key in tabs.tab_next.keys().iter().chain(tabs.tab_prev.keys()) {
            let msg = KeyMsg::new(key.as_str());
            assert!(!group.focus_next.matches(&msg));
            assert!(!group.focus_prev.matches(&msg));
        }
    }

    #[test]
    fn keymaps_register_under_their_scope() {
        let bindings = Bindings::new()
            .with_keymap("group", &GroupKeyMap::default())
            .with_keymap("tabs", &TabKeyMap::default());

        let names: Vec<&str> = bindings.named().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["group.focus_next", "group.focus_prev", "tabs.tab_next", "tabs.tab_prev"]
        );
        assert!(bindings.matches("tabs.tab_next", &KeyMsg::new("ctrl+l")));
        assert!(!bindings.matches("tabs.missing", &KeyMsg::new("ctrl+l")));
    }

    #[test]
    fn help_selection_follows_the_configured_names() {
        let mut bindings = Bindings::new()
            .with_keymap("group", &GroupKeyMap::default())
            .with_binding("app.quit", KeyBinding::new(["q"]).with_help("q", "quit"))
            .with_short_help(["app.quit", "nope", "group.focus_next"]);

        let short: Vec<&str> = bindings
            .short_help()
            .into_iter()
            .map(|binding| binding.help().desc.as_str())
            .collect();
        assert_eq!(short, vec!["quit", "next"]);
        assert_eq!(bindings.full_help().len(), 1);

        bindings = bindings
            .with_full_help_column(["group.focus_next", "group.focus_prev"])
            .with_full_help_column(["app.quit"]);
        let full = bindings.full_help();
        assert_eq!(full.len(), 2);
        assert_eq!(full[0].len(), 2);
        assert_eq!(full[1][0].help().key, "q");
    }

    #[test]
    fn rebinding_a_registered_key() {
        let mut bindings = Bindings::new().with_keymap("group", &GroupKeyMap::default());
        bindings.set_key("group.focus_next", KeyBinding::new(["ctrl+n"]));

        assert!(bindings.matches("group.focus_next", &KeyMsg::new("ctrl+n")));
        assert!(!bindings.matches("group.focus_next", &KeyMsg::new("tab")));

        if let Some(binding) = bindings.key_mut("group.focus_prev") {
            binding.set_enabled(false);
        }
        assert!(!bindings.matches("group.focus_prev", &KeyMsg::new("shift+tab")));
    }
}
