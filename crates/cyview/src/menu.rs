//! Context menu actions and the popup host seam.
//!
//! An [`ActionPolicy`](crate::policy::ActionPolicy) answers a click with a
//! list of [`Action`]s. The router turns that list into a [`PopupMenu`] and
//! hands it to a [`MenuHost`], the toolkit-specific part that actually shows
//! the menu and holds the input grab while it is open.

use std::{fmt, ops::Deref, ops::DerefMut, rc::Rc};

use log::debug;

use cyview_core::geometry::Point;

/// Label that turns an action into a menu separator.
pub const SEPARATOR_LABEL: &str = "---";

type Command<T> = Rc<dyn Fn(&T)>;

/// One entry offered for a clicked element.
pub struct Action<T> {
    label: String,
    command: Option<Command<T>>,
    default: bool,
}

impl<T> Action<T> {
    /// An enabled entry running `command` on the clicked object.
    pub fn new(label: impl Into<String>, command: impl Fn(&T) + 'static) -> Self {
        Self {
            label: label.into(),
            command: Some(Rc::new(command)),
            default: false,
        }
    }

    /// A disabled, informational entry.
    pub fn info(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            command: None,
            default: false,
        }
    }

    pub fn separator() -> Self {
        Self::info(SEPARATOR_LABEL)
    }

    /// An action that runs immediately, without a menu, when it is the only
    /// action offered.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::{cell::Cell, rc::Rc};
    /// use cyview::menu::Action;
    ///
    /// let hits = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&hits);
    /// let action = Action::default_command("Open", move |n: &u32| counter.set(*n));
    ///
    /// assert!(action.is_default());
    /// assert!(action.invoke(&7));
    /// assert_eq!(hits.get(), 7);
    /// ```
    pub fn default_command(label: impl Into<String>, command: impl Fn(&T) + 'static) -> Self {
        Self {
            default: true,
            ..Self::new(label, command)
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_separator(&self) -> bool {
        self.label == SEPARATOR_LABEL
    }

    /// True if choosing this entry runs a command.
    pub fn is_enabled(&self) -> bool {
        !self.is_separator() && self.command.is_some()
    }

    pub fn is_default(&self) -> bool {
        self.default
    }

    /// Runs the command on `target`; returns false for entries without one.
    pub fn invoke(&self, target: &T) -> bool {
        match &self.command {
            Some(command) if !self.is_separator() => {
                command(target);
                true
            }
            _ => false,
        }
    }
}

impl<T> Clone for Action<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            command: self.command.clone(),
            default: self.default,
        }
    }
}

impl<T> fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("command", &self.command.is_some())
            .field("default", &self.default)
            .finish()
    }
}

/// One row of a popup menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Separator,
    Item { label: String, enabled: bool },
}

/// Toolkit-independent description of a popup menu.
///
/// Entries map one-to-one onto the actions the menu was built from, so the
/// index a [`MenuHost`] returns is also an index into those actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopupMenu {
    entries: Vec<MenuEntry>,
}

impl PopupMenu {
    pub fn from_actions<T>(actions: &[Action<T>]) -> Self {
        let entries = actions
            .iter()
            .map(|action| {
                if action.is_separator() {
                    MenuEntry::Separator
                } else {
                    MenuEntry::Item {
                        label: action.label.clone(),
                        enabled: action.command.is_some(),
                    }
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shows popup menus on behalf of the router.
pub trait MenuHost {
    /// Shows `menu` at screen position `at` and blocks until the user picks
    /// an entry or dismisses the menu. Returns the chosen entry index.
    ///
    /// The host takes the input grab while the menu is open.
    fn popup(&mut self, menu: &PopupMenu, at: Point) -> Option<usize>;

    /// Releases the input grab taken by [`MenuHost::popup`].
    fn release_grab(&mut self);
}

/// Releases the host's grab when dropped.
///
/// Holding the host through the guard guarantees the release on every exit
/// path, including a panic raised by the host itself.
pub struct GrabGuard<'a, H: MenuHost + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: MenuHost + ?Sized> GrabGuard<'a, H> {
    pub fn new(host: &'a mut H) -> Self {
        Self { host }
    }
}

impl<H: MenuHost + ?Sized> Deref for GrabGuard<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: MenuHost + ?Sized> DerefMut for GrabGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: MenuHost + ?Sized> Drop for GrabGuard<'_, H> {
    fn drop(&mut self) {
        debug!("Releasing menu grab");
        self.host.release_grab();
    }
}

/// What happened to a click after it was routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The single default action ran without a menu.
    Direct,
    /// No actions were offered; nothing was shown.
    Empty,
    /// The menu was shown and the entry at this index ran.
    Chosen(usize),
    /// The menu was shown and closed without running anything.
    Dismissed,
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_popup_entries_follow_actions() {
        let actions = vec![
            Action::info("State s0"),
            Action::separator(),
            Action::new("Delete", |_: &()| {}),
        ];

        let menu = PopupMenu::from_actions(&actions);
        assert_eq!(
            menu.entries(),
            [
                MenuEntry::Item {
                    label: "State s0".to_string(),
                    enabled: false
                },
                MenuEntry::Separator,
                MenuEntry::Item {
                    label: "Delete".to_string(),
                    enabled: true
                },
            ]
        );
    }

    #[test]
    fn test_separator_with_command_is_not_invocable() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let action = Action::new(SEPARATOR_LABEL, move |_: &()| flag.set(true));

        assert!(action.is_separator());
        assert!(!action.is_enabled());
        assert!(!action.invoke(&()));
        assert!(!ran.get());
    }

    #[test]
    fn test_info_action_is_disabled() {
        let action = Action::<()>::info("Read only");
        assert!(!action.is_enabled());
        assert!(!action.is_default());
        assert!(!action.invoke(&()));
    }

    struct CountingHost {
        releases: usize,
    }

    impl MenuHost for CountingHost {
        fn popup(&mut self, _menu: &PopupMenu, _at: Point) -> Option<usize> {
            None
        }

        fn release_grab(&mut self) {
            self.releases += 1;
        }
    }

    #[test]
    fn test_grab_guard_releases_once() {
        let mut host = CountingHost { releases: 0 };
        {
            let mut guard = GrabGuard::new(&mut host);
            assert_eq!(guard.popup(&PopupMenu::default(), Point::default()), None);
        }
        assert_eq!(host.releases, 1);
    }
}
