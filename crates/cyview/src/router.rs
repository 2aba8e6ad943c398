//! Click routing.
//!
//! A click on the canvas is handled in two steps. First the canvas resolves
//! the clicked item to the logical object behind it
//! ([`Canvas::resolve`](crate::canvas::Canvas::resolve)). Then the
//! [`InteractionRouter`] asks its [`ActionPolicy`] for the actions that
//! object offers and presents them. Splitting the steps lets a command
//! borrow the canvas mutably: the canvas borrow has ended before any command
//! runs.

use log::debug;

use cyview_core::{geometry::Point, surface::ItemId};

use crate::{
    canvas::GraphObject,
    menu::{Action, GrabGuard, MenuHost, MenuOutcome, PopupMenu},
    policy::{ActionPolicy, MouseButton},
};

/// A mouse click on a drawn item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    button: MouseButton,
    screen: Point,
    item: ItemId,
}

impl Click {
    /// `screen` is where a popup menu would open, in screen coordinates.
    pub fn new(button: MouseButton, screen: Point, item: ItemId) -> Self {
        Self {
            button,
            screen,
            item,
        }
    }

    pub fn button(&self) -> MouseButton {
        self.button
    }

    pub fn screen(&self) -> Point {
        self.screen
    }

    pub fn item(&self) -> ItemId {
        self.item
    }
}

/// Presents `actions` for a click on `target`.
///
/// - An empty list shows nothing.
/// - A list holding exactly one default action runs it directly.
/// - Anything else opens a popup at the click's screen position. Choosing an
///   enabled entry runs its command; dismissing the menu or choosing a
///   disabled entry runs nothing.
///
/// The host's grab is released before any chosen command runs, and also when
/// the host panics.
pub fn present_menu<T, H>(
    host: &mut H,
    click: &Click,
    actions: &[Action<T>],
    target: &T,
) -> MenuOutcome
where
    H: MenuHost + ?Sized,
{
    match actions {
        [] => {
            debug!(button = click.button.to_string(); "No actions offered");
            return MenuOutcome::Empty;
        }
        [action] if action.is_default() && action.is_enabled() => {
            debug!(action = action.label(); "Running default action");
            action.invoke(target);
            return MenuOutcome::Direct;
        }
        _ => {}
    }

    let menu = PopupMenu::from_actions(actions);
    debug!(
        entries = menu.len(),
        x = click.screen.x(),
        y = click.screen.y();
        "Showing action menu"
    );
    let choice = {
        let mut guard = GrabGuard::new(host);
        guard.popup(&menu, click.screen)
    };

    match choice.and_then(|index| actions.get(index).map(|action| (index, action))) {
        Some((index, action)) if action.invoke(target) => {
            debug!(index = index, action = action.label(); "Menu entry chosen");
            MenuOutcome::Chosen(index)
        }
        _ => {
            debug!("Menu dismissed");
            MenuOutcome::Dismissed
        }
    }
}

/// Routes resolved clicks to an [`ActionPolicy`].
#[derive(Debug, Clone)]
pub struct InteractionRouter<P> {
    policy: P,
}

impl<P: ActionPolicy> InteractionRouter<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Presents the actions the policy offers for `node`.
    pub fn on_node_click<H>(&self, host: &mut H, click: &Click, node: &P::Node) -> MenuOutcome
    where
        H: MenuHost + ?Sized,
    {
        let actions = self.policy.node_actions(node, click.button);
        debug!(button = click.button.to_string(), actions = actions.len(); "Node clicked");
        present_menu(host, click, &actions, node)
    }

    /// Presents the actions the policy offers for `edge`.
    pub fn on_edge_click<H>(&self, host: &mut H, click: &Click, edge: &P::Edge) -> MenuOutcome
    where
        H: MenuHost + ?Sized,
    {
        let actions = self.policy.edge_actions(edge, click.button);
        debug!(button = click.button.to_string(), actions = actions.len(); "Edge clicked");
        present_menu(host, click, &actions, edge)
    }

    /// Dispatches a resolved click to the node or edge handler.
    pub fn route<H>(
        &self,
        host: &mut H,
        click: &Click,
        target: &GraphObject<P::Node, P::Edge>,
    ) -> MenuOutcome
    where
        H: MenuHost + ?Sized,
    {
        match target {
            GraphObject::Node(node) => self.on_node_click(host, click, node),
            GraphObject::Edge(edge) => self.on_edge_click(host, click, edge),
        }
    }
}
