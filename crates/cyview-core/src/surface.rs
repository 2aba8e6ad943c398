//! Drawing surfaces.
//!
//! A [`Surface`] is the interactive canvas primitives are drawn on. Every
//! drawn item gets an [`ItemId`] and a list of [`Tag`]s; tags are how the
//! projector finds items again (highlight overlays) and how a click on an
//! item is traced back to the element that produced it.
//!
//! [`Scene`] is the retained, in-memory implementation. Toolkit bindings
//! implement [`Surface`] on top of their own canvas widget.

use log::trace;

use crate::{
    draw::Primitive,
    geometry::{Bounds, Point},
    identifier::ElementId,
};

/// Default hit-test slack around primitives, in surface pixels.
pub const HIT_TOLERANCE: f32 = 2.0;

/// Identifier of one drawn item, unique for the lifetime of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Label attached to drawn items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Item belongs to the drawing of a laid-out element.
    Element(ElementId),
    /// Item is the highlight overlay of an edge.
    Highlight(ElementId),
    /// Item is a node outline.
    NodeShape,
}

impl Tag {
    /// The element id of an [`Tag::Element`] tag.
    pub fn element(&self) -> Option<ElementId> {
        match self {
            Self::Element(id) => Some(*id),
            _ => None,
        }
    }
}

/// An interactive drawing surface.
///
/// Items are kept in z-order: later items are drawn on top of earlier ones
/// unless moved with [`Surface::lower`].
pub trait Surface {
    /// Draws a primitive on top of everything else and returns its id.
    fn draw(&mut self, primitive: Primitive, tags: Vec<Tag>) -> ItemId;

    /// All items carrying `tag`, bottom to top.
    fn find_with_tag(&self, tag: &Tag) -> Vec<ItemId>;

    /// Removes an item. Unknown ids are ignored.
    fn delete(&mut self, item: ItemId);

    /// Moves an item to the bottom of the z-order.
    fn lower(&mut self, item: ItemId);

    /// Tags of an item, or `None` if the item does not exist.
    fn tags(&self, item: ItemId) -> Option<&[Tag]>;

    /// Topmost item hit by `point`.
    fn item_at(&self, point: Point) -> Option<ItemId>;

    /// Removes every item.
    fn clear(&mut self);

    /// Number of items on the surface.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One item of a [`Scene`].
#[derive(Debug, Clone)]
pub struct SceneItem {
    id: ItemId,
    primitive: Primitive,
    tags: Vec<Tag>,
}

impl SceneItem {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// Retained in-memory surface.
///
/// # Examples
///
/// ```
/// use cyview_core::{
///     draw::{Line, Primitive, StrokeDefinition},
///     geometry::Point,
///     identifier::ElementId,
///     surface::{Scene, Surface, Tag},
/// };
///
/// let mut scene = Scene::new();
/// let tag = Tag::Element(ElementId::new("e0"));
/// let line = Line::new(
///     vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0)],
///     StrokeDefinition::default(),
/// );
/// let item = scene.draw(Primitive::Line(line), vec![tag]);
///
/// assert_eq!(scene.find_with_tag(&tag), vec![item]);
/// assert_eq!(scene.item_at(Point::new(25.0, 1.0)), Some(item));
/// ```
#[derive(Debug, Clone)]
pub struct Scene {
    items: Vec<SceneItem>,
    next_id: u64,
    tolerance: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            tolerance: HIT_TOLERANCE,
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hit-test slack used by [`Surface::item_at`].
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Items bottom to top.
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&SceneItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Union of all item bounding boxes, or `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        self.items
            .iter()
            .map(|item| item.primitive.bounding_box())
            .reduce(|acc, b| acc.merge(&b))
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl Surface for Scene {
    fn draw(&mut self, primitive: Primitive, tags: Vec<Tag>) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        trace!(item = id.0, kind = primitive.kind(); "Drawing primitive");
        self.items.push(SceneItem {
            id,
            primitive,
            tags,
        });
        id
    }

    fn find_with_tag(&self, tag: &Tag) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| item.tags.contains(tag))
            .map(|item| item.id)
            .collect()
    }

    fn delete(&mut self, item: ItemId) {
        if let Some(index) = self.position(item) {
            self.items.remove(index);
        }
    }

    fn lower(&mut self, item: ItemId) {
        if let Some(index) = self.position(item) {
            let lowered = self.items.remove(index);
            self.items.insert(0, lowered);
        }
    }

    fn tags(&self, item: ItemId) -> Option<&[Tag]> {
        self.item(item).map(|item| item.tags.as_slice())
    }

    fn item_at(&self, point: Point) -> Option<ItemId> {
        self.items
            .iter()
            .rev()
            .find(|item| item.primitive.hit(point, self.tolerance))
            .map(|item| item.id)
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
