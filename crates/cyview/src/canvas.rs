//! The canvas projector.
//!
//! [`Canvas`] puts an [`ElementSet`] on a [`Surface`] and remembers which
//! drawn items belong to which logical object. Rendering is atomic: the whole
//! set is projected into a plan first, and only a complete plan replaces the
//! previous drawing and maps. A set that fails to project leaves the canvas
//! exactly as it was.

use std::{collections::HashSet, hash::Hash, str::FromStr};

use indexmap::IndexMap;
use log::{debug, info, warn};

use cyview_core::{
    draw::{Line, Primitive, ShapeKind, StrokeCap, StrokeDefinition, TextLabel},
    geometry::{Bounds, Point, Transform},
    identifier::ElementId,
    surface::{ItemId, Surface, Tag},
};

use crate::{
    config::AppConfig,
    element::{EdgeElement, ElementSet, LaidOutElement, NodeElement, ShapeElement},
    error::CanvasError,
    label::sanitize_label,
    menu::{MenuHost, MenuOutcome},
    policy::{ActionPolicy, ConfiguredStyle, StylePolicy},
    router::{Click, InteractionRouter},
};

/// The logical object behind a drawn node or edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GraphObject<N, E> {
    Node(N),
    Edge(E),
}

impl<N, E> GraphObject<N, E> {
    pub fn as_node(&self) -> Option<&N> {
        match self {
            Self::Node(node) => Some(node),
            Self::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&E> {
        match self {
            Self::Edge(edge) => Some(edge),
            Self::Node(_) => None,
        }
    }
}

/// Everything one render produces, built before the surface is touched.
struct RenderPlan<N, E> {
    items: Vec<(Primitive, Vec<Tag>)>,
    seen: HashSet<ElementId>,
    node_ids: IndexMap<N, ElementId>,
    edge_ids: IndexMap<E, ElementId>,
    objects: IndexMap<ElementId, GraphObject<N, E>>,
    edge_points: IndexMap<ElementId, Vec<Point>>,
}

impl<N, E> RenderPlan<N, E>
where
    N: Clone + Eq + Hash,
    E: Clone + Eq + Hash,
{
    fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            node_ids: IndexMap::new(),
            edge_ids: IndexMap::new(),
            objects: IndexMap::new(),
            edge_points: IndexMap::new(),
        }
    }

    fn claim(&mut self, id: ElementId) -> Result<(), CanvasError> {
        if self.seen.insert(id) {
            Ok(())
        } else {
            Err(CanvasError::DuplicateId(id))
        }
    }

    fn record_node(&mut self, id: ElementId, node: &N) -> Result<(), CanvasError> {
        if let Some(existing) = self.node_ids.insert(node.clone(), id) {
            return Err(CanvasError::DuplicateObject {
                element: id,
                existing,
            });
        }
        self.objects.insert(id, GraphObject::Node(node.clone()));
        Ok(())
    }

    fn record_edge(&mut self, id: ElementId, edge: &E) -> Result<(), CanvasError> {
        if let Some(existing) = self.edge_ids.insert(edge.clone(), id) {
            return Err(CanvasError::DuplicateObject {
                element: id,
                existing,
            });
        }
        self.objects.insert(id, GraphObject::Edge(edge.clone()));
        Ok(())
    }

    fn push(&mut self, primitive: Primitive, tags: Vec<Tag>) {
        self.items.push((primitive, tags));
    }
}

/// Projects laid-out graphs onto a [`Surface`].
///
/// `N` and `E` are the logical node and edge objects the layout was computed
/// from. After a render the canvas maps each of them to the id of the
/// element drawn for it, and each drawn item back to its object.
///
/// # Examples
///
/// ```
/// use cyview::{canvas::Canvas, config::AppConfig, element::ElementSet};
/// use cyview_core::surface::{Scene, Surface};
///
/// let json = r#"[
///   {"group": "nodes", "data": {"id": "n0", "obj": "s0", "label": "s0",
///    "shape": "octagon", "width": 54, "height": 36},
///    "position": {"x": 27, "y": 18}}
/// ]"#;
/// let set = ElementSet::<String, String>::from_json(json).unwrap();
///
/// let mut canvas = Canvas::new(Scene::new(), &AppConfig::default()).unwrap();
/// canvas.render(&set).unwrap();
///
/// assert_eq!(canvas.node_id(&"s0".to_string()).unwrap(), "n0");
/// assert_eq!(canvas.surface().len(), 2);
/// ```
pub struct Canvas<S, N, E> {
    surface: S,
    style: Box<dyn StylePolicy<N, E>>,
    transform: Transform,
    highlight_stroke: StrokeDefinition,
    node_ids: IndexMap<N, ElementId>,
    edge_ids: IndexMap<E, ElementId>,
    objects: IndexMap<ElementId, GraphObject<N, E>>,
    edge_points: IndexMap<ElementId, Vec<Point>>,
}

impl<S, N, E> Canvas<S, N, E>
where
    S: Surface,
    N: Clone + Eq + Hash + 'static,
    E: Clone + Eq + Hash + 'static,
{
    /// Creates a canvas drawing on `surface` with the styles, highlight look
    /// and transform of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] if a configured color is invalid.
    pub fn new(surface: S, config: &AppConfig) -> Result<Self, CanvasError> {
        let highlight = config.highlight();
        let highlight_stroke = StrokeDefinition::solid(highlight.color()?, highlight.width())
            .with_cap(StrokeCap::Round);

        Ok(Self {
            surface,
            style: Box::new(ConfiguredStyle::from_config(config.style())?),
            transform: config.transform(),
            highlight_stroke,
            node_ids: IndexMap::new(),
            edge_ids: IndexMap::new(),
            objects: IndexMap::new(),
            edge_points: IndexMap::new(),
        })
    }

    /// Replaces the configured style with a custom policy.
    pub fn with_style_policy(mut self, policy: impl StylePolicy<N, E> + 'static) -> Self {
        self.style = Box::new(policy);
        self
    }

    /// Clears the surface and draws `set` on it.
    ///
    /// Nodes and edges are recorded in the id maps; nodes classified as
    /// `non_existing` are recorded but not drawn. Shapes are drawn untagged
    /// and are not recorded.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::UnknownShape`] for a node whose shape cannot be
    /// drawn, [`CanvasError::DuplicateId`] if two elements share an id and
    /// [`CanvasError::DuplicateObject`] if two elements refer to the same
    /// object. On error nothing on the canvas changes.
    pub fn render(&mut self, set: &ElementSet<N, E>) -> Result<(), CanvasError> {
        info!(elements = set.len(); "Rendering element set");
        let plan = self.plan(set)?;

        self.surface.clear();
        for (primitive, tags) in plan.items {
            self.surface.draw(primitive, tags);
        }
        self.node_ids = plan.node_ids;
        self.edge_ids = plan.edge_ids;
        self.objects = plan.objects;
        self.edge_points = plan.edge_points;

        info!(
            items = self.surface.len(),
            nodes = self.node_ids.len(),
            edges = self.edge_ids.len();
            "Render finished"
        );
        Ok(())
    }

    fn plan(&self, set: &ElementSet<N, E>) -> Result<RenderPlan<N, E>, CanvasError> {
        let mut plan = RenderPlan::new();
        for element in set {
            plan.claim(element.id())?;
            match element {
                LaidOutElement::Node(node) => {
                    plan.record_node(node.id(), node.object())?;
                    if node.is_drawn() {
                        self.project_node(node, &mut plan)?;
                    } else {
                        debug!(element = node.id().to_string(); "Skipping non-existing node");
                    }
                }
                LaidOutElement::Edge(edge) => {
                    plan.record_edge(edge.id(), edge.object())?;
                    self.project_edge(edge, &mut plan);
                }
                LaidOutElement::Shape(shape) => self.project_shape(shape, &mut plan),
            }
        }
        Ok(plan)
    }

    fn project_node(
        &self,
        node: &NodeElement<N>,
        plan: &mut RenderPlan<N, E>,
    ) -> Result<(), CanvasError> {
        let kind = ShapeKind::from_str(node.shape()).map_err(|reason| CanvasError::UnknownShape {
            element: node.id(),
            reason,
        })?;
        let center = self.transform.apply(node.position());
        let bounds = Bounds::new_from_center(center, self.transform.apply_size(node.size()));
        let style = self.style.node_style(node);
        debug!(
            element = node.id().to_string(),
            shape = kind.name(),
            double = style.double_border().is_some();
            "Projecting node"
        );

        let element = Tag::Element(node.id());
        for outline in kind.outlines(bounds, &style) {
            plan.push(outline, vec![element, Tag::NodeShape]);
        }
        let label = TextLabel::new(center, node.label(), style.text_color());
        plan.push(Primitive::Text(label), vec![element]);
        Ok(())
    }

    fn project_edge(&self, edge: &EdgeElement<E>, plan: &mut RenderPlan<N, E>) {
        let style = self.style.edge_style(edge);
        let points: Vec<Point> = edge
            .bspline()
            .iter()
            .map(|point| self.transform.apply(*point))
            .collect();
        debug!(element = edge.id().to_string(), points = points.len(); "Projecting edge");

        let element = Tag::Element(edge.id());
        let curve = Line::new(points.clone(), style.stroke().clone()).smoothed();
        plan.push(Primitive::Line(curve), vec![element]);
        plan.edge_points.insert(edge.id(), points);

        let (from, to) = edge.arrow_segment();
        let arrow = Line::new(
            vec![self.transform.apply(from), self.transform.apply(to)],
            style.stroke().clone(),
        )
        .with_arrow();
        plan.push(Primitive::Line(arrow), vec![element]);

        if let Some(position) = edge.label_position() {
            let label = TextLabel::new(
                self.transform.apply(position),
                sanitize_label(edge.label()),
                style.text_color(),
            );
            plan.push(Primitive::Text(label), vec![element]);
        }
    }

    fn project_shape(&self, shape: &ShapeElement, plan: &mut RenderPlan<N, E>) {
        let (a, b) = shape.corners();
        let bounds = Bounds::new_from_corners(self.transform.apply(a), self.transform.apply(b));
        plan.push(
            Primitive::Rectangle {
                bounds,
                stroke: StrokeDefinition::default(),
            },
            vec![],
        );
    }

    /// Shows or hides the highlight overlay of edge `id`.
    ///
    /// Any existing overlay is removed first. When `enabled`, the edge's
    /// cached curve is redrawn underneath everything else with the
    /// configured highlight stroke. Returns whether an overlay was drawn.
    pub fn highlight(&mut self, id: ElementId, enabled: bool) -> bool {
        let tag = Tag::Highlight(id);
        for item in self.surface.find_with_tag(&tag) {
            self.surface.delete(item);
        }
        if !enabled {
            return false;
        }

        let Some(points) = self.edge_points.get(&id) else {
            warn!(element = id.to_string(); "No rendered edge to highlight");
            return false;
        };
        let overlay = Line::new(points.clone(), self.highlight_stroke.clone()).smoothed();
        let item = self.surface.draw(Primitive::Line(overlay), vec![tag]);
        self.surface.lower(item);
        debug!(element = id.to_string(), item = item.value(); "Edge highlighted");
        true
    }

    /// The logical object behind a drawn item.
    ///
    /// Items without an element tag, such as shapes and highlight overlays,
    /// resolve to `None`.
    pub fn resolve(&self, item: ItemId) -> Option<GraphObject<N, E>> {
        let id = self.surface.tags(item)?.iter().find_map(Tag::element)?;
        self.objects.get(&id).cloned()
    }

    /// Topmost item at a surface position.
    pub fn item_at(&self, point: Point) -> Option<ItemId> {
        self.surface.item_at(point)
    }

    /// Resolves `click` and routes it in one step.
    ///
    /// Returns `None` if the clicked item belongs to no node or edge. Use
    /// [`Canvas::resolve`] and [`InteractionRouter::route`] separately when a
    /// command needs to borrow the canvas.
    pub fn dispatch_click<P, H>(
        &self,
        click: &Click,
        router: &InteractionRouter<P>,
        host: &mut H,
    ) -> Option<MenuOutcome>
    where
        P: ActionPolicy<Node = N, Edge = E>,
        H: MenuHost + ?Sized,
    {
        let target = self.resolve(click.item())?;
        Some(router.route(host, click, &target))
    }

    /// Element id drawn for a logical object.
    pub fn element_id(&self, object: &GraphObject<N, E>) -> Option<ElementId> {
        match object {
            GraphObject::Node(node) => self.node_id(node),
            GraphObject::Edge(edge) => self.edge_id(edge),
        }
    }

    pub fn node_id(&self, node: &N) -> Option<ElementId> {
        self.node_ids.get(node).copied()
    }

    pub fn edge_id(&self, edge: &E) -> Option<ElementId> {
        self.edge_ids.get(edge).copied()
    }

    /// Logical object recorded for an element id.
    pub fn object(&self, id: ElementId) -> Option<&GraphObject<N, E>> {
        self.objects.get(&id)
    }

    /// Transformed spline points of a rendered edge.
    pub fn edge_points(&self, id: ElementId) -> Option<&[Point]> {
        self.edge_points.get(&id).map(Vec::as_slice)
    }

    /// Number of nodes and edges recorded by the last render.
    pub fn recorded(&self) -> usize {
        self.objects.len()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Consumes the canvas, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use cyview_core::{
        draw::{EdgeStyle, NodeStyle},
        geometry::Size,
        surface::Scene,
    };
    use float_cmp::approx_eq;

    use super::*;
    use crate::element::ArrowTip;

    type TestCanvas = Canvas<Scene, String, u32>;

    fn canvas() -> TestCanvas {
        Canvas::new(Scene::new(), &AppConfig::default()).unwrap()
    }

    fn node(id: &str, object: &str, shape: &str, x: f32) -> NodeElement<String> {
        NodeElement::new(
            ElementId::new(id),
            shape,
            Point::new(x, 20.0),
            Size::new(40.0, 20.0),
            object.to_string(),
        )
        .with_label(object)
    }

    fn edge(id: &str, object: u32) -> EdgeElement<u32> {
        EdgeElement::new(
            ElementId::new(id),
            vec![
                Point::new(20.0, 30.0),
                Point::new(40.0, 60.0),
                Point::new(80.0, 60.0),
                Point::new(100.0, 35.0),
            ],
            ArrowTip::End(Point::new(100.0, 30.0)),
            object,
        )
        .unwrap()
    }

    fn sample() -> ElementSet<String, u32> {
        ElementSet::new()
            .with(node("n0", "s0", "ellipse", 20.0))
            .with(node("n1", "s1", "octagon", 100.0).with_classes("accepting"))
            .with(edge("e0", 7).with_label("a -[x]-", Point::new(60.0, 70.0)))
            .with(ShapeElement::new(
                ElementId::new("box"),
                Point::new(-10.0, -10.0),
                Point::new(130.0, 90.0),
            ))
    }

    #[test]
    fn test_default_config_builds_canvas() {
        let canvas: Result<TestCanvas, _> = Canvas::new(Scene::new(), &AppConfig::default());
        assert!(canvas.is_ok());
    }

    #[test]
    fn test_render_records_bijection() {
        let mut canvas = canvas();
        canvas.render(&sample()).unwrap();

        assert_eq!(canvas.recorded(), 3);
        assert_eq!(canvas.node_id(&"s0".to_string()), Some(ElementId::new("n0")));
        assert_eq!(canvas.node_id(&"s1".to_string()), Some(ElementId::new("n1")));
        assert_eq!(canvas.edge_id(&7), Some(ElementId::new("e0")));
        assert_eq!(
            canvas.object(ElementId::new("e0")),
            Some(&GraphObject::Edge(7))
        );
        assert_eq!(canvas.object(ElementId::new("box")), None);
    }

    #[test]
    fn test_render_item_counts() {
        let mut canvas = canvas();
        canvas.render(&sample()).unwrap();

        // n0: outline + text; n1: two outlines + text; e0: curve + arrow +
        // label; box: rectangle.
        assert_eq!(canvas.surface().len(), 9);
        assert_eq!(canvas.surface().find_with_tag(&Tag::NodeShape).len(), 3);
        assert_eq!(
            canvas
                .surface()
                .find_with_tag(&Tag::Element(ElementId::new("e0")))
                .len(),
            3
        );
    }

    #[test]
    fn test_edge_label_is_sanitized() {
        let mut canvas = canvas();
        canvas.render(&sample()).unwrap();

        let label = canvas.surface().items().iter().find_map(|item| match item.primitive() {
            Primitive::Text(text) if text.position() == Point::new(60.0, 70.0) => {
                Some(text.text().to_string())
            }
            _ => None,
        });
        assert_eq!(label.as_deref(), Some("a {x}"));
    }

    #[test]
    fn test_second_render_replaces_maps() {
        let mut canvas = canvas();
        canvas.render(&sample()).unwrap();

        let next = ElementSet::new().with(node("n9", "s9", "oval", 50.0));
        canvas.render(&next).unwrap();

        assert_eq!(canvas.recorded(), 1);
        assert_eq!(canvas.node_id(&"s0".to_string()), None);
        assert_eq!(canvas.edge_id(&7), None);
        assert_eq!(canvas.edge_points(ElementId::new("e0")), None);
        assert_eq!(canvas.surface().len(), 2);
    }

    #[test]
    fn test_non_existing_node_is_recorded_not_drawn() {
        let mut canvas = canvas();
        let set = ElementSet::new().with(node("n0", "s0", "ellipse", 0.0).with_classes("non_existing"));
        canvas.render(&set).unwrap();

        assert!(canvas.surface().is_empty());
        assert_eq!(canvas.node_id(&"s0".to_string()), Some(ElementId::new("n0")));
    }

    #[test]
    fn test_unknown_shape_keeps_previous_render() {
        let mut canvas = canvas();
        canvas.render(&sample()).unwrap();
        let before = canvas.surface().len();

        let bad = ElementSet::new()
            .with(node("n5", "s5", "ellipse", 0.0))
            .with(node("n6", "s6", "hexagon", 50.0));
        let err = canvas.render(&bad).unwrap_err();

        assert!(matches!(err, CanvasError::UnknownShape { element, .. } if element == "n6"));
        assert_eq!(canvas.surface().len(), before);
        assert_eq!(canvas.node_id(&"s0".to_string()), Some(ElementId::new("n0")));
        assert_eq!(canvas.node_id(&"s5".to_string()), None);
    }

    #[test]
    fn test_duplicates_are_rejected() {
        let mut canvas = canvas();

        let same_id = ElementSet::new()
            .with(node("n0", "s0", "ellipse", 0.0))
            .with(node("n0", "s1", "ellipse", 50.0));
        assert!(matches!(
            canvas.render(&same_id),
            Err(CanvasError::DuplicateId(id)) if id == "n0"
        ));

        let same_object = ElementSet::new()
            .with(node("n0", "s0", "ellipse", 0.0))
            .with(node("n1", "s0", "ellipse", 50.0));
        assert!(matches!(
            canvas.render(&same_object),
            Err(CanvasError::DuplicateObject { element, existing })
                if element == "n1" && existing == "n0"
        ));
        assert!(canvas.surface().is_empty());
    }

    #[test]
    fn test_highlight_toggle_restores_item_count() {
        let mut canvas = canvas();
        canvas.render(&sample()).unwrap();
        let count = canvas.surface().len();
        let id = ElementId::new("e0");

        assert!(canvas.highlight(id, true));
        assert_eq!(canvas.surface().len(), count + 1);
        let bottom = &canvas.surface().items()[0];
        assert_eq!(bottom.tags(), [Tag::Highlight(id)]);
        match bottom.primitive() {
            Primitive::Line(line) => {
                assert!(line.is_smooth());
                assert_eq!(line.stroke().width(), 6.0);
                assert_eq!(line.stroke().cap(), StrokeCap::Round);
            }
            other => panic!("expected line, got {other:?}"),
        }

        // Highlighting twice replaces the overlay.
        assert!(canvas.highlight(id, true));
        assert_eq!(canvas.surface().len(), count + 1);

        assert!(!canvas.highlight(id, false));
        assert_eq!(canvas.surface().len(), count);
    }

    #[test]
    fn test_highlight_unknown_edge_is_noop() {
        let mut canvas = canvas();
        canvas.render(&sample()).unwrap();
        let count = canvas.surface().len();

        assert!(!canvas.highlight(ElementId::new("n0"), true));
        assert!(!canvas.highlight(ElementId::new("missing"), true));
        assert_eq!(canvas.surface().len(), count);
    }

    #[test]
    fn test_render_drops_highlights() {
        let mut canvas = canvas();
        canvas.render(&sample()).unwrap();
        canvas.highlight(ElementId::new("e0"), true);

        canvas.render(&sample()).unwrap();
        assert!(
            canvas
                .surface()
                .find_with_tag(&Tag::Highlight(ElementId::new("e0")))
                .is_empty()
        );
    }

    #[test]
    fn test_resolve_items() {
        let mut canvas = canvas();
        canvas.render(&sample()).unwrap();
        let scene = canvas.surface();

        let node_text = scene.find_with_tag(&Tag::Element(ElementId::new("n0")))[1];
        let node = canvas.resolve(node_text).unwrap();
        assert_eq!(node.as_node().map(String::as_str), Some("s0"));
        assert_eq!(node.as_edge(), None);

        let curve = scene.find_with_tag(&Tag::Element(ElementId::new("e0")))[0];
        let edge = canvas.resolve(curve).unwrap();
        assert_eq!(edge.as_edge(), Some(&7));
        assert_eq!(edge.as_node(), None);

        let rectangle = scene
            .items()
            .iter()
            .find(|item| matches!(item.primitive(), Primitive::Rectangle { .. }))
            .map(|item| item.id())
            .unwrap();
        assert_eq!(canvas.resolve(rectangle), None);

        canvas.highlight(ElementId::new("e0"), true);
        let overlay = canvas.surface().items()[0].id();
        assert_eq!(canvas.resolve(overlay), None);
    }

    #[test]
    fn test_item_at_hits_node() {
        let mut canvas = canvas();
        canvas.render(&sample()).unwrap();

        let item = canvas.item_at(Point::new(100.0, 25.0)).unwrap();
        assert_eq!(canvas.resolve(item), Some(GraphObject::Node("s1".to_string())));
    }

    #[test]
    fn test_into_surface_keeps_drawing() {
        let mut canvas = canvas();
        canvas.render(&sample()).unwrap();
        let drawn = canvas.surface().len();

        let scene = canvas.into_surface();
        assert_eq!(scene.len(), drawn);
        assert_eq!(scene.find_with_tag(&Tag::NodeShape).len(), 3);
    }

    #[test]
    fn test_every_edge_gets_an_arrow() {
        let mut canvas = canvas();
        canvas.render(&sample()).unwrap();

        let arrows = canvas
            .surface()
            .find_with_tag(&Tag::Element(ElementId::new("e0")))
            .into_iter()
            .filter_map(|item| match canvas.surface().item(item)?.primitive() {
                Primitive::Line(line) if line.has_arrow() => Some(line.points().len()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(arrows, vec![2]);
    }

    #[test]
    fn test_transform_is_applied() {
        let config = AppConfig::from_toml_str(
            "[transform]\nscale = 2.0\noffset_x = 5.0\noffset_y = -5.0",
        )
        .unwrap();
        let mut canvas: TestCanvas = Canvas::new(Scene::new(), &config).unwrap();
        canvas.render(&sample()).unwrap();

        let points = canvas.edge_points(ElementId::new("e0")).unwrap();
        assert_eq!(points[0], Point::new(45.0, 55.0));

        let outline = canvas.surface().items()[0].primitive().bounding_box();
        assert!(approx_eq!(f32, outline.width(), 80.0));
        assert!(approx_eq!(f32, outline.center().x(), 45.0));
    }

    #[test]
    fn test_arrow_segment_direction() {
        let mut canvas = canvas();
        let reversed = EdgeElement::new(
            ElementId::new("e1"),
            vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0)],
            ArrowTip::Start(Point::new(-5.0, 0.0)),
            1,
        )
        .unwrap();
        canvas.render(&ElementSet::new().with(reversed)).unwrap();

        match canvas.surface().items()[1].primitive() {
            Primitive::Line(line) => {
                assert!(line.has_arrow());
                assert_eq!(line.points(), [Point::new(-5.0, 0.0), Point::new(0.0, 0.0)]);
            }
            other => panic!("expected arrow line, got {other:?}"),
        }
    }

    struct Flat;

    impl StylePolicy<String, u32> for Flat {
        fn node_style(&self, _node: &NodeElement<String>) -> NodeStyle {
            NodeStyle::default().with_double_border(Some(2.0))
        }

        fn edge_style(&self, _edge: &EdgeElement<u32>) -> EdgeStyle {
            EdgeStyle::default()
        }
    }

    #[test]
    fn test_custom_style_policy() {
        let mut canvas = canvas().with_style_policy(Flat);
        canvas
            .render(&ElementSet::new().with(node("n0", "s0", "ellipse", 20.0)))
            .unwrap();

        let outlines: Vec<_> = canvas
            .surface()
            .items()
            .iter()
            .filter(|item| item.tags().contains(&Tag::NodeShape))
            .map(|item| item.primitive().bounding_box())
            .collect();
        assert_eq!(outlines.len(), 2);
        assert!(approx_eq!(f32, outlines[0].width() - outlines[1].width(), 4.0));
    }
}
