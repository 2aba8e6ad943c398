//! Laid-out graph elements.
//!
//! The layout engine produces a flat, ordered list of elements: nodes with a
//! position and size, edges with spline control points and arrow geometry,
//! and decorative shapes. Nodes and edges carry a back-reference to the
//! logical object they were laid out from (`N` and `E`); that reference is
//! what the action policy receives when the element is clicked.
//!
//! Elements are usually loaded from the layout engine's JSON output with
//! [`ElementSet::from_json`], but can also be built directly.

mod json;

use std::fmt;

use cyview_core::{
    geometry::{Point, Size},
    identifier::ElementId,
};

use crate::error::CanvasError;

/// Classification that suppresses drawing of a node.
pub const NON_EXISTING_CLASS: &str = "non_existing";

/// Group tag of a laid-out element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementGroup {
    Nodes,
    Edges,
    Shapes,
}

impl ElementGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nodes => "nodes",
            Self::Edges => "edges",
            Self::Shapes => "shapes",
        }
    }
}

impl fmt::Display for ElementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A laid-out node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeElement<N> {
    id: ElementId,
    classes: String,
    shape: String,
    position: Point,
    size: Size,
    label: String,
    object: N,
}

impl<N> NodeElement<N> {
    /// Creates a node centered on `position`.
    ///
    /// `shape` is the layout engine's shape name; it is resolved when the
    /// node is rendered.
    pub fn new(
        id: ElementId,
        shape: impl Into<String>,
        position: Point,
        size: Size,
        object: N,
    ) -> Self {
        Self {
            id,
            classes: String::new(),
            shape: shape.into(),
            position,
            size,
            label: String::new(),
            object,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = classes.into();
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Classification string as given by the layout engine.
    pub fn classes(&self) -> &str {
        &self.classes
    }

    /// Returns true if `class` is one of the whitespace-separated classes.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.split_whitespace().any(|c| c == class)
    }

    /// Nodes classified as [`NON_EXISTING_CLASS`] are kept in the id map but
    /// never drawn.
    pub fn is_drawn(&self) -> bool {
        self.classes != NON_EXISTING_CLASS
    }

    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// Center of the node in layout coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn object(&self) -> &N {
        &self.object
    }
}

/// Where the layout engine put an edge's arrowhead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrowTip {
    /// Arrow at the head of the spline, ending at this point.
    End(Point),
    /// Arrow at the tail of the spline, starting at this point.
    Start(Point),
}

/// A laid-out edge. Its spline always has at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeElement<E> {
    id: ElementId,
    bspline: Vec<Point>,
    arrow: ArrowTip,
    label_position: Option<Point>,
    label: String,
    object: E,
}

impl<E> EdgeElement<E> {
    /// Creates an edge from its spline control points.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::MalformedGeometry`] if `bspline` has fewer than
    /// two points.
    pub fn new(
        id: ElementId,
        bspline: Vec<Point>,
        arrow: ArrowTip,
        object: E,
    ) -> Result<Self, CanvasError> {
        if bspline.len() < 2 {
            return Err(CanvasError::malformed(
                id.to_string(),
                format!("bspline needs at least 2 points, got {}", bspline.len()),
            ));
        }
        Ok(Self {
            id,
            bspline,
            arrow,
            label_position: None,
            label: String::new(),
            object,
        })
    }

    /// Adds a label drawn at `position`.
    pub fn with_label(mut self, label: impl Into<String>, position: Point) -> Self {
        self.label = label.into();
        self.label_position = Some(position);
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn bspline(&self) -> &[Point] {
        &self.bspline
    }

    pub fn arrow(&self) -> ArrowTip {
        self.arrow
    }

    pub fn label_position(&self) -> Option<Point> {
        self.label_position
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn object(&self) -> &E {
        &self.object
    }

    /// The arrow segment, from its control point to its tip, in layout
    /// coordinates.
    ///
    /// With [`ArrowTip::End`] the segment runs from the last spline point to
    /// the arrow end; with [`ArrowTip::Start`] it runs from the arrow start to
    /// the first spline point.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyview::element::{ArrowTip, EdgeElement};
    /// use cyview_core::{geometry::Point, identifier::ElementId};
    ///
    /// let spline = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    /// let tip = ArrowTip::End(Point::new(14.0, 0.0));
    /// let edge = EdgeElement::new(ElementId::new("e"), spline, tip, ()).unwrap();
    /// assert_eq!(
    ///     edge.arrow_segment(),
    ///     (Point::new(10.0, 0.0), Point::new(14.0, 0.0))
    /// );
    /// ```
    pub fn arrow_segment(&self) -> (Point, Point) {
        match self.arrow {
            ArrowTip::End(end) => (self.bspline[self.bspline.len() - 1], end),
            ArrowTip::Start(start) => (start, self.bspline[0]),
        }
    }
}

/// A decorative rectangle, e.g. a cluster border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeElement {
    id: ElementId,
    corners: (Point, Point),
}

impl ShapeElement {
    pub fn new(id: ElementId, a: Point, b: Point) -> Self {
        Self { id, corners: (a, b) }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn corners(&self) -> (Point, Point) {
        self.corners
    }
}

/// One entry of the layout engine's output.
#[derive(Debug, Clone, PartialEq)]
pub enum LaidOutElement<N, E> {
    Node(NodeElement<N>),
    Edge(EdgeElement<E>),
    Shape(ShapeElement),
}

impl<N, E> LaidOutElement<N, E> {
    pub fn id(&self) -> ElementId {
        match self {
            Self::Node(node) => node.id(),
            Self::Edge(edge) => edge.id(),
            Self::Shape(shape) => shape.id(),
        }
    }

    pub fn group(&self) -> ElementGroup {
        match self {
            Self::Node(_) => ElementGroup::Nodes,
            Self::Edge(_) => ElementGroup::Edges,
            Self::Shape(_) => ElementGroup::Shapes,
        }
    }
}

impl<N, E> From<NodeElement<N>> for LaidOutElement<N, E> {
    fn from(node: NodeElement<N>) -> Self {
        Self::Node(node)
    }
}

impl<N, E> From<EdgeElement<E>> for LaidOutElement<N, E> {
    fn from(edge: EdgeElement<E>) -> Self {
        Self::Edge(edge)
    }
}

impl<N, E> From<ShapeElement> for LaidOutElement<N, E> {
    fn from(shape: ShapeElement) -> Self {
        Self::Shape(shape)
    }
}

/// Ordered output of one layout run.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSet<N, E> {
    elements: Vec<LaidOutElement<N, E>>,
}

impl<N, E> Default for ElementSet<N, E> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<N, E> ElementSet<N, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: impl Into<LaidOutElement<N, E>>) {
        self.elements.push(element.into());
    }

    pub fn with(mut self, element: impl Into<LaidOutElement<N, E>>) -> Self {
        self.push(element);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaidOutElement<N, E>> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<N, E> FromIterator<LaidOutElement<N, E>> for ElementSet<N, E> {
    fn from_iter<I: IntoIterator<Item = LaidOutElement<N, E>>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a, N, E> IntoIterator for &'a ElementSet<N, E> {
    type Item = &'a LaidOutElement<N, E>;
    type IntoIter = std::slice::Iter<'a, LaidOutElement<N, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
