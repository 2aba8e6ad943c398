//! Loading element sets from the layout engine's JSON output.
//!
//! The input is a JSON array of Cytoscape-style elements. Geometry lives in
//! `data` (`width`, `height`, `bspline`, `arrowend`, `arrowstart`, `lp`,
//! `coords`), node centers in `position`, and the logical back-reference in
//! `data.obj`. Every field a group needs is checked here, so a set that
//! loads is a set the projector can draw without guessing.

use std::io::Read;

use log::debug;
use serde::{Deserialize, de::DeserializeOwned};

use cyview_core::{
    geometry::{Point, Size},
    identifier::ElementId,
};

use super::{ArrowTip, EdgeElement, ElementSet, LaidOutElement, NodeElement, ShapeElement};
use crate::error::CanvasError;

#[derive(Debug, Deserialize)]
struct RawElement<O> {
    group: String,
    data: RawData<O>,
    #[serde(default)]
    position: Option<Point>,
    #[serde(default)]
    classes: String,
}

#[derive(Debug, Deserialize)]
struct RawData<O> {
    id: String,
    obj: Option<O>,
    #[serde(default)]
    label: String,
    #[serde(default)]
    shape: Option<String>,
    #[serde(default)]
    width: Option<f32>,
    #[serde(default)]
    height: Option<f32>,
    #[serde(default)]
    bspline: Option<Vec<Point>>,
    #[serde(default)]
    arrowend: Option<Point>,
    #[serde(default)]
    arrowstart: Option<Point>,
    #[serde(default)]
    lp: Option<Point>,
    #[serde(default)]
    coords: Option<Vec<Point>>,
}

impl<O> RawElement<O> {
    fn into_element(self) -> Result<LaidOutElement<O, O>, CanvasError> {
        let RawElement {
            group,
            data,
            position,
            classes,
        } = self;
        let name = data.id.clone();
        let id = ElementId::new(&data.id);

        match group.as_str() {
            "nodes" => {
                let object = data.obj.ok_or_else(|| CanvasError::missing(&name, "obj"))?;
                let position = position.ok_or_else(|| CanvasError::missing(&name, "position"))?;
                let width = data.width.ok_or_else(|| CanvasError::missing(&name, "width"))?;
                let height = data
                    .height
                    .ok_or_else(|| CanvasError::missing(&name, "height"))?;
                let shape = data.shape.ok_or_else(|| CanvasError::missing(&name, "shape"))?;

                let node = NodeElement::new(id, shape, position, Size::new(width, height), object)
                    .with_label(data.label)
                    .with_classes(classes);
                Ok(LaidOutElement::Node(node))
            }
            "edges" => {
                let object = data.obj.ok_or_else(|| CanvasError::missing(&name, "obj"))?;
                let bspline = data
                    .bspline
                    .ok_or_else(|| CanvasError::missing(&name, "bspline"))?;
                let arrow = match (data.arrowend, data.arrowstart) {
                    (Some(end), _) => ArrowTip::End(end),
                    (None, Some(start)) => ArrowTip::Start(start),
                    (None, None) => return Err(CanvasError::missing(&name, "arrowend")),
                };

                let mut edge = EdgeElement::new(id, bspline, arrow, object)?;
                edge.label = data.label;
                edge.label_position = data.lp;
                Ok(LaidOutElement::Edge(edge))
            }
            "shapes" => {
                let coords = data
                    .coords
                    .ok_or_else(|| CanvasError::missing(&name, "coords"))?;
                match coords.as_slice() {
                    [a, b] => Ok(LaidOutElement::Shape(ShapeElement::new(id, *a, *b))),
                    other => Err(CanvasError::malformed(
                        &name,
                        format!("coords needs exactly 2 points, got {}", other.len()),
                    )),
                }
            }
            _ => Err(CanvasError::UnknownGroup(group)),
        }
    }
}

impl<O: DeserializeOwned> ElementSet<O, O> {
    /// Parses a JSON array of laid-out elements.
    ///
    /// Node and edge back-references (`data.obj`) are deserialized as `O`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Json`] for invalid JSON, and
    /// [`CanvasError::MissingField`], [`CanvasError::MalformedGeometry`] or
    /// [`CanvasError::UnknownGroup`] for elements that cannot be drawn.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyview::element::ElementSet;
    ///
    /// let json = r#"[
    ///   {"group": "nodes", "data": {"id": "n0", "obj": "s0", "label": "s0",
    ///    "shape": "ellipse", "width": 54, "height": 36},
    ///    "position": {"x": 27, "y": 18}}
    /// ]"#;
    /// let set = ElementSet::<String, String>::from_json(json).unwrap();
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CanvasError> {
        let raw: Vec<RawElement<O>> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Like [`ElementSet::from_json`], reading from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, CanvasError> {
        let raw: Vec<RawElement<O>> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: Vec<RawElement<O>>) -> Result<Self, CanvasError> {
        let set = raw
            .into_iter()
            .map(RawElement::into_element)
            .collect::<Result<Self, _>>()?;
        debug!(elements = set.len(); "Loaded laid-out elements");
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Set = ElementSet<String, String>;

    #[test]
    fn test_loads_all_groups() {
        let json = r#"[
            {"group": "nodes", "classes": "initial",
             "data": {"id": "n0", "obj": "s0", "label": "s0", "shape": "octagon",
                      "width": 54, "height": 36},
             "position": {"x": 27, "y": 18}},
            {"group": "edges",
             "data": {"id": "e0", "obj": "t0", "label": "go",
                      "bspline": [{"x": 0, "y": 0}, {"x": 5, "y": 5}, {"x": 10, "y": 5}, {"x": 15, "y": 0}],
                      "arrowend": {"x": 19, "y": 0}, "lp": {"x": 7, "y": 9}}},
            {"group": "shapes",
             "data": {"id": "b0", "coords": [{"x": 0, "y": 0}, {"x": 90, "y": 40}]}}
        ]"#;

        let set = Set::from_json(json).unwrap();
        let elements: Vec<_> = set.iter().collect();
        assert_eq!(elements.len(), 3);

        match elements[0] {
            LaidOutElement::Node(node) => {
                assert_eq!(node.shape(), "octagon");
                assert_eq!(node.object(), "s0");
                assert!(node.has_class("initial"));
                assert_eq!(node.size(), Size::new(54.0, 36.0));
            }
            other => panic!("expected node, got {other:?}"),
        }
        match elements[1] {
            LaidOutElement::Edge(edge) => {
                assert_eq!(edge.bspline().len(), 4);
                assert_eq!(edge.arrow(), ArrowTip::End(Point::new(19.0, 0.0)));
                assert_eq!(edge.label_position(), Some(Point::new(7.0, 9.0)));
                assert_eq!(edge.label(), "go");
            }
            other => panic!("expected edge, got {other:?}"),
        }
        assert!(matches!(elements[2], LaidOutElement::Shape(_)));
    }

    #[test]
    fn test_arrowend_wins_over_arrowstart() {
        let json = r#"[{"group": "edges", "data": {"id": "e", "obj": "t",
            "bspline": [{"x": 0, "y": 0}, {"x": 1, "y": 1}],
            "arrowend": {"x": 2, "y": 2}, "arrowstart": {"x": -1, "y": -1}}}]"#;

        let set = Set::from_json(json).unwrap();
        match set.iter().next() {
            Some(LaidOutElement::Edge(edge)) => {
                assert_eq!(edge.arrow(), ArrowTip::End(Point::new(2.0, 2.0)));
                assert_eq!(edge.label_position(), None);
            }
            other => panic!("expected edge, got {other:?}"),
        }
    }

    #[test]
    fn test_edge_without_arrow_data_is_rejected() {
        let json = r#"[{"group": "edges", "data": {"id": "e", "obj": "t",
            "bspline": [{"x": 0, "y": 0}, {"x": 1, "y": 1}]}}]"#;

        let err = Set::from_json(json).unwrap_err();
        assert!(matches!(err, CanvasError::MissingField { field: "arrowend", .. }));
    }

    #[test]
    fn test_short_bspline_is_rejected() {
        let json = r#"[{"group": "edges", "data": {"id": "e", "obj": "t",
            "bspline": [{"x": 0, "y": 0}], "arrowend": {"x": 2, "y": 2}}}]"#;

        let err = Set::from_json(json).unwrap_err();
        assert!(matches!(err, CanvasError::MalformedGeometry { .. }));
    }

    #[test]
    fn test_node_without_position_is_rejected() {
        let json = r#"[{"group": "nodes", "data": {"id": "n", "obj": "s",
            "shape": "ellipse", "width": 1, "height": 1}}]"#;

        let err = Set::from_json(json).unwrap_err();
        assert!(matches!(err, CanvasError::MissingField { field: "position", .. }));
    }

    /// Back-reference type with no `Default` impl.
    #[derive(Debug, PartialEq, Deserialize)]
    struct State {
        name: String,
        accepting: bool,
    }

    #[test]
    fn test_structured_objects() {
        let json = r#"[
            {"group": "nodes",
             "data": {"id": "n0", "obj": {"name": "s0", "accepting": true},
                      "shape": "ellipse", "width": 10, "height": 10},
             "position": {"x": 5, "y": 5}},
            {"group": "nodes",
             "data": {"id": "n1", "shape": "ellipse", "width": 10, "height": 10},
             "position": {"x": 25, "y": 5}}
        ]"#;

        let err = ElementSet::<State, State>::from_json(json).unwrap_err();
        assert!(matches!(err, CanvasError::MissingField { field: "obj", ref element } if element == "n1"));

        let complete = json.replacen("\"n1\"", "\"n1\", \"obj\": {\"name\": \"s1\", \"accepting\": false}", 1);
        let set = ElementSet::<State, State>::from_json(&complete).unwrap();
        match set.iter().next() {
            Some(LaidOutElement::Node(node)) => assert_eq!(
                node.object(),
                &State {
                    name: "s0".to_string(),
                    accepting: true
                }
            ),
            other => panic!("expected node, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_group_is_rejected() {
        let json = r#"[{"group": "ports", "data": {"id": "p"}}]"#;

        let err = Set::from_json(json).unwrap_err();
        assert!(matches!(err, CanvasError::UnknownGroup(group) if group == "ports"));
    }

    #[test]
    fn test_invalid_json() {
        let err = Set::from_json("{not json").unwrap_err();
        assert!(matches!(err, CanvasError::Json(_)));
    }

    #[test]
    fn test_from_reader() {
        let json = br#"[{"group": "shapes", "data": {"id": "b",
            "coords": [{"x": 0, "y": 0}, {"x": 1, "y": 1}]}}]"#;

        let set = Set::from_reader(&json[..]).unwrap();
        assert_eq!(set.len(), 1);
    }
}
