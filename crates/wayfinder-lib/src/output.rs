use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::routing::RoutePlan;
use crate::store::GraphStore;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
    Compact,
}

/// Waypoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteWaypoint {
    pub index: usize,
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi_id: Option<String>,
}

impl RouteWaypoint {
    fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Structured representation of a planned route that the rendering layer can
/// serialise and animate.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub hops: usize,
    pub distance: f64,
    pub snapped: bool,
    pub origin: RouteWaypoint,
    pub destination: RouteWaypoint,
    pub waypoints: Vec<RouteWaypoint>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with POI labels on its endpoints.
    ///
    /// Intermediate waypoints come from the connector mesh and stay unlabelled.
    pub fn from_plan(store: &GraphStore, plan: &RoutePlan) -> Result<Self> {
        let last = plan.nodes.len().checked_sub(1).ok_or(Error::EmptyRoutePlan)?;

        let waypoints = plan
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let poi = if index == 0 || index == last {
                    store.poi_for_node(&node.id)
                } else {
                    None
                };
                RouteWaypoint {
                    index,
                    id: node.id.clone(),
                    x: node.x,
                    y: node.y,
                    z: node.z,
                    label: poi.map(|poi| poi.label.clone()),
                    poi_id: poi.map(|poi| poi.id.clone()),
                }
            })
            .collect::<Vec<_>>();

        Ok(Self {
            hops: plan.hop_count(),
            distance: plan.distance,
            snapped: plan.snapped,
            origin: waypoints[0].clone(),
            destination: waypoints[last].clone(),
            waypoints,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn via(&self) -> &'static str {
        if self.snapped {
            "connector mesh"
        } else {
            "direct line"
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {:.1} units, via {})",
            self.origin.display_name(),
            self.destination.display_name(),
            self.hops,
            self.distance,
            self.via()
        );
        for waypoint in &self.waypoints {
            let _ = writeln!(
                buffer,
                "{:>3}: {} ({:.1}, {:.1})",
                waypoint.index,
                waypoint.display_name(),
                waypoint.x,
                waypoint.y
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops, {:.1} units, via {})",
            self.origin.display_name(),
            self.destination.display_name(),
            self.hops,
            self.distance,
            self.via()
        );
        for waypoint in &self.waypoints {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{:.1}, {:.1}`)",
                waypoint.index,
                waypoint.display_name(),
                waypoint.x,
                waypoint.y
            );
        }
        buffer
    }

    fn render_compact(&self) -> String {
        let joined = self
            .waypoints
            .iter()
            .map(|waypoint| waypoint.id.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("{joined}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{GraphDocument, Node, Poi};

    fn store() -> GraphStore {
        let document = GraphDocument {
            nodes: vec![Node::new("n1", 0.0, 0.0), Node::new("n2", 10.0, 0.0)],
            edges: Vec::new(),
            pois: vec![Poi {
                id: "lib".into(),
                label: "Library".into(),
                node_id: "n1".into(),
                kind: "building".into(),
                category: None,
                photo_url: None,
            }],
        };
        GraphStore::from_documents(&document, None)
    }

    fn plan() -> RoutePlan {
        RoutePlan {
            origin: "n1".into(),
            destination: "n2".into(),
            nodes: vec![Node::new("n1", 0.0, 0.0), Node::new("n2", 10.0, 0.0)],
            distance: 10.0,
            snapped: false,
        }
    }

    #[test]
    fn endpoints_pick_up_poi_labels() {
        let summary = RouteSummary::from_plan(&store(), &plan()).expect("summary");
        assert_eq!(summary.origin.label.as_deref(), Some("Library"));
        assert_eq!(summary.origin.poi_id.as_deref(), Some("lib"));
        assert_eq!(summary.destination.label, None);
        assert_eq!(summary.hops, 1);
    }

    #[test]
    fn empty_plan_is_rejected() {
        let mut empty = plan();
        empty.nodes.clear();
        assert!(matches!(
            RouteSummary::from_plan(&store(), &empty),
            Err(Error::EmptyRoutePlan)
        ));
    }

    #[test]
    fn renders_each_mode() {
        let summary = RouteSummary::from_plan(&store(), &plan()).expect("summary");

        let plain = summary.render(RouteRenderMode::PlainText);
        assert!(plain.starts_with("Route: Library -> n2 (1 hops, 10.0 units, via direct line)"));
        assert!(plain.contains("  1: n2 (10.0, 0.0)"));

        let rich = summary.render(RouteRenderMode::RichText);
        assert!(rich.contains("**Library**"));

        assert_eq!(summary.render(RouteRenderMode::Compact), "n1 -> n2\n");
    }

    #[test]
    fn serialises_camel_case() {
        let summary = RouteSummary::from_plan(&store(), &plan()).expect("summary");
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["origin"]["poiId"], "lib");
        assert_eq!(value["waypoints"].as_array().map(Vec::len), Some(2));
        assert!(value["destination"].get("label").is_none());
    }
}
