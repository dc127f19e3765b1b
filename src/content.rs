//! Literal page copy. Nothing here changes at runtime.

use chrono::Datelike;

use crate::components::icon::IconKind;

pub const BRAND: &str = "GeoBridge";

/// In-page scroll targets. Each section takes its `id` from here, so every
/// anchor exists exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionAnchor {
    Features,
    Flow,
    Preview,
}

impl SectionAnchor {
    #[cfg(test)]
    pub const ALL: [SectionAnchor; 3] = [
        SectionAnchor::Features,
        SectionAnchor::Flow,
        SectionAnchor::Preview,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionAnchor::Features => "features",
            SectionAnchor::Flow => "flow",
            SectionAnchor::Preview => "preview",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionAnchor,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Features", target: SectionAnchor::Features },
    NavLink { label: "Workflow", target: SectionAnchor::Flow },
    NavLink { label: "Preview", target: SectionAnchor::Preview },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureEntry {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [FeatureEntry; 4] = [
    FeatureEntry {
        icon: IconKind::Earth,
        title: "Geomorphics",
        description: "High-resolution contours, shaded relief, and hazard zoning layered over terrain.",
    },
    FeatureEntry {
        icon: IconKind::Wind,
        title: "Environmental",
        description: "Wind, seismic spectra, precipitation and freeze-thaw conditions at-a-glance.",
    },
    FeatureEntry {
        icon: IconKind::LineChart,
        title: "Analysis",
        description: "Stress/strain, modal shapes, and cost curves rendered in clean, readable charts.",
    },
    FeatureEntry {
        icon: IconKind::ShieldCheck,
        title: "Safety",
        description: "Real-time checks for slope stability and bearing capacity at support locations.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkflowStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
}

pub const WORKFLOW_STEPS: [WorkflowStep; 4] = [
    WorkflowStep {
        title: "Input",
        description: "Upload terrain or select a location. Provide soil, seismic, wind data.",
        icon: IconKind::Layers3,
    },
    WorkflowStep {
        title: "Analysis",
        description: "Define bridge endpoints. Visualize hazards and unstable slopes.",
        icon: IconKind::Mountain,
    },
    WorkflowStep {
        title: "Design",
        description: "Choose suspension, arch, or girder. Generate a preliminary layout.",
        icon: IconKind::LineChart,
    },
    WorkflowStep {
        title: "Report",
        description: "Review stress and cost summaries with suggested improvements.",
        icon: IconKind::ShieldCheck,
    },
];

/// Two-digit, one-based position label for the step at `index`.
pub fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub const PREVIEW_BULLETS: [&str; 3] = [
    "Topographic lines glow with subtle parallax on scroll",
    "Semi-transparent panels reduce clutter and improve focus",
    "Typography uses Inter for clear, technical readability",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryTile {
    pub label: &'static str,
    pub value: &'static str,
}

pub const SUMMARY_TILES: [SummaryTile; 3] = [
    SummaryTile { label: "Input Data", value: "Soil • Seismic • Wind" },
    SummaryTile { label: "Analysis", value: "Stress • Stability" },
    SummaryTile { label: "Cost", value: "Materials • Lifecycle" },
];

pub const FOOTER_LINKS: [&str; 3] = ["Privacy", "Terms", "Support"];

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. Built for civil engineers.", year, BRAND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn features_in_declaration_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles, ["Geomorphics", "Environmental", "Analysis", "Safety"]);
    }

    #[test]
    fn workflow_steps_numbered_and_ordered() {
        let rendered: Vec<_> = WORKFLOW_STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| (ordinal(i), step.title))
            .collect();
        assert_eq!(
            rendered,
            [
                ("01".to_string(), "Input"),
                ("02".to_string(), "Analysis"),
                ("03".to_string(), "Design"),
                ("04".to_string(), "Report"),
            ]
        );
    }

    #[test]
    fn ordinal_pads_single_digits_only() {
        assert_eq!(ordinal(0), "01");
        assert_eq!(ordinal(8), "09");
        assert_eq!(ordinal(9), "10");
    }

    #[test]
    fn anchors_are_unique() {
        let ids: HashSet<_> = SectionAnchor::ALL.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), SectionAnchor::ALL.len());
        assert_eq!(SectionAnchor::Flow.href(), "#flow");
    }

    #[test]
    fn nav_covers_every_anchor_once() {
        let targets: Vec<_> = NAV_LINKS.iter().map(|l| l.target).collect();
        assert_eq!(targets, SectionAnchor::ALL);
    }

    #[test]
    fn summary_tiles_labels() {
        let labels: Vec<_> = SUMMARY_TILES.iter().map(|t| t.label).collect();
        assert_eq!(labels, ["Input Data", "Analysis", "Cost"]);
    }

    #[test]
    fn copyright_uses_current_year() {
        let year = current_year();
        assert_eq!(year, chrono::Local::now().year());
        assert!(copyright_line(year).starts_with(&format!("© {} GeoBridge", year)));
    }
}
