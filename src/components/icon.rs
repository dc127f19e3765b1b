use yew::prelude::*;

/// Stroke icons used across the page. Each kind resolves to its drawing
/// through [`IconKind::shapes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Layers3,
    Mountain,
    LineChart,
    ShieldCheck,
    ChevronDown,
    Wind,
    Earth,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
}

const LAYERS_3: &[Shape] = &[
    Shape::Path("m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z"),
    Shape::Path("m6.08 9.5-3.5 1.6a1 1 0 0 0 0 1.81l8.6 3.91a2 2 0 0 0 1.65 0l8.58-3.9a1 1 0 0 0 0-1.83l-3.5-1.59"),
    Shape::Path("m6.08 14.5-3.5 1.6a1 1 0 0 0 0 1.81l8.6 3.91a2 2 0 0 0 1.65 0l8.58-3.9a1 1 0 0 0 0-1.83l-3.5-1.59"),
];

const MOUNTAIN: &[Shape] = &[Shape::Path("m8 3 4 8 5-5 5 15H2L8 3z")];

const LINE_CHART: &[Shape] = &[
    Shape::Path("M3 3v18h18"),
    Shape::Path("m19 9-5 5-4-4-3 3"),
];

const SHIELD_CHECK: &[Shape] = &[
    Shape::Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10"),
    Shape::Path("m9 12 2 2 4-4"),
];

const CHEVRON_DOWN: &[Shape] = &[Shape::Path("m6 9 6 6 6-6")];

const WIND: &[Shape] = &[
    Shape::Path("M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2"),
    Shape::Path("M9.6 4.6A2 2 0 1 1 11 8H2"),
    Shape::Path("M12.6 19.4A2 2 0 1 0 14 16H2"),
];

const EARTH: &[Shape] = &[
    Shape::Path("M21.54 15H17a2 2 0 0 0-2 2v4.54"),
    Shape::Path("M7 3.34V5a3 3 0 0 0 3 3a2 2 0 0 1 2 2c0 1.1.9 2 2 2a2 2 0 0 0 2-2c0-1.1.9-2 2-2h3.17"),
    Shape::Path("M11 21.95V18a2 2 0 0 0-2-2a2 2 0 0 1-2-2v-1a2 2 0 0 0-2-2H2.05"),
    Shape::Circle { cx: 12.0, cy: 12.0, r: 10.0 },
];

impl IconKind {
    #[cfg(test)]
    pub const ALL: [IconKind; 7] = [
        IconKind::Layers3,
        IconKind::Mountain,
        IconKind::LineChart,
        IconKind::ShieldCheck,
        IconKind::ChevronDown,
        IconKind::Wind,
        IconKind::Earth,
    ];

    pub fn shapes(self) -> &'static [Shape] {
        match self {
            IconKind::Layers3 => LAYERS_3,
            IconKind::Mountain => MOUNTAIN,
            IconKind::LineChart => LINE_CHART,
            IconKind::ShieldCheck => SHIELD_CHECK,
            IconKind::ChevronDown => CHEVRON_DOWN,
            IconKind::Wind => WIND,
            IconKind::Earth => EARTH,
        }
    }
}

fn render_shape(shape: &Shape) -> Html {
    match *shape {
        Shape::Path(d) => html! { <path d={d} /> },
        Shape::Circle { cx, cy, r } => html! {
            <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.kind.shapes().iter().map(render_shape) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_draws_something() {
        for kind in IconKind::ALL {
            assert!(!kind.shapes().is_empty(), "{:?} has no shapes", kind);
        }
    }

    #[test]
    fn paths_start_with_a_move_command() {
        for kind in IconKind::ALL {
            for shape in kind.shapes() {
                if let Shape::Path(d) = shape {
                    assert!(d.starts_with('M') || d.starts_with('m'), "{:?}: {}", kind, d);
                }
            }
        }
    }

    #[test]
    fn circles_fit_the_view_box() {
        for kind in IconKind::ALL {
            for shape in kind.shapes() {
                if let Shape::Circle { cx, cy, r } = *shape {
                    assert!(cx - r >= 0.0 && cx + r <= 24.0);
                    assert!(cy - r >= 0.0 && cy + r <= 24.0);
                }
            }
        }
    }
}
