use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::{ordinal, SectionAnchor, WorkflowStep, WORKFLOW_STEPS};

fn step_card(index: usize, step: &WorkflowStep) -> Html {
    html! {
        <div key={index} class="step-card glass-card">
            <div class="icon-tile">
                <Icon kind={step.icon} />
            </div>
            <div class="step-card__heading">
                <span class="step-card__ordinal">{ordinal(index)}</span>
                <h3>{step.title}</h3>
            </div>
            <p>{step.description}</p>
        </div>
    }
}

#[function_component(Workflow)]
pub fn workflow() -> Html {
    html! {
        <section id={SectionAnchor::Flow.id()} class="workflow anchored">
            <style>
                {r#"
                    .workflow {
                        background: linear-gradient(to bottom, #000, #020617);
                        padding: 5rem 0;
                    }
                    .workflow h2 {
                        margin: 0;
                        font-size: 1.875rem;
                        font-weight: 600;
                    }
                    .workflow__lead {
                        max-width: 42rem;
                    }
                    .workflow__grid {
                        margin-top: 2.5rem;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    .step-card {
                        padding: 1.5rem;
                    }
                    .step-card__heading {
                        margin-top: 1rem;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .step-card__ordinal {
                        color: rgba(110, 231, 183, 0.9);
                        font-size: 0.875rem;
                    }
                    .step-card h3 {
                        margin: 0;
                        font-weight: 500;
                    }
                    .step-card p {
                        margin: 0.5rem 0 0;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    @media (min-width: 768px) {
                        .workflow__grid { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <h2>{"Engineer-first workflow"}</h2>
                <p class="muted workflow__lead">
                    {"A clear flow from inputs to report keeps focus on decisions, not menus. Each step ties back to the 3D model for immediate context."}
                </p>
                <div class="workflow__grid">
                    { for WORKFLOW_STEPS.iter().enumerate().map(|(index, step)| step_card(index, step)) }
                </div>
            </div>
        </section>
    }
}
