//! Awareness tab: quick facts, learning resources, and policy documents.

#[cfg(test)]
#[path = "awareness_test.rs"]
mod awareness_test;

use leptos::prelude::*;

use crate::data::awareness::{FACTS, POLICY_DOCUMENTS, RESOURCES, ResourceKind};

fn badge_class(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Article | ResourceKind::Tip => "resource-card__badge resource-card__badge--primary",
        ResourceKind::Video => "resource-card__badge resource-card__badge--secondary",
        ResourceKind::Warning => "resource-card__badge resource-card__badge--accent",
    }
}

#[component]
pub fn AwarenessPanel() -> impl IntoView {
    let facts = FACTS
        .iter()
        .map(|fact| {
            view! {
                <div class="card fact-card">
                    <p class="fact-card__stat">{fact.stat}</p>
                    <p class="fact-card__description">{fact.description}</p>
                </div>
            }
        })
        .collect_view();

    let resources = RESOURCES
        .iter()
        .map(|res| {
            view! {
                <div class="card resource-card">
                    <div class="resource-card__top">
                        <span class=badge_class(res.kind)>{res.kind.glyph()}</span>
                        <span class="resource-card__category">{res.category}</span>
                    </div>
                    <h4 class="card__title">{res.title}</h4>
                    <p class="card__description">{res.description}</p>
                    <button type="button" class="btn btn--outline btn--block">
                        "↗ Read More"
                    </button>
                </div>
            }
        })
        .collect_view();

    let documents = POLICY_DOCUMENTS
        .iter()
        .map(|doc| {
            view! {
                <div class="card policy-card">
                    <span class="policy-card__title">{doc.title}</span>
                    <a class="policy-card__link" href=doc.href target="_blank" rel="noopener noreferrer" title="Open">
                        "↗"
                    </a>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="panel panel--awareness">
            <div class="panel__header panel__header--center">
                <h2>"Awareness & Education"</h2>
                <p>"Learn about e-waste management, recycling benefits, and sustainability practices."</p>
            </div>

            <div class="fact-grid">{facts}</div>

            <h3 class="panel__section-title panel__section-title--center">"Resources & Articles"</h3>
            <div class="resource-grid">{resources}</div>

            <h3 class="panel__section-title panel__section-title--center">"Policies & Official Documents"</h3>
            <div class="policy-grid">{documents}</div>

            <div class="card card--cta">
                <div class="card__header">
                    <h3 class="card__title">"💡 Join the Movement"</h3>
                    <p class="card__description">
                        "Become an e-waste ambassador and help spread awareness in your community"
                    </p>
                </div>
                <button type="button" class="btn btn--primary">
                    "Become an Ambassador"
                </button>
            </div>
        </section>
    }
}
