use log::debug;
use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::{format_price, BillingPeriod, Plan, PLANS};

fn plan_card(plan: &Plan, period: BillingPeriod) -> Html {
    html! {
        <div class={classes!("card", "plan-card", plan.featured.then(|| "featured"))}>
            <div class="card-header">
                <h3 class="plan-name">{ plan.name }</h3>
                <p class="plan-price">
                    { format!("{}{}", format_price(plan.price_cents(period)), period.price_suffix()) }
                </p>
            </div>
            <div class="card-content">
                <ul class="plan-features">
                    { for plan.features.iter().map(|feature| html! {
                        <li>
                            <Icon kind={IconKind::Star} class="plan-star" />
                            { *feature }
                        </li>
                    }) }
                </ul>
            </div>
            <div class="card-footer">
                <button class="btn btn-dark btn-block">{"Choose Plan"}</button>
            </div>
        </div>
    }
}

#[function_component(PricingTabs)]
pub fn pricing_tabs() -> Html {
    let active = use_state(BillingPeriod::default);

    html! {
        <div class="tabs">
            <div class="tabs-list" role="tablist">
                { for BillingPeriod::ALL.iter().map(|&period| {
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| {
                            debug!("Pricing tab switched to {:?}", period);
                            active.set(period);
                        })
                    };
                    let selected = *active == period;
                    html! {
                        <button
                            class={classes!("tabs-trigger", selected.then(|| "active"))}
                            role="tab"
                            aria-selected={selected.to_string()}
                            {onclick}
                        >
                            { period.tab_label() }
                        </button>
                    }
                }) }
            </div>
            <div class="tabs-content" role="tabpanel">
                <div class="grid grid-3">
                    { for PLANS.iter().map(|plan| plan_card(plan, *active)) }
                </div>
            </div>
            <style>
                {r#"
                    .tabs-list {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        width: 100%;
                        margin-bottom: 2rem;
                        padding: 0.25rem;
                        background: #e2e8f0;
                        border-radius: 8px;
                    }

                    .tabs-trigger {
                        padding: 0.5rem 1rem;
                        border: none;
                        background: transparent;
                        color: #475569;
                        font: inherit;
                        font-weight: 500;
                        border-radius: 6px;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }

                    .tabs-trigger.active {
                        background: #ffffff;
                        color: #0f172a;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    }

                    .plan-card.featured {
                        border: 2px solid #3b82f6;
                    }

                    .plan-name {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0;
                    }

                    .plan-price {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #64748b;
                        margin: 0.5rem 0 0;
                    }

                    .plan-features {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }

                    .plan-features li {
                        display: flex;
                        align-items: center;
                        margin-bottom: 0.5rem;
                    }

                    .plan-star {
                        width: 20px;
                        height: 20px;
                        color: #eab308;
                        margin-right: 0.5rem;
                        flex-shrink: 0;
                    }
                "#}
            </style>
        </div>
    }
}
