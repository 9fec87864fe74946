//! Account page: subscription management and order history.
//!
//! Mounted behind `ProtectedRoute`; by the time this renders, the session
//! guard has observed an authenticated user.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;

use crate::net::types::{Order, Subscription, SubscriptionStatus};
use crate::state::auth::AuthContext;
use crate::util::format::{format_price, frequency_label};

fn status_label(status: SubscriptionStatus) -> &'static str {
    match status {
        SubscriptionStatus::Active => "Active",
        SubscriptionStatus::Paused => "Paused",
        SubscriptionStatus::Cancelled => "Cancelled",
    }
}

fn can_pause(status: SubscriptionStatus) -> bool {
    status == SubscriptionStatus::Active
}

fn can_resume(status: SubscriptionStatus) -> bool {
    status == SubscriptionStatus::Paused
}

fn can_cancel(status: SubscriptionStatus) -> bool {
    status != SubscriptionStatus::Cancelled
}

/// Account page — greet the user, manage subscriptions, list orders.
#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let subscriptions = LocalResource::new(|| crate::net::api::fetch_subscriptions());
    let orders = LocalResource::new(|| crate::net::api::fetch_orders());

    let greeting = move || {
        let state = auth.state().get();
        state
            .user
            .and_then(|user| user.first_name)
            .map_or_else(|| "Your plan".to_owned(), |name| format!("{name}'s plan"))
    };

    view! {
        <div class="account-page">
            <h1>{greeting}</h1>

            <section class="account-page__subscriptions">
                <h2>"Subscriptions"</h2>
                <Suspense fallback=move || view! { <p>"Loading subscriptions..."</p> }>
                    {move || {
                        subscriptions.get().map(|list| match list {
                            Some(list) if !list.is_empty() => view! {
                                <div class="account-page__cards">
                                    {list
                                        .into_iter()
                                        .map(|sub| view! {
                                            <SubscriptionCard sub=sub subscriptions=subscriptions/>
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any(),
                            _ => view! {
                                <p class="account-page__empty">
                                    "No subscriptions yet. "
                                    <a href="/products">"Start one from the shop."</a>
                                </p>
                            }
                            .into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <section class="account-page__orders">
                <h2>"Order history"</h2>
                <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                    {move || {
                        orders.get().map(|list| match list {
                            Some(list) if !list.is_empty() => view! {
                                <ul class="account-page__order-list">
                                    {list
                                        .into_iter()
                                        .map(|order| view! { <OrderRow order=order/> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                            .into_any(),
                            _ => view! { <p class="account-page__empty">"No orders yet."</p> }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

/// One subscription with its lifecycle controls.
#[component]
fn SubscriptionCard(
    sub: Subscription,
    subscriptions: LocalResource<Option<Vec<Subscription>>>,
) -> impl IntoView {
    let status = sub.status;
    let sub_id = sub.id.clone();

    let transition = move |target: SubscriptionStatus| {
        #[cfg(feature = "hydrate")]
        {
            let id = sub_id.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::set_subscription_status(&id, target).await.is_ok() {
                    subscriptions.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, &sub_id, &subscriptions);
        }
    };
    let on_pause = {
        let transition = transition.clone();
        move |_| transition(SubscriptionStatus::Paused)
    };
    let on_resume = {
        let transition = transition.clone();
        move |_| transition(SubscriptionStatus::Active)
    };
    let on_cancel = move |_| transition(SubscriptionStatus::Cancelled);

    view! {
        <div class="subscription-card">
            <div class="subscription-card__body">
                <h3>{sub.plan_name.clone()}</h3>
                <p class="subscription-card__cadence">
                    {format_price(sub.price)} " · " {frequency_label(sub.frequency_weeks)}
                </p>
                <p class="subscription-card__status">{status_label(status)}</p>
                {sub.next_delivery.clone().map(|date| view! {
                    <p class="subscription-card__next">"Next delivery: " {date}</p>
                })}
            </div>
            <div class="subscription-card__actions">
                <Show when=move || can_pause(status)>
                    <button class="btn" on:click=on_pause.clone()>"Pause"</button>
                </Show>
                <Show when=move || can_resume(status)>
                    <button class="btn" on:click=on_resume.clone()>"Resume"</button>
                </Show>
                <Show when=move || can_cancel(status)>
                    <button class="btn btn--quiet" on:click=on_cancel.clone()>"Cancel"</button>
                </Show>
            </div>
        </div>
    }
}

/// One order-history row.
#[component]
fn OrderRow(order: Order) -> impl IntoView {
    view! {
        <li class="order-row">
            <span class="order-row__id">{order.id.clone()}</span>
            <span class="order-row__date">{order.created_at.clone()}</span>
            <span class="order-row__status">{order.status.clone()}</span>
            <span class="order-row__total">{format_price(order.total)}</span>
        </li>
    }
}
