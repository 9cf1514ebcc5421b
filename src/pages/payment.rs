use chrono::{DateTime, Local};
use dioxus::prelude::*;
use std::time::Duration;

use crate::constants::*;
use crate::core::bridge::copy_to_clipboard;
use crate::state::{format_rupiah, payment_deadline, Checkout, Navigator, PaymentMethod, Plan, ADMIN_FEE};

/// Mock checkout for a subscription plan.
#[component]
pub fn PaymentPage(plan: Plan) -> Element {
    let mut navigator = use_context::<Signal<Navigator>>();
    let mut checkout = use_signal(Checkout::default);
    let mut deadline = use_signal(|| None::<DateTime<Local>>);
    let mut copied = use_signal(|| false);

    // One tick per second while a payment is pending.
    use_future(move || async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let pending = {
                let current = checkout.peek();
                current.is_active() && !current.countdown.is_expired()
            };
            if pending {
                checkout.write().tick();
            }
        }
    });

    let state = checkout();
    let total = format_rupiah(plan.total());
    let price = format_rupiah(plan.price_value());
    let admin_fee = format_rupiah(ADMIN_FEE);
    let countdown = state.countdown.display();
    let due = deadline()
        .map(|due| due.format("%d %B %Y, %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = state.method;
    let expired = state.countdown.is_expired();

    rsx! {
        div {
            style: "max-width: 1024px; margin: 0 auto; padding: 32px; color: {TEXT_PRIMARY};",
            button {
                style: "background: transparent; border: none; color: {TEXT_MUTED}; font-size: 14px; cursor: pointer; padding: 0; margin-bottom: 16px;",
                onclick: move |_| {
                    navigator.write().back();
                },
                "← Back"
            }
            h1 { style: "margin: 0 0 24px 0; font-size: 28px; font-weight: 800;", "Payment Summary" }

            if state.is_active() {
                div {
                    style: "
                        margin-bottom: 24px; padding: 16px; border-radius: 8px; text-align: center;
                        background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT};
                    ",
                    p { style: "margin: 0 0 4px 0; font-size: 13px; color: {TEXT_MUTED};", "Complete payment before" }
                    p { style: "margin: 0 0 8px 0; font-size: 14px; color: {TEXT_SECONDARY};", "{due}" }
                    p { style: "margin: 0; font-size: 28px; font-weight: 700; letter-spacing: 2px; color: {ACCENT_PREMIUM};", "{countdown}" }
                    if expired {
                        p { style: "margin: 8px 0 0 0; font-size: 13px; color: {ACCENT_TOP_TEN};", "Payment window expired." }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: 2fr 1fr; gap: 24px;",
                div {
                    style: "display: flex; flex-direction: column; gap: 24px;",
                    div {
                        style: "padding: 24px; border-radius: 8px; background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE};",
                        h2 { style: "margin: 0 0 12px 0; font-size: 20px;", "{plan.name}" }
                        p { style: "margin: 0 0 12px 0; font-size: 16px; color: {ACCENT_PREMIUM};", "{plan.price} / month" }
                        for feature in plan.features.iter() {
                            p { key: "{feature}", style: "margin: 0 0 4px 0; font-size: 13px; color: {TEXT_SECONDARY};", "✓ {feature}" }
                        }
                    }
                    div {
                        style: "padding: 24px; border-radius: 8px; background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE};",
                        h3 { style: "margin: 0 0 12px 0; font-size: 16px;", "Payment Method" }
                        MethodOption {
                            label: "Credit / Debit Card",
                            selected: method == PaymentMethod::Card,
                            on_select: move |_| {
                                checkout.write().method = PaymentMethod::Card;
                            },
                        }
                        MethodOption {
                            label: "BCA Virtual Account",
                            selected: method == PaymentMethod::BcaVirtualAccount,
                            on_select: move |_| {
                                checkout.write().method = PaymentMethod::BcaVirtualAccount;
                            },
                        }
                    }
                    if let Some(account) = state.virtual_account.clone() {
                        div {
                            style: "padding: 24px; border-radius: 8px; background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE};",
                            h4 { style: "margin: 0 0 12px 0; font-size: 15px;", "Transfer" }
                            p { style: "margin: 0 0 6px 0; font-size: 12px; color: {TEXT_MUTED};", "BCA Virtual Account Number" }
                            div {
                                style: "display: flex; align-items: center; justify-content: space-between; gap: 12px;",
                                span { style: "font-size: 20px; font-weight: 700; letter-spacing: 1px;", "{account}" }
                                button {
                                    style: "
                                        padding: 6px 14px; border: 1px solid {BORDER_STRONG}; border-radius: 4px;
                                        background: transparent; color: {TEXT_PRIMARY}; font-size: 12px; cursor: pointer;
                                    ",
                                    onclick: move |_| {
                                        let account = account.clone();
                                        spawn(async move {
                                            match copy_to_clipboard(&account).await {
                                                Ok(()) => copied.set(true),
                                                Err(err) => tracing::warn!(error = %err, "copy to clipboard failed"),
                                            }
                                        });
                                    },
                                    if copied() { "Copied" } else { "Copy" }
                                }
                            }
                            p { style: "margin: 12px 0 0 0; font-size: 13px; color: {TEXT_SECONDARY};", "Amount due: {total}" }
                        }
                    }
                }

                div {
                    style: "padding: 24px; border-radius: 8px; background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE}; align-self: start;",
                    h3 { style: "margin: 0 0 16px 0; font-size: 16px;", "Transaction Summary" }
                    SummaryLine { label: "Plan price", value: price }
                    SummaryLine { label: "Admin fee", value: admin_fee }
                    div { style: "height: 1px; background-color: {BORDER_DEFAULT}; margin: 12px 0;" }
                    SummaryLine { label: "Total", value: total.clone() }
                    button {
                        class: "hover-lift",
                        style: "
                            width: 100%; margin-top: 20px; padding: 12px; border: none; border-radius: 6px;
                            background-color: {ACCENT_PRIMARY}; color: {TEXT_PRIMARY};
                            font-size: 14px; font-weight: 700; cursor: pointer;
                        ",
                        onclick: move |_| {
                            let mut rng = rand::rng();
                            checkout.write().start(&mut rng);
                            copied.set(false);
                            let window = checkout.peek().countdown;
                            deadline.set(Some(payment_deadline(Local::now(), &window)));
                            tracing::info!("payment started");
                        },
                        "Pay Now"
                    }
                }
            }
        }
    }
}

#[component]
fn MethodOption(label: &'static str, selected: bool, on_select: EventHandler<MouseEvent>) -> Element {
    let border = if selected { ACCENT_PRIMARY } else { BORDER_DEFAULT };
    let marker = if selected { "●" } else { "○" };
    rsx! {
        button {
            style: "
                display: flex; align-items: center; gap: 10px; width: 100%; margin-bottom: 8px;
                padding: 12px; border: 1px solid {border}; border-radius: 6px;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY}; font-size: 14px; text-align: left; cursor: pointer;
            ",
            onclick: move |e| on_select.call(e),
            span { style: "color: {border};", "{marker}" }
            "{label}"
        }
    }
}

#[component]
fn SummaryLine(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; margin-bottom: 8px; font-size: 14px;",
            span { style: "color: {TEXT_MUTED};", "{label}" }
            span { "{value}" }
        }
    }
}
