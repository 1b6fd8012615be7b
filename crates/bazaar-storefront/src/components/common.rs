use bazaar_commerce::prelude::*;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-label">{label}</p>
            <p class="stat-value">{value}</p>
            {hint.map(|h| view! { <p class="stat-hint">{h}</p> })}
        </div>
    }
}

/// Message with a call to action, used for empty lists and missing records.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] href: String,
    #[prop(into)] cta: String,
) -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 3rem;">
            <h2>{title}</h2>
            <p style="color: #666; margin: 0.5rem 0 1.5rem;">{message}</p>
            <a href=href class="btn">{cta}</a>
        </div>
    }
}

#[component]
pub fn Rating(rating: f32, reviews: u32) -> impl IntoView {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    let stars = format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled));
    view! {
        <span class="rating" title=format!("{rating:.1} out of 5")>
            <span style="color: #d4a017;">{stars}</span>
            " " {format!("{rating:.1}")} " (" {reviews.to_string()} ")"
        </span>
    }
}

/// Subtotal, shipping, tax, discount and total rows.
#[component]
pub fn SummaryRows(summary: CartSummary) -> impl IntoView {
    let shipping = if summary.free_shipping() {
        "FREE".to_string()
    } else {
        summary.shipping.display()
    };
    let discount = summary.has_discount().then(|| {
        let label = match &summary.applied_promo {
            Some(code) => format!("Discount ({code})"),
            None => "Discount".to_string(),
        };
        view! {
            <div class="summary-row" style="color: #2e7d32;">
                <span>{label}</span>
                <span>"-" {summary.discount.display()}</span>
            </div>
        }
    });

    view! {
        <div class="summary">
            <div class="summary-row">
                <span>"Subtotal (" {summary.item_count.to_string()} " items)"</span>
                <span>{summary.subtotal.display()}</span>
            </div>
            <div class="summary-row">
                <span>"Shipping"</span>
                <span>{shipping}</span>
            </div>
            <div class="summary-row">
                <span>"Taxes (GST)"</span>
                <span>{summary.taxes.display()}</span>
            </div>
            {discount}
            <div class="summary-row total">
                <strong>"Total"</strong>
                <strong>{summary.total.display()}</strong>
            </div>
        </div>
    }
}
