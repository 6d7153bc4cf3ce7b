//! Ranked list panels
//!
//! Rank is the entry's position in the stored series, never a re-sort.

use leptos::prelude::*;
use pingu_charts::NO_DATA;
use pingu_core::{ranked, Category, Record};

/// "1200 sold", empty without a sales figure
pub fn sold_label(record: &Record) -> String {
    Category::TopProducts
        .metric()
        .and_then(|metric| record.get(metric))
        .map(|sales| format!("{sales} sold"))
        .unwrap_or_default()
}

/// "Shoes & Socks", falling back to the record label
pub fn basket_pair(record: &Record) -> String {
    match (record.text("item1"), record.text("item2")) {
        (Some(a), Some(b)) => format!("{a} & {b}"),
        _ => record.label().to_string(),
    }
}

pub fn basket_tag(record: &Record) -> String {
    format!("Bought together {}", record.text("freq").unwrap_or("-"))
}

#[component]
fn RankedItem(
    badge: String,
    name: String,
    detail: String,
    #[prop(optional_no_strip)] aside: Option<String>,
) -> impl IntoView {
    view! {
        <div class="product-item">
            <div class="product-rank">{badge}</div>
            <div class="product-info">
                <div class="product-name">{name}</div>
                <div class="product-sales">{detail}</div>
            </div>
            {aside.map(|aside| view! { <div class="product-revenue">{aside}</div> })}
        </div>
    }
}

#[component]
fn EmptyList() -> impl IntoView {
    view! { <div class="list-empty">{NO_DATA}</div> }
}

/// "#N  name  N sold  revenue"
#[component]
pub fn TopProductsList(#[prop(into)] records: Signal<Vec<Record>>) -> impl IntoView {
    view! {
        <div class="product-list">
            {move || records.with(|records| {
                if records.is_empty() {
                    return view! { <EmptyList /> }.into_any();
                }
                ranked(records)
                    .into_iter()
                    .map(|entry| {
                        let sold = sold_label(entry.record);
                        let revenue = entry.record.get("revenue").map(ToString::to_string);
                        view! {
                            <RankedItem
                                badge=entry.badge()
                                name=entry.record.label().to_string()
                                detail=sold
                                aside=revenue
                            />
                        }
                    })
                    .collect_view()
                    .into_any()
            })}
        </div>
    }
}

/// "#N  item1 & item2  Bought together freq"
#[component]
pub fn MarketBasketList(#[prop(into)] records: Signal<Vec<Record>>) -> impl IntoView {
    view! {
        <div class="product-list basket-list">
            {move || records.with(|records| {
                if records.is_empty() {
                    return view! { <EmptyList /> }.into_any();
                }
                ranked(records)
                    .into_iter()
                    .map(|entry| {
                        let pair = basket_pair(entry.record);
                        let tag = basket_tag(entry.record);
                        view! { <RankedItem badge=entry.badge() name=pair detail=tag /> }
                    })
                    .collect_view()
                    .into_any()
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pingu_core::{sample_registry, Category};

    #[test]
    fn test_top_product_labels() {
        let registry = sample_registry().unwrap();
        let products = registry.get(Category::TopProducts.name(), &[]);
        assert_eq!(sold_label(&products[0]), "1200 sold");
        assert_eq!(sold_label(&Record::new("bare")), "");
    }

    #[test]
    fn test_basket_labels() {
        let registry = sample_registry().unwrap();
        let pairs = registry.get(Category::MarketBasket.name(), &[]);
        assert_eq!(basket_pair(&pairs[0]), "Shoes & Socks");
        assert_eq!(basket_tag(&pairs[0]), "Bought together 85%");

        let partial = Record::new("Tea & Milk").with_text("item1", "Tea");
        assert_eq!(basket_pair(&partial), "Tea & Milk");
        assert_eq!(basket_tag(&partial), "Bought together -");
    }
}
