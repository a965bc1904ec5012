//! Listing card for the home grid.

use leptos::prelude::*;

use crate::net::types::Item;
use crate::util::format::{location_label, price_per_day};

/// Clickable card; `on_open` receives the item id.
#[component]
pub fn EquipmentCard(item: Item, on_open: Callback<String>) -> impl IntoView {
    let id = item.id.clone();
    let media = match item.image.clone() {
        Some(src) => view! { <img src=src alt=item.name.clone() class="equipment-card__image"/> }.into_any(),
        None => view! { <div class="equipment-card__placeholder">"No image"</div> }.into_any(),
    };
    let location = location_label(item.location.as_deref()).to_owned();

    view! {
        <div class="equipment-card" on:click=move |_| on_open.run(id.clone())>
            <div class="equipment-card__media">{media}</div>
            <div class="equipment-card__body">
                <h3 class="equipment-card__name">{item.name.clone()}</h3>
                <p class="equipment-card__description">{item.description.clone().unwrap_or_default()}</p>
                <div class="equipment-card__footer">
                    <span class="equipment-card__price">{price_per_day(item.price_per_day)}</span>
                    <span class="equipment-card__location">{location}</span>
                </div>
            </div>
        </div>
    }
}
