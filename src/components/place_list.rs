//! Place List Component
//!
//! Clickable entries for one recommended list. Selection is scoped to the
//! list: picking an entry only clears the previous pick in the same list.

use leptos::prelude::*;
use leptos_select_one::create_selection;

use crate::models::{Place, PlaceKind};

#[component]
pub fn PlaceList(
    kind: PlaceKind,
    places: Vec<Place>,
    #[prop(into)] on_pick: Callback<usize>,
) -> impl IntoView {
    let selection = create_selection();

    places
        .into_iter()
        .enumerate()
        .map(|(index, place)| {
            let details = place.details();
            view! {
                <div
                    class="place-item"
                    class:selected=move || selection.is_selected(index)
                    data-type=kind.as_str()
                    data-index=index.to_string()
                    on:click=move |_| {
                        selection.select(index);
                        on_pick.run(index);
                    }
                >
                    <div class="place-details">
                        <strong>{place.name}</strong>
                        <p>{details}</p>
                        {place.address.map(|address| view! { <p class="place-address">{address}</p> })}
                    </div>
                </div>
            }
        })
        .collect_view()
}
