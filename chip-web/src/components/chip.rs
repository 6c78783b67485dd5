//! Casino chip: resolved image with the face value on top

use leptos::prelude::*;
use shared::chip::{resolve, AssetRef, Denomination};

/// What a chip shows for a given value.
#[derive(Clone, Debug, PartialEq)]
pub struct ChipFace {
    pub label: String,
    pub asset: AssetRef,
}

impl ChipFace {
    pub fn new(value: Denomination) -> Self {
        Self {
            label: value.label(),
            asset: resolve(value),
        }
    }

    /// Inline style putting the chip image behind the label.
    pub fn style(&self) -> String {
        background_style(&self.asset)
    }
}

fn background_style(asset: &AssetRef) -> String {
    format!("background-image: {};", asset.css_url())
}

/// Forward one activation to the owner's handler.
///
/// Whatever the handler does, including panicking, is the owner's business.
pub fn activate(on_click: &Callback<()>) {
    on_click.run(());
}

#[component]
pub fn Chip(
    #[prop(into)] value: Denomination,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    let ChipFace { label, asset } = ChipFace::new(value);
    let style = background_style(&asset);

    view! {
        <div
            class="chip"
            role="button"
            data-value=value.value().to_string()
            style=style
            on:click=move |_| activate(&on_click)
        >
            {label}
        </div>
    }
}
