//! Cart Rows Component
//!
//! Header plus one row per cart line. Row buttons carry `data-id` and
//! `data-cart-action`; clicks are handled by a single delegated listener on
//! the items container, not by the rows themselves.

use cart_core::{CartAction, CartLine};
use leptos::prelude::*;

use crate::store::{store_lines, CartStore};

#[component]
pub fn CartRows(store: CartStore) -> impl IntoView {
    view! {
        <div class="cart__header">
            <div class="cart__item__col">"Product"</div>
            <div class="cart__item__col">"Price"</div>
            <div class="cart__item__col">"Quantity"</div>
            <div class="cart__item__col">"Total"</div>
            <div class="cart__item__col"></div>
        </div>
        // Keyed on the whole line so any changed field rebuilds its row
        <For
            each=move || store_lines(&store)
            key=|line| line.clone()
            children=move |line: CartLine| view! { <CartRow line=line /> }
        />
    }
}

#[component]
fn CartRow(line: CartLine) -> impl IntoView {
    let CartLine {
        id,
        name,
        image,
        unit_price,
        quantity,
        line_total,
    } = line;
    let alt = name.clone();
    let minus_id = id.clone();
    let plus_id = id.clone();

    view! {
        <div class="cart__item">
            <div class="cart__item__col cart__item__product">
                <img src=image alt=alt />
                <div class="cart__item__details">
                    <h4>{name}</h4>
                </div>
            </div>
            <div class="cart__item__col">{unit_price}</div>
            <div class="cart__item__col cart__item__quantity">
                <button
                    class="quantity__btn minus"
                    data-id=minus_id
                    data-cart-action={CartAction::DECREASE}
                >
                    "-"
                </button>
                <span>{quantity}</span>
                <button
                    class="quantity__btn plus"
                    data-id=plus_id
                    data-cart-action={CartAction::INCREASE}
                >
                    "+"
                </button>
            </div>
            <div class="cart__item__col">{line_total}</div>
            <div class="cart__item__col">
                <button class="remove__item" data-id=id data-cart-action={CartAction::REMOVE}>
                    <i class="ri-delete-bin-line"></i>
                </button>
            </div>
        </div>
    }
}
