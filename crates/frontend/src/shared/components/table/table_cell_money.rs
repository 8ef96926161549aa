//! Ячейка таблицы с ценой
//!
//! ```rust,ignore
//! <TableCellMoney value=product.price currency=currency />
//! ```

use super::number_format::format_price;
use leptos::prelude::*;
use thaw::*;

/// Цена, выровненная по правому краю, с кодом валюты магазина
#[component]
pub fn TableCellMoney(
    value: f64,

    /// Код валюты (пусто = без суффикса)
    #[prop(into)]
    currency: Signal<String>,
) -> impl IntoView {
    view! {
        <TableCell class="text-right">
            <TableCellLayout>
                {move || currency.with(|c| format_price(value, c))}
            </TableCellLayout>
        </TableCell>
    }
}
