use std::sync::Arc;

use leptos::prelude::*;

use crate::core::services::ensure_stylesheet;
use crate::features::data_table::column::{ColumnDef, TableRow};
use crate::features::data_table::skeleton::{
    animation_delay, column_width_class, skeleton_width_class, SKELETON_STYLES, SKELETON_STYLE_ID,
};
use crate::features::data_table::state::{
    BodyModel, PaginationState, SortState, TableController, TableOptions, PAGE_SIZE_OPTIONS,
};

/// Sortable, paginated table over any row type.
///
/// Passing `sorting` (or setting `manual_sorting`) hands sort authority to
/// the caller: header clicks are reported through `on_sorting_change` and the
/// table waits for the new value to come back. Pagination follows the same
/// rule with `pagination` / `manual_pagination`. In manual pagination mode the
/// caller slices `data` itself and supplies `page_count` and `total_count`.
#[component]
pub fn EnhancedDataTable<Row>(
    columns: Vec<ColumnDef<Row>>,
    #[prop(into)] data: Signal<Vec<Row>>,
    #[prop(default = 5)] page_size: usize,
    #[prop(default = true)] show_pagination: bool,
    #[prop(optional)] manual_pagination: bool,
    #[prop(optional, into)] page_count: MaybeProp<usize>,
    #[prop(optional, into)] pagination: Option<Signal<PaginationState>>,
    #[prop(optional, into)] on_pagination_change: Option<Callback<PaginationState>>,
    #[prop(optional, into)] sorting: Option<Signal<SortState>>,
    #[prop(optional, into)] on_sorting_change: Option<Callback<SortState>>,
    #[prop(optional)] manual_sorting: bool,
    #[prop(optional, into)] is_loading: MaybeProp<bool>,
    #[prop(optional, into)] total_count: MaybeProp<usize>,
    #[prop(optional, into)] on_row_click: Option<Callback<Row>>,
) -> impl IntoView
where
    Row: TableRow,
{
    let columns: Arc<[ColumnDef<Row>]> = columns.into();
    let controller = RwSignal::new(TableController::new(TableOptions {
        page_size,
        manual_pagination,
        manual_sorting,
        sorting: sorting.map(|s| s.get_untracked()),
        pagination: pagination.map(|p| p.get_untracked()),
    }));

    Effect::new(move |_| ensure_stylesheet(SKELETON_STYLE_ID, SKELETON_STYLES));

    if let Some(sorting) = sorting {
        Effect::new(move |_| {
            let value = sorting.get();
            controller.update(|c| c.sync_sorting(value));
        });
    }
    if let Some(pagination) = pagination {
        Effect::new(move |_| {
            let value = pagination.get();
            controller.update(|c| c.sync_pagination(value));
        });
    }

    let loading = move || is_loading.get().unwrap_or(false);

    let click_header = move |column_id: String, sortable: bool| {
        let proposal = controller
            .try_update(|c| c.click_header(&column_id, sortable))
            .flatten();
        let Some(next) = proposal else { return };
        match on_sorting_change {
            Some(callback) => callback.run(next),
            None if controller.with_untracked(|c| c.sorting_ownership().is_external()) => {
                web_sys::console::warn_1(
                    &"Sorting is controlled by the caller but no on_sorting_change handler was supplied".into(),
                );
            }
            None => {}
        }
    };

    let report_pagination = move |proposal: Option<PaginationState>| {
        if let (Some(next), Some(callback)) = (proposal, on_pagination_change) {
            callback.run(next);
        }
    };

    let current_page_count = move || {
        let rows = data.with(|d| d.len());
        controller.with(|c| c.page_count(rows, page_count.get()))
    };

    let header_cells = columns
        .iter()
        .map(|column| {
            let id = column.id.clone();
            let id_for_indicator = column.id.clone();
            let sortable = column.sortable;
            view! {
                <th
                    class=format!("data-table-header {}", column_width_class(&column.id))
                    class:sortable=sortable
                    on:click=move |_| click_header(id.clone(), sortable)
                >
                    <div class="data-table-header-content">
                        <span>{column.header.clone()}</span>
                        {move || {
                            controller
                                .with(|c| c.sorting().indicator(&id_for_indicator, sortable))
                                .map(|indicator| view! { <span class="sort-indicator">{indicator}</span> })
                        }}
                    </div>
                </th>
            }
        })
        .collect_view();

    let body_columns = Arc::clone(&columns);
    let body = move || {
        let model = data.with(|d| controller.with(|c| c.body(d, &body_columns, loading())));
        match model {
            BodyModel::Skeleton(rows) => (0..rows)
                .map(|row_index| {
                    let cells = body_columns
                        .iter()
                        .enumerate()
                        .map(|(column_index, column)| {
                            view! {
                                <td class=format!("data-table-cell {}", column_width_class(&column.id))>
                                    <div
                                        class=format!(
                                            "skeleton-bar skeleton-stream {}",
                                            skeleton_width_class(&column.id, row_index),
                                        )
                                        style=animation_delay(column_index)
                                    ></div>
                                </td>
                            }
                        })
                        .collect_view();
                    view! { <tr class="data-table-loading-row">{cells}</tr> }
                })
                .collect_view()
                .into_any(),
            BodyModel::Empty => view! {
                <tr>
                    <td class="data-table-empty" colspan=body_columns.len()>"No results."</td>
                </tr>
            }
            .into_any(),
            BodyModel::Rows(rows) => rows
                .into_iter()
                .enumerate()
                .map(|(index, row)| {
                    let cells = body_columns
                        .iter()
                        .map(|column| {
                            view! {
                                <td class=format!("data-table-cell {}", column_width_class(&column.id))>
                                    <div class="truncate">{column.render(&row)}</div>
                                </td>
                            }
                        })
                        .collect_view();
                    let stripe = if index % 2 == 0 { "row-even" } else { "row-odd" };
                    let key = row.row_key();
                    view! {
                        <tr
                            class=format!("data-table-row {}", stripe)
                            data-key=key
                            on:click=move |_| {
                                if let Some(callback) = on_row_click {
                                    callback.run(row.clone());
                                }
                            }
                        >
                            {cells}
                        </tr>
                    }
                })
                .collect_view()
                .into_any(),
        }
    };

    let footer = show_pagination.then(|| {
        let showing = move || {
            let rows = data.with(|d| d.len());
            controller.with(|c| {
                let total = c.display_total(rows, total_count.get().unwrap_or(0));
                let (from, to) = c.pagination().showing(total);
                (from, to, total)
            })
        };

        view! {
            <div class="data-table-footer">
                <div class="data-table-summary">
                    {move || {
                        if loading() {
                            view! { <div class="skeleton-bar skeleton-stream w-48"></div> }.into_any()
                        } else {
                            let (from, to, total) = showing();
                            view! {
                                "Showing " <span class="font-medium">{from}</span>
                                " to " <span class="font-medium">{to}</span>
                                " of " <span class="font-medium">{total}</span> " results"
                            }
                            .into_any()
                        }
                    }}
                </div>
                <div class="data-table-pager">
                    <button
                        class="pager-btn"
                        disabled=move || loading() || !controller.with(|c| c.pagination().can_previous())
                        on:click=move |_| {
                            let proposal = controller.try_update(|c| c.previous_page()).flatten();
                            report_pagination(proposal);
                        }
                    >
                        "Previous"
                    </button>
                    <span class="pager-position">
                        {move || {
                            if loading() {
                                view! { <div class="skeleton-bar skeleton-stream w-20"></div> }.into_any()
                            } else {
                                let index = controller.with(|c| c.pagination().page_index);
                                view! {
                                    "Page " <span class="font-medium">{index + 1}</span>
                                    " of " <span class="font-medium">{current_page_count()}</span>
                                }
                                .into_any()
                            }
                        }}
                    </span>
                    <button
                        class="pager-btn"
                        disabled=move || {
                            loading() || !controller.with(|c| c.pagination().can_next(current_page_count()))
                        }
                        on:click=move |_| {
                            let count = current_page_count();
                            let proposal = controller.try_update(|c| c.next_page(count)).flatten();
                            report_pagination(proposal);
                        }
                    >
                        "Next"
                    </button>
                    <label class="page-size-picker">
                        <span>"Show"</span>
                        <select
                            disabled=loading
                            prop:value=move || controller.with(|c| c.pagination().page_size.to_string())
                            on:change=move |ev| {
                                let Ok(size) = event_target_value(&ev).parse::<usize>() else { return };
                                let proposal = controller.try_update(|c| c.set_page_size(size));
                                report_pagination(proposal);
                            }
                        >
                            {PAGE_SIZE_OPTIONS
                                .iter()
                                .map(|size| view! { <option value=size.to_string()>{*size}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </div>
            </div>
        }
    });

    view! {
        <div class="data-table">
            <div class="data-table-scroll">
                <table class="data-table-grid" style="table-layout: fixed">
                    <thead>
                        <tr>{header_cells}</tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
            {footer}
        </div>
    }
}
