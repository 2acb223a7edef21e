use proptest::prelude::*;

use taskboard_ui::features::data_table::skeleton::skeleton_width_class;
use taskboard_ui::features::data_table::{
    BodyModel, CellValue, ColumnDef, PaginationState, SortDirection, SortState, TableController, TableOptions, TableRow,
};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    key: usize,
    score: i64,
}

impl TableRow for Row {
    fn row_key(&self) -> String {
        self.key.to_string()
    }
}

fn columns() -> Vec<ColumnDef<Row>> {
    vec![
        ColumnDef::new("score", "Score", |r: &Row| CellValue::Number(r.score as f64)),
        ColumnDef::new("key", "Key", |r: &Row| CellValue::text(r.key.to_string())),
        ColumnDef::new("notes", "Notes", |_: &Row| CellValue::Empty).sortable(false),
    ]
}

fn rows(scores: &[i64]) -> Vec<Row> {
    scores
        .iter()
        .enumerate()
        .map(|(key, &score)| Row { key, score })
        .collect()
}

fn internal(page_size: usize) -> TableController {
    TableController::new(TableOptions {
        page_size,
        ..TableOptions::default()
    })
}

proptest! {
    #[test]
    fn header_clicks_cycle_with_one_active_column(clicks in prop::collection::vec(0usize..3, 1..40)) {
        let ids = ["score", "key", "notes"];
        let mut controller = internal(5);

        for &pick in &clicks {
            let id = ids[pick];
            let before = controller.sorting().clone();
            let proposal = controller.click_header(id, id != "notes");

            if id == "notes" {
                prop_assert!(proposal.is_none());
                prop_assert_eq!(controller.sorting(), &before);
                continue;
            }

            let expected = match before.direction_for(id) {
                None => Some(SortDirection::Asc),
                Some(SortDirection::Asc) => Some(SortDirection::Desc),
                Some(SortDirection::Desc) => None,
            };
            prop_assert_eq!(controller.sorting().direction_for(id), expected);
            for other in ids.iter().filter(|other| **other != id) {
                prop_assert_eq!(controller.sorting().direction_for(other), None);
            }
        }
    }

    #[test]
    fn internal_pages_are_exact_slices(
        scores in prop::collection::vec(-1_000i64..1_000, 0..120),
        page_size in 1usize..25,
    ) {
        let data = rows(&scores);
        let columns = columns();
        let mut controller = internal(page_size);
        let page_count = controller.page_count(data.len(), None);
        prop_assert_eq!(page_count, data.len().div_ceil(page_size));

        for page_index in 0..page_count {
            let start = page_index * page_size;
            let end = ((page_index + 1) * page_size).min(data.len());
            prop_assert_eq!(controller.pagination().page_index, page_index);
            prop_assert_eq!(controller.row_model(&data, &columns), data[start..end].to_vec());
            controller.next_page(page_count);
        }
        prop_assert!(controller.next_page(page_count).is_none());
    }

    #[test]
    fn manual_modes_only_report_proposals(
        clicks in prop::collection::vec(any::<bool>(), 1..20),
        page_count in 2usize..10,
    ) {
        let sorting = SortState::unsorted();
        let pagination = PaginationState::new(10);
        let mut controller = TableController::new(TableOptions {
            page_size: 10,
            manual_pagination: true,
            manual_sorting: true,
            ..TableOptions::default()
        });

        for header in clicks {
            let id = if header { "score" } else { "key" };
            let proposal = controller.click_header(id, true);
            prop_assert_eq!(proposal, Some(sorting.toggled(id)));
            prop_assert_eq!(controller.sorting(), &sorting);

            prop_assert_eq!(controller.next_page(page_count), Some(pagination.next()));
            prop_assert_eq!(controller.set_page_size(20), pagination.with_page_size(20));
            prop_assert_eq!(controller.pagination(), pagination);
        }
    }

    #[test]
    fn client_sort_orders_by_accessor(scores in prop::collection::vec(-50i64..50, 0..60)) {
        let data = rows(&scores);
        let columns = columns();
        let mut controller = internal(data.len().max(1));
        controller.click_header("score", true);
        controller.click_header("score", true);

        let sorted = controller.row_model(&data, &columns);
        prop_assert!(sorted.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert_eq!(sorted.len(), data.len());
    }

    #[test]
    fn skeleton_pattern_repeats_every_three_rows(row in 0usize..1_000) {
        for column in ["title", "duedate", "status", "priority", "assignee_name"] {
            prop_assert_eq!(skeleton_width_class(column, row), skeleton_width_class(column, row + 3));
        }
    }
}

#[test]
fn empty_table_shows_zero_bounds() {
    let controller = internal(5);
    let data: Vec<Row> = Vec::new();

    assert!(controller.row_model(&data, &columns()).is_empty());
    assert_eq!(controller.page_count(0, None), 0);
    assert_eq!(controller.pagination().showing(controller.display_total(0, 0)), (0, 0));
}

#[test]
fn empty_table_renders_one_no_results_row() {
    let controller = internal(5);
    let data: Vec<Row> = Vec::new();
    assert_eq!(controller.body(&data, &columns(), false), BodyModel::Empty);
}

#[test]
fn loading_renders_one_placeholder_per_page_slot() {
    let controller = internal(5);
    let data = rows(&[4, 8, 15]);
    assert_eq!(controller.body(&data, &columns(), true), BodyModel::Skeleton(5));
    assert_eq!(controller.body(&[], &columns(), true), BodyModel::Skeleton(5));
    assert_eq!(controller.body(&data, &columns(), false), BodyModel::Rows(data.clone()));
}

#[test]
fn manual_pagination_trusts_caller_totals() {
    let controller = TableController::new(TableOptions {
        page_size: 10,
        manual_pagination: true,
        ..TableOptions::default()
    });
    let page = rows(&[3, 1, 2]);

    assert_eq!(controller.page_count(page.len(), Some(7)), 7);
    assert_eq!(controller.display_total(page.len(), 64), 64);
    assert_eq!(controller.row_model(&page, &columns()), page);
}
