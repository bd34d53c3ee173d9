// ============================================================================
// DATA TABLE - Tabla genérica ordenable
// ============================================================================
// Componente de presentación reutilizable: columnas tipadas, orden por
// click en cabecera, filas clicables, skeleton de carga y estado vacío.
// El orden se calcula sobre una copia; las filas de entrada no se tocan.
// ============================================================================

use std::cmp::Ordering;

use yew::prelude::*;

/// Rows shown while `loading` is set.
const SKELETON_ROWS: usize = 5;

/// Sortable/displayable value produced by a column accessor. The total
/// order is explicit: numbers before text, `Missing` after everything,
/// so absent values always sink to the bottom of an ascending sort.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn sort_cmp(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Number(a), Number(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (Number(_), Text(_)) => Ordering::Less,
            (Text(_), Number(_)) => Ordering::Greater,
            (Missing, Missing) => Ordering::Equal,
            (Missing, _) => Ordering::Greater,
            (_, Missing) => Ordering::Less,
        }
    }

    /// Raw cell text when the column has no custom renderer. Absent
    /// values render blank, never an error.
    pub fn display(&self) -> String {
        match self {
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Missing => String::new(),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u8> for CellValue {
    fn from(value: u8) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CellValue::Missing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Column descriptor. `value` feeds both sorting and the default cell
/// text; `render` overrides the cell when a column needs markup.
/// Plain function pointers keep columns `Copy` and capture-free.
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub value: fn(&T) -> CellValue,
    pub render: Option<fn(&T) -> Html>,
    pub sortable: bool,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, label: &'static str, value: fn(&T) -> CellValue) -> Self {
        Column {
            key,
            label,
            value,
            render: None,
            sortable: true,
        }
    }

    pub fn with_render(mut self, render: fn(&T) -> Html) -> Self {
        self.render = Some(render);
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

// Column identity is its key; accessors are not compared.
impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.label == other.label && self.sortable == other.sortable
    }
}

/// Header-click transition: a new column starts ascending, the active
/// column toggles direction.
pub fn next_sort(
    current: Option<(&'static str, SortDirection)>,
    clicked: &'static str,
) -> (&'static str, SortDirection) {
    match current {
        Some((key, direction)) if key == clicked => (clicked, direction.toggle()),
        _ => (clicked, SortDirection::Ascending),
    }
}

/// Stable sort over a derived copy; ties keep their input order.
pub fn sort_rows<T: Clone>(
    rows: &[T],
    value: fn(&T) -> CellValue,
    direction: SortDirection,
) -> Vec<T> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = value(a).sort_cmp(&value(b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Which body the table shows. Loading wins over data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyState {
    Skeleton,
    Empty,
    Rows,
}

fn body_state(loading: bool, row_count: usize) -> BodyState {
    if loading {
        BodyState::Skeleton
    } else if row_count == 0 {
        BodyState::Empty
    } else {
        BodyState::Rows
    }
}

#[derive(Properties)]
pub struct DataTableProps<T: PartialEq + Clone + 'static> {
    pub columns: Vec<Column<T>>,
    pub rows: Vec<T>,
    /// Unique row identity for keyed rendering; never used for sorting.
    pub key_extractor: fn(&T) -> String,
    #[prop_or_default]
    pub on_row_click: Option<Callback<T>>,
    #[prop_or_default]
    pub loading: bool,
}

// key_extractor is deliberately left out of the comparison.
impl<T: PartialEq + Clone + 'static> PartialEq for DataTableProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.rows == other.rows
            && self.on_row_click == other.on_row_click
            && self.loading == other.loading
    }
}

#[function_component]
pub fn DataTable<T>(props: &DataTableProps<T>) -> Html
where
    T: PartialEq + Clone + 'static,
{
    // Per-instance sort state; dies with the table.
    let sort = use_state(|| None::<(&'static str, SortDirection)>);

    let header_cells = props
        .columns
        .iter()
        .map(|column| {
            if !column.sortable {
                return html! { <th key={column.key}>{ column.label }</th> };
            }

            let onclick = {
                let sort = sort.clone();
                let key = column.key;
                Callback::from(move |_: MouseEvent| {
                    sort.set(Some(next_sort(*sort, key)));
                })
            };

            let indicator = match *sort {
                Some((key, direction)) if key == column.key => direction.glyph(),
                _ => "",
            };

            html! {
                <th key={column.key} class="sortable" {onclick}>
                    <span>{ column.label }</span>
                    <span class="sort-indicator">{ indicator }</span>
                </th>
            }
        })
        .collect::<Html>();

    let body = match body_state(props.loading, props.rows.len()) {
        BodyState::Skeleton => (0..SKELETON_ROWS)
            .map(|i| {
                html! {
                    <tr key={format!("skeleton-{}", i)} class="skeleton-row">
                        { for props.columns.iter().map(|column| html! {
                            <td key={column.key}><div class="skeleton"></div></td>
                        }) }
                    </tr>
                }
            })
            .collect::<Html>(),
        BodyState::Empty => html! {
            <tr class="empty-row">
                <td colspan={props.columns.len().to_string()} class="empty-state">
                    { "No data available" }
                </td>
            </tr>
        },
        BodyState::Rows => {
            let rows = match *sort {
                Some((key, direction)) => match props.columns.iter().find(|c| c.key == key) {
                    Some(column) => sort_rows(&props.rows, column.value, direction),
                    None => props.rows.clone(),
                },
                None => props.rows.clone(),
            };

            let interactive = props.on_row_click.is_some();

            rows.iter()
                .map(|row| {
                    let onclick = {
                        let on_row_click = props.on_row_click.clone();
                        let row = row.clone();
                        Callback::from(move |_: MouseEvent| {
                            if let Some(callback) = &on_row_click {
                                callback.emit(row.clone());
                            }
                        })
                    };

                    html! {
                        <tr
                            key={(props.key_extractor)(row)}
                            class={classes!(interactive.then_some("clickable"))}
                            {onclick}
                        >
                            { for props.columns.iter().map(|column| {
                                let content = match column.render {
                                    Some(render) => render(row),
                                    None => html! { { (column.value)(row).display() } },
                                };
                                html! { <td key={column.key}>{ content }</td> }
                            }) }
                        </tr>
                    }
                })
                .collect::<Html>()
        }
    };

    html! {
        <div class="data-table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>{ header_cells }</tr>
                </thead>
                <tbody>{ body }</tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Row {
        id: &'static str,
        value: f64,
        note: Option<&'static str>,
    }

    fn row(id: &'static str, value: f64) -> Row {
        Row {
            id,
            value,
            note: None,
        }
    }

    fn value_of(r: &Row) -> CellValue {
        CellValue::Number(r.value)
    }

    fn note_of(r: &Row) -> CellValue {
        CellValue::from(r.note)
    }

    fn ids(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn first_click_sorts_ascending() {
        // rows [{B,3},{A,1},{C,2}] sorted by value → [A, C, B]
        let rows = vec![row("B", 3.0), row("A", 1.0), row("C", 2.0)];
        let (key, direction) = next_sort(None, "value");
        assert_eq!((key, direction), ("value", SortDirection::Ascending));

        let sorted = sort_rows(&rows, value_of, direction);
        assert_eq!(ids(&sorted), vec!["A", "C", "B"]);
    }

    #[test]
    fn second_click_reverses() {
        let rows = vec![row("B", 3.0), row("A", 1.0), row("C", 2.0)];
        let (key, direction) = next_sort(Some(("value", SortDirection::Ascending)), "value");
        assert_eq!((key, direction), ("value", SortDirection::Descending));

        let sorted = sort_rows(&rows, value_of, direction);
        assert_eq!(ids(&sorted), vec!["B", "C", "A"]);
    }

    #[test]
    fn clicking_another_column_resets_to_ascending() {
        let next = next_sort(Some(("value", SortDirection::Descending)), "id");
        assert_eq!(next, ("id", SortDirection::Ascending));
    }

    #[test]
    fn ascending_and_descending_are_exact_reverses() {
        let rows = vec![row("D", 4.0), row("B", 2.0), row("A", 1.0), row("C", 3.0)];
        let ascending = sort_rows(&rows, value_of, SortDirection::Ascending);
        let descending = sort_rows(&rows, value_of, SortDirection::Descending);

        let mut reversed = descending.clone();
        reversed.reverse();
        assert_eq!(ascending, reversed);
    }

    #[test]
    fn sorting_twice_ascending_is_idempotent() {
        let rows = vec![row("B", 3.0), row("A", 1.0), row("C", 2.0)];
        let once = sort_rows(&rows, value_of, SortDirection::Ascending);
        let twice = sort_rows(&once, value_of, SortDirection::Ascending);
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_does_not_mutate_input() {
        let rows = vec![row("B", 3.0), row("A", 1.0)];
        let _ = sort_rows(&rows, value_of, SortDirection::Ascending);
        assert_eq!(ids(&rows), vec!["B", "A"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let rows = vec![row("first", 1.0), row("second", 1.0), row("third", 1.0)];
        let sorted = sort_rows(&rows, value_of, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec!["first", "second", "third"]);
    }

    #[test]
    fn missing_values_sort_last_ascending() {
        let rows = vec![
            Row { id: "none", value: 0.0, note: None },
            Row { id: "beta", value: 0.0, note: Some("beta") },
            Row { id: "alpha", value: 0.0, note: Some("alpha") },
        ];
        let sorted = sort_rows(&rows, note_of, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec!["alpha", "beta", "none"]);
    }

    #[test]
    fn numbers_order_before_text() {
        assert_eq!(
            CellValue::Number(999.0).sort_cmp(&CellValue::Text("1".to_string())),
            std::cmp::Ordering::Less
        );
    }

    #[test]
    fn missing_displays_blank() {
        assert_eq!(CellValue::Missing.display(), "");
        assert_eq!(CellValue::Number(5.2).display(), "5.2");
        assert_eq!(CellValue::Number(45.0).display(), "45");
    }

    #[test]
    fn loading_suppresses_rows_and_empty_state() {
        assert_eq!(body_state(true, 12), BodyState::Skeleton);
        assert_eq!(body_state(true, 0), BodyState::Skeleton);
    }

    #[test]
    fn zero_rows_fall_back_to_the_empty_state() {
        assert_eq!(body_state(false, 0), BodyState::Empty);
        assert_eq!(body_state(false, 3), BodyState::Rows);
    }
}
